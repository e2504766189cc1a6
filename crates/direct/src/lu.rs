//! LU factorization without pivoting (Doolittle form).
//!
use nalgebra::{DMatrix, DVector, RealField};

use crate::{check_len, check_square, DirectSolver, Error};

/// Direct solver based on [`LuDecomposition`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Doolittle;

impl<T> DirectSolver<T> for Doolittle
where
    T: RealField + Copy,
{
    fn solve(&self, mat_a: &DMatrix<T>, b: &DVector<T>) -> Result<DVector<T>, Error> {
        lu_solve(mat_a, b)
    }
}

/// Factors `A` and solves `Ax = b` with one forward and one backward substitution.
pub fn lu_solve<T>(mat_a: &DMatrix<T>, b: &DVector<T>) -> Result<DVector<T>, Error>
where
    T: RealField + Copy,
{
    LuDecomposition::new(mat_a)?.solve(b)
}

/// The factors `A = L·U` of a square matrix, with `L` unit lower triangular and `U` upper
/// triangular.
#[derive(Clone, Debug)]
pub struct LuDecomposition<T>
where
    T: RealField + Copy,
{
    l: DMatrix<T>,
    u: DMatrix<T>,
}

impl<T> LuDecomposition<T>
where
    T: RealField + Copy,
{
    /// Performs the Doolittle factorization of `mat_a`.
    ///
    /// Row `k` of U and column `k` of L are computed alternately:
    ///
    /// ```math
    /// u[k,j] = a[k,j] - sum_{t<k} l[k,t] u[t,j],            j >= k
    /// l[i,k] = (a[i,k] - sum_{t<k} l[i,t] u[t,k]) / u[k,k],  i > k
    /// ```
    ///
    /// No rows are exchanged. If some `|u[k,k]|` is not larger than machine epsilon the matrix has
    /// no LU factorization without pivoting (or is singular) and `Error::SingularPivot { row: k }`
    /// is returned.
    pub fn new(mat_a: &DMatrix<T>) -> Result<Self, Error> {
        let n = check_square(mat_a)?;

        let mut l = DMatrix::<T>::identity(n, n);
        let mut u = DMatrix::<T>::zeros(n, n);

        for k in 0..n {
            for j in k..n {
                let mut s = T::zero();
                for t in 0..k {
                    s += l[(k, t)] * u[(t, j)];
                }
                u[(k, j)] = mat_a[(k, j)] - s;
            }

            let u_kk = u[(k, k)];
            if u_kk.abs() <= T::default_epsilon() {
                return Err(Error::SingularPivot { row: k });
            }

            for i in (k + 1)..n {
                let mut s = T::zero();
                for t in 0..k {
                    s += l[(i, t)] * u[(t, k)];
                }
                l[(i, k)] = (mat_a[(i, k)] - s) / u_kk;
            }
        }

        Ok(Self { l, u })
    }

    /// The unit lower triangular factor.
    pub fn l(&self) -> &DMatrix<T> {
        &self.l
    }

    /// The upper triangular factor.
    pub fn u(&self) -> &DMatrix<T> {
        &self.u
    }

    /// Solves `Ly = b` by forward substitution, then `Ux = y` by backward substitution.
    pub fn solve(&self, b: &DVector<T>) -> Result<DVector<T>, Error> {
        let n = self.u.nrows();
        check_len(n, b)?;

        let mut y = DVector::<T>::zeros(n);
        for i in 0..n {
            let mut s = T::zero();
            for j in 0..i {
                s += self.l[(i, j)] * y[j];
            }
            y[i] = b[i] - s;
        }

        // the diagonal of U was checked during the factorization
        let mut x = DVector::<T>::zeros(n);
        for i in (0..n).rev() {
            let mut s = T::zero();
            for j in (i + 1)..n {
                s += self.u[(i, j)] * x[j];
            }
            x[i] = (y[i] - s) / self.u[(i, i)];
        }

        Ok(x)
    }
}
