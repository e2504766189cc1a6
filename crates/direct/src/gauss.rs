//! Gaussian elimination with row interchanges, followed by back substitution.
//!
use nalgebra::{DMatrix, DVector, RealField};

use crate::{check_system, DirectSolver, Error};

/// Direct solver based on [`gauss_solve`].
#[derive(Clone, Copy, Debug, Default)]
pub struct GaussElimination;

impl<T> DirectSolver<T> for GaussElimination
where
    T: RealField + Copy,
{
    fn solve(&self, mat_a: &DMatrix<T>, b: &DVector<T>) -> Result<DVector<T>, Error> {
        gauss_solve(mat_a, b)
    }
}

/// Solves `Ax = b` by forward elimination and back substitution.
///
/// For each pivot column `i`, every row `j > i` is visited in order. If `a[j,i] > a[i,i]` the two
/// rows are exchanged (in both A and b) before row `j` is eliminated, so later rows compare against
/// the new pivot. Note that the comparison is on the raw values and not on their magnitude, so a
/// large negative entry never displaces a small positive pivot.
///
/// Rows whose entry in column `i` is exactly zero are left untouched.
///
/// Returns `Error::SingularPivot` if a pivot used for division is zero, either during elimination
/// or during back substitution.
pub fn gauss_solve<T>(mat_a: &DMatrix<T>, b: &DVector<T>) -> Result<DVector<T>, Error>
where
    T: RealField + Copy,
{
    let n = check_system(mat_a, b)?;

    let mut mat_a = mat_a.clone();
    let mut b = b.clone();

    // forward elimination
    for i in 0..n.saturating_sub(1) {
        for j in (i + 1)..n {
            if mat_a[(j, i)] > mat_a[(i, i)] {
                log::trace!("gauss_solve: swapping rows {} and {}", i, j);
                mat_a.swap_rows(i, j);
                b.swap_rows(i, j);
            }

            if mat_a[(j, i)] != T::zero() {
                let pivot = mat_a[(i, i)];
                if pivot == T::zero() {
                    return Err(Error::SingularPivot { row: i });
                }

                // row_j = row_j - m * row_i, columns i..n
                let m = mat_a[(j, i)] / pivot;
                for k in i..n {
                    let a_ik = mat_a[(i, k)];
                    mat_a[(j, k)] -= m * a_ik;
                }
                let b_i = b[i];
                b[j] -= m * b_i;
            }
        }
    }

    dense_back_substitute(&mat_a, &mut b)?;
    Ok(b)
}

/// Solves the upper triangular system held in the upper part of `mat_u`, in place in `b`.
fn dense_back_substitute<T>(mat_u: &DMatrix<T>, b: &mut DVector<T>) -> Result<(), Error>
where
    T: RealField + Copy,
{
    let n = mat_u.nrows();

    for k in (0..n).rev() {
        let mut s = T::zero();
        for t in (k + 1)..n {
            s += mat_u[(k, t)] * b[t];
        }

        let pivot = mat_u[(k, k)];
        if pivot == T::zero() {
            return Err(Error::SingularPivot { row: k });
        }
        b[k] = (b[k] - s) / pivot;
    }

    Ok(())
}
