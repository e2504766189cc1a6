//! The additive splitting `A = D + L + U` and the iteration matrices built from it.
use std::fmt;

use nalgebra::{DMatrix, RealField};

use crate::Error;

/// A stationary iteration scheme, identified by the splitting it uses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scheme<T> {
    /// `B = -D⁻¹(L+U)`
    Jacobi,
    /// `B = -(D+L)⁻¹U`
    GaussSeidel,
    /// `B = (D+wL)⁻¹((1-w)D - wU)`
    Sor { omega: T },
}

impl<T> Scheme<T> {
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Jacobi => "Jacobi",
            Scheme::GaussSeidel => "Gauss-Seidel",
            Scheme::Sor { .. } => "SOR",
        }
    }
}

impl<T> fmt::Display for Scheme<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Sor { omega } => write!(f, "SOR(w = {:?})", omega),
            _ => f.write_str(self.name()),
        }
    }
}

/// Diagonal, strictly lower and strictly upper parts of a square matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Splitting<T>
where
    T: RealField + Copy,
{
    pub d: DMatrix<T>,
    pub l: DMatrix<T>,
    pub u: DMatrix<T>,
}

impl<T> Splitting<T>
where
    T: RealField + Copy,
{
    /// Splits a square matrix.
    pub fn new(mat_a: &DMatrix<T>) -> Result<Self, Error> {
        let n = direct::check_square(mat_a)?;
        let part = |keep: fn(usize, usize) -> bool| {
            DMatrix::from_fn(n, n, |i, j| {
                if keep(i, j) {
                    mat_a[(i, j)]
                } else {
                    T::zero()
                }
            })
        };

        Ok(Self {
            d: part(|i, j| i == j),
            l: part(|i, j| i > j),
            u: part(|i, j| i < j),
        })
    }

    /// Builds the iteration matrix `B` of `scheme`, such that the iteration reads
    /// `x_{k+1} = B x_k + c`.
    pub fn iteration_matrix(&self, scheme: &Scheme<T>) -> Result<DMatrix<T>, Error> {
        let singular = || Error::SingularSplitting {
            method: scheme.name(),
        };

        let mat_b = match *scheme {
            Scheme::Jacobi => {
                let d_inv = self.d.clone().try_inverse().ok_or_else(singular)?;
                -(d_inv * (&self.l + &self.u))
            }
            Scheme::GaussSeidel => {
                let dl_inv = (&self.d + &self.l).try_inverse().ok_or_else(singular)?;
                -(dl_inv * &self.u)
            }
            Scheme::Sor { omega } => {
                let dl_inv = (&self.d + &self.l * omega)
                    .try_inverse()
                    .ok_or_else(singular)?;
                dl_inv * (&self.d * (T::one() - omega) - &self.u * omega)
            }
        };

        Ok(mat_b)
    }
}
