//! Dense direct solvers for square systems `Ax = b`.
//!
mod gauss;
mod lu;
pub mod norm;
mod traits;

pub use gauss::{gauss_solve, GaussElimination};
pub use lu::{lu_solve, Doolittle, LuDecomposition};
pub use traits::DirectSolver;

use nalgebra::{DMatrix, DVector, Scalar};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("A zero pivot was encountered while solving the system (row {row})")]
    SingularPivot { row: usize },

    #[error("The coefficient matrix must be square, got {nrows}x{ncols}")]
    NotSquare { nrows: usize, ncols: usize },

    #[error("Vector length {found} does not match the system dimension {expected}")]
    DimensionMismatch { expected: usize, found: usize },
}

/// Checks that `mat_a` is square and that `b` matches its dimension.
///
/// Returns the system dimension `n`.
pub fn check_system<T: Scalar>(mat_a: &DMatrix<T>, b: &DVector<T>) -> Result<usize, Error> {
    let n = check_square(mat_a)?;
    check_len(n, b)?;
    Ok(n)
}

pub fn check_square<T: Scalar>(mat_a: &DMatrix<T>) -> Result<usize, Error> {
    if !mat_a.is_square() {
        return Err(Error::NotSquare {
            nrows: mat_a.nrows(),
            ncols: mat_a.ncols(),
        });
    }
    Ok(mat_a.nrows())
}

pub fn check_len<T: Scalar>(n: usize, v: &DVector<T>) -> Result<(), Error> {
    if v.len() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            found: v.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use nalgebra::{dmatrix, dvector};

    use super::*;

    #[test]
    fn test_check_system() {
        let mat_a = dmatrix![1.0, 2.0; 3.0, 4.0];
        assert_eq!(check_system(&mat_a, &dvector![1.0, 1.0]), Ok(2));
        assert_eq!(
            check_system(&mat_a, &dvector![1.0, 1.0, 1.0]),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );

        let rect = dmatrix![1.0, 2.0, 3.0; 4.0, 5.0, 6.0];
        assert_eq!(
            check_system(&rect, &dvector![1.0, 1.0]),
            Err(Error::NotSquare { nrows: 2, ncols: 3 })
        );
    }
}
