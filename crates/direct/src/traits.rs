use nalgebra::{DMatrix, DVector, RealField};

use crate::Error;

pub trait DirectSolver<T>
where
    T: RealField + Copy,
{
    /// Solves the linear system `Ax = b` in a finite number of steps.
    ///
    /// ## Arguments
    /// * `mat_a` the square coefficient matrix A. It is never modified; solvers work on a private copy.
    /// * `b` the linear system right-hand side.
    ///
    /// ## Errors
    /// * `Error::NotSquare` / `Error::DimensionMismatch` if the shapes of `mat_a` and `b` disagree.
    /// * `Error::SingularPivot` if a pivot used for division vanishes.
    fn solve(&self, mat_a: &DMatrix<T>, b: &DVector<T>) -> Result<DVector<T>, Error>;
}
