use nalgebra::{DMatrix, DVector, RealField};

use direct::norm::ResidualNorm;

use crate::{Error, Solution};

pub trait IterativeSolver<T>
where
    T: RealField + Copy,
{
    /// Name of the method, used in diagnostics.
    fn name(&self) -> &'static str;

    /// The convergence pre-check. Runs once per solve, before any iteration.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - the iteration is known to converge for `mat_a`.
    /// * `Err(Error::NotConvergent)` or `Err(Error::NotSymmetricPositiveDefinite)` - it is not, and
    ///     no iteration must be attempted.
    fn precheck(&self, mat_a: &DMatrix<T>) -> Result<(), Error>;

    /// Runs the iteration from `x0` without any validation.
    fn iterate(
        &self,
        mat_a: &DMatrix<T>,
        b: &DVector<T>,
        x0: &DVector<T>,
    ) -> Result<Solution<T>, Error>;

    /// Solves `Ax = b` starting from the initial guess `x0`.
    ///
    /// Validates the shapes of `mat_a`, `b` and `x0`, runs [`Self::precheck`] and then iterates. The
    /// caller's matrix and vectors are never modified.
    ///
    /// # Errors
    ///
    /// * `Err(Error::Direct)` - the shapes disagree.
    /// * `Err(Error::NotConvergent)`, `Err(Error::NotSymmetricPositiveDefinite)` or
    ///     `Err(Error::SingularSplitting)` - the pre-check failed.
    /// * `Err(Error::MaxIterations)` - an iteration cap was configured and reached.
    fn solve(
        &self,
        mat_a: &DMatrix<T>,
        b: &DVector<T>,
        x0: &DVector<T>,
    ) -> Result<Solution<T>, Error> {
        let n = direct::check_system(mat_a, b)?;
        direct::check_len(n, x0)?;

        self.precheck(mat_a)?;
        let solution = self.iterate(mat_a, b, x0)?;

        log::debug!(
            "{} converged in {} iterations, |Ax - b| = {:?}",
            self.name(),
            solution.iterations,
            mat_a.residual_norm(&solution.x, b)
        );
        Ok(solution)
    }
}
