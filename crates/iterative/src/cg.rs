//! CG (Conjugate Gradient) solver
//!
//! Applicable to symmetric positive definite matrices only, which is verified before iterating.
use nalgebra::{DMatrix, DVector, RealField};

use crate::{convergence::check_spd, Error, IterativeSolver, Solution, SolverConfig};

/// Conjugate gradient method.
///
/// Stops when the update `‖x_new - x_old‖₂` is at or below the tolerance, or as soon as the residual
/// is exactly zero. In exact arithmetic an `n×n` system is solved in at most `n` iterations, so in
/// floating point the step confirming convergence is usually the `n+1`-th; no cap is applied unless
/// `config.max_iterations` is set.
#[derive(Clone, Copy, Debug)]
pub struct ConjugateGradient<T> {
    pub config: SolverConfig<T>,
}

impl<T> ConjugateGradient<T>
where
    T: RealField + Copy,
{
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }
}

impl<T> Default for ConjugateGradient<T>
where
    T: RealField + Copy,
{
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl<T> IterativeSolver<T> for ConjugateGradient<T>
where
    T: RealField + Copy,
{
    fn name(&self) -> &'static str {
        "Conjugate gradient"
    }

    fn precheck(&self, mat_a: &DMatrix<T>) -> Result<(), Error> {
        if check_spd(mat_a) {
            Ok(())
        } else {
            Err(Error::NotSymmetricPositiveDefinite)
        }
    }

    fn iterate(
        &self,
        mat_a: &DMatrix<T>,
        b: &DVector<T>,
        x0: &DVector<T>,
    ) -> Result<Solution<T>, Error> {
        let tol = self.config.tolerance;

        let mut x = x0.clone();
        let mut r = b - mat_a * &x;
        let mut rho = r.dot(&r);
        let mut iterations = 0;

        if rho == T::zero() {
            log::debug!("{}: initial guess already solves the system", self.name());
            return Ok(Solution { x, iterations });
        }

        let mut p = r.clone();

        loop {
            if !self.config.allows(iterations) {
                log::warn!(
                    "{}: no convergence after {} iterations",
                    self.name(),
                    iterations
                );
                return Err(Error::MaxIterations { iterations });
            }

            // q = A * p
            let q = mat_a * &p;
            let pq = p.dot(&q);
            if pq == T::zero() {
                return Err(Error::Breakdown {
                    iteration: iterations + 1,
                });
            }

            let alpha = rho / pq;

            // x = x + alpha * p
            let step = &p * alpha;
            x += &step;

            // r = r - alpha * q
            r -= &q * alpha;
            let rho_new = r.dot(&r);
            iterations += 1;

            let delta = step.norm();
            log::trace!(
                "{} iteration {}: |x - y| = {:?}, |r| = {:?}",
                self.name(),
                iterations,
                delta,
                rho_new.sqrt()
            );

            // an exactly zero residual would make the next alpha 0/0
            if delta <= tol || rho_new == T::zero() {
                break;
            }

            let beta = rho_new / rho;
            rho = rho_new;

            // p = r + beta * p
            p = &r + &p * beta;
        }

        Ok(Solution { x, iterations })
    }
}
