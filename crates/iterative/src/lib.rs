//! Iterative solvers for dense square systems, each gated by a convergence pre-check.
//!
//! The stationary methods ([`Jacobi`], [`GaussSeidel`], [`Sor`]) only iterate if the spectral
//! radius of their iteration matrix passes [`is_convergent_radius`]. [`ConjugateGradient`] only
//! iterates on symmetric positive definite matrices.
use nalgebra::{DVector, RealField};
use thiserror::Error;

mod cg;
pub mod config;
pub mod convergence;
mod fixed_point;
mod gauss_seidel;
mod jacobi;
mod sor;
pub mod splitting;
pub mod traits;

pub use cg::ConjugateGradient;
pub use config::{SolverConfig, DEFAULT_TOLERANCE};
pub use convergence::{
    analyze, check_gauss_seidel_convergence, check_jacobi_convergence, check_sor_convergence,
    check_spd, is_convergent_radius, spectral_radius, ConvergenceReport,
};
pub use gauss_seidel::GaussSeidel;
pub use jacobi::Jacobi;
pub use sor::Sor;
pub use splitting::{Scheme, Splitting};
pub use traits::IterativeSolver;

#[derive(Debug, Error)]
pub enum Error {
    /// The spectral radius test rejected the iteration matrix; no iteration was attempted.
    #[error("The {method} iteration does not converge for this matrix (spectral radius {spectral_radius:.6})")]
    NotConvergent {
        method: &'static str,
        spectral_radius: f64,
    },

    /// Conjugate gradient requires a symmetric matrix with non-negative eigenvalues.
    #[error("The coefficient matrix must be symmetric and positive definite")]
    NotSymmetricPositiveDefinite,

    /// The matrix being inverted to form the iteration matrix is singular.
    #[error("The splitting matrix of the {method} iteration is not invertible")]
    SingularSplitting { method: &'static str },

    /// A search direction with `pᵗAp = 0` was produced.
    #[error("Conjugate gradient broke down at iteration {iteration}: the search direction has zero curvature")]
    Breakdown { iteration: usize },

    /// The configured iteration cap was reached before the update norm fell below tolerance.
    #[error("No convergence after {iterations} iterations")]
    MaxIterations { iterations: usize },

    #[error(transparent)]
    Direct(#[from] direct::Error),
}

/// Result of a successful iterative solve.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<T>
where
    T: RealField + Copy,
{
    /// The final iterate
    pub x: DVector<T>,
    /// Number of completed iterations
    pub iterations: usize,
}
