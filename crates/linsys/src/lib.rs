//! Solve dense square systems `Ax = b`, directly or iteratively, with explicit convergence
//! diagnostics.
//!
//! Every iterative entry point runs its pre-check first (spectral radius of the iteration matrix,
//! or the symmetric positive definite test for conjugate gradient) and returns an error without
//! iterating if it fails. Caller matrices and vectors are only ever borrowed immutably.
//!
//! ```
//! use linsys::{solve_direct, solve_gauss_seidel};
//! use nalgebra::{dmatrix, dvector};
//!
//! let a = dmatrix![2.0, -1.0, 0.0; -1.0, 3.0, -1.0; 0.0, -1.0, 2.0];
//! let b = dvector![1.0, 8.0, -5.0];
//!
//! let x = solve_direct(&a, &b)?;
//! assert!((x - dvector![2.0, 3.0, -1.0]).amax() < 1e-12);
//!
//! let solution = solve_gauss_seidel(&a, &b, &dvector![0.0, 0.0, 0.0])?;
//! assert!((solution.x - dvector![2.0, 3.0, -1.0]).amax() < 1e-4);
//! # Ok::<(), linsys::Error>(())
//! ```
use nalgebra::{DMatrix, DVector, RealField};
use thiserror::Error;

pub use direct::{
    gauss_solve, lu_solve, norm::ResidualNorm, DirectSolver, Doolittle, GaussElimination,
    LuDecomposition,
};
pub use iterative::{
    analyze, spectral_radius, ConjugateGradient, ConvergenceReport, GaussSeidel,
    IterativeSolver, Jacobi, Scheme, Solution, SolverConfig, Sor, Splitting, DEFAULT_TOLERANCE,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Direct(#[from] direct::Error),

    #[error(transparent)]
    Iterative(#[from] iterative::Error),
}

/// Solves `Ax = b` by Gaussian elimination with row interchanges.
pub fn solve_direct<T>(mat_a: &DMatrix<T>, b: &DVector<T>) -> Result<DVector<T>, Error>
where
    T: RealField + Copy,
{
    Ok(GaussElimination.solve(mat_a, b)?)
}

/// Solves `Ax = b` through the Doolittle factorization `A = LU`, without pivoting.
pub fn solve_lu<T>(mat_a: &DMatrix<T>, b: &DVector<T>) -> Result<DVector<T>, Error>
where
    T: RealField + Copy,
{
    Ok(Doolittle.solve(mat_a, b)?)
}

/// Jacobi iteration from `x0`, with the default tolerance and no iteration cap.
pub fn solve_jacobi<T>(
    mat_a: &DMatrix<T>,
    b: &DVector<T>,
    x0: &DVector<T>,
) -> Result<Solution<T>, Error>
where
    T: RealField + Copy,
{
    Ok(Jacobi::default().solve(mat_a, b, x0)?)
}

/// Gauss-Seidel iteration from `x0`, with the default tolerance and no iteration cap.
pub fn solve_gauss_seidel<T>(
    mat_a: &DMatrix<T>,
    b: &DVector<T>,
    x0: &DVector<T>,
) -> Result<Solution<T>, Error>
where
    T: RealField + Copy,
{
    Ok(GaussSeidel::default().solve(mat_a, b, x0)?)
}

/// Successive over-relaxation with factor `omega` from `x0`, with the default tolerance and no
/// iteration cap.
pub fn solve_sor<T>(
    mat_a: &DMatrix<T>,
    b: &DVector<T>,
    omega: T,
    x0: &DVector<T>,
) -> Result<Solution<T>, Error>
where
    T: RealField + Copy,
{
    Ok(Sor::new(omega, SolverConfig::default()).solve(mat_a, b, x0)?)
}

/// Conjugate gradient from `x0`, with the default tolerance and no iteration cap.
pub fn solve_conjugate_gradient<T>(
    mat_a: &DMatrix<T>,
    b: &DVector<T>,
    x0: &DVector<T>,
) -> Result<Solution<T>, Error>
where
    T: RealField + Copy,
{
    Ok(ConjugateGradient::default().solve(mat_a, b, x0)?)
}

fn default_tolerance<T: RealField + Copy>() -> T {
    SolverConfig::<T>::default().tolerance
}

/// `true` if the Jacobi iteration converges for `mat_a`.
pub fn check_jacobi_convergence<T>(mat_a: &DMatrix<T>) -> bool
where
    T: RealField + Copy,
{
    iterative::check_jacobi_convergence(mat_a, default_tolerance())
}

/// `true` if the Gauss-Seidel iteration converges for `mat_a`.
pub fn check_gauss_seidel_convergence<T>(mat_a: &DMatrix<T>) -> bool
where
    T: RealField + Copy,
{
    iterative::check_gauss_seidel_convergence(mat_a, default_tolerance())
}

/// `true` if successive over-relaxation with factor `omega` converges for `mat_a`.
pub fn check_sor_convergence<T>(mat_a: &DMatrix<T>, omega: T) -> bool
where
    T: RealField + Copy,
{
    iterative::check_sor_convergence(mat_a, omega, default_tolerance())
}

/// `true` if `mat_a` is symmetric with no negative eigenvalue.
pub fn check_spd<T>(mat_a: &DMatrix<T>) -> bool
where
    T: RealField + Copy,
{
    iterative::check_spd(mat_a)
}
