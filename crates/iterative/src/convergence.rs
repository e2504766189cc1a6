//! Convergence pre-checks: spectral radius of the iteration matrix for the stationary methods, and
//! the symmetric positive definite test for conjugate gradient.
use nalgebra::{DMatrix, RealField};

use crate::{splitting::Scheme, Error, Splitting};

/// Outcome of the spectral radius test for one scheme and matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvergenceReport<T> {
    pub spectral_radius: T,
    pub convergent: bool,
}

/// Largest modulus among the (possibly complex) eigenvalues of `mat_b`. Zero for an empty matrix.
pub fn spectral_radius<T>(mat_b: &DMatrix<T>) -> T
where
    T: RealField + Copy,
{
    if mat_b.is_empty() {
        return T::zero();
    }

    mat_b
        .complex_eigenvalues()
        .iter()
        .map(|lambda| (lambda.re * lambda.re + lambda.im * lambda.im).sqrt())
        .fold(T::zero(), |acc, modulus| acc.max(modulus))
}

/// The acceptance rule for a spectral radius `rho`.
///
/// Rejects when `rho - 1 >= eps` or `1 - rho <= eps`, so any radius above `1 - eps` is rejected,
/// including radii slightly below one.
pub fn is_convergent_radius<T>(rho: T, eps: T) -> bool
where
    T: RealField + Copy,
{
    !(rho - T::one() >= eps || T::one() - rho <= eps)
}

/// Builds the iteration matrix of `scheme` for `mat_a` and applies the spectral radius test.
///
/// A rejection is logged at `warn` level.
pub fn analyze<T>(
    mat_a: &DMatrix<T>,
    scheme: &Scheme<T>,
    eps: T,
) -> Result<ConvergenceReport<T>, Error>
where
    T: RealField + Copy,
{
    let mat_b = Splitting::new(mat_a)?.iteration_matrix(scheme)?;
    let spectral_radius = spectral_radius(&mat_b);
    let convergent = is_convergent_radius(spectral_radius, eps);

    if !convergent {
        log::warn!(
            "{}: spectral radius {:?} >= 1, the iteration does not converge",
            scheme,
            spectral_radius
        );
    }

    Ok(ConvergenceReport {
        spectral_radius,
        convergent,
    })
}

/// Fails with `Error::NotConvergent` unless `scheme` passes the spectral radius test for `mat_a`.
pub(crate) fn require_convergent<T>(
    mat_a: &DMatrix<T>,
    scheme: &Scheme<T>,
    eps: T,
) -> Result<(), Error>
where
    T: RealField + Copy,
{
    let report = analyze(mat_a, scheme, eps)?;
    if report.convergent {
        Ok(())
    } else {
        Err(Error::NotConvergent {
            method: scheme.name(),
            spectral_radius: nalgebra::try_convert(report.spectral_radius).unwrap_or(f64::NAN),
        })
    }
}

fn check<T>(mat_a: &DMatrix<T>, scheme: Scheme<T>, eps: T) -> bool
where
    T: RealField + Copy,
{
    match analyze(mat_a, &scheme, eps) {
        Ok(report) => report.convergent,
        Err(e) => {
            log::warn!("{}: {}", scheme, e);
            false
        }
    }
}

/// Returns `true` if the Jacobi iteration converges for `mat_a`.
pub fn check_jacobi_convergence<T>(mat_a: &DMatrix<T>, eps: T) -> bool
where
    T: RealField + Copy,
{
    check(mat_a, Scheme::Jacobi, eps)
}

/// Returns `true` if the Gauss-Seidel iteration converges for `mat_a`.
pub fn check_gauss_seidel_convergence<T>(mat_a: &DMatrix<T>, eps: T) -> bool
where
    T: RealField + Copy,
{
    check(mat_a, Scheme::GaussSeidel, eps)
}

/// Returns `true` if successive over-relaxation with factor `omega` converges for `mat_a`.
pub fn check_sor_convergence<T>(mat_a: &DMatrix<T>, omega: T, eps: T) -> bool
where
    T: RealField + Copy,
{
    check(mat_a, Scheme::Sor { omega }, eps)
}

/// Returns `true` if `mat_a` is exactly symmetric and none of its eigenvalues is negative.
///
/// The empty matrix passes.
pub fn check_spd<T>(mat_a: &DMatrix<T>) -> bool
where
    T: RealField + Copy,
{
    if !mat_a.is_square() || mat_a.transpose() != *mat_a {
        log::warn!("A must be a symmetric and positive definite matrix (not symmetric)");
        return false;
    }

    if mat_a.is_empty() {
        return true;
    }

    if mat_a
        .symmetric_eigenvalues()
        .iter()
        .any(|&lambda| lambda < T::zero())
    {
        log::warn!("A must be a symmetric and positive definite matrix (negative eigenvalue)");
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::dmatrix;

    use super::*;
    use crate::DEFAULT_TOLERANCE as EPS;

    fn probe() -> DMatrix<f64> {
        dmatrix![
            2.0, -1.0, 1.0;
            1.0, 1.0, 1.0;
            1.0, 1.0, -2.0;
        ]
    }

    fn tridiagonal() -> DMatrix<f64> {
        dmatrix![
            2.0, -1.0, 0.0;
            -1.0, 3.0, -1.0;
            0.0, -1.0, 2.0;
        ]
    }

    #[test]
    fn test_radius_boundary() {
        assert!(is_convergent_radius(0.0, EPS));
        assert!(is_convergent_radius(0.5, EPS));
        assert!(is_convergent_radius(1.0 - 2e-6, EPS));

        assert!(!is_convergent_radius(1.0 - 5e-7, EPS));
        assert!(!is_convergent_radius(1.0, EPS));
        assert!(!is_convergent_radius(1.0 + 5e-7, EPS));
        assert!(!is_convergent_radius(1.5, EPS));
    }

    #[test]
    fn test_spectral_radius_complex() {
        // rotation by 90 degrees scaled by 0.5: eigenvalues ±0.5i
        let mat_b = dmatrix![0.0, -0.5; 0.5, 0.0];
        assert_relative_eq!(spectral_radius(&mat_b), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_spectral_radius_real() {
        let mat_b = dmatrix![-3.0, 0.0; 0.0, 2.0];
        assert_relative_eq!(spectral_radius(&mat_b), 3.0, epsilon = 1e-12);
    }

    #[test_log::test]
    fn test_probe_matrix() {
        // Jacobi eigenvalues are 0 and ±i√1.25
        let jacobi = analyze(&probe(), &Scheme::Jacobi, EPS).unwrap();
        assert_relative_eq!(jacobi.spectral_radius, 1.25f64.sqrt(), epsilon = 1e-6);
        assert!(!jacobi.convergent);
        assert!(!check_jacobi_convergence(&probe(), EPS));

        // Gauss-Seidel iteration matrix is upper triangular with diagonal (0, -1/2, -1/2)
        let gs = analyze(&probe(), &Scheme::GaussSeidel, EPS).unwrap();
        assert_relative_eq!(gs.spectral_radius, 0.5, epsilon = 1e-6);
        assert!(gs.convergent);
        assert!(check_gauss_seidel_convergence(&probe(), EPS));
    }

    #[test]
    fn test_tridiagonal() {
        let jacobi = analyze(&tridiagonal(), &Scheme::Jacobi, EPS).unwrap();
        assert_relative_eq!(
            jacobi.spectral_radius,
            (1.0f64 / 3.0).sqrt(),
            epsilon = 1e-9
        );

        let gs = analyze(&tridiagonal(), &Scheme::GaussSeidel, EPS).unwrap();
        assert_relative_eq!(gs.spectral_radius, 1.0 / 3.0, epsilon = 1e-9);

        assert!(check_sor_convergence(&tridiagonal(), 1.1, EPS));
        assert!(!check_sor_convergence(&tridiagonal(), 2.5, EPS));
    }

    #[test]
    fn test_unit_radius_rejected() {
        // Jacobi eigenvalues are ±1
        let mat_a = dmatrix![1.0, 1.0; 1.0, 1.0];
        assert!(!check_jacobi_convergence(&mat_a, EPS));
    }

    #[test]
    fn test_singular_splitting_reports_false() {
        let mat_a = dmatrix![0.0, 1.0; 1.0, 0.0];
        assert!(!check_jacobi_convergence(&mat_a, EPS));
        assert!(!check_gauss_seidel_convergence(&mat_a, EPS));
        assert!(matches!(
            analyze(&mat_a, &Scheme::GaussSeidel, EPS),
            Err(Error::SingularSplitting { .. })
        ));
    }

    #[test]
    fn test_not_square() {
        let mat_a = dmatrix![1.0, 0.0, 0.0; 0.0, 1.0, 0.0];
        assert!(matches!(
            analyze(&mat_a, &Scheme::Jacobi, EPS),
            Err(Error::Direct(direct::Error::NotSquare { nrows: 2, ncols: 3 }))
        ));
        assert!(!check_spd(&mat_a));
    }

    #[test]
    fn test_empty() {
        let mat_a = DMatrix::<f64>::zeros(0, 0);
        assert_eq!(spectral_radius(&mat_a), 0.0);

        let report = analyze(&mat_a, &Scheme::GaussSeidel, EPS).unwrap();
        assert_eq!(report.spectral_radius, 0.0);
        assert!(report.convergent);

        assert!(check_jacobi_convergence(&mat_a, EPS));
        assert!(check_gauss_seidel_convergence(&mat_a, EPS));
        assert!(check_sor_convergence(&mat_a, 1.5, EPS));
        assert!(check_spd(&mat_a));
    }

    #[test]
    fn test_spd() {
        assert!(check_spd(&tridiagonal()));
        assert!(check_spd(&DMatrix::<f64>::identity(4, 4)));

        // symmetric, eigenvalues 3 and -1
        assert!(!check_spd(&dmatrix![1.0, 2.0; 2.0, 1.0]));
        // not symmetric
        assert!(!check_spd(&probe()));
    }
}
