use nalgebra::{DMatrix, DVector, RealField};

use crate::{
    convergence::require_convergent, fixed_point, Error, IterativeSolver, Scheme, Solution,
    SolverConfig,
};

/// Successive over-relaxation: a Gauss-Seidel sweep blended with the previous value of each
/// component by the relaxation factor `omega`.
///
/// ```math
/// x[i] = (1 - w) x[i] + w (b[i] - sum_{j != i} a[i,j] x[j]) / a[i,i]
/// ```
///
/// Over-relaxation is intended for `1 < omega < 2`, but the factor is not restricted; `omega = 1`
/// is exactly Gauss-Seidel. Whether the iteration may run is decided by the spectral radius of
/// `(D + wL)⁻¹((1 - w)D - wU)` alone.
#[derive(Clone, Copy, Debug)]
pub struct Sor<T> {
    pub omega: T,
    pub config: SolverConfig<T>,
}

impl<T> Sor<T>
where
    T: RealField + Copy,
{
    pub fn new(omega: T, config: SolverConfig<T>) -> Self {
        Self { omega, config }
    }
}

impl<T> IterativeSolver<T> for Sor<T>
where
    T: RealField + Copy,
{
    fn name(&self) -> &'static str {
        "SOR"
    }

    fn precheck(&self, mat_a: &DMatrix<T>) -> Result<(), Error> {
        require_convergent(
            mat_a,
            &Scheme::Sor { omega: self.omega },
            self.config.tolerance,
        )
    }

    fn iterate(
        &self,
        mat_a: &DMatrix<T>,
        b: &DVector<T>,
        x0: &DVector<T>,
    ) -> Result<Solution<T>, Error> {
        let n = mat_a.nrows();
        let w = self.omega;

        fixed_point::iterate(self.name(), x0, &self.config, |_, x| {
            for i in 0..n {
                let mut s = T::zero();
                for j in 0..n {
                    if j != i {
                        s += mat_a[(i, j)] * x[j];
                    }
                }
                x[i] = (T::one() - w) * x[i] + w * (b[i] - s) / mat_a[(i, i)];
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use nalgebra::{dmatrix, dvector};

    use super::*;
    use crate::GaussSeidel;

    fn config() -> SolverConfig<f64> {
        SolverConfig::default().with_max_iterations(1000)
    }

    #[test_log::test]
    fn test_tridiagonal() {
        let mat_a = dmatrix![
            2.0, -1.0, 0.0;
            -1.0, 3.0, -1.0;
            0.0, -1.0, 2.0;
        ];
        let b = dvector![1.0, 8.0, -5.0];
        let x0 = dvector![0.55, 3.1350, -1.0257];

        let solution = Sor::new(1.1, config()).solve(&mat_a, &b, &x0).unwrap();
        assert_abs_diff_eq!(solution.x, dvector![2.0, 3.0, -1.0], epsilon = 1e-4);
    }

    #[test]
    fn test_symmetric_4x4() {
        let mat_a = dmatrix![
            0.76, -0.01, -0.14, -0.16;
            -0.01, 0.88, -0.03, 0.06;
            -0.14, -0.03, 1.01, -0.12;
            -0.16, 0.06, -0.12, 0.72;
        ];
        let b = dvector![0.68, 1.18, 0.12, 0.74];
        let x0 = dvector![0.0, 0.0, 0.0, 0.0];

        let solution = Sor::new(1.05, config()).solve(&mat_a, &b, &x0).unwrap();
        let expected = direct::gauss_solve(&mat_a, &b).unwrap();
        assert_abs_diff_eq!(solution.x, expected, epsilon = 1e-4);
    }

    #[test]
    fn test_unit_omega_matches_gauss_seidel() {
        let mat_a = dmatrix![
            4.0, 1.0, 0.0;
            1.0, 4.0, 1.0;
            0.0, 1.0, 4.0;
        ];
        let b = dvector![1.0, 2.0, 3.0];
        let x0 = dvector![0.0, 0.0, 0.0];

        let sor = Sor::new(1.0, config()).solve(&mat_a, &b, &x0).unwrap();
        let gs = GaussSeidel::new(config()).solve(&mat_a, &b, &x0).unwrap();

        assert_eq!(sor.iterations, gs.iterations);
        assert_abs_diff_eq!(sor.x, gs.x, epsilon = 1e-12);
    }

    #[test]
    fn test_omega_out_of_range() {
        // the spectral radius of the SOR matrix is at least |w - 1|
        let mat_a = dmatrix![
            4.0, 1.0;
            1.0, 4.0;
        ];
        let b = dvector![1.0, 1.0];
        let x0 = dvector![0.0, 0.0];

        assert!(matches!(
            Sor::new(2.5, config()).solve(&mat_a, &b, &x0),
            Err(Error::NotConvergent { method: "SOR", .. })
        ));
    }
}
