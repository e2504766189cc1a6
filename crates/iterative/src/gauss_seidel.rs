use nalgebra::{DMatrix, DVector, RealField};

use crate::{
    convergence::require_convergent, fixed_point, Error, IterativeSolver, Scheme, Solution,
    SolverConfig,
};

/// Gauss-Seidel iteration. Same update as [`crate::Jacobi`], but performed in place, so later
/// components of a sweep already see the updated earlier ones.
#[derive(Clone, Copy, Debug)]
pub struct GaussSeidel<T> {
    pub config: SolverConfig<T>,
}

impl<T> GaussSeidel<T>
where
    T: RealField + Copy,
{
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }
}

impl<T> Default for GaussSeidel<T>
where
    T: RealField + Copy,
{
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl<T> IterativeSolver<T> for GaussSeidel<T>
where
    T: RealField + Copy,
{
    fn name(&self) -> &'static str {
        "Gauss-Seidel"
    }

    fn precheck(&self, mat_a: &DMatrix<T>) -> Result<(), Error> {
        require_convergent(mat_a, &Scheme::GaussSeidel, self.config.tolerance)
    }

    fn iterate(
        &self,
        mat_a: &DMatrix<T>,
        b: &DVector<T>,
        x0: &DVector<T>,
    ) -> Result<Solution<T>, Error> {
        let n = mat_a.nrows();

        fixed_point::iterate(self.name(), x0, &self.config, |_, x| {
            for i in 0..n {
                let mut s = T::zero();
                for j in 0..n {
                    if j != i {
                        s += mat_a[(i, j)] * x[j];
                    }
                }
                x[i] = (b[i] - s) / mat_a[(i, i)];
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use nalgebra::{dmatrix, dvector};

    use super::*;
    use crate::Jacobi;

    fn config() -> SolverConfig<f64> {
        SolverConfig::default().with_max_iterations(1000)
    }

    fn tridiagonal() -> DMatrix<f64> {
        dmatrix![
            2.0, -1.0, 0.0;
            -1.0, 3.0, -1.0;
            0.0, -1.0, 2.0;
        ]
    }

    #[test_log::test]
    fn test_tridiagonal() {
        let b = dvector![1.0, 8.0, -5.0];
        let x0 = dvector![0.5, 2.8333, -1.0833];

        let solution = GaussSeidel::new(config())
            .solve(&tridiagonal(), &b, &x0)
            .unwrap();
        assert_abs_diff_eq!(solution.x, dvector![2.0, 3.0, -1.0], epsilon = 1e-4);
    }

    #[test]
    fn test_uses_updated_components() {
        // second component sees x[0] = 1 from the same sweep: (8 - 1) / 4
        let mat_a = dmatrix![
            4.0, 1.0;
            1.0, 4.0;
        ];
        let b = dvector![4.0, 8.0];
        let x0 = dvector![0.0, 0.0];

        let solution = GaussSeidel::new(SolverConfig::new(f64::INFINITY))
            .iterate(&mat_a, &b, &x0)
            .unwrap();

        assert_eq!(solution.iterations, 1);
        assert_eq!(solution.x, dvector![1.0, 1.75]);
    }

    #[test]
    fn test_fewer_iterations_than_jacobi() {
        let b = dvector![1.0, 8.0, -5.0];
        let x0 = dvector![0.0, 0.0, 0.0];

        let gs = GaussSeidel::new(config())
            .solve(&tridiagonal(), &b, &x0)
            .unwrap();
        let jacobi = Jacobi::new(config()).solve(&tridiagonal(), &b, &x0).unwrap();

        assert!(gs.iterations <= jacobi.iterations);
        assert_abs_diff_eq!(gs.x, jacobi.x, epsilon = 1e-4);
    }

    #[test]
    fn test_probe_matrix_converges() {
        // Jacobi rejects this matrix, Gauss-Seidel (spectral radius 1/2) accepts it
        let mat_a = dmatrix![
            2.0, -1.0, 1.0;
            1.0, 1.0, 1.0;
            1.0, 1.0, -2.0;
        ];
        let x_exact = dvector![1.0, -1.0, 2.0];
        let b = &mat_a * &x_exact;
        let x0 = dvector![0.0, 0.0, 0.0];

        let solution = GaussSeidel::new(config()).solve(&mat_a, &b, &x0).unwrap();
        assert_abs_diff_eq!(solution.x, x_exact, epsilon = 1e-4);
    }

    #[test]
    fn test_not_convergent() {
        // Gauss-Seidel matrix has eigenvalues 0 and 4
        let mat_a = dmatrix![
            1.0, 2.0;
            2.0, 1.0;
        ];
        let b = dvector![1.0, 1.0];
        let x0 = dvector![0.0, 0.0];

        assert!(matches!(
            GaussSeidel::new(config()).solve(&mat_a, &b, &x0),
            Err(Error::NotConvergent {
                method: "Gauss-Seidel",
                ..
            })
        ));
    }
}
