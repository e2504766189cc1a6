use nalgebra::{DMatrix, DVector, RealField};

use crate::{
    convergence::require_convergent, fixed_point, Error, IterativeSolver, Scheme, Solution,
    SolverConfig,
};

/// Jacobi iteration: every component of a sweep is computed from the previous iterate only.
///
/// ```math
/// x[i] = (b[i] - sum_{j != i} a[i,j] y[j]) / a[i,i]
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Jacobi<T> {
    pub config: SolverConfig<T>,
}

impl<T> Jacobi<T>
where
    T: RealField + Copy,
{
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }
}

impl<T> Default for Jacobi<T>
where
    T: RealField + Copy,
{
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl<T> IterativeSolver<T> for Jacobi<T>
where
    T: RealField + Copy,
{
    fn name(&self) -> &'static str {
        "Jacobi"
    }

    fn precheck(&self, mat_a: &DMatrix<T>) -> Result<(), Error> {
        require_convergent(mat_a, &Scheme::Jacobi, self.config.tolerance)
    }

    fn iterate(
        &self,
        mat_a: &DMatrix<T>,
        b: &DVector<T>,
        x0: &DVector<T>,
    ) -> Result<Solution<T>, Error> {
        let n = mat_a.nrows();

        fixed_point::iterate(self.name(), x0, &self.config, |y, x| {
            for i in 0..n {
                let mut s = T::zero();
                for j in 0..n {
                    if j != i {
                        s += mat_a[(i, j)] * y[j];
                    }
                }
                x[i] = (b[i] - s) / mat_a[(i, i)];
            }
        })
    }
}
