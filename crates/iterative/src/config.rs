use nalgebra::RealField;

/// Stopping threshold shared by every iterative method, and the slack used at the spectral radius
/// boundary.
pub const DEFAULT_TOLERANCE: f64 = 1.0e-6;

/// Stopping criteria for an iterative solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig<T> {
    /// Iteration stops once `‖x_new - x_old‖₂ <= tolerance`.
    pub tolerance: T,
    /// Optional cap on the number of iterations. `None` iterates until the tolerance is met.
    pub max_iterations: Option<usize>,
}

impl<T> SolverConfig<T>
where
    T: RealField + Copy,
{
    pub fn new(tolerance: T) -> Self {
        Self {
            tolerance,
            max_iterations: None,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Returns `true` if another iteration is allowed after `iterations` have completed.
    pub(crate) fn allows(&self, iterations: usize) -> bool {
        self.max_iterations.map_or(true, |max| iterations < max)
    }
}

impl<T> Default for SolverConfig<T>
where
    T: RealField + Copy,
{
    fn default() -> Self {
        Self::new(nalgebra::convert(DEFAULT_TOLERANCE))
    }
}
