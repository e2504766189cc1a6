use nalgebra::{DVector, RealField};

use crate::{Error, Solution, SolverConfig};

/// Drives a stationary iteration until the update norm `‖x - y‖₂` falls to the tolerance.
///
/// `sweep(y, x)` receives the previous iterate `y` and the current iterate `x`, which holds a copy
/// of `y` on entry, and must update `x` in place.
pub(crate) fn iterate<T, F>(
    method: &'static str,
    x0: &DVector<T>,
    config: &SolverConfig<T>,
    mut sweep: F,
) -> Result<Solution<T>, Error>
where
    T: RealField + Copy,
    F: FnMut(&DVector<T>, &mut DVector<T>),
{
    let mut x = x0.clone();
    let mut y = x0.clone();
    let mut iterations = 0;

    loop {
        if !config.allows(iterations) {
            log::warn!("{}: no convergence after {} iterations", method, iterations);
            return Err(Error::MaxIterations { iterations });
        }

        y.copy_from(&x);
        sweep(&y, &mut x);
        iterations += 1;

        let delta = (&x - &y).norm();
        log::trace!("{} iteration {}: |x - y| = {:?}", method, iterations, delta);

        if delta <= config.tolerance {
            break;
        }
    }

    Ok(Solution { x, iterations })
}
