//! Runs the sample systems through every solver and prints the results.
//!
//! `RUST_LOG=debug cargo run --example sample_problems` also shows the iteration counts and the
//! pre-check diagnostics as they happen.

use linsys::{
    check_gauss_seidel_convergence, check_jacobi_convergence, solve_direct, solve_gauss_seidel,
    solve_jacobi, solve_lu, solve_sor, Error, ResidualNorm, Solution,
};
use nalgebra::{dmatrix, dvector, DMatrix, DVector};

/// The Hilbert system `a[i,j] = 1/(i+j+1)`, `b[i] = sum_j a[i,j]`, whose solution is all ones.
fn hilbert_system(n: usize) -> (DMatrix<f64>, DVector<f64>) {
    let a = DMatrix::from_fn(n, n, |i, j| 1.0 / (i + j + 1) as f64);
    let b = DVector::from_fn(n, |i, _| a.row(i).sum());
    (a, b)
}

fn report(label: &str, result: Result<Solution<f64>, Error>) {
    match result {
        Ok(solution) => println!(
            "{:<28} x = {:.6}  ({} iterations)",
            label,
            solution.x.transpose(),
            solution.iterations
        ),
        Err(e) => println!("{:<28} failed: {}", label, e),
    }
}

fn main() {
    env_logger::init();

    let a = dmatrix![
        2.0, -1.0, 0.0;
        -1.0, 3.0, -1.0;
        0.0, -1.0, 2.0;
    ];
    let b = dvector![1.0, 8.0, -5.0];
    report(
        "Jacobi",
        solve_jacobi(&a, &b, &dvector![-0.5, 2.6667, -2.5]),
    );
    report(
        "Gauss-Seidel",
        solve_gauss_seidel(&a, &b, &dvector![0.5, 2.8333, -1.0833]),
    );
    report(
        "SOR (w = 1.1)",
        solve_sor(&a, &b, 1.1, &dvector![0.55, 3.1350, -1.0257]),
    );

    let a = dmatrix![
        0.76, -0.01, -0.14, -0.16;
        -0.01, 0.88, -0.03, 0.06;
        -0.14, -0.03, 1.01, -0.12;
        -0.16, 0.06, -0.12, 0.72;
    ];
    let b = dvector![0.68, 1.18, 0.12, 0.74];
    report("SOR (w = 1.05)", solve_sor(&a, &b, 1.05, &DVector::zeros(4)));

    let a = dmatrix![
        2.0, -1.0, 1.0;
        1.0, 1.0, 1.0;
        1.0, 1.0, -2.0;
    ];
    println!(
        "{:<28} Jacobi: {}, Gauss-Seidel: {}",
        "Convergence probe",
        check_jacobi_convergence(&a),
        check_gauss_seidel_convergence(&a)
    );

    let a = dmatrix![
        31.0, -13.0, 0.0, 0.0, 0.0, -10.0, 0.0, 0.0, 0.0;
        -13.0, 35.0, -9.0, 0.0, -11.0, 0.0, 0.0, 0.0, 0.0;
        0.0, -9.0, 31.0, -10.0, 0.0, 0.0, 0.0, 0.0, 0.0;
        0.0, 0.0, -10.0, 79.0, -30.0, 0.0, 0.0, 0.0, -9.0;
        0.0, 0.0, 0.0, -30.0, 57.0, -7.0, 0.0, -5.0, 0.0;
        0.0, 0.0, 0.0, 0.0, -7.0, 47.0, -30.0, 0.0, 0.0;
        0.0, 0.0, 0.0, 0.0, 0.0, -30.0, 41.0, 0.0, 0.0;
        0.0, 0.0, 0.0, 0.0, -5.0, 0.0, 0.0, 27.0, -2.0;
        0.0, 0.0, 0.0, -9.0, 0.0, 0.0, 0.0, -2.0, 29.0;
    ];
    let b = dvector![-15.0, 27.0, -23.0, 0.0, -20.0, 12.0, -7.0, 7.0, 10.0];
    let x0 = DVector::from_fn(9, |i, _| (i as f64 * 0.37).fract());
    report("Jacobi (9x9)", solve_jacobi(&a, &b, &x0));

    let a = dmatrix![
        10.0, -7.0, 0.0, 1.0;
        -3.0, 2.099999, 6.0, 2.0;
        5.0, -1.0, 5.0, -1.0;
        2.0, 1.0, 0.0, 2.0;
    ];
    let b = dvector![8.0, 5.900001, 5.0, 1.0];
    report("SOR (w = 1.2), near-singular", solve_sor(&a, &b, 1.2, &DVector::zeros(4)));

    for n in [4, 8, 12] {
        let (a, b) = hilbert_system(n);
        for (label, x) in [("Gauss", solve_direct(&a, &b)), ("LU", solve_lu(&a, &b))] {
            match x {
                Ok(x) => println!(
                    "Hilbert n = {:<2} {:<5} |x - 1|inf = {:.3e}  |Ax - b| = {:.3e}",
                    n,
                    label,
                    x.add_scalar(-1.0).amax(),
                    a.residual_norm(&x, &b)
                ),
                Err(e) => println!("Hilbert n = {:<2} {:<5} failed: {}", n, label, e),
            }
        }
    }
}
