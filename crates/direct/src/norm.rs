use nalgebra::{DMatrix, DVector, RealField};

/// Euclidean norm of the residual `A·x - b`.
pub trait ResidualNorm<T> {
    fn residual_norm(&self, x: &DVector<T>, b: &DVector<T>) -> T;
}

impl<T> ResidualNorm<T> for DMatrix<T>
where
    T: RealField + Copy,
{
    fn residual_norm(&self, x: &DVector<T>, b: &DVector<T>) -> T {
        (self * x - b).norm()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use nalgebra::{dmatrix, dvector};

    #[test]
    fn test_residual_norm() {
        let mat_a = dmatrix![2.0, 0.0; 0.0, 3.0];
        let x = dvector![1.0, 1.0];
        let b = dvector![5.0, 7.0];

        // A·x - b = [-3, -4]
        assert_eq!(mat_a.residual_norm(&x, &b), 5.0);
    }

    #[test]
    fn test_residual_norm_exact() {
        let mat_a = dmatrix![1.0, 2.0; 3.0, 4.0];
        let x = dvector![-4.0, 4.5];
        let b = dvector![5.0, 6.0];
        assert_eq!(mat_a.residual_norm(&x, &b), 0.0);
    }
}
