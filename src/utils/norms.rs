//! Matrix norm computations and elementwise differences

use mdarray::Tensor;

use crate::error::ReconError;
use crate::precision::Precision;

/// Compute the Frobenius norm of a matrix
pub fn norm_frobenius<T: Precision>(mat: &Tensor<T, (usize, usize)>) -> T {
    let (m, n) = *mat.shape();
    let mut sum = T::zero();
    for i in 0..m {
        for j in 0..n {
            let val = mat[[i, j]];
            sum = sum + val * val;
        }
    }
    Precision::sqrt(sum)
}

/// Compute the maximum absolute value in a matrix
pub fn norm_max<T: Precision>(mat: &Tensor<T, (usize, usize)>) -> T {
    let (m, n) = *mat.shape();
    let mut max_val = T::zero();
    for i in 0..m {
        for j in 0..n {
            let abs_val = Precision::abs(mat[[i, j]]);
            if abs_val > max_val {
                max_val = abs_val;
            }
        }
    }
    max_val
}

/// Elementwise difference `a - b`.
///
/// # Errors
/// `ShapeMismatch` unless both matrices have the same shape.
pub fn matrix_sub<T: Precision>(
    a: &Tensor<T, (usize, usize)>,
    b: &Tensor<T, (usize, usize)>,
) -> Result<Tensor<T, (usize, usize)>, ReconError> {
    let (m, n) = *a.shape();
    let (bm, bn) = *b.shape();
    if (m, n) != (bm, bn) {
        return Err(ReconError::ShapeMismatch {
            expected_rows: m,
            expected_cols: n,
            rows: bm,
            cols: bn,
        });
    }
    Ok(Tensor::from_fn((m, n), |idx| {
        a[[idx[0], idx[1]]] - b[[idx[0], idx[1]]]
    }))
}

/// Largest elementwise absolute difference between two same-shaped matrices.
///
/// # Errors
/// `ShapeMismatch` unless both matrices have the same shape.
pub fn max_abs_diff<T: Precision>(
    a: &Tensor<T, (usize, usize)>,
    b: &Tensor<T, (usize, usize)>,
) -> Result<T, ReconError> {
    Ok(norm_max(&matrix_sub(a, b)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use mdarray::tensor;
    use mdarray::DTensor;

    #[test]
    fn test_norm_frobenius() {
        let m: DTensor<f64, 2> = tensor![[3.0, 4.0], [0.0, 5.0]];
        let norm = norm_frobenius(&m);
        assert_abs_diff_eq!(norm, (9.0f64 + 16.0 + 0.0 + 25.0).sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn test_norm_max() {
        let m: DTensor<f64, 2> = tensor![[1.0, -3.0], [2.0, 0.5]];
        assert_abs_diff_eq!(norm_max(&m), 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_norm_max_empty_is_zero() {
        let m = Tensor::from_elem((0, 0), 0.0);
        assert_eq!(norm_max(&m), 0.0);
    }

    #[test]
    fn test_max_abs_diff() {
        let a: DTensor<f64, 2> = tensor![[1.0, 2.0], [3.0, 4.0]];
        let b: DTensor<f64, 2> = tensor![[1.0, 2.5], [2.0, 4.0]];
        assert_abs_diff_eq!(max_abs_diff(&a, &b).unwrap(), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_max_abs_diff_shape_mismatch() {
        let a = Tensor::from_elem((2, 2), 1.0);
        let b = Tensor::from_elem((2, 3), 1.0);
        assert!(matches!(
            max_abs_diff(&a, &b),
            Err(ReconError::ShapeMismatch { .. })
        ));
    }
}
