//! Naive dense matrix multiplication
//!
//! The multiplier is deliberately the O(m·n·d) triple loop: it exists to
//! independently check the output of a fast decomposition routine, so it
//! must not share machinery with anything it is checking.

use mdarray::Tensor;

use crate::error::ReconError;
use crate::precision::Precision;

/// Computes `x * y` for dense matrices.
///
/// Each output cell is the dot product of a row of `x` and a column of `y`,
/// accumulated in ascending index order so results are reproducible
/// bit-for-bit across runs.
///
/// Zero-sized dimensions are legal and produce an empty or zero-filled
/// result.
///
/// # Errors
/// `DimensionMismatch` if `x`'s column count differs from `y`'s row count;
/// the error names both counts.
pub fn multiply<T: Precision>(
    x: &Tensor<T, (usize, usize)>,
    y: &Tensor<T, (usize, usize)>,
) -> Result<Tensor<T, (usize, usize)>, ReconError> {
    let (m, d) = *x.shape();
    let (d2, n) = *y.shape();
    if d != d2 {
        return Err(ReconError::DimensionMismatch {
            lhs_cols: d,
            rhs_rows: d2,
        });
    }
    Ok(Tensor::from_fn((m, n), |idx| {
        let mut sum = T::zero();
        for k in 0..d {
            sum = sum + x[[idx[0], k]] * y[[k, idx[1]]];
        }
        sum
    }))
}

/// Returns the transpose of `a` as a new tensor.
pub fn transpose<T: Precision>(a: &Tensor<T, (usize, usize)>) -> Tensor<T, (usize, usize)> {
    let (m, n) = *a.shape();
    Tensor::from_fn((n, m), |idx| a[[idx[1], idx[0]]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdarray::tensor;
    use mdarray::DTensor;

    #[test]
    fn test_multiply_rectangular() {
        let a: DTensor<f64, 2> = tensor![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let b: DTensor<f64, 2> = tensor![[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]];
        let c = multiply(&a, &b).unwrap();

        assert_eq!(*c.shape(), (2, 2));
        // First row: [1*7+2*9+3*11, 1*8+2*10+3*12] = [58, 64]
        // Second row: [4*7+5*9+6*11, 4*8+5*10+6*12] = [139, 154]
        assert!((c[[0, 0]] - 58.0).abs() < 1e-10);
        assert!((c[[0, 1]] - 64.0).abs() < 1e-10);
        assert!((c[[1, 0]] - 139.0).abs() < 1e-10);
        assert!((c[[1, 1]] - 154.0).abs() < 1e-10);
    }

    #[test]
    fn test_multiply_dimension_mismatch() {
        let a = Tensor::from_elem((2, 3), 1.0);
        let b = Tensor::from_elem((4, 2), 1.0);
        let err = multiply(&a, &b).unwrap_err();
        assert!(matches!(
            err,
            ReconError::DimensionMismatch {
                lhs_cols: 3,
                rhs_rows: 4
            }
        ));
    }

    #[test]
    fn test_multiply_inner_dimension_zero() {
        // 2x0 times 0x3 contracts over nothing and must give zeros, not fail
        let a = Tensor::from_elem((2, 0), 1.0);
        let b = Tensor::from_elem((0, 3), 1.0);
        let c = multiply(&a, &b).unwrap();
        assert_eq!(*c.shape(), (2, 3));
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(c[[i, j]], 0.0);
            }
        }
    }

    #[test]
    fn test_transpose() {
        let a: DTensor<f64, 2> = tensor![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let t = transpose(&a);
        assert_eq!(*t.shape(), (3, 2));
        assert_eq!(t[[0, 1]], 4.0);
        assert_eq!(t[[2, 0]], 3.0);
    }
}
