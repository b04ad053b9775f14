//! Diagonal matrix construction

use mdarray::Tensor;

use crate::precision::Precision;

/// Builds an r×c matrix with `values` on the main diagonal and zeros
/// elsewhere.
///
/// Entries of `values` past `min(r, c)` are silently unused; diagonal
/// positions past `values.len()` read as zero.
pub fn diagonal<T: Precision>(values: &[T], shape: (usize, usize)) -> Tensor<T, (usize, usize)> {
    Tensor::from_fn(shape, |idx| {
        if idx[0] == idx[1] && idx[0] < values.len() {
            values[idx[0]]
        } else {
            T::zero()
        }
    })
}
