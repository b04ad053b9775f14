//! Nested-row conversions for the serde boundary

use mdarray::Tensor;

use crate::error::ReconError;
use crate::precision::Precision;

/// Builds a matrix from nested rows, validating that every row has the same
/// length.
///
/// # Errors
/// `RaggedMatrix` naming the first offending row if lengths disagree.
pub fn matrix_from_rows<T: Precision>(
    rows: &[Vec<T>],
) -> Result<Tensor<T, (usize, usize)>, ReconError> {
    let m = rows.len();
    let n = rows.first().map_or(0, Vec::len);
    for (i, row) in rows.iter().enumerate() {
        if row.len() != n {
            return Err(ReconError::RaggedMatrix {
                row: i,
                len: row.len(),
                expected: n,
            });
        }
    }
    Ok(Tensor::from_fn((m, n), |idx| rows[idx[0]][idx[1]]))
}

/// Flattens a matrix back into nested rows (the JSON/TOML shape).
pub fn matrix_to_rows<T: Precision>(matrix: &Tensor<T, (usize, usize)>) -> Vec<Vec<T>> {
    let (m, n) = *matrix.shape();
    (0..m)
        .map(|i| (0..n).map(|j| matrix[[i, j]]).collect())
        .collect()
}
