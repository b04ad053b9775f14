//! Error types for reconstruction verification

/// Errors raised by the multiplier, the verifier, and the serde boundary.
#[derive(Debug, thiserror::Error)]
pub enum ReconError {
    #[error("dimension mismatch: left operand has {lhs_cols} columns, right operand has {rhs_rows} rows")]
    DimensionMismatch { lhs_cols: usize, rhs_rows: usize },

    #[error("shape mismatch: expected {expected_rows}x{expected_cols}, got {rows}x{cols}")]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[error("ragged matrix: row {row} has {len} entries, expected {expected}")]
    RaggedMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("decomposition failed: {0}")]
    Decomposition(String),
}
