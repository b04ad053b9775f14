//! Norms and elementwise helpers

pub mod norms;

pub use norms::{matrix_sub, max_abs_diff, norm_frobenius, norm_max};
