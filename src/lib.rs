//! # svd-recon: reconstruction-based SVD verification
//!
//! Verifies the output of an external singular value decomposition by
//! rebuilding the original matrix with naive dense matrix multiplication
//! and measuring the reconstruction error.
//!
//! The decomposition itself stays outside this crate: anything that can
//! produce factors plugs in through the [`Decompose`] trait, and the
//! verifier makes no claims about the backend beyond how well its factors
//! multiply back together.

pub mod config;
pub mod convert;
pub mod decompose;
pub mod diagonal;
pub mod error;
pub mod factors;
pub mod matmul;
pub mod precision;
pub mod utils;
pub mod verify;

pub use config::RunConfig;
pub use convert::{matrix_from_rows, matrix_to_rows};
pub use decompose::{Decompose, DecomposeOptions, FixedFactors, NalgebraSvd};
pub use diagonal::diagonal;
pub use error::ReconError;
pub use factors::{RightFactor, SvdFactors};
pub use matmul::{multiply, transpose};
pub use precision::Precision;
pub use utils::{matrix_sub, max_abs_diff, norm_frobenius, norm_max};
pub use verify::{reconstruct, verify, verify_factors, VerifyReport};

// Re-export mdarray types
pub use mdarray::{DTensor, Tensor};

// Type aliases for convenience
pub type Matrix = Tensor<f64, (usize, usize)>;
pub type Vector = Tensor<f64, (usize,)>;
