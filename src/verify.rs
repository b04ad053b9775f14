//! Reconstruction verification workflow
//!
//! Obtains factors from an injected decomposition backend, multiplies them
//! back into a dense matrix with the naive multiplier, and measures how far
//! the result drifts from the original.

use mdarray::Tensor;

use crate::decompose::{Decompose, DecomposeOptions};
use crate::diagonal::diagonal;
use crate::error::ReconError;
use crate::factors::SvdFactors;
use crate::matmul::multiply;
use crate::precision::Precision;
use crate::utils::{matrix_sub, norm_frobenius, norm_max};

/// Outcome of a reconstruction check.
#[derive(Debug, Clone)]
pub struct VerifyReport<T: Precision> {
    /// `U * diag(S) * V^T`
    pub reconstructed: Tensor<T, (usize, usize)>,
    /// Largest elementwise deviation from the original.
    pub max_abs_error: T,
    /// `||A - B||_F / ||A||_F`; absolute when `A` is all zeros.
    pub relative_frobenius_error: T,
}

/// Multiplies the factors back into a dense matrix.
///
/// The diagonal is sized to bridge `U`'s column count and `V^T`'s row count,
/// so truncated factor sets stay multipliable; singular values past the
/// shorter side fill in as zero.
///
/// # Errors
/// `DimensionMismatch` if the factor matrices do not chain.
pub fn reconstruct<T: Precision>(
    factors: &SvdFactors<T>,
) -> Result<Tensor<T, (usize, usize)>, ReconError> {
    let v_t = factors.right_transposed();
    let (_, u_cols) = *factors.u.shape();
    let (vt_rows, _) = *v_t.shape();
    let s_diag = diagonal(&factors.singular_values(), (u_cols, vt_rows));
    let us = multiply(&factors.u, &s_diag)?;
    multiply(&us, &v_t)
}

/// Measures how well already-obtained factors reproduce `original`.
///
/// # Errors
/// `DimensionMismatch` if the factors do not chain, `ShapeMismatch` if the
/// reconstruction comes out a different shape than `original`.
pub fn verify_factors<T: Precision>(
    original: &Tensor<T, (usize, usize)>,
    factors: &SvdFactors<T>,
) -> Result<VerifyReport<T>, ReconError> {
    let reconstructed = reconstruct(factors)?;
    let diff = matrix_sub(original, &reconstructed)?;

    let max_abs_error = norm_max(&diff);
    let diff_norm = norm_frobenius(&diff);
    let orig_norm = norm_frobenius(original);
    let relative_frobenius_error = if orig_norm == T::zero() {
        diff_norm
    } else {
        diff_norm / orig_norm
    };

    Ok(VerifyReport {
        reconstructed,
        max_abs_error,
        relative_frobenius_error,
    })
}

/// Runs `decomposer` on `original` once and verifies the reconstruction.
///
/// Backend failures propagate unchanged; there are no retries. Both factor
/// matrices are required for reconstruction, so `compute_u` and `compute_v`
/// are forced on regardless of what `options` asked for.
pub fn verify<T, D>(
    original: &Tensor<T, (usize, usize)>,
    decomposer: &D,
    options: &DecomposeOptions,
) -> Result<VerifyReport<T>, ReconError>
where
    T: Precision,
    D: Decompose<T>,
{
    let options = DecomposeOptions {
        compute_u: true,
        compute_v: true,
        ..*options
    };
    let factors = decomposer.decompose(original, &options)?;
    verify_factors(original, &factors)
}
