//! Decomposition collaborator interface
//!
//! The SVD itself is external to this crate: anything that can produce
//! factors for a matrix plugs in through [`Decompose`], and the verifier
//! treats the backend as opaque.

pub mod nalgebra;

pub use self::nalgebra::NalgebraSvd;

use mdarray::Tensor;
use serde::{Deserialize, Serialize};

use crate::error::ReconError;
use crate::factors::SvdFactors;
use crate::precision::Precision;

/// Options forwarded to a decomposition backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecomposeOptions {
    /// Compute left singular vectors.
    pub compute_u: bool,
    /// Compute right singular vectors.
    pub compute_v: bool,
    /// Diagnostic print level; 0 is silent.
    pub verbosity: u8,
}

impl Default for DecomposeOptions {
    fn default() -> Self {
        Self {
            compute_u: true,
            compute_v: true,
            verbosity: 0,
        }
    }
}

/// Pluggable SVD backend.
pub trait Decompose<T: Precision> {
    /// Decomposes `matrix` into singular factors.
    ///
    /// # Errors
    /// Backend failures surface as [`ReconError::Decomposition`] and are
    /// propagated unchanged by the verifier.
    fn decompose(
        &self,
        matrix: &Tensor<T, (usize, usize)>,
        options: &DecomposeOptions,
    ) -> Result<SvdFactors<T>, ReconError>;
}

/// Backend that hands out a fixed factor set, ignoring its input.
///
/// Lets tests and callers verify against factors they computed elsewhere.
pub struct FixedFactors<T: Precision>(pub SvdFactors<T>);

impl<T: Precision> Decompose<T> for FixedFactors<T> {
    fn decompose(
        &self,
        _matrix: &Tensor<T, (usize, usize)>,
        _options: &DecomposeOptions,
    ) -> Result<SvdFactors<T>, ReconError> {
        Ok(self.0.clone())
    }
}
