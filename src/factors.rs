//! SVD factor record shared between decomposition backends and the verifier

use mdarray::Tensor;

use crate::matmul::transpose;
use crate::precision::Precision;

/// Orientation of the right factor returned by a decomposition backend.
///
/// Libraries disagree on whether the right singular vectors come back as
/// columns of `V` or as rows of `V^T`; the tag records which one a backend
/// produced so the verifier never has to guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RightFactor {
    /// `v` is n×k with right singular vectors as columns.
    Columns,
    /// `v` is k×n, already transposed.
    Transposed,
}

/// Result of an SVD decomposition
#[derive(Debug, Clone)]
pub struct SvdFactors<T: Precision> {
    /// Left singular vectors (m × k)
    pub u: Tensor<T, (usize, usize)>,
    /// Singular values (k)
    pub s: Tensor<T, (usize,)>,
    /// Right singular vectors, oriented per `right`
    pub v: Tensor<T, (usize, usize)>,
    /// Orientation of `v`
    pub right: RightFactor,
}

impl<T: Precision> SvdFactors<T> {
    /// Number of singular values carried by these factors.
    pub fn rank(&self) -> usize {
        self.s.len()
    }

    /// The right factor as `V^T` (k × n) regardless of stored orientation.
    pub fn right_transposed(&self) -> Tensor<T, (usize, usize)> {
        match self.right {
            RightFactor::Transposed => self.v.clone(),
            RightFactor::Columns => transpose(&self.v),
        }
    }

    /// Singular values as a flat vec, aligned with the columns of `u`.
    pub fn singular_values(&self) -> Vec<T> {
        self.s.iter().copied().collect()
    }
}
