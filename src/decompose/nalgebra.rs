//! nalgebra-backed decomposition adapter

use mdarray::Tensor;
use nalgebra::DMatrix;

use crate::decompose::{Decompose, DecomposeOptions};
use crate::error::ReconError;
use crate::factors::{RightFactor, SvdFactors};

/// SVD backend wrapping `nalgebra`'s iterative algorithm.
///
/// nalgebra documents its right factor as `v_t`, so the factors come back
/// tagged [`RightFactor::Transposed`].
pub struct NalgebraSvd;

impl Decompose<f64> for NalgebraSvd {
    fn decompose(
        &self,
        matrix: &Tensor<f64, (usize, usize)>,
        options: &DecomposeOptions,
    ) -> Result<SvdFactors<f64>, ReconError> {
        let (m, n) = *matrix.shape();

        // An empty matrix has rank zero; nalgebra's SVD is undefined there,
        // so return empty factors directly.
        if m == 0 || n == 0 {
            return Ok(SvdFactors {
                u: Tensor::from_elem((m, 0), 0.0),
                s: Tensor::from_elem((0,), 0.0),
                v: Tensor::from_elem((0, n), 0.0),
                right: RightFactor::Transposed,
            });
        }

        let a = DMatrix::from_fn(m, n, |i, j| matrix[[i, j]]);
        // max_niter = 0 iterates until convergence, as nalgebra's SVD::new does
        let svd = a
            .try_svd(options.compute_u, options.compute_v, f64::EPSILON, 0)
            .ok_or_else(|| ReconError::Decomposition("SVD did not converge".to_string()))?;

        if options.verbosity > 0 {
            eprintln!(
                "nalgebra svd: {}x{} input, {} singular values",
                m,
                n,
                svd.singular_values.len()
            );
        }

        let u = svd.u.ok_or_else(|| {
            ReconError::Decomposition("left singular vectors were not computed".to_string())
        })?;
        let v_t = svd.v_t.ok_or_else(|| {
            ReconError::Decomposition("right singular vectors were not computed".to_string())
        })?;

        let k = svd.singular_values.len();
        Ok(SvdFactors {
            u: Tensor::from_fn((u.nrows(), u.ncols()), |idx| u[(idx[0], idx[1])]),
            s: Tensor::from_fn((k,), |idx| svd.singular_values[idx[0]]),
            v: Tensor::from_fn((v_t.nrows(), v_t.ncols()), |idx| v_t[(idx[0], idx[1])]),
            right: RightFactor::Transposed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_shapes_for_tall_input() {
        let a = Tensor::from_fn((3, 2), |idx| (idx[0] * 2 + idx[1] + 1) as f64);
        let factors = NalgebraSvd
            .decompose(&a, &DecomposeOptions::default())
            .unwrap();

        assert_eq!(factors.rank(), 2);
        assert_eq!(*factors.u.shape(), (3, 2));
        assert_eq!(*factors.v.shape(), (2, 2));
        assert_eq!(factors.right, RightFactor::Transposed);
        // descending non-negative singular values
        assert!(factors.s[[0]] >= factors.s[[1]]);
        assert!(factors.s[[1]] >= 0.0);
    }

    #[test]
    fn test_empty_input_short_circuits() {
        let a = Tensor::from_elem((0, 0), 0.0);
        let factors = NalgebraSvd
            .decompose(&a, &DecomposeOptions::default())
            .unwrap();
        assert_eq!(factors.rank(), 0);
        assert_eq!(*factors.u.shape(), (0, 0));
    }

    #[test]
    fn test_skipped_factor_is_an_error() {
        let a = Tensor::from_elem((2, 2), 1.0);
        let options = DecomposeOptions {
            compute_u: false,
            ..DecomposeOptions::default()
        };
        let err = NalgebraSvd.decompose(&a, &options).unwrap_err();
        assert!(matches!(err, ReconError::Decomposition(_)));
    }
}
