//! Run configuration for the verification workflow

use serde::{Deserialize, Serialize};
use std::fs;

use crate::convert::matrix_from_rows;
use crate::decompose::DecomposeOptions;
use crate::error::ReconError;
use crate::Matrix;

fn default_tolerance() -> f64 {
    1e-6
}

/// Verification run configuration loaded from a TOML or JSON file.
///
/// The defaults reproduce the classic smoke test: decompose a fixed 3×2
/// matrix and accept the reconstruction within 1e-6.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Input matrix as nested rows.
    pub matrix: Vec<Vec<f64>>,
    /// Options forwarded to the decomposition backend.
    #[serde(default)]
    pub options: DecomposeOptions,
    /// Largest acceptable max-abs reconstruction error.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            matrix: vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]],
            options: DecomposeOptions::default(),
            tolerance: default_tolerance(),
        }
    }
}

impl RunConfig {
    /// Load configuration from the given path. Supports TOML or JSON based
    /// on the file extension. Returns `None` if reading or parsing fails.
    pub fn from_path(path: &str) -> Option<Self> {
        let Ok(content) = fs::read_to_string(path) else {
            return None;
        };
        if path.ends_with(".json") {
            serde_json::from_str(&content).ok()
        } else {
            toml::from_str(&content).ok()
        }
    }

    /// The input matrix as a dense tensor.
    ///
    /// # Errors
    /// `RaggedMatrix` if the configured rows are uneven.
    pub fn input_matrix(&self) -> Result<Matrix, ReconError> {
        matrix_from_rows(&self.matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_the_demo_matrix() {
        let config = RunConfig::default();
        let m = config.input_matrix().unwrap();
        assert_eq!(*m.shape(), (3, 2));
        assert_eq!(m[[0, 0]], 1.0);
        assert_eq!(m[[2, 1]], 6.0);
        assert_eq!(config.tolerance, 1e-6);
        assert!(config.options.compute_u);
    }

    #[test]
    fn test_parse_toml() {
        let config: RunConfig = toml::from_str(
            r#"
            matrix = [[1.0, 0.0], [0.0, 1.0]]
            tolerance = 1e-9

            [options]
            verbosity = 1
            "#,
        )
        .unwrap();
        assert_eq!(config.matrix.len(), 2);
        assert_eq!(config.tolerance, 1e-9);
        assert_eq!(config.options.verbosity, 1);
        // unspecified option fields keep their defaults
        assert!(config.options.compute_v);
    }

    #[test]
    fn test_parse_json() {
        let config: RunConfig =
            serde_json::from_str(r#"{"matrix": [[2.0], [3.0]]}"#).unwrap();
        assert_eq!(config.matrix, vec![vec![2.0], vec![3.0]]);
        assert_eq!(config.tolerance, 1e-6);
    }

    #[test]
    fn test_ragged_config_matrix_rejected() {
        let config: RunConfig =
            serde_json::from_str(r#"{"matrix": [[1.0, 2.0], [3.0]]}"#).unwrap();
        assert!(matches!(
            config.input_matrix(),
            Err(ReconError::RaggedMatrix { .. })
        ));
    }
}
