//! Demo entry point: decompose a configured matrix, print the factors and
//! the reconstruction as JSON rows, and exit non-zero if the reconstruction
//! error exceeds the configured tolerance.

use std::env;
use std::process::ExitCode;

use svd_recon::{
    matrix_to_rows, verify_factors, Decompose, Matrix, NalgebraSvd, ReconError, RunConfig,
};

fn main() -> ExitCode {
    let config = match env::args().nth(1) {
        Some(path) => match RunConfig::from_path(&path) {
            Some(config) => config,
            None => {
                eprintln!("failed to load config from {path}");
                return ExitCode::FAILURE;
            }
        },
        None => RunConfig::default(),
    };

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &RunConfig) -> Result<bool, ReconError> {
    let a = config.input_matrix()?;
    println!("A = {}", json_matrix(&a));
    println!("---");

    let factors = NalgebraSvd.decompose(&a, &config.options)?;
    println!("U = {}", json_matrix(&factors.u));
    println!("S = {}", json_rows(&factors.singular_values()));
    println!("V = {}", json_matrix(&factors.v));

    let report = verify_factors(&a, &factors)?;
    println!("B = U * diag(S) * Vt");
    println!("{}", json_matrix(&report.reconstructed));
    println!("max abs error = {:.3e}", report.max_abs_error);

    if report.max_abs_error > config.tolerance {
        eprintln!(
            "reconstruction error {:.3e} exceeds tolerance {:.3e}",
            report.max_abs_error, config.tolerance
        );
        return Ok(false);
    }
    Ok(true)
}

fn json_matrix(matrix: &Matrix) -> String {
    json_rows(&matrix_to_rows(matrix))
}

fn json_rows<T: serde::Serialize>(rows: &T) -> String {
    serde_json::to_string(rows).unwrap_or_else(|_| "null".to_string())
}
