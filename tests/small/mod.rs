//! # Small problems stored as JSON files
use std::path::{Path, PathBuf};

use simplex_tableau::Problem;
use simplex_tableau::io::import;

/// # Execution
mod test;

/// Folder where the problem files are stored.
fn problem_file_directory() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("small")
}

/// Compute the path of the problem file, based on the problem name.
///
/// # Arguments
///
/// * `name`: Problem name without extension.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("json")
}

fn read(name: &str) -> Problem<f64> {
    import(&get_test_file_path(name)).unwrap()
}
