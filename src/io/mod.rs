//! # Reading of linear programs
//!
//! This module provides read functionality for linear program files.
use std::fs;
use std::path::Path;

use crate::data::linear_program::problem::Problem;
use crate::io::error::Import;

pub mod error;
pub mod json;

/// Import a problem from a file.
///
/// Currently only supports the JSON filetype, see the `json` module for the layout.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, the file is malformed or the
/// problem it describes has inconsistent dimensions.
pub fn import(file_path: &Path) -> Result<Problem<f64>, Import> {
    match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("json" | "JSON") => {
                let program = fs::read_to_string(file_path)?;
                parse(&program)
            },
            Some(extension_string) => Err(Import::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path
            ))),
            None => Err(Import::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension
            ))),
        },
        None => Err(Import::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path
        ))),
    }
}

/// Parse a problem from the contents of a JSON file.
///
/// # Errors
///
/// If the text is not a valid problem description, or the problem has inconsistent dimensions.
pub fn parse(program: &str) -> Result<Problem<f64>, Import> {
    let file: json::ProblemFile = serde_json::from_str(program)?;
    Ok(Problem::<f64>::try_from(file)?)
}
