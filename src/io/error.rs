//! # Error reporting for reading of linear program files
//!
//! Describes any problems encountered during reading and parsing.
use std::io;

use thiserror::Error;

use crate::data::linear_program::problem::DimensionError;

/// An `Import` error is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Error, Debug)]
pub enum Import {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    #[error("{0}")]
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error(transparent)]
    IO(#[from] io::Error),
    /// Contents of the file could not be parsed into a linear program.
    ///
    /// # Note
    ///
    /// If the linear program is inconsistent, that will not be represented with this error. This
    /// variant should only be created for syntactically incorrect files.
    #[error("ParseError: {0}")]
    Parse(#[from] serde_json::Error),
    /// The shapes in the file are inconsistent, for example a cost vector that is longer than the
    /// rows of the constraint matrix.
    #[error("ProgramError: {0}")]
    LinearProgram(#[from] DimensionError),
}
