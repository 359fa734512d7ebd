//! Error type shared by the library and the binary.
//!
//! Every failure the converter can hit maps onto one [`Error`] variant, and
//! every variant maps onto one process exit code.

use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;
use thiserror::Error;

/// Process exit code for a completed conversion (or a dry run).
pub const EXIT_SUCCESS: u8 = 0;
/// Process exit code for a failure while reading, inferring or writing.
pub const EXIT_CONVERSION_FAILURE: u8 = 1;
/// Process exit code for a wrong number of positional arguments.
pub const EXIT_USAGE: u8 = 2;
/// Process exit code for an input path that is not an existing file.
pub const EXIT_MISSING_INPUT: u8 = 3;

#[derive(Error, Debug)]
pub enum Error {
    /// Not exactly one input path was given. Carries the raw argument list.
    #[error("SCRIPT REQUIRES 1 ARGUMENT")]
    Usage { args: Vec<String> },

    #[error("ENSURE FILE NAME GIVEN IS CORRECT")]
    MissingInput(PathBuf),

    #[error("Refusing to overwrite input: derived output path {0:?} is the input path")]
    OutputCollidesWithInput(PathBuf),

    #[error("Path {0:?} is not valid UTF-8 and cannot be renamed by substring")]
    NonUtf8Path(PathBuf),

    #[error("Error opening schema file: {path:?}, message: {source}")]
    SchemaFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error reading schema json: {0}")]
    SchemaJson(#[from] serde_json::Error),

    #[error("Error inferring schema: {0}")]
    Inference(ArrowError),

    #[error("Invalid delimiter {0:?}: must be a single byte character")]
    Delimiter(char),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Exit code the binary terminates with when this error reaches `main`.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Usage { .. } => EXIT_USAGE,
            Error::MissingInput(_) => EXIT_MISSING_INPUT,
            _ => EXIT_CONVERSION_FAILURE,
        }
    }

    /// Validation failures are reported on stdout with fixed messages, the
    /// rest go to stderr.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Usage { .. } | Error::MissingInput(_))
    }
}
