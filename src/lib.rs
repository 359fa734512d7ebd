//! Convert a CSV file into a Parquet file.
//!
//! CSV parsing and schema inference are delegated to the Arrow CSV reader and
//! encoding to the Parquet `ArrowWriter`. The crate adds argument and path
//! validation, output path derivation and the writer settings around them.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = csv2parquet::convert(Path::new("data/report.csv"))?;
//! assert_eq!(report.output, Path::new("data/report.parquet"));
//! # Ok::<(), csv2parquet::Error>(())
//! ```

pub mod cli;
pub mod convert;
pub mod error;
pub mod logging;
pub mod options;
pub mod path;
pub mod sanitize;
pub mod schema;

pub use convert::{convert, ConversionReport, ConvertOptions, Converter, WriteSummary};
pub use error::{Error, Result};
pub use options::{Codec, CsvOptions, WriterOptions};
pub use path::{derive_output_path, OutputNaming};
