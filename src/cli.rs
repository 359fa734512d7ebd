use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueHint};

use crate::convert::ConvertOptions;
use crate::error::{Error, Result};
use crate::options::{Codec, CsvOptions, WriterOptions, DEFAULT_BATCH_SIZE};
use crate::path::OutputNaming;

#[derive(Parser, Debug)]
#[clap(version = env!("CARGO_PKG_VERSION"), author = "Dominik Moritz <domoritz@cmu.edu>")]
pub struct Opts {
    /// Input CSV file. Exactly one is expected.
    #[clap(name = "CSV", value_parser, value_hint = ValueHint::AnyPath)]
    pub inputs: Vec<PathBuf>,

    /// Output file. Derived from the input path if not present.
    #[clap(short, long, value_parser, value_hint = ValueHint::AnyPath)]
    pub output: Option<PathBuf>,

    /// How the output path is derived from the input path.
    #[clap(long, value_enum, default_value_t = OutputNaming::Extension)]
    pub naming: OutputNaming,

    /// File with Arrow schema in JSON format.
    #[clap(short = 's', long, value_parser, value_hint = ValueHint::AnyPath)]
    pub schema_file: Option<PathBuf>,

    /// The number of records to infer the schema from. All rows if not present. Setting max-read-records to zero will stop schema inference and all columns will be string typed.
    #[clap(long)]
    pub max_read_records: Option<usize>,

    /// Set whether the CSV file has headers
    #[clap(long)]
    pub header: Option<bool>,

    /// Set the CSV file's column delimiter as a byte character.
    #[clap(short, long, default_value = ",")]
    pub delimiter: char,

    /// Number of rows per record batch read from the CSV file.
    #[clap(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Drop rows whose number of fields differs from the header instead of failing. Buffers the whole input in memory.
    #[clap(long)]
    pub skip_invalid_rows: bool,

    /// Compression codec for all columns.
    #[clap(short, long, value_enum, default_value_t = Codec::Snappy)]
    pub compression: Codec,

    /// Sets data page size limit.
    #[clap(long)]
    pub data_pagesize_limit: Option<usize>,

    /// Sets dictionary page size limit.
    #[clap(long)]
    pub dictionary_pagesize_limit: Option<usize>,

    /// Sets write batch size.
    #[clap(long)]
    pub write_batch_size: Option<usize>,

    /// Sets max size for a row group.
    #[clap(long)]
    pub max_row_group_size: Option<usize>,

    /// Sets "created by" property.
    #[clap(long)]
    pub created_by: Option<String>,

    /// Sets flag to enable/disable dictionary encoding for any column.
    #[clap(long)]
    pub dictionary: bool,

    /// Print the schema to stdout.
    #[clap(short, long)]
    pub print_schema: bool,

    /// Only print the schema
    #[clap(short = 'n', long)]
    pub dry: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// The argument list exactly as received, for the usage message.
    #[clap(skip)]
    pub raw_args: Vec<String>,
}

impl Opts {
    /// Parses `args` (program name first). Only clap-level failures such as
    /// unknown flags, `--help` and `--version` surface here; the positional
    /// count is checked by [`Opts::input`].
    pub fn from_args<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let mut opts = Opts::try_parse_from(&args)?;
        opts.raw_args = args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        Ok(opts)
    }

    /// The single input path, or [`Error::Usage`].
    pub fn input(&self) -> Result<&Path> {
        match self.inputs.as_slice() {
            [input] => Ok(input.as_path()),
            _ => Err(Error::Usage {
                args: self.raw_args.clone(),
            }),
        }
    }

    pub fn convert_options(&self) -> Result<ConvertOptions> {
        let csv = CsvOptions {
            has_header: self.header.unwrap_or(true),
            max_read_records: self.max_read_records,
            batch_size: self.batch_size,
            skip_invalid_rows: self.skip_invalid_rows,
            ..Default::default()
        }
        .with_delimiter_char(self.delimiter)?;

        let writer = WriterOptions {
            compression: self.compression,
            dictionary: self.dictionary,
            data_pagesize_limit: self.data_pagesize_limit,
            dictionary_pagesize_limit: self.dictionary_pagesize_limit,
            write_batch_size: self.write_batch_size,
            max_row_group_size: self.max_row_group_size,
            created_by: self.created_by.clone(),
        };

        Ok(ConvertOptions {
            csv,
            writer,
            schema_file: self.schema_file.clone(),
            naming: self.naming,
            output: self.output.clone(),
        })
    }
}
