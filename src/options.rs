//! Reader and writer settings.
//!
//! These are plain structs so the library can be driven without clap; the
//! binary fills them from its parsed arguments.

use clap::ValueEnum;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::error::{Error, Result};

pub const DEFAULT_BATCH_SIZE: usize = 1024;

/// How the CSV input is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    pub delimiter: u8,
    pub has_header: bool,
    /// Records scanned for schema inference. `None` scans all of them.
    pub max_read_records: Option<usize>,
    pub batch_size: usize,
    /// Drop records whose field count differs from the first record's.
    pub skip_invalid_rows: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions {
            delimiter: b',',
            has_header: true,
            max_read_records: None,
            batch_size: DEFAULT_BATCH_SIZE,
            skip_invalid_rows: false,
        }
    }
}

impl CsvOptions {
    pub fn with_delimiter_char(mut self, delimiter: char) -> Result<Self> {
        self.delimiter = delimiter_byte(delimiter)?;
        Ok(self)
    }
}

/// The CSV reader works on bytes, so only ASCII delimiters are accepted.
pub fn delimiter_byte(delimiter: char) -> Result<u8> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(Error::Delimiter(delimiter))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Codec {
    Uncompressed,
    #[default]
    Snappy,
    Gzip,
    Brotli,
    Lz4,
    Zstd,
}

impl From<Codec> for Compression {
    fn from(codec: Codec) -> Self {
        match codec {
            Codec::Uncompressed => Compression::UNCOMPRESSED,
            Codec::Snappy => Compression::SNAPPY,
            Codec::Gzip => Compression::GZIP,
            Codec::Brotli => Compression::BROTLI,
            Codec::Lz4 => Compression::LZ4,
            Codec::Zstd => Compression::ZSTD,
        }
    }
}

/// Parquet writer settings. `None` leaves the library default in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriterOptions {
    pub compression: Codec,
    pub dictionary: bool,
    pub data_pagesize_limit: Option<usize>,
    pub dictionary_pagesize_limit: Option<usize>,
    pub write_batch_size: Option<usize>,
    pub max_row_group_size: Option<usize>,
    pub created_by: Option<String>,
}

impl WriterOptions {
    pub fn to_properties(&self) -> WriterProperties {
        let mut props = WriterProperties::builder()
            .set_dictionary_enabled(self.dictionary)
            .set_compression(self.compression.into());

        if let Some(size) = self.write_batch_size {
            props = props.set_write_batch_size(size);
        }

        if let Some(size) = self.data_pagesize_limit {
            props = props.set_data_pagesize_limit(size);
        }

        if let Some(size) = self.dictionary_pagesize_limit {
            props = props.set_dictionary_pagesize_limit(size);
        }

        if let Some(size) = self.max_row_group_size {
            props = props.set_max_row_group_size(size);
        }

        if let Some(created_by) = &self.created_by {
            props = props.set_created_by(created_by.clone());
        }

        props.build()
    }
}
