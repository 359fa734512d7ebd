//! The CSV to Parquet pipeline.
//!
//! Parsing and type inference are done by the Arrow CSV reader, encoding by
//! the Parquet `ArrowWriter`. This module only wires the two together:
//! validate the input path, resolve the schema, stream record batches from
//! the reader into the writer.

use std::fs::{self, File};
use std::io::{Read, Seek, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::csv::{Reader, ReaderBuilder};
use arrow::datatypes::{Schema, SchemaRef};
use parquet::arrow::ArrowWriter;

use crate::error::{Error, Result};
use crate::options::{CsvOptions, WriterOptions};
use crate::path::{resolve_output_path, OutputNaming};
use crate::sanitize::drop_invalid_rows;
use crate::schema::resolve_schema;

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub csv: CsvOptions,
    pub writer: WriterOptions,
    /// Arrow JSON schema used instead of inference.
    pub schema_file: Option<PathBuf>,
    pub naming: OutputNaming,
    /// Explicit output path, overriding `naming`.
    pub output: Option<PathBuf>,
}

/// What one pass of the writer produced.
#[derive(Debug, Clone)]
pub struct WriteSummary {
    pub schema: SchemaRef,
    pub rows: u64,
    pub row_groups: usize,
    /// Records dropped by `--skip-invalid-rows`.
    pub skipped_rows: usize,
}

#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub summary: WriteSummary,
}

#[derive(Debug, Clone, Default)]
pub struct Converter {
    opts: ConvertOptions,
}

/// Converts `input` next to itself with default settings.
pub fn convert(input: &Path) -> Result<ConversionReport> {
    Converter::default().convert(input)
}

/// Fails with [`Error::MissingInput`] unless `input` is an existing regular file.
pub fn validate_input(input: &Path) -> Result<()> {
    if input.is_file() {
        Ok(())
    } else {
        Err(Error::MissingInput(input.to_path_buf()))
    }
}

impl Converter {
    pub fn new(opts: ConvertOptions) -> Self {
        Converter { opts }
    }

    pub fn output_path(&self, input: &Path) -> Result<PathBuf> {
        resolve_output_path(input, self.opts.output.as_deref(), self.opts.naming)
    }

    /// Resolves the schema the conversion of `input` would use, without
    /// writing anything.
    pub fn schema(&self, input: &Path) -> Result<Schema> {
        validate_input(input)?;
        let mut file = File::open(input)?;
        if self.opts.csv.skip_invalid_rows {
            let mut sanitized = drop_invalid_rows(file, &self.opts.csv)?;
            self.resolve_schema(&mut sanitized.data)
        } else {
            self.resolve_schema(&mut file)
        }
    }

    /// Converts the CSV file at `input` into a Parquet file at the derived
    /// (or explicit) output path.
    pub fn convert(&self, input: &Path) -> Result<ConversionReport> {
        validate_input(input)?;
        let output = self.output_path(input)?;
        log::debug!("converting {:?} to {:?} with {:?}", input, output, self.opts);

        let file = File::open(input)?;
        let summary = if self.opts.csv.skip_invalid_rows {
            let sanitized = drop_invalid_rows(file, &self.opts.csv)?;
            let reader = self.csv_reader(sanitized.data)?;
            self.write_file(reader, &output, sanitized.skipped)?
        } else {
            let reader = self.csv_reader(file)?;
            self.write_file(reader, &output, 0)?
        };

        log::info!(
            "wrote {} rows in {} row groups from {:?} to {:?}",
            summary.rows,
            summary.row_groups,
            input,
            output
        );
        Ok(ConversionReport {
            input: input.to_path_buf(),
            output,
            summary,
        })
    }

    /// Runs the same pipeline over an arbitrary source and sink.
    pub fn convert_reader<R, W>(&self, input: R, output: W) -> Result<WriteSummary>
    where
        R: Read + Seek,
        W: Write + Send,
    {
        if self.opts.csv.skip_invalid_rows {
            let sanitized = drop_invalid_rows(input, &self.opts.csv)?;
            let reader = self.csv_reader(sanitized.data)?;
            self.write_batches(reader, output, sanitized.skipped)
        } else {
            let reader = self.csv_reader(input)?;
            self.write_batches(reader, output, 0)
        }
    }

    fn resolve_schema<R: Read + Seek>(&self, input: &mut R) -> Result<Schema> {
        resolve_schema(input, self.opts.schema_file.as_deref(), &self.opts.csv)
    }

    fn csv_reader<R: Read + Seek>(&self, mut input: R) -> Result<Reader<R>> {
        let schema = self.resolve_schema(&mut input)?;
        let builder = ReaderBuilder::new()
            .has_header(self.opts.csv.has_header)
            .with_delimiter(self.opts.csv.delimiter)
            .with_batch_size(self.opts.csv.batch_size)
            .with_schema(Arc::new(schema));
        Ok(builder.build(input)?)
    }

    /// The output file is only created once the schema is known. If writing
    /// fails after that, the partial file is removed.
    fn write_file<R: Read>(
        &self,
        reader: Reader<R>,
        output: &Path,
        skipped_rows: usize,
    ) -> Result<WriteSummary> {
        let file = File::create(output)?;
        match self.write_batches(reader, file, skipped_rows) {
            Ok(summary) => Ok(summary),
            Err(error) => {
                if fs::remove_file(output).is_ok() {
                    log::warn!("removed partial output {:?}", output);
                }
                Err(error)
            }
        }
    }

    fn write_batches<R: Read, W: Write + Send>(
        &self,
        reader: Reader<R>,
        output: W,
        skipped_rows: usize,
    ) -> Result<WriteSummary> {
        let schema = reader.schema();
        let props = self.opts.writer.to_properties();
        let mut writer = ArrowWriter::try_new(output, schema.clone(), Some(props))?;

        for batch in reader {
            writer.write(&batch?)?;
        }

        let metadata = writer.close()?;
        Ok(WriteSummary {
            schema,
            rows: metadata.num_rows as u64,
            row_groups: metadata.row_groups.len(),
            skipped_rows,
        })
    }
}
