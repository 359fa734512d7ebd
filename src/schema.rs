use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use arrow::datatypes::Schema;

use crate::error::{Error, Result};
use crate::options::CsvOptions;

/// Reads an Arrow schema serialized as JSON.
pub fn load_schema_file(path: &Path) -> Result<Schema> {
    let schema_file = File::open(path).map_err(|source| Error::SchemaFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_reader(schema_file)?)
}

/// Infers the schema from the CSV text, leaving `input` at its start so the
/// same handle can be handed to the reader afterwards.
pub fn infer_schema<R: Read + Seek>(input: &mut R, opts: &CsvOptions) -> Result<Schema> {
    let (schema, records_read) = arrow::csv::reader::infer_file_schema(
        input,
        opts.delimiter,
        opts.max_read_records,
        opts.has_header,
    )
    .map_err(Error::Inference)?;
    log::debug!(
        "inferred {} columns from {} records",
        schema.fields().len(),
        records_read
    );
    Ok(schema)
}

/// Either the schema file, when given, or inference over `input`.
pub fn resolve_schema<R: Read + Seek>(
    input: &mut R,
    schema_file: Option<&Path>,
    opts: &CsvOptions,
) -> Result<Schema> {
    match schema_file {
        Some(path) => load_schema_file(path),
        None => infer_schema(input, opts),
    }
}

pub fn schema_to_json(schema: &Schema) -> Result<String> {
    Ok(serde_json::to_string_pretty(schema)?)
}
