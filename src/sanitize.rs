//! Pre-pass that drops malformed records before the Arrow reader sees them.
//!
//! The Arrow CSV reader fails the whole conversion on the first record with
//! the wrong number of fields. When that is not wanted, the input is copied
//! through a flexible `csv` reader first and only well-formed records survive.
//! The surviving records are buffered in memory, so memory use grows with the
//! size of the input.

use std::io::{Cursor, Read};

use crate::error::Result;
use crate::options::CsvOptions;

/// Well-formed CSV text plus the number of records that were dropped.
#[derive(Debug)]
pub struct Sanitized {
    pub data: Cursor<Vec<u8>>,
    pub skipped: usize,
}

/// Copies `input` keeping only records with as many fields as the first one
/// (the header, when present).
pub fn drop_invalid_rows<R: Read>(input: R, opts: &CsvOptions) -> Result<Sanitized> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(opts.delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let mut writer = csv::WriterBuilder::new()
        .delimiter(opts.delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let mut expected = None;
    let mut skipped = 0;
    let mut record = csv::ByteRecord::new();
    while reader.read_byte_record(&mut record)? {
        let width = *expected.get_or_insert(record.len());
        if record.len() == width {
            writer.write_byte_record(&record)?;
        } else {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            log::debug!(
                "skipping line {}: expected {} fields, found {}",
                line,
                width,
                record.len()
            );
            skipped += 1;
        }
    }

    if skipped > 0 {
        log::warn!("skipped {} malformed rows", skipped);
    }

    let data = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(Sanitized {
        data: Cursor::new(data),
        skipped,
    })
}
