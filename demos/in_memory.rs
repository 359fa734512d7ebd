//! Converts a CSV buffer built in memory and writes the Parquet bytes to the
//! path given on the command line.
//!
//!     cargo run --example in_memory -- /tmp/entries.parquet

use std::fs::File;
use std::io::Cursor;
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use csv2parquet::{Converter, Result};

#[derive(Parser)]
struct Opts {
    /// Output file.
    #[clap(name = "PARQUET", value_parser, value_hint = ValueHint::AnyPath)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let opts: Opts = Opts::parse();

    let data = vec![
        vec!["id", "entry"],
        vec!["220101", "john ran to the store"],
        vec!["220102", "bill ate cupcakes"],
        vec!["220103", "sue played in her sandbox"],
        vec!["0", "a"],
        vec!["1", "b"],
        vec!["2", "c"],
    ];

    let data = data
        .iter()
        .map(|x| x.join(","))
        .collect::<Vec<_>>()
        .join("\n");

    let output = File::create(&opts.output)?;
    let summary = Converter::default().convert_reader(Cursor::new(data.into_bytes()), output)?;

    println!(
        "wrote {} rows ({} columns) to {:?}",
        summary.rows,
        summary.schema.fields().len(),
        opts.output
    );
    Ok(())
}
