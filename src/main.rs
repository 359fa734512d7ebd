use std::process::ExitCode;

use arrow::datatypes::Schema;
use csv2parquet::cli::Opts;
use csv2parquet::error::EXIT_SUCCESS;
use csv2parquet::schema::schema_to_json;
use csv2parquet::{logging, Converter, Error, Result};

fn main() -> ExitCode {
    let opts = match Opts::from_args(std::env::args_os()) {
        Ok(opts) => opts,
        Err(error) => error.exit(),
    };
    logging::init(opts.verbose);

    match run(&opts) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(error) => {
            report(&error);
            ExitCode::from(error.exit_code())
        }
    }
}

fn run(opts: &Opts) -> Result<()> {
    let input = opts.input()?;
    let converter = Converter::new(opts.convert_options()?);

    if opts.print_schema || opts.dry {
        let schema = converter.schema(input)?;
        eprintln!("Schema:");
        print_schema(&schema)?;
        if opts.dry {
            return Ok(());
        }
    }

    converter.convert(input)?;
    Ok(())
}

fn print_schema(schema: &Schema) -> Result<()> {
    println!("{}", schema_to_json(schema)?);
    Ok(())
}

fn report(error: &Error) {
    match error {
        Error::Usage { args } => {
            println!("{}", error);
            println!("{:?}", args);
        }
        _ if error.is_validation() => println!("{}", error),
        _ => eprintln!("error: {}", error),
    }
}
