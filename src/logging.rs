use log::LevelFilter;

/// `-v` count to log level. Warnings are always shown.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the stderr logger. `RUST_LOG`, when set, takes precedence over
/// the verbosity flag. Calling this twice is harmless.
pub fn init(verbose: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(verbose))
        .format_timestamp(None)
        .parse_default_env();
    let _ = builder.try_init();
}
