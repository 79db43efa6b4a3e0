//! Logger setup for the CLI.
//!
//! Library crates only log through the `log` facade; the binary installs
//! `env_logger` writing to stderr. `RUST_LOG` directives refine the level
//! chosen by `-v`.

use log::LevelFilter;

/// Maps the `-v` count to a level: warn, info, debug, then trace.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Builds the stderr logger for a `-v` count.
pub fn builder(verbose: u8) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for_verbosity(verbose))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .parse_default_env();
    builder
}

/// Installs the logger. A second call is ignored.
pub fn init(verbose: u8) {
    if builder(verbose).try_init().is_err() {
        log::debug!("logger already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(9), LevelFilter::Trace);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(1);
        init(3);
        log::info!("still logging");
    }
}
