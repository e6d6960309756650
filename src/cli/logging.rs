use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Pick the log level from the global and per-command flags.
/// `quiet` wins over everything else.
pub fn log_level(debug: bool, verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if debug || verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initialize logging with the specified level
pub fn init_logging(level: LevelFilter) {
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("Failed to initialize logger: {}", e);
    }
}

/// Configure backtrace if trace is enabled
pub fn configure_backtrace(trace: bool) {
    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(false, false, false), LevelFilter::Info);
        assert_eq!(log_level(true, false, false), LevelFilter::Debug);
        assert_eq!(log_level(false, true, false), LevelFilter::Debug);
        assert_eq!(log_level(true, true, true), LevelFilter::Error);
    }
}
