use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Pick the log level from the command line switches
pub fn log_level(debug: bool, quiet: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    }
}

/// Initialize logging with the specified level
pub fn init_logging(level: LevelFilter) {
    // A logger can only be installed once per process
    if let Err(e) = SimpleLogger::new().with_level(level).without_timestamps().init() {
        eprintln!("Failed to initialize logging: {}", e);
    }
}
