// Logging setup for the scaffolder

use tracing::Level;

/// Parse a configured level name, defaulting to INFO
pub fn parse_level(name: &str) -> Level {
    match name.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Resolve the effective level from configuration and CLI flags
///
/// `-q` wins over everything; each `-v` raises the configured level by one
/// step.
pub fn effective_level(configured: &str, verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }

    let mut level = parse_level(configured);
    for _ in 0..verbose {
        level = match level {
            Level::ERROR => Level::WARN,
            Level::WARN => Level::INFO,
            Level::INFO => Level::DEBUG,
            _ => Level::TRACE,
        };
    }
    level
}

/// Install the global subscriber, writing to stderr
pub fn init_logging(level: Level) {
    let debug = level >= Level::DEBUG;

    // try_init: a subscriber may already be installed in tests
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(debug)
        .with_thread_ids(debug)
        .with_writer(std::io::stderr)
        .try_init();
}
