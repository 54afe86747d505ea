//! Structured logging with tracing
//!
//! Configures the tracing subscriber from `LoggingConfig`. The
//! `WAYFINDER_LOG` environment variable overrides the configured level
//! with a full EnvFilter directive.

use tracing::{Level, debug};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use wayfinder_domain::error::{Error, Result};

use crate::config::LoggingConfig;

/// Initialize logging with the provided configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter = EnvFilter::try_from_env("WAYFINDER_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    // Types differ between the two fmt layers so the branches stay separate
    if config.json_format {
        let stdout = fmt::layer().json().with_target(true);
        tracing_subscriber::registry()
            .with(filter)
            .with(stdout)
            .init();
    } else {
        let stdout = fmt::layer().with_target(true);
        tracing_subscriber::registry()
            .with(filter)
            .with(stdout)
            .init();
    }

    debug!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::config(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}
