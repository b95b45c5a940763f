//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Emoji and colored label for a log level in plain output.
fn paint_level(level: log::Level) -> (&'static str, ColoredString) {
    let label = level.to_string();
    match level {
        log::Level::Error => ("❌", label.red()),
        log::Level::Warn => ("⚠️", label.yellow()),
        log::Level::Info => ("✔️", label.green()),
        log::Level::Debug => ("🔍", label.blue()),
        log::Level::Trace => ("🔬", label.purple()),
    }
}

/// Per-module levels, never above `level` so `Off` silences everything.
fn module_filters(level: LevelFilter) -> [(&'static str, LevelFilter); 6] {
    [
        ("html5ever", level.min(LevelFilter::Error)),
        ("selectors", level.min(LevelFilter::Warn)),
        ("reqwest", level.min(LevelFilter::Info)),
        ("hyper", level.min(LevelFilter::Info)),
        ("hyper_util", level.min(LevelFilter::Info)),
        ("rapiddns_query", level),
    ]
}

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors and emojis) and JSON formats for structured logging.
///
/// `RUST_LOG` is read first, but the provided `level` always overrides it, so a
/// non-verbose run (`LevelFilter::Off`) stays silent.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if logger initialization fails.
///
/// # Examples
///
/// ```bash
/// # Progress and debug output
/// rapiddns-query 8.8.8.8 --verbose
///
/// # Machine-readable logs
/// rapiddns-query example.com --verbose --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    for (module, filter) in module_filters(level) {
        builder.filter_module(module, filter);
    }

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let (emoji, level) = paint_level(record.level());
                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    emoji,
                    record.target().cyan(),
                    level,
                    record.args()
                )
            });
        }
    }

    // try_init so tests can call this more than once per process
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}
