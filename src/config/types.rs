//! Configuration types.
//!
//! This module defines the library configuration and the enums shared with the
//! command-line parser.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_FORMAT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Off) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// No log output at all
    Off,
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Built once at startup and handed to every component by reference.
///
/// # Examples
///
/// ```no_run
/// use rapiddns_query::Config;
///
/// let config = Config {
///     format: "json".to_string(),
///     verbose: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Output format tag (`csv`, `tsv`, `json`, `text`).
    ///
    /// Kept as raw text: an unknown tag only fails when the output file is written.
    pub format: String,

    /// Print diagnostics instead of exiting silently on failure
    pub verbose: bool,

    /// Explicit log level; falls back to `debug` (verbose) or `off`
    pub log_level: Option<LogLevel>,

    /// Log format
    pub log_format: LogFormat,

    /// Scheme and host of the RapidDNS site
    pub base_url: String,

    /// Directory receiving the output and scratch files
    pub output_dir: PathBuf,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Skip TLS certificate validation (the tool's historical behaviour)
    pub accept_invalid_certs: bool,
}

impl Config {
    /// Resolves the log filter once for the whole run.
    pub fn log_level_filter(&self) -> log::LevelFilter {
        match (&self.log_level, self.verbose) {
            (Some(level), _) => level.clone().into(),
            (None, true) => log::LevelFilter::Debug,
            (None, false) => log::LevelFilter::Off,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            verbose: false,
            log_level: None,
            log_format: LogFormat::Plain,
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("."),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_invalid_certs: true,
        }
    }
}
