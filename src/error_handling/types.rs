//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error")]
    HttpClientError(#[from] ReqwestError),
}

/// Failures of a single lookup.
///
/// Every variant aborts the lookup; there is no retry and no partial output.
/// Messages name only the failed step; the underlying error is reachable
/// through `source()` so an `{:#}` chain prints it once.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The request could not be sent or no response arrived.
    #[error("HTTP request for {url} failed")]
    Request {
        /// Requested URL
        url: String,
        /// Underlying client error
        source: ReqwestError,
    },

    /// The response body could not be read as an HTML document.
    #[error("Failed to read HTML from {url}")]
    Body {
        /// Requested URL
        url: String,
        /// Underlying client error
        source: ReqwestError,
    },

    /// The lookup URL could not be built from the base URL and the query.
    #[error("Invalid lookup URL {url}")]
    InvalidUrl {
        /// Rejected URL
        url: String,
        /// Parser error
        source: url::ParseError,
    },

    /// Creating, writing, or reading a local file failed.
    #[error("{context}")]
    Io {
        /// What was being done
        context: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The output format tag is not one of csv, tsv, json, text.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Writing a CSV/TSV record failed.
    #[error("CSV write error")]
    Csv(#[from] csv::Error),

    /// Encoding the JSON document failed.
    #[error("JSON write error")]
    Json(#[from] serde_json::Error),

    /// The HTTP client could not be built.
    #[error(transparent)]
    Initialization(#[from] InitializationError),
}

impl QueryError {
    /// Wraps an I/O error with a description of the failed operation.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        QueryError::Io {
            context: context.into(),
            source,
        }
    }
}
