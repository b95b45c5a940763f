//! Error handling.
//!
//! Failures are grouped into four kinds, all of which abort the lookup:
//! - **Network**: the request could not be sent or answered
//! - **Parse**: the response body could not be read as HTML
//! - **File system**: output or scratch files could not be created, written, or read
//! - **Configuration**: unknown output format

mod types;

// Re-export public API
pub use types::{InitializationError, QueryError};
