//! Main application helpers.
//!
//! This module provides the failure-reporting policy used by the binary.

pub mod gate;

// Re-export public API
pub use gate::{
    exit_with_failure, failure_exit_code, failure_message, FAILURE_EXIT_CODE,
    REPORTED_FAILURE_EXIT_CODE,
};
