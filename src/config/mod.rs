//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (URLs, selectors, file naming)
//! - The library `Config` and its enums
//! - CLI option parsing

mod cli;
mod constants;
mod types;

pub use cli::Cli;
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
