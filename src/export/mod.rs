//! Output of lookup results.
//!
//! This module serializes accumulated rows to the output file (CSV, TSV, JSON,
//! or plain text) and echoes rows to the console as they are discovered.

mod console;
mod types;
mod writer;

pub use console::{echo_line, echo_row, format_row};
pub use types::OutputFormat;
pub use writer::{write_output, write_rows};
