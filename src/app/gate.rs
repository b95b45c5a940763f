//! Verbosity gate for failures.
//!
//! Verbose runs print the full error chain and finish with status 0; quiet
//! runs exit with status 1 without printing anything.

use colored::Colorize;
use std::process;

/// Exit status for a quiet failed run and for missing input.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Exit status after a failure has been reported in verbose mode.
pub const REPORTED_FAILURE_EXIT_CODE: i32 = 0;

/// The diagnostic to print for `err`, or `None` when not verbose.
pub fn failure_message(verbose: bool, err: &anyhow::Error) -> Option<String> {
    verbose.then(|| format!("ERROR: {err:#}"))
}

/// Exit status for a failed run.
pub fn failure_exit_code(verbose: bool) -> i32 {
    if verbose {
        REPORTED_FAILURE_EXIT_CODE
    } else {
        FAILURE_EXIT_CODE
    }
}

/// Reports `err` through the gate and terminates the process.
pub fn exit_with_failure(verbose: bool, err: &anyhow::Error) -> ! {
    if let Some(message) = failure_message(verbose, err) {
        eprintln!("{}", message.red());
    }
    process::exit(failure_exit_code(verbose))
}
