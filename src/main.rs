//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `rapiddns_query` library that handles:
//! - Command-line argument parsing
//! - Reading the query from stdin when no argument is given
//! - Logger initialization
//! - The verbosity gate and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::io;
use std::process;

use rapiddns_query::app::{exit_with_failure, FAILURE_EXIT_CODE};
use rapiddns_query::initialization::init_logger_with;
use rapiddns_query::input::read_query;
use rapiddns_query::{run_query, Cli};

fn print_missing_input() {
    println!("No input provided.\n");
    let _ = Cli::command().print_help();
    println!();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => FAILURE_EXIT_CODE,
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    // Verbosity is resolved once here and carried in the config
    let config = cli.to_config(|name| std::env::var(name).ok());

    if let Err(e) = init_logger_with(config.log_level_filter(), config.log_format.clone())
        .context("Failed to initialize logger")
    {
        exit_with_failure(config.verbose, &e);
    }

    let query = match cli.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        Some(query) => query.to_string(),
        None => match read_query(io::stdin().lock()) {
            Ok(Some(query)) => query,
            Ok(None) => {
                print_missing_input();
                process::exit(FAILURE_EXIT_CODE);
            }
            Err(e) => {
                let err = anyhow::Error::new(e).context("Failed to read query from stdin");
                exit_with_failure(config.verbose, &err);
            }
        },
    };

    match run_query(&config, &query)
        .await
        .with_context(|| format!("Lookup of {query} failed"))
    {
        Ok(report) => println!("All data saved to {}.", report.output_path.display()),
        Err(e) => exit_with_failure(config.verbose, &e),
    }
}
