//! rapiddns_query library: RapidDNS lookups for IP addresses and domains
//!
//! This library queries rapiddns.io, scrapes the result table out of the
//! returned HTML, and saves the rows to a local file.
//!
//! - An IP-shaped query (four non-empty dot-separated parts) is a reverse
//!   lookup. Every result page is fetched in turn and the rows are written to
//!   `<ip>-rapiddns-ip.out` as CSV, TSV, JSON, or plain text.
//! - Anything else is a subdomain lookup. The subdomain column is
//!   deduplicated and written one per line to `<domain>-rapiddns.out`.
//!
//! # Example
//!
//! ```no_run
//! use rapiddns_query::{run_query, Config};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     format: "json".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_query(&config, "8.8.8.8").await?;
//! println!("{} rows saved to {}", report.records, report.output_path.display());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod input;
pub mod parse;
pub mod scrape;

// Re-export public API
pub use config::{Cli, Config, LogFormat, LogLevel};
pub use error_handling::QueryError;
pub use export::OutputFormat;
pub use input::QueryTarget;
pub use run::{run_query, run_query_with, QueryReport};

// Lookup pipeline: classify, scrape, write
mod run {
    use log::info;
    use std::io::Write;
    use std::path::PathBuf;

    use crate::config::{Config, IP_OUTPUT_SUFFIX};
    use crate::error_handling::QueryError;
    use crate::export::write_output;
    use crate::initialization::init_client;
    use crate::input::QueryTarget;
    use crate::scrape::{scrape_domain, scrape_ip};

    /// Results of a completed lookup.
    #[derive(Debug, Clone)]
    pub struct QueryReport {
        /// The classified query
        pub target: QueryTarget,
        /// File the results were written to
        pub output_path: PathBuf,
        /// Rows (IP lookups, header included) or subdomains written
        pub records: usize,
        /// Result pages fetched
        pub pages: u32,
    }

    /// Runs one lookup with a fresh HTTP client, echoing results to stdout.
    ///
    /// # Errors
    ///
    /// Returns the first network, parse, file-system, or format error. Nothing
    /// is retried.
    pub async fn run_query(config: &Config, query: &str) -> Result<QueryReport, QueryError> {
        let client = init_client(config)?;
        let mut stdout = std::io::stdout();
        run_query_with(&client, config, query, &mut stdout).await
    }

    /// Runs one lookup with the given client, echoing results to `echo`.
    ///
    /// # Errors
    ///
    /// Same as [`run_query`].
    pub async fn run_query_with(
        client: &reqwest::Client,
        config: &Config,
        query: &str,
        echo: &mut dyn Write,
    ) -> Result<QueryReport, QueryError> {
        let target = QueryTarget::classify(query);
        info!("Looking up {target:?}");

        match &target {
            QueryTarget::Ip(ip) => {
                let results = scrape_ip(client, config, ip, echo).await?;

                let output_path = config.output_dir.join(format!("{ip}{IP_OUTPUT_SUFFIX}"));
                write_output(&output_path, results.rows(), &config.format)?;

                Ok(QueryReport {
                    records: results.rows().len(),
                    output_path,
                    pages: results.pages(),
                    target: target.clone(),
                })
            }
            QueryTarget::Domain(domain) => {
                let scrape = scrape_domain(client, config, domain, echo).await?;
                Ok(QueryReport {
                    records: scrape.unique,
                    output_path: scrape.output_path,
                    pages: 1,
                    target: target.clone(),
                })
            }
        }
    }
}
