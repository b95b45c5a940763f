//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_FORMAT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, VERBOSE_ENV_VARS,
};
use crate::config::types::{Config, LogFormat, LogLevel};

const AFTER_HELP: &str = "\
If <QUERY> is not supplied, the first non-blank line of stdin is used.

Examples:
  rapiddns-query 8.8.8.8 --format=json --verbose
  cat iplist.txt | rapiddns-query --format=csv";

/// Command-line options.
#[derive(Debug, Parser)]
#[command(
    name = "rapiddns-query",
    version,
    about = "Query rapiddns.io for an IP address or a domain and save the results",
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// IP address or domain to look up
    pub query: Option<String>,

    /// Output format: csv, tsv, json, text
    #[arg(long, default_value = DEFAULT_FORMAT)]
    pub format: String,

    /// Print detailed progress and errors to the screen
    #[arg(long)]
    pub verbose: bool,

    /// Log level (defaults to debug with --verbose, off otherwise)
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// RapidDNS scheme and host (for mirrors)
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory for the output file
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Validate TLS certificates (skipped by default)
    #[arg(long)]
    pub verify_tls: bool,
}

impl Cli {
    /// Builds the run configuration.
    ///
    /// Verbose mode is on when `--verbose` is given or when any of the
    /// debugger environment variables (`DELVE`, `GODEBUG`) is set to a
    /// non-empty value. `env` looks a variable up by name.
    pub fn to_config<F>(&self, env: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let verbose = self.verbose
            || VERBOSE_ENV_VARS
                .iter()
                .any(|name| env(*name).is_some_and(|value| !value.is_empty()));

        Config {
            format: self.format.to_lowercase(),
            verbose,
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            base_url: self.base_url.clone(),
            output_dir: self.output_dir.clone(),
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
            accept_invalid_certs: !self.verify_tls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_verbose_from_flag() {
        let cli = Cli::try_parse_from(["rapiddns-query", "example.com", "--verbose"]).unwrap();
        assert!(cli.to_config(no_env).verbose);
    }

    #[test]
    fn test_verbose_from_env() {
        let cli = Cli::try_parse_from(["rapiddns-query", "example.com"]).unwrap();
        let config = cli.to_config(|name| (name == "GODEBUG").then(|| "1".to_string()));
        assert!(config.verbose);

        let config = cli.to_config(|name| (name == "DELVE").then(|| "yes".to_string()));
        assert!(config.verbose);
    }

    #[test]
    fn test_empty_env_value_is_not_verbose() {
        let cli = Cli::try_parse_from(["rapiddns-query", "example.com"]).unwrap();
        let config = cli.to_config(|_| Some(String::new()));
        assert!(!config.verbose);
    }

    #[test]
    fn test_format_is_lowercased() {
        let cli = Cli::try_parse_from(["rapiddns-query", "1.2.3.4", "--format=JSON"]).unwrap();
        assert_eq!(cli.to_config(no_env).format, "json");
    }

    #[test]
    fn test_verify_tls_flips_cert_policy() {
        let cli = Cli::try_parse_from(["rapiddns-query", "1.2.3.4"]).unwrap();
        assert!(cli.to_config(no_env).accept_invalid_certs);

        let cli = Cli::try_parse_from(["rapiddns-query", "1.2.3.4", "--verify-tls"]).unwrap();
        assert!(!cli.to_config(no_env).accept_invalid_certs);
    }
}
