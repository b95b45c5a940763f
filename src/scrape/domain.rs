//! Subdomain lookup with deduplicated output.

use log::{debug, info};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::{Config, DOMAIN_OUTPUT_SUFFIX, SCRATCH_FILE_PREFIX};
use crate::error_handling::QueryError;
use crate::export::echo_line;
use crate::parse::extract_first_column;
use crate::scrape::{fetch_page, subdomain_url};

/// Outcome of a subdomain lookup.
#[derive(Debug, Clone)]
pub struct DomainScrape {
    /// File holding the deduplicated subdomains
    pub output_path: PathBuf,
    /// Number of subdomains written
    pub unique: usize,
}

/// Copies non-blank lines from `reader` to `writer`, dropping repeats.
///
/// Lines are compared exactly and keep first-seen order. Each written line is
/// also echoed to `echo`. Returns the number of lines written.
///
/// # Errors
///
/// Returns `QueryError::Io` if reading or writing fails.
pub fn dedup_lines<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    echo: &mut dyn Write,
) -> Result<usize, QueryError> {
    let mut seen = HashSet::new();

    for line in reader.lines() {
        let line = line.map_err(|e| QueryError::io("Failed to read scratch file", e))?;
        if line.trim().is_empty() || seen.contains(&line) {
            continue;
        }
        writeln!(writer, "{line}").map_err(|e| QueryError::io("Failed to write output", e))?;
        echo_line(echo, &line);
        seen.insert(line);
    }

    Ok(seen.len())
}

fn stage_lines(dir: &Path, lines: &[String]) -> Result<NamedTempFile, QueryError> {
    let scratch = tempfile::Builder::new()
        .prefix(SCRATCH_FILE_PREFIX)
        .suffix(".txt")
        .tempfile_in(dir)
        .map_err(|e| QueryError::io("Failed to create scratch file", e))?;

    let mut writer = BufWriter::new(scratch.as_file());
    for line in lines {
        writeln!(writer, "{line}").map_err(|e| QueryError::io("Failed to write scratch file", e))?;
    }
    writer
        .flush()
        .map_err(|e| QueryError::io("Failed to write scratch file", e))?;
    drop(writer);

    Ok(scratch)
}

/// Runs a subdomain lookup for `domain`.
///
/// The first column of every result row is staged in a scratch file, then
/// written to `<domain>-rapiddns.out` once per distinct value. The output is
/// always one subdomain per line; `Config::format` does not apply here. The
/// scratch file is removed whether or not the lookup succeeds.
///
/// # Errors
///
/// Returns the first network, URL, or file-system error.
pub async fn scrape_domain(
    client: &reqwest::Client,
    config: &Config,
    domain: &str,
    echo: &mut dyn Write,
) -> Result<DomainScrape, QueryError> {
    let url = subdomain_url(&config.base_url, domain)?;
    info!("Fetching {url}");

    let body = fetch_page(client, &url).await?;
    let subdomains = extract_first_column(&body);
    debug!("Found {} subdomain rows for {domain}", subdomains.len());

    let scratch = stage_lines(&config.output_dir, &subdomains)?;

    let output_path = config
        .output_dir
        .join(format!("{domain}{DOMAIN_OUTPUT_SUFFIX}"));
    let output = File::create(&output_path).map_err(|e| {
        QueryError::io(
            format!("Failed to create output file {}", output_path.display()),
            e,
        )
    })?;

    let staged = scratch
        .reopen()
        .map_err(|e| QueryError::io("Failed to open scratch file", e))?;

    let mut writer = BufWriter::new(output);
    let unique = dedup_lines(BufReader::new(staged), &mut writer, echo)?;
    writer.flush().map_err(|e| {
        QueryError::io(format!("Failed to write output file {}", output_path.display()), e)
    })?;

    if let Err(e) = scratch.close() {
        debug!("Failed to remove scratch file: {e}");
    }

    Ok(DomainScrape {
        output_path,
        unique,
    })
}
