//! Paginated IP lookup.

use log::{debug, info};
use std::io::Write;

use crate::config::Config;
use crate::error_handling::QueryError;
use crate::export::{echo_row, OutputFormat};
use crate::parse::{extract_table, ResultTable, Row};
use crate::scrape::{fetch_page, ip_page_url};

/// Rows accumulated across the pages of an IP lookup.
///
/// The header row is taken from the first page only and sits at index 0;
/// body rows follow in page order. No deduplication is applied.
#[derive(Debug, Default)]
pub struct IpResults {
    rows: Vec<Row>,
    pages: u32,
}

impl IpResults {
    /// Adds one parsed page and echoes its body rows.
    ///
    /// Returns true if the next page should be requested: the page had body
    /// rows and its pagination control links to a following page.
    pub fn absorb(
        &mut self,
        table: ResultTable,
        format: Option<OutputFormat>,
        echo: &mut dyn Write,
    ) -> bool {
        self.pages += 1;
        let has_next_page = table.has_next_page;

        if self.pages == 1 && !table.headers.is_empty() {
            self.rows.push(table.headers.clone());
        }

        if table.is_empty() {
            info!("No rows found on page {}", self.pages);
            return false;
        }

        for row in table.rows {
            echo_row(echo, &row, format);
            self.rows.push(row);
        }

        has_next_page
    }

    /// Accumulated rows, header first.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of pages absorbed so far.
    pub fn pages(&self) -> u32 {
        self.pages
    }
}

/// Runs an IP lookup, following pagination until it runs out.
///
/// Rows are echoed to `echo` as they are discovered, in the configured format.
/// An unrecognised format echoes nothing; it is rejected later when the output
/// file is written.
///
/// # Errors
///
/// The first network or URL error aborts the whole lookup.
pub async fn scrape_ip(
    client: &reqwest::Client,
    config: &Config,
    ip: &str,
    echo: &mut dyn Write,
) -> Result<IpResults, QueryError> {
    let format = OutputFormat::parse(&config.format).ok();
    let mut results = IpResults::default();

    loop {
        let page = results.pages() + 1;
        let url = ip_page_url(&config.base_url, ip, page)?;
        info!("Page {page}: {url}");

        let body = fetch_page(client, &url).await?;
        let table = extract_table(&body);
        debug!(
            "Page {page}: {} rows, next page: {}",
            table.rows.len(),
            table.has_next_page
        );

        if !results.absorb(table, format, echo) {
            break;
        }
    }

    Ok(results)
}
