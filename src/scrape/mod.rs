//! RapidDNS lookups.
//!
//! Two lookup shapes exist:
//! - IP: `/s/<ip>?page=N`, followed page by page until the table is empty or
//!   the pagination control has no next link
//! - Domain: `/subdomain/<domain>?full=1#result`, fetched once and deduplicated
//!
//! Requests are strictly sequential and failures are never retried.

mod domain;
mod ip;

use log::debug;
use url::Url;

use crate::error_handling::QueryError;

// Re-export public API
pub use domain::{dedup_lines, scrape_domain, DomainScrape};
pub use ip::{scrape_ip, IpResults};

fn parse_url(raw: String) -> Result<Url, QueryError> {
    Url::parse(&raw).map_err(|source| QueryError::InvalidUrl { url: raw, source })
}

/// Builds the URL of one page of an IP lookup.
///
/// # Errors
///
/// Returns `QueryError::InvalidUrl` if the result is not a valid URL.
pub fn ip_page_url(base_url: &str, ip: &str, page: u32) -> Result<Url, QueryError> {
    parse_url(format!(
        "{}/s/{ip}?page={page}",
        base_url.trim_end_matches('/')
    ))
}

/// Builds the URL of a full subdomain listing.
///
/// # Errors
///
/// Returns `QueryError::InvalidUrl` if the result is not a valid URL.
pub fn subdomain_url(base_url: &str, domain: &str) -> Result<Url, QueryError> {
    parse_url(format!(
        "{}/subdomain/{domain}?full=1#result",
        base_url.trim_end_matches('/')
    ))
}

/// Fetches a page body as text.
///
/// The HTTP status is not checked; whatever HTML comes back is handed to the
/// parser, which treats a page without a result table as empty.
///
/// # Errors
///
/// Returns `QueryError::Request` when the request fails and `QueryError::Body`
/// when the body cannot be read.
pub async fn fetch_page(client: &reqwest::Client, url: &Url) -> Result<String, QueryError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| QueryError::Request {
            url: url.to_string(),
            source,
        })?;

    debug!("{url} answered {}", response.status());

    response.text().await.map_err(|source| QueryError::Body {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_page_url() {
        let url = ip_page_url("https://rapiddns.io", "8.8.8.8", 3).unwrap();
        assert_eq!(url.as_str(), "https://rapiddns.io/s/8.8.8.8?page=3");
    }

    #[test]
    fn test_subdomain_url_keeps_fragment() {
        let url = subdomain_url("https://rapiddns.io/", "example.com").unwrap();
        assert_eq!(
            url.as_str(),
            "https://rapiddns.io/subdomain/example.com?full=1#result"
        );
        assert_eq!(url.path(), "/subdomain/example.com");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ip_page_url("not a base", "1.2.3.4", 1).unwrap_err();
        assert!(matches!(err, QueryError::InvalidUrl { .. }));
    }
}
