//! Query input: reading and classification.

use std::fmt;
use std::io::BufRead;

/// What a query string is looked up as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryTarget {
    /// Reverse lookup of an IPv4-shaped address (paginated)
    Ip(String),
    /// Subdomain enumeration of a domain name (single page)
    Domain(String),
}

impl QueryTarget {
    /// Classifies a query, trimming surrounding whitespace first.
    pub fn classify(query: &str) -> Self {
        let query = query.trim();
        if is_ip_shaped(query) {
            QueryTarget::Ip(query.to_string())
        } else {
            QueryTarget::Domain(query.to_string())
        }
    }

    /// The query string itself.
    pub fn as_str(&self) -> &str {
        match self {
            QueryTarget::Ip(value) | QueryTarget::Domain(value) => value,
        }
    }
}

impl fmt::Display for QueryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true for four non-empty dot-separated segments.
///
/// Purely syntactic: octets are not range-checked, so `999.1.2.3` and
/// `a.b.c.d` are both IP-shaped.
pub fn is_ip_shaped(input: &str) -> bool {
    let parts: Vec<&str> = input.split('.').collect();
    parts.len() == 4 && parts.iter().all(|part| !part.is_empty())
}

/// Returns the first non-blank line of `reader`, trimmed.
///
/// # Errors
///
/// Returns any I/O error raised while reading.
pub fn read_query<R: BufRead>(reader: R) -> std::io::Result<Option<String>> {
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(Some(trimmed.to_string()));
        }
    }
    Ok(None)
}
