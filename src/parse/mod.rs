//! HTML parsing of RapidDNS result pages.
//!
//! The CSS selectors used here are a compatibility contract with the markup of
//! rapiddns.io. Nothing outside this module looks at the HTML.
//!
//! All parsing is done using CSS selectors via the `scraper` crate.

mod table;

// Re-export public API
pub use table::{extract_first_column, extract_table, ResultTable, Row};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
