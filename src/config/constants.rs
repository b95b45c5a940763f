//! Configuration constants.
//!
//! Defaults for the CLI, the RapidDNS URL layout, and the HTML selectors that
//! the scraper relies on.

/// Public RapidDNS endpoint.
pub const DEFAULT_BASE_URL: &str = "https://rapiddns.io";

/// Default output format tag.
pub const DEFAULT_FORMAT: &str = "csv";

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Output file naming
/// Suffix for IP lookups: `<ip>-rapiddns-ip.out`
pub const IP_OUTPUT_SUFFIX: &str = "-rapiddns-ip.out";
/// Suffix for subdomain lookups: `<domain>-rapiddns.out`
pub const DOMAIN_OUTPUT_SUFFIX: &str = "-rapiddns.out";
/// Prefix of the scratch file used while deduplicating subdomains.
pub const SCRATCH_FILE_PREFIX: &str = "domains-temp";

/// Environment variables that switch on verbose mode when set to a non-empty value.
pub const VERBOSE_ENV_VARS: [&str; 2] = ["DELVE", "GODEBUG"];

// CSS selectors
// These track the markup of rapiddns.io and are only used by `crate::parse`.
/// Header cells of the result table
pub const RESULT_HEADER_SELECTOR: &str = "table.table.table-striped.table-bordered thead tr th";
/// Body rows of the result table
pub const RESULT_ROW_SELECTOR: &str = "table.table.table-striped.table-bordered tbody tr";
/// Data cells within a body row
pub const RESULT_CELL_SELECTOR: &str = "td";
/// Link of the page item right after the active one
pub const NEXT_PAGE_SELECTOR: &str = "ul.pagination li.page-item.active + li.page-item a";
