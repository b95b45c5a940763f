// Shared test helpers for building RapidDNS-like pages and test configs.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use httptest::Server;
use rapiddns_query::Config;
use std::path::Path;

/// Builds a page holding the result table and an optional pagination control.
#[allow(dead_code)] // Used by other test files
pub fn result_page(headers: &[&str], rows: &[&[&str]], has_next: bool) -> String {
    let thead: String = if headers.is_empty() {
        String::new()
    } else {
        let cells: String = headers.iter().map(|h| format!("<th>{h}</th>")).collect();
        format!("<tr>{cells}</tr>")
    };

    let tbody: String = rows
        .iter()
        .map(|row| {
            let cells: String = row.iter().map(|c| format!("<td>{c}</td>")).collect();
            format!("<tr>{cells}</tr>")
        })
        .collect();

    let next_item = if has_next {
        r#"<li class="page-item"><a class="page-link" href="?page=next">Next</a></li>"#
    } else {
        ""
    };

    format!(
        r##"<html><body>
<table class="table table-striped table-bordered">
<thead>{thead}</thead>
<tbody>{tbody}</tbody>
</table>
<ul class="pagination">
<li class="page-item active"><a class="page-link" href="#">current</a></li>
{next_item}
</ul>
</body></html>"##
    )
}

/// Creates a config pointed at the mock server and writing into `output_dir`.
#[allow(dead_code)] // Used by other test files
pub fn test_config(server: &Server, output_dir: &Path, format: &str) -> Config {
    Config {
        format: format.to_string(),
        base_url: format!("http://{}", server.addr()),
        output_dir: output_dir.to_path_buf(),
        timeout_seconds: 5,
        user_agent: "rapiddns_query-test/1.0".to_string(),
        ..Default::default()
    }
}

/// Lists file names in `dir`, sorted.
#[allow(dead_code)] // Used by other test files
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| {
            entry
                .expect("Failed to read directory entry")
                .file_name()
                .to_string_lossy()
                .to_string()
        })
        .collect();
    names.sort();
    names
}
