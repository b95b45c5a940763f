//! Subdomain lookups against a local mock of rapiddns.io.

mod helpers;

use helpers::{file_names, result_page, test_config};
use httptest::{all_of, matchers::*, responders::*, Expectation, Server};
use rapiddns_query::initialization::init_client;
use rapiddns_query::{run_query_with, QueryTarget};

fn expect_subdomains(server: &Server, path: &'static str, body: String) {
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", path),
            request::query(url_decoded(contains(("full", "1")))),
        ])
        .respond_with(status_code(200).body(body)),
    );
}

#[tokio::test]
async fn test_subdomains_are_deduplicated_in_first_seen_order() {
    let server = Server::run();
    expect_subdomains(
        &server,
        "/subdomain/example.com",
        result_page(
            &["Domain", "Address", "Type"],
            &[
                &["a.example.com", "1.1.1.1", "A"],
                &["b.example.com", "2.2.2.2", "A"],
                &["a.example.com", "3.3.3.3", "A"],
                &["", "4.4.4.4", "A"],
                &["c.example.com", "5.5.5.5", "CNAME"],
                &["b.example.com", "6.6.6.6", "AAAA"],
            ],
            false,
        ),
    );

    let dir = tempfile::tempdir().unwrap();
    // The format setting does not apply to subdomain output
    let config = test_config(&server, dir.path(), "json");
    let client = init_client(&config).unwrap();
    let mut echo = Vec::new();

    let report = run_query_with(&client, &config, "example.com", &mut echo)
        .await
        .unwrap();

    assert_eq!(report.target, QueryTarget::Domain("example.com".to_string()));
    assert_eq!(report.records, 3);
    assert_eq!(report.pages, 1);
    assert_eq!(report.output_path, dir.path().join("example.com-rapiddns.out"));

    let content = std::fs::read_to_string(&report.output_path).unwrap();
    assert_eq!(content, "a.example.com\nb.example.com\nc.example.com\n");

    // Scratch file is gone
    assert_eq!(file_names(dir.path()), vec!["example.com-rapiddns.out"]);
}

#[tokio::test]
async fn test_page_without_table_writes_empty_output() {
    let server = Server::run();
    expect_subdomains(
        &server,
        "/subdomain/nothing.test",
        "<html><body><p>No result</p></body></html>".to_string(),
    );

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path(), "csv");
    let client = init_client(&config).unwrap();
    let mut echo = Vec::new();

    let report = run_query_with(&client, &config, "nothing.test", &mut echo)
        .await
        .unwrap();

    assert_eq!(report.records, 0);
    assert_eq!(std::fs::read_to_string(&report.output_path).unwrap(), "");
    assert!(echo.is_empty());
    assert_eq!(file_names(dir.path()), vec!["nothing.test-rapiddns.out"]);
}

#[tokio::test]
async fn test_missing_output_dir_fails_and_leaves_nothing() {
    let server = Server::run();
    expect_subdomains(
        &server,
        "/subdomain/example.org",
        result_page(&["Domain"], &[&["www.example.org"]], false),
    );

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let config = test_config(&server, &missing, "csv");
    let client = init_client(&config).unwrap();
    let mut echo = Vec::new();

    let err = run_query_with(&client, &config, "example.org", &mut echo)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("scratch file"));
    assert!(file_names(dir.path()).is_empty());
}
