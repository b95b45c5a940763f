use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::config::{
    NEXT_PAGE_SELECTOR, RESULT_CELL_SELECTOR, RESULT_HEADER_SELECTOR, RESULT_ROW_SELECTOR,
};

/// One table row: the trimmed text of each cell, in column order.
pub type Row = Vec<String>;

static HEADER_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(RESULT_HEADER_SELECTOR)
        .expect("Failed to parse result header selector - this is a bug")
});

static ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(RESULT_ROW_SELECTOR).expect("Failed to parse result row selector - this is a bug")
});

static CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(RESULT_CELL_SELECTOR).expect("Failed to parse cell selector - this is a bug")
});

static NEXT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(NEXT_PAGE_SELECTOR).expect("Failed to parse pagination selector - this is a bug")
});

/// Everything the scraper needs from one RapidDNS result page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    /// Header cells of the result table (`thead tr th`), possibly empty
    pub headers: Row,
    /// Body rows that have at least one cell, in document order
    pub rows: Vec<Row>,
    /// Number of `tbody tr` elements, including rows without cells
    pub row_elements: usize,
    /// Whether the pagination control links to a following page
    pub has_next_page: bool,
}

impl ResultTable {
    /// True when the result table has no body rows at all.
    pub fn is_empty(&self) -> bool {
        self.row_elements == 0
    }
}

fn cell_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Extracts the result table and pagination state from a page body.
///
/// Missing markup is not an error: a page without the table yields an empty
/// `ResultTable` with `has_next_page == false`.
pub fn extract_table(html: &str) -> ResultTable {
    let document = Html::parse_document(html);

    let headers: Row = document.select(&HEADER_SELECTOR).map(cell_text).collect();

    let mut rows = Vec::new();
    let mut row_elements = 0;
    for tr in document.select(&ROW_SELECTOR) {
        row_elements += 1;
        let row: Row = tr.select(&CELL_SELECTOR).map(cell_text).collect();
        if !row.is_empty() {
            rows.push(row);
        }
    }

    let has_next_page = document.select(&NEXT_SELECTOR).next().is_some();

    ResultTable {
        headers,
        rows,
        row_elements,
        has_next_page,
    }
}

/// Extracts the first cell of every body row, skipping blank values.
///
/// On subdomain pages the first column holds the subdomain name.
pub fn extract_first_column(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(&ROW_SELECTOR)
        .filter_map(|tr| tr.select(&CELL_SELECTOR).next())
        .map(cell_text)
        .filter(|value| !value.is_empty())
        .collect()
}
