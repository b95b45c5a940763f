//! Live console echo of discovered rows.

use colored::Colorize;
use std::io::Write;

use crate::export::types::OutputFormat;
use crate::parse::Row;

/// Renders one row on a single line in the given format.
///
/// JSON rows are compact arrays; the other formats join cells with their
/// separator without quoting.
pub fn format_row(row: &[String], format: OutputFormat) -> String {
    match format {
        OutputFormat::Csv => row.join(","),
        OutputFormat::Tsv => row.join("\t"),
        OutputFormat::Json => serde_json::to_string(row).unwrap_or_default(),
        OutputFormat::Text => row.join(" "),
    }
}

/// Prints a row in green. Write errors are ignored.
///
/// `None` means the format tag was not recognised; nothing is printed and the
/// problem is reported when the output file is written.
pub fn echo_row(out: &mut dyn Write, row: &Row, format: Option<OutputFormat>) {
    if let Some(format) = format {
        let _ = writeln!(out, "{}", format_row(row, format).green());
    }
}

/// Prints a plain line in green. Write errors are ignored.
pub fn echo_line(out: &mut dyn Write, line: &str) {
    let _ = writeln!(out, "{}", line.green());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_format_row_variants() {
        let r = row(&["a", "b c", ""]);
        assert_eq!(format_row(&r, OutputFormat::Csv), "a,b c,");
        assert_eq!(format_row(&r, OutputFormat::Tsv), "a\tb c\t");
        assert_eq!(format_row(&r, OutputFormat::Json), r#"["a","b c",""]"#);
        assert_eq!(format_row(&r, OutputFormat::Text), "a b c ");
    }

    #[test]
    fn test_echo_row_unknown_format_prints_nothing() {
        let mut out = Vec::new();
        echo_row(&mut out, &row(&["a"]), None);
        assert!(out.is_empty());
    }

    #[test]
    fn test_echo_row_contains_rendered_row() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        echo_row(&mut out, &row(&["a", "b"]), Some(OutputFormat::Csv));
        assert_eq!(String::from_utf8(out).unwrap(), "a,b\n");
    }
}
