//! File output for accumulated rows.

use csv::{QuoteStyle, WriterBuilder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error_handling::QueryError;
use crate::export::types::OutputFormat;
use crate::parse::Row;

/// Serializes `rows` into `writer`.
///
/// - `csv`/`tsv`: delimited records, quoted only when a field holds the
///   delimiter, a double quote, or a line break. Records may differ in length.
/// - `json`: array of arrays of strings, 2-space indentation, trailing newline.
/// - `text`: cells joined by single spaces, one row per line.
///
/// # Errors
///
/// Returns an error if serialization or the underlying write fails.
pub fn write_rows<W: Write>(
    mut writer: W,
    rows: &[Row],
    format: OutputFormat,
) -> Result<(), QueryError> {
    match format {
        OutputFormat::Csv | OutputFormat::Tsv => {
            let delimiter = format.delimiter().unwrap_or(b',');
            let mut csv_writer = WriterBuilder::new()
                .delimiter(delimiter)
                .flexible(true)
                .quote_style(QuoteStyle::Necessary)
                .from_writer(writer);
            for row in rows {
                csv_writer.write_record(row)?;
            }
            csv_writer
                .flush()
                .map_err(|e| QueryError::io("Failed to flush output", e))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, rows)?;
            writeln!(writer).map_err(|e| QueryError::io("Failed to write output", e))?;
        }
        OutputFormat::Text => {
            for row in rows {
                writeln!(writer, "{}", row.join(" "))
                    .map_err(|e| QueryError::io("Failed to write output", e))?;
            }
        }
    }
    Ok(())
}

/// Writes `rows` to `path` in the format named by `format`.
///
/// The format tag is validated before the file is opened, so an unsupported
/// tag leaves any existing file untouched.
///
/// # Errors
///
/// Returns `QueryError::UnsupportedFormat` for an unknown tag, or an I/O or
/// serialization error if writing fails.
pub fn write_output(path: &Path, rows: &[Row], format: &str) -> Result<(), QueryError> {
    let format = OutputFormat::parse(format)?;

    let file = File::create(path).map_err(|e| {
        QueryError::io(
            format!("Failed to create output file {}", path.display()),
            e,
        )
    })?;
    let mut writer = BufWriter::new(file);
    write_rows(&mut writer, rows, format)?;
    writer.flush().map_err(|e| {
        QueryError::io(format!("Failed to write output file {}", path.display()), e)
    })?;

    log::debug!("Wrote {} rows to {} as {format}", rows.len(), path.display());
    Ok(())
}
