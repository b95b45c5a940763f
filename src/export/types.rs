//! Export types.

use strum_macros::{Display, EnumIter, EnumString};

use crate::error_handling::QueryError;

/// Serialization applied to IP lookup results, on the console and in the file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    /// Comma-separated values
    Csv,
    /// Tab-separated values
    Tsv,
    /// Array of arrays of strings, pretty-printed
    Json,
    /// Cells joined by single spaces
    Text,
}

impl OutputFormat {
    /// Parses a format tag.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::UnsupportedFormat` for anything but csv, tsv, json, text.
    pub fn parse(tag: &str) -> Result<Self, QueryError> {
        tag.parse()
            .map_err(|_| QueryError::UnsupportedFormat(tag.to_string()))
    }

    /// Field delimiter for the delimited formats.
    pub fn delimiter(self) -> Option<u8> {
        match self {
            OutputFormat::Csv => Some(b','),
            OutputFormat::Tsv => Some(b'\t'),
            OutputFormat::Json | OutputFormat::Text => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_known_formats() {
        for format in OutputFormat::iter() {
            assert_eq!(OutputFormat::parse(&format.to_string()).unwrap(), format);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("Tsv").unwrap(), OutputFormat::Tsv);
    }

    #[test]
    fn test_parse_unknown_format() {
        let err = OutputFormat::parse("xml").unwrap_err();
        assert!(matches!(err, QueryError::UnsupportedFormat(ref tag) if tag == "xml"));
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
        assert_eq!(OutputFormat::Text.to_string(), "text");
    }
}
