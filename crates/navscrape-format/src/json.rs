//! JSON output format.

use navscrape_types::NavRecord;
use serde::Serialize;
use std::io::Write;

use crate::{FormatError, Formatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// JSON array (standard JSON).
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON/JSONL).
    Ndjson,
}

/// JSON formatter.
///
/// Each record becomes `{"date": .., "nav": ..}` with the published strings.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for array style).
    pretty: bool,
}

#[derive(Serialize)]
struct NavRow<'a> {
    date: &'a str,
    nav: &'a str,
}

impl<'a> From<&'a NavRecord> for NavRow<'a> {
    fn from(record: &'a NavRecord) -> Self {
        Self {
            date: record.date(),
            nav: record.price(),
        }
    }
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (array style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Formatter for JsonFormatter {
    fn write_navs<W: Write>(&self, records: &[NavRecord], mut writer: W) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => {
                let rows: Vec<NavRow<'_>> = records.iter().map(NavRow::from).collect();
                if self.pretty {
                    serde_json::to_writer_pretty(&mut writer, &rows)?;
                } else {
                    serde_json::to_writer(&mut writer, &rows)?;
                }
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for record in records {
                    serde_json::to_writer(&mut writer, &NavRow::from(record))?;
                    writeln!(writer)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn create_test_record() -> NavRecord {
        NavRecord::new("2025-09-12", "13.49010")
    }

    #[test]
    fn test_json_array() {
        let formatter = JsonFormatter::new();
        let records = vec![create_test_record()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_navs(&records, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(result, "[{\"date\":\"2025-09-12\",\"nav\":\"13.49010\"}]\n");
    }

    #[test]
    fn test_ndjson() {
        let formatter = JsonFormatter::ndjson();
        let records = vec![create_test_record(), create_test_record()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_navs(&records, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "{\"date\":\"2025-09-12\",\"nav\":\"13.49010\"}");
    }

    #[test]
    fn test_pretty_json() {
        let formatter = JsonFormatter::new().with_pretty(true);
        let records = vec![create_test_record()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_navs(&records, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains('\n'));
        assert!(result.contains("  ")); // Indentation
    }
}
