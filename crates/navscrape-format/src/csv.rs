//! Delimited text output format.

use navscrape_types::NavRecord;
use std::io::Write;

use crate::{FormatError, Formatter};

/// CSV formatter.
///
/// Field values are written verbatim, without quoting or escaping.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_navs<W: Write>(&self, records: &[NavRecord], mut writer: W) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "DATE{d}NAV")?;
        }

        for record in records {
            writeln!(writer, "{}{d}{}", record.date(), record.price())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn create_test_record() -> NavRecord {
        let mut record = NavRecord::new("2025-09-12", "13.49010");
        record.pf_buy = Some("13.49010".into());
        record.pf_sell = Some("13.49020".into());
        record
    }

    fn render(formatter: &CsvFormatter, records: &[NavRecord]) -> String {
        let mut output = Cursor::new(Vec::new());
        formatter.write_navs(records, &mut output).unwrap();
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn test_csv_navs() {
        let result = render(&CsvFormatter::new(), &[create_test_record()]);
        assert_eq!(result, "DATE,NAV\n2025-09-12,13.49010\n");
    }

    #[test]
    fn test_csv_keeps_order() {
        let records = [
            NavRecord::new("2025-09-12", "13.49010"),
            NavRecord::new("2025-09-10", "13.48000"),
        ];
        let result = render(&CsvFormatter::new(), &records);
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines, ["DATE,NAV", "2025-09-12,13.49010", "2025-09-10,13.48000"]);
    }

    #[test]
    fn test_csv_no_quoting() {
        let result = render(&CsvFormatter::new(), &[NavRecord::new("12 Sep, 2025", "1,000.5")]);
        assert!(result.ends_with("12 Sep, 2025,1,000.5\n"));
    }

    #[test]
    fn test_csv_no_header() {
        let formatter = CsvFormatter::new().with_header(false);
        let result = render(&formatter, &[create_test_record()]);
        assert!(!result.contains("DATE"));
    }

    #[test]
    fn test_csv_header_only_for_empty_history() {
        assert_eq!(render(&CsvFormatter::new(), &[]), "DATE,NAV\n");
    }

    #[test]
    fn test_tsv() {
        let formatter = CsvFormatter::tsv();
        let result = render(&formatter, &[create_test_record()]);
        assert_eq!(result, "DATE\tNAV\n2025-09-12\t13.49010\n");
    }
}
