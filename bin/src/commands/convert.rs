//! Convert command implementation.

use crate::display::Format;
use anyhow::{Context, Result};
use navscrape_lib::prelude::*;
use std::path::Path;

/// Convert a saved history page to the requested output format.
pub(crate) fn convert(page: &Path, output: &Path, format: Format, quiet: bool) -> Result<()> {
    let text = std::fs::read_to_string(page)
        .with_context(|| format!("Failed to read page: {}", page.display()))?;

    let conversion = pipeline::convert_page(&text, output, format.output_format())
        .with_context(|| format!("Failed to convert {}", page.display()))?;

    match conversion {
        Conversion::Written { rows, path } => {
            if !quiet {
                println!("Wrote {rows} lines to {}", path.display());
            }
        }
        Conversion::NoData => eprintln!("No NAV history found in {}", page.display()),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_saved_page() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("response.txt");
        let output = dir.path().join("BFIXED.tsv");
        std::fs::write(
            &page,
            r#"let performArray = JSON.parse('[{"pf_date":"2025-09-12","pf_price":"13.49010"}]');"#,
        )
        .unwrap();

        convert(&page, &output, Format::Tsv, true).unwrap();

        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "DATE\tNAV\n2025-09-12\t13.49010\n"
        );
    }

    #[test]
    fn test_convert_missing_page() {
        let dir = tempfile::tempdir().unwrap();
        let err = convert(
            &dir.path().join("absent.txt"),
            &dir.path().join("out.csv"),
            Format::Csv,
            true,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to read page"));
    }
}
