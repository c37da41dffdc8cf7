//! Repair and decoding of captured arrays.

use navscrape_types::NavRecord;
use serde::de::DeserializeOwned;
use std::borrow::Cow;

/// Wraps `text` in `[` … `]` unless it already starts with `[`.
///
/// Legacy captures hold only the array contents; this restores a parseable
/// array literal. Surrounding whitespace is dropped.
#[must_use]
pub fn ensure_array(text: &str) -> Cow<'_, str> {
    let trimmed = text.trim();
    if trimmed.starts_with('[') {
        Cow::Borrowed(trimmed)
    } else {
        Cow::Owned(format!("[{trimmed}]"))
    }
}

/// Decodes captured array text into records of type `T`.
///
/// The text is re-wrapped with [`ensure_array`] first. If it does not decode
/// as-is and contains backslashes, it is decoded once more after resolving
/// the escapes of the surrounding single-quoted script literal (`\'`, `\\`,
/// `\uXXXX`, ...), which is what the page's own `JSON.parse` sees.
///
/// # Errors
///
/// Returns the original decoding error if neither attempt succeeds.
pub fn decode_array<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, serde_json::Error> {
    let wrapped = ensure_array(text);
    match serde_json::from_str(&wrapped) {
        Ok(records) => Ok(records),
        Err(e) if wrapped.contains('\\') => {
            serde_json::from_str(&unescape_script_literal(&wrapped)).map_err(|_| e)
        }
        Err(e) => Err(e),
    }
}

/// Decodes captured `performArray` text into NAV records.
///
/// # Errors
///
/// Returns an error if the text is not a JSON array of objects that each
/// carry string `pf_date` and `pf_price` fields.
pub fn decode_nav_records(text: &str) -> Result<Vec<NavRecord>, serde_json::Error> {
    decode_array(text)
}

fn unescape_script_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('\n') => {}
            Some('u') => {
                let hex: String = chars.clone().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if hex.len() == 4 => {
                        out.push(decoded);
                        chars.nth(3);
                    }
                    // Lone surrogates stay escaped so JSON can pair them.
                    _ => out.push_str("\\u"),
                }
            }
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use navscrape_types::FundEntry;

    #[test]
    fn test_ensure_array_keeps_arrays() {
        assert_eq!(ensure_array(" [1] "), "[1]");
        assert!(matches!(ensure_array("[1]"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_ensure_array_wraps_contents() {
        assert_eq!(ensure_array(r#"{"a":1},{"a":2}"#), r#"[{"a":1},{"a":2}]"#);
    }

    #[test]
    fn test_decode_complete_array() {
        let records =
            decode_nav_records(r#"[{"pf_date":"2025-09-12","pf_price":"13.49010"}]"#).unwrap();
        assert_eq!(records, vec![NavRecord::new("2025-09-12", "13.49010")]);
    }

    #[test]
    fn test_decode_rewraps_missing_brackets() {
        let records =
            decode_nav_records(r#"{"pf_date":"2025-09-12","pf_price":"13.49010"}"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date(), "2025-09-12");
        assert_eq!(records[0].price(), "13.49010");
    }

    #[test]
    fn test_decode_preserves_order() {
        let records = decode_nav_records(
            r#"{"pf_date":"2025-09-11","pf_price":"13.48"},{"pf_date":"2025-09-12","pf_price":"13.49"}"#,
        )
        .unwrap();
        let dates: Vec<_> = records.iter().map(NavRecord::date).collect();
        assert_eq!(dates, ["2025-09-11", "2025-09-12"]);
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode_nav_records("[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_malformed_text() {
        assert!(decode_nav_records(r#"{"pf_date":"2025-09-12","pf_price":}"#).is_err());
    }

    #[test]
    fn test_decode_rejects_missing_field() {
        let err = decode_nav_records(r#"[{"pf_date":"2025-09-12","pf_buy":"1"}]"#).unwrap_err();
        assert!(err.to_string().contains("pf_price"));
    }

    #[test]
    fn test_decode_resolves_script_escapes() {
        let entries: Vec<FundEntry> =
            decode_array(r#"[{"code":"B-SHARE","name":"Bualuang\'s Fund é"}]"#).unwrap();
        assert_eq!(entries[0].name.as_deref(), Some("Bualuang's Fund é"));
    }

    #[test]
    fn test_unescape_keeps_lone_surrogates() {
        assert_eq!(unescape_script_literal(r"\ud83d"), r"\ud83d");
        assert_eq!(unescape_script_literal(r"a\\b\/c"), r"a\b/c");
    }
}
