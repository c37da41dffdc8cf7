//! Locating `JSON.parse('[...]')` assignments in page text.

use regex::Regex;
use tracing::debug;

use crate::ExtractError;

/// Script variable holding the NAV history.
pub const PERFORM_ARRAY: &str = "performArray";

/// Script variable holding the fund catalogue.
pub const FUND_ARRAY: &str = "fundArray";

const PREVIEW_LEN: usize = 160;

/// Which search pattern produced a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Non-greedy match bounded by the variable name and the closing `')`.
    /// Captures the array including its brackets.
    Anchored,
    /// Greedy single-line match up to the last `]')` on the line.
    /// Captures the array contents without the outer brackets.
    Legacy,
}

impl PatternKind {
    /// Returns the pattern source for variable `name`.
    #[must_use]
    pub fn source(&self, name: &str) -> String {
        let name = regex::escape(name);
        match self {
            Self::Anchored => {
                format!(r"(?s)let\s+{name}\s*=\s*JSON\.parse\(\s*'(\[.*?\])'\s*\)")
            }
            Self::Legacy => format!(r"let {name}\s*=\s*JSON\.parse\('\[(.+).*\]'\)"),
        }
    }

    /// Patterns in the order they are tried.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Anchored, Self::Legacy]
    }
}

/// Raw text captured for an embedded array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    /// The captured text. May lack the outer brackets.
    pub text: String,
    /// The pattern that matched.
    pub pattern: PatternKind,
}

/// Result of searching a page for an embedded array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The assignment was found.
    Found(Captured),
    /// No pattern matched; there is nothing to convert.
    NotFound,
}

/// Returns every capture of array `name`, one per matching pattern, in
/// the order of [`PatternKind::all`].
///
/// # Errors
///
/// Returns an error if a pattern fails to compile.
pub fn capture_all(page: &str, name: &str) -> Result<Vec<Captured>, ExtractError> {
    let mut captures = Vec::new();
    for &kind in PatternKind::all() {
        let re = Regex::new(&kind.source(name))?;
        let Some(text) = re.captures(page).and_then(|c| c.get(1)) else {
            debug!(array = name, pattern = ?kind, "pattern did not match");
            continue;
        };
        debug!(
            array = name,
            pattern = ?kind,
            len = text.len(),
            preview = %truncate(text.as_str(), PREVIEW_LEN),
            "pattern matched"
        );
        captures.push(Captured {
            text: text.as_str().to_string(),
            pattern: kind,
        });
    }
    Ok(captures)
}

/// Finds the raw text of the array assigned to script variable `name`.
///
/// The anchored pattern is preferred; the legacy pattern is consulted only
/// when it does not match.
///
/// # Errors
///
/// Returns an error if a pattern fails to compile.
pub fn extract_array(page: &str, name: &str) -> Result<Extraction, ExtractError> {
    Ok(capture_all(page, name)?
        .into_iter()
        .next()
        .map_or(Extraction::NotFound, Extraction::Found))
}

/// Reads the fund code from the page's `let p_code = '<code>';` line.
///
/// # Errors
///
/// Returns an error if the pattern fails to compile.
pub fn extract_selected_fund(page: &str) -> Result<Option<String>, ExtractError> {
    let re = Regex::new(r"let\s+p_code\s*=\s*'([^'\n]*)'")?;
    Ok(re
        .captures(page)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|code| !code.is_empty()))
}

pub(crate) fn truncate(s: &str, n: usize) -> String {
    if s.len() <= n {
        return s.to_string();
    }
    let mut end = n;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{} …[trunc]", &s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<script>
let p_code = 'BFIXED';
let performArray = JSON.parse('[{"pf_date":"2025-09-12","pf_price":"13.49010"}]');
</script>"#;

    #[test]
    fn test_anchored_capture_keeps_brackets() {
        let Extraction::Found(captured) = extract_array(SAMPLE, PERFORM_ARRAY).unwrap() else {
            panic!("expected a match");
        };
        assert_eq!(captured.pattern, PatternKind::Anchored);
        assert_eq!(
            captured.text,
            r#"[{"pf_date":"2025-09-12","pf_price":"13.49010"}]"#
        );
    }

    #[test]
    fn test_legacy_capture_drops_brackets() {
        let captures = capture_all(SAMPLE, PERFORM_ARRAY).unwrap();
        assert_eq!(captures.len(), 2);
        assert_eq!(captures[1].pattern, PatternKind::Legacy);
        assert_eq!(
            captures[1].text,
            r#"{"pf_date":"2025-09-12","pf_price":"13.49010"}"#
        );
    }

    #[test]
    fn test_anchored_stops_at_own_terminator() {
        let page = r#"let performArray = JSON.parse('[{"pf_date":"a","pf_price":"1"}]');
let other = JSON.parse('[1, 2]');"#;
        let Extraction::Found(captured) = extract_array(page, PERFORM_ARRAY).unwrap() else {
            panic!("expected a match");
        };
        assert_eq!(captured.text, r#"[{"pf_date":"a","pf_price":"1"}]"#);
    }

    #[test]
    fn test_multiline_array_only_anchored_matches() {
        let page = "let performArray = JSON.parse('[\n  {\"pf_date\":\"a\",\"pf_price\":\"1\"},\n  {\"pf_date\":\"b\",\"pf_price\":\"2\"}\n  ]');";
        let captures = capture_all(page, PERFORM_ARRAY).unwrap();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].pattern, PatternKind::Anchored);
        assert!(captures[0].text.starts_with('['));
        assert!(captures[0].text.ends_with(']'));
    }

    #[test]
    fn test_missing_assignment() {
        let page = "<html><script>let fundArray = JSON.parse('[]');</script></html>";
        assert_eq!(
            extract_array(page, PERFORM_ARRAY).unwrap(),
            Extraction::NotFound
        );
    }

    #[test]
    fn test_name_is_matched_literally() {
        let page = r#"let performArrayX = JSON.parse('[{"pf_date":"a","pf_price":"1"}]');"#;
        assert_eq!(
            extract_array(page, PERFORM_ARRAY).unwrap(),
            Extraction::NotFound
        );
    }

    #[test]
    fn test_selected_fund() {
        assert_eq!(
            extract_selected_fund(SAMPLE).unwrap().as_deref(),
            Some("BFIXED")
        );
        assert_eq!(extract_selected_fund("let p_code = '';").unwrap(), None);
        assert_eq!(extract_selected_fund("<html></html>").unwrap(), None);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ééé", 3), "é …[trunc]");
    }
}
