//! History page URL construction.

use navscrape_types::FundQuery;

/// Default endpoint serving historical daily NAVs.
pub const BASE_URL: &str = "https://www.bblam.co.th/en/products/mutual-funds/historical-daily-navs";

/// Builds the URL for a fund's NAV history over a date range.
///
/// URL format: `{base}?p_code={CODE}&date_from={D}&month_from={M}&year_from={Y}&date_to={D}&month_to={M}&year_to={Y}`
///
/// Day and month are emitted without zero padding.
///
/// # Example
///
/// ```
/// use navscrape_fetch::url::{BASE_URL, history_url};
/// use navscrape_types::FundQuery;
///
/// let query = FundQuery::parse("BFIXED", "01-01-2024", "14-09-2025").unwrap();
/// let url = history_url(BASE_URL, &query);
/// assert!(url.ends_with("?p_code=BFIXED&date_from=1&month_from=1&year_from=2024&date_to=14&month_to=9&year_to=2025"));
/// ```
#[must_use]
pub fn history_url(base: &str, query: &FundQuery) -> String {
    let (d_from, m_from, y_from) = query.range().start_components();
    let (d_to, m_to, y_to) = query.range().end_components();
    format!(
        "{}?p_code={}&date_from={}&month_from={}&year_from={}&date_to={}&month_to={}&year_to={}",
        base.trim_end_matches('?'),
        query.code(),
        d_from,
        m_from,
        y_from,
        d_to,
        m_to,
        y_to
    )
}
