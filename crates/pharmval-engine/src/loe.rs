//! Loss-of-exclusivity resolution from patent and exclusivity records.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use pharmval_common::PatentRecord;

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%b %d, %Y", "%B %d, %Y", "%m/%d/%Y"];

/// Latest calendar year across every parseable patent or exclusivity expiry.
///
/// Returns `None` when `records` is empty or no date parses.
pub fn resolve(records: &[PatentRecord]) -> Option<i32> {
    records
        .iter()
        .flat_map(|r| [r.patent_expiry.as_deref(), r.exclusivity_expiry.as_deref()])
        .flatten()
        .filter_map(parse_year)
        .max()
}

/// Extract the calendar year from a source date string.
///
/// Accepts ISO dates, RFC 3339 and naive ISO timestamps, `Jan 12, 2030`,
/// `01/12/2030`, and a bare four-digit year.
pub fn parse_year(raw: &str) -> Option<i32> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.year());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.year());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.year());
    }
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse().ok();
    }
    None
}
