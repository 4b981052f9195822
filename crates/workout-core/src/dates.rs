//! Date-string handling.
//!
//! Session and set dates are kept as text and ordered lexicographically. That
//! ordering only matches calendar order for zero-padded ISO dates
//! (`YYYY-MM-DD`), so ingest checks every date against that format and warns
//! about the ones that do not conform. Non-conforming dates are still
//! accepted.

use chrono::NaiveDate;
use tracing::warn;

/// The only date layout for which lexicographic order is calendar order.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string into a [`NaiveDate`].
///
/// Returns `None` for anything that is not a zero-padded ISO calendar date.
///
/// # Examples
///
/// ```
/// use workout_core::dates::parse_iso_date;
///
/// assert!(parse_iso_date("2026-01-05").is_some());
/// assert!(parse_iso_date("2026-1-5").is_none());
/// assert!(parse_iso_date("05/01/2026").is_none());
/// ```
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    // chrono accepts unpadded fields, which would break string ordering.
    if s.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// `true` when `s` is a zero-padded ISO calendar date.
pub fn is_iso_date(s: &str) -> bool {
    parse_iso_date(s).is_some()
}

/// Log a warning when `date` is not `YYYY-MM-DD`. `context` names the record
/// the date came from. Returns whether the date conforms.
pub fn check_date_format(date: &str, context: &str) -> bool {
    let ok = is_iso_date(date);
    if !ok {
        warn!(
            "{}: date \"{}\" is not YYYY-MM-DD; date ordering may be wrong",
            context, date
        );
    }
    ok
}
