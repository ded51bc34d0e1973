//! Display formatting for stored task fields.
//!
//! Due dates are stored as `YYYY-MM-DD` text and shown as `DD/MM/YYYY`.
//! Both are matched at their full width, so `2024-3-5` is not a date.
//! Formatting never fails: anything that is not a date is shown as if the
//! task had no due date.
//!
//! ```rust
//! use todolist::libs::formatter::format_due_date;
//!
//! assert_eq!(format_due_date(Some("2024-03-05")), "05/03/2024");
//! assert_eq!(format_due_date(None), "no due date");
//! assert_eq!(format_due_date(Some("not-a-date")), "no due date");
//! ```

use chrono::{DateTime, NaiveDate};

/// Text shown for a task without a (valid) due date.
pub const NO_DUE_DATE: &str = "no due date";

/// Storage format of the `data_limite` column.
pub const STORAGE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format used when showing a due date.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Both date formats render to exactly ten characters.
const DATE_WIDTH: usize = 10;

/// Parses `value` with `format`, rejecting unpadded fields and signed years.
fn parse_exact(value: &str, format: &str) -> Option<NaiveDate> {
    if value.len() != DATE_WIDTH || !value.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(value, format).ok()
}

/// Parses a stored due date.
///
/// Accepts the storage format and, for values written by a date picker,
/// an RFC 3339 timestamp whose date part is used.
pub fn parse_due_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    parse_exact(value, STORAGE_DATE_FORMAT)
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|timestamp| timestamp.date_naive()))
}

pub fn format_due_date(due_date: Option<&str>) -> String {
    due_date
        .and_then(parse_due_date)
        .map(|date| date.format(DISPLAY_DATE_FORMAT).to_string())
        .unwrap_or_else(|| NO_DUE_DATE.to_string())
}

/// Normalizes user input into the storage format.
///
/// Both `YYYY-MM-DD` and `DD/MM/YYYY` are understood. Returns `None` if the
/// input is neither.
pub fn normalize_due_date(input: &str) -> Option<String> {
    let input = input.trim();
    parse_due_date(input)
        .or_else(|| parse_exact(input, DISPLAY_DATE_FORMAT))
        .map(|date| date.format(STORAGE_DATE_FORMAT).to_string())
}
