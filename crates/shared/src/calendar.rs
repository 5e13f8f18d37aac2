//! Calendar helpers for date-based filter defaults.

use chrono::{Months, NaiveDate, Utc};

/// Returns today's date in UTC.
#[must_use]
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Returns the date `months` calendar months before `date`.
///
/// Day-of-month is clamped to the end of the target month, so
/// `months_ago(2026-03-31, 1)` is `2026-02-28`.
#[must_use]
pub fn months_ago(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months)).unwrap_or(date)
}
