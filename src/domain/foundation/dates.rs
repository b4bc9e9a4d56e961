//! Calendar-month arithmetic and labels.
//!
//! Periodicities in GEMEX are expressed in whole calendar months (a task
//! due "every 2 months", a thematique evaluated "every 3 months"), so the
//! helpers here use real calendar arithmetic rather than a fixed-length
//! month approximation. Labels are French, matching the backend locale.

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};

/// French month names, capitalized for display.
const FRENCH_MONTHS: [&str; 12] = [
    "Janvier",
    "Février",
    "Mars",
    "Avril",
    "Mai",
    "Juin",
    "Juillet",
    "Août",
    "Septembre",
    "Octobre",
    "Novembre",
    "Décembre",
];

/// Number of month steps from `start`'s month to `end`'s month.
///
/// Day-of-month is ignored; `2023-01-31` to `2023-02-01` is one step.
/// Negative when `end` is in an earlier month than `start`.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32)
}

/// Adds `months` calendar months to an instant, clamping the day when the
/// target month is shorter (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(instant: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    // Months::new is infallible for u32; checked_add_months only fails on
    // out-of-range years, which backend dates never reach.
    instant
        .checked_add_months(Months::new(months))
        .unwrap_or(instant)
}

/// Same month stepping for calendar dates.
pub fn add_months_to_date(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}

/// Capitalized French "month year" label, e.g. `Janvier 2023`.
pub fn french_month_label(date: NaiveDate) -> String {
    format!("{} {}", FRENCH_MONTHS[date.month0() as usize], date.year())
}
