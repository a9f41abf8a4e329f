//! Display formatting helpers
//!
//! Read-only presentation formatting for dates, relative timestamps, and
//! currency amounts. Relative formatting takes `now` as an argument so it
//! stays a pure function.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Formats a date as "Oct 24, 2024"
pub fn format_date(date: NaiveDate) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("{} {}, {}", month, date.day(), date.year())
}

/// Formats a timestamp as "Oct 24, 2024 14:05"
pub fn format_date_time(ts: DateTime<Utc>) -> String {
    format!(
        "{} {:02}:{:02}",
        format_date(ts.date_naive()),
        ts.hour(),
        ts.minute()
    )
}

/// Formats a timestamp relative to `now`, e.g. "2 hours ago"
///
/// Falls back to the absolute date once the difference exceeds a week.
/// Future timestamps format as "Just now".
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();
    if seconds < 60 {
        "Just now".to_string()
    } else if seconds < 3_600 {
        format!("{} minutes ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{} hours ago", seconds / 3_600)
    } else if seconds < 604_800 {
        format!("{} days ago", seconds / 86_400)
    } else {
        format_date(then.date_naive())
    }
}

/// Formats a USD amount as "$1,234.56"
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}
