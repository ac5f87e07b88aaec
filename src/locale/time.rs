//! Timestamp formatting: relative labels for the list, absolute localized
//! timestamps for the detail view.

use chrono::{DateTime, Datelike, Timelike, Utc};

use super::messages::{format_with_count, Messages};
use super::Locale;

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Bucket elapsed time into exactly three bands, at hour granularity:
/// under 1 hour, 1-23 whole hours, and whole days computed as
/// `elapsed_hours / 24` (so a 400-hour-old item is "16 days ago").
/// Future or unparseable timestamps land in the "just now" band.
pub fn relative_time(iso_date: &str, now: DateTime<Utc>, messages: &Messages) -> String {
    let published = match DateTime::parse_from_rfc3339(iso_date) {
        Ok(parsed) => parsed.with_timezone(&Utc),
        Err(_) => return messages.time.just_now.to_string(),
    };
    let elapsed_hours = (now - published).num_hours();
    if elapsed_hours < 1 {
        messages.time.just_now.to_string()
    } else if elapsed_hours < 24 {
        format_with_count(messages.time.hours_ago, elapsed_hours)
    } else {
        format_with_count(messages.time.days_ago, elapsed_hours / 24)
    }
}

/// Absolute timestamp in the locale's conventional long form, for the
/// detail view. Unparseable input is shown as-is.
pub fn absolute_time(iso_date: &str, locale: Locale) -> String {
    let parsed = match DateTime::parse_from_rfc3339(iso_date) {
        Ok(parsed) => parsed,
        Err(_) => return iso_date.to_string(),
    };
    let (year, month, day) = (parsed.year(), parsed.month(), parsed.day());
    let (hour, minute) = (parsed.hour(), parsed.minute());
    match locale {
        Locale::En => format!(
            "{} {}, {}, {:02}:{:02}",
            MONTHS_EN[(month - 1) as usize],
            day,
            year,
            hour,
            minute
        ),
        Locale::ZhCn => format!("{}年{}月{}日 {:02}:{:02}", year, month, day, hour, minute),
        Locale::Ko => format!("{}년 {}월 {}일 {:02}:{:02}", year, month, day, hour, minute),
    }
}
