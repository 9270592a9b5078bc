// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing and formatting.

use chrono::{DateTime, Duration, NaiveDate, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse an entity date string: RFC 3339, or a bare `YYYY-MM-DD` day taken
/// as UTC midnight. Returns `None` for anything else.
pub fn parse_flexible(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }
    value
        .parse::<NaiveDate>()
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// The UTC calendar day of a timestamp in `YYYY-MM-DD` form.
pub fn day_string(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Display form of an entity date, e.g. "January 21".
pub fn format_day(value: &str) -> Option<String> {
    parse_flexible(value).map(|date| date.format("%B %-d").to_string())
}

/// Short weekday of an entity date, e.g. "Tue".
pub fn weekday_short(value: &str) -> Option<String> {
    parse_flexible(value).map(|date| date.format("%a").to_string())
}

/// Countdown until a future date: "3 d 4 h" at day scale, "4 h 20 m" under a
/// day. `None` for past or unparseable dates.
pub fn time_until(value: &str, now: DateTime<Utc>) -> Option<String> {
    let target = parse_flexible(value)?;
    let delta = target - now;
    if delta < Duration::zero() {
        return None;
    }

    let days = delta.num_days();
    let hours = delta.num_hours() % 24;
    let minutes = delta.num_minutes() % 60;

    if days > 0 {
        Some(format!("{} d {} h", days, hours))
    } else {
        Some(format!("{} h {} m", hours, minutes))
    }
}
