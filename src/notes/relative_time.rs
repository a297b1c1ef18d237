//! Humanized "N units ago" phrases

use chrono::{DateTime, Utc};

const SECS_PER_MINUTE: f64 = 60.0;
const SECS_PER_HOUR: f64 = 3_600.0;
const SECS_PER_DAY: f64 = 86_400.0;
// 400 Gregorian years = 146097 days = 4800 months
const MONTHS_PER_DAY: f64 = 4_800.0 / 146_097.0;

/// Describe how far `then` is from `now`, e.g. `3 days ago` or `in an hour`.
///
/// Each unit is rounded to the nearest whole value and the phrase moves to
/// the next unit at 45 seconds, 45 minutes, 22 hours, 26 days and 11 months.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta_ms = now.signed_duration_since(then).num_milliseconds();
    let phrase = humanize(delta_ms.unsigned_abs());
    if delta_ms >= 0 {
        format!("{phrase} ago")
    } else {
        format!("in {phrase}")
    }
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn humanize(millis: u64) -> String {
    let secs = millis as f64 / 1_000.0;
    let days_exact = secs / SECS_PER_DAY;

    let seconds = secs.round() as u64;
    let minutes = (secs / SECS_PER_MINUTE).round() as u64;
    let hours = (secs / SECS_PER_HOUR).round() as u64;
    let days = days_exact.round() as u64;
    let months = (days_exact * MONTHS_PER_DAY).round() as u64;
    let years = (days_exact * MONTHS_PER_DAY / 12.0).round() as u64;

    if seconds < 45 {
        "a few seconds".to_string()
    } else if minutes <= 1 {
        "a minute".to_string()
    } else if minutes < 45 {
        format!("{minutes} minutes")
    } else if hours <= 1 {
        "an hour".to_string()
    } else if hours < 22 {
        format!("{hours} hours")
    } else if days <= 1 {
        "a day".to_string()
    } else if days < 26 {
        format!("{days} days")
    } else if months <= 1 {
        "a month".to_string()
    } else if months < 11 {
        format!("{months} months")
    } else if years <= 1 {
        "a year".to_string()
    } else {
        format!("{years} years")
    }
}
