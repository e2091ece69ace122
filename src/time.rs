//! Relative time formatting for the feed freshness label.
//!
//! Converts the gap between two instants into a human phrase like
//! "5 minutes ago" or "1 hour ago". The caller supplies `now` so the
//! output stays deterministic under test.

use chrono::{DateTime, Utc};

/// Format the elapsed time between `then` and `now` as a relative phrase.
///
/// The largest whole unit wins: minutes under an hour, hours under a day,
/// days under 30, then months (30-day) and years (365-day). Anything under
/// a minute, including timestamps in the future, renders as "just now".
///
/// # Examples
///
/// ```ignore
/// assert_eq!(time_since(now - Duration::hours(1), now), "1 hour ago");
/// assert_eq!(time_since(now - Duration::days(3), now), "3 days ago");
/// ```
pub fn time_since(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds();
    if secs < 60 {
        return "just now".to_string();
    }

    let minutes = secs / 60;
    if minutes < 60 {
        return pluralize(minutes, "minute");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return pluralize(hours, "hour");
    }
    let days = hours / 24;
    if days < 30 {
        return pluralize(days, "day");
    }
    if days < 365 {
        return pluralize(days / 30, "month");
    }
    pluralize(days / 365, "year")
}

fn pluralize(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_under_a_minute_is_just_now() {
        assert_eq!(time_since(now() - Duration::seconds(5), now()), "just now");
        assert_eq!(time_since(now() - Duration::seconds(59), now()), "just now");
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        assert_eq!(time_since(now() + Duration::hours(2), now()), "just now");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(time_since(now() - Duration::minutes(1), now()), "1 minute ago");
        assert_eq!(time_since(now() - Duration::minutes(5), now()), "5 minutes ago");
        assert_eq!(time_since(now() - Duration::minutes(59), now()), "59 minutes ago");
    }

    #[test]
    fn test_hours() {
        assert_eq!(time_since(now() - Duration::hours(1), now()), "1 hour ago");
        assert_eq!(time_since(now() - Duration::hours(23), now()), "23 hours ago");
    }

    #[test]
    fn test_days() {
        assert_eq!(time_since(now() - Duration::days(1), now()), "1 day ago");
        assert_eq!(time_since(now() - Duration::days(29), now()), "29 days ago");
    }

    #[test]
    fn test_months() {
        assert_eq!(time_since(now() - Duration::days(30), now()), "1 month ago");
        assert_eq!(time_since(now() - Duration::days(90), now()), "3 months ago");
    }

    #[test]
    fn test_years() {
        assert_eq!(time_since(now() - Duration::days(365), now()), "1 year ago");
        assert_eq!(time_since(now() - Duration::days(800), now()), "2 years ago");
    }

    #[test]
    fn test_largest_whole_unit_wins() {
        // 90 minutes is "1 hour ago", not "90 minutes ago".
        assert_eq!(time_since(now() - Duration::minutes(90), now()), "1 hour ago");
    }
}
