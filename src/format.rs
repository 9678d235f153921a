//! Display Formatting
//!
//! Percentages, dates and name helpers shared by cards and pages.

use chrono::{DateTime, NaiveDate, Utc};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    ((value + f64::EPSILON) * 100.0).round() / 100.0
}

/// `completed / total` as a percentage rounded to two decimals; 0 when empty
pub fn progress_percent(completed: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(completed as f64 / total as f64 * 100.0)
}

pub fn format_percentage(value: f64) -> String {
    format!("{}%", round2(value))
}

/// Parse either an RFC 3339 timestamp or a bare `YYYY-MM-DD` date
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `Jan 05, 2026`; unparseable input is returned as-is
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Comment-style age: just now, 5m ago, 3h ago, 2d ago, then a date
pub fn relative_time(raw: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse_timestamp(raw) else {
        return raw.to_string();
    };
    let mins = (now - then).num_minutes();
    let hours = mins / 60;
    let days = hours / 24;

    if mins < 1 {
        "just now".to_string()
    } else if mins < 60 {
        format!("{}m ago", mins)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if days < 7 {
        format!("{}d ago", days)
    } else {
        then.format("%b %d, %Y").to_string()
    }
}

/// Due strictly before `today` and not yet completed
pub fn is_overdue(due_date: Option<&str>, completed: bool, today: NaiveDate) -> bool {
    if completed {
        return false;
    }
    due_date
        .and_then(parse_timestamp)
        .map(|due| due.date_naive() < today)
        .unwrap_or(false)
}

/// Up to two uppercase initials from a display name or email
pub fn initials(name_or_email: &str) -> String {
    let base = name_or_email.split('@').next().unwrap_or_default();
    let words: Vec<&str> = base
        .split(|c: char| c.is_whitespace() || c == '.' || c == '_' || c == '-')
        .filter(|w| !w.is_empty())
        .collect();

    let letters: String = if words.len() >= 2 {
        words.iter().take(2).filter_map(|w| w.chars().next()).collect()
    } else {
        base.chars().take(2).collect()
    };
    letters.to_uppercase()
}

/// Generated avatar for users without one
pub fn avatar_url(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=random",
        utf8_percent_encode(name, NON_ALPHANUMERIC)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_progress_rounding() {
        assert_eq!(progress_percent(3, 7), 42.86);
        assert_eq!(progress_percent(1, 3), 33.33);
        assert_eq!(progress_percent(2, 3), 66.67);
        assert_eq!(progress_percent(0, 0), 0.0);
        assert_eq!(progress_percent(5, 5), 100.0);
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(42.857142), "42.86%");
        assert_eq!(format_percentage(0.0), "0%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_relative_time() {
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        assert_eq!(relative_time("2026-03-10T11:59:30+00:00", now), "just now");
        assert_eq!(relative_time("2026-03-10T11:45:00+00:00", now), "15m ago");
        assert_eq!(relative_time("2026-03-10T09:00:00Z", now), "3h ago");
        assert_eq!(relative_time("2026-03-08T12:00:00Z", now), "2d ago");
        assert_eq!(relative_time("2026-02-01T12:00:00Z", now), "Feb 01, 2026");
        assert_eq!(relative_time("garbage", now), "garbage");
    }

    #[test]
    fn test_overdue() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        assert!(is_overdue(Some("2026-03-09"), false, today));
        assert!(!is_overdue(Some("2026-03-10"), false, today));
        assert!(!is_overdue(Some("2026-03-09"), true, today));
        assert!(!is_overdue(None, false, today));
        assert!(!is_overdue(Some("soon"), false, today));
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
        assert_eq!(initials("john.smith@acme.com"), "JS");
        assert_eq!(initials("ana@acme.com"), "AN");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-01-05"), "Jan 05, 2026");
        assert_eq!(format_date("2026-01-05T08:00:00+02:00"), "Jan 05, 2026");
        assert_eq!(format_date("n/a"), "n/a");
    }

    #[test]
    fn test_avatar_url_encodes_name() {
        assert_eq!(
            avatar_url("Ana Lee"),
            "https://ui-avatars.com/api/?name=Ana%20Lee&background=random"
        );
    }
}
