use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d{1,2})(?::(\d{2}))?\s*(am|pm)?\s*$").expect("time pattern")
});

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"];

/// Parses a free-form date string and returns the UTC calendar-date portion
/// as `YYYY-MM-DD`, or `None` if the input is unparseable.
pub fn normalize_date(input: &str) -> Option<String> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc).format("%Y-%m-%d").to_string());
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }

    None
}

/// Normalizes a time-of-day string to 24-hour `HH:MM`.
///
/// Accepts `H` or `HH:MM`, with an optional case-insensitive `am`/`pm`
/// suffix (space before it optional). With a suffix the hour must be 1-12;
/// without, 0-23. Returns `None` for anything else.
pub fn normalize_time(input: &str) -> Option<String> {
    let caps = TIME_RE.captures(input)?;

    let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    if minute > 59 {
        return None;
    }

    let hour = match caps.get(3) {
        Some(suffix) => {
            if !(1..=12).contains(&hour) {
                return None;
            }
            let pm = suffix.as_str().eq_ignore_ascii_case("pm");
            match (pm, hour) {
                (false, 12) => 0,
                (false, h) => h,
                (true, 12) => 12,
                (true, h) => h + 12,
            }
        }
        None => {
            if hour > 23 {
                return None;
            }
            hour
        }
    };

    Some(format!("{hour:02}:{minute:02}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_time_twelve_hour() {
        assert_eq!(normalize_time("1:30 pm").as_deref(), Some("13:30"));
        assert_eq!(normalize_time("1:30pm").as_deref(), Some("13:30"));
        assert_eq!(normalize_time("12am").as_deref(), Some("00:00"));
        assert_eq!(normalize_time("12pm").as_deref(), Some("12:00"));
        assert_eq!(normalize_time("9 AM").as_deref(), Some("09:00"));
    }

    #[test]
    fn normalize_time_twenty_four_hour() {
        assert_eq!(normalize_time("13:30").as_deref(), Some("13:30"));
        assert_eq!(normalize_time("0:05").as_deref(), Some("00:05"));
        assert_eq!(normalize_time("23:59").as_deref(), Some("23:59"));
        assert_eq!(normalize_time("7").as_deref(), Some("07:00"));
    }

    #[test]
    fn normalize_time_rejects_out_of_range() {
        assert_eq!(normalize_time("25:00"), None);
        assert_eq!(normalize_time("13pm"), None);
        assert_eq!(normalize_time("0am"), None);
        assert_eq!(normalize_time("10:60"), None);
        assert_eq!(normalize_time("24:00"), None);
    }

    #[test]
    fn normalize_time_rejects_garbage() {
        assert_eq!(normalize_time(""), None);
        assert_eq!(normalize_time("noonish"), None);
        assert_eq!(normalize_time("1:2"), None);
        assert_eq!(normalize_time("10:15:30"), None);
    }

    #[test]
    fn normalize_date_formats() {
        assert_eq!(normalize_date("2026-09-12").as_deref(), Some("2026-09-12"));
        assert_eq!(normalize_date("09/12/2026").as_deref(), Some("2026-09-12"));
        assert_eq!(normalize_date("September 12, 2026").as_deref(), Some("2026-09-12"));
        assert_eq!(normalize_date("12 September 2026").as_deref(), Some("2026-09-12"));
        assert_eq!(
            normalize_date("2026-09-12T18:30:00Z").as_deref(),
            Some("2026-09-12")
        );
    }

    #[test]
    fn normalize_date_uses_utc_portion_of_datetimes() {
        // 23:30 -07:00 is already the next day in UTC.
        assert_eq!(
            normalize_date("2026-09-12T23:30:00-07:00").as_deref(),
            Some("2026-09-13")
        );
    }

    #[test]
    fn normalize_date_rejects_garbage() {
        assert_eq!(normalize_date(""), None);
        assert_eq!(normalize_date("next tuesday"), None);
        assert_eq!(normalize_date("2026-13-40"), None);
    }
}
