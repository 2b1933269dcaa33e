//! Formatting utilities for prices, dates, and other display values.

const MS_PER_SECOND: f64 = 1000.0;

/// Dollar amount without cents for whole values (e.g., "$120", "$24.50").
pub fn format_dollars(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${:.0}", amount)
    } else {
        format!("${:.2}", amount)
    }
}

/// Age of a post relative to `now_ms` (e.g., "Just now", "5m ago", "2024-01-01").
///
/// Posts still awaiting a server timestamp read as "Just now".
pub fn format_relative(timestamp_ms: Option<f64>, now_ms: f64) -> String {
    let Some(ts) = timestamp_ms else {
        return "Just now".to_string();
    };

    let elapsed = ((now_ms - ts) / MS_PER_SECOND).max(0.0) as u64;
    match elapsed {
        0..60 => "Just now".to_string(),
        60..3600 => format!("{}m ago", elapsed / 60),
        3600..86400 => format!("{}h ago", elapsed / 3600),
        86400..604800 => format!("{}d ago", elapsed / 86400),
        _ => format_date_iso((ts / MS_PER_SECOND).max(0.0) as u64),
    }
}

/// Format Unix timestamp as ISO date (YYYY-MM-DD).
///
/// Properly calculates year/month/day accounting for leap years.
pub fn format_date_iso(timestamp: u64) -> String {
    let mut remaining_days = (timestamp / 86400) as i64;
    let mut year = 1970i64;

    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining_days < days_in_year {
            break;
        }
        remaining_days -= days_in_year;
        year += 1;
    }

    let february = if is_leap_year(year) { 29 } else { 28 };
    let days_in_months: [i64; 12] = [31, february, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

    let mut month = 1;
    for days_in_month in days_in_months {
        if remaining_days < days_in_month {
            break;
        }
        remaining_days -= days_in_month;
        month += 1;
    }

    format!("{:04}-{:02}-{:02}", year, month, remaining_days + 1)
}

fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Shorten an ISO-8601 datetime to `YYYY-MM-DD HH:MM`.
///
/// Input without a time part comes back as the date alone.
pub fn format_iso_minutes(iso: &str) -> String {
    match iso.split_once('T') {
        Some((date, time)) => {
            let minutes: String = time.chars().take(5).collect();
            format!("{} {}", date, minutes)
        }
        None => iso.to_string(),
    }
}

/// "1 item" / "3 items".
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: f64 = 1_760_000_000_000.0;

    #[test]
    fn test_format_dollars() {
        assert_eq!(format_dollars(200.0), "$200");
        assert_eq!(format_dollars(24.5), "$24.50");
        assert_eq!(format_dollars(0.0), "$0");
    }

    #[test]
    fn test_format_relative() {
        assert_eq!(format_relative(None, NOW), "Just now");
        assert_eq!(format_relative(Some(NOW - 30_000.0), NOW), "Just now");
        assert_eq!(format_relative(Some(NOW - 5.0 * 60_000.0), NOW), "5m ago");
        assert_eq!(format_relative(Some(NOW - 3.0 * 3_600_000.0), NOW), "3h ago");
        assert_eq!(format_relative(Some(NOW - 2.0 * 86_400_000.0), NOW), "2d ago");
        // Clock skew: server ahead of the browser.
        assert_eq!(format_relative(Some(NOW + 5_000.0), NOW), "Just now");
    }

    #[test]
    fn test_old_posts_show_date() {
        // 2024-01-01 00:00:00 UTC
        assert_eq!(format_relative(Some(1_704_067_200_000.0), NOW), "2024-01-01");
    }

    #[test]
    fn test_format_iso_minutes() {
        assert_eq!(format_iso_minutes("2025-10-19T09:00:02.123456"), "2025-10-19 09:00");
        assert_eq!(format_iso_minutes("2025-10-19"), "2025-10-19");
        assert_eq!(format_iso_minutes(""), "");
    }

    #[test]
    fn test_format_date_iso() {
        assert_eq!(format_date_iso(0), "1970-01-01");
        assert_eq!(format_date_iso(1704067200), "2024-01-01");
        // 2024-02-29, leap day
        assert_eq!(format_date_iso(1709164800), "2024-02-29");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "item"), "1 item");
        assert_eq!(pluralize(0, "item"), "0 items");
        assert_eq!(pluralize(12, "trend"), "12 trends");
    }
}
