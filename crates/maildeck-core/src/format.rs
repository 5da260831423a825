//! Display formatting for file sizes, relative times, and due dates.

use chrono::{DateTime, Utc};

/// Urgency bucket for an approaching due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Due within three days (or already overdue).
    Urgent,
    /// Due within a week.
    Warning,
    /// Comfortably in the future.
    Normal,
}

/// Human-readable countdown to a due date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueLabel {
    /// Whole days until due, rounded up. Negative when overdue.
    pub days: i64,
    /// Display label ("Due today", "3 days left", "2d overdue").
    pub label: String,
    /// Urgency bucket.
    pub urgency: Urgency,
}

/// Formats a byte count for display.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// Formats how long ago a timestamp was, relative to `now`.
///
/// Minutes under an hour, hours under a day, "Yesterday", day counts
/// under a week, then a short date.
#[must_use]
pub fn time_ago(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now - at;
    let minutes = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    if hours < 24 {
        return format!("{hours}h ago");
    }
    if days == 1 {
        return "Yesterday".to_string();
    }
    if days < 7 {
        return format!("{days}d ago");
    }
    at.format("%-d %b").to_string()
}

/// Describes the distance to a due date, relative to `now`.
///
/// Days are rounded up: a due time already past (but today) reads
/// "Due today", one later today already reads "Due tomorrow".
/// Urgency: urgent within 3 days (including overdue), warning within 7.
#[must_use]
pub fn days_until(due: DateTime<Utc>, now: DateTime<Utc>) -> DueLabel {
    let seconds = (due - now).num_seconds();
    let days = seconds.div_euclid(86_400) + i64::from(seconds.rem_euclid(86_400) > 0);

    let urgency = if days <= 3 {
        Urgency::Urgent
    } else if days <= 7 {
        Urgency::Warning
    } else {
        Urgency::Normal
    };

    let label = if days < 0 {
        format!("{}d overdue", days.abs())
    } else if days == 0 {
        "Due today".to_string()
    } else if days == 1 {
        "Due tomorrow".to_string()
    } else {
        format!("{days} days left")
    };

    DueLabel { days, label, urgency }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 5, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_file_size_thresholds() {
        assert_eq!(file_size(512), "512 B");
        assert_eq!(file_size(1023), "1023 B");
        assert_eq!(file_size(1024), "1.0 KB");
        assert_eq!(file_size(1536), "1.5 KB");
        assert_eq!(file_size(1024 * 1024), "1.0 MB");
        assert_eq!(file_size(2_411_724), "2.3 MB");
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = now();
        assert_eq!(time_ago(now, now), "0m ago");
        assert_eq!(time_ago(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(time_ago(now - Duration::minutes(59), now), "59m ago");
        assert_eq!(time_ago(now - Duration::hours(1), now), "1h ago");
        assert_eq!(time_ago(now - Duration::hours(23), now), "23h ago");
        assert_eq!(time_ago(now - Duration::hours(30), now), "Yesterday");
        assert_eq!(time_ago(now - Duration::days(3), now), "3d ago");
        assert_eq!(time_ago(now - Duration::days(9), now), "27 Jul");
    }

    #[test]
    fn test_days_until_labels() {
        let now = now();

        let today = days_until(now + Duration::hours(5), now);
        assert_eq!(today.days, 1);
        assert_eq!(today.label, "Due tomorrow");

        let exact = days_until(now, now);
        assert_eq!(exact.days, 0);
        assert_eq!(exact.label, "Due today");

        let soon = days_until(now + Duration::days(5), now);
        assert_eq!(soon.label, "5 days left");
        assert_eq!(soon.urgency, Urgency::Warning);

        let later = days_until(now + Duration::days(14), now);
        assert_eq!(later.urgency, Urgency::Normal);

        let overdue = days_until(now - Duration::days(2), now);
        assert_eq!(overdue.days, -2);
        assert_eq!(overdue.label, "2d overdue");
        assert_eq!(overdue.urgency, Urgency::Urgent);
    }

    #[test]
    fn test_days_until_rounds_up() {
        let now = now();
        let label = days_until(now + Duration::days(2) + Duration::seconds(1), now);
        assert_eq!(label.days, 3);
        assert_eq!(label.urgency, Urgency::Urgent);
    }
}
