//! In-app notification entity.

use chrono::{DateTime, Duration, Utc};

/// Unique identifier for a notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotificationId(String);

impl NotificationId {
    /// Create a new notification ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NotificationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Severity tag of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    /// Informational.
    #[default]
    Info,
    /// Needs attention.
    Warning,
    /// Something finished well.
    Success,
}

impl NotificationKind {
    /// Parse from the record string representation.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "warning" => Self::Warning,
            "success" => Self::Success,
            _ => Self::Info,
        }
    }

    /// Convert to the record string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Success => "success",
        }
    }
}

/// A notification shown in the dashboard header.
///
/// Notifications are seeded at store construction and only ever change
/// by being acknowledged; none are created or deleted at runtime.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier.
    pub id: NotificationId,
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Severity tag.
    pub kind: NotificationKind,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
    /// Whether the user has acknowledged it.
    pub is_read: bool,
}

impl Notification {
    /// Marks the notification acknowledged.
    pub const fn mark_read(&mut self) {
        self.is_read = true;
    }

    /// The seed set shown on a fresh dashboard, aged relative to `now`.
    #[must_use]
    pub fn seed(now: DateTime<Utc>) -> Vec<Self> {
        vec![
            Self {
                id: NotificationId::from("1"),
                title: "Tax Payment Due Soon".to_string(),
                message: "Your IRAS tax payment is due in 5 days".to_string(),
                kind: NotificationKind::Warning,
                created_at: now - Duration::hours(2),
                is_read: false,
            },
            Self {
                id: NotificationId::from("2"),
                title: "New Email from CPF Board".to_string(),
                message: "Your CPF Statement is ready".to_string(),
                kind: NotificationKind::Info,
                created_at: now - Duration::hours(5),
                is_read: false,
            },
            Self {
                id: NotificationId::from("3"),
                title: "Passport Expiring".to_string(),
                message: "Your passport expires in 37 days".to_string(),
                kind: NotificationKind::Warning,
                created_at: now - Duration::days(1),
                is_read: true,
            },
        ]
    }
}
