//! Email entity.

use chrono::{DateTime, Utc};

use super::Category;

/// Unique identifier for an email.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailId(String);

impl EmailId {
    /// Create a new email ID.
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

impl From<&str> for EmailId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for EmailId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An email surfaced on the dashboard.
///
/// An email lives in exactly one of the store's two lists (active or
/// trash) at any time; deletion moves it, permanent deletion drops it.
#[derive(Debug, Clone)]
pub struct Email {
    /// Unique identifier.
    pub id: EmailId,
    /// Message subject.
    pub subject: String,
    /// Sender display name.
    pub sender: String,
    /// Sender address.
    pub sender_email: String,
    /// Short preview of the body.
    pub preview: String,
    /// Classification tag.
    pub category: Category,
    /// When the message was received.
    pub received_at: DateTime<Utc>,
    /// Whether the message has been read.
    pub is_read: bool,
    /// Whether the message is starred.
    pub is_starred: bool,
    /// Whether the message has attachments.
    pub has_attachment: bool,
}

impl Email {
    /// Marks the email read. Reading is one-way.
    pub const fn mark_read(&mut self) {
        self.is_read = true;
    }

    /// Toggles the starred flag.
    pub const fn toggle_star(&mut self) {
        self.is_starred = !self.is_starred;
    }
}
