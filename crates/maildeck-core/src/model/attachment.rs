//! Document vault entity.

use chrono::{DateTime, Utc};

use super::{Category, EmailId};
use crate::format;

/// Unique identifier for a vault document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttachmentId(String);

impl AttachmentId {
    /// Create a new attachment ID.
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

impl From<&str> for AttachmentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A document held in the vault.
///
/// Vault documents are read-only after load; no store operation
/// mutates them.
#[derive(Debug, Clone)]
pub struct Attachment {
    /// Unique identifier.
    pub id: AttachmentId,
    /// File name.
    pub file_name: String,
    /// File type tag (e.g. "pdf").
    pub file_type: String,
    /// File size in bytes.
    pub file_size: u64,
    /// Classification tag.
    pub category: Category,
    /// When the document was uploaded.
    pub uploaded_at: DateTime<Utc>,
    /// Email the document arrived on.
    pub email_id: EmailId,
}

impl Attachment {
    /// The file size formatted for display.
    #[must_use]
    pub fn size_display(&self) -> String {
        format::file_size(self.file_size)
    }
}
