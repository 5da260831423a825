//! Raw record types for the three mock collections.
//!
//! These mirror the JSON the analyzer pipeline writes: loosely typed,
//! every field optional unless the pipeline always emits it. Conversion
//! into typed entities happens downstream in `maildeck-core`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

/// Analyzer output attached to a raw email record.
///
/// Carries the organisation/type detection, evidence flags, and the
/// dates/amounts/references extracted from the body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EmailAnalysis {
    /// Organisation detected in the body, if any.
    pub org: Option<String>,
    /// Sender display name, if the analyzer resolved one.
    pub sender: Option<String>,
    /// Detected message type (e.g. "utility bill", "bank statement").
    pub email_type: Option<String>,
    /// Raw category label; normalized downstream.
    pub category: Option<String>,
    /// Short body preview.
    pub preview: Option<String>,
    /// Read flag reported by the mailbox.
    #[serde(rename = "isRead")]
    pub is_read: Option<bool>,
    /// Attachment flag reported by the mailbox.
    #[serde(rename = "hasAttachments")]
    pub has_attachments: Option<bool>,
    /// Renewal/expiry wording was found.
    pub has_renewal: bool,
    /// Appointment wording was found.
    pub has_appointment: bool,
    /// Billing/payment wording was found.
    pub has_billing: bool,
    /// The message asks for supporting documents.
    pub docs_required: bool,
    /// The message asks for identity/account verification.
    pub verification_needed: bool,
    /// The message carries a call-to-action link.
    pub has_action_link: bool,
    /// Date strings extracted from the body (e.g. "15 Aug 2025").
    pub dates: Vec<String>,
    /// Amount strings extracted from the body (e.g. "$127.45").
    pub amounts: Vec<String>,
    /// Reference numbers extracted from the body.
    pub refs: Vec<String>,
}

/// A raw email record as stored in `emails.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEmail {
    /// Incremental record id assigned by the pipeline.
    pub id: u64,
    /// Upstream mailbox id, when the record came from a real sync.
    #[serde(default)]
    pub graph_id: Option<String>,
    /// Message subject.
    #[serde(default)]
    pub subject: Option<String>,
    /// Sender address.
    #[serde(default, rename = "senderEmail")]
    pub sender_email: Option<String>,
    /// Receive timestamp as written by the pipeline.
    #[serde(default, rename = "receivedAt")]
    pub received_at: Option<String>,
    /// Analyzer output for this message.
    #[serde(default)]
    pub analysis: EmailAnalysis,
}

/// A raw quick-action descriptor as stored on task records.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawQuickAction {
    /// Action kind tag ("pay", "renew", "open", ...).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Button label.
    pub label: Option<String>,
    /// Target URL, when the action opens one.
    pub url: Option<String>,
    /// Monetary amount, for payment actions.
    pub amount: Option<f64>,
}

/// A raw task record as stored in `tasks.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTask {
    /// Record id.
    pub id: String,
    /// Task title.
    #[serde(default)]
    pub title: Option<String>,
    /// Task description.
    #[serde(default)]
    pub description: Option<String>,
    /// Id of the email this task was derived from.
    #[serde(default, rename = "emailId")]
    pub email_id: Option<String>,
    /// Raw category label; normalized downstream.
    #[serde(default)]
    pub category: Option<String>,
    /// Priority tag ("low", "normal", "high", "urgent").
    #[serde(default)]
    pub priority: Option<String>,
    /// Status tag ("pending", "in-progress", "completed", "overdue").
    #[serde(default)]
    pub status: Option<String>,
    /// Due timestamp.
    #[serde(default, rename = "dueDate")]
    pub due_date: Option<String>,
    /// Creation timestamp.
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
    /// Suggested follow-up action.
    #[serde(default, rename = "quickActionType")]
    pub quick_action: Option<RawQuickAction>,
}

/// A raw attachment record as stored in `attachments.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAttachment {
    /// Record id.
    pub id: String,
    /// File name.
    #[serde(default, rename = "fileName")]
    pub file_name: Option<String>,
    /// File type tag (e.g. "pdf").
    #[serde(default, rename = "fileType")]
    pub file_type: Option<String>,
    /// File size in bytes.
    #[serde(default, rename = "fileSize")]
    pub file_size: Option<u64>,
    /// Raw category label; normalized downstream.
    #[serde(default)]
    pub category: Option<String>,
    /// Upload timestamp.
    #[serde(default, rename = "uploadedAt")]
    pub uploaded_at: Option<String>,
    /// Id of the email this attachment belongs to.
    #[serde(default, rename = "emailId")]
    pub email_id: Option<String>,
}

/// Parses a pipeline timestamp.
///
/// Accepts RFC 3339 ("2025-08-01T09:15:00Z") and the naive
/// "2025-08-01T09:15:00" form the pipeline also emits. Returns `None`
/// for anything else; callers pick their own fallback.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}
