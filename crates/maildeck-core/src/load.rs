//! Mock data loading: raw records into typed entities.
//!
//! The dashboard's upstream is the embedded record collections in
//! `maildeck-data`. Loading runs the category normalizer once per record
//! and applies the tolerant fallback rules the records were designed
//! around: a malformed field degrades to a default, never an error.
//! Only a malformed collection fails the load.

use chrono::{DateTime, Utc};
use tracing::debug;

use maildeck_data::{RawAttachment, RawEmail, RawQuickAction, RawTask, parse_timestamp};

use crate::error::Result;
use crate::model::{
    Attachment, AttachmentId, Email, EmailId, Priority, QuickAction, QuickActionKind, Task,
    TaskId, TaskStatus,
};
use crate::normalize::normalize_label;

/// Typed entities produced by a mock-data load.
///
/// Emails and tasks seed the store; documents feed the read-only vault
/// and stay outside it.
#[derive(Debug, Clone)]
pub struct InboxSeed {
    /// Emails for the store's active list.
    pub emails: Vec<Email>,
    /// Tasks for the store.
    pub tasks: Vec<Task>,
    /// Vault documents.
    pub documents: Vec<Attachment>,
}

/// Loads the embedded mock collections.
///
/// `now` is the fallback for record timestamps that are missing or
/// unparseable.
///
/// # Errors
///
/// Returns an error if an embedded collection is malformed.
pub fn load_mock(now: DateTime<Utc>) -> Result<InboxSeed> {
    let emails = maildeck_data::mock_emails()?;
    let tasks = maildeck_data::mock_tasks()?;
    let attachments = maildeck_data::mock_attachments()?;
    Ok(seed_from_records(&emails, &tasks, &attachments, now))
}

/// Converts already-parsed record collections into typed entities.
#[must_use]
pub fn seed_from_records(
    emails: &[RawEmail],
    tasks: &[RawTask],
    attachments: &[RawAttachment],
    now: DateTime<Utc>,
) -> InboxSeed {
    let seed = InboxSeed {
        emails: emails.iter().map(|r| email_from_record(r, now)).collect(),
        tasks: tasks.iter().map(|r| task_from_record(r, now)).collect(),
        documents: attachments
            .iter()
            .map(|r| attachment_from_record(r, now))
            .collect(),
    };
    debug!(
        "Loaded {} emails, {} tasks, {} documents",
        seed.emails.len(),
        seed.tasks.len(),
        seed.documents.len()
    );
    seed
}

/// Converts one email record.
#[must_use]
pub fn email_from_record(record: &RawEmail, now: DateTime<Utc>) -> Email {
    let analysis = &record.analysis;
    let sender = analysis
        .org
        .clone()
        .or_else(|| analysis.sender.clone())
        .or_else(|| {
            record
                .sender_email
                .as_deref()
                .and_then(|address| address.split('@').next())
                .map(ToString::to_string)
        })
        .unwrap_or_else(|| "Unknown".to_string());

    Email {
        id: EmailId::new(record.id.to_string()),
        subject: record.subject.clone().unwrap_or_default(),
        sender,
        sender_email: record.sender_email.clone().unwrap_or_default(),
        preview: analysis.preview.clone().unwrap_or_default(),
        category: normalize_label(analysis.category.as_deref()),
        received_at: timestamp_or(record.received_at.as_deref(), now),
        is_read: analysis.is_read.unwrap_or(false),
        is_starred: false,
        has_attachment: analysis.has_attachments.unwrap_or(false),
    }
}

/// Converts one task record.
#[must_use]
pub fn task_from_record(record: &RawTask, now: DateTime<Utc>) -> Task {
    Task {
        id: TaskId::new(record.id.clone()),
        title: record.title.clone().unwrap_or_default(),
        description: record.description.clone().unwrap_or_default(),
        email_id: record.email_id.as_deref().map(EmailId::from),
        category: normalize_label(record.category.as_deref()),
        priority: record
            .priority
            .as_deref()
            .map(Priority::parse)
            .unwrap_or_default(),
        status: record
            .status
            .as_deref()
            .map(TaskStatus::parse)
            .unwrap_or_default(),
        due_at: timestamp_or(record.due_date.as_deref(), now),
        created_at: timestamp_or(record.created_at.as_deref(), now),
        quick_action: record.quick_action.as_ref().map(quick_action_from_record),
    }
}

/// Converts one attachment record.
#[must_use]
pub fn attachment_from_record(record: &RawAttachment, now: DateTime<Utc>) -> Attachment {
    Attachment {
        id: AttachmentId::new(record.id.clone()),
        file_name: record.file_name.clone().unwrap_or_default(),
        file_type: record.file_type.clone().unwrap_or_default(),
        file_size: record.file_size.unwrap_or(0),
        category: normalize_label(record.category.as_deref()),
        uploaded_at: timestamp_or(record.uploaded_at.as_deref(), now),
        email_id: record
            .email_id
            .as_deref()
            .map(EmailId::from)
            .unwrap_or_else(|| EmailId::new("")),
    }
}

fn quick_action_from_record(record: &RawQuickAction) -> QuickAction {
    QuickAction {
        kind: record
            .kind
            .as_deref()
            .map(QuickActionKind::parse)
            .unwrap_or_default(),
        label: record.label.clone().unwrap_or_default(),
        url: record.url.clone(),
        amount: record.amount,
    }
}

fn timestamp_or(raw: Option<&str>, fallback: DateTime<Utc>) -> DateTime<Utc> {
    raw.and_then(parse_timestamp).unwrap_or(fallback)
}
