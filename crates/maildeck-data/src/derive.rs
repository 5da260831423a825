//! Task and attachment derivation from analyzed email records.
//!
//! Reproduces the analyzer pipeline's generation step: each email record
//! yields one task (with a suggested quick action where the analysis
//! carries evidence for one), and each attachment-flagged email yields a
//! synthesized document record. Operates entirely on raw records; label
//! normalization happens downstream.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::debug;

use crate::record::{EmailAnalysis, RawAttachment, RawEmail, RawQuickAction, RawTask, parse_timestamp};

/// Longest description carried over from a preview before truncation.
const DESCRIPTION_LIMIT: usize = 200;

/// Due-date fallback when the analysis extracted no date.
const DEFAULT_DUE_DAYS: i64 = 7;

/// Synthetic attachment size range (bytes), matching the pipeline's output.
const SIZE_FLOOR: u64 = 80_000;
const SIZE_SPAN: u64 = 220_000;

/// Derives one task per email record.
///
/// `now` is the fallback receive time for records with a missing or
/// unparseable timestamp.
#[must_use]
pub fn derive_tasks(emails: &[RawEmail], now: DateTime<Utc>) -> Vec<RawTask> {
    let tasks: Vec<RawTask> = emails.iter().map(|email| derive_task(email, now)).collect();
    debug!("Derived {} tasks from {} email records", tasks.len(), emails.len());
    tasks
}

/// Derives a task from a single email record.
#[must_use]
pub fn derive_task(email: &RawEmail, now: DateTime<Utc>) -> RawTask {
    let received = email
        .received_at
        .as_deref()
        .and_then(parse_timestamp)
        .unwrap_or(now);
    let due = due_date(&email.analysis, received);
    let subject = email.subject.as_deref().unwrap_or("").trim();
    let preview = email.analysis.preview.as_deref().unwrap_or("");

    RawTask {
        id: email.id.to_string(),
        title: Some(if subject.is_empty() {
            "Follow up email".to_string()
        } else {
            subject.to_string()
        }),
        description: Some(truncate_description(preview)),
        email_id: Some(email.id.to_string()),
        category: Some(infer_category(&email.analysis, subject)),
        priority: Some(priority_for(received, due).to_string()),
        status: Some("pending".to_string()),
        due_date: Some(due.to_rfc3339()),
        created_at: Some(received.to_rfc3339()),
        quick_action: quick_action_for(&email.analysis),
    }
}

/// Derives document records for every attachment-flagged email.
///
/// Record ids are assigned incrementally from 1, in input order.
#[must_use]
pub fn derive_attachments(emails: &[RawEmail], now: DateTime<Utc>) -> Vec<RawAttachment> {
    let mut attachments = Vec::new();
    for email in emails {
        if email.analysis.has_attachments != Some(true) {
            continue;
        }
        let received = email
            .received_at
            .as_deref()
            .and_then(parse_timestamp)
            .unwrap_or(now);
        let subject = email.subject.as_deref().unwrap_or("").trim();
        let file_name = attachment_file_name(subject, email.id);

        attachments.push(RawAttachment {
            id: (attachments.len() + 1).to_string(),
            file_size: Some(synthetic_size(&file_name)),
            file_name: Some(file_name),
            file_type: Some("pdf".to_string()),
            category: Some(infer_category(&email.analysis, subject)),
            uploaded_at: Some(received.to_rfc3339()),
            email_id: Some(email.id.to_string()),
        });
    }
    debug!("Derived {} attachment records", attachments.len());
    attachments
}

/// Builds a quick-action descriptor from analysis evidence.
///
/// Billing evidence wins over renewal evidence, which wins over a bare
/// call-to-action link. Returns `None` when no evidence is present.
#[must_use]
pub fn quick_action_for(analysis: &EmailAnalysis) -> Option<RawQuickAction> {
    let text = analysis
        .preview
        .as_deref()
        .unwrap_or("")
        .to_lowercase();
    let amount = analysis.amounts.first().and_then(|raw| parse_amount(raw));

    if analysis.has_billing || text.contains("payment due") || text.contains("amount payable") {
        return Some(RawQuickAction {
            kind: Some("pay".to_string()),
            label: Some("Pay now".to_string()),
            url: None,
            amount,
        });
    }

    if analysis.has_renewal || analysis.docs_required {
        return Some(RawQuickAction {
            kind: Some("renew".to_string()),
            label: Some("Renew / submit documents".to_string()),
            url: None,
            amount,
        });
    }

    if analysis.has_action_link || text.contains("click here") {
        return Some(RawQuickAction {
            kind: Some("open".to_string()),
            label: Some("View details".to_string()),
            url: None,
            amount,
        });
    }

    None
}

/// Infers a raw category label for a record.
///
/// A non-empty analyzer label short of "uncategorized" is kept as-is
/// (lower-cased); otherwise the organisation and evidence flags decide.
#[must_use]
pub fn infer_category(analysis: &EmailAnalysis, subject: &str) -> String {
    let existing = analysis
        .category
        .as_deref()
        .unwrap_or("")
        .to_lowercase();
    if !existing.is_empty() && existing != "uncategorized" {
        return existing;
    }

    let org = analysis.org.as_deref().unwrap_or("").to_lowercase();
    let email_type = analysis.email_type.as_deref().unwrap_or("").to_lowercase();
    let subject = subject.to_lowercase();

    let government_orgs = ["iras", "cpf", "authority", "ministry", "ica"];
    if government_orgs.iter().any(|key| org.contains(key)) {
        return "government".to_string();
    }
    let finance_orgs = ["dbs", "ocbc", "uob", "posb", "bank"];
    if finance_orgs.iter().any(|key| org.contains(key)) {
        return "finance".to_string();
    }
    if subject.contains("bill") || email_type.contains("utility") {
        return "bills".to_string();
    }
    if analysis.has_appointment {
        return "healthcare".to_string();
    }
    if analysis.has_renewal {
        return "government".to_string();
    }

    "uncategorized".to_string()
}

/// Parses a currency string like "$3,245.00" into its numeric value.
#[must_use]
pub fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('$').unwrap_or(trimmed).replace(',', "");
    digits.parse().ok()
}

/// Parses a human-readable date like "15 Aug 2025" or "15 August 2025".
#[must_use]
pub fn parse_human_date(raw: &str) -> Option<NaiveDate> {
    for format in ["%d %b %Y", "%d %B %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw.trim(), format) {
            return Some(date);
        }
    }
    None
}

/// Due date: first extracted date, else a week after receipt.
fn due_date(analysis: &EmailAnalysis, received: DateTime<Utc>) -> DateTime<Utc> {
    analysis
        .dates
        .first()
        .and_then(|raw| parse_human_date(raw))
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map_or_else(
            || received + Duration::days(DEFAULT_DUE_DAYS),
            |naive| naive.and_utc(),
        )
}

/// Priority from due-date proximity at receive time.
///
/// Within 3 days is urgent, within 7 is high, everything later is medium.
fn priority_for(received: DateTime<Utc>, due: DateTime<Utc>) -> &'static str {
    let days = (due - received).num_days();
    if days <= 3 {
        "urgent"
    } else if days <= 7 {
        "high"
    } else {
        "medium"
    }
}

fn truncate_description(preview: &str) -> String {
    if preview.chars().count() <= DESCRIPTION_LIMIT {
        return preview.to_string();
    }
    let mut truncated: String = preview.chars().take(DESCRIPTION_LIMIT - 3).collect();
    truncated.push_str("...");
    truncated
}

fn attachment_file_name(subject: &str, email_id: u64) -> String {
    let base = if subject.is_empty() {
        format!("email_{email_id}")
    } else {
        subject.replace(' ', "_")
    };
    format!("{base}.pdf")
}

/// Deterministic stand-in size within the pipeline's 80-300 KB range.
fn synthetic_size(file_name: &str) -> u64 {
    let hash = file_name
        .bytes()
        .fold(0u64, |acc, byte| acc.wrapping_mul(131).wrapping_add(u64::from(byte)));
    SIZE_FLOOR + hash % SIZE_SPAN
}
