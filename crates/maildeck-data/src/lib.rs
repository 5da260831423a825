//! # maildeck-data
//!
//! Raw record collections for the MailDeck triage dashboard.
//!
//! This crate provides:
//! - Loosely-typed serde records for the three mock collections
//!   (emails with analyzer output, tasks, attachments)
//! - The embedded mock JSON data backing the dashboard
//! - The derivation pipeline that generates task and attachment records
//!   from analyzed emails
//!
//! Records stay raw here; `maildeck-core` turns them into typed entities.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod derive;
mod error;
mod record;

pub use error::{Error, Result};
pub use record::{
    EmailAnalysis, RawAttachment, RawEmail, RawQuickAction, RawTask, parse_timestamp,
};

const EMAILS_JSON: &str = include_str!("../data/emails.json");
const TASKS_JSON: &str = include_str!("../data/tasks.json");
const ATTACHMENTS_JSON: &str = include_str!("../data/attachments.json");

/// Parses an email record collection from JSON.
///
/// # Errors
///
/// Returns an error if the JSON does not deserialize into email records.
pub fn parse_emails(json: &str) -> Result<Vec<RawEmail>> {
    Ok(serde_json::from_str(json)?)
}

/// Parses a task record collection from JSON.
///
/// # Errors
///
/// Returns an error if the JSON does not deserialize into task records.
pub fn parse_tasks(json: &str) -> Result<Vec<RawTask>> {
    Ok(serde_json::from_str(json)?)
}

/// Parses an attachment record collection from JSON.
///
/// # Errors
///
/// Returns an error if the JSON does not deserialize into attachment records.
pub fn parse_attachments(json: &str) -> Result<Vec<RawAttachment>> {
    Ok(serde_json::from_str(json)?)
}

/// The embedded mock email collection.
///
/// # Errors
///
/// Returns an error if the embedded JSON is malformed.
pub fn mock_emails() -> Result<Vec<RawEmail>> {
    parse_emails(EMAILS_JSON)
}

/// The embedded mock task collection.
///
/// # Errors
///
/// Returns an error if the embedded JSON is malformed.
pub fn mock_tasks() -> Result<Vec<RawTask>> {
    parse_tasks(TASKS_JSON)
}

/// The embedded mock attachment collection.
///
/// # Errors
///
/// Returns an error if the embedded JSON is malformed.
pub fn mock_attachments() -> Result<Vec<RawAttachment>> {
    parse_attachments(ATTACHMENTS_JSON)
}
