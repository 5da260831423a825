//! # maildeck-core
//!
//! Core domain logic for the MailDeck email-triage dashboard.
//!
//! This crate provides:
//! - **Category taxonomy** - eight fixed tags with display metadata
//! - **Category normalizer** - free-text labels onto the taxonomy
//! - **Client state store** - in-memory, single-writer, publishing
//!   immutable snapshots to subscribed views
//! - **Mock data loading** - raw records into typed entities
//! - **Display formatting** - file sizes, relative times, due-date
//!   countdowns
//!
//! The store's boundary is an in-process call interface: views read
//! snapshots and invoke mutations directly. There is no server, no
//! persistence, and no wire protocol behind it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
pub mod format;
pub mod load;
pub mod model;
pub mod normalize;
pub mod store;

pub use error::{Error, Result};
pub use format::{DueLabel, Urgency};
pub use load::{InboxSeed, load_mock};
pub use model::{
    Attachment, AttachmentId, Category, CategoryCount, Email, EmailId, Notification,
    NotificationId, NotificationKind, Priority, QuickAction, QuickActionKind, Task, TaskId,
    TaskStatus,
};
pub use normalize::normalize_label;
pub use store::{InboxState, InboxStore, InboxWatcher};
