//! Task entity and its supporting enums.

use chrono::{DateTime, Utc};

use super::{Category, EmailId};

/// Unique identifier for a task.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    /// Create a new task ID.
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

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    /// Needs attention immediately.
    Urgent,
    /// Needs attention this week.
    High,
    /// Routine.
    #[default]
    Medium,
    /// Whenever.
    Low,
}

impl Priority {
    /// Parse from the record string representation.
    ///
    /// The analyzer pipeline's "normal" maps to [`Priority::Medium`];
    /// so does anything unrecognized.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "urgent" => Self::Urgent,
            "high" => Self::High,
            "low" => Self::Low,
            _ => Self::Medium,
        }
    }

    /// Convert to the record string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Task status.
///
/// Status is monotonic: completed is terminal and never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    /// Not started.
    #[default]
    Pending,
    /// Being worked on.
    InProgress,
    /// Done. Terminal.
    Completed,
    /// Past its due date.
    Overdue,
}

impl TaskStatus {
    /// Parse from the record string representation.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "in-progress" | "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            "overdue" => Self::Overdue,
            _ => Self::Pending,
        }
    }

    /// Convert to the record string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
        }
    }

    /// Whether this status admits no further transitions.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Kind tag of a suggested follow-up action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuickActionKind {
    /// Renew a document or contract.
    Renew,
    /// Pay an amount.
    Pay,
    /// Book or confirm an appointment.
    Appointment,
    /// Upload a document.
    Upload,
    /// Verify an identity or account.
    Verify,
    /// Open a link.
    #[default]
    Link,
}

impl QuickActionKind {
    /// Parse from the record string representation.
    ///
    /// The analyzer pipeline's "open" maps to [`QuickActionKind::Link`];
    /// so does anything unrecognized.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "renew" => Self::Renew,
            "pay" => Self::Pay,
            "appointment" => Self::Appointment,
            "upload" => Self::Upload,
            "verify" => Self::Verify,
            _ => Self::Link,
        }
    }

    /// Convert to the record string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Renew => "renew",
            Self::Pay => "pay",
            Self::Appointment => "appointment",
            Self::Upload => "upload",
            Self::Verify => "verify",
            Self::Link => "link",
        }
    }
}

/// A task's embedded follow-up suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickAction {
    /// Action kind.
    pub kind: QuickActionKind,
    /// Button label.
    pub label: String,
    /// Target URL, when the action opens one.
    pub url: Option<String>,
    /// Monetary amount, for payment actions.
    pub amount: Option<f64>,
}

/// A derived to-do surfaced next to the email list.
#[derive(Debug, Clone)]
pub struct Task {
    /// Unique identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Email this task was derived from, if any.
    pub email_id: Option<EmailId>,
    /// Classification tag.
    pub category: Category,
    /// Priority.
    pub priority: Priority,
    /// Current status.
    pub status: TaskStatus,
    /// When the task is due.
    pub due_at: DateTime<Utc>,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// Suggested follow-up action, if any.
    pub quick_action: Option<QuickAction>,
}

impl Task {
    /// Completes the task. Terminal; completion never reverts.
    pub const fn complete(&mut self) {
        self.status = TaskStatus::Completed;
    }

    /// Whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.status.is_terminal()
    }
}
