//! In-memory client state store for the dashboard.
//!
//! The store is the single authoritative holder of the four mutable
//! lists (emails, tasks, trashed emails, notifications). All operations
//! are synchronous and total: an unknown id is a silent no-op, never an
//! error. After every mutating call the store publishes an immutable
//! snapshot over a watch channel; the new snapshot is visible to every
//! subscriber before the call returns.
//!
//! There is one writer. Views hold an [`InboxWatcher`] and read
//! snapshots; only the owner of the [`InboxStore`] mutates.

mod state;

pub use state::InboxState;

use tokio::sync::watch;
use tracing::debug;

use crate::model::{Category, CategoryCount, EmailId, NotificationId, TaskId};

/// Receives state snapshots as the store mutates.
///
/// `borrow()` always yields the latest published snapshot.
pub type InboxWatcher = watch::Receiver<InboxState>;

/// Single-writer state store feeding the dashboard views.
#[derive(Debug)]
pub struct InboxStore {
    state: InboxState,
    snapshots: watch::Sender<InboxState>,
}

impl InboxStore {
    /// Creates a store over initial state.
    #[must_use]
    pub fn new(state: InboxState) -> Self {
        let (snapshots, _) = watch::channel(state.clone());
        Self { state, snapshots }
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> &InboxState {
        &self.state
    }

    /// Subscribes to state snapshots.
    ///
    /// The receiver holds the current state immediately.
    #[must_use]
    pub fn subscribe(&self) -> InboxWatcher {
        self.snapshots.subscribe()
    }

    /// Moves an email from the active list to the trash.
    pub fn delete_email(&mut self, id: &EmailId) {
        if self.state.trash_email(id) {
            debug!("Moved email {id} to trash");
        } else {
            debug!("No active email {id} to delete");
        }
        self.publish();
    }

    /// Removes an email from the trash for good.
    pub fn permanently_delete_email(&mut self, id: &EmailId) {
        if self.state.purge_trashed_email(id) {
            debug!("Permanently deleted email {id}");
        } else {
            debug!("No trashed email {id} to permanently delete");
        }
        self.publish();
    }

    /// Moves a trashed email back to the active list.
    pub fn restore_email(&mut self, id: &EmailId) {
        if self.state.restore_email(id) {
            debug!("Restored email {id} from trash");
        } else {
            debug!("No trashed email {id} to restore");
        }
        self.publish();
    }

    /// Clears the trash.
    pub fn empty_trash(&mut self) {
        let cleared = self.state.clear_trash();
        debug!("Emptied trash ({cleared} emails)");
        self.publish();
    }

    /// Removes an email from the active list without trashing it.
    pub fn archive_email(&mut self, id: &EmailId) {
        if self.state.remove_email(id) {
            debug!("Archived email {id}");
        } else {
            debug!("No active email {id} to archive");
        }
        self.publish();
    }

    /// Toggles an email's starred flag.
    pub fn star_email(&mut self, id: &EmailId) {
        if !self.state.toggle_star(id) {
            debug!("No active email {id} to star");
        }
        self.publish();
    }

    /// Marks an email read. One-way; already-read emails are left alone.
    pub fn mark_as_read(&mut self, id: &EmailId) {
        if self.state.mark_email_read(id) {
            debug!("Marked email {id} read");
        }
        self.publish();
    }

    /// Completes a task.
    pub fn complete_task(&mut self, id: &TaskId) {
        if self.state.complete_task(id) {
            debug!("Completed task {id}");
        } else {
            debug!("No task {id} to complete");
        }
        self.publish();
    }

    /// Completes every task associated with an email.
    ///
    /// Affects zero or more tasks; other tasks are untouched.
    pub fn complete_tasks_for_email(&mut self, email_id: &EmailId) {
        let completed = self.state.complete_tasks_for_email(email_id);
        debug!("Completed {completed} tasks for email {email_id}");
        self.publish();
    }

    /// Total and unread counts for one category, over the active list only.
    #[must_use]
    pub fn email_count_by_category(&self, category: Category) -> CategoryCount {
        self.state.email_count_by_category(category)
    }

    /// Marks a notification acknowledged.
    pub fn mark_notification_read(&mut self, id: &NotificationId) {
        if self.state.mark_notification_read(id) {
            debug!("Acknowledged notification {id}");
        } else {
            debug!("No notification {id} to acknowledge");
        }
        self.publish();
    }

    /// Marks every notification acknowledged.
    pub fn clear_notifications(&mut self) {
        self.state.acknowledge_all_notifications();
        debug!("Acknowledged all notifications");
        self.publish();
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.state.clone());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{Email, Notification, Priority, Task, TaskStatus};
    use chrono::Utc;

    fn email(id: &str, category: Category, is_read: bool) -> Email {
        Email {
            id: EmailId::from(id),
            subject: format!("Subject {id}"),
            sender: "Sender".to_string(),
            sender_email: "sender@example.com".to_string(),
            preview: String::new(),
            category,
            received_at: Utc::now(),
            is_read,
            is_starred: false,
            has_attachment: false,
        }
    }

    fn task(id: &str, email_id: Option<&str>) -> Task {
        Task {
            id: TaskId::from(id),
            title: format!("Task {id}"),
            description: String::new(),
            email_id: email_id.map(EmailId::from),
            category: Category::Bills,
            priority: Priority::Medium,
            status: TaskStatus::Pending,
            due_at: Utc::now(),
            created_at: Utc::now(),
            quick_action: None,
        }
    }

    fn store() -> InboxStore {
        InboxStore::new(InboxState::new(
            vec![
                email("e1", Category::Bills, false),
                email("e2", Category::Bills, true),
                email("e3", Category::Government, false),
            ],
            vec![task("t1", Some("e1")), task("t2", Some("e1")), task("t3", Some("e3"))],
            Notification::seed(Utc::now()),
        ))
    }

    #[test]
    fn test_delete_moves_email_to_trash() {
        let mut store = store();
        store.delete_email(&EmailId::from("e1"));

        assert_eq!(store.state().emails().len(), 2);
        assert_eq!(store.state().trashed_emails().len(), 1);
        assert_eq!(store.state().trashed_emails()[0].id.as_str(), "e1");
        assert!(store.state().email(&EmailId::from("e1")).is_none());
    }

    #[test]
    fn test_delete_then_restore_round_trips() {
        let mut store = store();
        let id = EmailId::from("e1");

        store.delete_email(&id);
        store.restore_email(&id);

        assert_eq!(store.state().emails().len(), 3);
        assert!(store.state().trashed_emails().is_empty());
        assert!(store.state().email(&id).is_some());
    }

    #[test]
    fn test_permanent_delete_only_touches_trash() {
        let mut store = store();
        let id = EmailId::from("e1");

        // Not trashed yet: nothing to permanently delete.
        store.permanently_delete_email(&id);
        assert_eq!(store.state().emails().len(), 3);

        store.delete_email(&id);
        store.permanently_delete_email(&id);
        assert!(store.state().trashed_emails().is_empty());
        assert_eq!(store.state().emails().len(), 2);
    }

    #[test]
    fn test_empty_trash_makes_restore_a_no_op() {
        let mut store = store();
        let id = EmailId::from("e1");

        store.delete_email(&id);
        store.empty_trash();
        store.restore_email(&id);

        assert_eq!(store.state().emails().len(), 2);
        assert!(store.state().trashed_emails().is_empty());
    }

    #[test]
    fn test_archive_skips_trash() {
        let mut store = store();
        store.archive_email(&EmailId::from("e2"));

        assert_eq!(store.state().emails().len(), 2);
        assert!(store.state().trashed_emails().is_empty());
    }

    #[test]
    fn test_star_toggles() {
        let mut store = store();
        let id = EmailId::from("e1");

        store.star_email(&id);
        assert!(store.state().email(&id).unwrap().is_starred);
        store.star_email(&id);
        assert!(!store.state().email(&id).unwrap().is_starred);
    }

    #[test]
    fn test_mark_as_read_is_one_way() {
        let mut store = store();
        let id = EmailId::from("e1");

        store.mark_as_read(&id);
        assert!(store.state().email(&id).unwrap().is_read);
        store.mark_as_read(&id);
        assert!(store.state().email(&id).unwrap().is_read);
    }

    #[test]
    fn test_complete_task() {
        let mut store = store();
        store.complete_task(&TaskId::from("t1"));

        assert!(store.state().task(&TaskId::from("t1")).unwrap().is_completed());
        assert!(!store.state().task(&TaskId::from("t2")).unwrap().is_completed());
    }

    #[test]
    fn test_complete_tasks_for_email_scopes_to_that_email() {
        let mut store = store();
        store.complete_tasks_for_email(&EmailId::from("e1"));

        assert!(store.state().task(&TaskId::from("t1")).unwrap().is_completed());
        assert!(store.state().task(&TaskId::from("t2")).unwrap().is_completed());
        assert!(!store.state().task(&TaskId::from("t3")).unwrap().is_completed());
    }

    #[test]
    fn test_email_count_by_category_counts_active_only() {
        let mut store = store();

        let bills = store.email_count_by_category(Category::Bills);
        assert_eq!(bills.count, 2);
        assert_eq!(bills.unread, 1);

        store.delete_email(&EmailId::from("e1"));
        let bills = store.email_count_by_category(Category::Bills);
        assert_eq!(bills.count, 1);
        assert_eq!(bills.unread, 0);

        let insurance = store.email_count_by_category(Category::Insurance);
        assert_eq!(insurance.count, 0);
        assert_eq!(insurance.unread, 0);
    }

    #[test]
    fn test_unknown_ids_are_no_ops_everywhere() {
        let mut store = store();
        let ghost_email = EmailId::from("nope");
        let ghost_task = TaskId::from("nope");
        let ghost_notification = NotificationId::from("nope");

        store.delete_email(&ghost_email);
        store.permanently_delete_email(&ghost_email);
        store.restore_email(&ghost_email);
        store.archive_email(&ghost_email);
        store.star_email(&ghost_email);
        store.mark_as_read(&ghost_email);
        store.complete_task(&ghost_task);
        store.complete_tasks_for_email(&ghost_email);
        store.mark_notification_read(&ghost_notification);

        assert_eq!(store.state().emails().len(), 3);
        assert!(store.state().trashed_emails().is_empty());
        assert!(store.state().tasks().iter().all(|t| !t.is_completed()));
        assert_eq!(store.state().unread_notification_count(), 2);
    }

    #[test]
    fn test_notification_acknowledgment() {
        let mut store = store();
        assert_eq!(store.state().unread_notification_count(), 2);

        store.mark_notification_read(&NotificationId::from("1"));
        assert_eq!(store.state().unread_notification_count(), 1);

        store.clear_notifications();
        assert_eq!(store.state().unread_notification_count(), 0);
        assert_eq!(store.state().notifications().len(), 3);
    }

    #[test]
    fn test_snapshot_visible_before_mutation_returns() {
        let mut store = store();
        let watcher = store.subscribe();
        assert_eq!(watcher.borrow().emails().len(), 3);

        store.delete_email(&EmailId::from("e1"));

        assert_eq!(watcher.borrow().emails().len(), 2);
        assert_eq!(watcher.borrow().trashed_emails().len(), 1);
    }

    #[test]
    fn test_category_counts_cover_the_whole_taxonomy() {
        let store = store();
        let counts = store.state().category_counts();

        assert_eq!(counts.len(), Category::ALL.len());
        let total: usize = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, store.state().emails().len());
    }
}
