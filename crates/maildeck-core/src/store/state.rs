//! Dashboard state: the four entity lists and their derived reads.

use crate::model::{
    Category, CategoryCount, Email, EmailId, Notification, NotificationId, Task, TaskId,
};

/// The four mutable lists backing the dashboard, plus derived reads.
///
/// Snapshots of this type are what subscribers receive; mutation goes
/// through [`InboxStore`](crate::store::InboxStore), which owns the
/// single live instance. An email is a member of exactly one of the
/// active and trashed lists at any time.
#[derive(Debug, Clone, Default)]
pub struct InboxState {
    emails: Vec<Email>,
    tasks: Vec<Task>,
    trashed: Vec<Email>,
    notifications: Vec<Notification>,
}

impl InboxState {
    /// Creates state from loaded entities. The trash starts empty.
    #[must_use]
    pub fn new(emails: Vec<Email>, tasks: Vec<Task>, notifications: Vec<Notification>) -> Self {
        Self {
            emails,
            tasks,
            trashed: Vec::new(),
            notifications,
        }
    }

    /// Active emails, in load order.
    #[must_use]
    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    /// All tasks. Tasks are never deleted.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Soft-deleted emails, oldest deletion first.
    #[must_use]
    pub fn trashed_emails(&self) -> &[Email] {
        &self.trashed
    }

    /// Notifications, in seed order.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Looks up an active email.
    #[must_use]
    pub fn email(&self, id: &EmailId) -> Option<&Email> {
        self.emails.iter().find(|email| &email.id == id)
    }

    /// Looks up a task.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    /// Total and unread counts for one category, over the active list only.
    #[must_use]
    pub fn email_count_by_category(&self, category: Category) -> CategoryCount {
        let mut count = 0;
        let mut unread = 0;
        for email in self.emails.iter().filter(|e| e.category == category) {
            count += 1;
            if !email.is_read {
                unread += 1;
            }
        }
        CategoryCount {
            category,
            count,
            unread,
        }
    }

    /// Counts for every category, in taxonomy display order.
    #[must_use]
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        Category::ALL
            .iter()
            .map(|category| self.email_count_by_category(*category))
            .collect()
    }

    /// Unacknowledged notifications, for the header badge.
    #[must_use]
    pub fn unread_notification_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    // Mutations below return whether they changed anything, so the store
    // can log misses. A missing id never fails.

    pub(crate) fn trash_email(&mut self, id: &EmailId) -> bool {
        let Some(position) = self.emails.iter().position(|email| &email.id == id) else {
            return false;
        };
        let email = self.emails.remove(position);
        self.trashed.push(email);
        true
    }

    pub(crate) fn purge_trashed_email(&mut self, id: &EmailId) -> bool {
        let Some(position) = self.trashed.iter().position(|email| &email.id == id) else {
            return false;
        };
        self.trashed.remove(position);
        true
    }

    pub(crate) fn restore_email(&mut self, id: &EmailId) -> bool {
        let Some(position) = self.trashed.iter().position(|email| &email.id == id) else {
            return false;
        };
        let email = self.trashed.remove(position);
        self.emails.push(email);
        true
    }

    pub(crate) fn clear_trash(&mut self) -> usize {
        let cleared = self.trashed.len();
        self.trashed.clear();
        cleared
    }

    pub(crate) fn remove_email(&mut self, id: &EmailId) -> bool {
        let Some(position) = self.emails.iter().position(|email| &email.id == id) else {
            return false;
        };
        self.emails.remove(position);
        true
    }

    pub(crate) fn toggle_star(&mut self, id: &EmailId) -> bool {
        match self.emails.iter_mut().find(|email| &email.id == id) {
            Some(email) => {
                email.toggle_star();
                true
            }
            None => false,
        }
    }

    pub(crate) fn mark_email_read(&mut self, id: &EmailId) -> bool {
        match self.emails.iter_mut().find(|email| &email.id == id) {
            Some(email) if !email.is_read => {
                email.mark_read();
                true
            }
            _ => false,
        }
    }

    pub(crate) fn complete_task(&mut self, id: &TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| &task.id == id) {
            Some(task) => {
                task.complete();
                true
            }
            None => false,
        }
    }

    pub(crate) fn complete_tasks_for_email(&mut self, email_id: &EmailId) -> usize {
        let mut completed = 0;
        for task in self
            .tasks
            .iter_mut()
            .filter(|task| task.email_id.as_ref() == Some(email_id))
        {
            task.complete();
            completed += 1;
        }
        completed
    }

    pub(crate) fn mark_notification_read(&mut self, id: &NotificationId) -> bool {
        match self
            .notifications
            .iter_mut()
            .find(|notification| &notification.id == id)
        {
            Some(notification) => {
                notification.mark_read();
                true
            }
            None => false,
        }
    }

    pub(crate) fn acknowledge_all_notifications(&mut self) {
        for notification in &mut self.notifications {
            notification.mark_read();
        }
    }
}
