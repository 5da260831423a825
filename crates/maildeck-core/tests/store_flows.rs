//! Integration tests for the dashboard flows.
//!
//! These run the embedded mock collections through the load path and
//! exercise the store the way the views do: triage an email, pay a
//! bill, empty the trash, acknowledge notifications.

#![allow(clippy::unwrap_used)]

use chrono::Utc;
use maildeck_core::{
    Category, EmailId, InboxState, InboxStore, Notification, QuickActionKind, TaskId, load_mock,
};
use maildeck_data::derive;

fn mock_store() -> InboxStore {
    let now = Utc::now();
    let seed = load_mock(now).unwrap();
    InboxStore::new(InboxState::new(
        seed.emails,
        seed.tasks,
        Notification::seed(now),
    ))
}

#[test]
fn category_counts_match_a_manual_scan() {
    let store = mock_store();

    for category in Category::ALL {
        let derived = store.email_count_by_category(category);
        let manual: Vec<_> = store
            .state()
            .emails()
            .iter()
            .filter(|email| email.category == category)
            .collect();

        assert_eq!(derived.count, manual.len());
        assert_eq!(
            derived.unread,
            manual.iter().filter(|email| !email.is_read).count()
        );
    }
}

#[test]
fn delete_and_restore_returns_to_the_original_membership() {
    let mut store = mock_store();
    let before: Vec<String> = store
        .state()
        .emails()
        .iter()
        .map(|email| email.id.to_string())
        .collect();
    let id = EmailId::from("0");

    store.delete_email(&id);
    assert!(store.state().email(&id).is_none());
    assert_eq!(store.state().trashed_emails().len(), 1);

    store.restore_email(&id);
    let after: Vec<String> = store
        .state()
        .emails()
        .iter()
        .map(|email| email.id.to_string())
        .collect();

    assert!(store.state().trashed_emails().is_empty());
    assert_eq!(before.len(), after.len());
    for id in &before {
        assert!(after.contains(id));
    }
}

#[test]
fn emptied_trash_cannot_be_restored_from() {
    let mut store = mock_store();
    let first = EmailId::from("0");
    let second = EmailId::from("3");

    store.delete_email(&first);
    store.delete_email(&second);
    store.empty_trash();

    store.restore_email(&first);
    store.restore_email(&second);

    assert!(store.state().trashed_emails().is_empty());
    assert!(store.state().email(&first).is_none());
    assert!(store.state().email(&second).is_none());
}

#[test]
fn paying_a_bill_completes_only_its_tasks() {
    let mut store = mock_store();
    let bill_email = EmailId::from("3");

    let linked: Vec<_> = store
        .state()
        .tasks()
        .iter()
        .filter(|task| task.email_id.as_ref() == Some(&bill_email))
        .map(|task| task.id.clone())
        .collect();
    assert!(!linked.is_empty());

    store.complete_tasks_for_email(&bill_email);

    for task in store.state().tasks() {
        if linked.contains(&task.id) {
            assert!(task.is_completed());
        } else if task.id != TaskId::from("7") {
            // Task 7 ships completed in the mock data.
            assert!(!task.is_completed());
        }
    }
}

#[test]
fn triage_flow_keeps_the_two_lists_disjoint() {
    let mut store = mock_store();

    store.delete_email(&EmailId::from("10"));
    store.archive_email(&EmailId::from("9"));
    store.delete_email(&EmailId::from("2"));
    store.restore_email(&EmailId::from("10"));

    let active: Vec<&str> = store
        .state()
        .emails()
        .iter()
        .map(|email| email.id.as_str())
        .collect();
    for trashed in store.state().trashed_emails() {
        assert!(!active.contains(&trashed.id.as_str()));
    }

    // Archived mail is in neither list.
    assert!(store.state().email(&EmailId::from("9")).is_none());
    assert!(
        !store
            .state()
            .trashed_emails()
            .iter()
            .any(|email| email.id.as_str() == "9")
    );
}

#[test]
fn notification_flow_acknowledges_without_deleting() {
    let mut store = mock_store();
    let seeded = store.state().notifications().len();
    assert!(store.state().unread_notification_count() > 0);

    store.clear_notifications();

    assert_eq!(store.state().notifications().len(), seeded);
    assert_eq!(store.state().unread_notification_count(), 0);
}

#[test]
fn subscriber_sees_each_mutation_as_it_happens() {
    let mut store = mock_store();
    let watcher = store.subscribe();
    let initial = watcher.borrow().emails().len();

    store.delete_email(&EmailId::from("0"));
    assert_eq!(watcher.borrow().emails().len(), initial - 1);

    store.empty_trash();
    assert!(watcher.borrow().trashed_emails().is_empty());
}

#[test]
fn derived_tasks_flow_through_the_loader() {
    let now = Utc::now();
    let emails = maildeck_data::mock_emails().unwrap();
    let raw_tasks = derive::derive_tasks(&emails, now);
    let raw_attachments = derive::derive_attachments(&emails, now);

    let seed = maildeck_core::load::seed_from_records(&emails, &raw_tasks, &raw_attachments, now);

    assert_eq!(seed.tasks.len(), seed.emails.len());

    // Billing emails come out with a payment quick action.
    let tax_task = seed
        .tasks
        .iter()
        .find(|task| task.email_id.as_ref() == Some(&EmailId::from("0")))
        .unwrap();
    let action = tax_task.quick_action.as_ref().unwrap();
    assert_eq!(action.kind, QuickActionKind::Pay);
    assert_eq!(action.amount, Some(3245.0));

    // Attachment-flagged emails produce vault documents.
    assert_eq!(
        seed.documents.len(),
        emails
            .iter()
            .filter(|email| email.analysis.has_attachments == Some(true))
            .count()
    );
}
