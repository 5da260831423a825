//! End-to-end tour of the triage core.
//!
//! Loads the embedded mock collections, builds the store, and runs
//! through the dashboard flows: category counts, triage actions, a
//! simulated bill payment, and the document vault.
//!
//! ```sh
//! cargo run -p maildeck-core --example inbox_walkthrough
//! ```

use anyhow::Result;
use chrono::Utc;
use maildeck_core::{
    EmailId, InboxState, InboxStore, Notification, TaskId, format, load_mock,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let now = Utc::now();
    let seed = load_mock(now)?;
    let documents = seed.documents;
    let mut store = InboxStore::new(InboxState::new(
        seed.emails,
        seed.tasks,
        Notification::seed(now),
    ));
    let watcher = store.subscribe();

    println!("== Inbox by category ==");
    for count in store.state().category_counts() {
        println!(
            "{:<18} {:>2} total, {} unread",
            count.category.display_name(),
            count.count,
            count.unread
        );
    }

    // Open the tax notice, star it, and tidy up the rest.
    let tax_notice = EmailId::from("0");
    store.mark_as_read(&tax_notice);
    store.star_email(&tax_notice);
    store.delete_email(&EmailId::from("10"));
    store.archive_email(&EmailId::from("9"));

    // Pay the utilities bill; its linked task completes with it.
    store.complete_tasks_for_email(&EmailId::from("3"));
    store.complete_task(&TaskId::from("8"));

    // Second thoughts about the shipping notice.
    store.restore_email(&EmailId::from("10"));

    println!("\n== Open tasks ==");
    for task in watcher.borrow().tasks().iter().filter(|t| !t.is_completed()) {
        let due = format::days_until(task.due_at, now);
        println!("[{:>6}] {} ({})", task.priority.as_str(), task.title, due.label);
    }

    println!("\n== Document vault ==");
    for document in &documents {
        println!(
            "{:<40} {:>9}  {}",
            document.file_name,
            document.size_display(),
            document.category.display_name()
        );
    }

    store.clear_notifications();
    println!(
        "\nTrash: {} | Unread notifications: {}",
        store.state().trashed_emails().len(),
        store.state().unread_notification_count()
    );

    Ok(())
}
