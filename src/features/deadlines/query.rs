//! Read-only views over a [`ReminderStore`]

use chrono::{Duration, NaiveDateTime};

use super::parser::format_due_date;
use super::store::{normalize, Reminder, ReminderStore};

/// Derived views over a borrowed store
pub struct ReminderQueryEngine<'a> {
    store: &'a ReminderStore,
}

impl<'a> ReminderQueryEngine<'a> {
    pub fn new(store: &'a ReminderStore) -> Self {
        Self { store }
    }

    /// All reminders, earliest due first
    pub fn all_sorted(&self) -> Vec<&'a Reminder> {
        sorted(self.store.list_all().collect())
    }

    /// Reminders for `course` (case-insensitive), earliest due first
    pub fn due_for_course(&self, course: &str) -> Vec<&'a Reminder> {
        let course = normalize(course);
        sorted(
            self.store
                .list_all()
                .filter(|r| r.course == course)
                .collect(),
        )
    }

    /// Reminders due in `[now, now + window)`, earliest due first
    pub fn due_within(&self, now: NaiveDateTime, window: Duration) -> Vec<&'a Reminder> {
        let end = now + window;
        sorted(
            self.store
                .list_all()
                .filter(|r| r.due_at >= now && r.due_at < end)
                .collect(),
        )
    }
}

fn sorted(mut reminders: Vec<&Reminder>) -> Vec<&Reminder> {
    // Stable, so equal due dates keep insertion order
    reminders.sort_by_key(|r| r.due_at);
    reminders
}

/// One line per reminder, in the order given
pub fn format_summary<'r>(reminders: impl IntoIterator<Item = &'r Reminder>) -> String {
    reminders
        .into_iter()
        .map(|r| {
            format!(
                "{} homework named: {} which is due on: {}",
                r.course,
                r.name,
                format_due_date(&r.due_at)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
