//! Persisted (course, homework) → due date mapping

use chrono::NaiveDateTime;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::storage::{self, StorageError};

/// One pending assignment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reminder {
    pub course: String,
    pub name: String,
    pub due_at: NaiveDateTime,
}

impl Reminder {
    /// Build a reminder with upper-cased course and name
    pub fn new(course: &str, name: &str, due_at: NaiveDateTime) -> Self {
        Self {
            course: normalize(course),
            name: normalize(name),
            due_at,
        }
    }

    fn matches(&self, course: &str, name: &str) -> bool {
        self.course == course && self.name == name
    }
}

pub(crate) fn normalize(key: &str) -> String {
    key.trim().to_uppercase()
}

/// All reminders, unique on (course, name), kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Reminder>", into = "Vec<Reminder>")]
pub struct ReminderStore {
    reminders: Vec<Reminder>,
}

// Re-adding on load collapses duplicate keys from hand-edited files.
impl From<Vec<Reminder>> for ReminderStore {
    fn from(reminders: Vec<Reminder>) -> Self {
        let mut store = Self::default();
        for r in reminders {
            store.add(&r.course, &r.name, r.due_at);
        }
        store
    }
}

impl From<ReminderStore> for Vec<Reminder> {
    fn from(store: ReminderStore) -> Self {
        store.reminders
    }
}

impl ReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the store at `path`. Missing or corrupt files give an empty store.
    pub fn load(path: &Path) -> Self {
        storage::load_or_else(path, Self::default)
    }

    /// Replace the file at `path` with the full store
    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        storage::save_atomic(path, self)
    }

    /// Insert, or overwrite the due date of an existing (course, name)
    pub fn add(&mut self, course: &str, name: &str, due_at: NaiveDateTime) -> &Reminder {
        let reminder = Reminder::new(course, name, due_at);

        let index = match self
            .reminders
            .iter()
            .position(|r| r.matches(&reminder.course, &reminder.name))
        {
            Some(index) => {
                debug!(
                    "Overwriting due date for {} {}",
                    reminder.course, reminder.name
                );
                self.reminders[index] = reminder;
                index
            }
            None => {
                self.reminders.push(reminder);
                self.reminders.len() - 1
            }
        };

        &self.reminders[index]
    }

    /// Remove the reminder for (course, name), returning it when present
    pub fn delete(&mut self, course: &str, name: &str) -> Option<Reminder> {
        let (course, name) = (normalize(course), normalize(name));
        let index = self.reminders.iter().position(|r| r.matches(&course, &name))?;
        Some(self.reminders.remove(index))
    }

    pub fn get(&self, course: &str, name: &str) -> Option<&Reminder> {
        let (course, name) = (normalize(course), normalize(name));
        self.reminders.iter().find(|r| r.matches(&course, &name))
    }

    pub fn clear(&mut self) {
        self.reminders.clear();
    }

    /// Every reminder, recomputed on each call. Callers sort as needed.
    pub fn list_all(&self) -> impl Iterator<Item = &Reminder> + '_ {
        self.reminders.iter()
    }

    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::deadlines::parser::parse_due_date;
    use std::collections::HashSet;

    fn due(text: &str) -> NaiveDateTime {
        parse_due_date(text).unwrap()
    }

    #[test]
    fn test_add_then_list_contains_one_entry() {
        let mut store = ReminderStore::new();
        let added = store.add("csc505", "dance", due("SEP 21 2050 10:00")).clone();

        assert_eq!(added.course, "CSC505");
        assert_eq!(added.name, "DANCE");

        let all: Vec<_> = store.list_all().collect();
        assert_eq!(all, vec![&added]);
    }

    #[test]
    fn test_add_same_key_overwrites() {
        let mut store = ReminderStore::new();
        store.add("CSC505", "DANCE", due("SEP 21 2050 10:00"));
        store.add("csc505", "Dance", due("OCT 01 2050 09:00"));

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get("CSC505", "DANCE").unwrap().due_at,
            due("OCT 01 2050 09:00")
        );
    }

    #[test]
    fn test_same_name_in_different_courses_is_distinct() {
        let mut store = ReminderStore::new();
        store.add("CSC505", "HW1", due("SEP 21 2050 10:00"));
        store.add("CSC510", "HW1", due("SEP 22 2050 10:00"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_missing_leaves_store_unchanged() {
        let mut store = ReminderStore::new();
        store.add("CSC505", "DANCE", due("SEP 21 2050 10:00"));
        let before = store.clone();

        assert!(store.delete("CSC505", "SING").is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn test_delete_returns_removed_record() {
        let mut store = ReminderStore::new();
        store.add("CSC510", "HW1", due("DEC 21 2050 19:59"));

        let removed = store.delete("csc510", "hw1").unwrap();
        assert_eq!(removed.name, "HW1");
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store = ReminderStore::new();
        store.add("A", "B", due("SEP 21 2050 10:00"));
        store.add("C", "D", due("SEP 22 2050 10:00"));
        store.clear();
        assert_eq!(store.list_all().count(), 0);
    }

    #[test]
    fn test_save_then_load_round_trips_any_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reminders.json");

        let mut store = ReminderStore::new();
        store.add("CSC510", "HW1", due("DEC 21 2050 19:59"));
        store.add("CSC505", "DANCE", due("SEP 21 2050 10:00"));
        store.add("CSC600", "HW0", due("JAN 02 2051 08:15"));
        store.save(&path).unwrap();

        let loaded = ReminderStore::load(&path);
        let expected: HashSet<_> = store.list_all().cloned().collect();
        let actual: HashSet<_> = loaded.list_all().cloned().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_load_collapses_duplicate_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reminders.json");
        std::fs::write(
            &path,
            r#"[
                {"course": "csc505", "name": "dance", "due_at": "2050-09-21T10:00:00"},
                {"course": "CSC505", "name": "DANCE", "due_at": "2050-09-22T10:00:00"}
            ]"#,
        )
        .unwrap();

        let store = ReminderStore::load(&path);
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get("CSC505", "DANCE").unwrap().due_at,
            due("SEP 22 2050 10:00")
        );
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ReminderStore::load(&dir.path().join("nope.json")).is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reminders.json");
        std::fs::write(&path, "[{\"course\": 1}").unwrap();
        assert!(ReminderStore::load(&path).is_empty());
    }
}
