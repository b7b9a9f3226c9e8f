//! # Feature: Deadlines
//!
//! Homework due dates keyed by course. Parses `MON DD YYYY HH:MM` input,
//! persists reminders as one JSON document, and answers "due for course"
//! and "due within window" queries.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Configurable due window (default 7 days)
//! - 1.0.0: Initial release with add, delete, change, list, and clear

pub mod parser;
pub mod query;
pub mod store;

pub use parser::{format_due_date, parse_due_date, parse_due_tokens, DateParseError, DUE_DATE_FORMAT};
pub use query::{format_summary, ReminderQueryEngine};
pub use store::{Reminder, ReminderStore};
