//! # Features Layer
//!
//! Domain state for each command family. Features never produce chat
//! replies; the command handlers own all user-facing text.

pub mod deadlines;
pub mod email;
pub mod groups;
pub mod pinning;
pub mod profanity;
pub mod qanda;

pub use deadlines::{parse_due_date, DateParseError, Reminder, ReminderQueryEngine, ReminderStore};
pub use email::EmailDirectory;
pub use groups::{GroupLimits, GroupRoster, ProjectBoard};
pub use pinning::PinBoard;
pub use profanity::WordFilter;
pub use qanda::{Answer, Question, QuestionBoard};
