//! Shared context for command handlers
//!
//! - **Version**: 1.2.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.2.0: Question board, profanity filter and the Q&A channel name
//! - 1.1.0: Injectable clock for due window queries
//! - 1.0.0: Initial implementation with the five data files

use chrono::{Duration, NaiveDateTime};
use log::debug;

use crate::core::storage::DataFile;
use crate::core::Config;
use crate::features::{
    EmailDirectory, GroupLimits, GroupRoster, PinBoard, ProjectBoard, QuestionBoard,
    ReminderStore, WordFilter,
};

/// Naive local wall-clock time, matching how due dates are entered
pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Shared context for all command handlers
///
/// Every store is a [`DataFile`] bound to an absolute path from the
/// configuration, so handlers never depend on the working directory.
/// Commands that hold two stores at once lock `groups` before `projects`.
pub struct CommandContext {
    pub reminders: DataFile<ReminderStore>,
    pub groups: DataFile<GroupRoster>,
    pub projects: DataFile<ProjectBoard>,
    pub pins: DataFile<PinBoard>,
    pub emails: DataFile<EmailDirectory>,
    pub questions: DataFile<QuestionBoard>,
    pub profanity: DataFile<WordFilter>,
    /// Only channel where questions may be asked and answered
    pub qna_channel: String,
    pub limits: GroupLimits,
    pub due_window: Duration,
    pub command_prefix: String,
    pub start_time: std::time::Instant,
    clock: fn() -> NaiveDateTime,
}

impl CommandContext {
    pub fn from_config(config: &Config) -> Self {
        debug!("Binding stores under {}", config.data_dir.display());
        Self {
            reminders: DataFile::new(config.reminders_path()),
            groups: DataFile::new(config.groups_path()),
            projects: DataFile::new(config.projects_path()),
            pins: DataFile::new(config.pins_path()),
            emails: DataFile::new(config.emails_path()),
            questions: DataFile::new(config.questions_path()),
            profanity: DataFile::new(config.profanity_path()),
            qna_channel: config.qna_channel.clone(),
            limits: GroupLimits::from_config(config),
            due_window: config.due_window(),
            command_prefix: config.command_prefix.clone(),
            start_time: std::time::Instant::now(),
            clock: local_now,
        }
    }

    /// Replace the clock used for "now" (tests pin it to a fixed instant)
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }

    /// Render a command with the configured prefix, e.g. `$addhw`
    pub fn command(&self, keyword: &str) -> String {
        format!("{}{keyword}", self.command_prefix)
    }
}
