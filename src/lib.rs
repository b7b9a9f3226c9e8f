// Core layer - shared types, configuration and persistence
pub mod core;

// Features layer - deadline, group, pinning and email domains
pub mod features;

// Application layer
pub mod command_handler;
pub mod commands;

pub use core::Config;

pub use commands::{CommandHandler, IncomingMessage, Reply};

pub use features::{
    // Deadlines
    parse_due_date, DateParseError, Reminder, ReminderQueryEngine, ReminderStore,
    // Groups
    GroupLimits, GroupRoster, ProjectBoard,
    // Pinning
    PinBoard,
    // Email
    EmailDirectory,
    // Q&A
    Answer, Question, QuestionBoard,
    // Profanity
    WordFilter,
};
