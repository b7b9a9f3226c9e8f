//! Per-command handler implementations
//!
//! - **Version**: 1.3.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.3.0: Add QandaHandler and ProfanityHandler
//! - 1.2.0: Add PinningHandler and EmailHandler
//! - 1.1.0: Add GroupsHandler and VotingHandler
//! - 1.0.0: DeadlineHandler and UtilityHandler

pub mod deadline;
pub mod email;
pub mod groups;
pub mod pinning;
pub mod profanity;
pub mod qanda;
pub mod utility;
pub mod voting;

use std::sync::Arc;

use super::handler::TextCommandHandler;

/// Create all registered command handlers
///
/// Returns a vector of handlers ready to be registered with CommandRegistry.
/// The utility handler comes last so its help text covers the others.
pub fn create_all_handlers() -> Vec<Arc<dyn TextCommandHandler>> {
    let mut handlers: Vec<Arc<dyn TextCommandHandler>> = vec![
        Arc::new(deadline::DeadlineHandler),
        Arc::new(groups::GroupsHandler),
        Arc::new(voting::VotingHandler),
        Arc::new(pinning::PinningHandler),
        Arc::new(email::EmailHandler),
        Arc::new(qanda::QandaHandler),
        Arc::new(profanity::ProfanityHandler),
    ];
    let utility = utility::UtilityHandler::new(&handlers);
    handlers.push(Arc::new(utility));
    handlers
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDateTime;
    use std::sync::Arc;
    use tempfile::TempDir;

    use crate::commands::context::CommandContext;
    use crate::commands::invocation::{CommandInvocation, IncomingMessage};
    use crate::core::Config;

    /// A context whose stores live in a fresh temporary directory
    pub fn context() -> (TempDir, Arc<CommandContext>) {
        let dir = tempfile::tempdir().unwrap();
        let ctx = CommandContext::from_config(&Config::with_data_dir(dir.path()));
        (dir, Arc::new(ctx))
    }

    /// Like [`context`], with "now" pinned by `clock`
    pub fn context_at(clock: fn() -> NaiveDateTime) -> (TempDir, Arc<CommandContext>) {
        let dir = tempfile::tempdir().unwrap();
        let ctx = CommandContext::from_config(&Config::with_data_dir(dir.path())).with_clock(clock);
        (dir, Arc::new(ctx))
    }

    /// Parse `line` (without prefix) as sent by the default test user
    pub fn invoke(line: &str) -> CommandInvocation {
        parse("42", "TestUser0", "general", line)
    }

    /// Parse `line` as sent by `author`, used as both id and display name
    pub fn invoke_as(author: &str, line: &str) -> CommandInvocation {
        parse(author, author, "general", line)
    }

    /// Parse `line` as sent by the default test user in `channel`
    pub fn invoke_in(channel: &str, line: &str) -> CommandInvocation {
        parse("42", "TestUser0", channel, line)
    }

    fn parse(author_id: &str, author_name: &str, channel: &str, line: &str) -> CommandInvocation {
        let message = IncomingMessage {
            author_id: author_id.to_string(),
            author_name: author_name.to_string(),
            author_is_bot: false,
            channel_id: "7".to_string(),
            channel_name: Some(channel.to_string()),
            content: format!("${line}"),
        };
        CommandInvocation::parse("$", &message).unwrap()
    }
}
