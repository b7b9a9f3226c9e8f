//! Text command handler trait
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use super::context::CommandContext;
use super::invocation::{CommandInvocation, Reply};

/// Trait for prefixed text command handlers
///
/// Each handler processes one or more keywords. Handlers validate their own
/// arguments and turn domain outcomes, including "not found" and parse
/// failures, into reply text. An `Err` is reserved for failures the user
/// cannot fix, such as a store that could not be written.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl TextCommandHandler for PingHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     fn help(&self) -> &'static [&'static str] {
///         &["ping - check the bot is alive"]
///     }
///
///     async fn handle(
///         &self,
///         _ctx: Arc<CommandContext>,
///         _invocation: &CommandInvocation,
///     ) -> Result<Reply> {
///         Ok(Reply::text("Pong!"))
///     }
/// }
/// ```
#[async_trait]
pub trait TextCommandHandler: Send + Sync {
    /// Lower-case keyword(s) this handler processes
    fn command_names(&self) -> &'static [&'static str];

    /// One line per command for `help`, without the prefix
    fn help(&self) -> &'static [&'static str];

    /// Handle one invocation whose keyword is in `command_names()`
    async fn handle(&self, ctx: Arc<CommandContext>, invocation: &CommandInvocation)
        -> Result<Reply>;
}
