//! Utility command handlers
//!
//! Handles: hello, ping, help, uptime
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Help text generated from the registered handlers
//! - 1.0.0: Initial hello/ping

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::TextCommandHandler;
use crate::commands::invocation::{CommandInvocation, Reply};

const OWN_HELP: &[&str] = &[
    "hello - say hello",
    "ping - check the bot is alive",
    "help - show this message",
    "uptime - how long the bot has been running",
];

/// Handler for utility commands: hello, ping, help, uptime
pub struct UtilityHandler {
    /// Help lines of every other handler, in registration order
    help_lines: Vec<&'static str>,
}

impl UtilityHandler {
    /// Build the handler, collecting help lines from `handlers`
    pub fn new(handlers: &[Arc<dyn TextCommandHandler>]) -> Self {
        let help_lines = handlers
            .iter()
            .flat_map(|h| h.help().iter().copied())
            .collect();
        Self { help_lines }
    }

    fn render_help(&self, ctx: &CommandContext) -> String {
        let mut text = String::from("**Available Commands:**\n");
        for line in self.help_lines.iter().chain(OWN_HELP) {
            text.push_str(&format!("`{}{line}`\n", ctx.command_prefix));
        }
        text
    }
}

#[async_trait]
impl TextCommandHandler for UtilityHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["hello", "ping", "help", "uptime"]
    }

    fn help(&self) -> &'static [&'static str] {
        OWN_HELP
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        invocation: &CommandInvocation,
    ) -> Result<Reply> {
        match invocation.keyword.as_str() {
            "hello" => Ok(Reply::text("Hello World!")),
            "ping" => {
                info!("[{}] Ping from {}", invocation.request_id, invocation.author_id);
                Ok(Reply::text("Pong!"))
            }
            "help" => Ok(Reply::text(self.render_help(&ctx))),
            "uptime" => {
                let secs = ctx.start_time.elapsed().as_secs();
                Ok(Reply::text(format!(
                    "Uptime: {}h {}m {}s",
                    secs / 3600,
                    (secs % 3600) / 60,
                    secs % 60
                )))
            }
            _ => Ok(Reply::default()),
        }
    }
}
