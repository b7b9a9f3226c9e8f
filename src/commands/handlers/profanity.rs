//! Profanity filter command handler
//!
//! Handles: custom
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.3.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::TextCommandHandler;
use crate::commands::invocation::{CommandInvocation, Reply};

/// Handler for extending the profanity filter
pub struct ProfanityHandler;

#[async_trait]
impl TextCommandHandler for ProfanityHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["custom"]
    }

    fn help(&self) -> &'static [&'static str] {
        &["custom WORD - add a word to the profanity filter"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        invocation: &CommandInvocation,
    ) -> Result<Reply> {
        let Some(word) = invocation.arg(0) else {
            return Ok(Reply::text(format!(
                "To use the custom command, do: {} WORD \n ( For example: {} darn )",
                ctx.command("custom"),
                ctx.command("custom")
            )));
        };

        let added = ctx.profanity.update(|filter| filter.add_custom(word)).await?;
        if !added {
            return Ok(Reply::text("Already Added!!"));
        }
        info!("[{}] Custom filter word added", invocation.request_id);
        Ok(Reply::text("Word added to custom profanity filter"))
    }
}
