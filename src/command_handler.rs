use crate::commands::context::CommandContext;
use crate::commands::handlers::create_all_handlers;
use crate::commands::invocation::{CommandInvocation, IncomingMessage, Reply};
use crate::commands::registry::CommandRegistry;
use crate::core::Config;
use anyhow::Result;
use log::{debug, info, warn};
use std::sync::Arc;

/// Routes prefixed chat messages to the registered command handlers
#[derive(Clone)]
pub struct CommandHandler {
    registry: CommandRegistry,
    ctx: Arc<CommandContext>,
}

impl CommandHandler {
    pub fn new(ctx: CommandContext) -> Self {
        let mut registry = CommandRegistry::new();
        for handler in create_all_handlers() {
            registry.register(handler);
        }
        info!("📋 Registered {} commands", registry.len());

        CommandHandler {
            registry,
            ctx: Arc::new(ctx),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(CommandContext::from_config(config))
    }

    /// Handle one chat message
    ///
    /// Returns `Ok(None)` for messages the bot stays silent on: anything
    /// from a bot, and clean text without the command prefix. Plain text
    /// with flagged words gets a masked copy that replaces the original.
    pub async fn handle_message(&self, msg: &IncomingMessage) -> Result<Option<Reply>> {
        if msg.author_is_bot {
            return Ok(None);
        }

        let Some(invocation) = CommandInvocation::parse(&self.ctx.command_prefix, msg) else {
            return Ok(self.mask_profanity(msg).await);
        };
        let request_id = invocation.request_id;

        info!(
            "[{}] 📥 Command received | User: {} | Channel: {} | Content: '{}'",
            request_id,
            msg.author_id,
            msg.channel_id,
            msg.content.chars().take(100).collect::<String>()
        );

        let Some(handler) = self.registry.get(&invocation.keyword) else {
            warn!("[{request_id}] ❓ Unknown command: {}", invocation.keyword);
            return Ok(Some(Reply::text(format!(
                "Unknown command. Use `{}` to see available commands.",
                self.ctx.command("help")
            ))));
        };

        debug!("[{request_id}] 🎯 Dispatching '{}'", invocation.keyword);
        let reply = handler.handle(Arc::clone(&self.ctx), &invocation).await?;
        info!(
            "[{request_id}] ✅ '{}' answered with {} message(s)",
            invocation.keyword,
            reply.messages().len()
        );
        Ok(Some(reply))
    }

    async fn mask_profanity(&self, msg: &IncomingMessage) -> Option<Reply> {
        let censored = self.ctx.profanity.read(|filter| filter.censor(&msg.content)).await?;
        info!("🚫 Masked message from {} in channel {}", msg.author_id, msg.channel_id);
        Some(Reply::replacing(format!("{} says: {censored}", msg.author_name)))
    }
}
