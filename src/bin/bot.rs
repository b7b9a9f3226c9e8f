use anyhow::Result;
use dotenvy::dotenv;
use log::{debug, error, info, warn};
use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::Arc;

use classmate::commands::{CommandHandler, IncomingMessage};
use classmate::core::{chunk_for_message, Config};

struct Handler {
    command_handler: Arc<CommandHandler>,
}

impl Handler {
    fn new(command_handler: CommandHandler) -> Self {
        Handler {
            command_handler: Arc::new(command_handler),
        }
    }

    /// Strip a gateway message down to what the command layer needs
    async fn to_incoming(ctx: &Context, msg: &Message) -> IncomingMessage {
        let author_name = msg
            .author_nick(ctx)
            .await
            .unwrap_or_else(|| msg.author.name.clone());

        IncomingMessage {
            author_id: msg.author.id.to_string(),
            author_name,
            author_is_bot: msg.author.bot,
            channel_id: msg.channel_id.to_string(),
            channel_name: msg.channel_id.name(&ctx.cache).await,
            content: msg.content.clone(),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        let incoming = Self::to_incoming(&ctx, &msg).await;
        match self.command_handler.handle_message(&incoming).await {
            Ok(Some(reply)) => {
                if reply.deletes_original() {
                    if let Err(why) = msg.delete(&ctx).await {
                        warn!("Could not delete message {}: {why}", msg.id);
                    }
                }
                for text in reply.into_messages() {
                    for chunk in chunk_for_message(&text) {
                        if let Err(why) = msg.channel_id.say(&ctx.http, chunk).await {
                            error!("Failed to send reply: {why}");
                        }
                    }
                }
            }
            Ok(None) => debug!("Ignored message {}", msg.id),
            Err(e) => {
                error!("Error handling message: {e:#}");
                if let Err(why) = msg
                    .channel_id
                    .say(
                        &ctx.http,
                        "Sorry, I encountered an error processing your message.",
                    )
                    .await
                {
                    error!("Failed to send error message: {why}");
                }
            }
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);

        if let Some(shard) = ready.shard {
            info!("⚡ Shard: {}/{}", shard[0] + 1, shard[1]);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting ClassMate bot...");
    info!("📁 Data directory: {}", config.data_dir.display());
    info!("🔤 Command prefix: {}", config.command_prefix);

    let handler = Handler::new(CommandHandler::from_config(&config));

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    info!("Establishing WebSocket connection to Discord gateway...");
    info!("Gateway intents: {intents:?}");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}
