//! Pinned link command handlers
//!
//! Handles: pin, unpin, updatepin, pinnedmessages
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::TextCommandHandler;
use crate::commands::invocation::{CommandInvocation, Reply};

/// Handler for per-user pinned links
pub struct PinningHandler;

#[async_trait]
impl TextCommandHandler for PinningHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["pin", "unpin", "updatepin", "pinnedmessages"]
    }

    fn help(&self) -> &'static [&'static str] {
        &[
            "pin TAGNAME LINK DESCRIPTION - pin a message link under a tag",
            "unpin TAGNAME DESCRIPTION - remove pins with that tag and description",
            "updatepin TAGNAME LINK DESCRIPTION - point a pin at a new link",
            "pinnedmessages [TAGNAME] - list your pins",
        ]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        invocation: &CommandInvocation,
    ) -> Result<Reply> {
        match invocation.keyword.as_str() {
            "pin" => self.handle_pin(&ctx, invocation).await,
            "unpin" => self.handle_unpin(&ctx, invocation).await,
            "updatepin" => self.handle_update(&ctx, invocation).await,
            "pinnedmessages" => self.handle_list(&ctx, invocation).await,
            _ => Ok(Reply::default()),
        }
    }
}

fn not_found(tag: &str, description: &str) -> Reply {
    Reply::text(format!(
        "No message found with the combination of tagname: {tag}, description {description}"
    ))
}

impl PinningHandler {
    async fn handle_pin(&self, ctx: &CommandContext, invocation: &CommandInvocation) -> Result<Reply> {
        let (Some(tag), Some(link), true) =
            (invocation.arg(0), invocation.arg(1), invocation.args.len() > 2)
        else {
            return Ok(Reply::text(format!(
                "To use the pin command, do: {} TAGNAME LINK DESCRIPTION \n ( For example: {} HW https://discord.com/channels/1/2/3 HW1 discussion )",
                ctx.command("pin"),
                ctx.command("pin")
            )));
        };
        let description = invocation.rest(2);

        ctx.pins
            .update(|board| {
                board.pin(&invocation.author_id, tag, link, &description);
            })
            .await?;
        info!("[{}] Pinned {tag} for {}", invocation.request_id, invocation.author_id);

        Ok(Reply::text(format!(
            "A new message has been pinned with tag: {tag} and link: {link} with a description: {description}"
        )))
    }

    async fn handle_unpin(
        &self,
        ctx: &CommandContext,
        invocation: &CommandInvocation,
    ) -> Result<Reply> {
        let (Some(tag), true) = (invocation.arg(0), invocation.args.len() > 1) else {
            return Ok(Reply::text(format!(
                "To use the unpin command, do: {} TAGNAME DESCRIPTION \n ( For example: {} HW HW1 discussion )",
                ctx.command("unpin"),
                ctx.command("unpin")
            )));
        };
        let description = invocation.rest(1);

        let removed = ctx
            .pins
            .update(|board| board.unpin(&invocation.author_id, tag, &description))
            .await?;

        if removed == 0 {
            return Ok(not_found(tag, &description));
        }
        Ok(Reply::text(format!(
            "{removed} pinned message(s) has been deleted with tag: {tag}"
        )))
    }

    async fn handle_update(
        &self,
        ctx: &CommandContext,
        invocation: &CommandInvocation,
    ) -> Result<Reply> {
        let (Some(tag), Some(link), true) =
            (invocation.arg(0), invocation.arg(1), invocation.args.len() > 2)
        else {
            return Ok(Reply::text(format!(
                "To use the updatepin command, do: {} TAGNAME LINK DESCRIPTION \n ( For example: {} HW https://discord.com/channels/1/2/4 HW1 discussion )",
                ctx.command("updatepin"),
                ctx.command("updatepin")
            )));
        };
        let description = invocation.rest(2);

        let updated = ctx
            .pins
            .update(|board| board.update_link(&invocation.author_id, tag, &description, link))
            .await?;

        if updated == 0 {
            return Ok(not_found(tag, &description));
        }
        Ok(Reply::text(format!(
            "A pinned message has been updated with tag: {tag} and new link: {link}"
        )))
    }

    async fn handle_list(&self, ctx: &CommandContext, invocation: &CommandInvocation) -> Result<Reply> {
        let tag = invocation.arg(0);
        let lines: Vec<String> = ctx
            .pins
            .read(|board| {
                board
                    .list(&invocation.author_id, tag)
                    .into_iter()
                    .map(|p| format!("Tag: {}, Link: {}, Description: {}", p.tag, p.link, p.description))
                    .collect()
            })
            .await;

        if lines.is_empty() {
            Ok(Reply::text("No messages found"))
        } else {
            Ok(Reply::text(lines.join("\n")))
        }
    }
}
