//! Notification email command handlers
//!
//! Handles: add_email, update_email, view_email, delete_email
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.2.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::TextCommandHandler;
use crate::commands::invocation::{CommandInvocation, Reply};
use crate::features::email::{is_valid_email, AddOutcome};

pub const INVALID_ADDRESS: &str = "Enter a valid Email Address..!";
pub const NOT_CONFIGURED: &str = "There is no email address configured..!";

/// Handler for the per-user notification address
pub struct EmailHandler;

#[async_trait]
impl TextCommandHandler for EmailHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["add_email", "update_email", "view_email", "delete_email"]
    }

    fn help(&self) -> &'static [&'static str] {
        &[
            "add_email ADDRESS - configure your notification address",
            "update_email ADDRESS - change your notification address",
            "view_email - show your notification address",
            "delete_email - remove your notification address",
        ]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        invocation: &CommandInvocation,
    ) -> Result<Reply> {
        let author = invocation.author_id.as_str();

        match invocation.keyword.as_str() {
            "add_email" | "update_email" => {
                let Some(address) = invocation.arg(0) else {
                    let command = ctx.command(&invocation.keyword);
                    return Ok(Reply::text(format!(
                        "To use the {} command, do: {command} email_address \n ( For example: {command} noreply@example.com )",
                        invocation.keyword
                    )));
                };
                if !is_valid_email(address) {
                    return Ok(Reply::text(INVALID_ADDRESS));
                }

                if invocation.keyword == "add_email" {
                    let outcome = ctx.emails.update(|dir| dir.add(author, address)).await?;
                    Ok(match outcome {
                        AddOutcome::Added => {
                            info!("[{}] Email configured for {author}", invocation.request_id);
                            Reply::text("Email address has been configured successfully..!")
                        }
                        AddOutcome::AlreadyConfigured => Reply::text(
                            "Email address is already configured, use update_email to change it..!",
                        ),
                    })
                } else {
                    ctx.emails.update(|dir| dir.update(author, address)).await?;
                    Ok(Reply::text("Email address has been updated successfully..!"))
                }
            }
            "view_email" => {
                let address = ctx
                    .emails
                    .read(|dir| dir.get(author).map(str::to_string))
                    .await;
                Ok(match address {
                    Some(address) => {
                        Reply::text(format!("currently configured email address:{address}"))
                    }
                    None => Reply::text(NOT_CONFIGURED),
                })
            }
            "delete_email" => {
                let removed = ctx.emails.update(|dir| dir.delete(author)).await?;
                Ok(match removed {
                    Some(_) => Reply::text("Email address has been deleted successfully..!"),
                    None => Reply::text(NOT_CONFIGURED),
                })
            }
            _ => Ok(Reply::default()),
        }
    }
}
