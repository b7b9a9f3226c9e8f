//! Group membership command handlers
//!
//! Handles: join, remove, group, groups, find-group
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: find-group looks up another student's group
//! - 1.0.0: Membership and listing commands

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::TextCommandHandler;
use crate::commands::invocation::{CommandInvocation, Reply};
use crate::features::groups::{JoinOutcome, LeaveOutcome};

/// Handler for group membership commands
pub struct GroupsHandler;

#[async_trait]
impl TextCommandHandler for GroupsHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["join", "remove", "group", "groups", "find-group"]
    }

    fn help(&self) -> &'static [&'static str] {
        &[
            "join Group <Num> - join a group",
            "remove Group <Num> - leave your group",
            "group - show which group you are in",
            "groups - list every group and its members",
            "find-group <StudentName> - show which group a student is in",
        ]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        invocation: &CommandInvocation,
    ) -> Result<Reply> {
        match invocation.keyword.as_str() {
            "join" => self.handle_join(&ctx, invocation).await,
            "remove" => self.handle_remove(&ctx, invocation).await,
            "group" => self.handle_my_group(&ctx, invocation).await,
            "groups" => self.handle_list(&ctx).await,
            "find-group" => self.handle_find(&ctx, invocation).await,
            _ => Ok(Reply::default()),
        }
    }
}

/// Parse `<label> <Num>` arguments such as `Group 3`, case-insensitively
pub(crate) fn numbered_arg(invocation: &CommandInvocation, label: &str) -> Option<u32> {
    match invocation.args.as_slice() {
        [kind, number] if kind.eq_ignore_ascii_case(label) => number.parse().ok(),
        _ => None,
    }
}

impl GroupsHandler {
    async fn handle_join(&self, ctx: &CommandContext, invocation: &CommandInvocation) -> Result<Reply> {
        let usage = format!(
            "To use the join command, do: {} 'Group' <Num> \n ( For example: {} Group 0 )",
            ctx.command("join"),
            ctx.command("join")
        );

        let Some(group) = numbered_arg(invocation, "group") else {
            return Ok(Reply::many(["Not a valid group".to_string(), usage]));
        };

        let limits = ctx.limits;
        let member = invocation.author_name.as_str();
        let outcome = ctx
            .groups
            .update(|roster| roster.join(&limits, group, member))
            .await?;

        Ok(match outcome {
            JoinOutcome::Joined => {
                info!("[{}] {member} joined group {group}", invocation.request_id);
                Reply::text(format!("You are now in Group {group}!"))
            }
            JoinOutcome::AlreadyMember(current) => {
                Reply::text(format!("You are already in Group {current}"))
            }
            JoinOutcome::Full => Reply::text(format!(
                "Group {group} is full! A group cannot have more than {} members",
                limits.capacity
            )),
            JoinOutcome::InvalidGroup => Reply::many(["Not a valid group".to_string(), usage]),
        })
    }

    async fn handle_remove(
        &self,
        ctx: &CommandContext,
        invocation: &CommandInvocation,
    ) -> Result<Reply> {
        let usage = format!(
            "To use the remove command, do: {} 'Group' <Num> \n ( For example: {} Group 0 )",
            ctx.command("remove"),
            ctx.command("remove")
        );
        let invalid = || {
            Reply::many([
                format!("Group {} is not a valid group", invocation.rest(1)),
                usage.clone(),
            ])
        };

        let Some(group) = numbered_arg(invocation, "group") else {
            if invocation.args.len() == 2 {
                return Ok(invalid());
            }
            return Ok(Reply::text(usage.clone()));
        };

        let limits = ctx.limits;
        let member = invocation.author_name.as_str();
        let outcome = ctx
            .groups
            .update(|roster| roster.leave(&limits, group, member))
            .await?;

        Ok(match outcome {
            LeaveOutcome::Left => {
                info!("[{}] {member} left group {group}", invocation.request_id);
                Reply::text(format!("You have been removed from Group {group}!"))
            }
            LeaveOutcome::NotMember => Reply::text(format!("You are not in Group {group}")),
            LeaveOutcome::InvalidGroup => invalid(),
        })
    }

    async fn handle_my_group(
        &self,
        ctx: &CommandContext,
        invocation: &CommandInvocation,
    ) -> Result<Reply> {
        let found = ctx
            .groups
            .read(|roster| {
                roster
                    .group_of(&invocation.author_name)
                    .map(|group| (group, roster.members(group).join(", ")))
            })
            .await;

        Ok(match found {
            Some((group, members)) => Reply::text(format!("You are in Group {group}: {members}")),
            None => Reply::text(format!(
                "You are not in a group. Use {} Group <Num> to join one",
                ctx.command("join")
            )),
        })
    }

    async fn handle_find(&self, ctx: &CommandContext, invocation: &CommandInvocation) -> Result<Reply> {
        let usage = format!(
            "To use the find-group command, do: {} <StudentName> \n ( For example: {} Jane Doe )",
            ctx.command("find-group"),
            ctx.command("find-group")
        );
        let name = invocation.rest(0);
        if name.is_empty() {
            return Ok(Reply::text(usage));
        }

        let found = ctx
            .groups
            .read(|roster| roster.find_group(&name).map(|(group, stored)| (group, stored.to_string())))
            .await;

        Ok(match found {
            Some((group, stored)) => Reply::text(format!("{stored} is in Group {group}")),
            None => Reply::many([
                "Please check the name entered and try again".to_string(),
                usage,
            ]),
        })
    }

    async fn handle_list(&self, ctx: &CommandContext) -> Result<Reply> {
        let lines: Vec<String> = ctx
            .groups
            .read(|roster| {
                roster
                    .occupied()
                    .map(|(group, members)| format!("Group {group}: {}", members.join(", ")))
                    .collect()
            })
            .await;

        if lines.is_empty() {
            Ok(Reply::text("No one has joined a group yet"))
        } else {
            Ok(Reply::text(lines.join("\n")))
        }
    }
}
