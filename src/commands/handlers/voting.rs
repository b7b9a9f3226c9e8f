//! Project voting command handlers
//!
//! Handles: vote, projects
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.1.0
//!
//! ## Changelog
//! - 1.1.0: Group membership stays locked while the vote is recorded
//! - 1.0.0: Initial vote/projects

use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

use super::groups::numbered_arg;
use crate::commands::context::CommandContext;
use crate::commands::handler::TextCommandHandler;
use crate::commands::invocation::{CommandInvocation, Reply};
use crate::features::groups::VoteOutcome;

pub const NOT_IN_GROUP: &str =
    "Could not find the Group you are in, please contact a TA or join with your group number";

/// Handler for project sign-up votes
pub struct VotingHandler;

#[async_trait]
impl TextCommandHandler for VotingHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["vote", "projects"]
    }

    fn help(&self) -> &'static [&'static str] {
        &[
            "vote Project <Num> - vote for a project on behalf of your group",
            "projects - list projects and the groups working on them",
        ]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        invocation: &CommandInvocation,
    ) -> Result<Reply> {
        match invocation.keyword.as_str() {
            "vote" => self.handle_vote(&ctx, invocation).await,
            "projects" => self.handle_projects(&ctx).await,
            _ => Ok(Reply::default()),
        }
    }
}

impl VotingHandler {
    async fn handle_vote(&self, ctx: &CommandContext, invocation: &CommandInvocation) -> Result<Reply> {
        // Held until the vote is saved, so the voter cannot leave mid-vote
        let roster = ctx.groups.lock().await;
        let group = roster.load().await.group_of(&invocation.author_name);
        let Some(group) = group else {
            warn!(
                "[{}] Vote from {} who is in no group",
                invocation.request_id, invocation.author_name
            );
            return Ok(Reply::text(NOT_IN_GROUP));
        };

        let invalid = || {
            let command = ctx.command("vote");
            Reply::many([
                "Not a valid Project".to_string(),
                format!(
                    "To use the vote command, do: {command} 'Project' <Num> \n ( For example: {command} project 0 )"
                ),
            ])
        };

        let Some(project) = numbered_arg(invocation, "project") else {
            return Ok(invalid());
        };

        let limits = ctx.limits;
        let outcome = ctx
            .projects
            .update(|board| board.vote(&limits, project, group))
            .await?;
        drop(roster);

        Ok(match outcome {
            VoteOutcome::Voted => {
                info!("[{}] Group {group} voted for project {project}", invocation.request_id);
                Reply::text(format!("Group {group} has voted for Project {project}!"))
            }
            VoteOutcome::AlreadyVoted(existing) => {
                Reply::text(format!("You already voted for Project {existing}"))
            }
            VoteOutcome::Full => Reply::text(format!(
                "A Project cannot have more than {} Groups working on it!",
                limits.capacity
            )),
            VoteOutcome::InvalidProject => invalid(),
        })
    }

    async fn handle_projects(&self, ctx: &CommandContext) -> Result<Reply> {
        let lines: Vec<String> = ctx
            .projects
            .read(|board| {
                board
                    .voted()
                    .map(|(project, groups)| {
                        let groups: Vec<String> =
                            groups.iter().map(|g| format!("Group {g}")).collect();
                        format!("Project {project}: {}", groups.join(", "))
                    })
                    .collect()
            })
            .await;

        if lines.is_empty() {
            Ok(Reply::text("No groups have voted yet"))
        } else {
            Ok(Reply::text(lines.join("\n")))
        }
    }
}
