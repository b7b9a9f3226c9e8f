//! Deadline command handlers
//!
//! Handles: addhw, deletereminder, changeduedate, listreminders, coursedue,
//! duethisweek, clearreminders
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: duethisweek honours the configured due window
//! - 1.0.0: Initial deadline commands

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::TextCommandHandler;
use crate::commands::invocation::{CommandInvocation, Reply};
use crate::features::deadlines::{
    format_due_date, format_summary, parse_due_tokens, Reminder, ReminderQueryEngine,
};

pub const PARSE_FAILURE: &str = "Due date could not be parsed";
pub const NO_REMINDERS: &str = "Mission Accomplished..!! You don't have any more reminders..!!";
pub const NOTHING_DUE_THIS_WEEK: &str = "You have no dues this week..!!";
pub const CLEARED: &str = "All reminders have been cleared..!!";

/// Handler for homework deadline commands
pub struct DeadlineHandler;

#[async_trait]
impl TextCommandHandler for DeadlineHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &[
            "addhw",
            "deletereminder",
            "changeduedate",
            "listreminders",
            "coursedue",
            "duethisweek",
            "clearreminders",
        ]
    }

    fn help(&self) -> &'static [&'static str] {
        &[
            "addhw CLASSNAME NAME MMM DD YYYY HH:MM - add a homework due date",
            "deletereminder CLASSNAME NAME - delete a homework reminder",
            "changeduedate CLASSNAME NAME MMM DD YYYY HH:MM - move a due date",
            "listreminders - list every homework reminder",
            "coursedue CLASSNAME - list homework due for one course",
            "duethisweek - list homework due in the next week",
            "clearreminders - delete every reminder",
        ]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        invocation: &CommandInvocation,
    ) -> Result<Reply> {
        match invocation.keyword.as_str() {
            "addhw" => self.handle_add(&ctx, invocation).await,
            "deletereminder" => self.handle_delete(&ctx, invocation).await,
            "changeduedate" => self.handle_change(&ctx, invocation).await,
            "listreminders" => self.handle_list(&ctx).await,
            "coursedue" => self.handle_course_due(&ctx, invocation).await,
            "duethisweek" => self.handle_due_this_week(&ctx).await,
            "clearreminders" => self.handle_clear(&ctx, invocation).await,
            _ => Ok(Reply::default()),
        }
    }
}

impl DeadlineHandler {
    /// Handle addhw - store or overwrite a due date
    async fn handle_add(&self, ctx: &CommandContext, invocation: &CommandInvocation) -> Result<Reply> {
        let (Some(course), Some(name), true) =
            (invocation.arg(0), invocation.arg(1), invocation.args.len() > 2)
        else {
            return Ok(Self::usage(ctx, "addhw"));
        };

        let due_at = match parse_due_tokens(&invocation.args[2..]) {
            Ok(due_at) => due_at,
            Err(e) => {
                debug!("[{}] Rejected due date '{}': {e}", invocation.request_id, invocation.rest(2));
                return Ok(Reply::text(PARSE_FAILURE));
            }
        };

        let reminder = ctx
            .reminders
            .update(|store| store.add(course, name, due_at).clone())
            .await?;

        info!(
            "[{}] Added reminder {} {} due {}",
            invocation.request_id,
            reminder.course,
            reminder.name,
            format_due_date(&reminder.due_at)
        );

        Ok(Reply::text(format!(
            "A date has been added for: {} homework named: {} which is due on: {}",
            reminder.course,
            reminder.name,
            format_due_date(&reminder.due_at)
        )))
    }

    /// Handle deletereminder - remove one reminder
    async fn handle_delete(
        &self,
        ctx: &CommandContext,
        invocation: &CommandInvocation,
    ) -> Result<Reply> {
        let (Some(course), Some(name)) = (invocation.arg(0), invocation.arg(1)) else {
            return Ok(Self::usage(ctx, "deletereminder"));
        };

        let removed = ctx.reminders.update(|store| store.delete(course, name)).await?;

        Ok(match removed {
            Some(reminder) => {
                info!(
                    "[{}] Deleted reminder {} {}",
                    invocation.request_id, reminder.course, reminder.name
                );
                Reply::text(format!(
                    "Following reminder has been deleted: Course: {}, Homework Name: {}, Due Date: {}",
                    reminder.course,
                    reminder.name,
                    format_due_date(&reminder.due_at)
                ))
            }
            None => Self::not_found(course, name),
        })
    }

    /// Handle changeduedate - delete and re-add with a new date
    async fn handle_change(
        &self,
        ctx: &CommandContext,
        invocation: &CommandInvocation,
    ) -> Result<Reply> {
        let (Some(course), Some(name), true) =
            (invocation.arg(0), invocation.arg(1), invocation.args.len() > 2)
        else {
            return Ok(Self::usage(ctx, "changeduedate"));
        };

        let Ok(due_at) = parse_due_tokens(&invocation.args[2..]) else {
            return Ok(Reply::text(PARSE_FAILURE));
        };

        let changed: Option<Reminder> = ctx
            .reminders
            .update(|store| {
                store.delete(course, name)?;
                Some(store.add(course, name, due_at).clone())
            })
            .await?;

        Ok(match changed {
            Some(reminder) => {
                info!(
                    "[{}] Moved {} {} to {}",
                    invocation.request_id,
                    reminder.course,
                    reminder.name,
                    format_due_date(&reminder.due_at)
                );
                Reply::text(format!(
                    "{} {} has been updated with following date: {}",
                    reminder.course,
                    reminder.name,
                    format_due_date(&reminder.due_at)
                ))
            }
            None => Self::not_found(course, name),
        })
    }

    /// Handle listreminders - every reminder, earliest first
    async fn handle_list(&self, ctx: &CommandContext) -> Result<Reply> {
        let summary = ctx
            .reminders
            .read(|store| format_summary(ReminderQueryEngine::new(store).all_sorted()))
            .await;

        if summary.is_empty() {
            Ok(Reply::text(NO_REMINDERS))
        } else {
            Ok(Reply::text(summary))
        }
    }

    /// Handle coursedue - reminders for one course
    async fn handle_course_due(
        &self,
        ctx: &CommandContext,
        invocation: &CommandInvocation,
    ) -> Result<Reply> {
        let Some(course) = invocation.arg(0) else {
            return Ok(Self::usage(ctx, "coursedue"));
        };

        let lines: Vec<String> = ctx
            .reminders
            .read(|store| {
                ReminderQueryEngine::new(store)
                    .due_for_course(course)
                    .into_iter()
                    .map(|r| format!("{} is due at {}", r.name, format_due_date(&r.due_at)))
                    .collect()
            })
            .await;

        if lines.is_empty() {
            Ok(Reply::text(format!(
                "Rejoice..!! You have no pending homeworks for {}..!!",
                course.to_uppercase()
            )))
        } else {
            Ok(Reply::text(lines.join("\n")))
        }
    }

    /// Handle duethisweek - reminders inside the due window
    async fn handle_due_this_week(&self, ctx: &CommandContext) -> Result<Reply> {
        let now = ctx.now();
        let lines: Vec<String> = ctx
            .reminders
            .read(|store| {
                ReminderQueryEngine::new(store)
                    .due_within(now, ctx.due_window)
                    .into_iter()
                    .map(|r| format!("{} {} is due this week", r.course, r.name))
                    .collect()
            })
            .await;

        if lines.is_empty() {
            Ok(Reply::text(NOTHING_DUE_THIS_WEEK))
        } else {
            Ok(Reply::text(lines.join("\n")))
        }
    }

    /// Handle clearreminders - empty the store
    async fn handle_clear(
        &self,
        ctx: &CommandContext,
        invocation: &CommandInvocation,
    ) -> Result<Reply> {
        let cleared = ctx
            .reminders
            .update(|store| {
                let count = store.len();
                store.clear();
                count
            })
            .await?;

        info!("[{}] Cleared {cleared} reminders", invocation.request_id);
        Ok(Reply::text(CLEARED))
    }

    fn not_found(course: &str, name: &str) -> Reply {
        Reply::text(format!(
            "No reminder found for {} homework named: {}",
            course.to_uppercase(),
            name.to_uppercase()
        ))
    }

    fn usage(ctx: &CommandContext, keyword: &str) -> Reply {
        let command = ctx.command(keyword);
        let text = match keyword {
            "addhw" | "changeduedate" => format!(
                "To use the {keyword} command, do: {command} CLASSNAME NAME MMM DD YYYY HH:MM \n \
                 ( For example: {command} CSC510 HW2 SEP 25 2024 17:02 )"
            ),
            "coursedue" => format!(
                "To use the coursedue command, do: {command} CLASSNAME \n \
                 ( For example: {command} CSC510 )"
            ),
            _ => format!(
                "To use the {keyword} command, do: {command} CLASSNAME NAME \n \
                 ( For example: {command} CSC510 HW2 )"
            ),
        };
        Reply::text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::handlers::test_support::{context, context_at, invoke};
    use chrono::{Duration, NaiveDateTime};

    fn fixed_now() -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    async fn run(ctx: &Arc<CommandContext>, line: &str) -> Reply {
        DeadlineHandler
            .handle(Arc::clone(ctx), &invoke(line))
            .await
            .unwrap()
    }

    #[test]
    fn test_deadline_handler_commands() {
        let names = DeadlineHandler.command_names();
        assert!(names.contains(&"addhw"));
        assert!(names.contains(&"duethisweek"));
        assert_eq!(names.len(), 7);
        assert_eq!(DeadlineHandler.help().len(), names.len());
    }

    #[tokio::test]
    async fn test_add_confirms_canonical_date() {
        let (_dir, ctx) = context();
        let reply = run(&ctx, "addhw CSC505 DANCE SEP 21 2050 10:00").await;
        assert_eq!(
            reply.messages(),
            &["A date has been added for: CSC505 homework named: DANCE which is due on: 2050-09-21 10:00:00"]
        );
    }

    #[tokio::test]
    async fn test_add_with_bad_date_is_parse_failure() {
        let (_dir, ctx) = context();
        let reply = run(&ctx, "addhw CSC505 DANCE 4").await;
        assert_eq!(reply.messages(), &[PARSE_FAILURE]);
        assert_eq!(run(&ctx, "listreminders").await.messages(), &[NO_REMINDERS]);
    }

    #[tokio::test]
    async fn test_add_without_arguments_shows_usage() {
        let (_dir, ctx) = context();
        assert!(run(&ctx, "addhw").await.contains("To use the addhw command"));
    }

    #[tokio::test]
    async fn test_delete_reports_record_or_not_found() {
        let (_dir, ctx) = context();
        run(&ctx, "addhw CSC510 HW1 DEC 21 2050 19:59").await;

        let reply = run(&ctx, "deletereminder CSC510 HW1").await;
        assert_eq!(
            reply.messages(),
            &["Following reminder has been deleted: Course: CSC510, Homework Name: HW1, Due Date: 2050-12-21 19:59:00"]
        );

        let again = run(&ctx, "deletereminder csc510 hw1").await;
        assert_eq!(again.messages(), &["No reminder found for CSC510 homework named: HW1"]);
    }

    #[tokio::test]
    async fn test_coursedue_empty_and_listed() {
        let (_dir, ctx) = context();
        assert!(run(&ctx, "coursedue CSC505")
            .await
            .contains("Rejoice..!! You have no pending homeworks for CSC505..!!"));

        run(&ctx, "addhw CSC505 DANCE SEP 21 2050 10:00").await;
        assert!(run(&ctx, "coursedue csc505")
            .await
            .contains("DANCE is due at 2050-09-21 10:00:00"));
    }

    #[tokio::test]
    async fn test_listreminders_sorted_by_due_date() {
        let (_dir, ctx) = context();
        run(&ctx, "addhw CSC510 HW1 DEC 21 2050 19:59").await;
        run(&ctx, "addhw CSC505 DANCE SEP 21 2050 10:00").await;

        let reply = run(&ctx, "listreminders").await;
        assert_eq!(
            reply.messages(),
            &["CSC505 homework named: DANCE which is due on: 2050-09-21 10:00:00\n\
               CSC510 homework named: HW1 which is due on: 2050-12-21 19:59:00"]
        );
    }

    #[tokio::test]
    async fn test_changeduedate() {
        let (_dir, ctx) = context();
        run(&ctx, "addhw CSC505 DANCE SEP 21 2050 10:00").await;

        assert_eq!(
            run(&ctx, "changeduedate CSC505 DANCE 4").await.messages(),
            &[PARSE_FAILURE]
        );
        assert!(run(&ctx, "changeduedate CSC505 SING OCT 01 2050 09:00")
            .await
            .contains("No reminder found"));

        let moved = run(&ctx, "changeduedate CSC505 DANCE OCT 01 2050 09:00").await;
        assert_eq!(
            moved.messages(),
            &["CSC505 DANCE has been updated with following date: 2050-10-01 09:00:00"]
        );
        assert!(run(&ctx, "coursedue CSC505")
            .await
            .contains("DANCE is due at 2050-10-01 09:00:00"));
    }

    #[tokio::test]
    async fn test_duethisweek_uses_window() {
        let (_dir, ctx) = context_at(fixed_now);
        let soon = (fixed_now() + Duration::hours(1)).format("%b %d %Y %H:%M").to_string();
        let later = (fixed_now() + Duration::days(30)).format("%b %d %Y %H:%M").to_string();

        assert_eq!(run(&ctx, "duethisweek").await.messages(), &[NOTHING_DUE_THIS_WEEK]);

        run(&ctx, &format!("addhw CSC600 HW0 {soon}")).await;
        run(&ctx, &format!("addhw CSC600 HW9 {later}")).await;

        let reply = run(&ctx, "duethisweek").await;
        assert_eq!(reply.messages(), &["CSC600 HW0 is due this week"]);
    }

    #[tokio::test]
    async fn test_clear_then_queries_report_empty() {
        let (_dir, ctx) = context();
        run(&ctx, "addhw CSC505 DANCE SEP 21 2050 10:00").await;

        assert_eq!(run(&ctx, "clearreminders").await.messages(), &[CLEARED]);
        assert_eq!(run(&ctx, "listreminders").await.messages(), &[NO_REMINDERS]);
        assert_eq!(run(&ctx, "duethisweek").await.messages(), &[NOTHING_DUE_THIS_WEEK]);
    }

    #[tokio::test]
    async fn test_reminders_survive_a_new_context() {
        let (dir, ctx) = context();
        run(&ctx, "addhw CSC505 DANCE SEP 21 2050 10:00").await;
        drop(ctx);

        let config = crate::core::Config::with_data_dir(dir.path());
        let reopened = Arc::new(CommandContext::from_config(&config));
        assert!(run(&reopened, "listreminders").await.contains("CSC505 homework named: DANCE"));
    }
}
