//! Question and answer command handlers
//!
//! Handles: ask, askanonym, answer
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
use crate::features::Question;

/// Handler for the class Q&A channel
pub struct QandaHandler;

#[async_trait]
impl TextCommandHandler for QandaHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["ask", "askanonym", "answer"]
    }

    fn help(&self) -> &'static [&'static str] {
        &[
            "ask \"QUESTION\" - post a numbered question in the Q&A channel",
            "askanonym \"QUESTION\" - post a question without your name",
            "answer <Num> ANSWER - answer a question by its number",
        ]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        invocation: &CommandInvocation,
    ) -> Result<Reply> {
        if invocation.channel_name.as_deref() != Some(ctx.qna_channel.as_str()) {
            return Ok(Reply::text(format!(
                "Questions can only be posted on {} channel",
                ctx.qna_channel
            )));
        }

        match invocation.keyword.as_str() {
            "ask" | "askanonym" => self.handle_ask(&ctx, invocation).await,
            "answer" => self.handle_answer(&ctx, invocation).await,
            _ => Ok(Reply::default()),
        }
    }
}

/// Question line followed by one line per answer
fn render(question: &Question) -> String {
    let author = question.author.as_deref().unwrap_or("anonymous");
    let mut text = format!("Q{}: {} by {author}", question.number, question.text);
    for answer in &question.answers {
        text.push_str(&format!("\n    Ans: {} by {}", answer.text, answer.author));
    }
    text
}

fn unquote(text: &str) -> &str {
    let text = text.trim();
    ['"', '\'']
        .iter()
        .find_map(|q| text.strip_prefix(*q).and_then(|t| t.strip_suffix(*q)))
        .unwrap_or(text)
        .trim()
}

impl QandaHandler {
    async fn handle_ask(&self, ctx: &CommandContext, invocation: &CommandInvocation) -> Result<Reply> {
        let raw = invocation.rest(0);
        let text = unquote(&raw);
        if text.is_empty() {
            return Ok(Reply::text(format!(
                "To use the {} command, do: {} \"QUESTION\" \n ( For example: {} \"When is the exam?\" )",
                invocation.keyword,
                ctx.command(&invocation.keyword),
                ctx.command(&invocation.keyword)
            )));
        }

        let author = (invocation.keyword == "ask").then_some(invocation.author_name.as_str());
        let rendered = ctx
            .questions
            .update(|board| render(board.ask(text, author)))
            .await?;
        info!("[{}] Question posted ({})", invocation.request_id, invocation.keyword);

        Ok(Reply::text(rendered))
    }

    async fn handle_answer(
        &self,
        ctx: &CommandContext,
        invocation: &CommandInvocation,
    ) -> Result<Reply> {
        let usage = format!(
            "To use the answer command, do: {} <Num> ANSWER \n ( For example: {} 1 Next Monday )",
            ctx.command("answer"),
            ctx.command("answer")
        );
        let Some(arg) = invocation.arg(0) else {
            return Ok(Reply::text(usage));
        };
        let number = match arg.parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => return Ok(Reply::text(format!("Invalid question number: {arg}"))),
        };
        let raw = invocation.rest(1);
        let text = unquote(&raw);
        if text.is_empty() {
            return Ok(Reply::text(usage));
        }

        let rendered = ctx
            .questions
            .update(|board| board.answer(number, &invocation.author_name, text).map(render))
            .await?;

        Ok(match rendered {
            Some(rendered) => {
                info!("[{}] Question {number} answered", invocation.request_id);
                Reply::text(rendered)
            }
            None => Reply::text(format!("Invalid question number: {arg}")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::handlers::test_support::{context, invoke, invoke_in};

    async fn run(ctx: &Arc<CommandContext>, line: &str) -> Reply {
        QandaHandler
            .handle(Arc::clone(ctx), &invoke_in("q-and-a", line))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_ask_and_ask_anonymously() {
        let (_dir, ctx) = context();

        let named = run(&ctx, "ask \"Question-1\"").await;
        assert_eq!(named.messages(), &["Q1: Question-1 by TestUser0"]);
        assert!(!named.contains("$ask"));

        let anonymous = run(&ctx, "askanonym 'Is it open book?'").await;
        assert_eq!(anonymous.messages(), &["Q2: Is it open book? by anonymous"]);
        assert!(!anonymous.contains("TestUser0"));
    }

    #[tokio::test]
    async fn test_answer_lists_all_answers() {
        let (_dir, ctx) = context();
        run(&ctx, "ask Question-1").await;

        assert_eq!(
            run(&ctx, "answer 1 Answer-1").await.messages(),
            &["Q1: Question-1 by TestUser0\n    Ans: Answer-1 by TestUser0"]
        );
        let second = run(&ctx, "answer 1 \"Answer-2\"").await;
        assert!(second.contains("Ans: Answer-1 by TestUser0\n    Ans: Answer-2 by TestUser0"));
    }

    #[tokio::test]
    async fn test_invalid_question_numbers() {
        let (_dir, ctx) = context();
        run(&ctx, "ask Question-1").await;

        assert_eq!(
            run(&ctx, "answer 0 Answer-0").await.messages(),
            &["Invalid question number: 0"]
        );
        assert_eq!(
            run(&ctx, "answer 2 Answer-2").await.messages(),
            &["Invalid question number: 2"]
        );
        assert_eq!(
            run(&ctx, "answer one Answer").await.messages(),
            &["Invalid question number: one"]
        );
        assert!(run(&ctx, "answer 1").await.contains("To use the answer command"));
        assert!(run(&ctx, "answer").await.contains("To use the answer command"));
    }

    #[tokio::test]
    async fn test_questions_only_in_qna_channel() {
        let (_dir, ctx) = context();

        let reply = QandaHandler.handle(Arc::clone(&ctx), &invoke("ask Question-1")).await.unwrap();
        assert_eq!(reply.messages(), &["Questions can only be posted on q-and-a channel"]);
        assert!(ctx.questions.read(|board| board.is_empty()).await);
    }

    #[tokio::test]
    async fn test_empty_question_shows_usage() {
        let (_dir, ctx) = context();
        assert!(run(&ctx, "ask").await.contains("To use the ask command"));
        assert!(run(&ctx, "askanonym \"\"").await.contains("To use the askanonym command"));
    }
}
