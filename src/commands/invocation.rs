//! Platform-neutral inbound messages, parsed commands, and replies
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Channel names for channel-bound commands; replies that replace the triggering message
//! - 1.0.0: Initial message, invocation and reply types

use uuid::Uuid;

/// A chat message as seen by the bot, stripped of gateway types
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub author_id: String,
    /// Display name (nickname when available)
    pub author_name: String,
    pub author_is_bot: bool,
    pub channel_id: String,
    /// None for direct messages or when the name is not cached
    pub channel_name: Option<String>,
    pub content: String,
}

/// A prefixed message split into a keyword and positional arguments
#[derive(Debug, Clone)]
pub struct CommandInvocation {
    pub request_id: Uuid,
    pub author_id: String,
    pub author_name: String,
    pub channel_id: String,
    pub channel_name: Option<String>,
    /// Lower-cased keyword without the prefix
    pub keyword: String,
    pub args: Vec<String>,
}

impl CommandInvocation {
    /// Parse `message` if it starts with `prefix` followed by a keyword
    pub fn parse(prefix: &str, message: &IncomingMessage) -> Option<Self> {
        let body = message.content.trim().strip_prefix(prefix)?;
        let mut parts = body.split_whitespace();

        // "$ addhw" is not a command
        if body.starts_with(char::is_whitespace) {
            return None;
        }
        let keyword = parts.next()?.to_lowercase();

        Some(Self {
            request_id: Uuid::new_v4(),
            author_id: message.author_id.clone(),
            author_name: message.author_name.clone(),
            channel_id: message.channel_id.clone(),
            channel_name: message.channel_name.clone(),
            keyword,
            args: parts.map(str::to_string).collect(),
        })
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// Arguments from `index` onward, joined by single spaces
    pub fn rest(&self, index: usize) -> String {
        self.args.get(index..).map(|a| a.join(" ")).unwrap_or_default()
    }
}

/// Reply text for the channel the command came from, one entry per message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    messages: Vec<String>,
    delete_original: bool,
}

impl Reply {
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
            delete_original: false,
        }
    }

    /// A reply that stands in for the triggering message, which is deleted
    pub fn replacing(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
            delete_original: true,
        }
    }

    pub fn deletes_original(&self) -> bool {
        self.delete_original
    }

    pub fn many<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            messages: messages.into_iter().map(Into::into).collect(),
            delete_original: false,
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    /// True when any message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }
}
