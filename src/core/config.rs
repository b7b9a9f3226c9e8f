//! Environment-driven bot configuration
//!
//! - **Version**: 1.2.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.2.0: Add the Q&A channel name and question/profanity stores
//! - 1.1.0: Add group/project sizing and the due window override
//! - 1.0.0: Initial creation with token, prefix, and data directory

use anyhow::{anyhow, Result};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_COMMAND_PREFIX: &str = "$";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_DUE_WINDOW_DAYS: i64 = 7;
pub const DEFAULT_GROUP_COUNT: u32 = 100;
pub const DEFAULT_PROJECT_COUNT: u32 = 30;
pub const DEFAULT_GROUP_CAPACITY: usize = 6;
pub const DEFAULT_QNA_CHANNEL: &str = "q-and-a";

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub command_prefix: String,
    /// Directory holding every store file. Resolved once at startup.
    pub data_dir: PathBuf,
    pub log_level: String,
    pub due_window_days: i64,
    pub group_count: u32,
    pub project_count: u32,
    /// Max members per group, and max groups voting for one project
    pub group_capacity: usize,
    /// Only channel where questions may be asked and answered
    pub qna_channel: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let discord_token = std::env::var("DISCORD_TOKEN")
            .map_err(|_| anyhow!("DISCORD_TOKEN environment variable is not set"))?;

        let command_prefix =
            std::env::var("COMMAND_PREFIX").unwrap_or_else(|_| DEFAULT_COMMAND_PREFIX.to_string());
        if command_prefix.trim().is_empty() {
            return Err(anyhow!("COMMAND_PREFIX must not be empty"));
        }

        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let data_dir = absolute(PathBuf::from(data_dir))?;

        let due_window_days = env_number("DUE_WINDOW_DAYS", DEFAULT_DUE_WINDOW_DAYS)?;
        if due_window_days <= 0 {
            return Err(anyhow!("DUE_WINDOW_DAYS must be positive, got {due_window_days}"));
        }

        let group_capacity = env_number("GROUP_CAPACITY", DEFAULT_GROUP_CAPACITY)?;
        if group_capacity == 0 {
            return Err(anyhow!("GROUP_CAPACITY must be at least 1"));
        }

        Ok(Self {
            discord_token,
            command_prefix,
            data_dir,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            due_window_days,
            group_count: env_number("GROUP_COUNT", DEFAULT_GROUP_COUNT)?,
            project_count: env_number("PROJECT_COUNT", DEFAULT_PROJECT_COUNT)?,
            group_capacity,
            qna_channel: std::env::var("QNA_CHANNEL")
                .unwrap_or_else(|_| DEFAULT_QNA_CHANNEL.to_string()),
        })
    }

    /// Defaults with an explicit data directory and no gateway token
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            discord_token: String::new(),
            command_prefix: DEFAULT_COMMAND_PREFIX.to_string(),
            data_dir: data_dir.into(),
            log_level: "info".to_string(),
            due_window_days: DEFAULT_DUE_WINDOW_DAYS,
            group_count: DEFAULT_GROUP_COUNT,
            project_count: DEFAULT_PROJECT_COUNT,
            group_capacity: DEFAULT_GROUP_CAPACITY,
            qna_channel: DEFAULT_QNA_CHANNEL.to_string(),
        }
    }

    pub fn due_window(&self) -> chrono::Duration {
        chrono::Duration::days(self.due_window_days)
    }

    pub fn reminders_path(&self) -> PathBuf {
        self.data_dir.join("reminders.json")
    }

    pub fn groups_path(&self) -> PathBuf {
        self.data_dir.join("groups.json")
    }

    pub fn projects_path(&self) -> PathBuf {
        self.data_dir.join("projects.json")
    }

    pub fn pins_path(&self) -> PathBuf {
        self.data_dir.join("pins.json")
    }

    pub fn emails_path(&self) -> PathBuf {
        self.data_dir.join("emails.json")
    }

    pub fn questions_path(&self) -> PathBuf {
        self.data_dir.join("questions.json")
    }

    pub fn profanity_path(&self) -> PathBuf {
        self.data_dir.join("profanity.json")
    }
}

fn env_number<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow!("Invalid value for {key}: '{raw}' ({e})")),
        Err(_) => Ok(default),
    }
}

fn absolute(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_data_dir_defaults() {
        let config = Config::with_data_dir("/tmp/classmate");

        assert_eq!(config.command_prefix, "$");
        assert_eq!(config.due_window_days, 7);
        assert_eq!(config.group_capacity, 6);
        assert_eq!(
            config.reminders_path(),
            PathBuf::from("/tmp/classmate/reminders.json")
        );
    }

    #[test]
    fn test_due_window_is_days() {
        let mut config = Config::with_data_dir("/tmp");
        config.due_window_days = 3;
        assert_eq!(config.due_window(), chrono::Duration::hours(72));
    }

    #[test]
    fn test_env_number_falls_back_to_default() {
        let value: u32 = env_number("CLASSMATE_TEST_UNSET_NUMBER", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_env_number_rejects_garbage() {
        std::env::set_var("CLASSMATE_TEST_GARBAGE_NUMBER", "abc");
        let err = env_number::<u32>("CLASSMATE_TEST_GARBAGE_NUMBER", 1).unwrap_err();
        assert!(err.to_string().contains("CLASSMATE_TEST_GARBAGE_NUMBER"));
        std::env::remove_var("CLASSMATE_TEST_GARBAGE_NUMBER");
    }

    #[test]
    fn test_env_number_trims_whitespace() {
        std::env::set_var("CLASSMATE_TEST_PADDED_NUMBER", " 12 ");
        let value: i64 = env_number("CLASSMATE_TEST_PADDED_NUMBER", 1).unwrap();
        assert_eq!(value, 12);
        std::env::remove_var("CLASSMATE_TEST_PADDED_NUMBER");
    }

    #[test]
    fn test_absolute_keeps_absolute_paths() {
        let path = absolute(PathBuf::from("/var/lib/classmate")).unwrap();
        assert_eq!(path, PathBuf::from("/var/lib/classmate"));
    }
}
