//! # Feature: Notification Email Addresses
//!
//! Each user may register one address for email notifications.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
            .expect("email pattern is a valid literal regex")
    })
}

pub fn is_valid_email(address: &str) -> bool {
    email_pattern().is_match(address)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyConfigured,
}

/// Author id → configured address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailDirectory {
    addresses: BTreeMap<String, String>,
}

impl EmailDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, author: &str, address: &str) -> AddOutcome {
        if self.addresses.contains_key(author) {
            return AddOutcome::AlreadyConfigured;
        }
        self.addresses.insert(author.to_string(), address.to_string());
        AddOutcome::Added
    }

    /// Set the address, replacing any previous one. Returns the old address.
    pub fn update(&mut self, author: &str, address: &str) -> Option<String> {
        self.addresses.insert(author.to_string(), address.to_string())
    }

    pub fn get(&self, author: &str) -> Option<&str> {
        self.addresses.get(author).map(String::as_str)
    }

    pub fn delete(&mut self, author: &str) -> Option<String> {
        self.addresses.remove(author)
    }
}
