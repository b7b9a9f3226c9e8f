//! # Feature: Profanity Filter
//!
//! Masks flagged words in chat messages. A small built-in list is extended
//! by words the class adds at runtime.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.3.0
//! - **Toggleable**: false

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Replacement for every flagged word, whatever its length
pub const MASK: &str = "****";

const BUILT_IN: &[&str] = &[
    "arse", "ass", "asshole", "bastard", "bitch", "bollocks", "bullshit", "crap", "cunt",
    "damn", "dick", "fuck", "fucking", "motherfucker", "piss", "prick", "shit", "slut",
    "twat", "wanker", "whore",
];

/// Words added on top of the built-in list, stored lower-cased
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordFilter {
    custom: BTreeSet<String>,
}

impl WordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a custom word. False when it is already filtered.
    pub fn add_custom(&mut self, word: &str) -> bool {
        let word = normalize(word);
        if word.is_empty() || self.is_flagged(&word) {
            return false;
        }
        self.custom.insert(word)
    }

    pub fn is_flagged(&self, word: &str) -> bool {
        let word = normalize(word);
        BUILT_IN.contains(&word.as_str()) || self.custom.contains(&word)
    }

    /// `text` with each flagged word masked, or None when nothing matched.
    ///
    /// Words are compared without surrounding punctuation; the punctuation
    /// itself is kept.
    pub fn censor(&self, text: &str) -> Option<String> {
        let mut flagged = false;
        let words: Vec<String> = text
            .split_whitespace()
            .map(|token| {
                let core = token.trim_matches(|c: char| !c.is_alphanumeric());
                if core.is_empty() || !self.is_flagged(core) {
                    return token.to_string();
                }
                flagged = true;
                token.replacen(core, MASK, 1)
            })
            .collect();

        flagged.then(|| words.join(" "))
    }

    pub fn custom_words(&self) -> impl Iterator<Item = &str> {
        self.custom.iter().map(String::as_str)
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}
