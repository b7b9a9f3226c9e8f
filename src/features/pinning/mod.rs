//! # Feature: Pinned Links
//!
//! Per-user bookmarks of message links, grouped by tag.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    pub tag: String,
    pub link: String,
    pub description: String,
}

/// Author id → that author's pins, in pin order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinBoard {
    pins: BTreeMap<String, Vec<Pin>>,
}

impl PinBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pin(&mut self, author: &str, tag: &str, link: &str, description: &str) -> &Pin {
        let pins = self.pins.entry(author.to_string()).or_default();
        pins.push(Pin {
            tag: tag.to_string(),
            link: link.to_string(),
            description: description.to_string(),
        });
        // Just pushed, so the list is non-empty
        &pins[pins.len() - 1]
    }

    /// Remove every pin matching tag and description. Returns how many went.
    pub fn unpin(&mut self, author: &str, tag: &str, description: &str) -> usize {
        let Some(pins) = self.pins.get_mut(author) else {
            return 0;
        };
        let before = pins.len();
        pins.retain(|p| !(p.tag == tag && p.description == description));
        let removed = before - pins.len();

        if pins.is_empty() {
            self.pins.remove(author);
        }
        removed
    }

    /// Point every pin matching tag and description at `link`
    pub fn update_link(&mut self, author: &str, tag: &str, description: &str, link: &str) -> usize {
        self.pins
            .get_mut(author)
            .map(|pins| {
                pins.iter_mut()
                    .filter(|p| p.tag == tag && p.description == description)
                    .map(|p| p.link = link.to_string())
                    .count()
            })
            .unwrap_or(0)
    }

    /// The author's pins, optionally restricted to one tag
    pub fn list(&self, author: &str, tag: Option<&str>) -> Vec<&Pin> {
        self.pins
            .get(author)
            .map(|pins| {
                pins.iter()
                    .filter(|p| tag.map_or(true, |t| p.tag == t))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_and_list() {
        let mut board = PinBoard::new();
        board.pin("1", "TestMessage", "www.google.com", "this is a test");
        board.pin("1", "Other", "www.discord.com", "misc");
        board.pin("2", "TestMessage", "www.zoom.com", "someone else");

        assert_eq!(board.list("1", None).len(), 2);
        let tagged = board.list("1", Some("TestMessage"));
        assert_eq!(tagged.len(), 1);
        assert_eq!(tagged[0].link, "www.google.com");
    }

    #[test]
    fn test_unpin_requires_tag_and_description() {
        let mut board = PinBoard::new();
        board.pin("1", "TestMessage", "www.google.com", "this is a test");

        assert_eq!(board.unpin("1", "None", "ThisWillFail"), 0);
        assert_eq!(board.unpin("1", "TestMessage", "this is a test"), 1);
        assert!(board.list("1", None).is_empty());
    }

    #[test]
    fn test_unpin_removes_all_duplicates() {
        let mut board = PinBoard::new();
        board.pin("1", "T", "a", "same");
        board.pin("1", "T", "b", "same");
        assert_eq!(board.unpin("1", "T", "same"), 2);
    }

    #[test]
    fn test_update_link() {
        let mut board = PinBoard::new();
        board.pin("1", "TestMessage2", "www.discord.com", "test");

        assert_eq!(board.update_link("1", "TestMessage2", "test", "www.zoom.com"), 1);
        assert_eq!(board.list("1", None)[0].link, "www.zoom.com");
        assert_eq!(board.update_link("2", "TestMessage2", "test", "x"), 0);
    }
}
