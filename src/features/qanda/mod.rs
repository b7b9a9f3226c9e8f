//! # Feature: Questions & Answers
//!
//! Numbered questions posted in the class Q&A channel, optionally without
//! the asker's name, each collecting any number of answers.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.3.0
//! - **Toggleable**: false

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub author: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 1-based, never reused
    pub number: u32,
    pub text: String,
    /// None when asked anonymously
    pub author: Option<String>,
    pub answers: Vec<Answer>,
}

/// All questions, in the order they were asked
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionBoard {
    questions: Vec<Question>,
}

impl QuestionBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a question under the next free number
    pub fn ask(&mut self, text: &str, author: Option<&str>) -> &Question {
        let number = self.questions.last().map_or(1, |q| q.number + 1);
        self.questions.push(Question {
            number,
            text: text.to_string(),
            author: author.map(str::to_string),
            answers: Vec::new(),
        });
        &self.questions[self.questions.len() - 1]
    }

    /// Attach an answer. None when no question has that number.
    pub fn answer(&mut self, number: u32, author: &str, text: &str) -> Option<&Question> {
        let question = self.questions.iter_mut().find(|q| q.number == number)?;
        question.answers.push(Answer {
            author: author.to_string(),
            text: text.to_string(),
        });
        Some(question)
    }

    pub fn get(&self, number: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.number == number)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
