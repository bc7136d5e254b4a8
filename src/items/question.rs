//! Numbered items reconstructed from column text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::Rect;

/// Reading column an item was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    /// Left reading column
    Left,
    /// Right reading column
    Right,
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Left => write!(f, "left"),
            Column::Right => write!(f, "right"),
        }
    }
}

/// A numbered item such as an exam question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Number parsed from the item's marker
    pub number: u32,
    /// Item text, marker included, trimmed
    pub text: String,
    /// 1-indexed page the item starts on
    pub page_number: u32,
    /// Column the item was found in
    pub column: Column,
    /// Position on the page when known
    pub bbox: Option<Rect>,
    /// The numbering marker exactly as matched
    pub raw_match: String,
}

/// All items of a document, ordered by number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSet {
    /// Document the items came from
    pub source: String,
    /// Number of items
    pub total_questions: usize,
    /// Items in ascending number order
    pub questions: Vec<Question>,
}

impl QuestionSet {
    /// Collect items from all pages and sort them by number.
    ///
    /// The sort is stable: items sharing a number keep page order.
    pub fn new(source: impl Into<String>, questions: Vec<Question>) -> Self {
        let mut questions = questions;
        questions.sort_by_key(|q| q.number);
        Self {
            source: source.into(),
            total_questions: questions.len(),
            questions,
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
