//! Per-page layout output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::layout::Region;

/// Metadata key holding the failure description of a page that could not be processed.
pub const ERROR_KEY: &str = "error";

/// Layout of one page: four region texts plus page facts.
///
/// Metadata is kept in a sorted map so serialized output is stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    /// 1-indexed page number
    pub page_number: u32,
    /// Header text
    pub header: String,
    /// Footer text
    pub footer: String,
    /// Left column text
    pub left_column: String,
    /// Right column text
    pub right_column: String,
    /// Page width
    pub page_width: f32,
    /// Page height
    pub page_height: f32,
    /// Column separator x-coordinate, `None` for failed pages
    pub column_separator_position: Option<f32>,
    /// Counts, boundaries and strategy details
    #[serde(default)]
    pub metadata: BTreeMap<String, Value>,
}

impl PageLayout {
    /// Minimal layout for a page that failed: empty text, zero geometry,
    /// no separator, and the error description under [`ERROR_KEY`].
    pub fn failed(page_number: u32, error: &Error) -> Self {
        let mut metadata = BTreeMap::new();
        metadata.insert(ERROR_KEY.to_string(), Value::String(error.to_string()));
        Self {
            page_number,
            header: String::new(),
            footer: String::new(),
            left_column: String::new(),
            right_column: String::new(),
            page_width: 0.0,
            page_height: 0.0,
            column_separator_position: None,
            metadata,
        }
    }

    /// Whether this page failed to process.
    pub fn is_failed(&self) -> bool {
        self.metadata.contains_key(ERROR_KEY)
    }

    /// Failure description, if the page failed.
    pub fn error(&self) -> Option<&str> {
        self.metadata.get(ERROR_KEY).and_then(Value::as_str)
    }

    /// Text of one region.
    pub fn text(&self, region: Region) -> &str {
        match region {
            Region::Header => &self.header,
            Region::Footer => &self.footer,
            Region::LeftColumn => &self.left_column,
            Region::RightColumn => &self.right_column,
        }
    }

    /// Non-empty regions joined in reading order with blank lines between them.
    pub fn reading_text(&self) -> String {
        Region::READING_ORDER
            .iter()
            .map(|r| self.text(*r))
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Integer metadata value.
    pub fn count(&self, key: &str) -> Option<u64> {
        self.metadata.get(key).and_then(Value::as_u64)
    }
}
