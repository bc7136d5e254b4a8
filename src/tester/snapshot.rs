//! Extraction results and snapshot normalization.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::pipeline::PageLayout;

/// Layouts produced by one extractor over one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Document the layouts came from
    pub source: String,
    /// Extractor name
    pub extractor: String,
    /// Number of layouts in `pages`
    pub total_pages: usize,
    /// Layouts in extraction order
    pub pages: Vec<PageLayout>,
    /// Run details (requested pages, failures, mode)
    #[serde(default)]
    pub metadata: BTreeMap<String, Value>,
}

impl ExtractionResult {
    /// Create a result.
    pub fn new(
        source: impl Into<String>,
        extractor: impl Into<String>,
        pages: Vec<PageLayout>,
        metadata: BTreeMap<String, Value>,
    ) -> Self {
        Self {
            source: source.into(),
            extractor: extractor.into(),
            total_pages: pages.len(),
            pages,
            metadata,
        }
    }

    /// Copy with every page normalized for snapshot comparison.
    pub fn normalized(&self) -> Self {
        Self {
            pages: self.pages.iter().map(normalize_layout_for_snapshot).collect(),
            ..self.clone()
        }
    }

    /// JSON value, optionally normalized.
    pub fn to_value(&self, normalize: bool) -> Result<Value> {
        let value = if normalize {
            serde_json::to_value(self.normalized())?
        } else {
            serde_json::to_value(self)?
        };
        Ok(value)
    }

    /// Pretty-printed JSON, optionally normalized.
    pub fn to_json(&self, normalize: bool) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_value(normalize)?)?)
    }

    /// Write the JSON to `path`, creating parent directories as needed.
    pub fn save_to_file(&self, path: impl AsRef<Path>, normalize: bool) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json(normalize)?)?;
        log::info!("Saved {} page(s) to {}", self.total_pages, path.display());
        Ok(())
    }

    /// Number of pages that failed.
    pub fn failed_pages(&self) -> usize {
        self.pages.iter().filter(|p| p.is_failed()).count()
    }
}

/// Normalize a layout so snapshots compare stably.
///
/// Width, height and separator are rounded to two decimals. Every text line
/// is trimmed and leading or trailing blank lines are dropped. Metadata is
/// already key-sorted. Normalizing twice gives the same result as once.
///
/// # Examples
///
/// ```
/// use column_oxide::error::Error;
/// use column_oxide::pipeline::PageLayout;
/// use column_oxide::tester::normalize_layout_for_snapshot;
///
/// let mut layout = PageLayout::failed(1, &Error::DocumentClosed);
/// layout.left_column = "  first  \n second\n\n".to_string();
/// layout.column_separator_position = Some(300.004);
///
/// let normalized = normalize_layout_for_snapshot(&layout);
/// assert_eq!(normalized.left_column, "first\nsecond");
/// assert_eq!(normalized.column_separator_position, Some(300.0));
/// assert_eq!(normalize_layout_for_snapshot(&normalized), normalized);
/// ```
pub fn normalize_layout_for_snapshot(layout: &PageLayout) -> PageLayout {
    PageLayout {
        page_number: layout.page_number,
        header: normalize_text(&layout.header),
        footer: normalize_text(&layout.footer),
        left_column: normalize_text(&layout.left_column),
        right_column: normalize_text(&layout.right_column),
        page_width: round2(layout.page_width),
        page_height: round2(layout.page_height),
        column_separator_position: layout.column_separator_position.map(round2),
        metadata: layout.metadata.clone(),
    }
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

fn normalize_text(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
