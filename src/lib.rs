// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]
#![allow(clippy::should_implement_trait)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # Column Oxide
//!
//! Two-column page layout segmentation and reading order in Rust.
//!
//! ## Core Features
//!
//! - **Separator Location**: drawn column rules first, span distribution scan second, page center last
//! - **Region Classification**: pluggable header/footer strategies (percentage, line boundary,
//!   footer cues, colored background) composable behind one trait
//! - **Text Assembly**: tolerant line grouping and left-to-right reading within each region
//! - **Numbered Items**: question/item segmentation merged across both columns
//! - **Error Isolation**: a failing page yields a minimal layout, the document keeps going
//! - **Snapshot Harness**: page selections, normalized JSON output, strategy comparison
//!
//! ## Architecture
//!
//! ```text
//! DocumentSource → PageContent → SeparatorLocator → RegionClassifier → TextAssembler → PageLayout
//!                                                                                    ↘ ItemSegmenter
//! ```
//!
//! The engine never parses file formats; an upstream parser supplies spans and
//! drawings per page through [`document::DocumentSource`].
//!
//! ## Quick Start
//!
//! ```
//! use column_oxide::document::{MemoryDocument, PageContent, RawSpan};
//! use column_oxide::pipeline::{ColumnLayoutPipeline, LayoutExtractor, LayoutPreset};
//!
//! # fn main() -> Result<(), column_oxide::Error> {
//! let page = PageContent::new(500.0, 800.0)
//!     .with_span(RawSpan::new("1. First question", [40.0, 200.0, 220.0, 212.0]))
//!     .with_span(RawSpan::new("2. Second question", [280.0, 200.0, 460.0, 212.0]));
//! let doc = MemoryDocument::new("exam", vec![page]);
//!
//! let mut pipeline = ColumnLayoutPipeline::new(
//!     Box::new(doc),
//!     LayoutPreset::QuestionPaper.create_config(),
//! );
//! let layout = pipeline.layout_of_page(0);
//! assert_eq!(layout.left_column, "1. First question");
//!
//! let questions = pipeline.items_of_all_pages();
//! assert_eq!(questions.total_questions, 2);
//! pipeline.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Input
pub mod document;
pub mod elements;
pub mod geometry;

// Layout analysis
pub mod layout;

// Numbered items
pub mod items;

// Pipeline, strategies and configuration
pub mod pipeline;

// Format converters
pub mod converters;

// Snapshot and comparison harness
pub mod tester;

// Re-exports
pub use document::{DocumentSource, JsonDocument, MemoryDocument, PageContent};
pub use error::{Error, Result};
pub use pipeline::{ColumnLayoutPipeline, LayoutConfig, LayoutExtractor, LayoutPreset, PageLayout};

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Safely compare two floating point numbers, handling NaN cases.
    ///
    /// NaN values are treated as equal to each other and greater than all other values.
    /// This ensures that sorting operations never panic due to NaN comparisons.
    #[inline]
    pub fn safe_float_cmp(a: f32, b: f32) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater, // NaN > all numbers
            (false, true) => Ordering::Less,    // all numbers < NaN
            (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_safe_float_cmp_normal() {
            assert_eq!(safe_float_cmp(1.0, 2.0), Ordering::Less);
            assert_eq!(safe_float_cmp(2.0, 1.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(1.5, 1.5), Ordering::Equal);
        }

        #[test]
        fn test_safe_float_cmp_nan() {
            assert_eq!(safe_float_cmp(f32::NAN, f32::NAN), Ordering::Equal);
            assert_eq!(safe_float_cmp(f32::NAN, 0.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(0.0, f32::NAN), Ordering::Less);
        }

        #[test]
        fn test_safe_float_cmp_infinity() {
            assert_eq!(safe_float_cmp(f32::INFINITY, f32::INFINITY), Ordering::Equal);
            assert_eq!(safe_float_cmp(f32::NEG_INFINITY, f32::INFINITY), Ordering::Less);
        }
    }
}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
