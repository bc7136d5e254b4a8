//! Output converters for extracted layouts.
//!
//! Layouts and numbered items serialize to JSON through serde; this module
//! adds Markdown renderings for reading and review.

pub mod markdown;

pub use markdown::{MarkdownConverter, MarkdownStyle};
