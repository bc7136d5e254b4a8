//! Positioned text spans as delivered by the upstream parser.

use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Font size reported when the parser could not determine one.
pub const UNKNOWN_FONT_SIZE: f32 = -1.0;

/// A positioned run of text.
///
/// Spans are immutable once produced: classification and assembly only move
/// them between collections. Whitespace-only text never becomes a `TextSpan`
/// (see [`crate::document::PageContent::text_spans`]).
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    /// The text content
    pub text: String,
    /// Bounding box of the span, `x0 <= x1` and `y0 <= y1`
    pub bbox: Rect,
    /// Font size in points, or [`UNKNOWN_FONT_SIZE`]
    pub font_size: f32,
    /// Font name/family
    pub font_name: String,
    /// Zero-based page index the span was extracted from
    pub page_index: usize,
    /// Block type proposed by an upstream region model ("Title", "Text", ...)
    pub block_type: Option<String>,
}

impl TextSpan {
    /// Create a span with unknown font attributes on page 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use column_oxide::geometry::Rect;
    /// use column_oxide::layout::TextSpan;
    ///
    /// let span = TextSpan::new("Question 1", Rect::from_points(40.0, 120.0, 180.0, 132.0));
    /// assert_eq!(span.font_size, -1.0);
    /// assert_eq!(span.center().x, 110.0);
    /// ```
    pub fn new(text: impl Into<String>, bbox: Rect) -> Self {
        Self {
            text: text.into(),
            bbox,
            font_size: UNKNOWN_FONT_SIZE,
            font_name: String::from("unknown"),
            page_index: 0,
            block_type: None,
        }
    }

    /// Set font attributes.
    pub fn with_font(mut self, font_name: impl Into<String>, font_size: f32) -> Self {
        self.font_name = font_name.into();
        self.font_size = font_size;
        self
    }

    /// Set the page index.
    pub fn on_page(mut self, page_index: usize) -> Self {
        self.page_index = page_index;
        self
    }

    /// Attach an upstream block type label.
    pub fn with_block_type(mut self, block_type: impl Into<String>) -> Self {
        self.block_type = Some(block_type.into());
        self
    }

    /// Center of the bounding box.
    pub fn center(&self) -> Point {
        self.bbox.center()
    }

    /// Whether the parser reported a font size.
    pub fn has_font_size(&self) -> bool {
        self.font_size > 0.0
    }
}

/// RGB color representation, serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct Color {
    /// Red channel (0.0 - 1.0)
    pub r: f32,
    /// Green channel (0.0 - 1.0)
    pub g: f32,
    /// Blue channel (0.0 - 1.0)
    pub b: f32,
}

impl Color {
    /// Create a new color.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a black color.
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Create a white color.
    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Pure white is treated as "no background".
    pub fn is_white(&self) -> bool {
        self.r >= 1.0 && self.g >= 1.0 && self.b >= 1.0
    }
}

impl From<[f32; 3]> for Color {
    fn from(c: [f32; 3]) -> Self {
        Color::new(c[0], c[1], c[2])
    }
}

impl From<Color> for [f32; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}
