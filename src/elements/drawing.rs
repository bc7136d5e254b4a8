//! Raw vector drawing primitives.
//!
//! These mirror what a drawing extractor reports per page: a list of paths, each
//! a sequence of path items tagged with an operator code plus an optional fill
//! color and bounding rectangle. Coordinates are kept as an unchecked `Vec<f32>`
//! because extractors occasionally emit items with the wrong arity; the
//! geometry filter decides what to do with those.

use crate::geometry::Rect;
use crate::layout::Color;
use serde::{Deserialize, Serialize};

/// Path operator of a drawing item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathOp {
    /// Straight line segment (`x0 y0 x1 y1`)
    #[serde(rename = "l")]
    Line,
    /// Cubic Bezier curve
    #[serde(rename = "c")]
    Curve,
    /// Rectangle
    #[serde(rename = "re")]
    Rectangle,
    /// Quadrilateral
    #[serde(rename = "qu")]
    Quad,
    /// Any operator this crate does not interpret
    #[serde(other)]
    Other,
}

/// One item of a drawing path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    /// Operator code
    pub op: PathOp,
    /// Operand coordinates, unchecked
    #[serde(default)]
    pub coords: Vec<f32>,
}

impl PathItem {
    /// Create a line item from `(x0, y0)` to `(x1, y1)`.
    pub fn line(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            op: PathOp::Line,
            coords: vec![x0, y0, x1, y1],
        }
    }

    /// Create an item with arbitrary operands.
    pub fn new(op: PathOp, coords: Vec<f32>) -> Self {
        Self { op, coords }
    }
}

/// A drawing path as reported by the drawing extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    /// Path items in drawing order
    #[serde(default)]
    pub items: Vec<PathItem>,
    /// Fill color, `None` when the path is only stroked
    #[serde(default)]
    pub fill: Option<Color>,
    /// Bounding rectangle of the whole path, when known
    #[serde(default)]
    pub rect: Option<Rect>,
}

impl Drawing {
    /// A stroked path consisting of a single line.
    pub fn line(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            items: vec![PathItem::line(x0, y0, x1, y1)],
            fill: None,
            rect: Some(Rect::from_points(x0, y0, x1, y1)),
        }
    }

    /// A filled rectangle.
    pub fn filled_rect(rect: Rect, fill: Color) -> Self {
        Self {
            items: vec![PathItem::new(
                PathOp::Rectangle,
                vec![rect.x0, rect.y0, rect.x1, rect.y1],
            )],
            fill: Some(fill),
            rect: Some(rect),
        }
    }

    /// Add a path item.
    pub fn push(&mut self, item: PathItem) {
        self.items.push(item);
    }

    /// Check if this path has a fill.
    pub fn has_fill(&self) -> bool {
        self.fill.is_some()
    }
}
