//! Geometric primitives for layout analysis.
//!
//! All coordinates are in page space with the origin at the top-left corner
//! and y growing downwards, which is how the upstream parser reports spans.

use serde::{Deserialize, Serialize};

/// A 2D point in page space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

/// An axis-aligned rectangle given by its two corners.
///
/// Serialized as `[x0, y0, x1, y1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Rect {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
}

impl Rect {
    /// Create a rectangle from two corner points, normalizing inverted corners.
    ///
    /// # Examples
    ///
    /// ```
    /// use column_oxide::geometry::Rect;
    ///
    /// let rect = Rect::from_points(110.0, 20.0, 10.0, 70.0);
    /// assert_eq!(rect.x0, 10.0);
    /// assert_eq!(rect.x1, 110.0);
    /// assert_eq!(rect.y0, 20.0);
    /// assert_eq!(rect.y1, 70.0);
    /// ```
    pub fn from_points(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// Get the left edge x-coordinate.
    pub fn left(&self) -> f32 {
        self.x0
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x1
    }

    /// Get the center point of the rectangle.
    ///
    /// # Examples
    ///
    /// ```
    /// use column_oxide::geometry::Rect;
    ///
    /// let rect = Rect::from_points(0.0, 0.0, 100.0, 50.0);
    /// let center = rect.center();
    /// assert_eq!(center.x, 50.0);
    /// assert_eq!(center.y, 25.0);
    /// ```
    pub fn center(&self) -> Point {
        Point {
            x: (self.x0 + self.x1) / 2.0,
            y: (self.y0 + self.y1) / 2.0,
        }
    }

    /// Check if `other` lies entirely inside this rectangle (edges inclusive).
    ///
    /// # Examples
    ///
    /// ```
    /// use column_oxide::geometry::Rect;
    ///
    /// let band = Rect::from_points(0.0, 700.0, 600.0, 800.0);
    /// assert!(band.contains_rect(&Rect::from_points(20.0, 720.0, 200.0, 740.0)));
    /// assert!(!band.contains_rect(&Rect::from_points(20.0, 690.0, 200.0, 740.0)));
    /// ```
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x0 >= self.x0 && other.x1 <= self.x1 && other.y0 >= self.y0 && other.y1 <= self.y1
    }

    /// Compute the union of this rectangle with another.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// True when every coordinate is a finite number.
    pub fn is_finite(&self) -> bool {
        self.x0.is_finite() && self.y0.is_finite() && self.x1.is_finite() && self.y1.is_finite()
    }
}

impl From<[f32; 4]> for Rect {
    fn from(c: [f32; 4]) -> Self {
        Rect::from_points(c[0], c[1], c[2], c[3])
    }
}

impl From<Rect> for [f32; 4] {
    fn from(r: Rect) -> Self {
        [r.x0, r.y0, r.x1, r.y1]
    }
}
