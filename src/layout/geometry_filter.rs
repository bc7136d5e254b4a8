//! Vertical line and colored region detection from page drawings.

use crate::elements::{Drawing, PathOp};
use crate::geometry::Rect;
use crate::pipeline::config::VerticalLineRule;

/// A near-vertical line segment that may separate two columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalLine {
    /// First endpoint x
    pub x0: f32,
    /// First endpoint y
    pub y0: f32,
    /// Second endpoint x
    pub x1: f32,
    /// Second endpoint y
    pub y1: f32,
}

impl VerticalLine {
    /// Horizontal midpoint of the segment.
    pub fn mid_x(&self) -> f32 {
        (self.x0 + self.x1) / 2.0
    }

    /// Topmost y of the segment.
    pub fn top(&self) -> f32 {
        self.y0.min(self.y1)
    }

    /// Bottommost y of the segment.
    pub fn bottom(&self) -> f32 {
        self.y0.max(self.y1)
    }

    /// Vertical extent.
    pub fn length(&self) -> f32 {
        (self.y1 - self.y0).abs()
    }
}

/// Collect every line segment on the page that satisfies `rule`.
///
/// Only line items are considered. An item whose coordinate list is not
/// exactly `x0 y0 x1 y1` is skipped with a warning; the rest of the page is
/// still processed. An empty drawing list yields no lines.
pub fn vertical_lines(
    drawings: &[Drawing],
    page_width: f32,
    page_height: f32,
    rule: &VerticalLineRule,
) -> Vec<VerticalLine> {
    let max_dx = rule.max_horizontal_extent.resolve(page_width);
    let min_dy = rule.min_vertical_extent.resolve(page_height);

    let mut lines = Vec::new();
    for drawing in drawings {
        for item in drawing.items.iter().filter(|item| item.op == PathOp::Line) {
            let [x0, y0, x1, y1] = match item.coords.as_slice() {
                &[x0, y0, x1, y1] => [x0, y0, x1, y1],
                other => {
                    log::warn!(
                        "Skipping line item with {} coordinates (expected 4)",
                        other.len()
                    );
                    continue;
                },
            };

            if !(x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite()) {
                log::warn!("Skipping line item with non-finite coordinates");
                continue;
            }

            if (x1 - x0).abs() < max_dx && (y1 - y0).abs() > min_dy {
                lines.push(VerticalLine { x0, y0, x1, y1 });
            }
        }
    }

    log::debug!(
        "Detected {} vertical line(s) (dx < {:.1}, dy > {:.1})",
        lines.len(),
        max_dx,
        min_dy
    );
    lines
}

/// Rectangles of non-white filled drawings whose top edge lies below
/// `min_top_fraction` of the page height.
///
/// These are the colored bands that typically carry a report's footer.
pub fn colored_regions(drawings: &[Drawing], page_height: f32, min_top_fraction: f32) -> Vec<Rect> {
    let min_top = page_height * min_top_fraction;
    drawings
        .iter()
        .filter_map(|drawing| match (drawing.fill, drawing.rect) {
            (Some(fill), Some(rect)) if !fill.is_white() && rect.is_finite() => Some(rect),
            _ => None,
        })
        .filter(|rect| rect.y0 > min_top)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::PathItem;
    use crate::layout::Color;
    use crate::pipeline::config::Extent;

    #[test]
    fn test_detects_vertical_line() {
        let drawings = vec![Drawing::line(300.0, 100.0, 300.0, 700.0)];
        let lines = vertical_lines(&drawings, 600.0, 800.0, &VerticalLineRule::default());

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].mid_x(), 300.0);
        assert_eq!(lines[0].length(), 600.0);
    }

    #[test]
    fn test_rejects_short_and_slanted_lines() {
        let drawings = vec![
            Drawing::line(300.0, 100.0, 300.0, 150.0),
            Drawing::line(280.0, 100.0, 320.0, 700.0),
            Drawing::line(50.0, 400.0, 550.0, 400.0),
        ];
        let lines = vertical_lines(&drawings, 600.0, 800.0, &VerticalLineRule::default());
        assert!(lines.is_empty());
    }

    #[test]
    fn test_skips_malformed_items() {
        let mut drawing = Drawing::default();
        drawing.push(PathItem::new(PathOp::Line, vec![300.0, 100.0, 300.0]));
        drawing.push(PathItem::line(300.0, 100.0, 300.0, 700.0));
        let lines = vertical_lines(&[drawing], 600.0, 800.0, &VerticalLineRule::default());
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_ignores_non_line_ops() {
        let drawing = Drawing::filled_rect(Rect::from_points(299.0, 0.0, 301.0, 800.0), Color::black());
        let lines = vertical_lines(&[drawing], 600.0, 800.0, &VerticalLineRule::default());
        assert!(lines.is_empty());
    }

    #[test]
    fn test_relative_rule() {
        let rule = VerticalLineRule {
            max_horizontal_extent: Extent::PageFraction(0.01),
            min_vertical_extent: Extent::PageFraction(0.2),
        };
        // 170 units tall on an 800 unit page clears 20%
        let drawings = vec![Drawing::line(300.0, 100.0, 300.0, 270.0)];
        assert_eq!(vertical_lines(&drawings, 600.0, 800.0, &rule).len(), 1);
        // 7 units across exceeds 1% of 600
        let drawings = vec![Drawing::line(300.0, 100.0, 307.0, 700.0)];
        assert!(vertical_lines(&drawings, 600.0, 800.0, &rule).is_empty());
    }

    #[test]
    fn test_colored_regions() {
        let drawings = vec![
            Drawing::filled_rect(Rect::from_points(0.0, 740.0, 600.0, 800.0), Color::new(0.1, 0.3, 0.6)),
            Drawing::filled_rect(Rect::from_points(0.0, 0.0, 600.0, 60.0), Color::new(0.1, 0.3, 0.6)),
            Drawing::filled_rect(Rect::from_points(0.0, 700.0, 600.0, 720.0), Color::white()),
            Drawing::line(300.0, 100.0, 300.0, 700.0),
        ];
        let regions = colored_regions(&drawings, 800.0, 0.5);
        assert_eq!(regions, vec![Rect::from_points(0.0, 740.0, 600.0, 800.0)]);
    }
}
