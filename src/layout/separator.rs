//! Column separator location.
//!
//! The separator is the x-coordinate dividing the left and right columns. A
//! drawn vertical rule near the page center wins outright; without one the
//! text distribution is scanned for a gutter; failing that the page center is
//! used. Locating a separator never fails.

use crate::elements::Drawing;
use crate::layout::geometry_filter::{vertical_lines, VerticalLine};
use crate::layout::TextSpan;
use crate::pipeline::config::{SeparatorConfig, VerticalLineRule};

/// Upper bound on distribution scan positions per page.
pub const MAX_SCAN_CANDIDATES: usize = 2000;

/// How the separator position was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorSource {
    /// A drawn vertical line near the center
    Geometry,
    /// Gutter found by scanning span positions
    Distribution,
    /// Half the page width
    PageCenter,
}

impl SeparatorSource {
    /// Stable name used in page metadata.
    pub fn name(&self) -> &'static str {
        match self {
            SeparatorSource::Geometry => "geometry",
            SeparatorSource::Distribution => "distribution",
            SeparatorSource::PageCenter => "page_center",
        }
    }
}

/// Result of separator location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparatorEstimate {
    /// Separator x-coordinate
    pub x: f32,
    /// Vertical extent `(top, bottom)` of the separator line, only for geometry estimates
    pub line_extent: Option<(f32, f32)>,
    /// Where the estimate came from
    pub source: SeparatorSource,
    /// Number of vertical lines the geometry filter accepted on the page
    pub vertical_lines: usize,
}

impl SeparatorEstimate {
    fn page_center(page_width: f32, vertical_lines: usize) -> Self {
        Self {
            x: page_width / 2.0,
            line_extent: None,
            source: SeparatorSource::PageCenter,
            vertical_lines,
        }
    }
}

/// Locates the column separator of a page.
#[derive(Debug, Clone, Default)]
pub struct SeparatorLocator {
    rule: VerticalLineRule,
    config: SeparatorConfig,
}

impl SeparatorLocator {
    /// Create a locator.
    pub fn new(rule: VerticalLineRule, config: SeparatorConfig) -> Self {
        Self { rule, config }
    }

    /// Locate the separator for one page.
    ///
    /// # Examples
    ///
    /// ```
    /// use column_oxide::elements::Drawing;
    /// use column_oxide::layout::{SeparatorLocator, SeparatorSource};
    ///
    /// let locator = SeparatorLocator::default();
    /// let drawings = vec![Drawing::line(300.0, 100.0, 300.0, 700.0)];
    /// let estimate = locator.locate(600.0, 800.0, &drawings, &[]);
    ///
    /// assert_eq!(estimate.x, 300.0);
    /// assert_eq!(estimate.line_extent, Some((100.0, 700.0)));
    /// assert_eq!(estimate.source, SeparatorSource::Geometry);
    /// ```
    pub fn locate(
        &self,
        page_width: f32,
        page_height: f32,
        drawings: &[Drawing],
        spans: &[TextSpan],
    ) -> SeparatorEstimate {
        let lines = vertical_lines(drawings, page_width, page_height, &self.rule);

        if let Some(line) = self.central_line(&lines, page_width) {
            log::debug!(
                "Separator from vertical line at x={:.1} (y {:.1}..{:.1})",
                line.mid_x(),
                line.top(),
                line.bottom()
            );
            return SeparatorEstimate {
                x: line.mid_x(),
                line_extent: Some((line.top(), line.bottom())),
                source: SeparatorSource::Geometry,
                vertical_lines: lines.len(),
            };
        }

        if spans.is_empty() {
            return SeparatorEstimate::page_center(page_width, lines.len());
        }

        match self.scan_distribution(page_width, spans) {
            Some(x) => {
                log::debug!("Separator from span distribution at x={:.1}", x);
                SeparatorEstimate {
                    x,
                    line_extent: None,
                    source: SeparatorSource::Distribution,
                    vertical_lines: lines.len(),
                }
            },
            None => {
                log::debug!("No gutter found, using page center");
                SeparatorEstimate::page_center(page_width, lines.len())
            },
        }
    }

    /// Longest line whose midpoint lies within the center window.
    ///
    /// Equal lengths keep the line drawn first.
    fn central_line<'a>(&self, lines: &'a [VerticalLine], page_width: f32) -> Option<&'a VerticalLine> {
        let center = page_width / 2.0;
        let window = page_width * self.config.center_window_fraction;

        lines
            .iter()
            .filter(|line| (line.mid_x() - center).abs() < window)
            .fold(None, |best: Option<&VerticalLine>, line| match best {
                Some(b) if b.length() >= line.length() => Some(b),
                _ => Some(line),
            })
    }

    /// Scan candidate positions for one that leaves enough spans on each side.
    ///
    /// The qualifying candidate closest to the page center wins, ties keep the
    /// leftmost. With `minimize_crossings` the candidate crossed by the fewest
    /// span boxes wins first and distance to center breaks ties. The step
    /// widens on very large pages so at most [`MAX_SCAN_CANDIDATES`] positions
    /// are tried.
    fn scan_distribution(&self, page_width: f32, spans: &[TextSpan]) -> Option<f32> {
        if self.config.scan_step <= 0.0 {
            log::warn!("Separator scan step must be positive, skipping distribution scan");
            return None;
        }

        let start = page_width * self.config.scan_start_fraction;
        let end = page_width * self.config.scan_end_fraction;
        if end < start {
            return None;
        }

        let step = self
            .config
            .scan_step
            .max((end - start) / MAX_SCAN_CANDIDATES as f32);
        let steps = (((end - start) / step).floor() as usize).min(MAX_SCAN_CANDIDATES);
        let center = page_width / 2.0;
        let min_side = spans.len() as f32 * self.config.min_population_fraction;

        let mut best: Option<(usize, f32, f32)> = None;
        for i in 0..=steps {
            let x = start + i as f32 * step;
            let left = spans.iter().filter(|s| s.center().x < x).count();
            let right = spans.iter().filter(|s| s.center().x > x).count();
            if left as f32 <= min_side || right as f32 <= min_side {
                continue;
            }

            let crossings = if self.config.minimize_crossings {
                spans
                    .iter()
                    .filter(|s| s.bbox.left() < x && x < s.bbox.right())
                    .count()
            } else {
                0
            };
            let distance = (x - center).abs();
            let better = match best {
                None => true,
                Some((c, d, _)) => crossings < c || (crossings == c && distance < d),
            };
            if better {
                best = Some((crossings, distance, x));
            }
        }

        best.map(|(_, _, x)| x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn span(x0: f32, y0: f32, x1: f32, y1: f32) -> TextSpan {
        TextSpan::new("text", Rect::from_points(x0, y0, x1, y1))
    }

    fn two_columns() -> Vec<TextSpan> {
        let mut spans = Vec::new();
        for row in 0..10 {
            let y = 100.0 + row as f32 * 20.0;
            spans.push(span(50.0, y, 250.0, y + 12.0));
            spans.push(span(350.0, y, 550.0, y + 12.0));
        }
        spans
    }

    #[test]
    fn test_line_wins_over_distribution() {
        let locator = SeparatorLocator::default();
        let drawings = vec![Drawing::line(310.0, 90.0, 310.0, 720.0)];
        let estimate = locator.locate(600.0, 800.0, &drawings, &two_columns());

        assert_eq!(estimate.source, SeparatorSource::Geometry);
        assert_eq!(estimate.x, 310.0);
        assert_eq!(estimate.line_extent, Some((90.0, 720.0)));
        assert_eq!(estimate.vertical_lines, 1);
    }

    #[test]
    fn test_line_extent_is_ordered() {
        let locator = SeparatorLocator::default();
        let drawings = vec![Drawing::line(300.0, 700.0, 300.0, 100.0)];
        let estimate = locator.locate(600.0, 800.0, &drawings, &[]);
        assert_eq!(estimate.line_extent, Some((100.0, 700.0)));
    }

    #[test]
    fn test_line_outside_window_ignored() {
        let locator = SeparatorLocator::default();
        // 580 is 280 from center, window is 150
        let drawings = vec![Drawing::line(580.0, 100.0, 580.0, 700.0)];
        let estimate = locator.locate(600.0, 800.0, &drawings, &[]);

        assert_eq!(estimate.source, SeparatorSource::PageCenter);
        assert_eq!(estimate.x, 300.0);
        assert_eq!(estimate.line_extent, None);
        assert_eq!(estimate.vertical_lines, 1);
    }

    #[test]
    fn test_longest_central_line_wins() {
        let locator = SeparatorLocator::default();
        let drawings = vec![
            Drawing::line(290.0, 200.0, 290.0, 400.0),
            Drawing::line(260.0, 100.0, 260.0, 700.0),
            Drawing::line(20.0, 0.0, 20.0, 800.0),
        ];
        let estimate = locator.locate(600.0, 800.0, &drawings, &[]);
        assert_eq!(estimate.x, 260.0);
        assert_eq!(estimate.line_extent, Some((100.0, 700.0)));
        assert_eq!(estimate.vertical_lines, 3);
    }

    #[test]
    fn test_no_spans_no_lines() {
        let locator = SeparatorLocator::default();
        let estimate = locator.locate(600.0, 800.0, &[], &[]);
        assert_eq!(estimate.x, 300.0);
        assert_eq!(estimate.source, SeparatorSource::PageCenter);
    }

    #[test]
    fn test_distribution_finds_gutter() {
        let locator = SeparatorLocator::default();
        let estimate = locator.locate(600.0, 800.0, &[], &two_columns());

        assert_eq!(estimate.source, SeparatorSource::Distribution);
        assert!(estimate.x > 250.0 && estimate.x < 350.0, "x = {}", estimate.x);
        // Page center qualifies and is the centermost candidate
        assert_eq!(estimate.x, 300.0);
    }

    #[test]
    fn test_distribution_prefers_centermost_candidate() {
        // Right column starts at 260; every candidate from 205 up qualifies
        let spans: Vec<TextSpan> = (0..10)
            .flat_map(|row| {
                let y = 100.0 + row as f32 * 20.0;
                vec![span(40.0, y, 200.0, y + 12.0), span(260.0, y, 560.0, y + 12.0)]
            })
            .collect();

        let estimate = SeparatorLocator::default().locate(600.0, 800.0, &[], &spans);
        assert_eq!(estimate.source, SeparatorSource::Distribution);
        assert_eq!(estimate.x, 300.0);

        let config = SeparatorConfig {
            minimize_crossings: true,
            ..SeparatorConfig::default()
        };
        let gutter = SeparatorLocator::new(VerticalLineRule::default(), config).locate(600.0, 800.0, &[], &spans);
        assert!(gutter.x > 200.0 && gutter.x <= 260.0, "x = {}", gutter.x);
    }

    #[test]
    fn test_huge_page_scan_is_bounded() {
        let width = 1.0e9;
        let spans = vec![
            span(0.1 * width, 100.0, 0.2 * width, 112.0),
            span(0.8 * width, 100.0, 0.9 * width, 112.0),
        ];
        let estimate = SeparatorLocator::default().locate(width, 800.0, &[], &spans);

        assert_eq!(estimate.source, SeparatorSource::Distribution);
        assert!((estimate.x - width / 2.0).abs() <= width * 0.4 / MAX_SCAN_CANDIDATES as f32);
    }

    #[test]
    fn test_distribution_falls_back_to_center() {
        let locator = SeparatorLocator::default();
        // Everything on the left, no candidate qualifies
        let spans: Vec<TextSpan> = (0..5).map(|i| span(20.0, i as f32 * 20.0, 100.0, i as f32 * 20.0 + 10.0)).collect();
        let estimate = locator.locate(600.0, 800.0, &[], &spans);

        assert_eq!(estimate.source, SeparatorSource::PageCenter);
        assert_eq!(estimate.x, 300.0);
    }

    #[test]
    fn test_non_positive_step_skips_scan() {
        let config = SeparatorConfig {
            scan_step: 0.0,
            ..SeparatorConfig::default()
        };
        let locator = SeparatorLocator::new(VerticalLineRule::default(), config);
        let estimate = locator.locate(600.0, 800.0, &[], &two_columns());
        assert_eq!(estimate.source, SeparatorSource::PageCenter);
    }
}
