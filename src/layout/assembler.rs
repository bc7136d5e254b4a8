//! Line and paragraph reconstruction for one region.
//!
//! Spans are sorted top-to-bottom, grouped greedily into visual lines, and
//! each line is read left-to-right.

use crate::geometry::Rect;
use crate::layout::TextSpan;
use crate::pipeline::config::{AssemblerConfig, LineGrouping};
use crate::utils::safe_float_cmp;

/// A reconstructed visual line.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledLine {
    /// Span texts joined with single spaces, in ascending x order
    pub text: String,
    /// Union of the member span boxes
    pub bbox: Rect,
    /// Number of spans on the line
    pub span_count: usize,
}

/// Turns a region's spans into linear text.
#[derive(Debug, Clone, Default)]
pub struct TextAssembler {
    config: AssemblerConfig,
}

impl TextAssembler {
    /// Create an assembler.
    pub fn new(config: AssemblerConfig) -> Self {
        Self { config }
    }

    /// Assemble spans into newline-separated text.
    ///
    /// Empty input yields an empty string. When a paragraph gap is configured,
    /// lines separated by more than the gap get a blank line between them.
    ///
    /// # Examples
    ///
    /// ```
    /// use column_oxide::geometry::Rect;
    /// use column_oxide::layout::{TextAssembler, TextSpan};
    ///
    /// let spans = vec![
    ///     TextSpan::new("world", Rect::from_points(60.0, 102.0, 100.0, 112.0)),
    ///     TextSpan::new("Hello", Rect::from_points(10.0, 100.0, 50.0, 110.0)),
    ///     TextSpan::new("Next", Rect::from_points(10.0, 130.0, 50.0, 140.0)),
    /// ];
    /// assert_eq!(TextAssembler::default().assemble(&spans), "Hello world\nNext");
    /// ```
    pub fn assemble(&self, spans: &[TextSpan]) -> String {
        let lines = self.assemble_lines(spans);
        let mut out = String::new();
        let mut previous: Option<&AssembledLine> = None;

        for line in &lines {
            if let Some(prev) = previous {
                out.push('\n');
                if let Some(gap) = self.config.paragraph_gap {
                    if line.bbox.y0 - prev.bbox.y1 > gap {
                        out.push('\n');
                    }
                }
            }
            out.push_str(&line.text);
            previous = Some(line);
        }

        out
    }

    /// Group spans into lines in reading order.
    pub fn assemble_lines(&self, spans: &[TextSpan]) -> Vec<AssembledLine> {
        let mut sorted: Vec<&TextSpan> = spans.iter().collect();
        sorted.sort_by(|a, b| {
            safe_float_cmp(a.bbox.y0, b.bbox.y0).then_with(|| safe_float_cmp(a.bbox.x0, b.bbox.x0))
        });

        let tolerance = self.config.line_tolerance;
        let mut groups: Vec<Vec<&TextSpan>> = Vec::new();
        // Running anchor of the current line: lowest top or lowest bottom, per grouping rule
        let mut anchor = f32::NEG_INFINITY;

        for span in sorted {
            let joins = match groups.last() {
                None => false,
                Some(_) => match self.config.grouping {
                    LineGrouping::TopAnchored => span.bbox.y0 - anchor < tolerance,
                    LineGrouping::BottomOverlap => span.bbox.y0 < anchor + tolerance,
                },
            };

            let edge = match self.config.grouping {
                LineGrouping::TopAnchored => span.bbox.y0,
                LineGrouping::BottomOverlap => span.bbox.y1,
            };

            match groups.last_mut() {
                Some(group) if joins => {
                    group.push(span);
                    anchor = anchor.max(edge);
                },
                _ => {
                    groups.push(vec![span]);
                    anchor = edge;
                },
            }
        }

        groups.into_iter().filter_map(Self::finish_line).collect()
    }

    fn finish_line(mut group: Vec<&TextSpan>) -> Option<AssembledLine> {
        group.sort_by(|a, b| safe_float_cmp(a.bbox.x0, b.bbox.x0));
        let first = group.first()?;
        let bbox = group.iter().skip(1).fold(first.bbox, |acc, s| acc.union(&s.bbox));
        let text = group
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Some(AssembledLine {
            text,
            bbox,
            span_count: group.len(),
        })
    }
}
