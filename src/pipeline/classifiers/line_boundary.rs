//! Header and footer bounded by the separator rule.

use crate::layout::{Band, TextSpan};
use crate::pipeline::config::ClassifierConfig;

use super::{ClassifierContext, PercentageBoundary, RegionClassifier};

/// Uses the vertical extent of the drawn column rule as the body area.
///
/// Text ending above the rule's top (plus margin) is header, text starting
/// below the rule's bottom (minus margin) is footer. Pages without a rule
/// fall back to fixed fractions.
#[derive(Debug, Clone)]
pub struct LineBoundary {
    margin: f32,
    fallback: PercentageBoundary,
}

impl LineBoundary {
    /// Create a classifier.
    pub fn new(margin: f32, header_fraction: f32, footer_fraction: f32) -> Self {
        Self {
            margin,
            fallback: PercentageBoundary::new(header_fraction, footer_fraction),
        }
    }

    /// Create from configuration.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(config.boundary_margin, config.header_fraction, config.footer_fraction)
    }
}

impl RegionClassifier for LineBoundary {
    fn band_of(&self, spans: &[TextSpan], context: &ClassifierContext) -> Vec<Option<Band>> {
        let Some((top, bottom)) = context.line_extent else {
            return self.fallback.band_of(spans, context);
        };

        let header_limit = top + self.margin;
        let footer_limit = bottom - self.margin;
        log::debug!(
            "Line boundaries: header above {:.1}, footer below {:.1}",
            header_limit,
            footer_limit
        );

        spans
            .iter()
            .map(|span| {
                if span.bbox.y1 < header_limit {
                    Some(Band::Header)
                } else if span.bbox.y0 > footer_limit {
                    Some(Band::Footer)
                } else {
                    None
                }
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "line-boundary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn span(y0: f32, y1: f32) -> TextSpan {
        TextSpan::new("t", Rect::from_points(50.0, y0, 200.0, y1))
    }

    #[test]
    fn test_uses_line_extent() {
        let classifier = LineBoundary::new(10.0, 0.15, 0.90);
        let ctx = ClassifierContext::new(600.0, 800.0, 300.0).with_line_extent(200.0, 600.0);
        let spans = vec![span(150.0, 205.0), span(205.0, 215.0), span(585.0, 595.0), span(620.0, 630.0)];

        assert_eq!(
            classifier.band_of(&spans, &ctx),
            vec![Some(Band::Header), None, None, Some(Band::Footer)]
        );
    }

    #[test]
    fn test_falls_back_to_fractions() {
        let classifier = LineBoundary::new(10.0, 0.15, 0.90);
        let ctx = ClassifierContext::new(600.0, 800.0, 300.0);
        let spans = vec![span(150.0, 205.0), span(20.0, 40.0), span(730.0, 740.0)];

        assert_eq!(
            classifier.band_of(&spans, &ctx),
            vec![None, Some(Band::Header), Some(Band::Footer)]
        );
    }
}
