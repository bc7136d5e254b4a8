//! Fixed-fraction header and footer bands.

use crate::layout::{Band, TextSpan};
use crate::pipeline::config::ClassifierConfig;

use super::{ClassifierContext, RegionClassifier};

/// Header and footer bands at fixed fractions of the page height.
///
/// A span is header when its bottom edge is above `header_fraction` of the
/// height, footer when its top edge is below `footer_fraction`.
#[derive(Debug, Clone)]
pub struct PercentageBoundary {
    header_fraction: f32,
    footer_fraction: f32,
}

impl PercentageBoundary {
    /// Create a classifier with explicit fractions.
    pub fn new(header_fraction: f32, footer_fraction: f32) -> Self {
        Self {
            header_fraction,
            footer_fraction,
        }
    }

    /// Create from configuration.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(config.header_fraction, config.footer_fraction)
    }

    /// Band of a single span on a page of the given height.
    pub(crate) fn band(&self, span: &TextSpan, page_height: f32) -> Option<Band> {
        if span.bbox.y1 < page_height * self.header_fraction {
            Some(Band::Header)
        } else if span.bbox.y0 > page_height * self.footer_fraction {
            Some(Band::Footer)
        } else {
            None
        }
    }
}

impl RegionClassifier for PercentageBoundary {
    fn band_of(&self, spans: &[TextSpan], context: &ClassifierContext) -> Vec<Option<Band>> {
        spans.iter().map(|s| self.band(s, context.page_height)).collect()
    }

    fn name(&self) -> &'static str {
        "percentage"
    }
}
