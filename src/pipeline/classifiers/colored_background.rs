//! Footer detection from colored background bands.

use crate::layout::{Band, TextSpan};
use crate::pipeline::config::ClassifierConfig;

use super::{ClassifierContext, RegionClassifier};

/// Treats text lying on a colored band in the lower part of the page as footer.
///
/// Header is decided by a fixed fraction. The colored regions come from the
/// page context; only spans whose box lies entirely inside one are footer.
#[derive(Debug, Clone)]
pub struct ColoredBackground {
    header_fraction: f32,
}

impl ColoredBackground {
    /// Create a classifier.
    pub fn new(header_fraction: f32) -> Self {
        Self { header_fraction }
    }

    /// Create from configuration.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(config.header_fraction)
    }
}

impl RegionClassifier for ColoredBackground {
    fn band_of(&self, spans: &[TextSpan], context: &ClassifierContext) -> Vec<Option<Band>> {
        let header_limit = context.page_height * self.header_fraction;

        spans
            .iter()
            .map(|span| {
                if span.bbox.y1 < header_limit {
                    Some(Band::Header)
                } else if context.colored_regions.iter().any(|r| r.contains_rect(&span.bbox)) {
                    Some(Band::Footer)
                } else {
                    None
                }
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "colored-background"
    }
}
