//! Region classification strategies.
//!
//! A classifier decides which spans belong to the header or footer band of a
//! page; everything else is split into the left and right column by the
//! separator. Strategies are interchangeable behind [`RegionClassifier`] and
//! can be chained with [`FirstMatch`].
//!
//! # Available Strategies
//!
//! - [`PercentageBoundary`]: fixed fractions of page height
//! - [`LineBoundary`]: bands bounded by the separator rule's extent
//! - [`KeywordHeuristic`]: footer candidates must carry footer cues
//! - [`ColoredBackground`]: footer is text on a colored band in the lower half
//! - [`FirstMatch`]: first band proposed by any member wins

mod colored_background;
mod first_match;
mod keyword;
mod line_boundary;
mod percentage;

pub use colored_background::ColoredBackground;
pub use first_match::FirstMatch;
pub use keyword::{looks_like_footer, KeywordHeuristic, FOOTER_CUES};
pub use line_boundary::LineBoundary;
pub use percentage::PercentageBoundary;

use crate::geometry::Rect;
use crate::layout::{Band, Region, RegionSet, TextSpan};
use crate::pipeline::config::{ClassifierConfig, ClassifierKind};

/// Trait for assigning page spans to regions.
///
/// Implementations only decide header/footer membership. The column split is
/// shared by all strategies so that swapping a classifier never changes how
/// body text is divided.
pub trait RegionClassifier: Send + Sync {
    /// Propose a band for every span, `None` for body text.
    ///
    /// The returned vector has exactly one entry per input span.
    fn band_of(&self, spans: &[TextSpan], context: &ClassifierContext) -> Vec<Option<Band>>;

    /// Return the name of this strategy for debugging and metadata.
    fn name(&self) -> &'static str;

    /// Human-readable description, composite strategies list their members.
    fn describe(&self) -> String {
        self.name().to_string()
    }

    /// Assign every span to exactly one region.
    ///
    /// Body spans whose horizontal center lies left of the separator go to the
    /// left column, all others to the right column.
    fn classify(&self, spans: Vec<TextSpan>, context: &ClassifierContext) -> RegionSet {
        let bands = self.band_of(&spans, context);
        let mut regions = RegionSet::default();

        for (i, span) in spans.into_iter().enumerate() {
            let region = match bands.get(i).copied().flatten() {
                Some(band) => Region::from(band),
                None if span.center().x < context.separator_x => Region::LeftColumn,
                None => Region::RightColumn,
            };
            regions.push(region, span);
        }

        regions
    }
}

/// Page facts available to a classifier.
#[derive(Debug, Clone, Default)]
pub struct ClassifierContext {
    /// Page width
    pub page_width: f32,
    /// Page height
    pub page_height: f32,
    /// Column separator x-coordinate
    pub separator_x: f32,
    /// Vertical extent `(top, bottom)` of the separator rule, when one was drawn
    pub line_extent: Option<(f32, f32)>,
    /// Colored bands in the lower part of the page
    pub colored_regions: Vec<Rect>,
}

impl ClassifierContext {
    /// Create a context for a page with the separator at `separator_x`.
    pub fn new(page_width: f32, page_height: f32, separator_x: f32) -> Self {
        Self {
            page_width,
            page_height,
            separator_x,
            ..Self::default()
        }
    }

    /// Set the separator rule's vertical extent.
    pub fn with_line_extent(mut self, top: f32, bottom: f32) -> Self {
        self.line_extent = Some((top, bottom));
        self
    }

    /// Set the colored regions.
    pub fn with_colored_regions(mut self, regions: Vec<Rect>) -> Self {
        self.colored_regions = regions;
        self
    }
}

/// Create a region classifier based on configuration.
pub fn create_classifier(config: &ClassifierConfig) -> Box<dyn RegionClassifier> {
    let primary: Box<dyn RegionClassifier> = match config.kind {
        ClassifierKind::Percentage => Box::new(PercentageBoundary::from_config(config)),
        ClassifierKind::LineBoundary => Box::new(LineBoundary::from_config(config)),
        ClassifierKind::ColoredBackground => Box::new(ColoredBackground::from_config(config)),
        ClassifierKind::Keyword => Box::new(KeywordHeuristic::from_config(config)),
    };

    if config.keyword_fallback && config.kind != ClassifierKind::Keyword {
        let keyword_config = ClassifierConfig {
            extra_footer_cues: config.extra_footer_cues.clone(),
            cue_scope: config.cue_scope,
            short_footer_max_chars: config.short_footer_max_chars,
            ..ClassifierConfig::for_kind(ClassifierKind::Keyword)
        };
        let fallback = KeywordHeuristic::from_config(&keyword_config);
        return Box::new(FirstMatch::new(vec![primary, Box::new(fallback)]));
    }

    primary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, x0: f32, y0: f32, x1: f32, y1: f32) -> TextSpan {
        TextSpan::new(text, Rect::from_points(x0, y0, x1, y1))
    }

    #[test]
    fn test_create_classifier_names() {
        for (kind, name) in [
            (ClassifierKind::Percentage, "percentage"),
            (ClassifierKind::LineBoundary, "line-boundary"),
            (ClassifierKind::ColoredBackground, "colored-background"),
            (ClassifierKind::Keyword, "keyword"),
        ] {
            let classifier = create_classifier(&ClassifierConfig::for_kind(kind));
            assert_eq!(classifier.name(), name);
        }
    }

    #[test]
    fn test_keyword_fallback_composes() {
        let config = ClassifierConfig::for_kind(ClassifierKind::ColoredBackground).with_keyword_fallback(true);
        let classifier = create_classifier(&config);
        assert_eq!(classifier.name(), "first-match");
        assert_eq!(classifier.describe(), "colored-background+keyword");
    }

    #[test]
    fn test_column_split_uses_center() {
        let classifier = PercentageBoundary::new(0.15, 0.90);
        let ctx = ClassifierContext::new(600.0, 800.0, 300.0);
        let spans = vec![
            span("left", 50.0, 300.0, 250.0, 312.0),
            // Center at exactly 300 goes right
            span("middle", 250.0, 330.0, 350.0, 342.0),
            span("right", 320.0, 300.0, 500.0, 312.0),
        ];
        let regions = classifier.classify(spans, &ctx);

        assert_eq!(regions.left_column.len(), 1);
        assert_eq!(regions.right_column.len(), 2);
        assert_eq!(regions.right_column[0].text, "middle");
    }

    #[test]
    fn test_classify_is_exhaustive() {
        let classifier = create_classifier(&ClassifierConfig::default());
        let ctx = ClassifierContext::new(600.0, 800.0, 300.0);
        let spans = vec![
            span("title", 100.0, 20.0, 500.0, 40.0),
            span("body", 50.0, 300.0, 250.0, 312.0),
            span("more", 350.0, 300.0, 550.0, 312.0),
            span("page 3", 280.0, 760.0, 320.0, 772.0),
        ];
        let regions = classifier.classify(spans, &ctx);

        assert_eq!(regions.total(), 4);
        assert_eq!(regions.header[0].text, "title");
        assert_eq!(regions.footer[0].text, "page 3");
    }
}
