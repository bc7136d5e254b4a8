//! Unified configuration for the layout pipeline.
//!
//! Every threshold the pipeline uses lives here so alternative strategies can be
//! compared on the same pages by changing configuration only. [`LayoutPreset`]
//! bundles the tuned combinations that proved useful on real documents.

use std::str::FromStr;

use crate::error::Error;

/// A length that is either absolute or relative to a page dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extent {
    /// Page-coordinate units
    Absolute(f32),
    /// Fraction of the relevant page dimension (width for horizontal, height for vertical)
    PageFraction(f32),
}

impl Extent {
    /// Resolve against the page dimension the extent is measured along.
    pub fn resolve(&self, reference: f32) -> f32 {
        match *self {
            Extent::Absolute(units) => units,
            Extent::PageFraction(fraction) => reference * fraction,
        }
    }
}

/// Rule deciding whether a drawn segment is a vertical separator candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalLineRule {
    /// Horizontal extent must be strictly below this
    pub max_horizontal_extent: Extent,
    /// Vertical extent must be strictly above this
    pub min_vertical_extent: Extent,
}

impl Default for VerticalLineRule {
    fn default() -> Self {
        Self {
            max_horizontal_extent: Extent::Absolute(5.0),
            min_vertical_extent: Extent::Absolute(100.0),
        }
    }
}

impl VerticalLineRule {
    /// Thresholds relative to page size: under 1% of width across, over 20% of height tall.
    pub fn relative() -> Self {
        Self {
            max_horizontal_extent: Extent::PageFraction(0.01),
            min_vertical_extent: Extent::PageFraction(0.2),
        }
    }
}

/// Separator search parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparatorConfig {
    /// Lines whose midpoint is farther than this fraction of the width from center are ignored
    pub center_window_fraction: f32,
    /// First candidate of the distribution scan, as a fraction of width
    pub scan_start_fraction: f32,
    /// Last candidate of the distribution scan (inclusive), as a fraction of width
    pub scan_end_fraction: f32,
    /// Distance between scan candidates in page units
    pub scan_step: f32,
    /// Each side must hold more than this fraction of spans for a candidate to qualify
    pub min_population_fraction: f32,
    /// Prefer the qualifying candidate crossed by the fewest span boxes over the centermost one
    pub minimize_crossings: bool,
}

impl Default for SeparatorConfig {
    fn default() -> Self {
        Self {
            center_window_fraction: 0.25,
            scan_start_fraction: 0.3,
            scan_end_fraction: 0.7,
            scan_step: 5.0,
            min_population_fraction: 0.1,
            minimize_crossings: false,
        }
    }
}

/// Available region classification strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassifierKind {
    /// Fixed fractions of page height
    Percentage,
    /// Header/footer bounded by the separator line's extent
    #[default]
    LineBoundary,
    /// Footer is text sitting on a colored band in the lower half
    ColoredBackground,
    /// Footer requires textual cues (copyright, page numbers)
    Keyword,
}

impl ClassifierKind {
    /// Stable name used in metadata and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            ClassifierKind::Percentage => "percentage",
            ClassifierKind::LineBoundary => "line-boundary",
            ClassifierKind::ColoredBackground => "colored-background",
            ClassifierKind::Keyword => "keyword",
        }
    }
}

impl FromStr for ClassifierKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "percentage" | "percent" => Ok(ClassifierKind::Percentage),
            "line-boundary" | "line" => Ok(ClassifierKind::LineBoundary),
            "colored-background" | "colored" | "coloured" => Ok(ClassifierKind::ColoredBackground),
            "keyword" | "keywords" => Ok(ClassifierKind::Keyword),
            other => Err(Error::UnknownStrategy(other.to_string())),
        }
    }
}

/// Whether footer cues are checked on each span or on all footer candidates together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FooterCueScope {
    /// Every candidate must carry a cue itself
    #[default]
    PerSpan,
    /// Candidates are joined and judged once for the whole page
    PerPage,
}

/// Region classifier parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    /// Strategy to build
    pub kind: ClassifierKind,
    /// Header band when no line extent is known, as a fraction of page height
    pub header_fraction: f32,
    /// Footer band start when no line extent is known, as a fraction of page height
    pub footer_fraction: f32,
    /// Slack added around a separator line's extent
    pub boundary_margin: f32,
    /// Extra footer cues on top of the built-in list (matched case-insensitively)
    pub extra_footer_cues: Vec<String>,
    /// Granularity of footer cue checks
    pub cue_scope: FooterCueScope,
    /// Footer candidates shorter than this that contain a digit count as page numbers
    pub short_footer_max_chars: usize,
    /// Colored regions must start below this fraction of page height
    pub colored_region_min_top: f32,
    /// Chain a keyword classifier after the primary one
    pub keyword_fallback: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::for_kind(ClassifierKind::default())
    }
}

impl ClassifierConfig {
    /// Defaults tuned for each strategy.
    pub fn for_kind(kind: ClassifierKind) -> Self {
        let (header_fraction, footer_fraction) = match kind {
            ClassifierKind::Percentage | ClassifierKind::LineBoundary => (0.15, 0.90),
            ClassifierKind::ColoredBackground => (0.15, 0.95),
            ClassifierKind::Keyword => (0.10, 0.95),
        };
        Self {
            kind,
            header_fraction,
            footer_fraction,
            boundary_margin: 10.0,
            extra_footer_cues: Vec::new(),
            cue_scope: FooterCueScope::PerSpan,
            short_footer_max_chars: 50,
            colored_region_min_top: 0.5,
            keyword_fallback: false,
        }
    }

    /// Set the header/footer fractions.
    pub fn with_bands(mut self, header_fraction: f32, footer_fraction: f32) -> Self {
        self.header_fraction = header_fraction;
        self.footer_fraction = footer_fraction;
        self
    }

    /// Add a footer cue.
    pub fn with_footer_cue(mut self, cue: impl Into<String>) -> Self {
        self.extra_footer_cues.push(cue.into());
        self
    }

    /// Set the footer cue scope.
    pub fn with_cue_scope(mut self, scope: FooterCueScope) -> Self {
        self.cue_scope = scope;
        self
    }

    /// Chain a keyword classifier after the primary strategy.
    pub fn with_keyword_fallback(mut self, enable: bool) -> Self {
        self.keyword_fallback = enable;
        self
    }
}

/// How spans are grouped into lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineGrouping {
    /// A span joins the line when its top is within tolerance of the line's lowest top
    TopAnchored,
    /// A span joins the line when its top is within tolerance of the line's running maximum bottom
    #[default]
    BottomOverlap,
}

/// Text assembly parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssemblerConfig {
    /// Vertical tolerance for line grouping
    pub line_tolerance: f32,
    /// Grouping rule
    pub grouping: LineGrouping,
    /// Insert a blank line when consecutive lines are farther apart than this
    pub paragraph_gap: Option<f32>,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            line_tolerance: 10.0,
            grouping: LineGrouping::BottomOverlap,
            paragraph_gap: None,
        }
    }
}

/// Complete pipeline configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutConfig {
    /// Vertical separator line detection
    pub geometry: VerticalLineRule,
    /// Separator search
    pub separator: SeparatorConfig,
    /// Region classification
    pub classifier: ClassifierConfig,
    /// Line and paragraph assembly
    pub assembler: AssemblerConfig,
    /// Segment column text into numbered items
    pub extract_items: bool,
}

impl LayoutConfig {
    /// Create config for a preset.
    ///
    /// # Examples
    ///
    /// ```
    /// use column_oxide::pipeline::{ClassifierKind, LayoutConfig, LayoutPreset};
    ///
    /// let config = LayoutConfig::for_preset(LayoutPreset::QuestionPaper);
    /// assert_eq!(config.classifier.kind, ClassifierKind::Keyword);
    /// assert!(config.extract_items);
    /// ```
    pub fn for_preset(preset: LayoutPreset) -> Self {
        preset.create_config()
    }

    /// Replace the classifier with defaults for `kind`.
    pub fn with_classifier_kind(mut self, kind: ClassifierKind) -> Self {
        self.classifier = ClassifierConfig::for_kind(kind);
        self
    }

    /// Replace the classifier configuration.
    pub fn with_classifier(mut self, classifier: ClassifierConfig) -> Self {
        self.classifier = classifier;
        self
    }

    /// Replace the vertical line rule.
    pub fn with_line_rule(mut self, rule: VerticalLineRule) -> Self {
        self.geometry = rule;
        self
    }

    /// Replace the separator configuration.
    pub fn with_separator(mut self, separator: SeparatorConfig) -> Self {
        self.separator = separator;
        self
    }

    /// Replace the assembler configuration.
    pub fn with_assembler(mut self, assembler: AssemblerConfig) -> Self {
        self.assembler = assembler;
        self
    }

    /// Enable or disable item segmentation.
    pub fn with_items(mut self, enable: bool) -> Self {
        self.extract_items = enable;
        self
    }
}

/// Tuned configurations for known document families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPreset {
    /// Ruled two-column pages: relative line thresholds, header/footer bounded by the rule
    LineBoundary,
    /// Unruled pages with fixed header (15%) and footer (90%) bands
    Percentage,
    /// Reports whose footer sits on a colored band, with cue-checked fallback
    ColoredFooter,
    /// Two-column question papers: strict header band, cue-checked footer, items enabled
    QuestionPaper,
}

impl LayoutPreset {
    /// Build the configuration for this preset.
    pub fn create_config(&self) -> LayoutConfig {
        match self {
            Self::LineBoundary => LayoutConfig {
                geometry: VerticalLineRule::relative(),
                separator: SeparatorConfig::default(),
                classifier: ClassifierConfig::for_kind(ClassifierKind::LineBoundary),
                assembler: AssemblerConfig::default(),
                extract_items: false,
            },
            Self::Percentage => LayoutConfig {
                geometry: VerticalLineRule::default(),
                separator: Self::wide_window(),
                classifier: ClassifierConfig::for_kind(ClassifierKind::Percentage),
                assembler: AssemblerConfig::default(),
                extract_items: false,
            },
            Self::ColoredFooter => LayoutConfig {
                geometry: VerticalLineRule::default(),
                separator: Self::wide_window(),
                classifier: ClassifierConfig::for_kind(ClassifierKind::ColoredBackground)
                    .with_cue_scope(FooterCueScope::PerPage)
                    .with_keyword_fallback(true),
                assembler: AssemblerConfig::default(),
                extract_items: false,
            },
            Self::QuestionPaper => LayoutConfig {
                geometry: VerticalLineRule::default(),
                separator: Self::wide_window(),
                classifier: ClassifierConfig::for_kind(ClassifierKind::Keyword),
                assembler: AssemblerConfig::default(),
                extract_items: true,
            },
        }
    }

    /// Stable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LineBoundary => "line-boundary",
            Self::Percentage => "percentage",
            Self::ColoredFooter => "colored-footer",
            Self::QuestionPaper => "question-paper",
        }
    }

    fn wide_window() -> SeparatorConfig {
        SeparatorConfig {
            center_window_fraction: 0.3,
            ..SeparatorConfig::default()
        }
    }
}

impl FromStr for LayoutPreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "line-boundary" | "ruled" => Ok(Self::LineBoundary),
            "percentage" => Ok(Self::Percentage),
            "colored-footer" => Ok(Self::ColoredFooter),
            "question-paper" | "questions" => Ok(Self::QuestionPaper),
            other => Err(Error::UnknownStrategy(other.to_string())),
        }
    }
}
