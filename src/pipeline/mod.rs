//! Two-column layout pipeline.
//!
//! Every page flows through the same stages:
//!
//! ```text
//! PageContent (spans + drawings)
//!     ↓
//! [SeparatorLocator] (vertical rule, span distribution, or page center)
//!     ↓
//! [RegionClassifier] (pluggable header/footer strategy + column split)
//!     ↓
//! RegionSet
//!     ↓
//! [TextAssembler] (lines in reading order, per region)
//!     ↓
//! PageLayout  →  [ItemSegmenter] (optional numbered items)
//! ```
//!
//! Pages are independent. A page that fails produces a minimal
//! [`PageLayout`] carrying the error instead of aborting the document.

pub mod classifiers;
pub mod config;
pub mod page_layout;
pub mod registry;

pub use classifiers::{create_classifier, ClassifierContext, RegionClassifier};
pub use config::{
    AssemblerConfig, ClassifierConfig, ClassifierKind, Extent, FooterCueScope, LayoutConfig,
    LayoutPreset, LineGrouping, SeparatorConfig, VerticalLineRule,
};
pub use page_layout::{PageLayout, ERROR_KEY};
pub use registry::ExtractorRegistry;

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::{json, Value};

use crate::document::{DocumentSource, JsonDocument, PageContent};
use crate::error::{Error, Result};
use crate::items::{ItemSegmenter, Question, QuestionSet};
use crate::layout::{colored_regions, Region, RegionSet, SeparatorEstimate, SeparatorLocator, TextAssembler};

/// Uniform contract for layout extractors.
///
/// Anything implementing this can be run by the extraction harness and
/// compared page by page against other strategies.
pub trait LayoutExtractor {
    /// Name used to label this extractor's results.
    fn name(&self) -> &str;

    /// Number of pages in the underlying document.
    fn page_count(&self) -> usize;

    /// Layout of one page by zero-based index.
    ///
    /// Never fails: errors are reported in the layout's metadata.
    fn layout_of_page(&mut self, index: usize) -> PageLayout;

    /// Layouts of every page in order.
    fn layout_of_all_pages(&mut self) -> Vec<PageLayout> {
        (0..self.page_count()).map(|i| self.layout_of_page(i)).collect()
    }

    /// Release the document handle.
    fn close(&mut self) -> Result<()>;
}

/// A page that could not be processed.
#[derive(Debug)]
pub struct PageFailure {
    /// 1-indexed page number
    pub page_number: u32,
    /// What went wrong
    pub error: Error,
}

/// Outcome of processing one page.
pub type PageOutcome = std::result::Result<PageLayout, PageFailure>;

/// Success/failure tally of a multi-page run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Pages attempted
    pub total: usize,
    /// Pages processed successfully
    pub succeeded: usize,
    /// Page numbers that failed
    pub failed_pages: Vec<u32>,
}

impl BatchSummary {
    /// Tally a list of outcomes.
    pub fn from_outcomes(outcomes: &[PageOutcome]) -> Self {
        let failed_pages: Vec<u32> = outcomes
            .iter()
            .filter_map(|o| o.as_ref().err().map(|f| f.page_number))
            .collect();
        Self {
            total: outcomes.len(),
            succeeded: outcomes.len() - failed_pages.len(),
            failed_pages,
        }
    }

    /// Whether every page succeeded.
    pub fn is_clean(&self) -> bool {
        self.failed_pages.is_empty()
    }
}

/// Layout pipeline over a document source.
///
/// The pipeline owns the document exclusively and releases it on
/// [`close`](LayoutExtractor::close) or, failing that, when dropped.
///
/// # Examples
///
/// ```
/// use column_oxide::document::{MemoryDocument, PageContent, RawSpan};
/// use column_oxide::elements::Drawing;
/// use column_oxide::pipeline::{ColumnLayoutPipeline, LayoutConfig, LayoutExtractor};
///
/// let page = PageContent::new(600.0, 800.0)
///     .with_drawing(Drawing::line(300.0, 200.0, 300.0, 600.0))
///     .with_span(RawSpan::new("Left text", [50.0, 300.0, 250.0, 312.0]))
///     .with_span(RawSpan::new("Right text", [350.0, 300.0, 550.0, 312.0]));
/// let doc = MemoryDocument::new("inline", vec![page]);
///
/// let mut pipeline = ColumnLayoutPipeline::new(Box::new(doc), LayoutConfig::default());
/// let layout = pipeline.layout_of_page(0);
/// assert_eq!(layout.column_separator_position, Some(300.0));
/// assert_eq!(layout.left_column, "Left text");
/// assert_eq!(layout.right_column, "Right text");
/// pipeline.close()?;
/// # Ok::<(), column_oxide::error::Error>(())
/// ```
pub struct ColumnLayoutPipeline {
    document: Box<dyn DocumentSource>,
    config: LayoutConfig,
    label: String,
    locator: SeparatorLocator,
    classifier: Box<dyn RegionClassifier>,
    assembler: TextAssembler,
    segmenter: ItemSegmenter,
}

impl ColumnLayoutPipeline {
    /// Create a pipeline over `document`.
    pub fn new(document: Box<dyn DocumentSource>, config: LayoutConfig) -> Self {
        let classifier = create_classifier(&config.classifier);
        Self {
            label: classifier.describe(),
            locator: SeparatorLocator::new(config.geometry, config.separator),
            assembler: TextAssembler::new(config.assembler),
            segmenter: ItemSegmenter::new(),
            classifier,
            document,
            config,
        }
    }

    /// Open a JSON page dump.
    pub fn open(path: impl AsRef<Path>, config: LayoutConfig) -> Result<Self> {
        let document = JsonDocument::open(path)?;
        Ok(Self::new(Box::new(document), config))
    }

    /// Open a JSON page dump with the configuration the registry selects for it.
    pub fn open_with_registry(path: impl AsRef<Path>, registry: &ExtractorRegistry) -> Result<Self> {
        let path = path.as_ref();
        let document = JsonDocument::open(path)?;
        let config = registry.config_for(path, document.signature()).clone();
        Ok(Self::new(Box::new(document), config))
    }

    /// Override the label reported by [`LayoutExtractor::name`].
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Name of the underlying document.
    pub fn document_name(&self) -> &str {
        self.document.name()
    }

    /// Layout of one page, returning the error instead of a failed layout.
    pub fn try_layout_of_page(&mut self, index: usize) -> Result<PageLayout> {
        self.process_page(index)
    }

    /// Process every page, keeping each page's success or failure.
    pub fn outcomes(&mut self) -> Vec<PageOutcome> {
        let outcomes: Vec<PageOutcome> = (0..self.document.page_count())
            .map(|index| {
                self.try_layout_of_page(index).map_err(|error| PageFailure {
                    page_number: page_number(index),
                    error,
                })
            })
            .collect();

        let summary = BatchSummary::from_outcomes(&outcomes);
        log::info!(
            "{}: {}/{} page(s) processed, {} failed",
            self.document.name(),
            summary.succeeded,
            summary.total,
            summary.failed_pages.len()
        );
        outcomes
    }

    /// Numbered items of one page, left column then right, ordered by number.
    pub fn items_of_page(&mut self, index: usize) -> Result<Vec<Question>> {
        let layout = self.try_layout_of_page(index)?;
        Ok(self
            .segmenter
            .segment_page(&layout.left_column, &layout.right_column, layout.page_number))
    }

    /// Numbered items of the whole document.
    ///
    /// Pages that fail are logged and contribute no items.
    pub fn items_of_all_pages(&mut self) -> QuestionSet {
        let mut questions = Vec::new();
        for index in 0..self.document.page_count() {
            match self.items_of_page(index) {
                Ok(items) => {
                    log::debug!("Page {}: {} item(s)", page_number(index), items.len());
                    questions.extend(items);
                },
                Err(e) => log::error!("Skipping items of page {}: {}", page_number(index), e),
            }
        }
        QuestionSet::new(self.document.name(), questions)
    }

    fn process_page(&mut self, index: usize) -> Result<PageLayout> {
        if self.document.is_closed() {
            return Err(Error::DocumentClosed);
        }
        let page_count = self.document.page_count();
        if index >= page_count {
            return Err(Error::PageOutOfRange { index, page_count });
        }

        let content = self.document.load_page(index)?;
        let spans = content.text_spans(index)?;

        let estimate = self
            .locator
            .locate(content.width, content.height, &content.drawings, &spans);
        let colored = colored_regions(
            &content.drawings,
            content.height,
            self.config.classifier.colored_region_min_top,
        );

        let mut context = ClassifierContext::new(content.width, content.height, estimate.x)
            .with_colored_regions(colored);
        if let Some((top, bottom)) = estimate.line_extent {
            context = context.with_line_extent(top, bottom);
        }

        let regions = self.classifier.classify(spans, &context);
        log::debug!(
            "Page {}: separator {:.1} ({}), header {}, left {}, right {}, footer {}",
            page_number(index),
            estimate.x,
            estimate.source.name(),
            regions.count(Region::Header),
            regions.count(Region::LeftColumn),
            regions.count(Region::RightColumn),
            regions.count(Region::Footer)
        );

        let mut layout = PageLayout {
            page_number: page_number(index),
            header: self.assembler.assemble(&regions.header),
            footer: self.assembler.assemble(&regions.footer),
            left_column: self.assembler.assemble(&regions.left_column),
            right_column: self.assembler.assemble(&regions.right_column),
            page_width: content.width,
            page_height: content.height,
            column_separator_position: Some(estimate.x),
            metadata: BTreeMap::new(),
        };
        layout.metadata = self.metadata(&content, &estimate, &regions, context.colored_regions.len());

        if self.config.extract_items {
            let items = self
                .segmenter
                .segment_page(&layout.left_column, &layout.right_column, layout.page_number);
            layout.metadata.insert("items_detected".to_string(), json!(items.len()));
        }

        Ok(layout)
    }

    fn metadata(
        &self,
        content: &PageContent,
        estimate: &SeparatorEstimate,
        regions: &RegionSet,
        colored_count: usize,
    ) -> BTreeMap<String, Value> {
        let classifier = &self.config.classifier;
        let (header_y, footer_y) = match estimate.line_extent {
            Some((top, bottom)) if classifier.kind == ClassifierKind::LineBoundary => {
                (top + classifier.boundary_margin, bottom - classifier.boundary_margin)
            },
            _ => (
                content.height * classifier.header_fraction,
                content.height * classifier.footer_fraction,
            ),
        };

        let mut metadata = BTreeMap::new();
        let mut put = |key: &str, value: Value| {
            metadata.insert(key.to_string(), value);
        };
        put("total_text_blocks", json!(regions.total()));
        put("header_blocks", json!(regions.count(Region::Header)));
        put("footer_blocks", json!(regions.count(Region::Footer)));
        put("left_column_blocks", json!(regions.count(Region::LeftColumn)));
        put("right_column_blocks", json!(regions.count(Region::RightColumn)));
        put("vertical_lines_detected", json!(estimate.vertical_lines));
        put("colored_regions_detected", json!(colored_count));
        put("has_footer", json!(regions.count(Region::Footer) > 0));
        put("header_y_boundary", json!(header_y));
        put("footer_y_boundary", json!(footer_y));
        put("separator_source", json!(estimate.source.name()));
        put("classifier", json!(self.label));
        put("page_rect", json!([0.0, 0.0, content.width, content.height]));
        metadata
    }
}

impl LayoutExtractor for ColumnLayoutPipeline {
    fn name(&self) -> &str {
        &self.label
    }

    fn page_count(&self) -> usize {
        self.document.page_count()
    }

    fn layout_of_page(&mut self, index: usize) -> PageLayout {
        match self.try_layout_of_page(index) {
            Ok(layout) => layout,
            Err(e) => {
                log::error!("Failed to process page {}: {}", page_number(index), e);
                PageLayout::failed(page_number(index), &e)
            },
        }
    }

    fn layout_of_all_pages(&mut self) -> Vec<PageLayout> {
        self.outcomes()
            .into_iter()
            .map(|outcome| match outcome {
                Ok(layout) => layout,
                Err(failure) => {
                    log::error!("Failed to process page {}: {}", failure.page_number, failure.error);
                    PageLayout::failed(failure.page_number, &failure.error)
                },
            })
            .collect()
    }

    fn close(&mut self) -> Result<()> {
        self.document.close()
    }
}

impl Drop for ColumnLayoutPipeline {
    fn drop(&mut self) {
        if !self.document.is_closed() {
            if let Err(e) = self.document.close() {
                log::warn!("Failed to close {}: {}", self.document.name(), e);
            }
        }
    }
}

fn page_number(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_add(1))
}
