//! Extraction harness for snapshot testing and strategy comparison.
//!
//! Any [`LayoutExtractor`] can be driven over a page selection; the
//! path-based helpers build a [`ColumnLayoutPipeline`] per configuration,
//! validate inputs before opening the document, and always close it.

mod pages;
mod snapshot;

pub use pages::{PageRange, PageSelection};
pub use snapshot::{normalize_layout_for_snapshot, ExtractionResult};

use std::collections::BTreeMap;
use std::path::Path;

use indexmap::IndexMap;
use serde_json::json;

use crate::error::{Error, Result};
use crate::pipeline::{ColumnLayoutPipeline, LayoutConfig, LayoutExtractor, PageLayout};

/// Run `extractor` over 1-indexed `pages` without closing it.
pub fn run_extractor(extractor: &mut dyn LayoutExtractor, source: &str, pages: &[u32]) -> ExtractionResult {
    let layouts: Vec<_> = pages
        .iter()
        .map(|&page| match page.checked_sub(1) {
            Some(index) => extractor.layout_of_page(index as usize),
            None => PageLayout::failed(page, &Error::InvalidPageSelection("page 0".to_string())),
        })
        .collect();
    let failed: Vec<u32> = layouts
        .iter()
        .filter(|l| l.is_failed())
        .map(|l| l.page_number)
        .collect();

    let mut metadata = BTreeMap::new();
    metadata.insert("requested_pages".to_string(), json!(pages));
    metadata.insert("extracted_pages".to_string(), json!(layouts.len()));
    metadata.insert("failed_pages".to_string(), json!(failed));

    ExtractionResult::new(source, extractor.name(), layouts, metadata)
}

/// Extract selected pages of a page dump with one configuration.
///
/// The document must exist and the selection must be valid before the
/// document is opened. The document is closed even when extraction reports
/// failed pages.
pub fn extract_with_implementation(
    path: impl AsRef<Path>,
    pages: &PageSelection,
    config: &LayoutConfig,
) -> Result<ExtractionResult> {
    let path = path.as_ref();
    ensure_exists(path)?;
    let page_numbers = pages.to_pages()?;

    let mut pipeline = ColumnLayoutPipeline::open(path, config.clone())?;
    let result = run_extractor(&mut pipeline, &path.display().to_string(), &page_numbers);
    pipeline.close()?;
    Ok(result)
}

/// Extract every page of a page dump with one configuration.
pub fn extract_all_pages(path: impl AsRef<Path>, config: &LayoutConfig) -> Result<ExtractionResult> {
    let path = path.as_ref();
    ensure_exists(path)?;

    let mut pipeline = ColumnLayoutPipeline::open(path, config.clone())?;
    let layouts = pipeline.layout_of_all_pages();
    let failed = layouts.iter().filter(|l| l.is_failed()).count();

    let mut metadata = BTreeMap::new();
    metadata.insert("extraction_mode".to_string(), json!("all_pages"));
    metadata.insert("extracted_pages".to_string(), json!(layouts.len()));
    metadata.insert("failed_page_count".to_string(), json!(failed));

    let result = ExtractionResult::new(path.display().to_string(), pipeline.name(), layouts, metadata);
    pipeline.close()?;
    Ok(result)
}

/// Run several configurations over the same pages.
///
/// Results are keyed by the given labels in the order supplied.
pub fn compare_extractors(
    path: impl AsRef<Path>,
    pages: &PageSelection,
    configs: &[(&str, LayoutConfig)],
) -> Result<IndexMap<String, ExtractionResult>> {
    let path = path.as_ref();
    ensure_exists(path)?;
    let page_numbers = pages.to_pages()?;

    let mut results = IndexMap::new();
    for (label, config) in configs {
        let mut pipeline = ColumnLayoutPipeline::open(path, config.clone())?.with_label(*label);
        let result = run_extractor(&mut pipeline, &path.display().to_string(), &page_numbers);
        pipeline.close()?;
        log::info!("{}: {} page(s), {} failed", label, result.total_pages, result.failed_pages());
        results.insert(label.to_string(), result);
    }
    Ok(results)
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::DocumentNotFound(path.to_path_buf()))
    }
}
