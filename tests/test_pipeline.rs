//! End-to-end tests over JSON page dumps on disk.

use std::fs;
use std::path::{Path, PathBuf};

use column_oxide::document::{DocumentSource, JsonDocument};
use column_oxide::error::Error;
use column_oxide::pipeline::{
    ClassifierKind, ColumnLayoutPipeline, ExtractorRegistry, LayoutConfig, LayoutExtractor, LayoutPreset,
};
use column_oxide::tester::{compare_extractors, extract_all_pages, extract_with_implementation, PageSelection};
use serde_json::json;
use tempfile::TempDir;

fn ruled_page() -> serde_json::Value {
    json!({
        "width": 600.0,
        "height": 800.0,
        "spans": [
            { "text": "Quarterly Review", "bbox": [220.0, 30.0, 380.0, 46.0] },
            { "text": "1. Revenue grew.", "bbox": [40.0, 250.0, 270.0, 262.0], "font_size": 10.0, "font_name": "Helvetica" },
            { "text": "2. Costs fell.", "bbox": [40.0, 280.0, 270.0, 292.0] },
            { "text": "3. Outlook stable.", "bbox": [330.0, 250.0, 560.0, 262.0] },
            { "text": "Page 4", "bbox": [280.0, 770.0, 320.0, 782.0] }
        ],
        "drawings": [
            { "items": [ { "op": "l", "coords": [300.0, 100.0, 300.0, 700.0] } ] },
            { "items": [ { "op": "l", "coords": [300.0, 100.0] } ] }
        ]
    })
}

fn write_dump(dir: &TempDir, name: &str, dump: serde_json::Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string_pretty(&dump).unwrap()).unwrap();
    path
}

fn three_page_dump(dir: &TempDir) -> PathBuf {
    write_dump(
        dir,
        "report.json",
        json!({
            "signature": "acme-quarterly",
            "pages": [
                ruled_page(),
                { "error": "content stream is truncated" },
                ruled_page()
            ]
        }),
    )
}

#[test]
fn test_open_json_document() {
    let dir = TempDir::new().unwrap();
    let path = three_page_dump(&dir);

    let mut doc = JsonDocument::open(&path).unwrap();
    assert_eq!(doc.page_count(), 3);
    assert_eq!(doc.signature(), Some("acme-quarterly"));
    assert_eq!(doc.path(), path.as_path());
    assert_eq!(doc.load_page(0).unwrap().spans.len(), 5);
    assert!(matches!(doc.load_page(1), Err(Error::Parser(_))));

    doc.close().unwrap();
    assert!(matches!(doc.load_page(0), Err(Error::DocumentClosed)));
}

#[test]
fn test_missing_document() {
    let result = JsonDocument::open("/definitely/not/here.json");
    assert!(matches!(result, Err(Error::DocumentNotFound(_))));

    let result = ColumnLayoutPipeline::open("/definitely/not/here.json", LayoutConfig::default());
    assert!(matches!(result, Err(Error::DocumentNotFound(_))));
}

#[test]
fn test_failed_page_does_not_abort_run() {
    let dir = TempDir::new().unwrap();
    let path = three_page_dump(&dir);

    let mut pipeline = ColumnLayoutPipeline::open(&path, LayoutConfig::default()).unwrap();
    let layouts = pipeline.layout_of_all_pages();
    pipeline.close().unwrap();

    assert_eq!(layouts.len(), 3);
    assert!(!layouts[0].is_failed());
    assert!(layouts[1].is_failed());
    assert_eq!(layouts[1].page_number, 2);
    assert_eq!(layouts[1].column_separator_position, None);
    assert!(layouts[1].error().unwrap().contains("content stream is truncated"));
    assert!(!layouts[2].is_failed());

    // Ruled page: header above the rule, footer below it, malformed line skipped
    let page = &layouts[0];
    assert_eq!(page.header, "Quarterly Review");
    assert_eq!(page.footer, "Page 4");
    assert_eq!(page.left_column, "1. Revenue grew.\n2. Costs fell.");
    assert_eq!(page.right_column, "3. Outlook stable.");
    assert_eq!(page.count("vertical_lines_detected"), Some(1));
}

#[test]
fn test_malformed_span_fails_only_its_page() {
    let dir = TempDir::new().unwrap();
    let path = write_dump(
        &dir,
        "broken.json",
        json!({
            "pages": [
                { "width": 600.0, "height": 800.0, "spans": [ { "text": "bad", "bbox": [1.0, 2.0, 3.0] } ] },
                ruled_page()
            ]
        }),
    );

    let result = extract_all_pages(&path, &LayoutConfig::default()).unwrap();
    assert_eq!(result.total_pages, 2);
    assert_eq!(result.failed_pages(), 1);
    assert!(result.pages[0].error().unwrap().contains("Malformed span on page 1"));
    assert_eq!(result.metadata["extraction_mode"], "all_pages");
    assert_eq!(result.metadata["failed_page_count"], 1);
}

#[test]
fn test_extract_selected_pages() {
    let dir = TempDir::new().unwrap();
    let path = three_page_dump(&dir);

    let selection: PageSelection = "3,1".parse().unwrap();
    let result = extract_with_implementation(&path, &selection, &LayoutConfig::default()).unwrap();

    assert_eq!(result.total_pages, 2);
    assert_eq!(result.pages[0].page_number, 1);
    assert_eq!(result.pages[1].page_number, 3);
    assert_eq!(result.metadata["requested_pages"], json!([1, 3]));

    let value = result.to_value(true).unwrap();
    assert_eq!(value["pages"][0]["column_separator_position"], json!(300.0));
}

#[test]
fn test_invalid_selection_rejected_before_extraction() {
    let dir = TempDir::new().unwrap();
    let path = three_page_dump(&dir);

    let result = extract_with_implementation(&path, &PageSelection::List(vec![2, 0]), &LayoutConfig::default());
    assert!(matches!(result, Err(Error::InvalidPageSelection(_))));
}

#[test]
fn test_compare_strategies() {
    let dir = TempDir::new().unwrap();
    let path = three_page_dump(&dir);

    let configs = [
        ("ruled", LayoutPreset::LineBoundary.create_config()),
        ("percentage", LayoutConfig::default().with_classifier_kind(ClassifierKind::Percentage)),
        ("keyword", LayoutConfig::default().with_classifier_kind(ClassifierKind::Keyword)),
    ];
    let results = compare_extractors(&path, &PageSelection::Single(1), &configs).unwrap();

    let labels: Vec<&str> = results.keys().map(String::as_str).collect();
    assert_eq!(labels, vec!["ruled", "percentage", "keyword"]);
    for (label, result) in &results {
        assert_eq!(&result.extractor, label);
        assert_eq!(result.pages[0].right_column, "3. Outlook stable.");
    }
    assert_eq!(results["percentage"].pages[0].footer, "Page 4");
}

#[test]
fn test_snapshot_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = three_page_dump(&dir);

    let result = extract_with_implementation(&path, &PageSelection::Single(1), &LayoutConfig::default()).unwrap();
    let snapshot = dir.path().join("snapshots").join("report.json");
    result.save_to_file(&snapshot, true).unwrap();

    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&snapshot).unwrap()).unwrap();
    assert_eq!(saved["total_pages"], 1);
    assert_eq!(saved["pages"][0]["header"], "Quarterly Review");
    assert_eq!(saved["pages"][0]["metadata"]["separator_source"], "geometry");
    assert_eq!(saved["pages"][0]["page_width"], json!(600.0));
}

#[test]
fn test_registry_selects_by_signature_then_name() {
    let dir = TempDir::new().unwrap();
    let path = three_page_dump(&dir);

    let mut registry = ExtractorRegistry::new(LayoutConfig::default());
    registry
        .register_preset("report.json", LayoutPreset::Percentage)
        .register_signature("acme-quarterly", LayoutPreset::QuestionPaper.create_config());
    assert_eq!(registry.len(), 2);

    let mut pipeline = ColumnLayoutPipeline::open_with_registry(&path, &registry).unwrap();
    assert_eq!(pipeline.config().classifier.kind, ClassifierKind::Keyword);
    assert_eq!(pipeline.name(), "keyword");

    let set = pipeline.items_of_all_pages();
    // Two good pages, three items each; the failed page contributes none
    assert_eq!(set.total_questions, 6);
    pipeline.close().unwrap();

    let by_name = registry.config_for(Path::new("/elsewhere/report.json"), None);
    assert_eq!(by_name.classifier.kind, ClassifierKind::Percentage);
    let fallback = registry.config_for(Path::new("other.json"), Some("unknown"));
    assert_eq!(fallback.classifier.kind, ClassifierKind::LineBoundary);
}
