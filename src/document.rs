//! Document sources.
//!
//! The layout engine never parses file formats itself. A [`DocumentSource`]
//! hands over one page at a time as [`PageContent`]: the raw span records and
//! drawings an upstream parser produced. Two sources are provided, an
//! in-memory document and a JSON page dump on disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::elements::Drawing;
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::layout::{TextSpan, UNKNOWN_FONT_SIZE};

/// A span record as emitted by the upstream parser, not yet validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSpan {
    /// Text content
    pub text: String,
    /// Bounding box, expected as `[x0, y0, x1, y1]`
    pub bbox: Vec<f32>,
    /// Font size when known
    #[serde(default)]
    pub font_size: Option<f32>,
    /// Font name when known
    #[serde(default)]
    pub font_name: Option<String>,
    /// Upstream block type label
    #[serde(default)]
    pub block_type: Option<String>,
}

impl RawSpan {
    /// Create a record from text and a box.
    pub fn new(text: impl Into<String>, bbox: [f32; 4]) -> Self {
        Self {
            text: text.into(),
            bbox: bbox.to_vec(),
            font_size: None,
            font_name: None,
            block_type: None,
        }
    }
}

/// Everything the parser produced for one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    /// Page width in page units
    pub width: f32,
    /// Page height in page units
    pub height: f32,
    /// Span records in parser order
    #[serde(default)]
    pub spans: Vec<RawSpan>,
    /// Vector drawings
    #[serde(default)]
    pub drawings: Vec<Drawing>,
}

impl PageContent {
    /// Create an empty page.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Add a span record.
    pub fn with_span(mut self, span: RawSpan) -> Self {
        self.spans.push(span);
        self
    }

    /// Add a drawing.
    pub fn with_drawing(mut self, drawing: Drawing) -> Self {
        self.drawings.push(drawing);
        self
    }

    /// Page rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_points(0.0, 0.0, self.width, self.height)
    }

    /// Validate span records and convert them to [`TextSpan`]s.
    ///
    /// Whitespace-only records are dropped. A record whose box does not have
    /// four finite coordinates fails the whole page, as does a page without
    /// a usable size.
    pub fn text_spans(&self, page_index: usize) -> Result<Vec<TextSpan>> {
        let page = page_index as u32 + 1;

        if !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0) {
            return Err(Error::Parser(format!(
                "page {} has unusable size {}x{}",
                page, self.width, self.height
            )));
        }

        let mut spans = Vec::with_capacity(self.spans.len());
        for (i, raw) in self.spans.iter().enumerate() {
            if raw.text.trim().is_empty() {
                continue;
            }

            let &[x0, y0, x1, y1] = raw.bbox.as_slice() else {
                return Err(Error::MalformedSpan {
                    page,
                    reason: format!("span {} has {} bbox coordinates", i, raw.bbox.len()),
                });
            };
            if !(x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite()) {
                return Err(Error::MalformedSpan {
                    page,
                    reason: format!("span {} has non-finite bbox coordinates", i),
                });
            }

            let mut span = TextSpan::new(raw.text.clone(), Rect::from_points(x0, y0, x1, y1))
                .with_font(
                    raw.font_name.clone().unwrap_or_else(|| "unknown".to_string()),
                    raw.font_size.unwrap_or(UNKNOWN_FONT_SIZE),
                )
                .on_page(page_index);
            if let Some(block_type) = &raw.block_type {
                span = span.with_block_type(block_type.clone());
            }
            spans.push(span);
        }

        Ok(spans)
    }
}

/// A page entry of a dump: either content or the parser's failure message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageEntry {
    /// The parser failed on this page
    Failed {
        /// Failure description
        error: String,
    },
    /// Parsed page content
    Content(PageContent),
}

impl From<PageContent> for PageEntry {
    fn from(content: PageContent) -> Self {
        PageEntry::Content(content)
    }
}

/// Upstream parser handle, one page at a time.
///
/// The pipeline owns its source exclusively; `load_page` takes `&mut self`
/// so non-reentrant parsers need no interior locking.
pub trait DocumentSource: Send {
    /// Display name (usually the file path).
    fn name(&self) -> &str;

    /// Number of pages.
    fn page_count(&self) -> usize;

    /// Load one page by zero-based index.
    fn load_page(&mut self, index: usize) -> Result<PageContent>;

    /// Content signature used to select a layout strategy, when known.
    fn signature(&self) -> Option<&str> {
        None
    }

    /// Release the underlying handle. Closing twice is a no-op.
    fn close(&mut self) -> Result<()>;

    /// Whether the handle has been released.
    fn is_closed(&self) -> bool;
}

/// Document held entirely in memory.
///
/// # Examples
///
/// ```
/// use column_oxide::document::{DocumentSource, MemoryDocument, PageContent, RawSpan};
///
/// let page = PageContent::new(600.0, 800.0).with_span(RawSpan::new("Hi", [10.0, 10.0, 30.0, 20.0]));
/// let mut doc = MemoryDocument::new("inline", vec![page]);
///
/// assert_eq!(doc.page_count(), 1);
/// assert_eq!(doc.load_page(0)?.spans.len(), 1);
/// # Ok::<(), column_oxide::error::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    name: String,
    signature: Option<String>,
    pages: Vec<PageEntry>,
    closed: bool,
}

impl MemoryDocument {
    /// Create a document from parsed pages.
    pub fn new(name: impl Into<String>, pages: Vec<PageContent>) -> Self {
        Self::from_entries(name, pages.into_iter().map(PageEntry::from).collect())
    }

    /// Create a document from dump entries, failed pages included.
    pub fn from_entries(name: impl Into<String>, pages: Vec<PageEntry>) -> Self {
        Self {
            name: name.into(),
            signature: None,
            pages,
            closed: false,
        }
    }

    /// Set the content signature.
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    /// Mark a page as one the parser fails on.
    pub fn with_failed_page(mut self, index: usize, error: impl Into<String>) -> Self {
        if let Some(entry) = self.pages.get_mut(index) {
            *entry = PageEntry::Failed { error: error.into() };
        }
        self
    }
}

impl DocumentSource for MemoryDocument {
    fn name(&self) -> &str {
        &self.name
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn load_page(&mut self, index: usize) -> Result<PageContent> {
        if self.closed {
            return Err(Error::DocumentClosed);
        }
        match self.pages.get(index) {
            Some(PageEntry::Content(content)) => Ok(content.clone()),
            Some(PageEntry::Failed { error }) => Err(Error::Parser(error.clone())),
            None => Err(Error::PageOutOfRange {
                index,
                page_count: self.pages.len(),
            }),
        }
    }

    fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    fn close(&mut self) -> Result<()> {
        if !self.closed {
            log::debug!("Closing document {}", self.name);
            self.closed = true;
        }
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

/// On-disk page dump format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentDump {
    /// Content signature, e.g. a producer string or hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    /// Pages in order
    #[serde(default)]
    pub pages: Vec<PageEntry>,
}

/// A JSON page dump opened from disk.
#[derive(Debug, Clone)]
pub struct JsonDocument {
    path: PathBuf,
    inner: MemoryDocument,
}

impl JsonDocument {
    /// Open a page dump.
    ///
    /// Fails with [`Error::DocumentNotFound`] when the file does not exist and
    /// with a JSON error when it is not a valid dump.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::DocumentNotFound(path.to_path_buf()));
        }

        let data = fs::read_to_string(path)?;
        let dump: DocumentDump = serde_json::from_str(&data)?;
        log::debug!("Opened {} with {} page(s)", path.display(), dump.pages.len());

        let mut inner = MemoryDocument::from_entries(path.display().to_string(), dump.pages);
        if let Some(signature) = dump.signature {
            inner = inner.with_signature(signature);
        }

        Ok(Self {
            path: path.to_path_buf(),
            inner,
        })
    }

    /// Path the dump was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for JsonDocument {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn page_count(&self) -> usize {
        self.inner.page_count()
    }

    fn load_page(&mut self, index: usize) -> Result<PageContent> {
        self.inner.load_page(index)
    }

    fn signature(&self) -> Option<&str> {
        self.inner.signature()
    }

    fn close(&mut self) -> Result<()> {
        self.inner.close()
    }

    fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_spans_drop_whitespace() {
        let page = PageContent::new(600.0, 800.0)
            .with_span(RawSpan::new("  ", [0.0, 0.0, 10.0, 10.0]))
            .with_span(RawSpan::new("word", [50.0, 20.0, 10.0, 10.0]));

        let spans = page.text_spans(2).unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].page_index, 2);
        // Box normalized
        assert_eq!(spans[0].bbox, Rect::from_points(10.0, 10.0, 50.0, 20.0));
        assert_eq!(spans[0].font_size, UNKNOWN_FONT_SIZE);
    }

    #[test]
    fn test_text_spans_reject_bad_arity() {
        let mut raw = RawSpan::new("bad", [0.0, 0.0, 1.0, 1.0]);
        raw.bbox.pop();
        let page = PageContent::new(600.0, 800.0).with_span(raw);

        match page.text_spans(0) {
            Err(Error::MalformedSpan { page, reason }) => {
                assert_eq!(page, 1);
                assert!(reason.contains("3 bbox coordinates"));
            },
            other => panic!("expected MalformedSpan, got {:?}", other),
        }
    }

    #[test]
    fn test_text_spans_reject_nan() {
        let page = PageContent::new(600.0, 800.0).with_span(RawSpan::new("bad", [f32::NAN, 0.0, 1.0, 1.0]));
        assert!(matches!(page.text_spans(0), Err(Error::MalformedSpan { .. })));
    }

    #[test]
    fn test_text_spans_reject_zero_size_page() {
        let page = PageContent::new(0.0, 800.0);
        assert!(matches!(page.text_spans(0), Err(Error::Parser(_))));
    }

    #[test]
    fn test_memory_document_errors() {
        let mut doc = MemoryDocument::new("doc", vec![PageContent::new(600.0, 800.0), PageContent::new(600.0, 800.0)])
            .with_failed_page(1, "broken xref");

        assert!(doc.load_page(0).is_ok());
        assert!(matches!(doc.load_page(1), Err(Error::Parser(msg)) if msg == "broken xref"));
        assert!(matches!(doc.load_page(5), Err(Error::PageOutOfRange { index: 5, page_count: 2 })));

        doc.close().unwrap();
        doc.close().unwrap();
        assert!(doc.is_closed());
        assert!(matches!(doc.load_page(0), Err(Error::DocumentClosed)));
    }

    #[test]
    fn test_dump_entries_deserialize() {
        let json = r#"{
            "signature": "exam-2025",
            "pages": [
                {"width": 600, "height": 800, "spans": [{"text": "A", "bbox": [1, 2, 3, 4], "font_size": 10.0}]},
                {"error": "cannot decode page"}
            ]
        }"#;
        let dump: DocumentDump = serde_json::from_str(json).unwrap();

        assert_eq!(dump.signature.as_deref(), Some("exam-2025"));
        match &dump.pages[0] {
            PageEntry::Content(page) => {
                assert_eq!(page.spans[0].font_size, Some(10.0));
                assert!(page.drawings.is_empty());
            },
            other => panic!("expected content, got {:?}", other),
        }
        assert!(matches!(&dump.pages[1], PageEntry::Failed { .. }));
    }

    #[test]
    fn test_json_document_missing_file() {
        let result = JsonDocument::open("/definitely/not/here.json");
        assert!(matches!(result, Err(Error::DocumentNotFound(_))));
    }
}
