//! Error types for layout extraction.
//!
//! Input errors (missing documents, bad page selections) are returned before any
//! extraction work starts. Per-page errors are isolated by the pipeline and never
//! abort a multi-page run.

use std::path::PathBuf;

/// Result type alias for layout extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during layout extraction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document to process does not exist
    #[error("Document not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    /// Page selection argument could not be parsed or is out of bounds
    #[error("Invalid page selection: {0}")]
    InvalidPageSelection(String),

    /// Requested page index is past the end of the document
    #[error("Page index {index} out of range (document has {page_count} pages)")]
    PageOutOfRange {
        /// Zero-based index that was requested
        index: usize,
        /// Number of pages in the document
        page_count: usize,
    },

    /// A span record from the parser could not be converted
    #[error("Malformed span on page {page}: {reason}")]
    MalformedSpan {
        /// 1-indexed page number
        page: u32,
        /// What was wrong with the record
        reason: String,
    },

    /// Strategy or preset name not recognized
    #[error("Unknown layout strategy: {0}")]
    UnknownStrategy(String),

    /// The external parser failed on a page
    #[error("Parser error: {0}")]
    Parser(String),

    /// Operation attempted after the document handle was released
    #[error("Document handle is closed")]
    DocumentClosed,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_not_found_error() {
        let err = Error::DocumentNotFound(PathBuf::from("missing/paper.json"));
        let msg = format!("{}", err);
        assert!(msg.contains("Document not found"));
        assert!(msg.contains("paper.json"));
    }

    #[test]
    fn test_page_out_of_range_error() {
        let err = Error::PageOutOfRange {
            index: 7,
            page_count: 3,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("7"));
        assert!(msg.contains("3 pages"));
    }

    #[test]
    fn test_malformed_span_error() {
        let err = Error::MalformedSpan {
            page: 2,
            reason: "bbox has 3 coordinates".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("page 2"));
        assert!(msg.contains("3 coordinates"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
