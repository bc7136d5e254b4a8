//! Markdown rendering of page layouts and numbered items.

use std::fmt::Write as _;

use crate::items::QuestionSet;
use crate::pipeline::PageLayout;

/// How page layouts are laid out in Markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkdownStyle {
    /// Page marker comment, bold labels for header and footer, columns as plain paragraphs
    #[default]
    Compact,
    /// A heading per page with Header / Content / Footer sections
    Sectioned,
}

/// Converts layouts and items to Markdown.
///
/// # Examples
///
/// ```
/// use column_oxide::converters::MarkdownConverter;
/// use column_oxide::error::Error;
/// use column_oxide::pipeline::PageLayout;
///
/// let mut page = PageLayout::failed(1, &Error::DocumentClosed);
/// page.header = "Annual Report".to_string();
/// page.left_column = "Left".to_string();
///
/// let md = MarkdownConverter::new().convert_layouts(&[page]);
/// assert!(md.starts_with("<!-- Page 1 -->"));
/// assert!(md.contains("**Header:**\n\nAnnual Report"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter {
    style: MarkdownStyle,
}

impl MarkdownConverter {
    /// Create a converter with the compact style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with the given style.
    pub fn with_style(style: MarkdownStyle) -> Self {
        Self { style }
    }

    /// Render pages in reading order: header, left column, right column, footer.
    pub fn convert_layouts(&self, pages: &[PageLayout]) -> String {
        let rendered: Vec<String> = pages
            .iter()
            .map(|page| match self.style {
                MarkdownStyle::Compact => Self::compact_page(page),
                MarkdownStyle::Sectioned => Self::sectioned_page(page),
            })
            .collect();
        rendered.join("\n")
    }

    fn compact_page(page: &PageLayout) -> String {
        let mut blocks = vec![format!("<!-- Page {} -->", page.page_number), "---".to_string()];

        let header = page.header.trim();
        if !header.is_empty() {
            blocks.push(format!("**Header:**\n\n{}", header));
        }
        for column in [page.left_column.trim(), page.right_column.trim()] {
            if !column.is_empty() {
                blocks.push(column.to_string());
            }
        }
        let footer = page.footer.trim();
        if !footer.is_empty() {
            blocks.push(format!("**Footer:**\n\n{}", footer));
        }

        let mut out = blocks.join("\n\n");
        out.push('\n');
        out
    }

    fn sectioned_page(page: &PageLayout) -> String {
        let columns: Vec<&str> = [page.left_column.trim(), page.right_column.trim()]
            .into_iter()
            .filter(|c| !c.is_empty())
            .collect();

        let mut out = String::new();
        let _ = writeln!(out, "---\n\n# Page {}\n", page.page_number);
        let _ = writeln!(out, "## Header\n\n{}\n", page.header.trim());
        let _ = writeln!(out, "### Page {} Content\n\n{}\n", page.page_number, columns.join("\n\n"));
        let _ = writeln!(out, "## Footer\n\n{}", page.footer.trim());
        out
    }

    /// Render numbered items with a heading each and a page/column note.
    pub fn convert_questions(&self, set: &QuestionSet, title: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# {}\n", title);
        let _ = writeln!(out, "**Source:** {}\n", set.source);
        let _ = writeln!(out, "**Total Questions:** {}\n", set.total_questions);
        out.push_str("---\n\n");

        for q in &set.questions {
            let _ = writeln!(out, "## Question {}\n", q.number);
            let _ = writeln!(out, "{}\n", q.text);
            let _ = writeln!(out, "*Page: {}, Column: {}*\n", q.page_number, q.column);
            out.push_str("---\n\n");
        }
        out
    }
}
