//! Splitting assembled column text into numbered items.

use regex::Regex;
use std::sync::OnceLock;

use super::{Column, Question};

// Optional "Q"/"Q." prefix, digits, "." or ")", then whitespace, at a line start
static NUMBERING_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn get_numbering_regex() -> Option<&'static Regex> {
    NUMBERING_REGEX
        .get_or_init(|| Regex::new(r"(?m)(?:^|\n)\s*(?:Q\.?\s*)?(\d+)[.)]\s+").ok())
        .as_ref()
}

/// Splits column text into numbered items.
///
/// Numeric list markers or citations at a line start inside an item's body
/// are indistinguishable from item numbers and will open a new item.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemSegmenter;

impl ItemSegmenter {
    /// Create a segmenter.
    pub fn new() -> Self {
        Self
    }

    /// Split `text` into items.
    ///
    /// Each numbering marker opens an item that runs until the next marker or
    /// the end of the text. Text with no marker yields no items. Duplicate
    /// numbers are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use column_oxide::items::{Column, ItemSegmenter};
    ///
    /// let items = ItemSegmenter::new().segment("1. Alpha\n2) Beta", Column::Left, 1);
    /// assert_eq!(items.len(), 2);
    /// assert_eq!(items[1].number, 2);
    /// assert_eq!(items[1].text, "2) Beta");
    /// ```
    pub fn segment(&self, text: &str, column: Column, page_number: u32) -> Vec<Question> {
        let Some(re) = get_numbering_regex() else {
            return Vec::new();
        };

        let markers: Vec<(usize, u32, &str)> = re
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let digits = caps.get(1)?.as_str();
                match digits.parse::<u32>() {
                    Ok(number) => Some((whole.start(), number, whole.as_str())),
                    Err(_) => {
                        log::warn!("Skipping item marker with unusable number {:?}", digits);
                        None
                    },
                }
            })
            .collect();

        markers
            .iter()
            .enumerate()
            .map(|(i, &(start, number, raw))| {
                let end = markers.get(i + 1).map_or(text.len(), |next| next.0);
                Question {
                    number,
                    text: text[start..end].trim().to_string(),
                    page_number,
                    column,
                    bbox: None,
                    raw_match: raw.to_string(),
                }
            })
            .collect()
    }

    /// Segment both columns of a page and merge them into reading order.
    pub fn segment_page(&self, left_text: &str, right_text: &str, page_number: u32) -> Vec<Question> {
        merge_columns(
            self.segment(left_text, Column::Left, page_number),
            self.segment(right_text, Column::Right, page_number),
        )
    }
}

/// Merge the items of one page.
///
/// Left column items (ascending) come before right column items
/// (ascending); a final stable sort by number settles items whose numbering
/// runs across the column boundary.
pub fn merge_columns(mut left: Vec<Question>, mut right: Vec<Question>) -> Vec<Question> {
    left.sort_by_key(|q| q.number);
    right.sort_by_key(|q| q.number);
    left.append(&mut right);
    left.sort_by_key(|q| q.number);
    left
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_markers() {
        let segmenter = ItemSegmenter::new();
        assert!(segmenter.segment("", Column::Left, 1).is_empty());
        assert!(segmenter.segment("Plain prose with 3 numbers.", Column::Left, 1).is_empty());
    }

    #[test]
    fn test_marker_variants() {
        let text = "Q1. First\nQ. 2) Second\n  3. Third\ncontinued";
        let items = ItemSegmenter::new().segment(text, Column::Right, 4);

        let numbers: Vec<u32> = items.iter().map(|q| q.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(items[0].text, "Q1. First");
        assert_eq!(items[2].text, "3. Third\ncontinued");
        assert_eq!(items[2].page_number, 4);
        assert_eq!(items[2].column, Column::Right);
    }

    #[test]
    fn test_raw_match_recorded() {
        let items = ItemSegmenter::new().segment("Intro\n7. Seven", Column::Left, 1);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].raw_match, "\n7. ");
        assert_eq!(items[0].text, "7. Seven");
    }

    #[test]
    fn test_duplicates_kept() {
        let items = ItemSegmenter::new().segment("1. a\n1. b", Column::Left, 1);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text, "1. a");
        assert_eq!(items[1].text, "1. b");
    }

    #[test]
    fn test_overflowing_number_skipped() {
        let items = ItemSegmenter::new().segment("99999999999. huge\n2. small", Column::Left, 1);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].number, 2);
    }

    #[test]
    fn test_merge_orders_by_number() {
        let segmenter = ItemSegmenter::new();
        let left = segmenter.segment("2. Two\n4. Four", Column::Left, 1);
        let right = segmenter.segment("1. One\n3. Three", Column::Right, 1);
        let merged = merge_columns(left, right);

        let numbers: Vec<u32> = merged.iter().map(|q| q.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(merged[0].column, Column::Right);
    }

    #[test]
    fn test_segment_page() {
        let items = ItemSegmenter::new().segment_page("1. Alpha\n2. Beta", "3. Gamma", 1);
        let texts: Vec<&str> = items.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["1. Alpha", "2. Beta", "3. Gamma"]);
    }
}
