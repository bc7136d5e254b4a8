//! Page regions and the per-page region assignment.

use crate::layout::TextSpan;

/// One of the four reading regions of a two-column page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    /// Running header above the columns
    Header,
    /// Left reading column
    LeftColumn,
    /// Right reading column
    RightColumn,
    /// Running footer below the columns
    Footer,
}

impl Region {
    /// All regions in reading order.
    pub const READING_ORDER: [Region; 4] = [
        Region::Header,
        Region::LeftColumn,
        Region::RightColumn,
        Region::Footer,
    ];

    /// Stable snake_case name.
    pub fn name(&self) -> &'static str {
        match self {
            Region::Header => "header",
            Region::LeftColumn => "left_column",
            Region::RightColumn => "right_column",
            Region::Footer => "footer",
        }
    }
}

/// Vertical band a classifier may assign before the column split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// Top of the page
    Header,
    /// Bottom of the page
    Footer,
}

impl From<Band> for Region {
    fn from(band: Band) -> Self {
        match band {
            Band::Header => Region::Header,
            Band::Footer => Region::Footer,
        }
    }
}

/// Spans of one page split into the four regions.
///
/// Every input span lands in exactly one region; relative input order is
/// preserved within each region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionSet {
    /// Header spans
    pub header: Vec<TextSpan>,
    /// Footer spans
    pub footer: Vec<TextSpan>,
    /// Left column spans
    pub left_column: Vec<TextSpan>,
    /// Right column spans
    pub right_column: Vec<TextSpan>,
}

impl RegionSet {
    /// Append a span to a region.
    pub fn push(&mut self, region: Region, span: TextSpan) {
        self.get_mut(region).push(span);
    }

    /// Spans of a region.
    pub fn get(&self, region: Region) -> &[TextSpan] {
        match region {
            Region::Header => &self.header,
            Region::Footer => &self.footer,
            Region::LeftColumn => &self.left_column,
            Region::RightColumn => &self.right_column,
        }
    }

    fn get_mut(&mut self, region: Region) -> &mut Vec<TextSpan> {
        match region {
            Region::Header => &mut self.header,
            Region::Footer => &mut self.footer,
            Region::LeftColumn => &mut self.left_column,
            Region::RightColumn => &mut self.right_column,
        }
    }

    /// Number of spans in a region.
    pub fn count(&self, region: Region) -> usize {
        self.get(region).len()
    }

    /// Total number of spans over all regions.
    pub fn total(&self) -> usize {
        Region::READING_ORDER.iter().map(|r| self.count(*r)).sum()
    }

    /// Whether no region holds a span.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterate `(region, span)` pairs in reading order.
    pub fn iter(&self) -> impl Iterator<Item = (Region, &TextSpan)> + '_ {
        Region::READING_ORDER
            .into_iter()
            .flat_map(move |region| self.get(region).iter().map(move |span| (region, span)))
    }
}
