//! Page selection arguments.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Inclusive range of 1-indexed pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    start: u32,
    end: u32,
}

impl PageRange {
    /// Create a range, rejecting page 0 and inverted bounds.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start < 1 {
            return Err(Error::InvalidPageSelection(format!(
                "page numbers must be >= 1, got {}",
                start
            )));
        }
        if end < start {
            return Err(Error::InvalidPageSelection(format!(
                "end page {} is before start page {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    /// First page.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Last page (inclusive).
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Every page in the range.
    pub fn to_pages(&self) -> Vec<u32> {
        (self.start..=self.end).collect()
    }
}

/// Which pages to extract.
///
/// All forms reduce to an ascending list of distinct 1-indexed page numbers.
///
/// # Examples
///
/// ```
/// use column_oxide::tester::PageSelection;
///
/// let pages: PageSelection = "5,1,3,1".parse()?;
/// assert_eq!(pages.to_pages()?, vec![1, 3, 5]);
///
/// let pages: PageSelection = "2-4".parse()?;
/// assert_eq!(pages.to_pages()?, vec![2, 3, 4]);
/// # Ok::<(), column_oxide::error::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSelection {
    /// One page
    Single(u32),
    /// Specific pages, any order, duplicates allowed
    List(Vec<u32>),
    /// Inclusive range
    Range(PageRange),
}

impl PageSelection {
    /// Canonical page list.
    pub fn to_pages(&self) -> Result<Vec<u32>> {
        match self {
            PageSelection::Single(page) => {
                if *page < 1 {
                    return Err(Error::InvalidPageSelection(format!(
                        "page number must be >= 1, got {}",
                        page
                    )));
                }
                Ok(vec![*page])
            },
            PageSelection::List(pages) => {
                if pages.iter().any(|p| *p < 1) {
                    return Err(Error::InvalidPageSelection(
                        "all page numbers must be >= 1".to_string(),
                    ));
                }
                let mut pages = pages.clone();
                pages.sort_unstable();
                pages.dedup();
                Ok(pages)
            },
            PageSelection::Range(range) => Ok(range.to_pages()),
        }
    }
}

fn parse_page(s: &str, whole: &str) -> Result<u32> {
    s.trim()
        .parse::<u32>()
        .map_err(|_| Error::InvalidPageSelection(format!("invalid page number {:?} in {:?}", s.trim(), whole)))
}

impl FromStr for PageSelection {
    type Err = Error;

    /// Parse `"n"`, `"a-b"` or `"a,b,c"`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.contains(',') {
            let pages = s
                .split(',')
                .map(|p| parse_page(p, s))
                .collect::<Result<Vec<_>>>()?;
            Ok(PageSelection::List(pages))
        } else if let Some((start, end)) = s.split_once('-') {
            let range = PageRange::new(parse_page(start, s)?, parse_page(end, s)?)?;
            Ok(PageSelection::Range(range))
        } else {
            Ok(PageSelection::Single(parse_page(s, s)?))
        }
    }
}

impl From<u32> for PageSelection {
    fn from(page: u32) -> Self {
        PageSelection::Single(page)
    }
}

impl From<Vec<u32>> for PageSelection {
    fn from(pages: Vec<u32>) -> Self {
        PageSelection::List(pages)
    }
}

impl From<PageRange> for PageSelection {
    fn from(range: PageRange) -> Self {
        PageSelection::Range(range)
    }
}

impl fmt::Display for PageSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSelection::Single(page) => write!(f, "{}", page),
            PageSelection::List(pages) => {
                let parts: Vec<String> = pages.iter().map(u32::to_string).collect();
                write!(f, "{}", parts.join(","))
            },
            PageSelection::Range(range) => write!(f, "{}-{}", range.start, range.end),
        }
    }
}
