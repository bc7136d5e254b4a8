//! Two-column layout analysis.
//!
//! This module provides the per-page building blocks:
//! - Vertical rule and colored band detection from drawings
//! - Column separator location (geometry, span distribution, page center)
//! - Region bookkeeping (header, footer, left and right column)
//! - Line reconstruction within a region

pub mod assembler;
pub mod geometry_filter;
pub mod regions;
pub mod separator;
pub mod text_span;

// Re-export main types
pub use assembler::{AssembledLine, TextAssembler};
pub use geometry_filter::{colored_regions, vertical_lines, VerticalLine};
pub use regions::{Band, Region, RegionSet};
pub use separator::{SeparatorEstimate, SeparatorLocator, SeparatorSource};
pub use text_span::{Color, TextSpan, UNKNOWN_FONT_SIZE};
