//! Page elements consumed from upstream extractors.
//!
//! Text arrives as [`crate::layout::TextSpan`]s; everything drawn on the page
//! arrives as [`Drawing`]s.

mod drawing;

pub use drawing::{Drawing, PathItem, PathOp};
