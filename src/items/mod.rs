//! Numbered item extraction (exam questions and similar).

mod question;
mod segmenter;

pub use question::{Column, Question, QuestionSet};
pub use segmenter::{merge_columns, ItemSegmenter};
