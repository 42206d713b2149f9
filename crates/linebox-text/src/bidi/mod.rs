//! Paragraph direction detection built on `unicode-bidi`.
//!
//! Runs are never reordered here; a right-to-left paragraph only marks
//! its runs as reversed.

pub mod levels;

pub use levels::{
    BaseDirection, ParagraphBidi, ParagraphDirection, direction_at, paragraph_bidi_info,
};
