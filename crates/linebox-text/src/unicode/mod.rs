//! Unicode utilities for linebox-text.
//!
//! Grapheme cluster navigation for hit testing and flow fallbacks, plus
//! the character classes the break predicates and fixed metrics use.

pub mod graphemes;
pub mod properties;

pub use graphemes::{GraphemeCluster, floor_char_boundary, grapheme_clusters};
pub use properties::{is_ideographic, is_zero_width};
