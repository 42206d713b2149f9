use core::ops::Range;
use std::sync::Arc;

use crate::error::{LayoutError, Result};

/// Character buffer of one text node.
///
/// Shared between the document and the renderer; mutation replaces the
/// whole buffer, so ranges held by runs stay valid for the content they
/// were created against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TextContent(Arc<str>);

impl TextContent {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether both handles point at the same buffer.
    pub fn same_buffer(&self, other: &TextContent) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Check that `range` lies inside the text on char boundaries.
    pub fn check_range(&self, range: &Range<usize>) -> Result<()> {
        if range.start > range.end || range.end > self.len() {
            return Err(LayoutError::RangeOutOfBounds {
                start: range.start,
                end: range.end,
                len: self.len(),
            });
        }
        for offset in [range.start, range.end] {
            if !self.0.is_char_boundary(offset) {
                return Err(LayoutError::NotCharBoundary(offset));
            }
        }
        Ok(())
    }

    /// Slice of the text; callers pass ranges already checked.
    pub fn slice(&self, range: Range<usize>) -> &str {
        &self.0[range]
    }

    /// `[from, from + len)` clamped into the text and snapped to char
    /// boundaries.
    pub fn clamp_range(&self, from: usize, len: usize) -> Range<usize> {
        let start = crate::unicode::floor_char_boundary(&self.0, from);
        let end = crate::unicode::floor_char_boundary(&self.0, from.saturating_add(len));
        start..end
    }
}

impl From<&str> for TextContent {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextContent {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_range_rejects_out_of_bounds() {
        let content = TextContent::from("hello");
        assert!(content.check_range(&(0..5)).is_ok());
        assert_eq!(
            content.check_range(&(2..9)),
            Err(LayoutError::RangeOutOfBounds {
                start: 2,
                end: 9,
                len: 5
            })
        );
    }

    #[test]
    fn check_range_rejects_split_chars() {
        let content = TextContent::from("né");
        assert_eq!(content.check_range(&(0..2)), Err(LayoutError::NotCharBoundary(2)));
        assert!(content.check_range(&(1..3)).is_ok());
    }

    #[test]
    fn clamp_range_snaps() {
        let content = TextContent::from("né!");
        assert_eq!(content.clamp_range(0, 2), 0..1);
        assert_eq!(content.clamp_range(1, 100), 1..4);
        assert_eq!(content.clamp_range(9, 1), 4..4);
    }

    #[test]
    fn clones_share_buffer() {
        let a = TextContent::from("x");
        let b = a.clone();
        assert!(a.same_buffer(&b));
        assert!(!a.same_buffer(&TextContent::from("x")));
    }
}
