use core::ops::Range;

use crate::content::TextContent;

/// One positioned, unidirectional piece of a text node on a single line.
///
/// The run refers to its characters by byte range into the node's
/// [`TextContent`]; it never owns a copy of the text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// Left edge relative to the containing block.
    pub x: f32,
    /// Top of the line relative to the containing block.
    pub y: f32,
    /// Advance width in pixels.
    pub width: f32,
    /// Byte range in the owning text.
    pub range: Range<usize>,
    /// Distance from the line top to the baseline.
    pub baseline: f32,
    /// Laid out right to left.
    pub reversed: bool,
    /// Sits on the first formatted line and uses first-line style.
    pub first_line: bool,
}

impl TextRun {
    pub fn start(&self) -> usize {
        self.range.start
    }

    pub fn end(&self) -> usize {
        self.range.end
    }

    /// Length of the run in bytes.
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn text<'a>(&self, content: &'a TextContent) -> &'a str {
        content.slice(self.range.clone())
    }

    /// Whether the run's line band overlaps `[top, top + height]`.
    ///
    /// The band reaches from the run's top to `baseline + line_height`
    /// below it, so descenders of a run just above `top` still count.
    pub fn intersects_band(&self, top: f32, height: f32, line_height: f32) -> bool {
        !(self.y > top + height || self.y + self.baseline + line_height < top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(y: f32) -> TextRun {
        TextRun {
            x: 10.0,
            y,
            width: 30.0,
            range: 2..6,
            baseline: 12.0,
            reversed: false,
            first_line: false,
        }
    }

    #[test]
    fn run_extents() {
        let r = run(0.0);
        assert_eq!(r.len(), 4);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.text(&TextContent::from("abcdefgh")), "cdef");
    }

    #[test]
    fn band_intersection() {
        let r = run(100.0);
        assert!(r.intersects_band(90.0, 20.0, 16.0));
        assert!(r.intersects_band(120.0, 10.0, 16.0));
        assert!(!r.intersects_band(0.0, 50.0, 16.0));
        assert!(!r.intersects_band(130.0, 10.0, 16.0));
    }
}
