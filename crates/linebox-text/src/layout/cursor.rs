use crate::content::TextContent;
use crate::font::MetricsProvider;
use crate::layout::{Point, RunStore};

/// Axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Represents the visual rectangle for rendering a cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorRect {
    /// X position in pixels.
    pub x: f32,
    /// Y position in pixels (top of cursor).
    pub y: f32,
    /// Width in pixels (typically 1-2px).
    pub width: f32,
    /// Height in pixels (typically line height).
    pub height: f32,
}

impl CursorRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shift by an absolute origin.
    pub fn translated(self, origin: Point) -> Self {
        Self {
            x: self.x + origin.x,
            y: self.y + origin.y,
            ..self
        }
    }
}

/// Caret rectangle for byte `offset`, in block-relative coordinates.
///
/// The caret sits after the advance of the run's text before `offset`,
/// nudged by the right bearing of the character it follows. Offsets
/// inside a character have no caret.
pub fn caret_in_runs(
    runs: &RunStore,
    content: &TextContent,
    offset: usize,
    metrics: &dyn MetricsProvider,
    line_height: f32,
) -> Option<CursorRect> {
    let text = content.as_str();
    if offset <= text.len() && !text.is_char_boundary(offset) {
        return None;
    }
    let location = runs.find_run(offset)?;
    let run = runs.get(location.index)?;
    let before = &run.text(content)[..location.position];

    let mut x = run.x + metrics.text_width(before);
    if let Some(prev) = before.chars().next_back() {
        x += metrics.right_bearing(prev);
    }
    Some(CursorRect::new(x, run.y, 1.0, line_height))
}
