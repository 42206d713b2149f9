use core::ops::Range;

use crate::layout::{LayoutContext, Point, Rect, TextNode, TextRun};
use crate::style::{Color, TextStyle};

/// Which decoration line an item draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorationLine {
    Underline,
    Overline,
    LineThrough,
}

/// One drawing command for a text node.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintItem {
    /// Draw the text of `range` with its baseline origin at `origin`.
    Text {
        origin: Point,
        range: Range<usize>,
        color: Color,
        reversed: bool,
    },
    /// Selection background with the selected text redrawn on top.
    Selection {
        rect: Rect,
        range: Range<usize>,
        background: Color,
        text_color: Color,
    },
    /// Horizontal decoration line starting at `origin`.
    Decoration {
        line: DecorationLine,
        origin: Point,
        width: f32,
        color: Color,
    },
    /// Outline around one line's worth of runs.
    Outline {
        rect: Rect,
        width: f32,
        color: Color,
    },
}

/// Vertical slice of the page being painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintBand {
    pub top: f32,
    pub height: f32,
}

impl PaintBand {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }
}

/// Drawing commands for the node's runs that intersect `band`.
///
/// `origin` is the absolute position the runs are relative to; the band
/// is in absolute coordinates.
pub fn paint_items(
    node: &TextNode,
    cx: &LayoutContext<'_>,
    origin: Point,
    band: PaintBand,
) -> Vec<PaintItem> {
    let runs = node.runs();
    let line_height = node.line_height(cx, false);
    let outline = node.style().outline;
    let widen = outline.map_or(0.0, |o| o.width);
    let visible = runs.runs_in_band(band.top - origin.y - widen, band.height + widen, line_height);
    if visible.is_empty() {
        return Vec::new();
    }

    let last_index = runs.len() - 1;
    let mut items = Vec::new();
    let mut line_rects: Vec<Rect> = Vec::new();

    for index in visible {
        let Some(run) = runs.get(index) else { break };
        let style = node.style().for_line(run.first_line);

        items.push(PaintItem::Text {
            origin: origin.offset(run.x, run.y + run.baseline),
            range: run.range.clone(),
            color: style.color,
            reversed: run.reversed,
        });

        let begin = index == 0 && cx.block.starts_inline_box();
        let end = index == last_index && cx.block.ends_inline_box();
        decorations(&mut items, node, cx, style, run, origin, begin, end);

        if let Some(selection) = node.selection() {
            if let Some(item) = selection_item(node, cx, style, run, origin, &selection) {
                items.push(item);
            }
        }

        if outline.is_some() {
            let mut right = run.right();
            if index == last_index && cx.block.ends_inline_box() {
                right -= cx.block.padding.right;
            }
            match line_rects.last_mut() {
                Some(rect) if rect.y == run.y => {
                    let left = rect.x.min(run.x);
                    rect.width = rect.right().max(right) - left;
                    rect.x = left;
                }
                _ => line_rects.push(Rect::new(run.x, run.y, right - run.x, line_height)),
            }
        }
    }

    if let Some(outline) = outline {
        items.extend(line_rects.into_iter().map(|rect| PaintItem::Outline {
            rect: Rect::new(rect.x + origin.x, rect.y + origin.y, rect.width, rect.height),
            width: outline.width,
            color: outline.color,
        }));
    }
    items
}

#[allow(clippy::too_many_arguments)]
fn decorations(
    items: &mut Vec<PaintItem>,
    node: &TextNode,
    cx: &LayoutContext<'_>,
    style: &TextStyle,
    run: &TextRun,
    origin: Point,
    begin: bool,
    end: bool,
) {
    let decoration = node.style().decoration;
    if decoration.is_none() {
        return;
    }

    let block = cx.block;
    let mut width = run.width - 1.0;
    if begin {
        width -= block.padding.left + block.border.left;
    }
    if end {
        width -= block.padding.right + block.border.right;
    }

    let start = origin.offset(run.x, run.y);
    let baseline = run.baseline;
    let font_height = cx.metrics(run.first_line).height();
    let mut underline_offset = (font_height + baseline) / 2.0;
    if underline_offset <= baseline {
        underline_offset = baseline + 1.0;
    }

    let color = style.decoration_color();
    let mut push = |line, dy: f32| {
        items.push(PaintItem::Decoration {
            line,
            origin: start.offset(0.0, dy),
            width,
            color,
        });
    };
    if decoration.underline {
        push(DecorationLine::Underline, underline_offset);
    }
    if decoration.overline {
        push(DecorationLine::Overline, 0.0);
    }
    if decoration.line_through {
        push(DecorationLine::LineThrough, 2.0 * baseline / 3.0);
    }
}

fn selection_item(
    node: &TextNode,
    cx: &LayoutContext<'_>,
    style: &TextStyle,
    run: &TextRun,
    origin: Point,
    selection: &Range<usize>,
) -> Option<PaintItem> {
    if run.reversed {
        return None;
    }
    let start = selection.start.max(run.start());
    let end = selection.end.min(run.end());
    if start >= end {
        return None;
    }

    let text = node.text();
    if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
        return None;
    }
    let metrics = cx.metrics(run.first_line);
    let offset = metrics.text_width(&text[run.start()..start]);
    let width = if start == run.start() && end == run.end() {
        run.width
    } else {
        metrics.text_width(&text[start..end])
    };

    Some(PaintItem::Selection {
        rect: Rect::new(
            origin.x + run.x + offset,
            origin.y + run.y + run.baseline - metrics.ascent(),
            width,
            metrics.height(),
        ),
        range: start..end,
        background: style.color,
        text_color: style.color.inverted(),
    })
}
