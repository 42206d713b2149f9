use crate::bidi::{BaseDirection, direction_at, paragraph_bidi_info};
use crate::error::Result;
use crate::layout::{BreakPredicate, LayoutContext, Point, TextNode};
use crate::unicode::grapheme_clusters;

/// Parameters for a greedy flow pass over one text node.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowOptions {
    /// Available line width; `None` never wraps.
    pub max_width: Option<f32>,
    /// Block-relative position of the first line's top-left corner.
    pub origin: Point,
    pub base_direction: BaseDirection,
}

impl FlowOptions {
    pub fn wrapping(max_width: f32) -> Self {
        Self {
            max_width: Some(max_width),
            ..Self::default()
        }
    }
}

/// Outcome of a flow pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowSummary {
    /// Lines produced, including empty ones between consecutive newlines.
    pub lines: usize,
    /// Total advance in y.
    pub height: f32,
}

/// Lay the node's text out in lines no wider than `max_width`.
///
/// Lines break right after a breakable character when the next word would
/// overflow, and always at newlines, which are not part of any run. A
/// word wider than the line is split at grapheme boundaries. Runs in a
/// right-to-left paragraph are marked reversed.
pub fn flow_text(
    node: &mut TextNode,
    cx: &LayoutContext<'_>,
    breaks: &dyn BreakPredicate,
    options: FlowOptions,
) -> Result<FlowSummary> {
    node.clear_runs();

    let content = node.content().clone();
    let text = content.as_str();
    let mask = breaks.breakable_mask(text);
    let paragraphs = paragraph_bidi_info(text, options.base_direction);
    let wrap_width = options
        .max_width
        .filter(|_| node.style().white_space.allows_wrap());

    let mut y = options.origin.y;
    let mut lines = 0usize;
    let mut para_start = 0usize;

    loop {
        let para_end = text[para_start..]
            .find('\n')
            .map_or(text.len(), |idx| para_start + idx);
        let reversed = direction_at(&paragraphs, para_start).is_rtl();

        if para_start == para_end {
            // Blank line between newlines (or a trailing newline).
            if para_end < text.len() || lines == 0 {
                y += node.line_height(cx, lines == 0);
                lines += 1;
            }
        }

        let mut line_start = para_start;
        while line_start < para_end {
            let first_line = lines == 0;
            let metrics = cx.metrics(first_line);
            let line_end = match wrap_width {
                None => para_end,
                Some(max_width) => {
                    let fit = |end: usize| metrics.text_width(&text[line_start..end]) <= max_width;
                    let mut best = None;
                    let candidates = (line_start..para_end)
                        .filter(|&i| mask.get(i).copied().unwrap_or(false))
                        .map(|i| i + text[i..].chars().next().map_or(1, char::len_utf8))
                        .chain(std::iter::once(para_end));
                    for end in candidates {
                        if fit(end) {
                            best = Some(end);
                        } else {
                            break;
                        }
                    }
                    best.unwrap_or_else(|| {
                        let mut fallback = None;
                        for cluster in grapheme_clusters(&text[line_start..para_end]) {
                            let end = line_start + cluster.range.end;
                            if fallback.is_some() && !fit(end) {
                                break;
                            }
                            fallback = Some(end);
                        }
                        fallback.unwrap_or(para_end)
                    })
                }
            };

            let width = metrics.text_width(&text[line_start..line_end]);
            node.position(
                cx,
                options.origin.x,
                y,
                line_start,
                line_end - line_start,
                width,
                reversed,
                first_line,
            )?;
            y += node.line_height(cx, first_line);
            lines += 1;
            line_start = line_end;
        }

        if para_end >= text.len() {
            break;
        }
        para_start = para_end + 1;
    }

    tracing::debug!(lines, runs = node.runs().len(), "flowed text node");
    Ok(FlowSummary {
        lines,
        height: y - options.origin.y,
    })
}
