use core::ops::Range;

use crate::content::TextContent;
use crate::error::Result;
use crate::layout::cursor::caret_in_runs;
use crate::layout::hit_test::{contains_point, hit_test_runs};
use crate::layout::intrinsic::compute_intrinsic_widths;
use crate::layout::{
    BreakPredicate, CursorRect, HitTestResult, IntrinsicWidths, LayoutContext, Point,
    RunLocation, RunStore, TextRun,
};
use crate::style::{FontVariant, TextStyle, WhiteSpace};

/// Layout state of one text node: its text, style and positioned runs.
///
/// Fonts and the surrounding box are not stored; every query that needs
/// them takes a [`LayoutContext`].
#[derive(Debug, Clone)]
pub struct TextNode {
    /// Text as the document supplied it.
    source: TextContent,
    /// Text after style transforms; runs index into this.
    content: TextContent,
    style: TextStyle,
    runs: RunStore,
    intrinsic: Option<IntrinsicWidths>,
    selection: Option<Range<usize>>,
}

impl TextNode {
    pub fn new(text: impl Into<TextContent>, style: TextStyle) -> Self {
        let source = text.into();
        let content = Self::transformed(&source, &style);
        Self {
            source,
            content,
            style,
            runs: RunStore::new(),
            intrinsic: None,
            selection: None,
        }
    }

    fn transformed(source: &TextContent, style: &TextStyle) -> TextContent {
        let transform = if style.font_variant == FontVariant::SmallCaps {
            crate::style::TextTransform::Uppercase
        } else {
            style.text_transform
        };
        match transform.apply(source.as_str()) {
            Some(text) if text != source.as_str() => TextContent::from(text),
            _ => source.clone(),
        }
    }

    /// Text the runs index into, after transforms.
    pub fn text(&self) -> &str {
        self.content.as_str()
    }

    pub fn content(&self) -> &TextContent {
        &self.content
    }

    /// Text as supplied, before transforms.
    pub fn source(&self) -> &TextContent {
        &self.source
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn runs(&self) -> &RunStore {
        &self.runs
    }

    /// Replace the text. Runs and cached widths belong to the old text
    /// and are dropped.
    pub fn set_text(&mut self, text: impl Into<TextContent>) {
        let text = text.into();
        if text.same_buffer(&self.source) {
            return;
        }
        self.source = text;
        self.content = Self::transformed(&self.source, &self.style);
        self.clear_runs();
        self.intrinsic = None;
        self.selection = None;
    }

    /// Replace the style, reapplying text transforms.
    pub fn set_style(&mut self, style: TextStyle) {
        if style == self.style {
            return;
        }
        self.style = style;
        let content = Self::transformed(&self.source, &self.style);
        if content != self.content {
            self.content = content;
            self.clear_runs();
            self.selection = None;
        }
        self.intrinsic = None;
    }

    /// Selected byte range, clamped to the text when painting.
    pub fn set_selection(&mut self, selection: Option<Range<usize>>) {
        self.selection = selection;
    }

    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    /// Drop all runs before a new layout pass.
    pub fn clear_runs(&mut self) {
        self.runs.clear();
    }

    /// Forget cached intrinsic widths, e.g. after the font changed.
    pub fn invalidate_intrinsic_widths(&mut self) {
        self.intrinsic = None;
    }

    /// Line height for runs on the first line or any later line.
    pub fn line_height(&self, cx: &LayoutContext<'_>, first_line: bool) -> f32 {
        self.style
            .for_line(first_line)
            .line_height
            .unwrap_or_else(|| cx.metrics(first_line).line_spacing())
    }

    /// Distance from a line's top to its baseline, centering the glyph box
    /// in the line.
    pub fn baseline_position(&self, cx: &LayoutContext<'_>, first_line: bool) -> f32 {
        let metrics = cx.metrics(first_line);
        metrics.ascent() + (self.line_height(cx, first_line) - metrics.height()) / 2.0
    }

    /// Append a run over `[from, from + len)` at block-relative `(x, y)`.
    ///
    /// Empty runs and a run consisting of a lone newline are ignored. At
    /// the edges of an inline parent the run is shifted past the parent's
    /// start padding, border and margin, and its width loses the margins.
    #[allow(clippy::too_many_arguments)]
    pub fn position(
        &mut self,
        cx: &LayoutContext<'_>,
        x: f32,
        y: f32,
        from: usize,
        len: usize,
        width: f32,
        reversed: bool,
        first_line: bool,
    ) -> Result<()> {
        if len == 0 {
            return Ok(());
        }
        let range = from..from.saturating_add(len);
        self.content.check_range(&range)?;
        if self.content.slice(range.clone()) == "\n" {
            return Ok(());
        }

        let block = cx.block;
        let mut x = x;
        let mut width = width;
        if from == 0 && block.starts_inline_box() {
            x += block.padding.left + block.border.left + block.margin.left;
            width -= block.margin.left;
        }
        if range.end == self.content.len() && block.ends_inline_box() {
            width -= block.margin.right;
        }

        let run = TextRun {
            x,
            y,
            width,
            range,
            baseline: self.baseline_position(cx, first_line),
            reversed: reversed && !self.style.visually_ordered,
            first_line,
        };
        tracing::trace!(range = ?run.range, x = run.x, y = run.y, width = run.width, "positioned text run");
        self.runs.push(run);
        Ok(())
    }

    /// Run and in-run position holding byte `offset`.
    pub fn find_run(&self, offset: usize) -> Option<RunLocation> {
        self.runs.find_run(offset)
    }

    /// Min/max content widths, computed once and cached until the text,
    /// style or fonts change.
    pub fn intrinsic_widths(
        &mut self,
        cx: &LayoutContext<'_>,
        breaks: &dyn BreakPredicate,
    ) -> IntrinsicWidths {
        if let Some(widths) = self.intrinsic {
            return widths;
        }
        let widths = compute_intrinsic_widths(
            self.content.as_str(),
            cx.metrics(false),
            breaks,
            self.style.white_space,
        );
        self.intrinsic = Some(widths);
        widths
    }

    /// Cached widths, if `intrinsic_widths` ran since the last change.
    pub fn cached_intrinsic_widths(&self) -> Option<IntrinsicWidths> {
        self.intrinsic
    }

    pub fn min_width(&mut self, cx: &LayoutContext<'_>, breaks: &dyn BreakPredicate) -> f32 {
        self.intrinsic_widths(cx, breaks).min
    }

    pub fn max_width(&mut self, cx: &LayoutContext<'_>, breaks: &dyn BreakPredicate) -> f32 {
        self.intrinsic_widths(cx, breaks).max
    }

    /// How far right the text may extend without wrapping.
    pub fn rightmost_position(
        &mut self,
        cx: &LayoutContext<'_>,
        breaks: &dyn BreakPredicate,
    ) -> f32 {
        if self.style.white_space != WhiteSpace::Normal {
            self.max_width(cx, breaks)
        } else {
            0.0
        }
    }

    /// Height of the stacked runs plus vertical padding and borders.
    pub fn height(&self, cx: &LayoutContext<'_>) -> f32 {
        let content = match (self.runs.first(), self.runs.last()) {
            (Some(first), Some(last)) => last.y + self.line_height(cx, false) - first.y,
            _ => cx.metrics(false).height(),
        };
        content + cx.block.vertical_insets()
    }

    /// Width of the runs' bounding box plus inline edge padding and borders.
    pub fn width(&self, cx: &LayoutContext<'_>) -> f32 {
        let content = self
            .runs
            .horizontal_extent()
            .map_or(0.0, |(min_x, max_x)| (max_x - min_x).max(0.0));
        content + cx.block.start_inset() + cx.block.end_inset()
    }

    /// Width of `[from, from + len)`, clamped to the text, including the
    /// inline parent's padding, border and margin at the node's edges.
    pub fn measure(&self, cx: &LayoutContext<'_>, from: usize, len: usize, first_line: bool) -> f32 {
        if from > self.content.len() {
            return 0.0;
        }
        let range = self.content.clamp_range(from, len);
        let whole = range.start == 0 && range.end == self.content.len();

        let mut width = match self.intrinsic {
            Some(widths) if whole && !first_line && !widths.has_return => widths.max,
            _ => cx.metrics(first_line).text_width(self.content.slice(range.clone())),
        };

        let block = cx.block;
        if range.start == 0 && block.starts_inline_box() {
            width += block.border.left + block.padding.left + block.margin.left;
        }
        if range.end == self.content.len() && block.ends_inline_box() {
            width += block.border.right + block.padding.right + block.margin.right;
        }
        width
    }

    /// Classify `point` against the runs, `origin` being the absolute
    /// position the runs' coordinates are relative to.
    pub fn hit_test(&self, cx: &LayoutContext<'_>, point: Point, origin: Point) -> HitTestResult {
        let line_height = self.line_height(cx, false);
        hit_test_runs(&self.runs, &self.content, point, origin, cx, line_height)
    }

    /// Whether `point` is over one of the runs' boxes.
    ///
    /// `origin` is the inline parent's content origin; the node's padding
    /// and border are stripped off before testing.
    pub fn contains_point(&self, cx: &LayoutContext<'_>, point: Point, origin: Point) -> bool {
        let block = cx.block;
        let origin = origin.offset(
            -(block.padding.left + block.border.left),
            -(block.padding.top + block.border.top),
        );
        let box_height = self.line_height(cx, false) + block.vertical_insets();
        contains_point(&self.runs, point, origin, box_height)
    }

    /// Absolute caret rectangle before byte `offset`.
    ///
    /// `None` when there are no runs, the offset maps into a reversed run,
    /// or the containing block's position is unknown.
    pub fn cursor_position(&self, cx: &LayoutContext<'_>, offset: usize) -> Option<CursorRect> {
        let origin = cx.block.containing_block_origin?;
        let caret = caret_in_runs(
            &self.runs,
            &self.content,
            offset,
            cx.metrics(false),
            self.line_height(cx, false),
        )?;
        Some(caret.translated(origin))
    }

    /// Absolute position of the start of the line holding byte `offset`.
    pub fn char_position(&self, cx: &LayoutContext<'_>, offset: usize) -> Option<Point> {
        let origin = cx.block.parent_origin?;
        Some(match self.find_run(offset).and_then(|loc| self.runs.get(loc.index)) {
            Some(run) => origin.offset(run.x, run.y),
            None => origin,
        })
    }

    /// Leftmost run edge, 0 without runs.
    pub fn min_x(&self) -> f32 {
        self.runs.horizontal_extent().map_or(0.0, |(min_x, _)| min_x)
    }

    /// Left edge of the first run, 0 without runs.
    pub fn x(&self) -> f32 {
        self.runs.first().map_or(0.0, |run| run.x)
    }

    /// Top of the first run, 0 without runs.
    pub fn y(&self) -> f32 {
        self.runs.first().map_or(0.0, |run| run.y)
    }
}
