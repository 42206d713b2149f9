use crate::font::MetricsProvider;
use crate::layout::Point;

/// Edge sizes of a box in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxInsets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl BoxInsets {
    pub const ZERO: Self = Self::uniform(0.0);

    pub const fn uniform(v: f32) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// What the surrounding layout tree tells a text node about its place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxContext {
    /// Absolute position of the containing block, if known.
    pub containing_block_origin: Option<Point>,
    /// Absolute position of the parent box, if known.
    pub parent_origin: Option<Point>,
    /// The parent is an inline box.
    pub parent_is_inline: bool,
    /// This node is the parent's first child.
    pub first_child: bool,
    /// This node is the parent's last child.
    pub last_child: bool,
    pub padding: BoxInsets,
    pub border: BoxInsets,
    pub margin: BoxInsets,
}

impl BoxContext {
    /// A node placed directly in a block at `origin` with no inline parent.
    pub fn in_block(origin: Point) -> Self {
        Self {
            containing_block_origin: Some(origin),
            parent_origin: Some(origin),
            ..Self::default()
        }
    }

    /// Whether the node opens its inline parent's box.
    pub fn starts_inline_box(&self) -> bool {
        self.parent_is_inline && self.first_child
    }

    /// Whether the node closes its inline parent's box.
    pub fn ends_inline_box(&self) -> bool {
        self.parent_is_inline && self.last_child
    }

    /// Padding plus border on the start edge when the node opens the box.
    pub fn start_inset(&self) -> f32 {
        if self.starts_inline_box() {
            self.padding.left + self.border.left
        } else {
            0.0
        }
    }

    /// Padding plus border on the end edge when the node closes the box.
    pub fn end_inset(&self) -> f32 {
        if self.ends_inline_box() {
            self.padding.right + self.border.right
        } else {
            0.0
        }
    }

    /// Padding plus border above and below.
    pub fn vertical_insets(&self) -> f32 {
        self.padding.vertical() + self.border.vertical()
    }
}

/// Metrics for a node's primary font and its optional first-line font.
#[derive(Clone, Copy)]
pub struct NodeFonts<'a> {
    pub primary: &'a dyn MetricsProvider,
    pub first_line: Option<&'a dyn MetricsProvider>,
}

impl<'a> NodeFonts<'a> {
    pub fn new(primary: &'a dyn MetricsProvider) -> Self {
        Self {
            primary,
            first_line: None,
        }
    }

    pub fn with_first_line(mut self, first_line: &'a dyn MetricsProvider) -> Self {
        self.first_line = Some(first_line);
        self
    }

    /// Metrics for a run on the first line or any other line.
    pub fn for_line(&self, first_line: bool) -> &'a dyn MetricsProvider {
        match (first_line, self.first_line) {
            (true, Some(metrics)) => metrics,
            _ => self.primary,
        }
    }
}

impl core::fmt::Debug for NodeFonts<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeFonts")
            .field("primary_height", &self.primary.height())
            .field("has_first_line", &self.first_line.is_some())
            .finish()
    }
}

/// Collaborators a text node consults during layout queries.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext<'a> {
    pub fonts: NodeFonts<'a>,
    pub block: &'a BoxContext,
}

impl<'a> LayoutContext<'a> {
    pub fn new(fonts: NodeFonts<'a>, block: &'a BoxContext) -> Self {
        Self { fonts, block }
    }

    pub fn metrics(&self, first_line: bool) -> &'a dyn MetricsProvider {
        self.fonts.for_line(first_line)
    }
}
