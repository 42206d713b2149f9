//! linebox-text: layout of a single text node inside an inline formatting
//! context.
//!
//! - `layout`: run store, intrinsic widths, hit testing, caret geometry,
//!   greedy flow and the paint list
//! - `font`: metrics providers (fixed advances, or swash faces shaped with
//!   harfrust)
//! - `unicode`, `bidi`: character classes, graphemes and paragraph direction

pub mod bidi;
pub mod content;
pub mod error;
pub mod font;
pub mod layout;
pub mod shaping;
pub mod style;
pub mod unicode;

pub use content::TextContent;
pub use error::{LayoutError, Result};
pub use font::{FixedMetrics, FontCache, FontError, FontFace, MetricsProvider, ScaledFace};
pub use layout::{
    BoxContext, BoxInsets, BreakPredicate, CursorRect, FlowOptions, FlowSummary, HitTest,
    HitTestResult, IntrinsicWidths, LayoutContext, NodeFonts, PaintBand, PaintItem, Point,
    RunLocation, RunStore, TextNode, TextRun, UnicodeBreaks, WhitespaceBreaks, flow_text,
    paint_items,
};
pub use style::{TextStyle, WhiteSpace};
