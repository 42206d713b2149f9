pub mod context;
pub mod cursor;
pub mod flow;
pub mod intrinsic;
pub mod line_breaker;
pub mod paint;
pub mod run;
pub mod store;
pub mod text_node;

pub use context::{BoxContext, BoxInsets, LayoutContext, NodeFonts};
pub use cursor::{CursorRect, Rect};
pub use flow::{FlowOptions, FlowSummary, flow_text};
pub use hit_test::{HitTest, HitTestResult, Point};
pub use intrinsic::{IntrinsicWidths, compute_intrinsic_widths};
pub use line_breaker::{
    BreakPredicate, LineBreak, LineBreakKind, UnicodeBreaks, WhitespaceBreaks, compute_line_breaks,
};
pub use paint::{DecorationLine, PaintBand, PaintItem, paint_items};
pub use run::TextRun;
pub use store::{RunLocation, RunStore};
pub use text_node::TextNode;
