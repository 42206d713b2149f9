//! Property-based tests for intrinsic widths and the flow driver.

use linebox_text::unicode::grapheme_clusters;
use linebox_text::{
    BoxContext, FixedMetrics, FlowOptions, LayoutContext, NodeFonts, Point, TextNode, TextStyle,
    WhiteSpace, WhitespaceBreaks, flow_text,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Mixed-script text with spaces, newlines, combining marks and ideographs.
fn mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "a", "bc", "word", " ", "  ", "\n", "\t", "é", "e\u{301}", "中", "文", "ש", "ל",
            "\u{200b}", "👍",
        ]),
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

fn white_space() -> impl Strategy<Value = WhiteSpace> {
    prop::sample::select(vec![WhiteSpace::Normal, WhiteSpace::NoWrap, WhiteSpace::Pre])
}

fn flowed(text: &str, style: TextStyle, max_width: Option<f32>) -> TextNode {
    let metrics = FixedMetrics::default();
    let block = BoxContext::in_block(Point::zero());
    let cx = LayoutContext::new(NodeFonts::new(&metrics), &block);
    let mut node = TextNode::new(text, style);
    let options = FlowOptions {
        max_width,
        ..FlowOptions::default()
    };
    flow_text(&mut node, &cx, &WhitespaceBreaks, options).unwrap();
    node
}

// ============================================================================
// Intrinsic Width Properties
// ============================================================================

proptest! {
    /// The narrowest layout is never wider than the widest.
    #[test]
    fn min_width_never_exceeds_max(text in mixed_text(), ws in white_space()) {
        let metrics = FixedMetrics::default();
        let block = BoxContext::default();
        let cx = LayoutContext::new(NodeFonts::new(&metrics), &block);
        let mut node = TextNode::new(text.as_str(), TextStyle::default().with_white_space(ws));
        let widths = node.intrinsic_widths(&cx, &WhitespaceBreaks);
        prop_assert!(widths.min <= widths.max, "min {} > max {}", widths.min, widths.max);
    }

    /// Text that may not wrap has a single intrinsic width.
    #[test]
    fn nowrap_min_equals_max(text in mixed_text()) {
        let metrics = FixedMetrics::default();
        let block = BoxContext::default();
        let cx = LayoutContext::new(NodeFonts::new(&metrics), &block);
        let style = TextStyle::default().with_white_space(WhiteSpace::NoWrap);
        let mut node = TextNode::new(text.as_str(), style);
        let widths = node.intrinsic_widths(&cx, &WhitespaceBreaks);
        prop_assert_eq!(widths.min, widths.max);
    }
}

// ============================================================================
// Flow Properties
// ============================================================================

proptest! {
    /// Runs cover the text in order, minus the newlines between lines.
    #[test]
    fn runs_reconstruct_text(text in mixed_text(), width in 1.0f32..200.0) {
        let node = flowed(&text, TextStyle::default(), Some(width));
        let joined: String = node.runs().iter().map(|run| run.text(node.content())).collect();
        prop_assert_eq!(joined, text.replace('\n', ""));
    }

    /// A line only overflows when it holds a single grapheme.
    #[test]
    fn lines_fit_unless_unbreakable(text in mixed_text(), width in 1.0f32..200.0) {
        let node = flowed(&text, TextStyle::default(), Some(width));
        for run in node.runs() {
            let clusters = grapheme_clusters(run.text(node.content()));
            prop_assert!(
                run.width <= width || clusters.len() == 1,
                "run {:?} is {}px wide in {}px",
                run.range,
                run.width,
                width
            );
        }
    }

    /// Laid out nodes are at least one line tall, and asking twice gives
    /// the same geometry.
    #[test]
    fn geometry_is_stable(text in mixed_text(), width in 1.0f32..200.0) {
        let node = flowed(&text, TextStyle::default(), Some(width));
        let metrics = FixedMetrics::default();
        let block = BoxContext::in_block(Point::zero());
        let cx = LayoutContext::new(NodeFonts::new(&metrics), &block);

        let height = node.height(&cx);
        prop_assert!(height >= node.line_height(&cx, false));
        prop_assert_eq!(height, node.height(&cx));
        prop_assert_eq!(node.width(&cx), node.width(&cx));
    }

    /// Without wrapping, each paragraph is one run.
    #[test]
    fn nowrap_keeps_paragraphs_whole(text in mixed_text()) {
        let style = TextStyle::default().with_white_space(WhiteSpace::NoWrap);
        let node = flowed(&text, style, Some(1.0));
        let paragraphs = text.split('\n').filter(|p| !p.is_empty()).count();
        prop_assert_eq!(node.runs().len(), paragraphs);
    }
}
