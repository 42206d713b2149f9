use crate::font::MetricsProvider;
use crate::layout::BreakPredicate;
use crate::style::WhiteSpace;

/// Narrowest and widest a text node can be laid out.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntrinsicWidths {
    /// Width when every break opportunity is taken.
    pub min: f32,
    /// Width when the text is only broken at hard newlines.
    pub max: f32,
    /// The text contains a hard newline.
    pub has_return: bool,
    /// At least one breakable character separates two words.
    pub has_breakable_char: bool,
}

/// Compute min/max content widths in one pass over `text`.
///
/// Words are maximal spans whose characters after the first are not
/// breakable. A breakable character between words ends the current
/// minimum line; its own advance only counts towards the maximum. A
/// newline ends both lines.
pub fn compute_intrinsic_widths(
    text: &str,
    metrics: &dyn MetricsProvider,
    breaks: &dyn BreakPredicate,
    white_space: WhiteSpace,
) -> IntrinsicWidths {
    let mask = breaks.breakable_mask(text);
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let count = chars.len();

    let mut widths = IntrinsicWidths {
        has_return: text == "\n",
        ..IntrinsicWidths::default()
    };
    let mut current_min = 0.0f32;
    let mut current_max = 0.0f32;

    let mut i = 0;
    while i < count {
        let mut word_len = 1;
        while i + word_len < count && !mask[chars[i + word_len].0] {
            word_len += 1;
        }

        let word_start = chars[i].0;
        let word_end = chars.get(i + word_len).map_or(text.len(), |&(offset, _)| offset);
        let w = metrics.text_width(&text[word_start..word_end]);
        current_min += w;
        current_max += w;

        if let Some(&(_, separator)) = chars.get(i + word_len) {
            widths.has_breakable_char = true;
            widths.min = widths.min.max(current_min);
            current_min = 0.0;
            if separator == '\n' {
                widths.has_return = true;
                widths.max = widths.max.max(current_max);
                current_max = 0.0;
            } else {
                current_max += metrics.char_width(separator);
            }
        }
        i += word_len + 1;
    }
    widths.min = widths.min.max(current_min);
    widths.max = widths.max.max(current_max);

    if !white_space.allows_wrap() {
        widths.min = widths.max;
    }

    if widths.min > widths.max {
        tracing::debug!(min = widths.min, max = widths.max, "clamping min width to max width");
        widths.min = widths.max;
    }
    widths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FixedMetrics;
    use crate::layout::{UnicodeBreaks, WhitespaceBreaks};

    fn widths(text: &str, white_space: WhiteSpace) -> IntrinsicWidths {
        compute_intrinsic_widths(text, &FixedMetrics::default(), &WhitespaceBreaks, white_space)
    }

    #[test]
    fn unicode_breaks_follow_line_break_classes() {
        let text = "ab\u{2003}cd";
        let metrics = FixedMetrics::default();

        let uax = compute_intrinsic_widths(text, &metrics, &UnicodeBreaks, WhiteSpace::Normal);
        assert_eq!((uax.min, uax.max), (16.0, 40.0));
        assert!(uax.has_breakable_char);

        // An em space is not one of the plain whitespace break characters.
        let plain = widths(text, WhiteSpace::Normal);
        assert_eq!((plain.min, plain.max), (40.0, 40.0));
        assert!(!plain.has_breakable_char);

        let lines =
            compute_intrinsic_widths("ab cd\nxyz", &metrics, &UnicodeBreaks, WhiteSpace::Normal);
        assert_eq!((lines.min, lines.max), (24.0, 40.0));
        assert!(lines.has_return);
    }

    #[test]
    fn two_words() {
        let w = widths("Hello world", WhiteSpace::Normal);
        assert_eq!(w.min, 40.0);
        assert_eq!(w.max, 88.0);
        assert!(w.has_breakable_char);
        assert!(!w.has_return);
    }

    #[test]
    fn longest_word_wins_min() {
        let w = widths("a bbbb cc", WhiteSpace::Normal);
        assert_eq!(w.min, 32.0);
        assert_eq!(w.max, 72.0);
    }

    #[test]
    fn newline_resets_lines() {
        let w = widths("aaa bb\ncccc", WhiteSpace::Normal);
        assert!(w.has_return);
        assert_eq!(w.min, 32.0);
        assert_eq!(w.max, 48.0);
    }

    #[test]
    fn nowrap_forces_min_to_max() {
        let w = widths("Hello world", WhiteSpace::NoWrap);
        assert_eq!(w.min, 88.0);
        assert_eq!(w.max, 88.0);
        let w = widths("ab cd\nefghij", WhiteSpace::Pre);
        assert_eq!(w.min, w.max);
        assert_eq!(w.max, 48.0);
    }

    #[test]
    fn lone_newline_is_zero_wide() {
        let w = widths("\n", WhiteSpace::Normal);
        assert!(w.has_return);
        assert_eq!(w.min, 0.0);
        assert_eq!(w.max, 0.0);
    }

    #[test]
    fn empty_text() {
        assert_eq!(widths("", WhiteSpace::Normal), IntrinsicWidths::default());
    }

    #[test]
    fn consecutive_separators() {
        // The second space starts the next word, " b".
        let w = widths("a  b", WhiteSpace::Normal);
        assert_eq!(w.min, 16.0);
        assert_eq!(w.max, 32.0);
    }

    struct Skewed;

    impl MetricsProvider for Skewed {
        fn text_width(&self, text: &str) -> f32 {
            text.chars().count() as f32 * 10.0
        }
        fn char_width(&self, _ch: char) -> f32 {
            -30.0
        }
        fn ascent(&self) -> f32 {
            10.0
        }
        fn descent(&self) -> f32 {
            2.0
        }
    }

    #[test]
    fn min_never_exceeds_max() {
        let w = compute_intrinsic_widths("ab cd", &Skewed, &WhitespaceBreaks, WhiteSpace::Normal);
        assert_eq!(w.max, 10.0);
        assert_eq!(w.min, 10.0);
    }
}
