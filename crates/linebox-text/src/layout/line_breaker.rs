use unicode_linebreak::{BreakOpportunity, linebreaks};

use crate::unicode::is_ideographic;

/// Kind of line break at a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBreakKind {
    /// Required line break (e.g., explicit newline).
    Mandatory,
    /// Optional line break opportunity.
    Opportunity,
}

/// A line break opportunity in the text.
#[derive(Debug, Clone, Copy)]
pub struct LineBreak {
    /// Byte offset *after* the break.
    pub offset: usize,
    /// Break kind (mandatory vs optional).
    pub kind: LineBreakKind,
}

/// Compute all line break opportunities in the given text using UAX-14
/// via the `unicode-linebreak` crate.
///
/// This includes both optional and mandatory breaks, and treats the
/// end-of-text as a mandatory break.
pub fn compute_line_breaks(text: &str) -> Vec<LineBreak> {
    linebreaks(text)
        .map(|(offset, opp)| LineBreak {
            offset,
            kind: match opp {
                BreakOpportunity::Mandatory => LineBreakKind::Mandatory,
                BreakOpportunity::Allowed => LineBreakKind::Opportunity,
            },
        })
        .collect()
}

/// Decides which characters of a text node a line may break at.
///
/// A breakable character separates words: intrinsic sizing counts it
/// towards the unbroken width only, and the flow driver ends a line right
/// after it.
pub trait BreakPredicate {
    /// Whether the character starting at byte `offset` is breakable.
    fn is_breakable(&self, text: &str, offset: usize) -> bool;

    /// Per-byte mask, `true` at the first byte of every breakable character.
    fn breakable_mask(&self, text: &str) -> Vec<bool> {
        let mut mask = vec![false; text.len()];
        for (offset, _) in text.char_indices() {
            mask[offset] = self.is_breakable(text, offset);
        }
        mask
    }
}

impl<B: BreakPredicate + ?Sized> BreakPredicate for &B {
    fn is_breakable(&self, text: &str, offset: usize) -> bool {
        (**self).is_breakable(text, offset)
    }

    fn breakable_mask(&self, text: &str) -> Vec<bool> {
        (**self).breakable_mask(text)
    }
}

/// Breaks at spaces, tabs, newlines, zero-width spaces and ideographs.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceBreaks;

impl BreakPredicate for WhitespaceBreaks {
    fn is_breakable(&self, text: &str, offset: usize) -> bool {
        text.get(offset..)
            .and_then(|rest| rest.chars().next())
            .is_some_and(|ch| matches!(ch, ' ' | '\t' | '\n' | '\u{200B}') || is_ideographic(ch))
    }
}

/// UAX-14 driven breaks.
///
/// A whitespace character directly before a break opportunity is
/// breakable, as is an ideograph directly after one.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeBreaks;

impl BreakPredicate for UnicodeBreaks {
    fn is_breakable(&self, text: &str, offset: usize) -> bool {
        self.breakable_mask(text).get(offset).copied().unwrap_or(false)
    }

    fn breakable_mask(&self, text: &str) -> Vec<bool> {
        let mut mask = vec![false; text.len()];
        for br in compute_line_breaks(text) {
            if let Some((idx, ch)) = text[..br.offset].char_indices().next_back() {
                if ch.is_whitespace() {
                    mask[idx] = true;
                }
            }
            if let Some(ch) = text[br.offset..].chars().next() {
                if is_ideographic(ch) {
                    mask[br.offset] = true;
                }
            }
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakable_chars(pred: &dyn BreakPredicate, text: &str) -> Vec<usize> {
        pred.breakable_mask(text)
            .iter()
            .enumerate()
            .filter_map(|(i, b)| b.then_some(i))
            .collect()
    }

    #[test]
    fn line_breaks_basic_with_newline() {
        let breaks = compute_line_breaks("a b \nc");
        assert!(breaks.iter().any(|b| b.kind == LineBreakKind::Mandatory));
    }

    #[test]
    fn whitespace_breaks_spaces_and_newlines() {
        assert_eq!(breakable_chars(&WhitespaceBreaks, "ab c\td\ne"), vec![2, 4, 6]);
        assert!(!WhitespaceBreaks.is_breakable("abc", 3));
    }

    #[test]
    fn whitespace_breaks_ideographs() {
        let text = "a中文";
        assert_eq!(breakable_chars(&WhitespaceBreaks, text), vec![1, 4]);
    }

    #[test]
    fn unicode_breaks_spaces_not_hyphen_words() {
        let text = "Hello world\nagain";
        assert_eq!(breakable_chars(&UnicodeBreaks, text), vec![5, 11]);
        assert!(UnicodeBreaks.is_breakable(text, 5));
        assert!(!UnicodeBreaks.is_breakable(text, 0));
    }

    #[test]
    fn unicode_breaks_nbsp_is_not_breakable() {
        let text = "a\u{00A0}b";
        assert!(breakable_chars(&UnicodeBreaks, text).is_empty());
    }
}
