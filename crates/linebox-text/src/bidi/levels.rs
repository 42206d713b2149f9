use core::ops::Range;

use unicode_bidi::{BidiInfo, LTR_LEVEL, Level, RTL_LEVEL};

/// Base direction hint for paragraph analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseDirection {
    /// Detect paragraph base direction from text (first strong char).
    #[default]
    Auto,
    /// Force overall left-to-right base direction.
    Ltr,
    /// Force overall right-to-left base direction.
    Rtl,
}

impl BaseDirection {
    pub fn to_level(self) -> Option<Level> {
        match self {
            BaseDirection::Auto => None,
            BaseDirection::Ltr => Some(LTR_LEVEL),
            BaseDirection::Rtl => Some(RTL_LEVEL),
        }
    }
}

/// Paragraph direction classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphDirection {
    Ltr,
    Rtl,
}

impl ParagraphDirection {
    pub fn is_rtl(self) -> bool {
        matches!(self, ParagraphDirection::Rtl)
    }
}

/// BiDi information for a single paragraph.
#[derive(Debug, Clone)]
pub struct ParagraphBidi {
    /// Byte range of this paragraph within the original text.
    pub range: Range<usize>,
    /// Paragraph embedding level (UAX-9).
    pub level: u8,
    pub direction: ParagraphDirection,
}

/// Compute paragraph-level BiDi information for the given text.
///
/// Paragraph ranges include their trailing separator.
pub fn paragraph_bidi_info(text: &str, base_dir: BaseDirection) -> Vec<ParagraphBidi> {
    let info = BidiInfo::new(text, base_dir.to_level());
    info.paragraphs
        .iter()
        .map(|para| ParagraphBidi {
            range: para.range.clone(),
            level: para.level.number(),
            direction: if para.level.is_rtl() {
                ParagraphDirection::Rtl
            } else {
                ParagraphDirection::Ltr
            },
        })
        .collect()
}

/// Direction of the paragraph containing byte `offset`.
pub fn direction_at(paragraphs: &[ParagraphBidi], offset: usize) -> ParagraphDirection {
    paragraphs
        .iter()
        .find(|para| para.range.contains(&offset))
        .map_or(ParagraphDirection::Ltr, |para| para.direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_paragraph_direction_auto() {
        let paras = paragraph_bidi_info("אבג abc", BaseDirection::Auto);
        assert_eq!(paras.len(), 1);
        assert_eq!(paras[0].direction, ParagraphDirection::Rtl);
    }

    #[test]
    fn base_direction_override_ltr() {
        let paras = paragraph_bidi_info("אבג abc", BaseDirection::Ltr);
        assert_eq!(paras[0].direction, ParagraphDirection::Ltr);
    }

    #[test]
    fn each_paragraph_gets_its_own_direction() {
        let text = "abc\nאבג";
        let paras = paragraph_bidi_info(text, BaseDirection::Auto);
        assert_eq!(paras.len(), 2);
        assert_eq!(direction_at(&paras, 1), ParagraphDirection::Ltr);
        assert_eq!(direction_at(&paras, 5), ParagraphDirection::Rtl);
        assert_eq!(direction_at(&paras, 100), ParagraphDirection::Ltr);
    }
}
