/// CJK ideographs and syllabaries, where a line may break between any two
/// characters.
pub fn is_ideographic(ch: char) -> bool {
    matches!(ch as u32,
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
        | 0x20000..=0x2FFFD
        | 0x30000..=0x3FFFD)
}

/// Characters that never advance the pen.
pub fn is_zero_width(ch: char) -> bool {
    matches!(ch,
        '\u{200B}'..='\u{200F}'
        | '\u{2028}'..='\u{202E}'
        | '\u{2060}'..='\u{2064}'
        | '\u{FEFF}'
        | '\u{0300}'..='\u{036F}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_ideographs() {
        assert!(is_ideographic('中'));
        assert!(is_ideographic('あ'));
        assert!(is_ideographic('한'));
        assert!(!is_ideographic('a'));
        assert!(!is_ideographic(' '));
    }

    #[test]
    fn classifies_zero_width() {
        assert!(is_zero_width('\u{200B}'));
        assert!(is_zero_width('\u{0301}'));
        assert!(!is_zero_width('x'));
    }
}
