//! The slice of computed style a text node consults during layout.

/// How white space and wrapping are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhiteSpace {
    /// Wrap at break opportunities.
    #[default]
    Normal,
    /// Never wrap; only hard newlines end a line.
    NoWrap,
    /// Preformatted: newlines honored, no automatic wrapping.
    Pre,
}

impl WhiteSpace {
    /// Whether automatic wrapping at break opportunities is allowed.
    pub fn allows_wrap(self) -> bool {
        matches!(self, WhiteSpace::Normal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextTransform {
    #[default]
    None,
    Capitalize,
    Uppercase,
    Lowercase,
}

impl TextTransform {
    /// Apply the transform, returning `None` when the text is unchanged.
    pub fn apply(self, text: &str) -> Option<String> {
        match self {
            TextTransform::None => None,
            TextTransform::Uppercase => Some(text.to_uppercase()),
            TextTransform::Lowercase => Some(text.to_lowercase()),
            TextTransform::Capitalize => Some(capitalize(text)),
        }
    }
}

/// Uppercase the first letter of every whitespace-separated word.
fn capitalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if at_word_start && ch.is_alphabetic() {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.push(ch);
            if ch.is_whitespace() {
                at_word_start = true;
            } else if ch.is_alphanumeric() {
                at_word_start = false;
            }
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontVariant {
    #[default]
    Normal,
    SmallCaps,
}

/// Text decoration lines drawn with each run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextDecoration {
    pub underline: bool,
    pub overline: bool,
    pub line_through: bool,
}

impl TextDecoration {
    pub const NONE: Self = Self {
        underline: false,
        overline: false,
        line_through: false,
    };

    pub fn underline() -> Self {
        Self {
            underline: true,
            ..Self::NONE
        }
    }

    pub fn is_none(&self) -> bool {
        !(self.underline || self.overline || self.line_through)
    }
}

/// Straight RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Color with each channel inverted, used for selected text.
    pub fn inverted(self) -> Self {
        Self {
            r: 0xff - self.r,
            g: 0xff - self.g,
            b: 0xff - self.b,
            a: self.a,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Outline drawn around each line of the node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub width: f32,
    pub color: Color,
}

/// Computed style for one text node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextStyle {
    pub white_space: WhiteSpace,
    pub text_transform: TextTransform,
    pub font_variant: FontVariant,
    pub decoration: TextDecoration,
    /// Text is stored in visual order; runs are never reversed.
    pub visually_ordered: bool,
    /// Explicit line height in pixels; `None` uses the font's line spacing.
    pub line_height: Option<f32>,
    pub color: Color,
    pub decoration_color: Option<Color>,
    pub outline: Option<Outline>,
    /// Style of the `::first-line` pseudo element, if any.
    pub first_line: Option<Box<TextStyle>>,
}

impl TextStyle {
    pub fn with_white_space(mut self, white_space: WhiteSpace) -> Self {
        self.white_space = white_space;
        self
    }

    pub fn with_transform(mut self, text_transform: TextTransform) -> Self {
        self.text_transform = text_transform;
        self
    }

    /// Style in effect for a run on the first line.
    pub fn for_line(&self, first_line: bool) -> &TextStyle {
        match (&self.first_line, first_line) {
            (Some(pseudo), true) => pseudo,
            _ => self,
        }
    }

    pub fn decoration_color(&self) -> Color {
        self.decoration_color.unwrap_or(self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_words() {
        assert_eq!(
            TextTransform::Capitalize.apply("hello big world").as_deref(),
            Some("Hello Big World")
        );
        assert_eq!(
            TextTransform::Capitalize.apply("don't stop").as_deref(),
            Some("Don't Stop")
        );
        assert_eq!(TextTransform::None.apply("abc"), None);
    }

    #[test]
    fn first_line_style_selected_only_for_first_line() {
        let pseudo = TextStyle::default().with_white_space(WhiteSpace::Pre);
        let style = TextStyle {
            first_line: Some(Box::new(pseudo)),
            ..TextStyle::default()
        };
        assert_eq!(style.for_line(true).white_space, WhiteSpace::Pre);
        assert_eq!(style.for_line(false).white_space, WhiteSpace::Normal);
    }

    #[test]
    fn inverted_color() {
        assert_eq!(Color::rgb(0, 0x10, 0xff).inverted(), Color::rgb(0xff, 0xef, 0));
        assert!(TextDecoration::NONE.is_none());
        assert!(!TextDecoration::underline().is_none());
    }
}
