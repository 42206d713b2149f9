use crate::unicode::properties::{is_ideographic, is_zero_width};

/// Font-level metrics in font units.
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    /// Ascent above baseline (positive).
    pub ascent: f32,
    /// Descent below baseline (positive).
    pub descent: f32,
    /// Line gap (leading).
    pub line_gap: f32,
    /// Units per em.
    pub units_per_em: u16,
    /// Cap height (optional).
    pub cap_height: Option<f32>,
    /// X-height (optional).
    pub x_height: Option<f32>,
}

impl FontMetrics {
    /// Calculate line height (ascent + descent + line_gap).
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }

    /// Scale metrics to pixel size, where `font_size` is in logical pixels
    /// (px per em).
    pub fn scale_to_pixels(&self, font_size: f32) -> ScaledFontMetrics {
        let scale = if self.units_per_em != 0 {
            font_size / self.units_per_em as f32
        } else {
            1.0
        };
        ScaledFontMetrics {
            ascent: self.ascent * scale,
            descent: self.descent * scale,
            line_gap: self.line_gap * scale,
            font_size,
        }
    }

    /// Scale metrics for a font size specified in points at a given DPI.
    ///
    /// `px = pt * dpi / 72.0`.
    pub fn scale_from_points(&self, font_size_pt: f32, dpi: f32) -> ScaledFontMetrics {
        let px = font_size_pt * dpi / 72.0;
        self.scale_to_pixels(px)
    }
}

/// Scaled font metrics in pixels.
#[derive(Debug, Clone, Copy)]
pub struct ScaledFontMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
    pub font_size: f32,
}

impl ScaledFontMetrics {
    /// Height of the glyph box (ascent + descent).
    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }

    /// Baseline-to-baseline distance including the line gap.
    pub fn line_spacing(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }
}

/// Pixel measurements a text node needs from its font.
///
/// The layout code never shapes text itself; everything it knows about
/// glyph geometry comes through this trait.
pub trait MetricsProvider {
    /// Advance width of a whole substring, including kerning.
    fn text_width(&self, text: &str) -> f32;

    /// Advance width of a single character.
    fn char_width(&self, ch: char) -> f32 {
        let mut buf = [0u8; 4];
        self.text_width(ch.encode_utf8(&mut buf))
    }

    /// Pixels above the baseline.
    fn ascent(&self) -> f32;

    /// Pixels below the baseline.
    fn descent(&self) -> f32;

    /// Height of the glyph box.
    fn height(&self) -> f32 {
        self.ascent() + self.descent()
    }

    /// Baseline-to-baseline distance used when no explicit line height is set.
    fn line_spacing(&self) -> f32 {
        self.height()
    }

    /// Distance from the glyph's ink to its advance edge; negative when
    /// the glyph overhangs.
    fn right_bearing(&self, _ch: char) -> f32 {
        0.0
    }
}

impl<M: MetricsProvider + ?Sized> MetricsProvider for &M {
    fn text_width(&self, text: &str) -> f32 {
        (**self).text_width(text)
    }
    fn char_width(&self, ch: char) -> f32 {
        (**self).char_width(ch)
    }
    fn ascent(&self) -> f32 {
        (**self).ascent()
    }
    fn descent(&self) -> f32 {
        (**self).descent()
    }
    fn height(&self) -> f32 {
        (**self).height()
    }
    fn line_spacing(&self) -> f32 {
        (**self).line_spacing()
    }
    fn right_bearing(&self, ch: char) -> f32 {
        (**self).right_bearing(ch)
    }
}

/// Deterministic metrics with a constant advance per character.
///
/// Ideographs advance twice as far, zero-width characters and newlines do
/// not advance at all. Used when no font file is available.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics {
    pub advance: f32,
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
}

impl FixedMetrics {
    pub fn new(advance: f32, ascent: f32, descent: f32) -> Self {
        Self {
            advance,
            ascent,
            descent,
            line_gap: 0.0,
        }
    }

    /// Metrics roughly proportional to a font of `font_size` pixels.
    pub fn for_font_size(font_size: f32) -> Self {
        Self {
            advance: (font_size * 0.6).round(),
            ascent: (font_size * 0.8).round(),
            descent: (font_size * 0.2).round(),
            line_gap: 0.0,
        }
    }

    pub fn with_line_gap(mut self, line_gap: f32) -> Self {
        self.line_gap = line_gap;
        self
    }
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self::new(8.0, 12.0, 4.0)
    }
}

impl MetricsProvider for FixedMetrics {
    fn text_width(&self, text: &str) -> f32 {
        text.chars().map(|ch| self.char_width(ch)).sum()
    }

    fn char_width(&self, ch: char) -> f32 {
        if ch == '\n' || is_zero_width(ch) {
            0.0
        } else if is_ideographic(ch) {
            self.advance * 2.0
        } else {
            self.advance
        }
    }

    fn ascent(&self) -> f32 {
        self.ascent
    }

    fn descent(&self) -> f32 {
        self.descent
    }

    fn line_spacing(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }
}
