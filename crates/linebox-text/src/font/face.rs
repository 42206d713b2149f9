use std::sync::Arc;

use swash::scale::ScaleContext;
use swash::scale::outline::Outline;
use swash::{FontRef, GlyphId, Metrics};

use crate::font::{FontError, FontMetrics, MetricsProvider, Result, ScaledFontMetrics};
use crate::shaping::TextShaper;

/// Loaded font face backed by a font file (TTF/OTF).
///
/// This is a thin wrapper around `swash::FontRef` that owns the
/// underlying font data and exposes metrics, advances and outlines.
#[derive(Debug, Clone)]
pub struct FontFace {
    /// Full font data.
    data: Arc<[u8]>,
    /// Face index within the file (for collections).
    index: u32,
    /// Offset to the table directory for this font.
    offset: u32,
    /// Cache key used internally by swash.
    key: swash::CacheKey,
    /// Extracted font metrics in font units.
    metrics: FontMetrics,
}

impl FontFace {
    /// Create a font face from raw bytes and a font index within the file.
    pub fn from_bytes(data: Arc<[u8]>, index: usize) -> Result<Self> {
        let font = FontRef::from_index(&data, index).ok_or(FontError::InvalidFont)?;
        let metrics = Self::metrics_from_swash(&font);
        let (offset, key) = (font.offset, font.key);
        Ok(Self {
            data,
            index: index as u32,
            offset,
            key,
            metrics,
        })
    }

    /// Create a font face from raw bytes owned by a `Vec<u8>`.
    pub fn from_vec(data: Vec<u8>, index: usize) -> Result<Self> {
        Self::from_bytes(Arc::from(data), index)
    }

    /// Create a font face from a font file on disk.
    pub fn from_path(path: impl AsRef<std::path::Path>, index: usize) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_vec(data, index)
    }

    /// Expose the raw font bytes for the shaper.
    pub fn as_bytes(&self) -> Arc<[u8]> {
        self.data.clone()
    }

    /// Face index within the font file.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Return a transient `FontRef` for interacting with swash APIs.
    fn as_swash_ref(&self) -> FontRef<'_> {
        FontRef {
            data: &self.data,
            offset: self.offset,
            key: self.key,
        }
    }

    fn metrics_from_swash(font: &FontRef<'_>) -> FontMetrics {
        // Default (no variation) coordinates.
        let Metrics {
            units_per_em,
            ascent,
            descent,
            leading,
            cap_height,
            x_height,
            ..
        } = font.metrics(&[]);

        FontMetrics {
            ascent,
            descent,
            line_gap: leading,
            units_per_em,
            cap_height: Some(cap_height),
            x_height: Some(x_height),
        }
    }

    /// Font metrics in font units.
    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    /// Font metrics scaled to the requested pixel size (px per em).
    pub fn scaled_metrics(&self, font_size: f32) -> ScaledFontMetrics {
        self.metrics.scale_to_pixels(font_size)
    }

    /// Nominal glyph for a character, 0 when the font has no mapping.
    pub fn glyph_for_char(&self, ch: char) -> GlyphId {
        self.as_swash_ref().charmap().map(ch)
    }

    /// Horizontal advance of a glyph in pixels.
    pub fn glyph_advance(&self, glyph_id: GlyphId, font_size: f32) -> f32 {
        self.as_swash_ref()
            .glyph_metrics(&[])
            .scale(font_size)
            .advance_width(glyph_id)
    }

    /// Convert a glyph id to a scaled outline at the specified size.
    pub fn glyph_outline(&self, glyph_id: GlyphId, font_size: f32) -> Option<Outline> {
        let mut context = ScaleContext::new();
        let font = self.as_swash_ref();
        let mut scaler = context.builder(font).size(font_size).build();
        scaler.scale_outline(glyph_id)
    }

    /// Bind this face to a pixel size for measurement.
    pub fn at_size(self: &Arc<Self>, font_size: f32) -> ScaledFace {
        ScaledFace::new(self.clone(), font_size)
    }
}

/// A font face bound to a pixel size, measuring text for layout.
#[derive(Debug, Clone)]
pub struct ScaledFace {
    face: Arc<FontFace>,
    font_size: f32,
    scaled: ScaledFontMetrics,
}

impl ScaledFace {
    pub fn new(face: Arc<FontFace>, font_size: f32) -> Self {
        let scaled = face.scaled_metrics(font_size);
        Self {
            face,
            font_size,
            scaled,
        }
    }

    pub fn face(&self) -> &Arc<FontFace> {
        &self.face
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn scaled_metrics(&self) -> ScaledFontMetrics {
        self.scaled
    }

    fn summed_advances(&self, text: &str) -> f32 {
        text.chars().map(|ch| self.char_width(ch)).sum()
    }
}

impl MetricsProvider for ScaledFace {
    fn text_width(&self, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        TextShaper::shaped_width(text, &self.face, self.font_size)
            .unwrap_or_else(|| self.summed_advances(text))
    }

    fn char_width(&self, ch: char) -> f32 {
        if ch == '\n' {
            return 0.0;
        }
        let glyph = self.face.glyph_for_char(ch);
        self.face.glyph_advance(glyph, self.font_size)
    }

    fn ascent(&self) -> f32 {
        self.scaled.ascent
    }

    fn descent(&self) -> f32 {
        self.scaled.descent
    }

    fn line_spacing(&self) -> f32 {
        self.scaled.line_spacing()
    }

    fn right_bearing(&self, ch: char) -> f32 {
        let glyph = self.face.glyph_for_char(ch);
        let advance = self.face.glyph_advance(glyph, self.font_size);
        match self.face.glyph_outline(glyph, self.font_size) {
            Some(outline) => {
                let bounds = outline.bounds();
                if bounds.max.x > bounds.min.x {
                    advance - bounds.max.x
                } else {
                    0.0
                }
            }
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::load_system_default_font;

    // Hosts without fonts skip these.
    fn system_face(font_size: f32) -> Option<ScaledFace> {
        let face = load_system_default_font().ok()?;
        Some(Arc::new(face).at_size(font_size))
    }

    #[test]
    fn shaped_width_matches_summed_advances() {
        let Some(scaled) = system_face(16.0) else { return };
        let pair = scaled.char_width('a') + scaled.char_width('b');
        assert!(pair > 0.0);
        assert!((scaled.text_width("ab") - pair).abs() < 1.0);
        assert_eq!(scaled.text_width(""), 0.0);
        assert!(scaled.text_width("abc") > scaled.text_width("ab"));

        let shaped = TextShaper::shaped_width("ab", scaled.face(), 16.0);
        assert_eq!(shaped, Some(scaled.text_width("ab")));
    }

    #[test]
    fn vertical_metrics_scale_with_size() {
        let (Some(small), Some(large)) = (system_face(12.0), system_face(24.0)) else {
            return;
        };
        assert!(small.height() > 0.0);
        assert!(small.ascent() > 0.0);
        assert!(large.height() > small.height());
        assert_eq!(small.char_width('\n'), 0.0);
    }
}
