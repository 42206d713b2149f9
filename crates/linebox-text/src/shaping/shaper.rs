use harfrust::{
    Direction as HbDirection, FontRef as HbFontRef, Script as HbScript, ShaperData,
    ShaperInstance, Tag as HbTag, UnicodeBuffer as HbUnicodeBuffer,
};

use crate::font::FontFace;

/// Single-font, left-to-right shaper built on harfrust (pure-Rust HarfBuzz port).
///
/// Kerning and ligatures follow HarfBuzz semantics, so substring widths
/// measured here match what a painter would draw.
pub struct TextShaper;

impl TextShaper {
    /// Shaped advance width of `text` in pixels.
    ///
    /// Returns `None` when harfrust cannot parse the font data.
    pub fn shaped_width(text: &str, font: &FontFace, font_size: f32) -> Option<f32> {
        let font_data = font.as_bytes();
        let font_ref = HbFontRef::from_index(&font_data, font.index()).ok()?;

        let data = ShaperData::new(&font_ref);
        let instance = ShaperInstance::from_variations(
            &font_ref,
            core::iter::empty::<harfrust::Variation>(),
        );
        let shaper = data
            .shaper(&font_ref)
            .instance(Some(&instance))
            .point_size(None)
            .build();

        let mut buffer = HbUnicodeBuffer::new();
        buffer.push_str(text);
        buffer.set_direction(HbDirection::LeftToRight);
        let latin_tag = HbTag::new(b"Latn");
        if let Some(script) = HbScript::from_iso15924_tag(latin_tag) {
            buffer.set_script(script);
        }
        buffer.guess_segment_properties();

        let glyph_buffer = shaper.shape(buffer, &[]);

        // harfrust reports design units.
        let metrics = font.metrics();
        let scale = if metrics.units_per_em != 0 {
            font_size / metrics.units_per_em as f32
        } else {
            1.0
        };
        let units: i64 = glyph_buffer
            .glyph_positions()
            .iter()
            .map(|pos| i64::from(pos.x_advance))
            .sum();
        Some(units as f32 * scale)
    }
}
