use core::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

/// A Unicode extended grapheme cluster within a UTF-8 string.
///
/// The range is expressed in byte offsets into the original string.
#[derive(Debug, Clone)]
pub struct GraphemeCluster {
    pub range: Range<usize>,
}

/// Compute all grapheme clusters for the given text in scan order.
pub fn grapheme_clusters(text: &str) -> Vec<GraphemeCluster> {
    text.grapheme_indices(true)
        .map(|(byte_idx, g)| GraphemeCluster {
            range: byte_idx..byte_idx + g.len(),
        })
        .collect()
}

/// Largest char boundary that is `<= offset`, clamped to the text length.
pub fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
