//! Error types for text node layout.

use thiserror::Error;

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors raised when a caller hands the layout code an inconsistent range.
///
/// Everything else in this crate is infallible: degraded answers for
/// reversed runs are reported through `Option` / `HitTest::Before`, not here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The requested range extends past the end of the text.
    #[error("range {start}..{end} is outside text of length {len}")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },

    /// The offset does not fall on a UTF-8 character boundary.
    #[error("offset {0} is not on a character boundary")]
    NotCharBoundary(usize),
}
