use std::path::{Path, PathBuf};
use std::sync::Arc;

use fontdb::{Database, Family, Query};
use hashbrown::HashMap;

use crate::font::{FontError, FontFace, Result};

/// Key for identifying a font within the cache.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct FontKey {
    /// Path to the font file on disk.
    pub path: PathBuf,
    /// Font index within the file (for collections).
    pub index: u32,
}

impl FontKey {
    pub fn new(path: impl AsRef<Path>, index: usize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            index: index as u32,
        }
    }
}

/// Simple in-memory font cache keyed by file path and index.
#[derive(Debug, Default)]
pub struct FontCache {
    fonts: HashMap<FontKey, Arc<FontFace>>,
}

impl FontCache {
    pub fn new() -> Self {
        Self {
            fonts: HashMap::new(),
        }
    }

    /// Get a font face from the cache or load it from disk.
    pub fn get_or_load(&mut self, path: impl AsRef<Path>, index: usize) -> Result<Arc<FontFace>> {
        let key = FontKey::new(&path, index);
        if let Some(face) = self.fonts.get(&key) {
            return Ok(face.clone());
        }

        let face = Arc::new(FontFace::from_path(&key.path, index)?);
        tracing::debug!(path = %key.path.display(), index, "loaded font face");
        self.fonts.insert(key, face.clone());
        Ok(face)
    }

    /// Insert an already constructed font face with an explicit key.
    pub fn insert(&mut self, key: FontKey, face: Arc<FontFace>) {
        self.fonts.insert(key, face);
    }

    /// Retrieve a font by key if it exists.
    pub fn get(&self, key: &FontKey) -> Option<Arc<FontFace>> {
        self.fonts.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

/// Find a sans-serif face among the installed system fonts.
pub fn load_system_default_font() -> Result<FontFace> {
    let mut db = Database::new();
    db.load_system_fonts();

    let query = Query {
        families: &[Family::SansSerif, Family::Serif, Family::Monospace],
        ..Query::default()
    };
    let id = db.query(&query).ok_or(FontError::NoSystemFont)?;
    db.with_face_data(id, |data, index| {
        FontFace::from_vec(data.to_vec(), index as usize)
    })
    .ok_or(FontError::NoSystemFont)?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_font_file_is_io_error() {
        let mut cache = FontCache::new();
        let err = cache
            .get_or_load("/nonexistent/linebox/font.ttf", 0)
            .unwrap_err();
        assert!(matches!(err, FontError::Io(_)));
        assert!(cache.is_empty());
    }

    #[test]
    fn garbage_bytes_are_invalid_font() {
        let err = FontFace::from_vec(vec![0u8; 16], 0).unwrap_err();
        assert!(matches!(err, FontError::InvalidFont));
    }

    #[test]
    fn font_key_equality() {
        assert_eq!(FontKey::new("a.ttf", 1), FontKey::new("a.ttf", 1));
        assert_ne!(FontKey::new("a.ttf", 0), FontKey::new("a.ttf", 1));
    }
}
