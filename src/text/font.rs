use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::foundation::error::{DiplomaError, DiplomaResult};

/// Default directory searched for font file names that are not absolute paths.
#[cfg(windows)]
pub const DEFAULT_FONT_DIR: &str = "C:\\Windows\\Fonts";
/// Default directory searched for font file names that are not absolute paths.
#[cfg(not(windows))]
pub const DEFAULT_FONT_DIR: &str = "/usr/share/fonts";

/// Resolve a configured font name: absolute paths are kept, anything else is looked up in
/// `font_dir`.
pub fn resolve_font_path(font_dir: &Path, name: &str) -> PathBuf {
    let p = Path::new(name);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        font_dir.join(p)
    }
}

#[derive(Clone)]
/// Parsed font resource: raw bytes plus the family name detected from them.
pub struct LoadedFont {
    path: PathBuf,
    bytes: Arc<Vec<u8>>,
    family: String,
}

impl std::fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedFont")
            .field("path", &self.path)
            .field("bytes_len", &self.bytes.len())
            .field("family", &self.family)
            .finish()
    }
}

impl LoadedFont {
    pub fn new(path: impl Into<PathBuf>, bytes: Vec<u8>, family: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            bytes: Arc::new(bytes),
            family: family.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn family(&self) -> &str {
        &self.family
    }
}

/// Materializes fonts from resolved paths.
pub trait FontLoader {
    /// Load the font stored at `path`.
    fn load(&mut self, path: &Path) -> DiplomaResult<LoadedFont>;
}

/// Font context that only knows the fonts registered into it: no system fonts, no sharing.
pub(crate) fn isolated_font_context() -> parley::FontContext {
    parley::FontContext {
        collection: parley::fontique::Collection::new(parley::fontique::CollectionOptions {
            shared: false,
            system_fonts: false,
        }),
        source_cache: parley::fontique::SourceCache::default(),
    }
}

/// File-system font loader with a per-path cache. Fonts never change once loaded.
#[derive(Default)]
pub struct FsFontLoader {
    cache: HashMap<PathBuf, LoadedFont>,
}

impl FsFontLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct fonts loaded so far.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    fn parse(path: &Path, bytes: Vec<u8>) -> DiplomaResult<LoadedFont> {
        let mut font_ctx = isolated_font_context();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            DiplomaError::FontParse(format!("no font faces found in '{}'", path.display()))
        })?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| {
                DiplomaError::FontParse(format!(
                    "font family in '{}' has no name",
                    path.display()
                ))
            })?
            .to_string();
        Ok(LoadedFont::new(path, bytes, family))
    }
}

impl FontLoader for FsFontLoader {
    fn load(&mut self, path: &Path) -> DiplomaResult<LoadedFont> {
        if let Some(font) = self.cache.get(path) {
            return Ok(font.clone());
        }

        let bytes = std::fs::read(path)
            .map_err(|e| DiplomaError::FontRead(format!("read '{}': {e}", path.display())))?;
        let font = Self::parse(path, bytes)?;
        tracing::debug!(path = %path.display(), family = font.family(), "loaded font");

        self.cache.insert(path.to_path_buf(), font.clone());
        Ok(font)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
