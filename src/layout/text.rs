use std::path::{Path, PathBuf};

use crate::{
    config::tree::{ConfigTree, Section, section_name},
    foundation::{
        core::{Point, Rgba8},
        error::{DiplomaError, DiplomaResult},
    },
    raster::bitmap::Bitmap,
    text::{
        draw::TextPainter,
        font::{DEFAULT_FONT_DIR, FontLoader, resolve_font_path},
    },
};

/// Namespace of the text sections (`[text]`, `[text.<id>]`).
pub const TEXT_NAMESPACE: &str = "text";
/// Key in `[text]` listing the item identifiers.
pub const WORDS_KEY: &str = "words";
/// Font file name (global in `[text]`, override in `[text.<id>]`).
pub const FONT_KEY: &str = "字体";
/// Font size in points (global in `[text]`, override in `[text.<id>]`).
pub const FONT_SIZE_KEY: &str = "字体大小";
/// Baseline origin `x,y` of an item.
pub const POSITION_KEY: &str = "位置";

const WORD_SEPARATOR: char = ',';
const FULLWIDTH_COMMA: char = '，';

#[derive(Clone, Debug, PartialEq)]
/// Run-level font settings that apply when the config does not name a font or size.
pub struct FontSettings {
    pub font_dir: PathBuf,
    pub default_font: String,
    pub default_size: f32,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            font_dir: PathBuf::from(DEFAULT_FONT_DIR),
            default_font: "simkai.ttf".to_string(),
            default_size: 24.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Global font path and size, resolved once from `[text]` before any item.
pub struct GlobalDefaults {
    pub font_path: PathBuf,
    pub font_size: f32,
}

impl GlobalDefaults {
    pub fn resolve(text: &Section, settings: &FontSettings) -> DiplomaResult<Self> {
        let font_name = text
            .key(FONT_KEY)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(settings.default_font.as_str());

        let configured = text
            .key(FONT_SIZE_KEY)
            .map(parse_font_size)
            .transpose()
            .map_err(|e| within(TEXT_NAMESPACE, e))?;
        let font_size = configured
            .filter(|s| *s != 0.0)
            .unwrap_or(settings.default_size);
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(DiplomaError::invalid_font_size(format!(
                "global font size must be > 0, got {font_size}"
            )));
        }

        let out = Self {
            font_path: resolve_font_path(&settings.font_dir, font_name),
            font_size,
        };
        tracing::debug!(
            font = %out.font_path.display(),
            size = out.font_size,
            "global text defaults"
        );
        Ok(out)
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
/// One configured text placement as read from `[text.<id>]`.
pub struct TextItem {
    pub id: String,
    pub content: String,
    pub x: i32,
    pub y: i32,
    pub font_name: Option<String>,
    /// `0.0` means "use the global size".
    pub font_size: f32,
}

impl TextItem {
    /// Apply the global fallbacks.
    pub fn place(&self, defaults: &GlobalDefaults, font_dir: &Path) -> Placement {
        let font_size = if self.font_size != 0.0 {
            self.font_size
        } else {
            defaults.font_size
        };
        let font_path = match &self.font_name {
            Some(name) => resolve_font_path(font_dir, name),
            None => defaults.font_path.clone(),
        };
        Placement {
            id: self.id.clone(),
            content: self.content.clone(),
            origin: Point::new(self.x, self.y),
            font_path,
            font_size,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Fully resolved draw call.
pub struct Placement {
    pub id: String,
    pub content: String,
    /// Baseline origin of the first glyph.
    pub origin: Point,
    pub font_path: PathBuf,
    pub font_size: f32,
}

/// Item identifiers declared in `[text] words`, in order, duplicates kept.
///
/// Both `,` and `，` separate identifiers; surrounding whitespace is trimmed.
pub fn declared_words(text: &Section) -> Vec<String> {
    let Some(raw) = text.key(WORDS_KEY) else {
        return Vec::new();
    };
    raw.replace(FULLWIDTH_COMMA, ",")
        .split(WORD_SEPARATOR)
        .map(|w| w.trim().to_string())
        .collect()
}

/// Parse `x,y` into integers. Components after the second are ignored.
pub fn parse_position(value: &str) -> DiplomaResult<(i32, i32)> {
    let norm = value.replace(FULLWIDTH_COMMA, ",");
    let mut parts = norm.split(WORD_SEPARATOR).map(str::trim);
    let (Some(x), Some(y)) = (parts.next(), parts.next()) else {
        return Err(DiplomaError::invalid_position(format!(
            "expected 'x,y', got '{value}'"
        )));
    };
    let int = |c: &str| -> DiplomaResult<i32> {
        c.parse::<i32>().map_err(|e| {
            DiplomaError::invalid_position(format!("component '{c}' of '{value}': {e}"))
        })
    };
    Ok((int(x)?, int(y)?))
}

/// Parse a font size in points. `0` is accepted and means "unset".
pub fn parse_font_size(value: &str) -> DiplomaResult<f32> {
    let v = value.trim();
    let size = v
        .parse::<f32>()
        .map_err(|e| DiplomaError::invalid_font_size(format!("'{value}': {e}")))?;
    if !size.is_finite() || size < 0.0 {
        return Err(DiplomaError::invalid_font_size(format!(
            "'{value}' is not a usable size"
        )));
    }
    Ok(size)
}

fn within(section: &str, err: DiplomaError) -> DiplomaError {
    match err {
        DiplomaError::InvalidPosition(m) => {
            DiplomaError::InvalidPosition(format!("[{section}] {m}"))
        }
        DiplomaError::InvalidFontSize(m) => {
            DiplomaError::InvalidFontSize(format!("[{section}] {m}"))
        }
        other => other,
    }
}

/// Read the section of item `id`.
///
/// Returns `None` for an item with empty content at `(0, 0)`: such an item cannot be told
/// apart from one that was never configured, so it is skipped.
pub fn resolve_item(tree: &ConfigTree, id: &str) -> DiplomaResult<Option<TextItem>> {
    let name = section_name(TEXT_NAMESPACE, id);
    let section = tree.section_or_empty(&name);
    tracing::debug!(section = %name, keys = section.keys().count(), "text item section");

    let mut item = TextItem {
        id: id.to_string(),
        ..TextItem::default()
    };
    for (key, value) in section.entries() {
        tracing::debug!(key, value, "text item key");
        if key == id {
            item.content = value.to_string();
        } else if key == POSITION_KEY {
            (item.x, item.y) = parse_position(value).map_err(|e| within(&name, e))?;
        } else if key == FONT_KEY {
            let v = value.trim();
            item.font_name = (!v.is_empty()).then(|| v.to_string());
        } else if key == FONT_SIZE_KEY {
            item.font_size = parse_font_size(value).map_err(|e| within(&name, e))?;
        }
    }

    if item.content.is_empty() && item.x == 0 && item.y == 0 {
        tracing::debug!(id, "text item not configured, skipping");
        return Ok(None);
    }
    Ok(Some(item))
}

/// Resolve every declared item into a draw call, in declaration (paint) order.
///
/// Nothing is drawn here: a bad value anywhere aborts before the first pixel changes.
pub fn resolve_placements(
    tree: &ConfigTree,
    defaults: &GlobalDefaults,
    font_dir: &Path,
) -> DiplomaResult<Vec<Placement>> {
    let words = declared_words(tree.section_or_empty(TEXT_NAMESPACE));
    let mut out = Vec::with_capacity(words.len());
    for id in &words {
        if let Some(item) = resolve_item(tree, id)? {
            out.push(item.place(defaults, font_dir));
        }
    }
    Ok(out)
}

/// Load every font the placements need, then draw them in order. Returns the draw count.
pub fn paint_placements(
    bmp: &mut Bitmap,
    placements: &[Placement],
    fonts: &mut dyn FontLoader,
    painter: &mut dyn TextPainter,
    color: Rgba8,
) -> DiplomaResult<usize> {
    let mut loaded = Vec::with_capacity(placements.len());
    for p in placements {
        loaded.push(fonts.load(&p.font_path)?);
    }
    for (p, font) in placements.iter().zip(&loaded) {
        painter.draw_text(bmp, &p.content, font, p.font_size, p.origin, color)?;
    }
    Ok(placements.len())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/text.rs"]
mod tests;
