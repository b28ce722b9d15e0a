use std::path::Path;

use crate::{
    config::tree::{ConfigTree, Section},
    foundation::error::{DiplomaError, DiplomaResult},
};

/// Name given to keys that appear before the first `[section]` header.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Read and parse the INI file at `path`.
///
/// A missing file maps to [`DiplomaError::ConfigMissing`]; unreadable or malformed content
/// maps to [`DiplomaError::ConfigRead`].
pub fn load_config(path: &Path) -> DiplomaResult<ConfigTree> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(DiplomaError::ConfigMissing(path.to_path_buf()));
        }
        Err(e) => {
            return Err(DiplomaError::config_read(format!(
                "read '{}': {e}",
                path.display()
            )));
        }
    };
    parse_config(&text)
        .map_err(|e| DiplomaError::config_read(format!("parse '{}': {e}", path.display())))
}

/// Parse INI text into a [`ConfigTree`].
///
/// Backslash escapes are disabled so Windows font paths survive verbatim. A leading UTF-8
/// byte order mark is ignored.
pub fn parse_config(text: &str) -> Result<ConfigTree, ini::ParseError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let opt = ini::ParseOption {
        enabled_escape: false,
        ..ini::ParseOption::default()
    };
    let parsed = ini::Ini::load_from_str_opt(text, opt)?;

    let mut tree = ConfigTree::new();
    for (name, props) in parsed.iter() {
        let name = name.unwrap_or(DEFAULT_SECTION);
        let mut section = Section::new(name);
        for (k, v) in props.iter() {
            section.insert(k, v);
        }
        if section.is_empty() && name == DEFAULT_SECTION {
            continue;
        }
        tree.push(section);
    }

    tracing::debug!(sections = tree.len(), "parsed config");
    Ok(tree)
}

#[cfg(test)]
#[path = "../../tests/unit/config/load.rs"]
mod tests;
