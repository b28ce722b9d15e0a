use std::path::PathBuf;

/// Convenience result type used across diploma.
pub type DiplomaResult<T> = Result<T, DiplomaError>;

/// Top-level error taxonomy. Every variant is fatal for a render run.
#[derive(thiserror::Error, Debug)]
pub enum DiplomaError {
    /// The configuration file does not exist.
    #[error("config file '{}' does not exist", .0.display())]
    ConfigMissing(PathBuf),

    /// The configuration file exists but could not be read or parsed.
    #[error("config read error: {0}")]
    ConfigRead(String),

    /// A section was looked up strictly and is not present.
    #[error("config section '{0}' is missing")]
    MissingSection(String),

    /// The background image could not be opened.
    #[error("image open error: {0}")]
    ImageOpen(String),

    /// The background image bytes could not be decoded.
    #[error("image decode error: {0}")]
    ImageDecode(String),

    /// Font bytes could not be read from disk.
    #[error("font read error: {0}")]
    FontRead(String),

    /// Font bytes were read but do not describe a usable font.
    #[error("font parse error: {0}")]
    FontParse(String),

    /// A `位置` value is not a pair (or box) of integers.
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// A `字体大小` value is not a number.
    #[error("invalid font size: {0}")]
    InvalidFontSize(String),

    /// A color value is not an `r,g,b` triple of bytes.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// The stamp inscription or geometry is unusable.
    #[error("invalid stamp: {0}")]
    InvalidStamp(String),

    /// Glyph layout or rasterization failed.
    #[error("text draw error: {0}")]
    TextDraw(String),

    /// The output file could not be created or written.
    #[error("image create error: {0}")]
    ImageCreate(String),

    /// The composited bitmap could not be encoded.
    #[error("image encode error: {0}")]
    ImageEncode(String),
}

impl DiplomaError {
    /// Build a [`DiplomaError::ConfigRead`] value.
    pub fn config_read(msg: impl Into<String>) -> Self {
        Self::ConfigRead(msg.into())
    }

    /// Build a [`DiplomaError::InvalidPosition`] value.
    pub fn invalid_position(msg: impl Into<String>) -> Self {
        Self::InvalidPosition(msg.into())
    }

    /// Build a [`DiplomaError::InvalidFontSize`] value.
    pub fn invalid_font_size(msg: impl Into<String>) -> Self {
        Self::InvalidFontSize(msg.into())
    }

    /// Build a [`DiplomaError::InvalidColor`] value.
    pub fn invalid_color(msg: impl Into<String>) -> Self {
        Self::InvalidColor(msg.into())
    }

    /// Build a [`DiplomaError::InvalidStamp`] value.
    pub fn invalid_stamp(msg: impl Into<String>) -> Self {
        Self::InvalidStamp(msg.into())
    }

    /// Build a [`DiplomaError::TextDraw`] value.
    pub fn text_draw(msg: impl Into<String>) -> Self {
        Self::TextDraw(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
