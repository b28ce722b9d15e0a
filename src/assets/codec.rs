use std::path::Path;

use crate::{
    foundation::error::{DiplomaError, DiplomaResult},
    raster::bitmap::Bitmap,
};

/// JPEG quality used when none is configured.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Decode encoded image bytes into a straight RGBA8 bitmap.
pub fn decode_image(bytes: &[u8]) -> DiplomaResult<Bitmap> {
    let dyn_img =
        image::load_from_memory(bytes).map_err(|e| DiplomaError::ImageDecode(e.to_string()))?;
    Ok(Bitmap::from_image(dyn_img.to_rgba8()))
}

/// Read and decode the background photo at `path`.
pub fn open_background(path: &Path) -> DiplomaResult<Bitmap> {
    let bytes = std::fs::read(path)
        .map_err(|e| DiplomaError::ImageOpen(format!("'{}': {e}", path.display())))?;
    let bmp = decode_image(&bytes).map_err(|e| match e {
        DiplomaError::ImageDecode(m) => {
            DiplomaError::ImageDecode(format!("'{}': {m}", path.display()))
        }
        other => other,
    })?;
    tracing::debug!(
        path = %path.display(),
        width = bmp.width(),
        height = bmp.height(),
        "decoded background"
    );
    Ok(bmp)
}

/// Encode `bmp` as baseline JPEG. Alpha is dropped.
pub fn encode_jpeg(bmp: &Bitmap, quality: u8) -> DiplomaResult<Vec<u8>> {
    let rgb = image::DynamicImage::ImageRgba8(bmp.as_image().clone()).to_rgb8();
    let mut out = Vec::new();
    let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, quality);
    encoder
        .encode(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| DiplomaError::ImageEncode(e.to_string()))?;
    Ok(out)
}

/// Write already-encoded bytes to `path`, creating the parent directory if needed.
pub fn write_output(path: &Path, bytes: &[u8]) -> DiplomaResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            DiplomaError::ImageCreate(format!("create dir '{}': {e}", parent.display()))
        })?;
    }
    std::fs::write(path, bytes)
        .map_err(|e| DiplomaError::ImageCreate(format!("'{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/codec.rs"]
mod tests;
