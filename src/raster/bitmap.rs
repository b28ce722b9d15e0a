use crate::foundation::{
    core::Rgba8,
    error::{DiplomaError, DiplomaResult},
    math::{premul_over_px, premul_px, unpremul_px},
};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Mutable straight-alpha RGBA8 surface that every drawing step writes into.
///
/// Writes outside the surface are silently dropped, so primitives never bounds-check.
pub struct Bitmap {
    img: image::RgbaImage,
}

impl Bitmap {
    /// Transparent surface of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            img: image::RgbaImage::new(width, height),
        }
    }

    /// Surface filled with `color`.
    pub fn filled(width: u32, height: u32, color: Rgba8) -> Self {
        Self {
            img: image::RgbaImage::from_pixel(width, height, image::Rgba(color.to_array())),
        }
    }

    pub fn from_image(img: image::RgbaImage) -> Self {
        Self { img }
    }

    pub fn as_image(&self) -> &image::RgbaImage {
        &self.img
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    fn index(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        (x < self.img.width() && y < self.img.height()).then_some((x, y))
    }

    /// Overwrite one pixel; out-of-bounds coordinates are ignored.
    pub fn set(&mut self, x: i32, y: i32, color: Rgba8) {
        if let Some((x, y)) = self.index(x, y) {
            self.img.put_pixel(x, y, image::Rgba(color.to_array()));
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgba8> {
        self.index(x, y).map(|(x, y)| {
            let [r, g, b, a] = self.img.get_pixel(x, y).0;
            Rgba8 { r, g, b, a }
        })
    }

    /// Source-over composite of a same-sized premultiplied RGBA8 layer.
    pub fn composite_premul(&mut self, layer: &[u8]) -> DiplomaResult<()> {
        let raw: &mut [u8] = &mut self.img;
        if raw.len() != layer.len() {
            return Err(DiplomaError::text_draw(format!(
                "layer has {} bytes, surface has {}",
                layer.len(),
                raw.len()
            )));
        }
        for (d, s) in raw.chunks_exact_mut(4).zip(layer.chunks_exact(4)) {
            if s[3] == 0 {
                continue;
            }
            let dst = premul_px([d[0], d[1], d[2], d[3]]);
            let out = unpremul_px(premul_over_px(dst, [s[0], s[1], s[2], s[3]]));
            d.copy_from_slice(&out);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/bitmap.rs"]
mod tests;
