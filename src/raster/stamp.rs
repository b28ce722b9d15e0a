use crate::{
    foundation::{
        core::{Point, Rgba8},
        error::{DiplomaError, DiplomaResult},
    },
    raster::bitmap::Bitmap,
    text::{draw::TextPainter, font::LoadedFont},
};

/// Border thickness in pixels.
pub const BORDER_PX: i32 = 4;
/// Point size used for the inscription glyphs.
pub const GLYPH_SIZE_PT: f32 = 35.0;
/// Glyph baseline origins relative to `p1 - (5, 5)`, in inscription order: right column
/// top and bottom, then left column top and bottom.
pub const GLYPH_OFFSETS: [(i32, i32); 4] = [(39, 40), (39, 70), (7, 40), (7, 70)];

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// Seal stamp: bordered box with a four-character inscription.
pub struct StampSpec {
    pub glyphs: [String; 4],
    pub p1: Point,
    pub p2: Point,
    pub border: Rgba8,
    pub ink: Rgba8,
}

impl StampSpec {
    /// Split a four-character inscription into its glyph slots.
    pub fn split_inscription(inscription: &str) -> DiplomaResult<[String; 4]> {
        let chars = inscription.trim().chars().collect::<Vec<_>>();
        let [a, b, c, d] = chars.as_slice() else {
            return Err(DiplomaError::invalid_stamp(format!(
                "inscription must have exactly 4 characters, got {} in '{inscription}'",
                chars.len()
            )));
        };
        Ok([a, b, c, d].map(|ch| ch.to_string()))
    }

    /// Baseline origins of the four glyph slots.
    pub fn glyph_origins(&self) -> [Point; 4] {
        let anchor = self.p1.offset(-5, -5);
        GLYPH_OFFSETS.map(|(dx, dy)| anchor.offset(dx, dy))
    }
}

/// Draw the 4-pixel border of the box spanned by `p1` (top-left) and `p2` (bottom-right).
///
/// Top rows are `p1.y..=p1.y+3`, bottom rows `p2.y..=p2.y+3` (below the corner), left
/// columns `p1.x..=p1.x+3` and right columns `p2.x-3..=p2.x` (inside the corner).
pub fn draw_stamp_border(bmp: &mut Bitmap, p1: Point, p2: Point, color: Rgba8) {
    for x in p1.x..=p2.x {
        for t in 0..BORDER_PX {
            bmp.set(x, p1.y + t, color);
            bmp.set(x, p2.y + t, color);
        }
    }
    for y in p1.y..=p2.y {
        for t in 0..BORDER_PX {
            bmp.set(p1.x + t, y, color);
            bmp.set(p2.x - t, y, color);
        }
    }
}

/// Draw the border, then the inscription glyphs at their fixed offsets.
pub fn draw_stamp(
    bmp: &mut Bitmap,
    stamp: &StampSpec,
    font: &LoadedFont,
    painter: &mut dyn TextPainter,
) -> DiplomaResult<()> {
    draw_stamp_border(bmp, stamp.p1, stamp.p2, stamp.border);
    for (glyph, origin) in stamp.glyphs.iter().zip(stamp.glyph_origins()) {
        painter.draw_text(bmp, glyph, font, GLYPH_SIZE_PT, origin, stamp.ink)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/raster/stamp.rs"]
mod tests;
