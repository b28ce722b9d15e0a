use std::{collections::HashMap, path::PathBuf};

use crate::{
    foundation::{
        core::{Point, Rgba8},
        error::{DiplomaError, DiplomaResult},
    },
    raster::bitmap::Bitmap,
    text::font::{LoadedFont, isolated_font_context},
};

/// Resolution at which font sizes are expressed in pixels one-to-one.
pub const BASE_DPI: f32 = 72.0;

/// Draws a string onto a bitmap.
pub trait TextPainter {
    /// Draw `text` with `font` at `size_pt` points. `origin` is the baseline origin of the
    /// first glyph, not the top-left corner of its box.
    fn draw_text(
        &mut self,
        bmp: &mut Bitmap,
        text: &str,
        font: &LoadedFont,
        size_pt: f32,
        origin: Point,
        color: Rgba8,
    ) -> DiplomaResult<()>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

struct RegisteredFont {
    family: String,
    font_ctx: parley::FontContext,
}

/// Parley layout context plus one isolated font context per registered file, keyed by path.
///
/// Each file gets its own collection, so two files sharing a family name never resolve to
/// each other's faces.
pub struct TextLayoutEngine {
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    registered: HashMap<PathBuf, RegisteredFont>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub fn new() -> Self {
        Self {
            layout_ctx: parley::LayoutContext::new(),
            registered: HashMap::new(),
        }
    }

    fn register<'a>(
        registered: &'a mut HashMap<PathBuf, RegisteredFont>,
        font: &LoadedFont,
    ) -> DiplomaResult<&'a mut RegisteredFont> {
        let path = font.path().to_path_buf();
        if !registered.contains_key(&path) {
            let mut font_ctx = isolated_font_context();
            let families = font_ctx
                .collection
                .register_fonts(parley::fontique::Blob::from(font.bytes().to_vec()), None);
            let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
                DiplomaError::FontParse(format!(
                    "no font faces found in '{}'",
                    font.path().display()
                ))
            })?;
            let family = font_ctx
                .collection
                .family_name(family_id)
                .unwrap_or(font.family())
                .to_string();
            registered.insert(path.clone(), RegisteredFont { family, font_ctx });
        }
        registered
            .get_mut(&path)
            .ok_or_else(|| DiplomaError::text_draw("font registration vanished"))
    }

    /// Shape `text` as a single unbroken line using only the faces of `font`.
    pub fn layout_line(
        &mut self,
        text: &str,
        font: &LoadedFont,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> DiplomaResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(DiplomaError::text_draw(format!(
                "font size must be finite and > 0, got {size_px}"
            )));
        }
        let registered = Self::register(&mut self.registered, font)?;
        let family = registered.family.clone();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut registered.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

/// CPU text painter: Parley shaping, `vello_cpu` glyph rasterization, then a source-over
/// composite onto the bitmap.
pub struct CpuTextPainter {
    engine: TextLayoutEngine,
    dpi: f32,
}

impl CpuTextPainter {
    pub fn new(dpi: f32) -> Self {
        Self {
            engine: TextLayoutEngine::new(),
            dpi,
        }
    }

    /// Pixel size for a point size at this painter's resolution.
    pub fn px_for_pt(&self, size_pt: f32) -> f32 {
        size_pt * self.dpi / BASE_DPI
    }
}

impl TextPainter for CpuTextPainter {
    fn draw_text(
        &mut self,
        bmp: &mut Bitmap,
        text: &str,
        font: &LoadedFont,
        size_pt: f32,
        origin: Point,
        color: Rgba8,
    ) -> DiplomaResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        let w: u16 = bmp
            .width()
            .try_into()
            .map_err(|_| DiplomaError::text_draw("bitmap width exceeds u16"))?;
        let h: u16 = bmp
            .height()
            .try_into()
            .map_err(|_| DiplomaError::text_draw("bitmap height exceeds u16"))?;

        let size_px = self.px_for_pt(size_pt);
        let layout = self
            .engine
            .layout_line(text, font, size_px, color.into())?;
        let mut ctx = vello_cpu::RenderContext::new(w, h);
        let mut first_baseline = None::<f32>;
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let baseline = *first_baseline.get_or_insert(run.baseline());
                let dy = origin.y as f32 + (run.baseline() - baseline);
                let mut run_x = origin.x as f32 + run.offset();
                let glyphs = run
                    .glyphs()
                    .map(|g| {
                        let out = vello_cpu::Glyph {
                            id: g.id,
                            x: run_x + g.x,
                            y: dy - g.y,
                        };
                        run_x += g.advance;
                        out
                    })
                    .collect::<Vec<_>>();

                // the face the run was shaped with
                ctx.glyph_run(run.run().font())
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs.into_iter());
            }
        }

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        bmp.composite_premul(pixmap.data_as_u8_slice())?;

        tracing::debug!(
            text,
            x = origin.x,
            y = origin.y,
            size_pt,
            size_px,
            family = font.family(),
            "drew text"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/draw.rs"]
mod tests;
