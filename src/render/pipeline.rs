use std::path::PathBuf;

use crate::{
    assets::codec::{DEFAULT_JPEG_QUALITY, encode_jpeg, open_background, write_output},
    config::{load::load_config, tree::ConfigTree},
    foundation::{core::Rgba8, error::DiplomaResult},
    layout::{
        shapes::{resolve_rings, resolve_stamp},
        text::{
            FontSettings, GlobalDefaults, Placement, TEXT_NAMESPACE, paint_placements,
            resolve_placements,
        },
    },
    raster::{
        bitmap::Bitmap,
        circle::{RingSpec, draw_rings},
        stamp::{StampSpec, draw_stamp},
    },
    text::{
        draw::{BASE_DPI, CpuTextPainter, TextPainter},
        font::{FontLoader, FsFontLoader},
    },
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything the config asks for, resolved and validated, before any pixel is touched.
pub struct LayoutPlan {
    pub defaults: GlobalDefaults,
    pub placements: Vec<Placement>,
    pub stamp: StampSpec,
    pub rings: RingSpec,
}

/// Resolve the whole layout from `tree`. Pure apart from logging.
pub fn plan_layout(tree: &ConfigTree, fonts: &FontSettings) -> DiplomaResult<LayoutPlan> {
    let defaults = GlobalDefaults::resolve(tree.section_or_empty(TEXT_NAMESPACE), fonts)?;
    let placements = resolve_placements(tree, &defaults, &fonts.font_dir)?;
    let stamp = resolve_stamp(tree)?;
    let rings = resolve_rings(tree)?;
    Ok(LayoutPlan {
        defaults,
        placements,
        stamp,
        rings,
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Counters reported after a render.
pub struct RenderStats {
    pub width: u32,
    pub height: u32,
    pub texts_drawn: usize,
    pub rings_drawn: usize,
}

/// Paint `plan` onto `bmp`: text items in declaration order, then the rings, then the stamp.
///
/// The global font is loaded before anything is drawn; failing to load it is fatal.
#[tracing::instrument(skip_all, fields(width = bmp.width(), height = bmp.height()))]
pub fn render_plan(
    bmp: &mut Bitmap,
    plan: &LayoutPlan,
    fonts: &mut dyn FontLoader,
    painter: &mut dyn TextPainter,
    text_color: Rgba8,
) -> DiplomaResult<RenderStats> {
    let global_font = fonts.load(&plan.defaults.font_path)?;

    let texts_drawn = paint_placements(bmp, &plan.placements, fonts, painter, text_color)?;

    draw_rings(bmp, &plan.rings);
    draw_stamp(bmp, &plan.stamp, &global_font, painter)?;

    let stats = RenderStats {
        width: bmp.width(),
        height: bmp.height(),
        texts_drawn,
        rings_drawn: plan.rings.radii.len(),
    };
    tracing::info!(
        texts = stats.texts_drawn,
        rings = stats.rings_drawn,
        "rendered certificate"
    );
    Ok(stats)
}

#[derive(Clone, Debug, PartialEq)]
/// One end-to-end render: config + background in, JPEG out.
pub struct RenderJob {
    pub config: PathBuf,
    pub background: PathBuf,
    pub out: PathBuf,
    pub quality: u8,
    pub dpi: f32,
    pub fonts: FontSettings,
    pub text_color: Rgba8,
}

impl Default for RenderJob {
    fn default() -> Self {
        Self {
            config: PathBuf::from("my.ini"),
            background: PathBuf::from("1.jpg"),
            out: PathBuf::from("a.jpg"),
            quality: DEFAULT_JPEG_QUALITY,
            dpi: BASE_DPI,
            fonts: FontSettings::default(),
            text_color: Rgba8::BLACK,
        }
    }
}

impl RenderJob {
    /// Load config and background, render, encode, and only then write the output file.
    pub fn run(&self) -> DiplomaResult<RenderStats> {
        let tree = load_config(&self.config)?;
        let mut bmp = open_background(&self.background)?;
        let plan = plan_layout(&tree, &self.fonts)?;

        let mut fonts = FsFontLoader::new();
        let mut painter = CpuTextPainter::new(self.dpi);
        let stats = render_plan(&mut bmp, &plan, &mut fonts, &mut painter, self.text_color)?;

        let bytes = encode_jpeg(&bmp, self.quality)?;
        write_output(&self.out, &bytes)?;
        tracing::info!(out = %self.out.display(), bytes = bytes.len(), "wrote output");
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
