//! Config-driven certificate rendering.
//!
//! A run reads an INI-style config, resolves every text placement and decoration up front,
//! paints them over a background photo and writes the result as JPEG:
//!
//! - Load a [`ConfigTree`] with [`load_config`]
//! - Resolve a [`LayoutPlan`] with [`plan_layout`]
//! - Paint it with [`render_plan`], or run the whole thing with [`RenderJob::run`]
#![forbid(unsafe_code)]

mod assets;
mod config;
mod foundation;
mod layout;
mod raster;
mod text;

/// Render orchestration.
pub mod render;

pub use crate::assets::codec::{
    DEFAULT_JPEG_QUALITY, decode_image, encode_jpeg, open_background, write_output,
};
pub use crate::config::load::{load_config, parse_config};
pub use crate::config::tree::{ConfigTree, Section, section_name};
pub use crate::foundation::core::{Point, Rgba8};
pub use crate::foundation::error::{DiplomaError, DiplomaResult};
pub use crate::layout::shapes::{parse_box, resolve_rings, resolve_stamp};
pub use crate::layout::text::{
    FontSettings, GlobalDefaults, Placement, TextItem, declared_words, paint_placements,
    parse_font_size, parse_position, resolve_item, resolve_placements,
};
pub use crate::raster::bitmap::Bitmap;
pub use crate::raster::circle::{RingSpec, draw_circle, draw_rings, rasterize_circle};
pub use crate::raster::stamp::{StampSpec, draw_stamp, draw_stamp_border};
pub use crate::render::pipeline::{LayoutPlan, RenderJob, RenderStats, plan_layout, render_plan};
pub use crate::text::draw::{BASE_DPI, CpuTextPainter, TextPainter};
pub use crate::text::font::{
    DEFAULT_FONT_DIR, FontLoader, FsFontLoader, LoadedFont, resolve_font_path,
};
