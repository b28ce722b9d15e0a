use std::path::{Path, PathBuf};

use super::*;
use crate::text::font::{FontLoader, FsFontLoader};

const CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

fn system_font() -> Option<LoadedFont> {
    let path = CANDIDATES.iter().map(PathBuf::from).find(|p| p.is_file())?;
    FsFontLoader::new().load(&path).ok()
}

fn inked(bmp: &Bitmap, bg: Rgba8) -> Vec<(i32, i32)> {
    let mut out = Vec::new();
    for y in 0..bmp.height() as i32 {
        for x in 0..bmp.width() as i32 {
            if bmp.get(x, y) != Some(bg) {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn point_sizes_scale_with_dpi() {
    assert_eq!(CpuTextPainter::new(72.0).px_for_pt(24.0), 24.0);
    assert_eq!(CpuTextPainter::new(144.0).px_for_pt(24.0), 48.0);
}

#[test]
fn empty_text_is_a_no_op() {
    let font = LoadedFont::new(Path::new("none.ttf"), Vec::new(), "none");
    let white = Rgba8::opaque(255, 255, 255);
    let mut bmp = Bitmap::filled(8, 8, white);
    CpuTextPainter::new(72.0)
        .draw_text(&mut bmp, "", &font, 24.0, Point::new(1, 6), Rgba8::BLACK)
        .unwrap();
    assert!(inked(&bmp, white).is_empty());
}

#[test]
fn unparseable_font_bytes_fail_to_draw() {
    let font = LoadedFont::new(Path::new("bogus.ttf"), b"nope".to_vec(), "bogus");
    let mut bmp = Bitmap::new(8, 8);
    let err = CpuTextPainter::new(72.0)
        .draw_text(&mut bmp, "x", &font, 24.0, Point::new(1, 6), Rgba8::BLACK)
        .unwrap_err();
    assert!(matches!(err, DiplomaError::FontParse(_)));
}

#[test]
fn glyphs_sit_on_the_baseline_origin() {
    let Some(font) = system_font() else {
        return;
    };
    let white = Rgba8::opaque(255, 255, 255);
    let mut bmp = Bitmap::filled(120, 80, white);
    let origin = Point::new(20, 50);
    CpuTextPainter::new(72.0)
        .draw_text(&mut bmp, "HI", &font, 24.0, origin, Rgba8::BLACK)
        .unwrap();

    let ink = inked(&bmp, white);
    assert!(!ink.is_empty());
    let min_x = ink.iter().map(|p| p.0).min().unwrap();
    let min_y = ink.iter().map(|p| p.1).min().unwrap();
    let max_y = ink.iter().map(|p| p.1).max().unwrap();
    // Capitals rise above the baseline and do not descend below it.
    assert!(min_x >= origin.x - 1, "min_x={min_x}");
    assert!(max_y <= origin.y + 1, "max_y={max_y}");
    assert!(min_y < origin.y - 10, "min_y={min_y}");
}

const SAME_FAMILY_PAIRS: &[(&str, &str)] = &[
    (
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    ),
    (
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    ),
    (
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    ),
    (
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    ),
];

fn same_family_pair() -> Option<(LoadedFont, LoadedFont)> {
    let (regular, bold) = SAME_FAMILY_PAIRS
        .iter()
        .map(|(r, b)| (PathBuf::from(r), PathBuf::from(b)))
        .find(|(r, b)| r.is_file() && b.is_file())?;
    let mut loader = FsFontLoader::new();
    Some((loader.load(&regular).ok()?, loader.load(&bold).ok()?))
}

fn draw_alone(painter: &mut CpuTextPainter, font: &LoadedFont) -> Bitmap {
    let mut bmp = Bitmap::filled(320, 60, Rgba8::opaque(255, 255, 255));
    painter
        .draw_text(
            &mut bmp,
            "Wide bold text",
            font,
            24.0,
            Point::new(4, 40),
            Rgba8::BLACK,
        )
        .unwrap();
    bmp
}

#[test]
fn fonts_sharing_a_family_keep_their_own_faces() {
    let Some((regular, bold)) = same_family_pair() else {
        return;
    };
    assert_eq!(regular.family(), bold.family());
    let white = Rgba8::opaque(255, 255, 255);

    let bold_fresh = draw_alone(&mut CpuTextPainter::new(72.0), &bold);

    let mut shared = CpuTextPainter::new(72.0);
    let regular_shared = draw_alone(&mut shared, &regular);
    let bold_shared = draw_alone(&mut shared, &bold);

    assert_eq!(bold_shared, bold_fresh);
    assert!(inked(&bold_shared, white).len() > inked(&regular_shared, white).len());
}
