use std::path::Path;

use super::*;

#[derive(Default)]
struct RecordingPainter {
    calls: Vec<(String, f32, Point, Rgba8)>,
}

impl TextPainter for RecordingPainter {
    fn draw_text(
        &mut self,
        _bmp: &mut Bitmap,
        text: &str,
        _font: &LoadedFont,
        size_pt: f32,
        origin: Point,
        color: Rgba8,
    ) -> DiplomaResult<()> {
        self.calls.push((text.to_string(), size_pt, origin, color));
        Ok(())
    }
}

fn in_border(p1: Point, p2: Point, x: i32, y: i32) -> bool {
    let in_x = (p1.x..=p2.x).contains(&x);
    let in_y = (p1.y..=p2.y).contains(&y);
    let top = in_x && (p1.y..p1.y + 4).contains(&y);
    let bottom = in_x && (p2.y..p2.y + 4).contains(&y);
    let left = in_y && (p1.x..p1.x + 4).contains(&x);
    let right = in_y && (p2.x - 3..=p2.x).contains(&x);
    top || bottom || left || right
}

#[test]
fn border_covers_exactly_the_thickness_bands() {
    let border = Rgba8::opaque(157, 85, 50);
    let cases = [
        (Point::new(5, 6), Point::new(40, 30)),
        (Point::new(10, 10), Point::new(19, 19)),
        (Point::new(0, 0), Point::new(59, 40)),
    ];
    for (p1, p2) in cases {
        let mut bmp = Bitmap::filled(64, 48, Rgba8::BLACK);
        draw_stamp_border(&mut bmp, p1, p2, border);
        for y in 0..48 {
            for x in 0..64 {
                let painted = bmp.get(x, y) == Some(border);
                assert_eq!(painted, in_border(p1, p2, x, y), "{p1:?}-{p2:?} at ({x},{y})");
            }
        }
    }
}

#[test]
fn bottom_band_grows_outward_and_right_band_inward() {
    let border = Rgba8::opaque(157, 85, 50);
    let (p1, p2) = (Point::new(10, 10), Point::new(30, 30));
    let mut bmp = Bitmap::filled(48, 48, Rgba8::BLACK);
    draw_stamp_border(&mut bmp, p1, p2, border);

    assert_eq!(bmp.get(20, 33), Some(border));
    assert_eq!(bmp.get(20, 34), Some(Rgba8::BLACK));
    assert_eq!(bmp.get(27, 20), Some(border));
    assert_eq!(bmp.get(26, 20), Some(Rgba8::BLACK));
    assert_eq!(bmp.get(31, 20), Some(Rgba8::BLACK));
    // The right band stops at p2.y even though the bottom band continues below.
    assert_eq!(bmp.get(27, 31), Some(border));
    assert_eq!(bmp.get(8, 20), Some(Rgba8::BLACK));
}

#[test]
fn inscription_splits_into_four_glyphs() {
    let glyphs = StampSpec::split_inscription("陈中江印").unwrap();
    assert_eq!(glyphs, ["陈", "中", "江", "印"].map(String::from));
}

#[test]
fn inscription_must_have_four_characters() {
    for bad in ["", "陈中江", "陈中江印章"] {
        assert!(matches!(
            StampSpec::split_inscription(bad),
            Err(DiplomaError::InvalidStamp(_))
        ));
    }
}

#[test]
fn glyphs_are_drawn_in_a_two_by_two_grid_at_size_35() {
    let stamp = StampSpec {
        glyphs: StampSpec::split_inscription("陈中江印").unwrap(),
        p1: Point::new(760, 570),
        p2: Point::new(830, 640),
        border: Rgba8::opaque(157, 85, 50),
        ink: Rgba8::opaque(187, 80, 60),
    };
    let font = LoadedFont::new(Path::new("simkai.ttf"), Vec::new(), "KaiTi");
    let mut painter = RecordingPainter::default();
    let mut bmp = Bitmap::new(900, 700);

    draw_stamp(&mut bmp, &stamp, &font, &mut painter).unwrap();

    let expected = [
        ("陈", Point::new(794, 605)),
        ("中", Point::new(794, 635)),
        ("江", Point::new(762, 605)),
        ("印", Point::new(762, 635)),
    ];
    assert_eq!(painter.calls.len(), 4);
    for ((text, size, origin, color), (want_text, want_origin)) in
        painter.calls.iter().zip(expected)
    {
        assert_eq!(text, want_text);
        assert_eq!(*size, GLYPH_SIZE_PT);
        assert_eq!(*origin, want_origin);
        assert_eq!(*color, stamp.ink);
    }
    assert_eq!(bmp.get(760, 570), Some(stamp.border));
    assert_eq!(bmp.get(830, 643), Some(stamp.border));
}
