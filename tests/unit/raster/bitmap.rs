use super::*;

#[test]
fn set_and_get_in_bounds() {
    let mut bmp = Bitmap::new(4, 3);
    let red = Rgba8::opaque(255, 0, 0);
    bmp.set(3, 2, red);
    assert_eq!(bmp.get(3, 2), Some(red));
    assert_eq!(bmp.get(0, 0), Some(Rgba8 { r: 0, g: 0, b: 0, a: 0 }));
}

#[test]
fn out_of_bounds_writes_are_ignored() {
    let mut bmp = Bitmap::filled(2, 2, Rgba8::BLACK);
    let before = bmp.clone();
    let red = Rgba8::opaque(255, 0, 0);
    bmp.set(-1, 0, red);
    bmp.set(0, -1, red);
    bmp.set(2, 0, red);
    bmp.set(0, 2, red);
    assert_eq!(bmp, before);
    assert_eq!(bmp.get(2, 0), None);
}

#[test]
fn composite_premul_blends_over_opaque_surface() {
    let mut bmp = Bitmap::filled(2, 1, Rgba8::opaque(255, 255, 255));
    // pixel 0: opaque black, pixel 1: fully transparent
    let layer = [0u8, 0, 0, 255, 0, 0, 0, 0];
    bmp.composite_premul(&layer).unwrap();
    assert_eq!(bmp.get(0, 0), Some(Rgba8::BLACK));
    assert_eq!(bmp.get(1, 0), Some(Rgba8::opaque(255, 255, 255)));
}

#[test]
fn composite_premul_rejects_size_mismatch() {
    let mut bmp = Bitmap::new(2, 2);
    assert!(matches!(
        bmp.composite_premul(&[0u8; 4]),
        Err(DiplomaError::TextDraw(_))
    ));
}
