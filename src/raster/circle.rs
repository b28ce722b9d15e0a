use crate::{
    foundation::core::{Point, Rgba8},
    raster::bitmap::Bitmap,
};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// Concentric outlines sharing one center and color.
pub struct RingSpec {
    pub center: Point,
    pub radii: Vec<i32>,
    pub color: Rgba8,
}

/// Walk the midpoint circle of radius `r` and hand every plotted offset (relative to the
/// center) to `plot`, eight symmetric points per step.
///
/// Starts at `(r - 1, 0)` with `err = 1 - 2r` and stops once `x <= y`. `r <= 0` plots
/// nothing.
pub fn rasterize_circle(r: i32, mut plot: impl FnMut(i32, i32)) {
    let (mut x, mut y) = (r - 1, 0);
    let (mut dx, mut dy) = (1, 1);
    let mut err = dx - 2 * r;

    while x > y {
        plot(x, y);
        plot(y, x);
        plot(-y, x);
        plot(-x, y);
        plot(-x, -y);
        plot(-y, -x);
        plot(y, -x);
        plot(x, -y);

        if err <= 0 {
            y += 1;
            err += dy;
            dy += 2;
        }
        if err > 0 {
            x -= 1;
            dx += 2;
            err += dx - 2 * r;
        }
    }
}

/// Draw a 1-pixel circle outline centered on `center`.
pub fn draw_circle(bmp: &mut Bitmap, center: Point, r: i32, color: Rgba8) {
    rasterize_circle(r, |dx, dy| bmp.set(center.x + dx, center.y + dy, color));
}

/// Draw one outline per radius, in declaration order.
pub fn draw_rings(bmp: &mut Bitmap, rings: &RingSpec) {
    for &r in &rings.radii {
        draw_circle(bmp, rings.center, r, rings.color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/circle.rs"]
mod tests;
