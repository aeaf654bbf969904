//! Pure rasterization routines over a [`PixelBuffer`].
//!
//! Everything here writes through [`PixelBuffer::put`] and inherits its
//! bounds-safety, so callers can draw partially (or entirely) off-canvas
//! without pre-clipping. Colors are opaque overwrites; there is no blending
//! or anti-aliasing.

use crate::canvas::PixelBuffer;

/// Walk the 8-connected Bresenham discretization of the segment
/// `(x0,y0)..=(x1,y1)`, calling `visit` for every cell, endpoints included.
/// A zero-length segment visits its single cell once.
fn bresenham(x0: i32, y0: i32, x1: i32, y1: i32, mut visit: impl FnMut(i32, i32)) {
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        visit(x, y);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Draw a 1-pixel line between the two endpoints, inclusive.
pub fn draw_line(fb: &mut PixelBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    bresenham(x0, y0, x1, y1, |x, y| fb.put(x, y, color));
}

/// Draw the four border edges of the rectangle spanned by the two corners.
/// Corners are normalized first, so the argument order does not matter; a
/// zero-width or zero-height rect degenerates to a line (or a point).
pub fn stroke_rect(fb: &mut PixelBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (left, right) = (x0.min(x1), x0.max(x1));
    let (top, bottom) = (y0.min(y1), y0.max(y1));
    draw_line(fb, left, top, right, top, color);
    draw_line(fb, left, bottom, right, bottom, color);
    draw_line(fb, left, top, left, bottom, color);
    draw_line(fb, right, top, right, bottom, color);
}

/// Fill every cell of the rectangle spanned by the two corners, inclusive.
pub fn fill_rect(fb: &mut PixelBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (left, right) = (x0.min(x1), x0.max(x1));
    let (top, bottom) = (y0.min(y1), y0.max(y1));
    for y in top..=bottom {
        for x in left..=right {
            fb.put(x, y, color);
        }
    }
}

/// Draw the boundary of a circle using the 8-way symmetric midpoint
/// algorithm: one octant is computed, the other seven are mirrored.
/// `radius <= 0` degenerates to the single center pixel.
pub fn stroke_circle(fb: &mut PixelBuffer, cx: i32, cy: i32, radius: i32, color: u32) {
    if radius <= 0 {
        fb.put(cx, cy, color);
        return;
    }

    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;

    while x >= y {
        fb.put(cx + x, cy + y, color);
        fb.put(cx + y, cy + x, color);
        fb.put(cx - y, cy + x, color);
        fb.put(cx - x, cy + y, color);
        fb.put(cx - x, cy - y, color);
        fb.put(cx - y, cy - x, color);
        fb.put(cx + y, cy - x, color);
        fb.put(cx + x, cy - y, color);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Fill the closed disc `dx² + dy² <= radius²` centered at `(cx, cy)`.
/// Same inclusion test as [`stamp_disc`], so the two produce identical
/// pixel sets for identical arguments.
pub fn fill_circle(fb: &mut PixelBuffer, cx: i32, cy: i32, radius: i32, color: u32) {
    stamp_disc(fb, cx, cy, radius, color);
}

/// Stamp one disc-shaped brush application at `(cx, cy)`.
/// `radius <= 0` draws the single center pixel.
pub fn stamp_disc(fb: &mut PixelBuffer, cx: i32, cy: i32, radius: i32, color: u32) {
    if radius <= 0 {
        fb.put(cx, cy, color);
        return;
    }

    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                fb.put(cx + dx, cy + dy, color);
            }
        }
    }
}

/// Stamp a disc at every cell of the Bresenham line between the endpoints,
/// producing a continuous thick stroke instead of gapped stamps at sparse
/// sample points. Visits exactly the cell sequence of [`draw_line`].
pub fn stroke_discs(
    fb: &mut PixelBuffer,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    radius: i32,
    color: u32,
) {
    bresenham(x0, y0, x1, y1, |x, y| stamp_disc(fb, x, y, radius, color));
}

/// Integer square root by Newton/Heron iteration, converging to
/// `floor(sqrt(v))`. `v <= 0` yields `0`. Used to derive a circle radius
/// from a drag vector without floating point.
pub fn isqrt(v: i64) -> i32 {
    if v <= 0 {
        return 0;
    }
    let mut x = v;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + v / x) / 2;
    }
    x as i32
}
