//! Line, rectangle and circle rasterizers.
//!
//! All decision arithmetic runs in `i16`. Only the coordinates and span
//! lengths handed to the surface are truncated back to `u8`, so a shape that
//! hangs off the 0..=255 coordinate space wraps around at the edges instead
//! of corrupting the recurrence.

use tinycanvas_abi::PixelSurface;

/// Truncate to the coordinate width.
#[inline(always)]
fn coord(v: i16) -> u8 {
    v as u8
}

#[inline(always)]
fn plot<S: PixelSurface>(target: &mut S, x: i16, y: i16, color: S::Color) {
    target.set_pixel(coord(x), coord(y), color);
}

#[inline(always)]
fn vspan<S: PixelSurface>(target: &mut S, x: i16, y: i16, len: i16, color: S::Color) {
    target.draw_v_span(coord(x), coord(y), coord(len), color);
}

/// Bresenham line from `(x0, y0)` to `(x1, y1)`, both endpoints included.
///
/// The walk always steps along the longer axis and always left to right, so
/// swapping the endpoints yields the same pixel set.
pub fn line<S: PixelSurface>(target: &mut S, x0: u8, y0: u8, x1: u8, y1: u8, color: S::Color) {
    let (mut x0, mut y0, mut x1, mut y1) = (x0 as i16, y0 as i16, x1 as i16, y1 as i16);

    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        core::mem::swap(&mut x0, &mut y0);
        core::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        core::mem::swap(&mut x0, &mut x1);
        core::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = (y1 - y0).abs();
    let ystep = if y0 < y1 { 1 } else { -1 };
    let mut err = dx / 2;
    let mut y = y0;

    for x in x0..=x1 {
        if steep {
            plot(target, y, x, color);
        } else {
            plot(target, x, y, color);
        }
        err -= dy;
        if err < 0 {
            y += ystep;
            err += dx;
        }
    }
}

/// Unfilled rectangle outline built from four spans: top and bottom of
/// length `w` at rows `y` and `y + h`, left and right of length `h` at
/// columns `x` and `x + w`.
pub fn rect<S: PixelSurface>(target: &mut S, x: u8, y: u8, w: u8, h: u8, color: S::Color) {
    target.draw_h_span(x, y, w, color);
    target.draw_h_span(x, y.wrapping_add(h), w, color);
    target.draw_v_span(x, y, h, color);
    target.draw_v_span(x.wrapping_add(w), y, h, color);
}

/// Midpoint circle outline, one pixel wide, 8-way symmetric.
pub fn circle<S: PixelSurface>(target: &mut S, cx: u8, cy: u8, radius: u8, color: S::Color) {
    let (cx, cy, r) = (cx as i16, cy as i16, radius as i16);

    let mut f = 1 - r;
    let mut ddx = 1;
    let mut ddy = -2 * r;
    let mut rx = 0;
    let mut ry = r;

    plot(target, cx, cy + r, color);
    plot(target, cx, cy - r, color);
    plot(target, cx + r, cy, color);
    plot(target, cx - r, cy, color);

    while rx < ry {
        if f >= 0 {
            ry -= 1;
            ddy += 2;
            f += ddy;
        }
        rx += 1;
        ddx += 2;
        f += ddx;

        plot(target, cx + rx, cy + ry, color);
        plot(target, cx - rx, cy + ry, color);
        plot(target, cx + rx, cy - ry, color);
        plot(target, cx - rx, cy - ry, color);
        plot(target, cx + ry, cy + rx, color);
        plot(target, cx - ry, cy + rx, color);
        plot(target, cx + ry, cy - rx, color);
        plot(target, cx - ry, cy - rx, color);
    }
}

/// Filled circle. Same recurrence as [`circle`], emitted as vertical spans;
/// symmetric iterations overlap, which is harmless since spans assign.
pub fn circle_filled<S: PixelSurface>(
    target: &mut S,
    cx: u8,
    cy: u8,
    radius: u8,
    color: S::Color,
) {
    let (cx, cy, r) = (cx as i16, cy as i16, radius as i16);

    let mut f = 1 - r;
    let mut ddx = 1;
    let mut ddy = -2 * r;
    let mut rx = 0;
    let mut ry = r;

    vspan(target, cx, cy - r, 2 * r + 1, color);

    while rx < ry {
        if f >= 0 {
            ry -= 1;
            ddy += 2;
            f += ddy;
        }
        rx += 1;
        ddx += 2;
        f += ddx;

        vspan(target, cx + rx, cy - ry, 2 * ry + 1, color);
        vspan(target, cx - rx, cy - ry, 2 * ry + 1, color);
        vspan(target, cx + ry, cy - rx, 2 * rx + 1, color);
        vspan(target, cx - ry, cy - rx, 2 * rx + 1, color);
    }
}
