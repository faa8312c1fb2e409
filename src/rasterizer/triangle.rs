//! Scanline triangle filling
//!
//! Triangles are snapped to the pixel grid, split into a flat-bottom and a
//! flat-top half at the middle vertex, and each half is walked one scanline
//! at a time.

use crate::geometry::TriFace2D;
use crate::math::Point2D;
use super::{fill_scanline, Color, Framebuffer};

/// Order vertices top to bottom. Equal Y keeps the original order.
fn sort_by_y(tri: TriFace2D) -> TriFace2D {
    let TriFace2D { mut a, mut b, mut c } = tri;
    if b.y < a.y {
        std::mem::swap(&mut a, &mut b);
    }
    if c.y < b.y {
        std::mem::swap(&mut b, &mut c);
    }
    if b.y < a.y {
        std::mem::swap(&mut a, &mut b);
    }
    TriFace2D::new(a, b, c)
}

fn floor_point(p: Point2D) -> Point2D {
    Point2D::new(p.x.floor(), p.y.floor())
}

/// Fill a triangle. Off-screen and degenerate triangles are skipped without
/// touching the buffer.
pub fn fill_triangle(fb: &mut Framebuffer, tri: TriFace2D, color: Color) {
    let sorted = sort_by_y(tri);
    let a = floor_point(sorted.a);
    let b = floor_point(sorted.b);
    let c = floor_point(sorted.c);

    // Zero height or zero width
    if a.y == c.y {
        return;
    }
    if a.x == b.x && b.x == c.x {
        return;
    }

    // Entirely above or below
    if a.y >= fb.height as f32 || c.y < 0.0 {
        return;
    }

    // Entirely left or right
    let width = fb.width as f32;
    if a.x < 0.0 && b.x < 0.0 && c.x < 0.0 {
        return;
    }
    if a.x >= width && b.x >= width && c.x >= width {
        return;
    }

    if b.y == c.y {
        fill_flat_bottom(fb, a, b, c, color);
        return;
    }
    if a.y == b.y {
        fill_flat_top(fb, a, b, c, true, color);
        return;
    }

    // Split along the long edge at the middle vertex's height. The middle row
    // belongs to the upper half only.
    let t = (b.y - a.y) / (c.y - a.y);
    let cut = Point2D::new(a.x + t * (c.x - a.x), b.y);

    fill_flat_bottom(fb, a, b, cut, color);
    fill_flat_top(fb, b, cut, c, false, color);
}

/// Rows `first..=last` clipped to the buffer, or `None` when none are visible
fn visible_rows(fb: &Framebuffer, first: f32, last: f32) -> Option<(i32, i32)> {
    let first = first.max(0.0);
    let last = last.min(fb.height as f32 - 1.0);
    (first <= last).then(|| (first as i32, last as i32))
}

/// Apex `top`, flat edge `left`-`right` below it
fn fill_flat_bottom(fb: &mut Framebuffer, top: Point2D, left: Point2D, right: Point2D, color: Color) {
    let (left, right) = if left.x > right.x { (right, left) } else { (left, right) };

    let inv_slope_left = (left.x - top.x) / (left.y - top.y);
    let inv_slope_right = (right.x - top.x) / (right.y - top.y);

    let Some((first, last)) = visible_rows(fb, top.y, left.y) else {
        return;
    };

    // Jump straight to the first visible row
    let skipped = first as f32 - top.y;
    let mut x1 = top.x + inv_slope_left * skipped;
    let mut x2 = top.x + inv_slope_right * skipped;

    for y in first..=last {
        fill_scanline(fb, x1, x2, y, color);
        x1 += inv_slope_left;
        x2 += inv_slope_right;
    }
}

/// Flat edge `left`-`right` on top, apex `bottom` below it. The flat edge's
/// own row is skipped unless `include_top` is set.
fn fill_flat_top(
    fb: &mut Framebuffer,
    left: Point2D,
    right: Point2D,
    bottom: Point2D,
    include_top: bool,
    color: Color,
) {
    let (left, right) = if left.x > right.x { (right, left) } else { (left, right) };

    let inv_slope_left = (bottom.x - left.x) / (bottom.y - left.y);
    let inv_slope_right = (bottom.x - right.x) / (bottom.y - right.y);

    let top_row = if include_top { left.y } else { left.y + 1.0 };
    let Some((first, last)) = visible_rows(fb, top_row, bottom.y) else {
        return;
    };

    // Walk upward from the apex, starting at the lowest visible row
    let skipped = bottom.y - last as f32;
    let mut x1 = bottom.x - inv_slope_left * skipped;
    let mut x2 = bottom.x - inv_slope_right * skipped;

    for y in (first..=last).rev() {
        fill_scanline(fb, x1, x2, y, color);
        x1 -= inv_slope_left;
        x2 -= inv_slope_right;
    }
}
