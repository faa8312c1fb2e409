//! Bit-packed monochrome framebuffer and rectangle fills
//!
//! Rows are `stride` bytes long, 8 pixels per byte, most significant bit on
//! the left. The stride is the pixel width rounded up to whole bytes plus
//! `ROW_PADDING` bytes that are never written.

use crate::geometry::Box2D;
use super::Color;
use super::{DISPLAY_HEIGHT, DISPLAY_WIDTH, ROW_PADDING};

pub struct Framebuffer {
    pub bytes: Vec<u8>,
    pub width: usize,
    pub height: usize,
    pub stride: usize,
}

impl Framebuffer {
    /// All-black buffer
    pub fn new(width: usize, height: usize) -> Self {
        let stride = width.div_ceil(8) + ROW_PADDING;
        Self {
            bytes: vec![0; stride * height],
            width,
            height,
            stride,
        }
    }

    /// Buffer with the dimensions of the target display
    pub fn display() -> Self {
        Self::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }

    /// Whole-buffer rectangle, handy as a default viewport
    pub fn bounds(&self) -> Box2D {
        Box2D::new(0.0, 0.0, self.width as f32, self.height as f32)
    }

    pub fn clear(&mut self, color: Color) {
        let bounds = self.bounds();
        fill_rect(self, bounds, color);
    }

    /// Bytes of one row, padding included
    pub fn row(&self, y: usize) -> &[u8] {
        &self.bytes[y * self.stride..(y + 1) * self.stride]
    }

    /// True for white. Out-of-range reads are black.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bytes[y * self.stride + x / 8] & (0x80 >> (x % 8)) != 0
    }

    pub fn count_white(&self) -> usize {
        (0..self.height)
            .map(|y| (0..self.width).filter(|&x| self.pixel(x, y)).count())
            .sum()
    }

    /// Expand to RGBA8 for display (white bits become `on`, the rest `off`)
    pub fn to_rgba(&self, on: [u8; 4], off: [u8; 4]) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.width * self.height * 4);
        for y in 0..self.height {
            for x in 0..self.width {
                out.extend_from_slice(if self.pixel(x, y) { &on } else { &off });
            }
        }
        out
    }
}

/// Bits of one byte covering pixel columns `lo..hi` (0..=8, MSB first)
#[inline]
fn span_mask(lo: usize, hi: usize) -> u8 {
    ((0xFFu32 >> lo) & (0xFFu32 << (8 - hi))) as u8
}

/// Fill a rectangle, clipped to the buffer.
///
/// Covers columns `floor(x)..ceil(x + width)` and rows
/// `floor(y)..ceil(y + height)`. Empty rectangles and `Color::Clear` do
/// nothing.
pub fn fill_rect(fb: &mut Framebuffer, rect: Box2D, color: Color) {
    if !(rect.width() > 0.0 && rect.height() > 0.0) || color == Color::Clear {
        return;
    }

    let min_x = rect.min_x().floor().max(0.0);
    let max_x = rect.max_x().ceil().min(fb.width as f32);
    let min_y = rect.min_y().floor().max(0.0);
    let max_y = rect.max_y().ceil().min(fb.height as f32);
    if min_x >= max_x || min_y >= max_y {
        return;
    }

    let (min_x, max_x) = (min_x as usize, max_x as usize);
    let (min_y, max_y) = (min_y as usize, max_y as usize);

    for y in min_y..max_y {
        fill_row(fb, y, min_x, max_x, color);
    }
}

/// Fill one horizontal span between two (possibly unordered, fractional) X
/// positions. Spans entirely off-screen are skipped.
pub fn fill_scanline(fb: &mut Framebuffer, x1: f32, x2: f32, y: i32, color: Color) {
    let (left, right) = if x1 > x2 { (x2, x1) } else { (x1, x2) };
    if right < 0.0 || left >= fb.width as f32 {
        return;
    }
    let rect = Box2D::new(left, y as f32, right - left, 1.0);
    fill_rect(fb, rect, color);
}

/// Columns `min_x..max_x` of row `y`, already clipped
fn fill_row(fb: &mut Framebuffer, y: usize, min_x: usize, max_x: usize, color: Color) {
    let row_start = y * fb.stride;
    let first_byte = min_x / 8;
    let last_byte = (max_x - 1) / 8;

    for byte_x in first_byte..=last_byte {
        let slice_x = byte_x * 8;
        let lo = min_x.saturating_sub(slice_x);
        let hi = (max_x - slice_x).min(8);
        let bits = span_mask(lo, hi);

        let idx = row_start + byte_x;
        fb.bytes[idx] = color.apply(fb.bytes[idx], bits, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::ROW_STRIDE;

    fn is_padding(fb: &Framebuffer, idx: usize) -> bool {
        idx % fb.stride >= fb.width.div_ceil(8)
    }

    #[test]
    fn test_display_layout() {
        let fb = Framebuffer::display();
        assert_eq!(fb.stride, ROW_STRIDE);
        assert_eq!(fb.bytes.len(), ROW_STRIDE * DISPLAY_HEIGHT);
    }

    #[test]
    fn test_span_mask() {
        assert_eq!(span_mask(0, 8), 0xFF);
        assert_eq!(span_mask(0, 1), 0b1000_0000);
        assert_eq!(span_mask(7, 8), 0b0000_0001);
        assert_eq!(span_mask(2, 5), 0b0011_1000);
        assert_eq!(span_mask(3, 3), 0);
    }

    #[test]
    fn test_fill_rect_unaligned_columns() {
        let mut fb = Framebuffer::new(32, 4);
        fill_rect(&mut fb, Box2D::new(3.0, 1.0, 10.0, 2.0), Color::White);

        for y in 0..4 {
            for x in 0..32 {
                let inside = (3..13).contains(&x) && (1..3).contains(&y);
                assert_eq!(fb.pixel(x, y), inside, "pixel ({}, {})", x, y);
            }
        }
        assert_eq!(fb.row(1)[0], 0b0001_1111);
        assert_eq!(fb.row(1)[1], 0b1111_1000);
    }

    #[test]
    fn test_fill_rect_preserves_neighbouring_bits() {
        let mut fb = Framebuffer::new(16, 1);
        fb.clear(Color::White);
        fill_rect(&mut fb, Box2D::new(2.0, 0.0, 3.0, 1.0), Color::Black);
        assert_eq!(fb.row(0)[0], 0b1100_0111);
        assert_eq!(fb.row(0)[1], 0xFF);
    }

    #[test]
    fn test_fill_rect_degenerate_is_noop() {
        let mut fb = Framebuffer::new(16, 16);
        fill_rect(&mut fb, Box2D::new(2.0, 2.0, 0.0, 5.0), Color::White);
        fill_rect(&mut fb, Box2D::new(2.0, 2.0, 5.0, -1.0), Color::White);
        fill_rect(&mut fb, Box2D::new(2.0, 2.0, 5.0, 5.0), Color::Clear);
        assert!(fb.bytes.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fill_rect_never_touches_padding_or_outside() {
        let rects = [
            Box2D::new(-50.0, -50.0, 1000.0, 1000.0),
            Box2D::new(395.0, 235.0, 40.0, 40.0),
            Box2D::new(-10.0, 100.0, 15.0, 3.0),
            Box2D::new(399.5, 0.0, 0.25, 240.0),
            Box2D::new(500.0, 10.0, 20.0, 20.0),
            Box2D::new(10.0, -30.0, 20.0, 20.0),
        ];
        for rect in rects {
            let mut fb = Framebuffer::display();
            fill_rect(&mut fb, rect, Color::White);
            for (idx, &b) in fb.bytes.iter().enumerate() {
                if is_padding(&fb, idx) {
                    assert_eq!(b, 0, "padding byte {} written for {:?}", idx, rect);
                }
            }
        }

        let mut fb = Framebuffer::display();
        fill_rect(&mut fb, Box2D::new(-50.0, -50.0, 1000.0, 1000.0), Color::White);
        assert_eq!(fb.count_white(), DISPLAY_WIDTH * DISPLAY_HEIGHT);

        let mut fb = Framebuffer::display();
        fill_rect(&mut fb, Box2D::new(500.0, 10.0, 20.0, 20.0), Color::White);
        assert_eq!(fb.count_white(), 0);
    }

    #[test]
    fn test_pattern_uses_row_modulo_8() {
        let mut fb = Framebuffer::new(8, 16);
        let mut bitmap = [0u8; 8];
        bitmap[1] = 0xFF;
        let bounds = fb.bounds();
        fill_rect(&mut fb, bounds, Color::pattern(bitmap));
        for y in 0..16 {
            assert_eq!(fb.row(y)[0] == 0xFF, y % 8 == 1, "row {}", y);
        }
    }

    #[test]
    fn test_scanline_order_and_clipping() {
        let mut fb = Framebuffer::new(16, 2);
        fill_scanline(&mut fb, 6.0, 2.0, 0, Color::White);
        assert_eq!(fb.row(0)[0], 0b0011_1100);
        fill_scanline(&mut fb, -8.0, -1.0, 1, Color::White);
        fill_scanline(&mut fb, 16.0, 40.0, 1, Color::White);
        fill_scanline(&mut fb, 0.0, 4.0, 7, Color::White);
        assert_eq!(fb.row(1)[0], 0);
        assert_eq!(fb.row(1)[1], 0);
    }

    #[test]
    fn test_to_rgba() {
        let mut fb = Framebuffer::new(2, 1);
        fill_rect(&mut fb, Box2D::new(1.0, 0.0, 1.0, 1.0), Color::White);
        let rgba = fb.to_rgba([255; 4], [0, 0, 0, 255]);
        assert_eq!(rgba, vec![0, 0, 0, 255, 255, 255, 255, 255]);
    }
}
