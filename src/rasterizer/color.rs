//! 1-bit colors, 8x8 fill patterns and ordered dithering

/// 8x8 Bayer threshold matrix, values 0..63
pub const BAYER_8X8: [[u8; 8]; 8] = [
    [0, 32, 8, 40, 2, 34, 10, 42],
    [48, 16, 56, 24, 50, 18, 58, 26],
    [12, 44, 4, 36, 14, 46, 6, 38],
    [60, 28, 52, 20, 62, 30, 54, 22],
    [3, 35, 11, 43, 1, 33, 9, 41],
    [51, 19, 59, 27, 49, 17, 57, 25],
    [15, 47, 7, 39, 13, 45, 5, 37],
    [63, 31, 55, 23, 61, 29, 53, 21],
];

/// Number of gray levels the matrix can express
pub const DITHER_LEVELS: f32 = 64.0;

/// Fill color for the monochrome framebuffer. A set bit is a white pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
    /// Flip whatever is already there
    Invert,
    /// Draws nothing
    Clear,
    /// 8x8 tile. Rows are picked by `y % 8`, bit 7 is the leftmost column of a
    /// byte. Only bits set in `mask` are written.
    Pattern { bitmap: [u8; 8], mask: [u8; 8] },
}

impl Color {
    /// Fully opaque pattern
    pub const fn pattern(bitmap: [u8; 8]) -> Self {
        Color::Pattern { bitmap, mask: [0xFF; 8] }
    }

    /// Write this color into `byte` for the pixels selected by `bits`, using
    /// pattern row `row`. Bits outside `bits` are left as they were.
    #[inline]
    pub fn apply(&self, byte: u8, bits: u8, row: usize) -> u8 {
        match *self {
            Color::Black => byte & !bits,
            Color::White => byte | bits,
            Color::Invert => byte ^ bits,
            Color::Clear => byte,
            Color::Pattern { bitmap, mask } => {
                // Masked bits take the bitmap value rather than XORing it in
                let write = bits & mask[row % 8];
                (byte & !write) | (bitmap[row % 8] & write)
            }
        }
    }
}

/// Convert a brightness into an ordered-dither pattern.
///
/// A cell lights up when its matrix threshold is at least
/// `(1 - opacity) * 64`, so 1.0 is solid white and 0.0 solid black. Values
/// outside 0..=1 saturate naturally.
pub fn dithered_color(opacity: f32) -> Color {
    let cutoff = (1.0 - opacity) * DITHER_LEVELS;
    let mut bitmap = [0u8; 8];

    for (row, thresholds) in BAYER_8X8.iter().enumerate() {
        for (col, &threshold) in thresholds.iter().enumerate() {
            if threshold as f32 >= cutoff {
                bitmap[row] |= 0x80 >> col;
            }
        }
    }

    Color::pattern(bitmap)
}
