//! 1-bit software rasterizer
//!
//! Draws into a bit-packed monochrome framebuffer:
//! - Solid, inverted and 8x8 patterned fills
//! - Ordered (Bayer) dithering for gray levels
//! - Clipped rectangle, scanline and triangle fills

mod color;
mod framebuffer;
mod triangle;

pub use color::*;
pub use framebuffer::*;
pub use triangle::*;

/// Target display dimensions
pub const DISPLAY_WIDTH: usize = 400;
pub const DISPLAY_HEIGHT: usize = 240;

/// Bytes after each row's pixel data that are never drawn to
pub const ROW_PADDING: usize = 2;

/// Bytes per display row
pub const ROW_STRIDE: usize = DISPLAY_WIDTH / 8 + ROW_PADDING;
