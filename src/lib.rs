//! dither3d: software 3D rendering onto 1-bit framebuffers
//!
//! Scenes of triangle meshes are projected, culled, depth sorted by painter's
//! algorithm and filled with ordered-dither patterns into a bit-packed
//! monochrome framebuffer:
//! - Vector, quaternion and transform math
//! - Perspective and fixed fallback projections
//! - Scanline rasterizer writing 8 pixels per byte
//! - Binary model/scene assets with trigger volumes

pub mod geometry;
pub mod io;
pub mod math;
pub mod projection;
pub mod rasterizer;
pub mod renderer;
pub mod scene;
pub mod triggers;

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
