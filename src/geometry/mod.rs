//! Geometry primitives: world-space faces, models and boxes, plus their
//! screen-space counterparts

mod bounds;
mod mesh;
mod screen;

pub use bounds::*;
pub use mesh::*;
pub use screen::*;
