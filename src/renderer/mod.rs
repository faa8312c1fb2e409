//! Scene rendering
//!
//! Painter's algorithm over a flat list of scene objects: objects and faces
//! are drawn farthest first, back faces are culled by winding, and each face
//! is filled with a dither pattern matching its brightness.

mod lighting;
mod scene_renderer;
mod settings;
mod source;

pub use lighting::*;
pub use scene_renderer::*;
pub use settings::*;
pub use source::*;
