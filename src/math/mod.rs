//! Vector, quaternion and transform math

mod quaternion;
mod transform;
mod vector;

pub use quaternion::*;
pub use transform::*;
pub use vector::*;
