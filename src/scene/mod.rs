//! Scene model - cameras, lights, model references, scene objects and
//! triggers

mod object;
mod trigger;
mod types;

pub use object::*;
pub use trigger::*;
pub use types::*;
