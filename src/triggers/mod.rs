//! Trigger processing
//!
//! Tracks where the player is relative to each scene trigger and tells the
//! host which actions to run.

mod handler;

pub use handler::*;
