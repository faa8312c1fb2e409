//! Binary asset decoding and encoding
//!
//! All numbers are little-endian. Decoders fail closed: any structural problem
//! rejects the whole asset.

mod bundle;
mod error;
mod model;
mod reader;
mod scene;
mod trigger;

pub use bundle::*;
pub use error::*;
pub use model::*;
pub use scene::*;
pub use trigger::*;

use std::fs;
use std::path::Path;

/// Read a whole asset file. Missing files are reported as `AssetMissing`.
fn read_asset(path: &Path) -> Result<Vec<u8>, DecodeError> {
    fs::read(path).map_err(|e| DecodeError::AssetMissing(format!("{}: {}", path.display(), e)))
}
