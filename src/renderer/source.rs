//! Model lookup by name

use std::collections::HashMap;

use crate::geometry::Model3D;
use crate::io::DecodeError;

/// Resolves the model names used by scene references
pub trait ModelSource {
    fn load_model(&self, name: &str) -> Result<Model3D, DecodeError>;
}

/// In-memory models, mostly for tests and procedurally built scenes
impl ModelSource for HashMap<String, Model3D> {
    fn load_model(&self, name: &str) -> Result<Model3D, DecodeError> {
        self.get(name)
            .cloned()
            .ok_or_else(|| DecodeError::AssetMissing(format!("no model named {:?}", name)))
    }
}
