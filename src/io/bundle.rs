//! Asset bundle: a directory holding `Models/` and `Scenes/`

use std::path::{Path, PathBuf};

use crate::geometry::Model3D;
use crate::renderer::ModelSource;
use crate::scene::Scene3D;
use super::{load_model, load_scene, DecodeError};

pub const MODEL_EXTENSION: &str = "model";
pub const SCENE_EXTENSION: &str = "pdscene";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetBundle {
    pub root: PathBuf,
}

impl AssetBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<root>/Models/<name>.model`
    pub fn model_path(&self, name: &str) -> PathBuf {
        self.root.join("Models").join(format!("{}.{}", name, MODEL_EXTENSION))
    }

    /// `<root>/Scenes/<name>.pdscene`
    pub fn scene_path(&self, name: &str) -> PathBuf {
        self.root.join("Scenes").join(format!("{}.{}", name, SCENE_EXTENSION))
    }

    pub fn load_model(&self, name: &str) -> Result<Model3D, DecodeError> {
        load_model(self.model_path(name))
    }

    pub fn load_scene(&self, name: &str) -> Result<Scene3D, DecodeError> {
        load_scene(self.scene_path(name))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ModelSource for AssetBundle {
    fn load_model(&self, name: &str) -> Result<Model3D, DecodeError> {
        AssetBundle::load_model(self, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{save_model, save_scene};
    use std::fs;

    #[test]
    fn test_paths() {
        let bundle = AssetBundle::new("/games/demo");
        assert_eq!(bundle.model_path("cube"), PathBuf::from("/games/demo/Models/cube.model"));
        assert_eq!(bundle.scene_path("level1"), PathBuf::from("/games/demo/Scenes/level1.pdscene"));
    }

    #[test]
    fn test_load_from_directory() {
        let root = std::env::temp_dir().join(format!("dither3d-bundle-{}", std::process::id()));
        fs::create_dir_all(root.join("Models")).unwrap();
        fs::create_dir_all(root.join("Scenes")).unwrap();

        let bundle = AssetBundle::new(&root);
        save_model(&Model3D::cube(0.5), bundle.model_path("cube")).unwrap();
        save_scene(&Scene3D::fallback(), bundle.scene_path("empty")).unwrap();

        let model = ModelSource::load_model(&bundle, "cube");
        let scene = bundle.load_scene("empty");
        let missing = bundle.load_model("sphere");
        let _ = fs::remove_dir_all(&root);

        assert_eq!(model.unwrap().len(), 12);
        assert_eq!(scene.unwrap(), Scene3D::fallback());
        assert!(matches!(missing, Err(DecodeError::AssetMissing(_))));
    }
}
