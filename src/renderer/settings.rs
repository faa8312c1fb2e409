//! Renderer configuration
//!
//! Stored as RON so it can be edited by hand next to the game assets.

use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::projection::FallbackProjection;
use super::LightingModel;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Skip faces whose projected winding marks them as facing away
    pub backface_culling: bool,
    pub lighting: LightingModel,
    /// Pixels per world unit when no camera is available
    pub fallback_scale: f32,
    pub fallback_tilt: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            backface_culling: true,
            lighting: LightingModel::Diffuse,
            fallback_scale: FallbackProjection::DEFAULT_SCALE,
            fallback_tilt: FallbackProjection::DEFAULT_TILT,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
}

/// Load settings from a RON file
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<RenderSettings, ConfigError> {
    let contents = fs::read_to_string(path)?;
    load_settings_from_str(&contents)
}

/// Save settings to a RON file
pub fn save_settings<P: AsRef<Path>>(settings: &RenderSettings, path: P) -> Result<(), ConfigError> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(2)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(settings, config)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Load settings from a RON string. Missing fields take their defaults.
pub fn load_settings_from_str(s: &str) -> Result<RenderSettings, ConfigError> {
    Ok(ron::from_str(s)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RenderSettings::default();
        assert!(settings.backface_culling);
        assert_eq!(settings.lighting, LightingModel::Diffuse);
        assert_eq!(settings.fallback_scale, 50.0);
        assert_eq!(settings.fallback_tilt, 0.2);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings = load_settings_from_str("(backface_culling: false)").unwrap();
        assert!(!settings.backface_culling);
        assert_eq!(settings.lighting, LightingModel::Diffuse);

        let settings = load_settings_from_str("(lighting: Attenuated, fallback_scale: 20.0)").unwrap();
        assert!(settings.backface_culling);
        assert_eq!(settings.lighting, LightingModel::Attenuated);
        assert_eq!(settings.fallback_scale, 20.0);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(load_settings_from_str("(backface_culling: 3"), Err(ConfigError::Parse(_))));
        assert!(matches!(
            load_settings("/definitely/not/here/render.ron"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("dither3d-settings-{}.ron", std::process::id()));
        let settings = RenderSettings {
            backface_culling: false,
            lighting: LightingModel::Attenuated,
            fallback_scale: 32.0,
            fallback_tilt: 0.5,
        };
        save_settings(&settings, &path).unwrap();
        let loaded = load_settings(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(loaded.unwrap(), settings);
    }
}
