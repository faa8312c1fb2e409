//! Scene description types
//!
//! Plain data, produced by the scene decoder or built in code.

use serde::{Serialize, Deserialize};
use crate::math::Point3D;
use super::SceneTrigger;

/// Camera with an XYZ Euler rotation and a field of view in radians
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera3D {
    pub position: Point3D,
    pub rotation: Point3D,
    pub field_of_view: f32,
}

impl Camera3D {
    pub const fn new(position: Point3D, rotation: Point3D, field_of_view: f32) -> Self {
        Self { position, rotation, field_of_view }
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new(Point3D::ZERO, Point3D::ZERO, 0.5)
    }
}

/// Point light. `power` and `falloff` only matter to the attenuated
/// lighting model; a falloff of zero means no attenuation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light3D {
    pub position: Point3D,
    pub power: f32,
    pub falloff: f32,
}

impl Light3D {
    pub const fn new(position: Point3D, power: f32, falloff: f32) -> Self {
        Self { position, power, falloff }
    }

    /// Full-power light without falloff
    pub const fn at(position: Point3D) -> Self {
        Self::new(position, 1.0, 0.0)
    }
}

/// Placement of an on-disk model inside a scene. Names are unique per scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelReference {
    pub name: String,
    pub position: Point3D,
    pub rotation: Point3D,
    pub scale: Point3D,
}

impl ModelReference {
    pub fn new(name: impl Into<String>, position: Point3D, rotation: Point3D, scale: Point3D) -> Self {
        Self {
            name: name.into(),
            position,
            rotation,
            scale,
        }
    }
}

/// A complete scene: at least one camera, plus model references, lights and
/// triggers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene3D {
    #[serde(default)]
    pub ambient_light: f32,
    pub cameras: Vec<Camera3D>,
    #[serde(default)]
    pub models: Vec<ModelReference>,
    #[serde(default)]
    pub lights: Vec<Light3D>,
    #[serde(default)]
    pub triggers: Vec<SceneTrigger>,
}

impl Scene3D {
    pub fn new(cameras: Vec<Camera3D>) -> Self {
        Self {
            ambient_light: 0.0,
            cameras,
            models: Vec::new(),
            lights: Vec::new(),
            triggers: Vec::new(),
        }
    }

    pub fn with_models(mut self, models: Vec<ModelReference>) -> Self {
        self.models = models;
        self
    }

    pub fn with_lights(mut self, lights: Vec<Light3D>) -> Self {
        self.lights = lights;
        self
    }

    pub fn with_triggers(mut self, triggers: Vec<SceneTrigger>) -> Self {
        self.triggers = triggers;
        self
    }

    /// Minimal scene used when nothing could be loaded: one camera at the
    /// origin and nothing else
    pub fn fallback() -> Self {
        Self::new(vec![Camera3D::default()])
    }

    pub fn model(&self, name: &str) -> Option<&ModelReference> {
        self.models.iter().find(|m| m.name == name)
    }
}
