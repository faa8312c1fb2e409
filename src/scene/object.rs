//! Scene objects: a model placed in the world

use crate::geometry::Model3D;
use crate::math::{Point3D, Transform3D, Transformable};
use super::ModelReference;

/// Model paired with its world placement. Rotation is stored as Euler angles
/// so it can be edited directly; the quaternion is derived on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub model: Model3D,
    pub world_position: Point3D,
    pub world_rotation: Point3D,
    pub world_scale: Point3D,
}

impl SceneObject {
    pub fn new(model: Model3D, world_position: Point3D, world_rotation: Point3D, world_scale: Point3D) -> Self {
        Self {
            model,
            world_position,
            world_rotation,
            world_scale,
        }
    }

    /// Object at `position` with no rotation and unit scale
    pub fn at(model: Model3D, position: Point3D) -> Self {
        Self::new(model, position, Point3D::ZERO, Point3D::ONE)
    }

    /// Place a loaded model the way a scene reference describes
    pub fn from_reference(model: Model3D, reference: &ModelReference) -> Self {
        Self::new(model, reference.position, reference.rotation, reference.scale)
    }

    /// Object space to world space
    pub fn transform(&self) -> Transform3D {
        Transform3D::from_euler(self.world_position, self.world_rotation, self.world_scale)
    }

    /// Copy of the model in world space
    pub fn transformed_model(&self) -> Model3D {
        self.model.transformed(&self.transform())
    }
}
