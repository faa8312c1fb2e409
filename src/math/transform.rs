//! Rigid transforms (scale, then rotate, then translate)

use serde::{Serialize, Deserialize};
use super::{Point3D, Quaternion};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    pub position: Point3D,
    pub rotation: Quaternion,
    pub scale: Point3D,
}

impl Transform3D {
    pub const IDENTITY: Transform3D = Transform3D {
        position: Point3D::ZERO,
        rotation: Quaternion::IDENTITY,
        scale: Point3D::ONE,
    };

    pub fn new(position: Point3D, rotation: Quaternion, scale: Point3D) -> Self {
        Self { position, rotation, scale }
    }

    /// Build from an XYZ Euler rotation in radians
    pub fn from_euler(position: Point3D, euler: Point3D, scale: Point3D) -> Self {
        Self::new(position, Quaternion::from_euler(euler), scale)
    }

    pub fn translation(position: Point3D) -> Self {
        Self { position, ..Self::IDENTITY }
    }

    pub fn rotation(rotation: Quaternion) -> Self {
        Self { rotation, ..Self::IDENTITY }
    }

    pub fn scaling(scale: Point3D) -> Self {
        Self { scale, ..Self::IDENTITY }
    }

    pub fn apply(&self, point: Point3D) -> Point3D {
        let mut p = point;
        if self.scale != Point3D::ONE {
            p = p * self.scale;
        }
        if !self.rotation.is_identity() {
            p = self.rotation.rotate(p);
        }
        p + self.position
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Anything that can be moved into another space by a `Transform3D`
pub trait Transformable: Sized {
    fn transformed(&self, transform: &Transform3D) -> Self;

    fn transform(&mut self, transform: &Transform3D) {
        *self = self.transformed(transform);
    }

    fn translated(&self, offset: Point3D) -> Self {
        self.transformed(&Transform3D::translation(offset))
    }

    fn rotated(&self, rotation: Quaternion) -> Self {
        self.transformed(&Transform3D::rotation(rotation))
    }

    fn scaled(&self, scale: Point3D) -> Self {
        self.transformed(&Transform3D::scaling(scale))
    }
}

impl Transformable for Point3D {
    fn transformed(&self, transform: &Transform3D) -> Self {
        transform.apply(*self)
    }
}
