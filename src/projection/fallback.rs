//! Fixed-scale projection used when no camera is available
//!
//! Treats the model as sitting right in front of the viewer: the model spins in
//! the XY plane, Z maps straight to screen height and Y adds a small tilt.

use serde::{Serialize, Deserialize};
use crate::math::{Point2D, Point3D};
use super::Project;

/// Rotation in the XY plane, kept as a sine/cosine pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanarRotation {
    pub sine: f32,
    pub cosine: f32,
}

impl PlanarRotation {
    pub const INITIAL: PlanarRotation = PlanarRotation { sine: 0.0, cosine: 1.0 };

    pub fn from_angle(angle: f32) -> Self {
        let (sine, cosine) = angle.sin_cos();
        Self { sine, cosine }
    }
}

impl Default for PlanarRotation {
    fn default() -> Self {
        Self::INITIAL
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackProjection {
    pub center: Point2D,
    pub scale: f32,
    pub tilt: f32,
    pub rotation: PlanarRotation,
}

impl FallbackProjection {
    pub const DEFAULT_SCALE: f32 = 50.0;
    pub const DEFAULT_TILT: f32 = 0.2;

    pub fn new(center: Point2D) -> Self {
        Self::with_scale(center, Self::DEFAULT_SCALE, Self::DEFAULT_TILT)
    }

    pub fn with_scale(center: Point2D, scale: f32, tilt: f32) -> Self {
        Self {
            center,
            scale,
            tilt,
            rotation: PlanarRotation::INITIAL,
        }
    }
}

impl Project for FallbackProjection {
    fn project(&self, point: Point3D) -> Point2D {
        let PlanarRotation { sine, cosine } = self.rotation;
        let rx = point.x * cosine - point.y * sine;
        let ry = point.x * sine + point.y * cosine;

        Point2D::new(
            self.center.x + rx * self.scale,
            self.center.y - point.z * self.scale - ry * self.scale * self.tilt,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_origin_maps_to_center() {
        let proj = FallbackProjection::new(Point2D::new(200.0, 120.0));
        assert_eq!(proj.project(Point3D::ZERO), Point2D::new(200.0, 120.0));
    }

    #[test]
    fn test_scale_and_tilt() {
        let proj = FallbackProjection::new(Point2D::new(200.0, 120.0));
        assert_eq!(proj.project(Point3D::new(1.0, 0.0, 0.0)), Point2D::new(250.0, 120.0));
        assert_eq!(proj.project(Point3D::new(0.0, 0.0, 1.0)), Point2D::new(200.0, 70.0));
        assert_eq!(proj.project(Point3D::new(0.0, 1.0, 0.0)), Point2D::new(200.0, 110.0));
    }

    #[test]
    fn test_planar_rotation() {
        let mut proj = FallbackProjection::new(Point2D::ZERO);
        proj.rotation = PlanarRotation::from_angle(FRAC_PI_2);
        // +X swings onto +Y, which only shows up through the tilt
        let p = proj.project(Point3D::new(1.0, 0.0, 0.0));
        assert!(p.x.abs() < 1e-4);
        assert!((p.y + 10.0).abs() < 1e-4);
    }
}
