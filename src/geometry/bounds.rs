//! Axis-aligned boxes in world space
//!
//! Width runs along X, length along Y and height along Z.

use serde::{Serialize, Deserialize};
use crate::math::Point3D;
use super::Model3D;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size3D {
    pub width: f32,
    pub length: f32,
    pub height: f32,
}

impl Size3D {
    pub const ZERO: Size3D = Size3D { width: 0.0, length: 0.0, height: 0.0 };

    pub const fn new(width: f32, length: f32, height: f32) -> Self {
        Self { width, length, height }
    }
}

/// Axis-aligned bounding box given by an origin (minimum corner) and size
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Box3D {
    pub origin: Point3D,
    pub size: Size3D,
}

impl Box3D {
    pub const fn new(origin: Point3D, size: Size3D) -> Self {
        Self { origin, size }
    }

    /// Box spanning two corners
    pub fn from_corners(min: Point3D, max: Point3D) -> Self {
        let lo = min.min(max);
        let hi = min.max(max);
        let extent = hi - lo;
        Self::new(lo, Size3D::new(extent.x, extent.y, extent.z))
    }

    /// Bounds of a world-space model, grown by `margin` on every side.
    /// Returns `None` for a model without faces.
    pub fn bounding(model: &Model3D, margin: f32) -> Option<Self> {
        let first = model.faces().first()?.a;
        let (lo, hi) = model.iter().fold((first, first), |(lo, hi), face| {
            (
                lo.min(face.a).min(face.b).min(face.c),
                hi.max(face.a).max(face.b).max(face.c),
            )
        });
        Some(Self::from_corners(lo - margin, hi + margin))
    }

    pub fn min_x(&self) -> f32 {
        self.origin.x
    }

    pub fn mid_x(&self) -> f32 {
        self.origin.x + self.size.width / 2.0
    }

    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn min_y(&self) -> f32 {
        self.origin.y
    }

    pub fn mid_y(&self) -> f32 {
        self.origin.y + self.size.length / 2.0
    }

    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.length
    }

    pub fn min_z(&self) -> f32 {
        self.origin.z
    }

    pub fn mid_z(&self) -> f32 {
        self.origin.z + self.size.height / 2.0
    }

    pub fn max_z(&self) -> f32 {
        self.origin.z + self.size.height
    }

    pub fn center(&self) -> Point3D {
        Point3D::new(self.mid_x(), self.mid_y(), self.mid_z())
    }

    /// Check if a point is inside the box (edges included)
    pub fn contains(&self, p: Point3D) -> bool {
        self.contains_flat(p) && p.z >= self.min_z() && p.z <= self.max_z()
    }

    /// Containment on the X/Y footprint only, ignoring height
    pub fn contains_flat(&self, p: Point3D) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }

    /// Overlap test on all three axes (touching counts)
    pub fn intersects(&self, other: &Box3D) -> bool {
        self.min_x() <= other.max_x()
            && self.max_x() >= other.min_x()
            && self.min_y() <= other.max_y()
            && self.max_y() >= other.min_y()
            && self.min_z() <= other.max_z()
            && self.max_z() >= other.min_z()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::TriFace3D;

    fn unit_box() -> Box3D {
        Box3D::new(Point3D::ZERO, Size3D::new(1.0, 2.0, 3.0))
    }

    #[test]
    fn test_axis_extents() {
        let b = unit_box();
        assert_eq!(b.max_x(), 1.0);
        assert_eq!(b.max_y(), 2.0);
        assert_eq!(b.max_z(), 3.0);
        assert_eq!(b.center(), Point3D::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn test_contains() {
        let b = unit_box();
        assert!(b.contains(Point3D::new(0.5, 1.0, 1.5)));
        assert!(b.contains(Point3D::new(1.0, 2.0, 3.0)));
        assert!(!b.contains(Point3D::new(0.5, 1.0, 3.5)));
        assert!(b.contains_flat(Point3D::new(0.5, 1.0, 3.5)));
    }

    #[test]
    fn test_intersects() {
        let a = unit_box();
        let above = Box3D::new(Point3D::new(0.0, 0.0, 5.0), Size3D::new(1.0, 1.0, 1.0));
        let overlapping = Box3D::new(Point3D::new(0.5, 1.5, 2.5), Size3D::new(4.0, 4.0, 4.0));
        assert!(!a.intersects(&above));
        assert!(a.intersects(&overlapping));
        assert!(overlapping.intersects(&a));
    }

    #[test]
    fn test_bounding_model() {
        let model = Model3D::new(vec![TriFace3D::new(
            Point3D::new(-1.0, 0.0, 0.0),
            Point3D::new(1.0, 2.0, 0.0),
            Point3D::new(0.0, 0.0, 4.0),
        )]);
        let b = Box3D::bounding(&model, 0.0).unwrap();
        assert_eq!(b.origin, Point3D::new(-1.0, 0.0, 0.0));
        assert_eq!(b.size, Size3D::new(2.0, 2.0, 4.0));
        assert!(Box3D::bounding(&Model3D::default(), 0.01).is_none());
    }
}
