//! Triangle faces and models in world space

use serde::{Serialize, Deserialize};
use crate::math::{Point3D, Transform3D, Transformable};

/// One triangle. `color` runs from 0 (black) to 1 (white).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriFace3D {
    pub a: Point3D,
    pub b: Point3D,
    pub c: Point3D,
    pub color: f32,
}

impl TriFace3D {
    pub const fn new(a: Point3D, b: Point3D, c: Point3D) -> Self {
        Self { a, b, c, color: 1.0 }
    }

    pub const fn with_color(a: Point3D, b: Point3D, c: Point3D, color: f32) -> Self {
        Self { a, b, c, color }
    }

    pub fn centroid(&self) -> Point3D {
        (self.a + self.b + self.c) / 3.0
    }

    /// Face normal, not normalized
    pub fn normal(&self) -> Point3D {
        (self.b - self.a).cross(self.c - self.a)
    }
}

impl Transformable for TriFace3D {
    fn transformed(&self, transform: &Transform3D) -> Self {
        Self {
            a: transform.apply(self.a),
            b: transform.apply(self.b),
            c: transform.apply(self.c),
            color: self.color,
        }
    }
}

/// Ordered list of faces. The order can be changed (depth sorting) but faces
/// can't be added or removed once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model3D {
    faces: Vec<TriFace3D>,
}

impl Model3D {
    pub fn new(faces: Vec<TriFace3D>) -> Self {
        Self { faces }
    }

    pub fn faces(&self) -> &[TriFace3D] {
        &self.faces
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TriFace3D> {
        self.faces.iter()
    }

    /// Stable in-place sort
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&TriFace3D, &TriFace3D) -> std::cmp::Ordering,
    {
        self.faces.sort_by(compare);
    }

    /// Simple axis-aligned cube centered on the origin, faces wound
    /// counter-clockwise when seen from outside
    pub fn cube(half: f32) -> Self {
        let p = |x: f32, y: f32, z: f32| Point3D::new(x * half, y * half, z * half);
        let quad = |a: Point3D, b: Point3D, c: Point3D, d: Point3D| {
            [TriFace3D::new(a, b, c), TriFace3D::new(a, c, d)]
        };

        let quads = [
            // +Z
            quad(p(-1.0, -1.0, 1.0), p(1.0, -1.0, 1.0), p(1.0, 1.0, 1.0), p(-1.0, 1.0, 1.0)),
            // -Z
            quad(p(1.0, -1.0, -1.0), p(-1.0, -1.0, -1.0), p(-1.0, 1.0, -1.0), p(1.0, 1.0, -1.0)),
            // +X
            quad(p(1.0, -1.0, 1.0), p(1.0, -1.0, -1.0), p(1.0, 1.0, -1.0), p(1.0, 1.0, 1.0)),
            // -X
            quad(p(-1.0, -1.0, -1.0), p(-1.0, -1.0, 1.0), p(-1.0, 1.0, 1.0), p(-1.0, 1.0, -1.0)),
            // +Y
            quad(p(-1.0, 1.0, 1.0), p(1.0, 1.0, 1.0), p(1.0, 1.0, -1.0), p(-1.0, 1.0, -1.0)),
            // -Y
            quad(p(-1.0, -1.0, -1.0), p(1.0, -1.0, -1.0), p(1.0, -1.0, 1.0), p(-1.0, -1.0, 1.0)),
        ];

        Self::new(quads.into_iter().flatten().collect())
    }
}

impl Transformable for Model3D {
    fn transformed(&self, transform: &Transform3D) -> Self {
        Self::new(self.faces.iter().map(|f| f.transformed(transform)).collect())
    }
}

impl<'a> IntoIterator for &'a Model3D {
    type Item = &'a TriFace3D;
    type IntoIter = std::slice::Iter<'a, TriFace3D>;

    fn into_iter(self) -> Self::IntoIter {
        self.faces.iter()
    }
}

impl From<Vec<TriFace3D>> for Model3D {
    fn from(faces: Vec<TriFace3D>) -> Self {
        Self::new(faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri() -> TriFace3D {
        TriFace3D::new(
            Point3D::new(0.0, 0.0, 0.0),
            Point3D::new(3.0, 0.0, 0.0),
            Point3D::new(0.0, 3.0, 0.0),
        )
    }

    #[test]
    fn test_centroid_and_normal() {
        let f = tri();
        assert_eq!(f.centroid(), Point3D::new(1.0, 1.0, 0.0));
        assert_eq!(f.normal(), Point3D::new(0.0, 0.0, 9.0));
        assert_eq!(f.color, 1.0);
    }

    #[test]
    fn test_transform_keeps_color() {
        let f = TriFace3D::with_color(tri().a, tri().b, tri().c, 0.25);
        let moved = f.translated(Point3D::new(0.0, 0.0, -2.0));
        assert_eq!(moved.a, Point3D::new(0.0, 0.0, -2.0));
        assert_eq!(moved.color, 0.25);
    }

    #[test]
    fn test_cube_normals_point_outward() {
        let cube = Model3D::cube(1.0);
        assert_eq!(cube.len(), 12);
        for face in &cube {
            // Outward normal agrees with the direction from the center
            assert!(face.normal().dot(face.centroid()) > 0.0);
        }
    }

    #[test]
    fn test_sort_is_stable() {
        let mut model = Model3D::new(vec![
            TriFace3D::with_color(Point3D::ZERO, Point3D::ZERO, Point3D::ZERO, 0.1),
            TriFace3D::with_color(Point3D::ZERO, Point3D::ZERO, Point3D::ZERO, 0.2),
        ]);
        model.sort_by(|_, _| std::cmp::Ordering::Equal);
        assert_eq!(model.faces()[0].color, 0.1);
        assert_eq!(model.faces()[1].color, 0.2);
    }
}
