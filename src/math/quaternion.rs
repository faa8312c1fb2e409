//! Unit quaternions for object and camera rotation

use std::ops::{Mul, MulAssign};
use serde::{Serialize, Deserialize};
use super::Point3D;

/// Rotation quaternion. Every constructor normalizes, so values stay on the
/// unit sphere no matter how many products are chained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion { w: 1.0, x: 0.0, y: 0.0, z: 0.0 };

    /// Build a normalized quaternion. A zero-length input yields identity.
    pub fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        let len = (w * w + x * x + y * y + z * z).sqrt();
        if len == 0.0 || !len.is_finite() {
            return Self::IDENTITY;
        }
        Self { w: w / len, x: x / len, y: y / len, z: z / len }
    }

    /// Rotation of `angle` radians around a single axis
    pub fn from_axis_angle(axis: Point3D, angle: f32) -> Self {
        let axis = axis.normalize();
        let (s, c) = (angle / 2.0).sin_cos();
        Self::new(c, axis.x * s, axis.y * s, axis.z * s)
    }

    /// Convert XYZ Euler angles (radians). Composition is `(qy * qz) * qx`.
    pub fn from_euler(euler: Point3D) -> Self {
        let (sx, cx) = (euler.x / 2.0).sin_cos();
        let (sy, cy) = (euler.y / 2.0).sin_cos();
        let (sz, cz) = (euler.z / 2.0).sin_cos();

        let qx = Self::new(cx, sx, 0.0, 0.0);
        let qy = Self::new(cy, 0.0, sy, 0.0);
        let qz = Self::new(cz, 0.0, 0.0, sz);

        (qy * qz) * qx
    }

    /// Conjugate. Equal to the inverse for unit quaternions.
    pub fn inverse(self) -> Self {
        Self { w: self.w, x: -self.x, y: -self.y, z: -self.z }
    }

    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    /// Rotate a vector (expanded form of q * v * q^-1)
    pub fn rotate(self, v: Point3D) -> Point3D {
        let Quaternion { w, x, y, z } = self;

        let ww = w * w;
        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;

        Point3D {
            x: ww * v.x + 2.0 * wy * v.z - 2.0 * wz * v.y + xx * v.x + 2.0 * xy * v.y
                + 2.0 * xz * v.z - zz * v.x - yy * v.x,
            y: 2.0 * xy * v.x + yy * v.y + 2.0 * yz * v.z + 2.0 * wz * v.x - zz * v.y
                + ww * v.y - 2.0 * wx * v.z - xx * v.y,
            z: 2.0 * xz * v.x + 2.0 * yz * v.y + zz * v.z - 2.0 * wy * v.x - yy * v.z
                + 2.0 * wx * v.y - xx * v.z + ww * v.z,
        }
    }

    /// Component-wise closeness check, treating q and -q as the same rotation
    pub fn approx_eq(self, other: Quaternion, epsilon: f32) -> bool {
        let same = (self.w - other.w).abs() <= epsilon
            && (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon;
        let negated = (self.w + other.w).abs() <= epsilon
            && (self.x + other.x).abs() <= epsilon
            && (self.y + other.y).abs() <= epsilon
            && (self.z + other.z).abs() <= epsilon;
        same || negated
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Hamilton product
impl Mul for Quaternion {
    type Output = Quaternion;
    fn mul(self, rhs: Quaternion) -> Quaternion {
        let l = self;
        Quaternion::new(
            l.w * rhs.w - l.x * rhs.x - l.y * rhs.y - l.z * rhs.z,
            l.x * rhs.w + l.w * rhs.x + l.y * rhs.z - l.z * rhs.y,
            l.w * rhs.y - l.x * rhs.z + l.y * rhs.w + l.z * rhs.x,
            l.w * rhs.z + l.x * rhs.y - l.y * rhs.x + l.z * rhs.w,
        )
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Quaternion) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn close(a: Point3D, b: Point3D) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_identity_leaves_vectors_unchanged() {
        let v = Point3D::new(1.5, -2.0, 3.25);
        assert_eq!(Quaternion::IDENTITY.rotate(v), v);
        assert_eq!(Quaternion::from_euler(Point3D::ZERO), Quaternion::IDENTITY);
    }

    #[test]
    fn test_inverse_composes_to_identity() {
        let q = Quaternion::from_euler(Point3D::new(0.3, -1.1, 2.4));
        assert!((q.inverse() * q).approx_eq(Quaternion::IDENTITY, 1e-5));
        assert!((q * q.inverse()).approx_eq(Quaternion::IDENTITY, 1e-5));
    }

    #[test]
    fn test_constructor_normalizes() {
        let q = Quaternion::new(2.0, 0.0, 0.0, 0.0);
        assert_eq!(q, Quaternion::IDENTITY);
        let q = Quaternion::new(1.0, 1.0, 1.0, 1.0);
        let len = (q.w * q.w + q.x * q.x + q.y * q.y + q.z * q.z).sqrt();
        assert!((len - 1.0).abs() < 1e-6);
        assert_eq!(Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::IDENTITY);
    }

    #[test]
    fn test_single_axis_rotations() {
        // 90 degrees around Z takes +X to +Y
        let qz = Quaternion::from_euler(Point3D::new(0.0, 0.0, FRAC_PI_2));
        assert!(close(qz.rotate(Point3D::new(1.0, 0.0, 0.0)), Point3D::new(0.0, 1.0, 0.0)));

        // 90 degrees around Y takes +Z to +X
        let qy = Quaternion::from_euler(Point3D::new(0.0, FRAC_PI_2, 0.0));
        assert!(close(qy.rotate(Point3D::new(0.0, 0.0, 1.0)), Point3D::new(1.0, 0.0, 0.0)));

        // 180 degrees around Y flips Z
        let half = Quaternion::from_euler(Point3D::new(0.0, PI, 0.0));
        assert!(close(half.rotate(Point3D::new(0.0, 0.0, 5.0)), Point3D::new(0.0, 0.0, -5.0)));
    }

    #[test]
    fn test_euler_composition_order() {
        // X is applied first, then Z, then Y
        let euler = Point3D::new(FRAC_PI_2, FRAC_PI_2, 0.0);
        let q = Quaternion::from_euler(euler);
        let qx = Quaternion::from_axis_angle(Point3D::new(1.0, 0.0, 0.0), FRAC_PI_2);
        let qy = Quaternion::from_axis_angle(Point3D::new(0.0, 1.0, 0.0), FRAC_PI_2);
        let v = Point3D::new(0.0, 1.0, 0.0);
        assert!(close(q.rotate(v), qy.rotate(qx.rotate(v))));
        // +Y -> (X) +Z -> (Y) +X
        assert!(close(q.rotate(v), Point3D::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_rotation_preserves_length() {
        let q = Quaternion::from_euler(Point3D::new(0.7, 0.2, -1.3));
        let v = Point3D::new(3.0, -4.0, 12.0);
        assert!((q.rotate(v).length() - 13.0).abs() < 1e-4);
    }
}
