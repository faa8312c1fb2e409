//! Vector math for 3D rendering
//!
//! `Point3D` doubles as a position and a direction. `Point2D` is the
//! screen-space counterpart produced by projections.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Serialize, Deserialize};

/// 3D point / vector
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3D {
    pub const ZERO: Point3D = Point3D { x: 0.0, y: 0.0, z: 0.0 };
    pub const ONE: Point3D = Point3D { x: 1.0, y: 1.0, z: 1.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Same value on every axis
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    pub fn dot(self, other: Point3D) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Point3D) -> Point3D {
        Point3D {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn length(self) -> f32 {
        self.squared_length().sqrt()
    }

    pub fn squared_length(self) -> f32 {
        self.dot(self)
    }

    /// Unit-length copy. The zero vector stays zero.
    pub fn normalize(self) -> Point3D {
        let l = self.length();
        if l > 0.0 {
            self / l
        } else {
            Point3D::ZERO
        }
    }

    pub fn distance(self, other: Point3D) -> f32 {
        (self - other).length()
    }

    /// Squared distance, used for depth ordering (no sqrt needed)
    pub fn squared_distance(self, other: Point3D) -> f32 {
        (self - other).squared_length()
    }

    /// Component-wise minimum
    pub fn min(self, other: Point3D) -> Point3D {
        Point3D::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum
    pub fn max(self, other: Point3D) -> Point3D {
        Point3D::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }
}

impl Add for Point3D {
    type Output = Point3D;
    fn add(self, other: Point3D) -> Point3D {
        Point3D::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Add<f32> for Point3D {
    type Output = Point3D;
    fn add(self, s: f32) -> Point3D {
        self + Point3D::splat(s)
    }
}

impl AddAssign for Point3D {
    fn add_assign(&mut self, other: Point3D) {
        *self = *self + other;
    }
}

impl Sub for Point3D {
    type Output = Point3D;
    fn sub(self, other: Point3D) -> Point3D {
        Point3D::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Sub<f32> for Point3D {
    type Output = Point3D;
    fn sub(self, s: f32) -> Point3D {
        self - Point3D::splat(s)
    }
}

impl SubAssign for Point3D {
    fn sub_assign(&mut self, other: Point3D) {
        *self = *self - other;
    }
}

impl Mul for Point3D {
    type Output = Point3D;
    fn mul(self, other: Point3D) -> Point3D {
        Point3D::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }
}

impl Mul<f32> for Point3D {
    type Output = Point3D;
    fn mul(self, s: f32) -> Point3D {
        Point3D::new(self.x * s, self.y * s, self.z * s)
    }
}

impl MulAssign<f32> for Point3D {
    fn mul_assign(&mut self, s: f32) {
        *self = *self * s;
    }
}

impl Div for Point3D {
    type Output = Point3D;
    fn div(self, other: Point3D) -> Point3D {
        Point3D::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }
}

impl Div<f32> for Point3D {
    type Output = Point3D;
    fn div(self, s: f32) -> Point3D {
        Point3D::new(self.x / s, self.y / s, self.z / s)
    }
}

impl Neg for Point3D {
    type Output = Point3D;
    fn neg(self) -> Point3D {
        Point3D::new(-self.x, -self.y, -self.z)
    }
}

/// 2D point in screen space (Y grows downward)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    /// Returned by projections for points that can't be seen
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point2D {
    type Output = Point2D;
    fn add(self, other: Point2D) -> Point2D {
        Point2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2D {
    type Output = Point2D;
    fn sub(self, other: Point2D) -> Point2D {
        Point2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Point2D {
    type Output = Point2D;
    fn mul(self, s: f32) -> Point2D {
        Point2D::new(self.x * s, self.y * s)
    }
}

impl Div<f32> for Point2D {
    type Output = Point2D;
    fn div(self, s: f32) -> Point2D {
        Point2D::new(self.x / s, self.y / s)
    }
}
