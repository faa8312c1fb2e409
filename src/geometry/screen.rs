//! Screen-space primitives used after projection

use serde::{Serialize, Deserialize};
use crate::math::Point2D;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size2D {
    pub width: f32,
    pub height: f32,
}

impl Size2D {
    pub const ZERO: Size2D = Size2D { width: 0.0, height: 0.0 };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Rectangle in screen space. Also used for viewports and fill regions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Box2D {
    pub origin: Point2D,
    pub size: Size2D,
}

impl Box2D {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point2D::new(x, y),
            size: Size2D::new(width, height),
        }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
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
        self.origin.y + self.size.height / 2.0
    }

    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(self.mid_x(), self.mid_y())
    }

    /// Inclusive on every edge
    pub fn contains(&self, p: Point2D) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }
}

/// Projected triangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TriFace2D {
    pub a: Point2D,
    pub b: Point2D,
    pub c: Point2D,
}

impl TriFace2D {
    pub const fn new(a: Point2D, b: Point2D, c: Point2D) -> Self {
        Self { a, b, c }
    }

    /// Twice the area, signed by winding. With screen Y pointing down, faces
    /// that read clockwise on screen come out negative.
    pub fn signed_area(&self) -> f32 {
        let TriFace2D { a, b, c } = *self;
        (b.x - a.x) * (c.y - b.y) - (c.x - b.x) * (b.y - a.y)
    }

    pub fn translated(&self, offset: Point2D) -> Self {
        Self::new(self.a + offset, self.b + offset, self.c + offset)
    }
}
