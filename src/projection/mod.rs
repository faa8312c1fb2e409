//! World space to screen space
//!
//! `Project` is the single interface; `Projection` is the closed set of
//! implementations the renderer works with.

mod fallback;
mod perspective;

pub use fallback::*;
pub use perspective::*;

use crate::geometry::{Box2D, Model3D, TriFace2D, TriFace3D};
use crate::math::{Point2D, Point3D};
use crate::scene::Camera3D;

pub trait Project {
    /// Map a world-space point to the screen. Points that can't be seen map to
    /// `Point2D::ZERO`.
    fn project(&self, point: Point3D) -> Point2D;

    /// Project each vertex independently
    fn project_face(&self, face: &TriFace3D) -> TriFace2D {
        TriFace2D::new(self.project(face.a), self.project(face.b), self.project(face.c))
    }

    /// Project every face, keeping model order
    fn project_model(&self, model: &Model3D) -> Vec<TriFace2D> {
        model.iter().map(|face| self.project_face(face)).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    Perspective(PerspectiveProjection),
    Fallback(FallbackProjection),
}

impl Projection {
    pub fn perspective(camera: Camera3D, viewport: Box2D) -> Self {
        Projection::Perspective(PerspectiveProjection::new(camera, viewport))
    }

    /// Fixed-scale projection centered in `viewport`
    pub fn fallback(viewport: Box2D) -> Self {
        Projection::Fallback(FallbackProjection::new(viewport.center()))
    }

    /// Only perspective projections have a camera
    pub fn camera(&self) -> Option<&Camera3D> {
        match self {
            Projection::Perspective(p) => Some(p.camera()),
            Projection::Fallback(_) => None,
        }
    }

    /// Swap the camera. Returns false for projections without one.
    pub fn set_camera(&mut self, camera: Camera3D) -> bool {
        match self {
            Projection::Perspective(p) => {
                p.set_camera(camera);
                true
            }
            Projection::Fallback(_) => false,
        }
    }

    pub fn set_viewport(&mut self, viewport: Box2D) {
        match self {
            Projection::Perspective(p) => p.set_viewport(viewport),
            Projection::Fallback(f) => f.center = viewport.center(),
        }
    }
}

impl Project for Projection {
    fn project(&self, point: Point3D) -> Point2D {
        match self {
            Projection::Perspective(p) => p.project(point),
            Projection::Fallback(f) => f.project(point),
        }
    }
}
