//! Camera-relative perspective projection

use crate::geometry::Box2D;
use crate::math::{Point2D, Point3D, Quaternion};
use crate::scene::Camera3D;
use super::Project;

/// Projects points as seen from a camera looking down -Z.
///
/// The inverse camera rotation and the field-of-view multiplier are cached and
/// refreshed whenever the camera or viewport changes.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveProjection {
    camera: Camera3D,
    viewport: Box2D,
    camera_rotation_inverse: Quaternion,
    fov_multiplier: f32,
}

impl PerspectiveProjection {
    pub fn new(camera: Camera3D, viewport: Box2D) -> Self {
        Self {
            camera,
            viewport,
            camera_rotation_inverse: Quaternion::from_euler(camera.rotation).inverse(),
            fov_multiplier: fov_multiplier(&camera, &viewport),
        }
    }

    pub fn camera(&self) -> &Camera3D {
        &self.camera
    }

    pub fn viewport(&self) -> &Box2D {
        &self.viewport
    }

    /// Pixels per world unit at a distance of one unit
    pub fn fov_multiplier(&self) -> f32 {
        self.fov_multiplier
    }

    pub fn set_camera(&mut self, camera: Camera3D) {
        self.camera = camera;
        self.camera_rotation_inverse = Quaternion::from_euler(camera.rotation).inverse();
        self.fov_multiplier = fov_multiplier(&self.camera, &self.viewport);
    }

    pub fn set_viewport(&mut self, viewport: Box2D) {
        self.viewport = viewport;
        self.fov_multiplier = fov_multiplier(&self.camera, &self.viewport);
    }
}

fn fov_multiplier(camera: &Camera3D, viewport: &Box2D) -> f32 {
    (camera.field_of_view / 2.0).tan() * 2.0 * viewport.width()
}

impl Project for PerspectiveProjection {
    fn project(&self, point: Point3D) -> Point2D {
        let offset = point - self.camera.position;
        let mut view = self.camera_rotation_inverse.rotate(offset);
        view.z = -view.z;

        // Behind (or on) the camera plane
        if view.z <= 0.0 {
            return Point2D::ZERO;
        }

        let parallax = self.fov_multiplier / view.z;
        let center = self.viewport.center();
        Point2D::new(center.x + view.x * parallax, center.y - view.y * parallax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn viewport() -> Box2D {
        Box2D::new(0.0, 0.0, 400.0, 240.0)
    }

    fn forward_camera() -> Camera3D {
        Camera3D::new(Point3D::ZERO, Point3D::ZERO, FRAC_PI_2)
    }

    #[test]
    fn test_on_axis_point_projects_to_center() {
        let proj = PerspectiveProjection::new(forward_camera(), viewport());
        let p = proj.project(Point3D::new(0.0, 0.0, -5.0));
        assert!((p.x - 200.0).abs() < 1e-4);
        assert!((p.y - 120.0).abs() < 1e-4);
    }

    #[test]
    fn test_turned_camera_sees_positive_z() {
        let camera = Camera3D::new(Point3D::ZERO, Point3D::new(0.0, PI, 0.0), FRAC_PI_2);
        let proj = PerspectiveProjection::new(camera, viewport());
        let p = proj.project(Point3D::new(0.0, 0.0, 5.0));
        assert!((p.x - 200.0).abs() < 1e-3);
        assert!((p.y - 120.0).abs() < 1e-3);
    }

    #[test]
    fn test_points_behind_camera_project_to_zero() {
        let proj = PerspectiveProjection::new(forward_camera(), viewport());
        for z in [0.0, 0.001, 1.0, 5.0, 1000.0] {
            for (x, y) in [(0.0, 0.0), (3.0, -2.0), (-50.0, 10.0)] {
                assert_eq!(proj.project(Point3D::new(x, y, z)), Point2D::ZERO);
            }
        }
    }

    #[test]
    fn test_screen_y_is_flipped() {
        let proj = PerspectiveProjection::new(forward_camera(), viewport());
        let up = proj.project(Point3D::new(0.0, 1.0, -5.0));
        let right = proj.project(Point3D::new(1.0, 0.0, -5.0));
        assert!(up.y < 120.0);
        assert!(right.x > 200.0);
        // tan(45deg) * 2 * 400 / 5 = 160 pixels per unit
        assert!((right.x - 360.0).abs() < 1e-3);
    }

    #[test]
    fn test_setters_refresh_cache() {
        let mut proj = PerspectiveProjection::new(forward_camera(), viewport());
        let before = proj.fov_multiplier();
        proj.set_viewport(Box2D::new(0.0, 0.0, 200.0, 120.0));
        assert!((proj.fov_multiplier() - before / 2.0).abs() < 1e-3);

        proj.set_camera(Camera3D::new(Point3D::new(0.0, 0.0, 10.0), Point3D::ZERO, FRAC_PI_2));
        // Depth is measured from the moved camera
        assert_ne!(proj.project(Point3D::new(0.0, 0.0, 5.0)), Point2D::ZERO);
        assert_eq!(proj.project(Point3D::new(0.0, 0.0, 15.0)), Point2D::ZERO);
    }
}
