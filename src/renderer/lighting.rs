//! Per-face brightness

use serde::{Serialize, Deserialize};
use crate::geometry::TriFace3D;
use crate::math::Point3D;
use crate::scene::{Light3D, Scene3D};

/// How face brightness is derived from the scene's lights
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightingModel {
    /// Sum of the Lambert terms of every light. Ignores light power, falloff,
    /// ambient light and face color.
    #[default]
    Diffuse,
    /// Ambient light plus each light's Lambert term scaled by its power and
    /// a linear distance falloff, tinted by the face color
    Attenuated,
}

impl LightingModel {
    /// Brightness of a world-space face. Not clamped; dithering saturates.
    pub fn brightness(self, face: &TriFace3D, scene: &Scene3D) -> f32 {
        match self {
            LightingModel::Diffuse => scene
                .lights
                .iter()
                .map(|light| lambert(face, light.position))
                .sum(),
            LightingModel::Attenuated => {
                let centroid = face.centroid();
                let lit: f32 = scene
                    .lights
                    .iter()
                    .map(|light| {
                        light.power
                            * lambert(face, light.position)
                            * attenuation(light, centroid.distance(light.position))
                    })
                    .sum();
                (scene.ambient_light + lit) * face.color
            }
        }
    }
}

/// Cosine between the face normal and the direction to the light, floored at 0
pub fn lambert(face: &TriFace3D, light_position: Point3D) -> f32 {
    let to_light = (light_position - face.centroid()).normalize();
    face.normal().normalize().dot(to_light).max(0.0)
}

/// Linear falloff reaching zero at `light.falloff`. No falloff means no
/// attenuation.
pub fn attenuation(light: &Light3D, distance: f32) -> f32 {
    if light.falloff > 0.0 {
        (1.0 - distance / light.falloff).max(0.0)
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Camera3D;

    fn floor_face() -> TriFace3D {
        TriFace3D::with_color(
            Point3D::new(0.0, 0.0, 0.0),
            Point3D::new(1.0, 0.0, 0.0),
            Point3D::new(0.0, 1.0, 0.0),
            0.5,
        )
    }

    fn scene_with(lights: Vec<Light3D>) -> Scene3D {
        Scene3D::new(vec![Camera3D::default()]).with_lights(lights)
    }

    #[test]
    fn test_diffuse_sums_lights() {
        let face = floor_face();
        let c = face.centroid();
        let scene = scene_with(vec![
            Light3D::at(Point3D::new(c.x, c.y, 5.0)),
            Light3D::at(Point3D::new(c.x, c.y, 2.0)),
            // Behind the face
            Light3D::at(Point3D::new(c.x, c.y, -5.0)),
            // Edge-on
            Light3D::at(Point3D::new(c.x + 5.0, c.y, 0.0)),
        ]);
        let brightness = LightingModel::Diffuse.brightness(&face, &scene);
        assert!((brightness - 2.0).abs() < 1e-5, "got {}", brightness);
    }

    #[test]
    fn test_diffuse_without_lights_is_dark() {
        assert_eq!(LightingModel::Diffuse.brightness(&floor_face(), &scene_with(vec![])), 0.0);
    }

    #[test]
    fn test_lambert_angle() {
        let face = floor_face();
        let c = face.centroid();
        let light = Point3D::new(c.x + 1.0, c.y, 1.0);
        assert!((lambert(&face, light) - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-5);
    }

    #[test]
    fn test_attenuated() {
        let face = floor_face();
        let c = face.centroid();
        let mut scene = scene_with(vec![Light3D::new(Point3D::new(c.x, c.y, 5.0), 2.0, 10.0)]);
        scene.ambient_light = 0.25;

        // (0.25 + 2 * 1 * 0.5) * 0.5
        let brightness = LightingModel::Attenuated.brightness(&face, &scene);
        assert!((brightness - 0.625).abs() < 1e-5, "got {}", brightness);
    }

    #[test]
    fn test_attenuation() {
        let light = Light3D::new(Point3D::ZERO, 1.0, 4.0);
        assert_eq!(attenuation(&light, 0.0), 1.0);
        assert_eq!(attenuation(&light, 2.0), 0.5);
        assert_eq!(attenuation(&light, 8.0), 0.0);
        assert_eq!(attenuation(&Light3D::at(Point3D::ZERO), 100.0), 1.0);
    }
}
