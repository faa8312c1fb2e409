//! Scene renderer
//!
//! Owns the active scene, its projection and the scene objects built from the
//! scene's model references. Depth order is maintained lazily through two
//! dirty flags that camera changes raise and `render` clears.

use log::{debug, info, warn};
use crate::geometry::{Box2D, TriFace3D};
use crate::io::AssetBundle;
use crate::math::Transformable;
use crate::projection::{Project, Projection};
use crate::rasterizer::{dithered_color, fill_triangle, Framebuffer};
use crate::scene::{Scene3D, SceneObject};
use super::{ModelSource, RenderSettings};

pub struct SceneRenderer {
    scene: Scene3D,
    projection: Projection,
    objects: Vec<SceneObject>,
    needs_face_sorting: bool,
    needs_object_sorting: bool,
    viewport: Box2D,
    settings: RenderSettings,
    source: Box<dyn ModelSource>,
}

impl SceneRenderer {
    /// Render `scene` through its first camera. Both sort passes run on the
    /// first frame. A scene without cameras gets the fallback projection.
    pub fn new(scene: Scene3D, viewport: Box2D, source: Box<dyn ModelSource>) -> Self {
        let projection = match scene.cameras.first() {
            Some(camera) => Projection::perspective(*camera, viewport),
            None => {
                warn!("Scene has no cameras, using the fallback projection");
                Projection::fallback(viewport)
            }
        };

        let mut renderer = Self::with_projection(scene, projection, viewport, source);
        renderer.needs_face_sorting = true;
        renderer.needs_object_sorting = true;
        renderer
    }

    /// Render `scene` through an explicit projection. Nothing is sorted until
    /// asked for.
    pub fn with_projection(
        scene: Scene3D,
        projection: Projection,
        viewport: Box2D,
        source: Box<dyn ModelSource>,
    ) -> Self {
        let mut renderer = Self {
            scene,
            projection,
            objects: Vec::new(),
            needs_face_sorting: false,
            needs_object_sorting: false,
            viewport,
            settings: RenderSettings::default(),
            source,
        };
        renderer.load_objects();
        renderer
    }

    /// Empty scene seen through the fallback projection
    pub fn fallback(viewport: Box2D, source: Box<dyn ModelSource>) -> Self {
        Self::with_projection(Scene3D::fallback(), Projection::fallback(viewport), viewport, source)
    }

    /// Load `<bundle>/Scenes/<scene_name>.pdscene` and its models. A scene
    /// that fails to decode is logged and replaced by the fallback renderer.
    pub fn load(scene_name: &str, bundle: &AssetBundle, viewport: Box2D) -> Self {
        let source = Box::new(bundle.clone());
        match bundle.load_scene(scene_name) {
            Ok(scene) => {
                info!(
                    "Loaded scene '{}': {} cameras, {} models, {} lights, {} triggers",
                    scene_name,
                    scene.cameras.len(),
                    scene.models.len(),
                    scene.lights.len(),
                    scene.triggers.len()
                );
                Self::new(scene, viewport, source)
            }
            Err(e) => {
                warn!("Failed to load scene '{}': {}", scene_name, e);
                Self::fallback(viewport, source)
            }
        }
    }

    /// Replace the render settings. Fallback projections pick up the new
    /// scale and tilt.
    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.set_settings(settings);
        self
    }

    pub fn set_settings(&mut self, settings: RenderSettings) {
        if let Projection::Fallback(fallback) = &mut self.projection {
            fallback.scale = settings.fallback_scale;
            fallback.tilt = settings.fallback_tilt;
        }
        self.settings = settings;
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn set_backface_culling(&mut self, enabled: bool) {
        self.settings.backface_culling = enabled;
    }

    pub fn scene(&self) -> &Scene3D {
        &self.scene
    }

    /// Swap in a new scene: objects are rebuilt from its references and a
    /// perspective projection moves to the scene's first camera.
    pub fn set_scene(&mut self, scene: Scene3D) {
        self.scene = scene;
        self.load_objects();
        if let Some(camera) = self.scene.cameras.first() {
            self.projection.set_camera(*camera);
        }
        self.set_needs_face_sorting();
        self.set_needs_object_sorting();
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn viewport(&self) -> Box2D {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Box2D) {
        self.viewport = viewport;
        self.projection.set_viewport(viewport);
    }

    /// Switch to scene camera `index`. Only perspective projections have a
    /// camera; out-of-range indices are ignored. Returns whether the camera
    /// changed.
    pub fn select_camera(&mut self, index: usize) -> bool {
        let Some(camera) = self.scene.cameras.get(index).copied() else {
            debug!("Camera {} not in scene ({} cameras)", index, self.scene.cameras.len());
            return false;
        };
        if !self.projection.set_camera(camera) {
            return false;
        }
        self.set_needs_face_sorting();
        self.set_needs_object_sorting();
        true
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Objects can be moved freely; call `set_needs_object_sorting` after
    /// moving them.
    pub fn objects_mut(&mut self) -> &mut [SceneObject] {
        &mut self.objects
    }

    pub fn add_object(&mut self, object: SceneObject, requires_sorting: bool) {
        self.objects.push(object);
        if requires_sorting {
            self.set_needs_object_sorting();
        }
    }

    pub fn remove_object(&mut self, index: usize) -> Option<SceneObject> {
        (index < self.objects.len()).then(|| self.objects.remove(index))
    }

    pub fn needs_face_sorting(&self) -> bool {
        self.needs_face_sorting
    }

    pub fn needs_object_sorting(&self) -> bool {
        self.needs_object_sorting
    }

    pub fn set_needs_face_sorting(&mut self) {
        self.needs_face_sorting = true;
    }

    pub fn set_needs_object_sorting(&mut self) {
        self.needs_object_sorting = true;
    }

    /// Brightness of a world-space face under the current lighting model
    pub fn brightness(&self, face: &TriFace3D) -> f32 {
        self.settings.lighting.brightness(face, &self.scene)
    }

    /// Draw every object into `fb`, farthest first
    pub fn render(&mut self, fb: &mut Framebuffer) {
        let eye = self.projection.camera().map(|camera| camera.position);

        if self.needs_object_sorting {
            if let Some(eye) = eye {
                self.objects.sort_by(|a, b| {
                    let dist_a = a.world_position.squared_distance(eye);
                    let dist_b = b.world_position.squared_distance(eye);
                    dist_b.total_cmp(&dist_a)
                });
            }
            self.needs_object_sorting = false;
        }

        for object in &mut self.objects {
            let transform = object.transform();

            if self.needs_face_sorting {
                if let Some(eye) = eye {
                    object.model.sort_by(|a, b| {
                        let dist_a = transform.apply(a.centroid()).squared_distance(eye);
                        let dist_b = transform.apply(b.centroid()).squared_distance(eye);
                        dist_b.total_cmp(&dist_a)
                    });
                }
            }

            for face in &object.model {
                let world_face = face.transformed(&transform);
                let projected = self.projection.project_face(&world_face);
                if self.settings.backface_culling && projected.signed_area() >= 0.0 {
                    continue;
                }

                let brightness = self.settings.lighting.brightness(&world_face, &self.scene);
                fill_triangle(fb, projected, dithered_color(brightness));
            }
        }
        self.needs_face_sorting = false;
    }

    fn load_objects(&mut self) {
        self.objects.clear();
        for reference in &self.scene.models {
            match self.source.load_model(&reference.name) {
                Ok(model) => {
                    debug!("Loaded model '{}' ({} faces)", reference.name, model.len());
                    self.objects.push(SceneObject::from_reference(model, reference));
                }
                Err(e) => warn!("Failed to load model named '{}': {}", reference.name, e),
            }
        }
    }
}
