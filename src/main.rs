//! dither3d demo
//!
//! Loads a scene from an asset bundle and shows the 1-bit framebuffer scaled
//! up in a window. Number keys switch cameras, the arrow keys move the player
//! through trigger volumes and E interacts.
//!
//! Usage: `dither3d-demo [asset-dir] [scene-name]`

use std::path::{Path, PathBuf};

use log::{info, warn};
use macroquad::prelude::{
    clear_background, draw_text, draw_texture_ex, get_frame_time, is_key_down, is_key_pressed,
    next_frame, screen_height, screen_width, Conf, DrawTextureParams, FilterMode, KeyCode,
    Texture2D, Vec2, WHITE,
};
use macroquad::color::Color as ScreenColor;

use dither3d::geometry::Model3D;
use dither3d::io::AssetBundle;
use dither3d::math::Point3D;
use dither3d::projection::Projection;
use dither3d::rasterizer::{Color, Framebuffer, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use dither3d::renderer::{load_settings, RenderSettings, SceneRenderer};
use dither3d::scene::{Light3D, Scene3D, SceneObject, TriggerAction};
use dither3d::triggers::{TriggerDelegate, TriggerHandler};
use dither3d::VERSION;

/// Window pixels per framebuffer pixel
const SCALE: i32 = 2;

/// Player speed in world units per second
const PLAYER_SPEED: f32 = 2.0;

/// Lit and unlit pixel colors, a warm LCD look
const PIXEL_ON: [u8; 4] = [0xB1, 0xAF, 0xA8, 0xFF];
const PIXEL_OFF: [u8; 4] = [0x32, 0x2F, 0x28, 0xFF];

const KEYS: [KeyCode; 9] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
    KeyCode::Key9,
];

fn window_conf() -> Conf {
    Conf {
        window_title: format!("dither3d v{}", VERSION),
        window_width: DISPLAY_WIDTH as i32 * SCALE,
        window_height: DISPLAY_HEIGHT as i32 * SCALE,
        window_resizable: true,
        ..Default::default()
    }
}

/// Receives trigger actions and turns them into demo state changes
#[derive(Default)]
struct DemoDelegate {
    interact_pressed: bool,
    camera_requests: Vec<usize>,
}

impl TriggerDelegate for DemoDelegate {
    fn has_received_interaction(&mut self) -> bool {
        self.interact_pressed
    }

    fn invoke(&mut self, action: &TriggerAction) {
        match action {
            TriggerAction::Debug => info!("Debug trigger reached"),
            TriggerAction::Autosave => info!("Autosave requested (nothing to save in the demo)"),
            TriggerAction::CameraSelect(index) => self.camera_requests.push(*index),
        }
    }
}

/// `render.ron` next to the assets, defaults when absent or broken
fn settings_for(root: &Path) -> RenderSettings {
    let path = root.join("render.ron");
    if !path.exists() {
        return RenderSettings::default();
    }
    match load_settings(&path) {
        Ok(settings) => {
            info!("Loaded render settings from {}", path.display());
            settings
        }
        Err(e) => {
            warn!("Failed to load {}: {}, using defaults", path.display(), e);
            RenderSettings::default()
        }
    }
}

/// Something to look at when the scene couldn't be loaded
fn show_spinning_cube(renderer: &mut SceneRenderer) {
    renderer.set_scene(Scene3D::fallback().with_lights(vec![Light3D::at(Point3D::new(2.0, -4.0, 5.0))]));
    renderer.add_object(SceneObject::at(Model3D::cube(1.0), Point3D::ZERO), false);
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let root = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("assets"));
    let scene_name = args.next().unwrap_or_else(|| "demo".to_string());

    let bundle = AssetBundle::new(&root);
    let mut fb = Framebuffer::display();
    let mut renderer =
        SceneRenderer::load(&scene_name, &bundle, fb.bounds()).with_settings(settings_for(&root));

    let spinning = matches!(renderer.projection(), Projection::Fallback(_));
    if spinning {
        show_spinning_cube(&mut renderer);
    }

    let mut triggers = TriggerHandler::new(renderer.scene().triggers.clone());
    let mut delegate = DemoDelegate::default();
    // Starts between the demo scene's two trigger volumes
    let mut player = Point3D::ZERO;

    loop {
        let dt = get_frame_time();

        for (index, key) in KEYS.iter().enumerate() {
            if is_key_pressed(*key) && renderer.select_camera(index) {
                info!("Switched to camera {}", index);
            }
        }

        let mut step = Point3D::ZERO;
        if is_key_down(KeyCode::Left) {
            step.x -= 1.0;
        }
        if is_key_down(KeyCode::Right) {
            step.x += 1.0;
        }
        if is_key_down(KeyCode::Up) {
            step.y += 1.0;
        }
        if is_key_down(KeyCode::Down) {
            step.y -= 1.0;
        }
        player += step.normalize() * (PLAYER_SPEED * dt);

        delegate.interact_pressed = is_key_pressed(KeyCode::E);
        triggers.process_triggers(player, &mut delegate);
        for index in delegate.camera_requests.drain(..) {
            if !renderer.select_camera(index) {
                warn!("Trigger asked for camera {} which this scene doesn't have", index);
            }
        }

        if spinning {
            if let Some(cube) = renderer.objects_mut().first_mut() {
                cube.world_rotation.z += dt;
                cube.world_rotation.x += dt * 0.5;
            }
        }

        fb.clear(Color::Black);
        renderer.render(&mut fb);

        let texture = Texture2D::from_rgba8(
            fb.width as u16,
            fb.height as u16,
            &fb.to_rgba(PIXEL_ON, PIXEL_OFF),
        );
        texture.set_filter(FilterMode::Nearest);

        clear_background(ScreenColor::from_rgba(30, 30, 35, 255));

        // Largest integer scale that fits, centered
        let scale = (screen_width() / fb.width as f32)
            .min(screen_height() / fb.height as f32)
            .floor()
            .max(1.0);
        let draw_w = fb.width as f32 * scale;
        let draw_h = fb.height as f32 * scale;
        let draw_x = ((screen_width() - draw_w) / 2.0).floor();
        let draw_y = ((screen_height() - draw_h) / 2.0).floor();

        draw_texture_ex(
            &texture,
            draw_x,
            draw_y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(Vec2::new(draw_w, draw_h)),
                ..Default::default()
            },
        );

        draw_text(
            &format!(
                "Player: ({:.1}, {:.1}, {:.1}) | Objects: {}",
                player.x,
                player.y,
                player.z,
                renderer.objects().len()
            ),
            draw_x + 5.0,
            draw_y + draw_h - 5.0,
            16.0,
            ScreenColor::from_rgba(200, 200, 200, 255),
        );

        next_frame().await;
    }
}
