//! `.pdscene` files
//!
//! Layout, in order:
//! - magic `PDSCENE`
//! - `cam`, u32 count (at least one), then position, rotation and field of
//!   view per camera
//! - optional `refs`, u32 count, then per reference a length-prefixed name,
//!   position, rotation and scale
//! - optional `lights`, u32 count, then one position per light
//! - optional `ambient` and one f32
//! - optional `triggers`, u32 count, then trigger records
//!
//! Lights only store a position; they decode at full power without falloff.

use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;

use log::debug;
use crate::scene::{Camera3D, Light3D, ModelReference, Scene3D};
use super::reader::{ByteReader, ByteWriter};
use super::trigger::{read_trigger, write_trigger};
use super::{read_asset, DecodeError};

pub const SCENE_MAGIC: &str = "PDSCENE";

const CAMERA_BLOCK: &str = "cam";
const REFERENCE_BLOCK: &str = "refs";
const LIGHT_BLOCK: &str = "lights";
const AMBIENT_BLOCK: &str = "ambient";
const TRIGGER_BLOCK: &str = "triggers";

/// Decode a scene from the bytes of a `.pdscene` file
pub fn decode_scene(data: &[u8]) -> Result<Scene3D, DecodeError> {
    if data.is_empty() {
        return Err(DecodeError::AssetMissing("empty scene data".to_string()));
    }

    let mut reader = ByteReader::new(data);
    if !reader.expect_text(SCENE_MAGIC) {
        return Err(DecodeError::HeaderMismatch { expected: SCENE_MAGIC });
    }

    let mut scene = Scene3D::new(read_cameras(&mut reader)?);

    if reader.expect_text(REFERENCE_BLOCK) {
        scene.models = read_references(&mut reader)?;
    }

    if reader.expect_text(LIGHT_BLOCK) {
        let count = reader.read_u32("light count")?;
        for _ in 0..count {
            scene.lights.push(Light3D::at(reader.read_point("light")?));
        }
    }

    if reader.expect_text(AMBIENT_BLOCK) {
        scene.ambient_light = reader.read_f32("ambient light")?;
    }

    if reader.expect_text(TRIGGER_BLOCK) {
        let count = reader.read_u32("trigger count")?;
        for _ in 0..count {
            scene.triggers.push(read_trigger(&mut reader)?);
        }
    }

    if !reader.is_at_end() {
        debug!("Scene has {} unread trailing bytes", reader.remaining());
    }

    Ok(scene)
}

fn read_cameras(reader: &mut ByteReader) -> Result<Vec<Camera3D>, DecodeError> {
    if !reader.expect_text(CAMERA_BLOCK) {
        return Err(DecodeError::corrupt("missing camera block"));
    }

    let count = reader.read_u32("camera count")?;
    if count == 0 {
        return Err(DecodeError::corrupt("scene has no cameras"));
    }

    (0..count)
        .map(|_| {
            let position = reader.read_point("camera position")?;
            let rotation = reader.read_point("camera rotation")?;
            let fov = reader.read_f32("camera field of view")?;
            Ok(Camera3D::new(position, rotation, fov))
        })
        .collect()
}

fn read_references(reader: &mut ByteReader) -> Result<Vec<ModelReference>, DecodeError> {
    let count = reader.read_u32("reference count")?;
    let mut seen = HashSet::new();
    let mut references = Vec::new();

    for _ in 0..count {
        let name = reader.read_string("reference name")?;
        if !seen.insert(name.clone()) {
            return Err(DecodeError::corrupt(format!("duplicate reference {:?}", name)));
        }
        let position = reader.read_point("reference position")?;
        let rotation = reader.read_point("reference rotation")?;
        let scale = reader.read_point("reference scale")?;
        references.push(ModelReference::new(name, position, rotation, scale));
    }

    Ok(references)
}

/// Decode a scene from any reader
pub fn read_scene<R: Read>(mut source: R) -> Result<Scene3D, DecodeError> {
    let mut data = Vec::new();
    source
        .read_to_end(&mut data)
        .map_err(|e| DecodeError::AssetMissing(e.to_string()))?;
    decode_scene(&data)
}

/// Load a scene from a `.pdscene` file
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene3D, DecodeError> {
    decode_scene(&read_asset(path.as_ref())?)
}

/// Encode a scene. Optional blocks are only written when they have content.
pub fn encode_scene(scene: &Scene3D) -> Vec<u8> {
    let mut out = ByteWriter::default();
    out.text(SCENE_MAGIC);

    out.text(CAMERA_BLOCK);
    out.count(scene.cameras.len());
    for camera in &scene.cameras {
        out.point(camera.position);
        out.point(camera.rotation);
        out.f32(camera.field_of_view);
    }

    if !scene.models.is_empty() {
        out.text(REFERENCE_BLOCK);
        out.count(scene.models.len());
        for reference in &scene.models {
            out.string(&reference.name);
            out.point(reference.position);
            out.point(reference.rotation);
            out.point(reference.scale);
        }
    }

    if !scene.lights.is_empty() {
        out.text(LIGHT_BLOCK);
        out.count(scene.lights.len());
        for light in &scene.lights {
            out.point(light.position);
        }
    }

    if scene.ambient_light != 0.0 {
        out.text(AMBIENT_BLOCK);
        out.f32(scene.ambient_light);
    }

    if !scene.triggers.is_empty() {
        out.text(TRIGGER_BLOCK);
        out.count(scene.triggers.len());
        for trigger in &scene.triggers {
            write_trigger(&mut out, trigger);
        }
    }

    out.bytes
}

/// Save a scene as a `.pdscene` file
pub fn save_scene<P: AsRef<Path>>(scene: &Scene3D, path: P) -> std::io::Result<()> {
    fs::write(path, encode_scene(scene))
}
