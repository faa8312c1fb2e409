//! `.model` files
//!
//! Layout: the 7-byte magic `PDMDL3D`, then any number of faces, each an
//! `f` marker followed by vertices a, b, c (9 x f32) and a color (f32).
//! Reading stops at the first byte that isn't a face marker.

use std::fs;
use std::io::Read;
use std::path::Path;

use log::debug;
use crate::geometry::{Model3D, TriFace3D};
use super::reader::{ByteReader, ByteWriter};
use super::{read_asset, DecodeError};

pub const MODEL_MAGIC: &str = "PDMDL3D";
const FACE_MARKER: &str = "f";

/// Decode a model from the bytes of a `.model` file
pub fn decode_model(data: &[u8]) -> Result<Model3D, DecodeError> {
    if data.is_empty() {
        return Err(DecodeError::AssetMissing("empty model data".to_string()));
    }

    let mut reader = ByteReader::new(data);
    if !reader.expect_text(MODEL_MAGIC) {
        return Err(DecodeError::HeaderMismatch { expected: MODEL_MAGIC });
    }

    let mut faces = Vec::new();
    while reader.expect_text(FACE_MARKER) {
        let a = reader.read_point("face vertex")?;
        let b = reader.read_point("face vertex")?;
        let c = reader.read_point("face vertex")?;
        let color = reader.read_f32("face color")?;
        faces.push(TriFace3D::with_color(a, b, c, color));
    }

    if !reader.is_at_end() {
        debug!("Model has {} unread trailing bytes", reader.remaining());
    }

    Ok(Model3D::new(faces))
}

/// Decode a model from any reader
pub fn read_model<R: Read>(mut source: R) -> Result<Model3D, DecodeError> {
    let mut data = Vec::new();
    source
        .read_to_end(&mut data)
        .map_err(|e| DecodeError::AssetMissing(e.to_string()))?;
    decode_model(&data)
}

/// Load a model from a `.model` file
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<Model3D, DecodeError> {
    decode_model(&read_asset(path.as_ref())?)
}

pub fn encode_model(model: &Model3D) -> Vec<u8> {
    let mut out = ByteWriter::default();
    out.text(MODEL_MAGIC);
    for face in model {
        out.text(FACE_MARKER);
        out.point(face.a);
        out.point(face.b);
        out.point(face.c);
        out.f32(face.color);
    }
    out.bytes
}

/// Save a model as a `.model` file
pub fn save_model<P: AsRef<Path>>(model: &Model3D, path: P) -> std::io::Result<()> {
    fs::write(path, encode_model(model))
}
