//! Little-endian cursor over an in-memory asset

use crate::math::Point3D;
use super::DecodeError;

pub(crate) struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    /// Consume `text` if the next bytes match it exactly. On a mismatch (or
    /// not enough data) nothing is consumed.
    pub fn expect_text(&mut self, text: &str) -> bool {
        let bytes = text.as_bytes();
        match self.data.get(self.pos..self.pos + bytes.len()) {
            Some(next) if next == bytes => {
                self.pos += bytes.len();
                true
            }
            _ => false,
        }
    }

    pub fn take(&mut self, len: usize, what: &str) -> Result<&'a [u8], DecodeError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| DecodeError::corrupt(format!("truncated {}", what)))?;
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self, what: &str) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N, what)?);
        Ok(out)
    }

    pub fn read_u32(&mut self, what: &str) -> Result<u32, DecodeError> {
        Ok(u32::from_le_bytes(self.take_array(what)?))
    }

    pub fn read_f32(&mut self, what: &str) -> Result<f32, DecodeError> {
        Ok(f32::from_le_bytes(self.take_array(what)?))
    }

    pub fn read_point(&mut self, what: &str) -> Result<Point3D, DecodeError> {
        Ok(Point3D::new(
            self.read_f32(what)?,
            self.read_f32(what)?,
            self.read_f32(what)?,
        ))
    }

    /// u32 byte length followed by UTF-8 text. Empty strings are rejected.
    pub fn read_string(&mut self, what: &str) -> Result<String, DecodeError> {
        let len = self.read_u32(what)? as usize;
        if len == 0 {
            return Err(DecodeError::corrupt(format!("empty {}", what)));
        }
        let bytes = self.take(len, what)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| DecodeError::corrupt(format!("{} is not valid UTF-8", what)))
    }
}

/// Little-endian writer, mirror of `ByteReader`
#[derive(Default)]
pub(crate) struct ByteWriter {
    pub bytes: Vec<u8>,
}

impl ByteWriter {
    pub fn text(&mut self, text: &str) {
        self.bytes.extend_from_slice(text.as_bytes());
    }

    pub fn u32(&mut self, value: u32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    pub fn f32(&mut self, value: f32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    pub fn point(&mut self, p: Point3D) {
        self.f32(p.x);
        self.f32(p.y);
        self.f32(p.z);
    }

    pub fn string(&mut self, text: &str) {
        self.u32(text.len() as u32);
        self.text(text);
    }

    pub fn count(&mut self, len: usize) {
        self.u32(len as u32);
    }
}
