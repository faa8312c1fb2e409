//! Asset decoding errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file doesn't exist, can't be opened or is empty
    #[error("asset missing or empty: {0}")]
    AssetMissing(String),

    /// The magic bytes at the start of the file are wrong
    #[error("header mismatch, expected {expected:?}")]
    HeaderMismatch { expected: &'static str },

    /// Truncated data, bad counts or invalid strings
    #[error("corrupt structure: {0}")]
    CorruptStructure(String),
}

impl DecodeError {
    pub(crate) fn corrupt(message: impl Into<String>) -> Self {
        DecodeError::CorruptStructure(message.into())
    }
}
