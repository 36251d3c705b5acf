//! Error types for sceneforged-timecode.
//!
//! Timecode arithmetic is total over its numeric domain, so the only
//! failures come from text that does not look like a timecode and from
//! frame rates that cannot describe a video stream.

use thiserror::Error;

/// Result type for sceneforged-timecode operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sceneforged-timecode operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input string does not match `HH:MM:SS<sep>FF`.
    #[error("Invalid timecode string: {0}")]
    InvalidFormat(String),

    /// The frame rate is not a positive, finite number.
    #[error("Invalid frame rate: {0}")]
    InvalidFrameRate(String),
}

impl Error {
    /// Create an invalid format error.
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat(input.into())
    }

    /// Create an invalid frame rate error.
    pub fn invalid_frame_rate(input: impl Into<String>) -> Self {
        Self::InvalidFrameRate(input.into())
    }
}
