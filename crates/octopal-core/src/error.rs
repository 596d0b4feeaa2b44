//! Error types for octopal-core
//!
//! Provides a unified error type for the pixel containers. Each variant
//! carries enough context for diagnostics without exposing internal layout.

use thiserror::Error;

/// octopal-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Row stride shorter than a row
    #[error("invalid stride: {stride} is smaller than row length {min}")]
    InvalidStride { stride: usize, min: usize },

    /// Caller buffer does not cover the image
    #[error("buffer too small: need {needed} elements, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Colormap already holds the maximum number of entries
    #[error("colormap full: {0} entries")]
    ColormapFull(usize),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed serialized data
    #[error("decode error: {0}")]
    DecodeError(String),
}

/// Result type alias for octopal-core operations
pub type Result<T> = std::result::Result<T, Error>;
