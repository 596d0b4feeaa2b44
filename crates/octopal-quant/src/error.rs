//! Error types for octopal-quant

use thiserror::Error;

/// Errors that can occur during quantization
#[derive(Debug, Error)]
pub enum QuantError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] octopal_core::Error),

    /// Palette size outside the supported range
    #[error("max colors out of range: {0} (must be 1..=255)")]
    MaxColorsOutOfRange(u32),

    /// Tree depth outside the supported range
    #[error("color bits out of range: {0} (must be 1..=8)")]
    ColorBitsOutOfRange(u32),

    /// No preset exists for this indexed depth
    #[error("unsupported depth: expected {expected}, got {actual}")]
    UnsupportedDepth { expected: &'static str, actual: u32 },
}

/// Result type for quantization operations
pub type QuantResult<T> = Result<T, QuantError>;
