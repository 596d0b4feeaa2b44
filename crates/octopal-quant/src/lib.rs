//! octopal Quant - Octree color quantization
//!
//! Reduces a 32-bit ARGB image to an 8-bit indexed image with a bounded
//! color table:
//!
//! - **Octree** ([`octree`]): color accumulation, reduction, palette lookup
//! - **Quantizer** ([`quantizer`]): options, the two scanning passes, and
//!   the output color table
//!
//! # Example
//!
//! ```
//! use octopal_core::{ArgbImage, color};
//! use octopal_quant::{QuantizerOptions, octree_quant};
//!
//! let mut src = ArgbImage::new(4, 4).unwrap();
//! src.fill(color::compose_rgb(30, 60, 90));
//! src.set_pixel(0, 0, color::TRANSPARENT).unwrap();
//!
//! let opts = QuantizerOptions { max_colors: 16, max_color_bits: 8 };
//! let q = octree_quant(&src, &opts).unwrap();
//! assert_eq!(q.palette, vec![color::compose_rgb(30, 60, 90)]);
//! assert_eq!(q.image.get_index(0, 0), Some(16));
//! assert_eq!(q.image.get_index(1, 0), Some(0));
//! assert_eq!(q.image.colormap().len(), 17);
//! ```

pub mod error;
pub mod octree;
pub mod quantizer;
mod scan;

// Re-export core types
pub use octopal_core;

// Re-export error types
pub use error::{QuantError, QuantResult};

pub use octree::{LeafStats, MAX_COLOR_BITS, Octree};
pub use quantizer::{
    // Constants
    MAX_COLORS,
    // Types
    Quantized,
    Quantizer,
    QuantizerOptions,
    // Functions
    octree_quant,
    octree_quant_255,
};
