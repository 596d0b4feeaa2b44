//! octopal - Octree color quantization for Rust
//!
//! Reduces 32-bit ARGB rasters to 8-bit indexed rasters with a bounded color
//! table, the way GIF and other palette formats need them.
//!
//! # Overview
//!
//! - Pixel containers: [`ArgbImage`] (strided source), [`IndexedImage`]
//!   (indexed output), [`Colormap`] (color table with a text dump)
//! - Quantization: the [`quant`] module, with [`octree_quant`] as the usual
//!   entry point
//!
//! # Example
//!
//! ```
//! use octopal::{ArgbImage, QuantizerOptions, color, octree_quant};
//!
//! let red = color::compose_rgb(220, 30, 30);
//! let blue = color::compose_rgb(30, 30, 220);
//! let mut src = ArgbImage::new(8, 8).unwrap();
//! for y in 0..8 {
//!     for x in 0..8 {
//!         src.set_pixel(x, y, if x < 4 { red } else { blue }).unwrap();
//!     }
//! }
//!
//! let opts = QuantizerOptions::for_indexed_depth(4).unwrap();
//! let q = octree_quant(&src, &opts).unwrap();
//! assert_eq!(q.palette.len(), 2);
//! assert_eq!(q.image.width(), 8);
//! assert_eq!(q.image.colormap().len(), 16);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use octopal_core::*;

// Re-export the quantizer as a module, plus its common entry points
pub use octopal_quant as quant;
pub use octopal_quant::{
    QuantError, QuantResult, Quantized, Quantizer, QuantizerOptions, octree_quant,
    octree_quant_255,
};
