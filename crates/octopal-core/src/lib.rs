//! octopal Core - Pixel containers for color quantization
//!
//! This crate provides the data structures shared by the quantizer:
//!
//! - [`ArgbImage`] - 32-bit ARGB source raster with a row stride
//! - [`IndexedImage`] - 8-bit indexed raster with an attached color table
//! - [`Colormap`] / [`RgbaQuad`] - Ordered color table for indexed images
//! - [`color`] - Packed color helpers
//!
//! Decoding and encoding image files is left to the caller; everything here
//! works on decoded pixel data.

pub mod colormap;
pub mod error;
pub mod image;
pub mod indexed;

pub use colormap::{Colormap, RgbaQuad};
pub use error::{Error, Result};
pub use image::ArgbImage;
pub use indexed::IndexedImage;

/// Channel helpers for packed 32-bit ARGB colors.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xAARRGGBB` (alpha in MSB, blue in LSB).
/// On little-endian machines the in-memory byte order is B, G, R, A.
pub mod color {
    /// Shift amounts for extracting color channels
    pub const ALPHA_SHIFT: u32 = 24;
    pub const RED_SHIFT: u32 = 16;
    pub const GREEN_SHIFT: u32 = 8;
    pub const BLUE_SHIFT: u32 = 0;

    /// Fully transparent black.
    pub const TRANSPARENT: u32 = 0;

    /// Opaque black.
    pub const BLACK: u32 = 0xff00_0000;

    /// Extract alpha component from a packed pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Extract red component from a packed pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a packed pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a packed pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Decompose a packed pixel into `(alpha, red, green, blue)`.
    #[inline]
    pub fn channels(pixel: u32) -> (u8, u8, u8, u8) {
        (alpha(pixel), red(pixel), green(pixel), blue(pixel))
    }

    /// Compose a packed pixel from its four channels.
    #[inline]
    pub fn pack(a: u8, r: u8, g: u8, b: u8) -> u32 {
        ((a as u32) << ALPHA_SHIFT)
            | ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
    }

    /// Compose an opaque pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        pack(255, r, g, b)
    }

    /// Extract RGB values from a packed pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// True if the pixel has any coverage at all.
    #[inline]
    pub fn is_opaque(pixel: u32) -> bool {
        alpha(pixel) > 0
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_channel_order() {
            let pixel = 0x80_11_22_33;
            assert_eq!(alpha(pixel), 0x80);
            assert_eq!(red(pixel), 0x11);
            assert_eq!(green(pixel), 0x22);
            assert_eq!(blue(pixel), 0x33);
        }

        #[test]
        fn test_pack_matches_channels() {
            let pixel = pack(1, 2, 3, 4);
            assert_eq!(pixel, 0x01_02_03_04);
            assert_eq!(channels(pixel), (1, 2, 3, 4));
        }

        #[test]
        fn test_compose_rgb_is_opaque() {
            let pixel = compose_rgb(10, 20, 30);
            assert_eq!(alpha(pixel), 255);
            assert_eq!(extract_rgb(pixel), (10, 20, 30));
            assert!(is_opaque(pixel));
        }

        #[test]
        fn test_transparent() {
            assert!(!is_opaque(TRANSPARENT));
            // Color bits do not make a zero-alpha pixel visible
            assert!(!is_opaque(0x00ff_ffff));
        }
    }
}
