//! Colormap - Color table for indexed images
//!
//! A colormap maps the 8-bit values of an [`IndexedImage`](crate::IndexedImage)
//! to RGBA colors. It holds at most [`MAX_ENTRIES`] colors.

mod serial;

use crate::color;
use crate::error::{Error, Result};

/// Maximum number of entries an 8-bit index can address.
pub const MAX_ENTRIES: usize = 256;

/// RGBA color entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RgbaQuad {
    /// Blue component (stored first for BMP compatibility)
    pub blue: u8,
    /// Green component
    pub green: u8,
    /// Red component
    pub red: u8,
    /// Alpha component
    pub alpha: u8,
}

impl RgbaQuad {
    /// Create a new RGBA color
    pub fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create an RGB color (alpha = 255)
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 255)
    }

    /// Fully transparent black
    pub fn transparent() -> Self {
        Self::default()
    }

    /// Unpack a `0xAARRGGBB` pixel.
    pub fn from_argb(pixel: u32) -> Self {
        let (a, r, g, b) = color::channels(pixel);
        Self::new(r, g, b, a)
    }

    /// Pack into a `0xAARRGGBB` pixel.
    pub fn to_argb(self) -> u32 {
        color::pack(self.alpha, self.red, self.green, self.blue)
    }
}

/// Ordered color table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Colormap {
    colors: Vec<RgbaQuad>,
}

impl Colormap {
    /// Create an empty colormap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a colormap with `len` entries, all set to `fill`.
    pub fn filled(len: usize, fill: RgbaQuad) -> Result<Self> {
        if len > MAX_ENTRIES {
            return Err(Error::InvalidParameter(format!(
                "colormap size {len} exceeds {MAX_ENTRIES}"
            )));
        }
        Ok(Self {
            colors: vec![fill; len],
        })
    }

    /// Get the number of colors
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get a color by index
    pub fn get(&self, index: usize) -> Option<&RgbaQuad> {
        self.colors.get(index)
    }

    /// Add a color to the end of the colormap, returning its index.
    pub fn add_color(&mut self, color: RgbaQuad) -> Result<usize> {
        if self.colors.len() >= MAX_ENTRIES {
            return Err(Error::ColormapFull(MAX_ENTRIES));
        }
        self.colors.push(color);
        Ok(self.colors.len() - 1)
    }

    /// Add an RGBA color
    pub fn add_rgba(&mut self, r: u8, g: u8, b: u8, a: u8) -> Result<usize> {
        self.add_color(RgbaQuad::new(r, g, b, a))
    }

    /// Overwrite the color at an existing index.
    pub fn set_color(&mut self, index: usize, color: RgbaQuad) -> Result<()> {
        let len = self.colors.len();
        let slot = self
            .colors
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })?;
        *slot = color;
        Ok(())
    }

    /// Get the packed `0xAARRGGBB` value at index
    pub fn get_argb(&self, index: usize) -> Option<u32> {
        self.colors.get(index).map(|c| c.to_argb())
    }

    /// Find the first entry with exactly this opaque RGB color.
    pub fn get_index(&self, r: u8, g: u8, b: u8) -> Option<usize> {
        self.colors
            .iter()
            .position(|c| c.alpha == 255 && c.red == r && c.green == g && c.blue == b)
    }

    /// Get all colors as a slice
    pub fn colors(&self) -> &[RgbaQuad] {
        &self.colors
    }

    /// All entries as packed `0xAARRGGBB` values.
    pub fn to_argb_table(&self) -> Vec<u32> {
        self.colors.iter().map(|c| c.to_argb()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_argb_conversion() {
        let quad = RgbaQuad::new(0x11, 0x22, 0x33, 0x44);
        assert_eq!(quad.to_argb(), 0x44112233);
        assert_eq!(RgbaQuad::from_argb(0x44112233), quad);
        assert_eq!(RgbaQuad::transparent().to_argb(), color::TRANSPARENT);
    }

    #[test]
    fn test_add_and_get() {
        let mut cmap = Colormap::new();
        assert!(cmap.is_empty());
        assert_eq!(cmap.add_rgba(1, 2, 3, 255).unwrap(), 0);
        assert_eq!(cmap.add_rgba(4, 5, 6, 0).unwrap(), 1);
        assert_eq!(cmap.len(), 2);
        assert_eq!(cmap.get_argb(0), Some(0xff010203));
        assert_eq!(cmap.get_index(1, 2, 3), Some(0));
        // Transparent entries never match an opaque lookup
        assert_eq!(cmap.get_index(4, 5, 6), None);
    }

    #[test]
    fn test_full_colormap() {
        let mut cmap = Colormap::filled(MAX_ENTRIES, RgbaQuad::default()).unwrap();
        assert!(matches!(
            cmap.add_color(RgbaQuad::rgb(0, 0, 0)),
            Err(Error::ColormapFull(256))
        ));
        assert!(Colormap::filled(MAX_ENTRIES + 1, RgbaQuad::default()).is_err());
    }

    #[test]
    fn test_set_color() {
        let mut cmap = Colormap::filled(3, RgbaQuad::transparent()).unwrap();
        cmap.set_color(2, RgbaQuad::rgb(9, 8, 7)).unwrap();
        assert_eq!(cmap.get(2), Some(&RgbaQuad::rgb(9, 8, 7)));
        assert!(cmap.set_color(3, RgbaQuad::rgb(0, 0, 0)).is_err());
        assert_eq!(cmap.to_argb_table(), vec![0, 0, 0xff090807]);
    }
}
