//! IndexedImage - 8-bit palette-indexed raster
//!
//! Each pixel stores one byte, an index into the attached [`Colormap`].
//! Rows are stored back to back with no padding.

use crate::colormap::{Colormap, MAX_ENTRIES};
use crate::error::{Error, Result};
use crate::image::ArgbImage;

/// 8-bit indexed image with its color table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
    colormap: Colormap,
}

impl IndexedImage {
    /// Create a new image with every index 0 and an empty colormap.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize],
            colormap: Colormap::new(),
        })
    }

    /// Wrap row-major indices and a colormap.
    pub fn from_parts(width: u32, height: u32, data: Vec<u8>, colormap: Colormap) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let needed = width as usize * height as usize;
        if data.len() != needed {
            return Err(Error::BufferTooSmall {
                needed,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
            colormap,
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All indices, row-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Indices of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// Get the index at `(x, y)`, or `None` outside the image.
    pub fn get_index(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Set the index at `(x, y)`.
    pub fn set_index(&mut self, x: u32, y: u32, index: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize * self.width as usize + x as usize,
                len: self.data.len(),
            });
        }
        let offset = y as usize * self.width as usize + x as usize;
        self.data[offset] = index;
        Ok(())
    }

    /// The attached color table.
    #[inline]
    pub fn colormap(&self) -> &Colormap {
        &self.colormap
    }

    /// Replace the color table.
    pub fn set_colormap(&mut self, colormap: Colormap) {
        self.colormap = colormap;
    }

    /// Count how many pixels use each index.
    pub fn histogram(&self) -> [usize; MAX_ENTRIES] {
        let mut hist = [0usize; MAX_ENTRIES];
        for &idx in &self.data {
            hist[idx as usize] += 1;
        }
        hist
    }

    /// Expand every index through the colormap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if a pixel refers to an entry the
    /// colormap does not have.
    pub fn to_argb(&self) -> Result<ArgbImage> {
        let table = self.colormap.to_argb_table();
        let data = self
            .data
            .iter()
            .map(|&idx| {
                table
                    .get(idx as usize)
                    .copied()
                    .ok_or(Error::IndexOutOfBounds {
                        index: idx as usize,
                        len: table.len(),
                    })
            })
            .collect::<Result<Vec<u32>>>()?;
        ArgbImage::from_raw(data, self.width, self.height, self.width as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormap::RgbaQuad;

    fn two_color_map() -> Colormap {
        let mut cmap = Colormap::new();
        cmap.add_color(RgbaQuad::rgb(255, 0, 0)).unwrap();
        cmap.add_color(RgbaQuad::transparent()).unwrap();
        cmap
    }

    #[test]
    fn test_new() {
        let img = IndexedImage::new(3, 2).unwrap();
        assert_eq!(img.data(), &[0; 6]);
        assert!(img.colormap().is_empty());
        assert!(IndexedImage::new(0, 2).is_err());
    }

    #[test]
    fn test_from_parts_length_check() {
        assert!(IndexedImage::from_parts(2, 2, vec![0; 3], Colormap::new()).is_err());
        let img = IndexedImage::from_parts(2, 2, vec![0, 1, 1, 0], two_color_map()).unwrap();
        assert_eq!(img.row(1), &[1, 0]);
    }

    #[test]
    fn test_get_set_index() {
        let mut img = IndexedImage::new(2, 2).unwrap();
        img.set_index(1, 0, 7).unwrap();
        assert_eq!(img.get_index(1, 0), Some(7));
        assert_eq!(img.get_index(2, 0), None);
        assert!(img.set_index(0, 2, 1).is_err());
    }

    #[test]
    fn test_histogram() {
        let img = IndexedImage::from_parts(2, 2, vec![0, 1, 1, 1], two_color_map()).unwrap();
        let hist = img.histogram();
        assert_eq!(hist[0], 1);
        assert_eq!(hist[1], 3);
        assert_eq!(hist.iter().sum::<usize>(), 4);
    }

    #[test]
    fn test_to_argb() {
        let img = IndexedImage::from_parts(2, 1, vec![0, 1], two_color_map()).unwrap();
        let argb = img.to_argb().unwrap();
        assert_eq!(argb.row(0), &[0xffff0000, 0]);
    }

    #[test]
    fn test_to_argb_missing_entry() {
        let img = IndexedImage::from_parts(2, 1, vec![0, 2], two_color_map()).unwrap();
        assert!(matches!(
            img.to_argb(),
            Err(Error::IndexOutOfBounds { index: 2, len: 2 })
        ));
    }
}
