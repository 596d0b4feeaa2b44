//! Pixel access for ArgbImage

use super::ArgbImage;
use crate::error::{Error, Result};

impl ArgbImage {
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride + x as usize
    }

    /// Get a pixel value, or `None` if `(x, y)` is outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.offset(x, y)])
    }

    /// Get a pixel value without the range check on `(x, y)`.
    ///
    /// Out-of-range coordinates may read padding or panic on the slice bound.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data[self.offset(x, y)]
    }

    /// Set a pixel value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `(x, y)` is outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width as usize,
            });
        }
        if y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height as usize,
            });
        }
        let offset = self.offset(x, y);
        self.data[offset] = val;
        Ok(())
    }

    /// Set a pixel value without the range check on `(x, y)`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let offset = self.offset(x, y);
        self.data[offset] = val;
    }

    /// Fill every visible pixel with `val`.
    pub fn fill(&mut self, val: u32) {
        for y in 0..self.height {
            self.row_mut(y).fill(val);
        }
    }
}
