//! ArgbImage - 32-bit source raster
//!
//! `ArgbImage` holds decoded pixels as packed `0xAARRGGBB` words.
//!
//! # Pixel layout
//!
//! - Data is a flat `Vec<u32>`, one word per pixel
//! - Rows may be padded: pixel `(x, y)` lives at `y * stride + x`
//! - Padding words are never read by the quantizer
//!
//! # Examples
//!
//! ```
//! use octopal_core::{ArgbImage, color};
//!
//! let mut img = ArgbImage::new(4, 2).unwrap();
//! img.set_pixel(1, 1, color::compose_rgb(255, 0, 0)).unwrap();
//! assert_eq!(img.get_pixel(1, 1), Some(0xffff0000));
//! assert_eq!(img.get_pixel(4, 0), None);
//! ```

mod access;

use crate::error::{Error, Result};

/// Bytes per packed ARGB pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// 32-bit ARGB image with an explicit row stride (in pixels).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgbImage {
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<u32>,
}

impl ArgbImage {
    /// Create a new image with every pixel fully transparent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_dimensions(width, height)?;
        let stride = width as usize;
        Ok(Self {
            width,
            height,
            stride,
            data: vec![0u32; stride * height as usize],
        })
    }

    /// Wrap an existing buffer of packed pixels.
    ///
    /// `stride` is the distance between row starts, in pixels. The last row
    /// only needs `width` words, so `data` may stop right after it.
    pub fn from_raw(data: Vec<u32>, width: u32, height: u32, stride: usize) -> Result<Self> {
        check_dimensions(width, height)?;
        if stride < width as usize {
            return Err(Error::InvalidStride {
                stride,
                min: width as usize,
            });
        }
        let needed = required_len(width, height, stride)?;
        if data.len() < needed {
            return Err(Error::BufferTooSmall {
                needed,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    /// Build an image from raw bytes in B, G, R, A order.
    ///
    /// This is the memory layout of a 32bpp ARGB bitmap on little-endian
    /// systems. `stride_bytes` must be a whole number of pixels and at least
    /// one row long.
    pub fn from_bgra_bytes(
        bytes: &[u8],
        width: u32,
        height: u32,
        stride_bytes: usize,
    ) -> Result<Self> {
        check_dimensions(width, height)?;
        let row_bytes = (width as usize)
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or_else(|| Error::InvalidParameter(format!("width {width} is too large")))?;
        if stride_bytes < row_bytes {
            return Err(Error::InvalidStride {
                stride: stride_bytes,
                min: row_bytes,
            });
        }
        if stride_bytes % BYTES_PER_PIXEL != 0 {
            return Err(Error::InvalidParameter(format!(
                "stride of {stride_bytes} bytes is not a multiple of {BYTES_PER_PIXEL}"
            )));
        }
        let stride = stride_bytes / BYTES_PER_PIXEL;
        let needed = required_len(width, height, stride)?
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or_else(|| {
                Error::InvalidParameter(format!(
                    "stride of {stride_bytes} bytes is too large for {width}x{height} pixels"
                ))
            })?;
        if bytes.len() < needed {
            return Err(Error::BufferTooSmall {
                needed,
                actual: bytes.len(),
            });
        }

        let data = bytes[..needed]
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|px| u32::from_le_bytes([px[0], px[1], px[2], px[3]]))
            .collect();

        Ok(Self {
            width,
            height,
            stride,
            data,
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

    /// Get the row stride in pixels.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Total number of visible pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw data, including any row padding.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Visible pixels of row `y`, without padding.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u32] {
        let start = y as usize * self.stride;
        &self.data[start..start + self.width as usize]
    }

    /// Mutable visible pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> &mut [u32] {
        let start = y as usize * self.stride;
        &mut self.data[start..start + self.width as usize]
    }

    /// Iterate over visible rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Number of pixels with non-zero alpha.
    pub fn count_opaque(&self) -> usize {
        self.rows()
            .map(|row| row.iter().filter(|&&p| crate::color::is_opaque(p)).count())
            .sum()
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    Ok(())
}

/// Words needed to hold every visible pixel: `(height - 1) * stride + width`.
fn required_len(width: u32, height: u32, stride: usize) -> Result<usize> {
    (height as usize - 1)
        .checked_mul(stride)
        .and_then(|n| n.checked_add(width as usize))
        .ok_or_else(|| {
            Error::InvalidParameter(format!(
                "stride {stride} is too large for {width}x{height} pixels"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    #[test]
    fn test_new_is_transparent() {
        let img = ArgbImage::new(3, 2).unwrap();
        assert_eq!(img.stride(), 3);
        assert_eq!(img.pixel_count(), 6);
        assert_eq!(img.count_opaque(), 0);
    }

    #[test]
    fn test_zero_dimension() {
        assert!(matches!(
            ArgbImage::new(0, 5),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(ArgbImage::from_raw(vec![], 4, 0, 4).is_err());
    }

    #[test]
    fn test_from_raw_with_padding() {
        // 2x2 image, stride 3, last row unpadded
        let data = vec![1, 2, 0xdead, 3, 4];
        let img = ArgbImage::from_raw(data, 2, 2, 3).unwrap();
        assert_eq!(img.row(0), &[1, 2]);
        assert_eq!(img.row(1), &[3, 4]);
        assert_eq!(img.get_pixel(1, 1), Some(4));
    }

    #[test]
    fn test_from_raw_rejects_short_stride() {
        let result = ArgbImage::from_raw(vec![0; 8], 4, 2, 3);
        assert!(matches!(result, Err(Error::InvalidStride { .. })));
    }

    #[test]
    fn test_from_raw_rejects_short_buffer() {
        let result = ArgbImage::from_raw(vec![0; 7], 4, 2, 4);
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall {
                needed: 8,
                actual: 7
            })
        ));
    }

    #[test]
    fn test_from_bgra_bytes() {
        // One row of two pixels plus 4 padding bytes, then a second row
        let bytes = [
            0x30, 0x20, 0x10, 0xff, // B G R A
            0x00, 0x00, 0xff, 0x80, //
            0xee, 0xee, 0xee, 0xee, // padding
            0x01, 0x02, 0x03, 0x00, //
            0xff, 0xff, 0xff, 0xff,
        ];
        let img = ArgbImage::from_bgra_bytes(&bytes, 2, 2, 12).unwrap();
        assert_eq!(img.stride(), 3);
        assert_eq!(img.get_pixel(0, 0), Some(color::pack(0xff, 0x10, 0x20, 0x30)));
        assert_eq!(img.get_pixel(1, 0), Some(color::pack(0x80, 0xff, 0, 0)));
        assert_eq!(img.get_pixel(0, 1), Some(color::pack(0, 3, 2, 1)));
        assert_eq!(img.count_opaque(), 3);
    }

    #[test]
    fn test_from_bgra_bytes_bad_stride() {
        let bytes = [0u8; 32];
        assert!(ArgbImage::from_bgra_bytes(&bytes, 2, 2, 10).is_err());
        assert!(ArgbImage::from_bgra_bytes(&bytes, 2, 2, 4).is_err());
    }

    #[test]
    fn test_huge_stride_is_an_error() {
        assert!(matches!(
            ArgbImage::from_raw(vec![0xff000000], 1, 2, usize::MAX),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            ArgbImage::from_bgra_bytes(&[0; 4], 1, 2, usize::MAX - 3),
            Err(Error::InvalidParameter(_))
        ));
        // A single row never multiplies the stride
        assert!(ArgbImage::from_raw(vec![7], 1, 1, usize::MAX).is_ok());
    }
}
