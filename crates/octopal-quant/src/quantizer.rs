//! Octree quantization to indexed images
//!
//! The quantizer runs two passes over the source:
//!
//! 1. Every pixel with non-zero alpha is filed into an [`Octree`].
//! 2. The tree is reduced to `max_colors - 1` leaves and numbered, then
//!    every pixel is mapped to its leaf's index. Fully transparent pixels
//!    get the reserved index `max_colors`.
//!
//! The output color table always has `max_colors + 1` entries: the palette
//! from index 0, unused slots opaque black, and fully transparent black at
//! index `max_colors`.

use crate::octree::{MAX_COLOR_BITS, Octree};
use crate::scan;
use crate::{QuantError, QuantResult};
use log::debug;
use octopal_core::{ArgbImage, Colormap, IndexedImage, RgbaQuad, color};

/// Largest palette the quantizer builds, leaving index 255 addressable.
pub const MAX_COLORS: u32 = 255;

/// Options for octree quantization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantizerOptions {
    /// Index of the transparent entry; opaque colors use the indices below
    /// it, one of which stays in reserve
    pub max_colors: u32,
    /// Tree depth, i.e. how many leading bits of each channel are told apart
    pub max_color_bits: u32,
}

impl Default for QuantizerOptions {
    fn default() -> Self {
        Self {
            max_colors: MAX_COLORS,
            max_color_bits: MAX_COLOR_BITS,
        }
    }
}

impl QuantizerOptions {
    /// Options sized for re-saving an image at the given indexed depth.
    ///
    /// | depth | max_colors | max_color_bits |
    /// |-------|------------|----------------|
    /// | 8     | 255        | 8              |
    /// | 4     | 15         | 4              |
    /// | 1     | 1          | 1              |
    pub fn for_indexed_depth(depth: u32) -> QuantResult<Self> {
        let (max_colors, max_color_bits) = match depth {
            8 => (255, 8),
            4 => (15, 4),
            1 => (1, 1),
            _ => {
                return Err(QuantError::UnsupportedDepth {
                    expected: "1, 4 or 8 bpp",
                    actual: depth,
                });
            }
        };
        Ok(Self {
            max_colors,
            max_color_bits,
        })
    }

    /// Check both bounds.
    pub fn validate(&self) -> QuantResult<()> {
        if self.max_colors == 0 || self.max_colors > MAX_COLORS {
            return Err(QuantError::MaxColorsOutOfRange(self.max_colors));
        }
        if !(1..=MAX_COLOR_BITS).contains(&self.max_color_bits) {
            return Err(QuantError::ColorBitsOutOfRange(self.max_color_bits));
        }
        Ok(())
    }
}

/// Result of a quantization run
#[derive(Debug, Clone)]
pub struct Quantized {
    /// Indices plus the `max_colors + 1` entry color table
    pub image: IndexedImage,
    /// Averaged leaf colors in index order (`0xAARRGGBB`)
    pub palette: Vec<u32>,
}

/// Validated quantizer configuration.
#[derive(Debug, Clone, Default)]
pub struct Quantizer {
    options: QuantizerOptions,
}

impl Quantizer {
    /// Create a quantizer, rejecting out-of-range options up front.
    pub fn new(options: QuantizerOptions) -> QuantResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// The options this quantizer was built with.
    pub fn options(&self) -> &QuantizerOptions {
        &self.options
    }

    /// Output index given to fully transparent pixels.
    #[inline]
    pub fn transparent_index(&self) -> u8 {
        // validate() bounds max_colors to 255
        self.options.max_colors as u8
    }

    /// Quantize `src` into an indexed image.
    pub fn quantize(&self, src: &ArgbImage) -> QuantResult<Quantized> {
        let max_colors = self.options.max_colors as usize;
        let mut octree = Octree::new(self.options.max_color_bits)?;

        let fed = scan::first_pass(&mut octree, src);
        debug!(
            "quantize {}x{}: {} opaque pixels, {} leaves at {} bits",
            src.width(),
            src.height(),
            fed,
            octree.leaf_count(),
            octree.max_color_bits()
        );

        let palette = octree.build_palette(max_colors - 1);
        let indices = scan::second_pass(&octree, src, self.transparent_index());
        let colormap = build_colormap(&palette, max_colors)?;
        let image = IndexedImage::from_parts(src.width(), src.height(), indices, colormap)?;

        Ok(Quantized { image, palette })
    }
}

fn build_colormap(palette: &[u32], max_colors: usize) -> QuantResult<Colormap> {
    let mut cmap = Colormap::filled(max_colors + 1, RgbaQuad::from_argb(color::BLACK))?;
    for (i, &c) in palette.iter().enumerate() {
        cmap.set_color(i, RgbaQuad::from_argb(c))?;
    }
    cmap.set_color(max_colors, RgbaQuad::transparent())?;
    Ok(cmap)
}

/// Quantize a 32-bit ARGB image using the octree algorithm
pub fn octree_quant(src: &ArgbImage, options: &QuantizerOptions) -> QuantResult<Quantized> {
    Quantizer::new(*options)?.quantize(src)
}

/// Quantize with the default options (255 colors, 8 bits)
pub fn octree_quant_255(src: &ArgbImage) -> QuantResult<Quantized> {
    Quantizer::default().quantize(src)
}
