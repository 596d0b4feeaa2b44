//! Pixel scanning passes
//!
//! Both passes walk the visible pixels row by row, skipping any row padding.

use crate::octree::Octree;
use octopal_core::{ArgbImage, color};

/// Feed every pixel with non-zero alpha to the octree.
///
/// Returns the number of pixels fed.
pub(crate) fn first_pass(octree: &mut Octree, src: &ArgbImage) -> usize {
    let mut fed = 0;
    for row in src.rows() {
        for &pixel in row {
            if color::is_opaque(pixel) {
                octree.add_color(pixel);
                fed += 1;
            }
        }
    }
    fed
}

/// Map every pixel to a palette index.
///
/// Fully transparent pixels get `transparent_index`; the rest get the index
/// of the leaf their color descends to. A run of identical packed colors
/// reuses the previous lookup.
pub(crate) fn second_pass(octree: &Octree, src: &ArgbImage, transparent_index: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.pixel_count());
    let mut previous: Option<(u32, u8)> = None;

    for row in src.rows() {
        for &pixel in row {
            let index = match previous {
                Some((prev, index)) if prev == pixel => index,
                _ => {
                    let index = lookup(octree, pixel, transparent_index);
                    previous = Some((pixel, index));
                    index
                }
            };
            out.push(index);
        }
    }
    out
}

#[inline]
fn lookup(octree: &Octree, pixel: u32, transparent_index: u8) -> u8 {
    if color::is_opaque(pixel) {
        // Callers build the palette with at most 255 entries
        octree.palette_index(pixel) as u8
    } else {
        transparent_index
    }
}
