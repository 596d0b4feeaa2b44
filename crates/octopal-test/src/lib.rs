//! octopal-test - Regression test framework for octopal
//!
//! Every crate's `tests/*_reg.rs` files drive their checks through a
//! [`RegParams`], which numbers each comparison, records failures instead of
//! panicking on the first one, and reports a summary from
//! [`RegParams::cleanup`].
//!
//! # Usage
//!
//! ```ignore
//! use octopal_test::RegParams;
//!
//! let mut rp = RegParams::new("octree");
//! rp.compare_values(4.0, leaves as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: "compare" (default) or "display" (also print every
//!   compared value)

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use octopal_core::{ArgbImage, color};

/// Build a `w x h` opaque gradient: red follows x, green follows y.
pub fn gradient_image(w: u32, h: u32) -> ArgbImage {
    let mut img = ArgbImage::new(w, h).expect("gradient dimensions must be non-zero");
    let dx = w.saturating_sub(1).max(1);
    let dy = h.saturating_sub(1).max(1);
    for y in 0..h {
        for x in 0..w {
            let r = (x * 255 / dx) as u8;
            let g = (y * 255 / dy) as u8;
            let b = ((x + y) * 64 / (w + h)) as u8 + 96;
            img.set_pixel_unchecked(x, y, color::compose_rgb(r, g, b));
        }
    }
    img
}

/// Build an image of vertical stripes, one per color, left to right.
pub fn stripe_image(colors: &[u32], stripe_width: u32, h: u32) -> ArgbImage {
    let w = stripe_width * colors.len() as u32;
    let mut img = ArgbImage::new(w, h).expect("stripe dimensions must be non-zero");
    for y in 0..h {
        for x in 0..w {
            img.set_pixel_unchecked(x, y, colors[(x / stripe_width) as usize]);
        }
    }
    img
}
