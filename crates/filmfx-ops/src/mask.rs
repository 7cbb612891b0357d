//! Radial region mask for spot-protect compositing.
//!
//! The drag gesture defines a disc: centered at the drag end point, with
//! radius equal to the drag length. Inside the disc the *filtered* layer is
//! removed - the region looks unfiltered, "protected" - with a linear
//! falloff from full protection at the center to none at the rim. Outside
//! the disc the filter shows at full strength.
//!
//! This mirrors a source-out compositing semantic: the radial gradient shape
//! is subtracted from the filtered layer's alpha. The falloff is linear, not
//! smoothstep; that choice is visually load-bearing.
//!
//! # Example
//!
//! ```rust
//! use filmfx_core::{PixelBuffer, Point, Region};
//! use filmfx_ops::mask::apply_region;
//!
//! let filtered = PixelBuffer::filled(100, 100, [50, 50, 50, 255]).unwrap();
//! let region = Region::between(Point::new(0.5, 0.5), Point::new(0.6, 0.5));
//! let masked = apply_region(&filtered, &region).unwrap();
//! // Center of the disc is fully protected (filtered layer removed)
//! assert_eq!(masked.pixel(60, 50)[3], 0);
//! ```

use crate::OpsResult;
use filmfx_core::{PixelBuffer, Region};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Protection weight at pixel distance `d` from the disc center.
///
/// 1.0 at the center, decaying linearly to 0.0 at `radius`, 0.0 beyond.
/// A non-positive radius protects nothing.
#[inline]
pub fn mask_weight(d: f32, radius: f32) -> f32 {
    if radius <= 0.0 || d >= radius {
        0.0
    } else {
        1.0 - d / radius
    }
}

/// Applies the region mask to the filtered buffer.
///
/// With both drag points present, each pixel's alpha is scaled by
/// `1 - mask_weight(distance_to_center, drag_length)`; RGB is untouched.
/// With either point absent the filtered buffer passes through unmodified
/// (full effect everywhere).
pub fn apply_region(filtered: &PixelBuffer, region: &Region) -> OpsResult<PixelBuffer> {
    let Some((from, to)) = region.points() else {
        return Ok(filtered.clone());
    };

    let (width, height) = filtered.dimensions();
    let (cx, cy) = to.to_pixels(width, height);
    let radius = from.pixel_distance(&to, width, height);
    trace!(width, height, cx, cy, radius, "apply_region");

    let mut dst = filtered.clone();
    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let d = (dx * dx + dy * dy).sqrt();
            let w = mask_weight(d, radius);
            if w > 0.0 {
                let mut px = dst.pixel(x, y);
                px[3] = (px[3] as f32 * (1.0 - w)).round() as u8;
                dst.set_pixel(x, y, px);
            }
        }
    }
    Ok(dst)
}
