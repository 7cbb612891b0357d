//! Chromatic-aberration channel shift.
//!
//! Simulates a lens artifact by sampling the red and blue channels from
//! horizontally offset positions while green stays put: red from the left,
//! blue from the right, alpha forced fully opaque.
//!
//! Sample x coordinates are edge-clamped, so the leftmost and rightmost
//! columns replicate instead of reading out of bounds.
//!
//! # Example
//!
//! ```rust
//! use filmfx_core::PixelBuffer;
//! use filmfx_ops::aberration::channel_shift;
//!
//! let src = PixelBuffer::filled(100, 50, [200, 150, 100, 255]).unwrap();
//! let out = channel_shift(&src, 2.0).unwrap();
//! assert_eq!(out.dimensions(), (100, 50));
//! ```

use crate::{OpsError, OpsResult};
use filmfx_core::PixelBuffer;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Produces an aberration-shifted copy of the buffer.
///
/// `shift` is a percentage of the buffer width:
/// `shift_px = round(width * shift / 100)`. For each output pixel, red is
/// sampled `shift_px` to the left, green unshifted, blue `shift_px` to the
/// right, with the sampled x clamped into `[0, width - 1]`.
///
/// # Errors
///
/// Negative `shift` is [`OpsError::InvalidParameter`]; callers validate user
/// input first, this is the defensive re-check.
pub fn channel_shift(src: &PixelBuffer, shift: f32) -> OpsResult<PixelBuffer> {
    if !shift.is_finite() || shift < 0.0 {
        return Err(OpsError::InvalidParameter(format!(
            "aberration shift must be non-negative, got {}",
            shift
        )));
    }

    let (width, height) = src.dimensions();
    let shift_px = (width as f32 * shift / 100.0).round() as i64;
    trace!(width, height, shift_px, "channel_shift");

    let mut dst = PixelBuffer::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let left = src.pixel_clamped(x as i64 - shift_px, y as i64);
            let center = src.pixel(x, y);
            let right = src.pixel_clamped(x as i64 + shift_px, y as i64);
            dst.set_pixel(x, y, [left[0], center[1], right[2], 255]);
        }
    }
    Ok(dst)
}
