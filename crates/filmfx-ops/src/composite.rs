//! Alpha compositing and frame flattening.
//!
//! Straight-alpha Porter-Duff Over is the only operator this pipeline
//! needs: the masked filtered layer goes over the base image, and the
//! vignette layer goes over that.
//!
//! # Example
//!
//! ```rust
//! use filmfx_ops::composite::over_pixel;
//!
//! let fg = [255, 0, 0, 128]; // half-transparent red
//! let bg = [0, 0, 255, 255]; // opaque blue
//! let out = over_pixel(fg, bg);
//! assert_eq!(out[3], 255);
//! assert!(out[0] > 100 && out[2] > 100); // both colors contribute
//! ```

use crate::{OpsError, OpsResult};
use filmfx_core::PixelBuffer;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Composites one foreground pixel over one background pixel
/// (straight-alpha Porter-Duff Over).
#[inline]
pub fn over_pixel(fg: [u8; 4], bg: [u8; 4]) -> [u8; 4] {
    let fg_a = fg[3] as f32 / 255.0;
    let bg_a = bg[3] as f32 / 255.0;
    let out_a = fg_a + bg_a * (1.0 - fg_a);

    if out_a < 1e-6 {
        return [0, 0, 0, 0];
    }

    let inv_out_a = 1.0 / out_a;
    let blend = |f: u8, b: u8| -> u8 {
        let v = (f as f32 * fg_a + b as f32 * bg_a * (1.0 - fg_a)) * inv_out_a;
        v.round().clamp(0.0, 255.0) as u8
    };
    [
        blend(fg[0], bg[0]),
        blend(fg[1], bg[1]),
        blend(fg[2], bg[2]),
        (out_a * 255.0).round() as u8,
    ]
}

/// Composites `fg` over `bg`, producing a new buffer.
///
/// # Errors
///
/// [`OpsError::SizeMismatch`] when the buffers differ in dimensions.
pub fn over(fg: &PixelBuffer, bg: &PixelBuffer) -> OpsResult<PixelBuffer> {
    if fg.dimensions() != bg.dimensions() {
        return Err(OpsError::SizeMismatch(format!(
            "fg {}x{} vs bg {}x{}",
            fg.width(),
            fg.height(),
            bg.width(),
            bg.height()
        )));
    }
    trace!(width = fg.width(), height = fg.height(), "composite::over");

    let (width, height) = fg.dimensions();
    let mut dst = PixelBuffer::new(width, height)?;
    let fg_data = fg.data();
    let bg_data = bg.data();
    for (i, out) in dst.data_mut().chunks_exact_mut(4).enumerate() {
        let idx = i * 4;
        let f = [
            fg_data[idx],
            fg_data[idx + 1],
            fg_data[idx + 2],
            fg_data[idx + 3],
        ];
        let b = [
            bg_data[idx],
            bg_data[idx + 1],
            bg_data[idx + 2],
            bg_data[idx + 3],
        ];
        out.copy_from_slice(&over_pixel(f, b));
    }
    Ok(dst)
}

/// Flattens the three pipeline layers into one frame.
///
/// Bottom to top: base image, masked filtered layer, vignette layer. All
/// three must share dimensions.
pub fn flatten(
    base: &PixelBuffer,
    masked: &PixelBuffer,
    vignette: &PixelBuffer,
) -> OpsResult<PixelBuffer> {
    debug!(
        width = base.width(),
        height = base.height(),
        "flattening frame"
    );
    let mid = over(masked, base)?;
    over(vignette, &mid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_fg_wins() {
        let out = over_pixel([10, 20, 30, 255], [200, 200, 200, 255]);
        assert_eq!(out, [10, 20, 30, 255]);
    }

    #[test]
    fn test_transparent_fg_passes_bg() {
        let out = over_pixel([99, 99, 99, 0], [200, 100, 50, 255]);
        assert_eq!(out, [200, 100, 50, 255]);
    }

    #[test]
    fn test_half_alpha_mixes() {
        let out = over_pixel([255, 255, 255, 128], [0, 0, 0, 255]);
        // ~50/50 mix over an opaque background
        assert!(out[0] > 120 && out[0] < 135);
        assert_eq!(out[3], 255);
    }

    #[test]
    fn test_both_transparent() {
        assert_eq!(over_pixel([5, 5, 5, 0], [7, 7, 7, 0]), [0, 0, 0, 0]);
    }

    #[test]
    fn test_over_size_mismatch() {
        let a = PixelBuffer::new(10, 10).unwrap();
        let b = PixelBuffer::new(11, 10).unwrap();
        assert!(matches!(over(&a, &b), Err(OpsError::SizeMismatch(_))));
    }

    #[test]
    fn test_flatten_order() {
        let base = PixelBuffer::filled(4, 4, [255, 0, 0, 255]).unwrap();
        // Transparent middle layer, opaque green vignette layer
        let masked = PixelBuffer::new(4, 4).unwrap();
        let top = PixelBuffer::filled(4, 4, [0, 255, 0, 255]).unwrap();

        let out = flatten(&base, &masked, &top).unwrap();
        // Topmost layer wins where opaque
        assert_eq!(out.pixel(0, 0), [0, 255, 0, 255]);

        // With a transparent top, base shows through
        let clear = PixelBuffer::new(4, 4).unwrap();
        let out = flatten(&base, &masked, &clear).unwrap();
        assert_eq!(out.pixel(0, 0), [255, 0, 0, 255]);
    }
}
