//! Uniform resize for preview downscaling.
//!
//! The host runs the pipeline twice per image: a fast preview on a
//! downscaled copy and a full-resolution export. This module provides the
//! separable triangle-filter (bilinear) resample used for the preview copy,
//! plus the helper that picks the uniform preview scale factor.
//!
//! # Example
//!
//! ```rust
//! use filmfx_core::PixelBuffer;
//! use filmfx_ops::resize::{preview_scale, resize};
//!
//! let src = PixelBuffer::filled(400, 200, [128, 128, 128, 255]).unwrap();
//! let scale = preview_scale(400, 200, 100);
//! assert_eq!(scale, 0.25);
//! let small = resize(&src, 100, 50).unwrap();
//! assert_eq!(small.dimensions(), (100, 50));
//! ```

use crate::{OpsError, OpsResult};
use filmfx_core::PixelBuffer;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Uniform scale factor that fits the longest edge into `max_size`.
///
/// Never upscales: returns 1.0 for images already within the bound.
#[inline]
pub fn preview_scale(width: u32, height: u32, max_size: u32) -> f32 {
    let longest = width.max(height);
    if longest == 0 {
        return 1.0;
    }
    (max_size as f32 / longest as f32).min(1.0)
}

/// Triangle (bilinear) filter weight.
#[inline]
fn triangle_weight(x: f32) -> f32 {
    let ax = x.abs();
    if ax < 1.0 { 1.0 - ax } else { 0.0 }
}

/// Resizes a buffer to `dst_w` x `dst_h` with a separable triangle filter.
///
/// # Errors
///
/// Zero destination dimensions are [`OpsError::InvalidDimensions`].
pub fn resize(src: &PixelBuffer, dst_w: u32, dst_h: u32) -> OpsResult<PixelBuffer> {
    if dst_w == 0 || dst_h == 0 {
        return Err(OpsError::InvalidDimensions(format!(
            "destination size must be positive, got {}x{}",
            dst_w, dst_h
        )));
    }
    let (src_w, src_h) = src.dimensions();
    trace!(src_w, src_h, dst_w, dst_h, "resize");

    if (src_w, src_h) == (dst_w, dst_h) {
        return Ok(src.clone());
    }

    // Horizontal pass into dst_w x src_h, then vertical into dst_w x dst_h.
    let temp = resample_rows(src.data(), src_w, src_h, dst_w);
    let out = resample_columns(&temp, dst_w, src_h, dst_h);
    Ok(PixelBuffer::from_data(dst_w, dst_h, out)?)
}

/// Resamples each row from `src_w` to `dst_w` samples.
fn resample_rows(src: &[u8], src_w: u32, src_h: u32, dst_w: u32) -> Vec<u8> {
    let scale = src_w as f32 / dst_w as f32;
    let support = scale.max(1.0);

    let mut dst = vec![0u8; dst_w as usize * src_h as usize * 4];
    for y in 0..src_h as usize {
        let src_row = &src[y * src_w as usize * 4..(y + 1) * src_w as usize * 4];
        let dst_row = &mut dst[y * dst_w as usize * 4..(y + 1) * dst_w as usize * 4];
        for x in 0..dst_w as usize {
            let center = (x as f32 + 0.5) * scale - 0.5;
            let left = ((center - support).floor().max(0.0)) as usize;
            let right = ((center + support).ceil() as usize).min(src_w as usize - 1);

            let mut sums = [0.0f32; 4];
            let mut weight_sum = 0.0f32;
            for sx in left..=right {
                let w = triangle_weight((sx as f32 - center) / scale.max(1.0));
                if w <= 0.0 {
                    continue;
                }
                weight_sum += w;
                for c in 0..4 {
                    sums[c] += src_row[sx * 4 + c] as f32 * w;
                }
            }
            if weight_sum > 0.0 {
                for c in 0..4 {
                    dst_row[x * 4 + c] = (sums[c] / weight_sum).round().clamp(0.0, 255.0) as u8;
                }
            }
        }
    }
    dst
}

/// Resamples each column from `src_h` to `dst_h` samples.
fn resample_columns(src: &[u8], width: u32, src_h: u32, dst_h: u32) -> Vec<u8> {
    let scale = src_h as f32 / dst_h as f32;
    let support = scale.max(1.0);
    let row_len = width as usize * 4;

    let mut dst = vec![0u8; width as usize * dst_h as usize * 4];
    for y in 0..dst_h as usize {
        let center = (y as f32 + 0.5) * scale - 0.5;
        let top = ((center - support).floor().max(0.0)) as usize;
        let bottom = ((center + support).ceil() as usize).min(src_h as usize - 1);

        for x in 0..width as usize {
            let mut sums = [0.0f32; 4];
            let mut weight_sum = 0.0f32;
            for sy in top..=bottom {
                let w = triangle_weight((sy as f32 - center) / scale.max(1.0));
                if w <= 0.0 {
                    continue;
                }
                weight_sum += w;
                for c in 0..4 {
                    sums[c] += src[sy * row_len + x * 4 + c] as f32 * w;
                }
            }
            if weight_sum > 0.0 {
                for c in 0..4 {
                    dst[y * row_len + x * 4 + c] =
                        (sums[c] / weight_sum).round().clamp(0.0, 255.0) as u8;
                }
            }
        }
    }
    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_scale() {
        assert_eq!(preview_scale(2000, 1000, 1000), 0.5);
        assert_eq!(preview_scale(1000, 2000, 1000), 0.5);
        // Never upscale
        assert_eq!(preview_scale(500, 300, 1000), 1.0);
    }

    #[test]
    fn test_identity_resize() {
        let src = PixelBuffer::filled(10, 10, [1, 2, 3, 4]).unwrap();
        let out = resize(&src, 10, 10).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn test_downscale_preserves_flat_color() {
        let src = PixelBuffer::filled(64, 64, [100, 150, 200, 255]).unwrap();
        let out = resize(&src, 16, 16).unwrap();
        assert_eq!(out.dimensions(), (16, 16));
        for (_, _, px) in out.pixels() {
            assert_eq!(px, [100, 150, 200, 255]);
        }
    }

    #[test]
    fn test_upscale_preserves_flat_color() {
        let src = PixelBuffer::filled(8, 8, [40, 40, 40, 255]).unwrap();
        let out = resize(&src, 32, 32).unwrap();
        for (_, _, px) in out.pixels() {
            assert_eq!(px, [40, 40, 40, 255]);
        }
    }

    #[test]
    fn test_downscale_averages() {
        // Left half black, right half white; downscaled center blends
        let mut src = PixelBuffer::new(16, 4).unwrap();
        for y in 0..4 {
            for x in 8..16 {
                src.set_pixel(x, y, [255, 255, 255, 255]);
            }
        }
        let out = resize(&src, 4, 1).unwrap();
        assert!(out.pixel(0, 0)[0] < 64);
        assert!(out.pixel(3, 0)[0] > 191);
    }

    #[test]
    fn test_zero_destination_rejected() {
        let src = PixelBuffer::new(10, 10).unwrap();
        assert!(resize(&src, 0, 5).is_err());
        assert!(resize(&src, 5, 0).is_err());
    }
}
