//! Output stage: symmetric crop and aspect-ratio letterboxing.
//!
//! Trims `crop` percent of the width/height from every edge, then centers
//! the cropped content on an opaque black canvas sized to the requested
//! aspect ratio. When the target canvas is narrower than the content on one
//! axis the content is clipped further, matching centered-draw semantics.
//!
//! # Example
//!
//! ```rust
//! use filmfx_core::{AspectRatio, PixelBuffer};
//! use filmfx_ops::output::crop_letterbox;
//!
//! let src = PixelBuffer::filled(200, 100, [255, 255, 255, 255]).unwrap();
//! let out = crop_letterbox(&src, 0.0, AspectRatio::square()).unwrap();
//! assert_eq!(out.dimensions(), (200, 200));
//! // Black band above, content in the middle
//! assert_eq!(out.pixel(100, 10), [0, 0, 0, 255]);
//! assert_eq!(out.pixel(100, 100), [255, 255, 255, 255]);
//! ```

use crate::{OpsError, OpsResult};
use filmfx_core::{AspectRatio, PixelBuffer};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Crops `crop` percent from each edge and letterboxes to `aspect`.
///
/// # Errors
///
/// - [`OpsError::InvalidParameter`] for negative/non-finite `crop`, or when
///   `crop >= 50` would leave a zero-or-negative cropped region.
pub fn crop_letterbox(
    src: &PixelBuffer,
    crop: f32,
    aspect: AspectRatio,
) -> OpsResult<PixelBuffer> {
    if !crop.is_finite() || crop < 0.0 {
        return Err(OpsError::InvalidParameter(format!(
            "crop percentage must be non-negative, got {}",
            crop
        )));
    }

    let (width, height) = src.dimensions();
    let crop_w = (width as f32 * crop / 100.0).round() as u32;
    let crop_h = (height as f32 * crop / 100.0).round() as u32;
    if 2 * crop_w >= width || 2 * crop_h >= height {
        return Err(OpsError::InvalidParameter(format!(
            "crop of {}% leaves no content in a {}x{} image",
            crop, width, height
        )));
    }
    let cropped_w = width - 2 * crop_w;
    let cropped_h = height - 2 * crop_h;

    let (target_w, target_h) = target_size(cropped_w, cropped_h, aspect);
    trace!(
        cropped_w,
        cropped_h,
        target_w,
        target_h,
        "crop_letterbox"
    );

    let mut canvas = PixelBuffer::filled(target_w, target_h, [0, 0, 0, 255])?;

    // Centered placement; negative offsets clip the content instead of the
    // canvas (the target can be narrower than the content on one axis).
    let off_x = (target_w as i64 - cropped_w as i64) / 2;
    let off_y = (target_h as i64 - cropped_h as i64) / 2;
    for cy in 0..cropped_h {
        let dst_y = off_y + cy as i64;
        if dst_y < 0 || dst_y >= target_h as i64 {
            continue;
        }
        for cx in 0..cropped_w {
            let dst_x = off_x + cx as i64;
            if dst_x < 0 || dst_x >= target_w as i64 {
                continue;
            }
            let px = src.pixel(crop_w + cx, crop_h + cy);
            canvas.set_pixel(dst_x as u32, dst_y as u32, px);
        }
    }
    Ok(canvas)
}

/// Target canvas size for the cropped content under the requested aspect.
fn target_size(cropped_w: u32, cropped_h: u32, aspect: AspectRatio) -> (u32, u32) {
    use std::cmp::Ordering;
    match aspect.w.cmp(&aspect.h) {
        Ordering::Greater => {
            let h = cropped_h;
            let w = (h as f32 * aspect.w as f32 / aspect.h as f32).round() as u32;
            (w.max(1), h)
        }
        Ordering::Less => {
            let w = cropped_w;
            let h = (w as f32 * aspect.h as f32 / aspect.w as f32).round() as u32;
            (w, h.max(1))
        }
        Ordering::Equal => {
            let side = cropped_w.max(cropped_h);
            (side, side)
        }
    }
}
