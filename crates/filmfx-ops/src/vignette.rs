//! Vignette border-mask generation.
//!
//! Builds a standalone compositing layer: a dark frame around the image
//! edge, transparent in the middle, softened by a Gaussian blur. The layer
//! is parameterized by geometry only - it never reads the source image - and
//! is composited on top in the frame flattening stage.
//!
//! # Example
//!
//! ```rust
//! use filmfx_ops::vignette::{vignette, VignetteParams};
//!
//! let params = VignetteParams { width: 5.0, opacity: 0.8, blur: 2.0 };
//! let layer = vignette(200, 100, &params).unwrap();
//! assert_eq!(layer.dimensions(), (200, 100));
//! ```

use crate::convolve::gaussian_blur;
use crate::{OpsError, OpsResult};
use filmfx_core::{PixelBuffer, Rect};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Vignette parameters; `width` and `blur` are percentages of the buffer
/// width, `opacity` is the border alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VignetteParams {
    /// Border thickness, % of buffer width.
    pub width: f32,
    /// Border alpha, 0.0 = invisible, 1.0 = solid black.
    pub opacity: f32,
    /// Blur applied to the border mask, % of buffer width.
    pub blur: f32,
}

impl VignetteParams {
    /// Validates all fields.
    pub fn validate(&self) -> OpsResult<()> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(OpsError::InvalidParameter(format!(
                "vignette width must be non-negative, got {}",
                self.width
            )));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(OpsError::InvalidParameter(format!(
                "vignette opacity must be in [0, 1], got {}",
                self.opacity
            )));
        }
        if !self.blur.is_finite() || self.blur < 0.0 {
            return Err(OpsError::InvalidParameter(format!(
                "vignette blur must be non-negative, got {}",
                self.blur
            )));
        }
        Ok(())
    }
}

/// Generates the blurred border-mask layer for a `width` x `height` frame.
///
/// Fills the buffer with black at the configured opacity, clears the
/// interior rectangle inset by `width * params.width / 100` pixels on all
/// four sides, then blurs with radius `width * params.blur / 100`.
///
/// A zero border width produces a fully transparent layer regardless of
/// opacity and blur.
pub fn vignette(width: u32, height: u32, params: &VignetteParams) -> OpsResult<PixelBuffer> {
    params.validate()?;

    let border = (width as f32 * params.width / 100.0).round() as u32;
    let blur_radius = (width as f32 * params.blur / 100.0).round() as u32;
    trace!(width, height, border, blur_radius, "vignette");

    let alpha = (params.opacity * 255.0).round() as u8;
    let mut layer = PixelBuffer::filled(width, height, [0, 0, 0, alpha])?;

    // Transparent interior; collapses to nothing when the border swallows
    // the whole frame.
    let interior = Rect::from_size(width, height).inset(border);
    for y in interior.y..interior.bottom() {
        for x in interior.x..interior.right() {
            layer.set_pixel(x, y, [0, 0, 0, 0]);
        }
    }

    gaussian_blur(&layer, blur_radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_width_is_fully_transparent() {
        let params = VignetteParams {
            width: 0.0,
            opacity: 0.9,
            blur: 3.0,
        };
        let layer = vignette(50, 50, &params).unwrap();
        for (_, _, px) in layer.pixels() {
            assert_eq!(px[3], 0);
        }
    }

    #[test]
    fn test_border_dark_interior_clear() {
        let params = VignetteParams {
            width: 10.0, // 10% of 100 = 10px border
            opacity: 1.0,
            blur: 0.0,
        };
        let layer = vignette(100, 100, &params).unwrap();
        // Corner is solid
        assert_eq!(layer.pixel(0, 0), [0, 0, 0, 255]);
        assert_eq!(layer.pixel(5, 50), [0, 0, 0, 255]);
        // Center is transparent
        assert_eq!(layer.pixel(50, 50)[3], 0);
    }

    #[test]
    fn test_blur_softens_border_edge() {
        let sharp = VignetteParams {
            width: 10.0,
            opacity: 1.0,
            blur: 0.0,
        };
        let soft = VignetteParams {
            blur: 3.0,
            ..sharp
        };
        let layer = vignette(100, 100, &soft).unwrap();
        let hard = vignette(100, 100, &sharp).unwrap();

        // Just inside the interior edge, the soft layer has bled some alpha
        assert_eq!(hard.pixel(12, 50)[3], 0);
        assert!(layer.pixel(12, 50)[3] > 0);
        // Deep interior still transparent
        assert_eq!(layer.pixel(50, 50)[3], 0);
    }

    #[test]
    fn test_opacity_scales_alpha() {
        let params = VignetteParams {
            width: 10.0,
            opacity: 0.5,
            blur: 0.0,
        };
        let layer = vignette(100, 100, &params).unwrap();
        assert_eq!(layer.pixel(0, 0)[3], 128);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let bad_opacity = VignetteParams {
            width: 1.0,
            opacity: 1.5,
            blur: 0.0,
        };
        assert!(vignette(10, 10, &bad_opacity).is_err());

        let bad_width = VignetteParams {
            width: -1.0,
            opacity: 0.5,
            blur: 0.0,
        };
        assert!(vignette(10, 10, &bad_width).is_err());
    }

    #[test]
    fn test_border_swallows_frame() {
        // 60% border on each side leaves no interior; whole layer is dark
        let params = VignetteParams {
            width: 60.0,
            opacity: 1.0,
            blur: 0.0,
        };
        let layer = vignette(20, 20, &params).unwrap();
        for (_, _, px) in layer.pixels() {
            assert_eq!(px[3], 255);
        }
    }
}
