//! Immutable parameter records for one render call.
//!
//! The host passes a single [`RenderParams`] record into [`crate::render`]
//! instead of mutating shared state; a parameter change means building a new
//! record and rendering again.
//!
//! All effect magnitudes are percentages of the working buffer width, so
//! the same record produces the same look on the downscaled preview and the
//! full-resolution export.

use crate::{PipelineError, PipelineResult};
use filmfx_core::{AspectRatio, Region};
pub use filmfx_ops::vignette::VignetteParams;

/// Chromatic aberration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AberrationParams {
    /// Horizontal offset between the red/blue sampling positions and the
    /// unshifted green channel, % of buffer width.
    pub shift: f32,
}

/// Gaussian blur parameters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BlurParams {
    /// Blur radius, % of buffer width (converted to pixels per render).
    pub radius: f32,
}

/// Output crop parameters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CropParams {
    /// Percentage of width/height trimmed symmetrically from each edge.
    /// Must stay below 50.
    pub crop: f32,
}

/// The full parameter record for one render call.
///
/// `Default` is the neutral record: every effect at zero, square aspect,
/// no region selection, scale 1.0 - rendering with it reproduces the input
/// (modulo letterboxing for non-square inputs).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    /// Channel-shift effect.
    pub aberration: AberrationParams,
    /// Gaussian blur effect.
    pub blur: BlurParams,
    /// Edge vignette effect.
    pub vignette: VignetteParams,
    /// Symmetric output crop.
    pub crop: CropParams,
    /// Output aspect ratio.
    pub aspect: AspectRatio,
    /// Drag-selected effect region.
    pub region: Region,
    /// Uniform pre-pipeline scale factor, `(0, 1]`.
    pub scale: f32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            aberration: AberrationParams::default(),
            blur: BlurParams::default(),
            vignette: VignetteParams::default(),
            crop: CropParams::default(),
            aspect: AspectRatio::square(),
            region: Region::full(),
            scale: 1.0,
        }
    }
}

impl RenderParams {
    /// Front-loaded validation of user-entered values.
    ///
    /// The individual ops re-check defensively; this catches everything in
    /// one place so the host can reject a bad record before starting a
    /// render.
    pub fn validate(&self) -> PipelineResult<()> {
        let reject = |msg: String| Err(PipelineError::InvalidParameter(msg));

        if !self.scale.is_finite() || self.scale <= 0.0 || self.scale > 1.0 {
            return reject(format!("scale must be in (0, 1], got {}", self.scale));
        }
        if !self.aberration.shift.is_finite() || self.aberration.shift < 0.0 {
            return reject(format!(
                "aberration shift must be non-negative, got {}",
                self.aberration.shift
            ));
        }
        if !self.blur.radius.is_finite() || self.blur.radius < 0.0 {
            return reject(format!(
                "blur radius must be non-negative, got {}",
                self.blur.radius
            ));
        }
        self.vignette.validate().map_err(PipelineError::Ops)?;
        if !self.crop.crop.is_finite() || self.crop.crop < 0.0 || self.crop.crop >= 50.0 {
            return reject(format!(
                "crop must be in [0, 50), got {}",
                self.crop.crop
            ));
        }
        if self.aspect.w == 0 || self.aspect.h == 0 {
            return reject(format!(
                "aspect ratio components must be positive, got {}:{}",
                self.aspect.w, self.aspect.h
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid_and_neutral() {
        let p = RenderParams::default();
        assert!(p.validate().is_ok());
        assert_eq!(p.aberration.shift, 0.0);
        assert_eq!(p.blur.radius, 0.0);
        assert_eq!(p.scale, 1.0);
        assert!(p.region.points().is_none());
    }

    #[test]
    fn test_rejects_bad_scale() {
        let mut p = RenderParams::default();
        p.scale = 0.0;
        assert!(p.validate().is_err());
        p.scale = 1.5;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_effects() {
        let mut p = RenderParams::default();
        p.aberration.shift = -0.1;
        assert!(p.validate().is_err());

        let mut p = RenderParams::default();
        p.blur.radius = f32::INFINITY;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_rejects_degenerate_crop() {
        let mut p = RenderParams::default();
        p.crop.crop = 50.0;
        assert!(p.validate().is_err());
        p.crop.crop = 49.9;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_vignette() {
        let mut p = RenderParams::default();
        p.vignette.opacity = 2.0;
        assert!(p.validate().is_err());
    }
}
