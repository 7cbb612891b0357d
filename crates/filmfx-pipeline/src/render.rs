//! The pipeline-execution function.
//!
//! One render is a fixed sequence of pure buffer transforms:
//!
//! ```text
//! source -- scale --> base --+-- channel shift -- gaussian blur --> filtered
//!                            |                                        |
//!                            |                   region mask <--------+
//!                            |                        |
//!                            +----- flatten (base, masked, vignette)
//!                                        |
//!                                  crop + letterbox --> output
//! ```
//!
//! The vignette layer depends only on the working geometry. No intermediate
//! buffer survives the call; every parameter change recomputes everything.

use crate::params::RenderParams;
use crate::PipelineResult;
use filmfx_core::PixelBuffer;
use filmfx_ops::{aberration, composite, convolve, mask, output, resize, vignette};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Longest preview edge, in pixels.
///
/// Interactive hosts render against a copy downscaled to this bound and only
/// run the full-resolution pipeline on export.
pub const PREVIEW_MAX_SIZE: u32 = 1000;

/// Runs the full filter pipeline over a source buffer.
///
/// Pure function of `(src, params)`: validates the record, scales the input,
/// builds the filtered and vignette layers, applies the region mask,
/// flattens, and crops/letterboxes for output.
///
/// # Example
///
/// ```rust
/// use filmfx_core::PixelBuffer;
/// use filmfx_pipeline::{render, RenderParams};
///
/// let src = PixelBuffer::filled(64, 64, [180, 120, 60, 255]).unwrap();
/// let mut params = RenderParams::default();
/// params.aberration.shift = 1.0;
/// params.blur.radius = 1.5;
/// let out = render(&src, &params).unwrap();
/// assert_eq!(out.dimensions(), (64, 64));
/// ```
pub fn render(src: &PixelBuffer, params: &RenderParams) -> PipelineResult<PixelBuffer> {
    params.validate()?;

    let base = scale_input(src, params.scale)?;
    let (width, height) = base.dimensions();
    debug!(width, height, "render start");

    let shifted = aberration::channel_shift(&base, params.aberration.shift)?;
    let blur_px = (width as f32 * params.blur.radius / 100.0).round() as u32;
    let filtered = convolve::gaussian_blur(&shifted, blur_px)?;

    let vignette_layer = vignette::vignette(width, height, &params.vignette)?;
    let masked = mask::apply_region(&filtered, &params.region)?;
    let frame = composite::flatten(&base, &masked, &vignette_layer)?;

    let out = output::crop_letterbox(&frame, params.crop.crop, params.aspect)?;
    debug!(
        out_width = out.width(),
        out_height = out.height(),
        "render done"
    );
    Ok(out)
}

/// Renders a fast preview: same record, scale replaced by the
/// [`PREVIEW_MAX_SIZE`] fit factor.
pub fn render_preview(src: &PixelBuffer, params: &RenderParams) -> PipelineResult<PixelBuffer> {
    let mut preview = *params;
    preview.scale = resize::preview_scale(src.width(), src.height(), PREVIEW_MAX_SIZE);
    render(src, &preview)
}

/// Renders with every effect suppressed: scale, crop and letterbox only.
///
/// Used for the first paint after loading an image, before the user has
/// touched any control.
pub fn render_unfiltered(src: &PixelBuffer, params: &RenderParams) -> PipelineResult<PixelBuffer> {
    params.validate()?;
    let base = scale_input(src, params.scale)?;
    Ok(output::crop_letterbox(&base, params.crop.crop, params.aspect)?)
}

/// Applies the uniform pre-pipeline scale factor.
fn scale_input(src: &PixelBuffer, scale: f32) -> PipelineResult<PixelBuffer> {
    if scale == 1.0 {
        return Ok(src.clone());
    }
    let w = ((src.width() as f32 * scale).round() as u32).max(1);
    let h = ((src.height() as f32 * scale).round() as u32).max(1);
    trace!(w, h, scale, "scaling input");
    Ok(resize::resize(src, w, h)?)
}
