//! End-to-end pipeline scenarios.

use filmfx_core::{AspectRatio, PixelBuffer, Point, Region};
use filmfx_pipeline::{render, PipelineError, RenderParams, VignetteParams};

fn opaque_white(w: u32, h: u32) -> PixelBuffer {
    PixelBuffer::filled(w, h, [255, 255, 255, 255]).unwrap()
}

#[test]
fn neutral_round_trip_is_identity() {
    // 100x100 opaque white, every effect at zero, square aspect, no region:
    // the output is the input, byte for byte.
    let src = opaque_white(100, 100);
    let out = render(&src, &RenderParams::default()).unwrap();
    assert_eq!(out, src);
}

#[test]
fn wide_image_is_letterboxed_to_square() {
    // 200x100 into a square canvas: 200x200 with 50px black bands.
    let src = opaque_white(200, 100);
    let out = render(&src, &RenderParams::default()).unwrap();
    assert_eq!(out.dimensions(), (200, 200));

    for x in 0..200 {
        assert_eq!(out.pixel(x, 0), [0, 0, 0, 255]);
        assert_eq!(out.pixel(x, 49), [0, 0, 0, 255]);
        assert_eq!(out.pixel(x, 50), [255, 255, 255, 255]);
        assert_eq!(out.pixel(x, 149), [255, 255, 255, 255]);
        assert_eq!(out.pixel(x, 150), [0, 0, 0, 255]);
        assert_eq!(out.pixel(x, 199), [0, 0, 0, 255]);
    }
}

#[test]
fn crop_50_is_a_validation_error() {
    let src = opaque_white(100, 100);
    let mut params = RenderParams::default();
    params.crop.crop = 50.0;
    let err = render(&src, &params).unwrap_err();
    assert!(matches!(err, PipelineError::InvalidParameter(_)));
}

#[test]
fn full_effect_stack_produces_valid_buffer() {
    let src = PixelBuffer::filled(120, 80, [180, 140, 90, 255]).unwrap();
    let mut params = RenderParams::default();
    params.aberration.shift = 1.0;
    params.blur.radius = 2.0;
    params.vignette = VignetteParams {
        width: 4.0,
        opacity: 0.8,
        blur: 2.0,
    };
    params.crop.crop = 5.0;
    params.aspect = AspectRatio::new(3, 2).unwrap();
    params.region = Region::between(Point::new(0.4, 0.5), Point::new(0.6, 0.5));

    let out = render(&src, &params).unwrap();
    let (w, h) = out.dimensions();
    assert!(w > 0 && h > 0);
    assert_eq!(out.data().len(), (w * h * 4) as usize);
    // Vignette darkens the corner relative to the protected center area
    assert!(out.pixel(0, 0)[0] < out.pixel(w / 2, h / 2)[0]);
}

#[test]
fn vignette_darkens_borders_only() {
    let src = opaque_white(100, 100);
    let mut params = RenderParams::default();
    params.vignette = VignetteParams {
        width: 5.0,
        opacity: 1.0,
        blur: 0.0,
    };
    let out = render(&src, &params).unwrap();
    assert_eq!(out.pixel(0, 0), [0, 0, 0, 255]);
    assert_eq!(out.pixel(50, 50), [255, 255, 255, 255]);
}

#[test]
fn region_mask_reverts_filtered_disc() {
    // Strong aberration over a split-color source; the protected disc keeps
    // the base pixels while the outside shows shifted channels.
    let mut src = PixelBuffer::filled(100, 100, [255, 0, 0, 255]).unwrap();
    for y in 0..100 {
        for x in 50..100 {
            src.set_pixel(x, y, [0, 0, 255, 255]);
        }
    }
    let mut params = RenderParams::default();
    params.aberration.shift = 20.0; // 20px shift
    params.region = Region::between(Point::new(0.25, 0.5), Point::new(0.5, 0.5));

    let out = render(&src, &params).unwrap();

    // Disc center (50, 50): filtered layer removed, base shows through
    assert_eq!(out.pixel(50, 50), src.pixel(50, 50));
    // Far from the disc the shift is visible: at x=75 red comes from x=55
    // (blue region, red channel 0) so the red channel dropped
    assert_eq!(out.pixel(90, 50)[0], 0);
}

#[test]
fn repeated_renders_are_deterministic() {
    let src = PixelBuffer::filled(64, 64, [120, 60, 30, 255]).unwrap();
    let mut params = RenderParams::default();
    params.blur.radius = 3.0;
    params.aberration.shift = 2.0;

    let a = render(&src, &params).unwrap();
    let b = render(&src, &params).unwrap();
    assert_eq!(a, b);
}
