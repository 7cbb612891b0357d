//! # filmfx-ops
//!
//! Per-stage image operations for the filmfx filter pipeline.
//!
//! Each module implements one stage as a pure function over
//! [`filmfx_core::PixelBuffer`]: immutable input in, fresh output buffer out.
//!
//! # Modules
//!
//! - [`kernel`] - Gaussian convolution kernel builder
//! - [`convolve`] - Tiled, edge-clamped convolution engine
//! - [`aberration`] - Chromatic-aberration channel shift
//! - [`vignette`] - Blurred border-mask generation
//! - [`mask`] - Radial region mask ("spot-protect" compositing)
//! - [`composite`] - Alpha-over compositing and frame flattening
//! - [`resize`] - Bilinear resize for preview downscaling
//! - [`output`] - Crop and aspect-ratio letterboxing
//!
//! # Example
//!
//! ```rust
//! use filmfx_core::PixelBuffer;
//! use filmfx_ops::{aberration, convolve};
//!
//! let src = PixelBuffer::filled(64, 64, [200, 100, 50, 255]).unwrap();
//! let shifted = aberration::channel_shift(&src, 2.0).unwrap();
//! let blurred = convolve::gaussian_blur(&shifted, 3).unwrap();
//! assert_eq!(blurred.dimensions(), (64, 64));
//! ```
//!
//! # Parallelism
//!
//! Convolution is the only compute-heavy stage; with the default `parallel`
//! feature its square tiles are computed on the rayon thread pool. Every
//! other stage is a cheap single pass.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;

pub mod aberration;
pub mod composite;
pub mod convolve;
pub mod kernel;
pub mod mask;
pub mod output;
pub mod resize;
pub mod vignette;

pub use error::{OpsError, OpsResult};
pub use kernel::Kernel;
