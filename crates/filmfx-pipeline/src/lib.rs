//! # filmfx-pipeline
//!
//! Render orchestration for the filmfx non-destructive filter pipeline.
//!
//! The pipeline combines three effects over a source bitmap - chromatic
//! aberration, Gaussian blur, and edge vignetting - with the first two
//! optionally confined by a drag-selected circular region, then crops and
//! letterboxes the composite for output.
//!
//! Everything is a pure function of `(source buffer, parameter record)`:
//! the crate holds no state between calls and rebuilds every intermediate
//! buffer per render.
//!
//! # Example
//!
//! ```rust
//! use filmfx_core::PixelBuffer;
//! use filmfx_pipeline::{render, RenderParams};
//!
//! let src = PixelBuffer::filled(100, 100, [255, 255, 255, 255]).unwrap();
//! // Neutral parameters: the render is an identity transform
//! let out = render(&src, &RenderParams::default()).unwrap();
//! assert_eq!(out, src);
//! ```
//!
//! # Cancellation
//!
//! Interactive hosts re-render on every slider change; a render started for
//! stale parameters must be discarded, not raced. [`RenderSession`]
//! implements the latest-request-wins policy with monotonically increasing
//! tickets.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;

pub mod params;
pub mod render;
pub mod session;

pub use error::{PipelineError, PipelineResult};
pub use params::{AberrationParams, BlurParams, CropParams, RenderParams, VignetteParams};
pub use render::{render, render_preview, render_unfiltered, PREVIEW_MAX_SIZE};
pub use session::{RenderSession, RenderTicket};
