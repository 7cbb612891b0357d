//! # filmfx-core
//!
//! Core types for the filmfx non-destructive photo filter pipeline.
//!
//! This crate provides the foundational types used by every other filmfx
//! crate:
//!
//! - [`PixelBuffer`] - Owned RGBA8 image buffer, row-major
//! - [`Rect`] - Pixel-space rectangle (tiling, insets, letterbox placement)
//! - [`Point`], [`Region`] - Normalized coordinates for the drag-selected
//!   effect region
//! - [`AspectRatio`] - Output aspect ratio pair
//! - [`Error`], [`Result`] - Unified error handling
//!
//! ## Ownership model
//!
//! Every pipeline stage consumes immutable input buffers and produces a
//! fresh, exclusively owned output buffer. No buffer is resized in place and
//! none is shared between stages, which is why [`PixelBuffer`] holds a plain
//! `Vec<u8>` rather than a reference-counted allocation.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of filmfx and has no internal dependencies:
//!
//! ```text
//! filmfx-core (this crate)
//!    ^
//!    |
//!    +-- filmfx-ops (per-stage image operations)
//!    +-- filmfx-pipeline (render orchestration)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod geometry;
pub mod rect;

pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use geometry::{AspectRatio, Point, Region};
pub use rect::Rect;
