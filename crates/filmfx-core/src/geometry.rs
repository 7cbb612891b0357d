//! Normalized coordinates, drag regions, and aspect ratios.
//!
//! The host UI reports drag gestures as normalized `[0,1] x [0,1]`
//! coordinates so the same selection applies to the fast preview and the
//! full-resolution export. This module carries those records across the
//! pipeline boundary.

use crate::{Error, Result};

/// A point in normalized image coordinates, `[0, 1]` on both axes.
///
/// # Example
///
/// ```rust
/// use filmfx_core::Point;
///
/// let p = Point::new(0.5, 0.5);
/// assert_eq!(p.to_pixels(200, 100), (100.0, 50.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal position, 0.0 = left edge, 1.0 = right edge.
    pub x: f32,
    /// Vertical position, 0.0 = top edge, 1.0 = bottom edge.
    pub y: f32,
}

impl Point {
    /// Creates a normalized point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Converts to pixel coordinates in a `width` x `height` buffer.
    #[inline]
    pub fn to_pixels(&self, width: u32, height: u32) -> (f32, f32) {
        (self.x * width as f32, self.y * height as f32)
    }

    /// Euclidean distance to another point, in pixel space.
    #[inline]
    pub fn pixel_distance(&self, other: &Point, width: u32, height: u32) -> f32 {
        let (ax, ay) = self.to_pixels(width, height);
        let (bx, by) = other.to_pixels(width, height);
        ((bx - ax) * (bx - ax) + (by - ay) * (by - ay)).sqrt()
    }
}

/// The drag-selected effect region: an optional pair of normalized points.
///
/// `from` is where the drag started, `to` where it ended. The radial mask
/// is centered at `to` with radius equal to the distance between the two.
/// When either point is missing the effect applies to the whole image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Region {
    /// Drag start, if any.
    pub from: Option<Point>,
    /// Drag end, if any.
    pub to: Option<Point>,
}

impl Region {
    /// A region with no selection: the effect covers the whole image.
    #[inline]
    pub const fn full() -> Self {
        Self {
            from: None,
            to: None,
        }
    }

    /// A fully specified selection.
    #[inline]
    pub const fn between(from: Point, to: Point) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Returns the point pair if both are present.
    #[inline]
    pub fn points(&self) -> Option<(Point, Point)> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => Some((from, to)),
            _ => None,
        }
    }
}

/// Output aspect ratio as a (w, h) pair, both positive.
///
/// Equal components denote square output.
///
/// # Example
///
/// ```rust
/// use filmfx_core::AspectRatio;
///
/// let ar = AspectRatio::new(16, 9).unwrap();
/// assert!(!ar.is_square());
///
/// // Reduced ratio of an image
/// assert_eq!(AspectRatio::of(1920, 1080), AspectRatio::new(16, 9).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AspectRatio {
    /// Horizontal component.
    pub w: u32,
    /// Vertical component.
    pub h: u32,
}

impl AspectRatio {
    /// Creates an aspect ratio, rejecting zero components.
    pub fn new(w: u32, h: u32) -> Result<Self> {
        if w == 0 || h == 0 {
            return Err(Error::invalid_parameter(format!(
                "aspect ratio components must be positive, got {}:{}",
                w, h
            )));
        }
        Ok(Self { w, h })
    }

    /// The reduced aspect ratio of a `width` x `height` image.
    ///
    /// Zero dimensions fall back to 1:1 so the value is always usable.
    pub fn of(width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            return Self::square();
        }
        let g = gcd(width, height);
        Self {
            w: width / g,
            h: height / g,
        }
    }

    /// The 1:1 square ratio.
    #[inline]
    pub const fn square() -> Self {
        Self { w: 1, h: 1 }
    }

    /// Returns `true` when both components are equal.
    #[inline]
    pub const fn is_square(&self) -> bool {
        self.w == self.h
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::square()
    }
}

/// Greatest common divisor, Euclid.
fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
