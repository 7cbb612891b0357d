//! Pixel-space rectangles.
//!
//! Used for tile decomposition in the convolution engine, the vignette
//! interior cutout, and letterbox placement in the output stage.
//!
//! # Coordinate System
//!
//! Standard image convention: origin (0, 0) at the top-left corner, X
//! increasing to the right, Y increasing downward.

/// A rectangle defined by origin (x, y) and dimensions (width, height).
///
/// A rectangle with zero width or height is considered empty.
///
/// # Example
///
/// ```rust
/// use filmfx_core::Rect;
///
/// let rect = Rect::new(10, 20, 100, 50);
/// assert_eq!(rect.right(), 110);
/// assert_eq!(rect.bottom(), 70);
/// assert!(rect.contains(15, 25));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate of the left edge (inclusive)
    pub x: u32,
    /// Y coordinate of the top edge (inclusive)
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle with the given origin and dimensions.
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// X coordinate one past the right edge.
    #[inline]
    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Y coordinate one past the bottom edge.
    #[inline]
    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Area in pixels.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Returns `true` if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if the point (px, py) lies inside the rectangle.
    #[inline]
    pub const fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Intersection with another rectangle, or `None` if disjoint.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Shrinks the rectangle by `margin` pixels on every side.
    ///
    /// Collapses to an empty rectangle when the margin eats the whole area,
    /// which the vignette generator uses for "border covers everything".
    pub fn inset(&self, margin: u32) -> Rect {
        if 2 * margin >= self.width || 2 * margin >= self.height {
            return Rect::new(self.x + self.width / 2, self.y + self.height / 2, 0, 0);
        }
        Rect::new(
            self.x + margin,
            self.y + margin,
            self.width - 2 * margin,
            self.height - 2 * margin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let r = Rect::new(10, 20, 100, 50);
        assert_eq!(r.right(), 110);
        assert_eq!(r.bottom(), 70);
        assert_eq!(r.area(), 5000);
        assert!(!r.is_empty());
    }

    #[test]
    fn test_contains() {
        let r = Rect::new(10, 10, 5, 5);
        assert!(r.contains(10, 10));
        assert!(r.contains(14, 14));
        assert!(!r.contains(15, 10));
        assert!(!r.contains(9, 10));
    }

    #[test]
    fn test_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersect(&b), Some(Rect::new(5, 5, 5, 5)));

        let c = Rect::new(20, 20, 5, 5);
        assert_eq!(a.intersect(&c), None);
    }

    #[test]
    fn test_inset() {
        let r = Rect::from_size(100, 60);
        assert_eq!(r.inset(10), Rect::new(10, 10, 80, 40));
        // Margin consumes the whole rect
        assert!(r.inset(30).is_empty());
        assert!(r.inset(50).is_empty());
    }
}
