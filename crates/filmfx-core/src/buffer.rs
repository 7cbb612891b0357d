//! RGBA8 pixel buffer.
//!
//! [`PixelBuffer`] is the single image container flowing through the
//! pipeline. Pixels are stored in **row-major** order, top-to-bottom, with
//! interleaved channels:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A ...]  <- Row 1
//!         ...
//! ```
//!
//! # Invariants
//!
//! - `data.len() == width * height * 4`, always
//! - Buffers are never resized in place; transforms produce a new buffer
//!
//! # Usage
//!
//! ```rust
//! use filmfx_core::PixelBuffer;
//!
//! let mut img = PixelBuffer::filled(100, 100, [255, 255, 255, 255]).unwrap();
//! img.set_pixel(10, 10, [255, 0, 0, 255]);
//! assert_eq!(img.pixel(10, 10), [255, 0, 0, 255]);
//! assert_eq!(img.data().len(), 100 * 100 * 4);
//! ```

use crate::{Error, Result};

/// Number of channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Soft allocation cap: 2 GiB of pixel data.
///
/// Requests beyond this are refused with [`Error::AllocationFailed`] instead
/// of letting `Vec` abort the process.
const MAX_BYTES: usize = 2 * 1024 * 1024 * 1024;

/// Owned RGBA8 image buffer.
///
/// Each pipeline stage owns its output `PixelBuffer` exclusively until
/// handing it to the next stage. Buffers are created fresh per render call;
/// none persist across calls.
///
/// # Example
///
/// ```rust
/// use filmfx_core::PixelBuffer;
///
/// let img = PixelBuffer::new(1920, 1080).unwrap();
/// assert_eq!(img.dimensions(), (1920, 1080));
/// assert_eq!(img.pixel(0, 0), [0, 0, 0, 0]); // transparent black
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Creates a new buffer filled with transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for zero or overflowing
    /// dimensions, [`Error::AllocationFailed`] when the request exceeds the
    /// allocation cap.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let bytes = Self::byte_len(width, height)?;
        Ok(Self {
            data: vec![0; bytes],
            width,
            height,
        })
    }

    /// Creates a buffer filled with a single RGBA pixel value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use filmfx_core::PixelBuffer;
    ///
    /// let white = PixelBuffer::filled(10, 10, [255, 255, 255, 255]).unwrap();
    /// assert_eq!(white.pixel(9, 9), [255, 255, 255, 255]);
    /// ```
    pub fn filled(width: u32, height: u32, pixel: [u8; CHANNELS]) -> Result<Self> {
        let bytes = Self::byte_len(width, height)?;
        let mut data = Vec::with_capacity(bytes);
        for _ in 0..bytes / CHANNELS {
            data.extend_from_slice(&pixel);
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a buffer from existing pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not exactly
    /// `width * height * 4`.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = Self::byte_len(width, height)?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Validated byte length for a `width` x `height` RGBA buffer.
    fn byte_len(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(
                width,
                height,
                "zero-sized image",
            ));
        }
        let bytes = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(CHANNELS))
            .ok_or_else(|| {
                Error::invalid_dimensions(width, height, "buffer size overflows usize")
            })?;
        if bytes > MAX_BYTES {
            return Err(Error::allocation_failed(bytes, "request exceeds 2 GiB cap"));
        }
        Ok(bytes)
    }

    /// Returns the buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns a reference to the raw interleaved RGBA data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns a mutable reference to the raw interleaved RGBA data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the buffer and returns the raw data.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Returns the byte offset for the pixel at (x, y).
    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; CHANNELS] {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.pixel_offset(x, y);
        let mut result = [0u8; CHANNELS];
        result.copy_from_slice(&self.data[offset..offset + CHANNELS]);
        result
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; CHANNELS]> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Returns the pixel at (x, y) with both coordinates clamped into
    /// bounds (edge replication).
    ///
    /// This is the sampling policy used by the convolution and channel-shift
    /// stages: coordinates past an edge read the nearest edge pixel instead
    /// of wrapping or reading zero.
    #[inline]
    pub fn pixel_clamped(&self, x: i64, y: i64) -> [u8; CHANNELS] {
        let cx = x.clamp(0, self.width as i64 - 1) as u32;
        let cy = y.clamp(0, self.height as i64 - 1) as u32;
        self.pixel(cx, cy)
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: [u8; CHANNELS]) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.pixel_offset(x, y);
        self.data[offset..offset + CHANNELS].copy_from_slice(&pixel);
    }

    /// Fills the entire buffer with one pixel value.
    pub fn fill(&mut self, pixel: [u8; CHANNELS]) {
        for chunk in self.data.chunks_exact_mut(CHANNELS) {
            chunk.copy_from_slice(&pixel);
        }
    }

    /// Returns a row of pixels as a byte slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize * CHANNELS;
        let end = start + self.width as usize * CHANNELS;
        &self.data[start..end]
    }

    /// Returns a mutable row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize * CHANNELS;
        let end = start + self.width as usize * CHANNELS;
        &mut self.data[start..end]
    }

    /// Iterates over all pixels with their coordinates.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, [u8; CHANNELS])> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y, self.pixel(x, y))))
    }

    /// Returns an error unless `other` has the same dimensions.
    pub fn ensure_same_size(&self, other: &PixelBuffer) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::dimension_mismatch(
                self.dimensions(),
                other.dimensions(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let img = PixelBuffer::new(100, 50).unwrap();
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.data().len(), 100 * 50 * 4);
        assert_eq!(img.pixel(99, 49), [0, 0, 0, 0]);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(PixelBuffer::new(0, 100).is_err());
        assert!(PixelBuffer::new(100, 0).is_err());
    }

    #[test]
    fn test_filled() {
        let img = PixelBuffer::filled(10, 10, [1, 2, 3, 4]).unwrap();
        assert_eq!(img.pixel(0, 0), [1, 2, 3, 4]);
        assert_eq!(img.pixel(9, 9), [1, 2, 3, 4]);
    }

    #[test]
    fn test_from_data_length_invariant() {
        let ok = PixelBuffer::from_data(4, 4, vec![0; 4 * 4 * 4]);
        assert!(ok.is_ok());

        let too_short = PixelBuffer::from_data(4, 4, vec![0; 10]);
        assert!(too_short.unwrap_err().is_dimension_error());
    }

    #[test]
    fn test_set_get_pixel() {
        let mut img = PixelBuffer::new(10, 10).unwrap();
        img.set_pixel(5, 5, [255, 128, 64, 255]);
        assert_eq!(img.pixel(5, 5), [255, 128, 64, 255]);
        assert_eq!(img.get_pixel(10, 0), None);
    }

    #[test]
    fn test_pixel_clamped_replicates_edges() {
        let mut img = PixelBuffer::new(3, 3).unwrap();
        img.set_pixel(0, 0, [10, 20, 30, 255]);
        img.set_pixel(2, 2, [40, 50, 60, 255]);

        assert_eq!(img.pixel_clamped(-5, -5), [10, 20, 30, 255]);
        assert_eq!(img.pixel_clamped(100, 100), [40, 50, 60, 255]);
        assert_eq!(img.pixel_clamped(1, 1), img.pixel(1, 1));
    }

    #[test]
    fn test_fill_and_rows() {
        let mut img = PixelBuffer::new(4, 2).unwrap();
        img.fill([9, 9, 9, 9]);
        assert_eq!(img.row(1).len(), 16);
        assert!(img.row(0).iter().all(|&b| b == 9));
    }

    #[test]
    fn test_ensure_same_size() {
        let a = PixelBuffer::new(10, 10).unwrap();
        let b = PixelBuffer::new(10, 11).unwrap();
        assert!(a.ensure_same_size(&a.clone()).is_ok());
        assert!(a.ensure_same_size(&b).is_err());
    }

    #[test]
    fn test_allocation_cap() {
        // 40000 * 40000 * 4 = 6.4e9 bytes, over the 2 GiB cap.
        let err = PixelBuffer::new(40_000, 40_000).unwrap_err();
        assert!(err.is_allocation_error());
    }
}
