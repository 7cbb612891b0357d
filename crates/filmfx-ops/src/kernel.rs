//! Gaussian convolution kernel builder.
//!
//! The blur stage uses a full 2D Gaussian kernel with `sigma = radius / 3`.
//! Weights are deliberately **unnormalized**: the convolution engine clamps
//! each channel sum to 255 instead, so strong blurs saturate toward the
//! image content rather than darkening it.
//!
//! # Example
//!
//! ```rust
//! use filmfx_ops::Kernel;
//!
//! let k = Kernel::gaussian(3).unwrap();
//! assert_eq!(k.size(), 7); // 2 * radius + 1
//! ```

use crate::{OpsError, OpsResult};

/// Square convolution kernel.
///
/// Read-only once built; side length is always odd (`2 * radius + 1`).
#[derive(Debug, Clone)]
pub struct Kernel {
    data: Vec<f32>,
    size: usize,
}

impl Kernel {
    /// Creates a kernel from raw weights.
    ///
    /// `size` is the side length and must be odd; `data` must hold exactly
    /// `size * size` weights.
    pub fn new(data: Vec<f32>, size: usize) -> OpsResult<Self> {
        if size % 2 == 0 {
            return Err(OpsError::InvalidParameter(
                "kernel side length must be odd".into(),
            ));
        }
        if data.len() != size * size {
            return Err(OpsError::InvalidParameter(format!(
                "kernel data size {} doesn't match {}x{}",
                data.len(),
                size,
                size
            )));
        }
        Ok(Self { data, size })
    }

    /// Builds the unnormalized Gaussian kernel for a pixel radius.
    ///
    /// `sigma = radius / 3`; weight at offset (dx, dy) is
    /// `(1 / (2*pi*sigma^2)) * exp(-(dx^2 + dy^2) / (2*sigma^2))`.
    ///
    /// # Errors
    ///
    /// `radius == 0` is rejected (`sigma` would be zero). Callers skip the
    /// blur stage entirely when the radius rounds to zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use filmfx_ops::Kernel;
    ///
    /// let k = Kernel::gaussian(5).unwrap();
    /// assert_eq!(k.radius(), 5);
    /// // Center weight dominates
    /// assert!(k.weight(0, 0) > k.weight(5, 5));
    /// ```
    pub fn gaussian(radius: u32) -> OpsResult<Self> {
        if radius == 0 {
            return Err(OpsError::InvalidParameter(
                "blur radius must be positive; skip the blur stage at radius 0".into(),
            ));
        }
        let r = radius as i64;
        let size = (2 * r + 1) as usize;
        let sigma = radius as f32 / 3.0;
        let sigma2 = 2.0 * sigma * sigma;
        let coefficient = 1.0 / (std::f32::consts::PI * sigma2);

        let mut data = Vec::with_capacity(size * size);
        for dy in -r..=r {
            for dx in -r..=r {
                let d = (dx * dx + dy * dy) as f32;
                data.push(coefficient * (-d / sigma2).exp());
            }
        }
        Ok(Self { data, size })
    }

    /// Kernel side length (odd).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Kernel radius (half the side length).
    #[inline]
    pub fn radius(&self) -> u32 {
        (self.size / 2) as u32
    }

    /// Sum of all weights.
    #[inline]
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Weight at signed offset (dx, dy) from the center.
    ///
    /// # Panics
    ///
    /// Panics if the offset lies outside the kernel footprint.
    #[inline]
    pub fn weight(&self, dx: i64, dy: i64) -> f32 {
        let r = (self.size / 2) as i64;
        debug_assert!(dx.abs() <= r && dy.abs() <= r, "offset outside kernel");
        self.data[((dy + r) * self.size as i64 + (dx + r)) as usize]
    }

    /// Raw row-major weights.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gaussian_shape() {
        let k = Kernel::gaussian(3).unwrap();
        assert_eq!(k.size(), 7);
        assert_eq!(k.radius(), 3);
        assert_eq!(k.data().len(), 49);

        // Center is the max, symmetric in all four quadrants
        let center = k.weight(0, 0);
        assert!(center > k.weight(3, 0));
        assert_relative_eq!(k.weight(1, 2), k.weight(-1, -2));
        assert_relative_eq!(k.weight(2, 0), k.weight(0, 2));
    }

    #[test]
    fn test_gaussian_nearly_unit_mass() {
        // Unnormalized, but truncation at 3*sigma keeps the sum close to 1
        let k = Kernel::gaussian(6).unwrap();
        let sum = k.sum();
        assert!(sum > 0.9 && sum < 1.0, "sum = {}", sum);
    }

    #[test]
    fn test_gaussian_zero_radius_rejected() {
        assert!(Kernel::gaussian(0).is_err());
    }

    #[test]
    fn test_new_validation() {
        assert!(Kernel::new(vec![1.0; 9], 3).is_ok());
        assert!(Kernel::new(vec![1.0; 16], 4).is_err()); // even side
        assert!(Kernel::new(vec![1.0; 8], 3).is_err()); // wrong length
    }
}
