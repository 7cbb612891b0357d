//! Tiled, edge-clamped convolution engine.
//!
//! Applies a [`Kernel`] to a [`PixelBuffer`] with edge replication: samples
//! past a border read the nearest edge pixel instead of zero, which avoids
//! darkened borders. Each channel's accumulated sum - alpha included - is
//! clamped to `[0, 255]` before storing, matching the unnormalized kernel
//! contract (strong blurs saturate, they don't darken).
//!
//! # Tiling
//!
//! Convolution is embarrassingly parallel per output pixel: every tile
//! depends only on the immutable source and the fixed kernel. The output is
//! partitioned into fixed-size square tiles, each computed independently and
//! written into its disjoint destination region; the only synchronization is
//! the final join. With the `parallel` feature the tiles run on the rayon
//! thread pool.
//!
//! # Example
//!
//! ```rust
//! use filmfx_core::PixelBuffer;
//! use filmfx_ops::{convolve, Kernel};
//!
//! let src = PixelBuffer::filled(32, 32, [128, 128, 128, 255]).unwrap();
//! let out = convolve::convolve(&src, &Kernel::gaussian(2).unwrap()).unwrap();
//! assert_eq!(out.dimensions(), (32, 32));
//! ```

use crate::{Kernel, OpsResult};
use filmfx_core::{PixelBuffer, Rect};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Side length of the square tiles the output is partitioned into.
const TILE_SIZE: u32 = 128;

/// Convolves a buffer with a kernel, producing a new buffer of identical
/// dimensions.
///
/// Edge-clamped sampling, per-channel clamp to `[0, 255]`.
pub fn convolve(src: &PixelBuffer, kernel: &Kernel) -> OpsResult<PixelBuffer> {
    let (width, height) = src.dimensions();
    trace!(width, height, kernel_size = kernel.size(), "convolve");

    let tiles = tile_grid(width, height, TILE_SIZE);
    debug!(tiles = tiles.len(), "convolving tiled");

    #[cfg(feature = "parallel")]
    let computed: Vec<(Rect, Vec<u8>)> = tiles
        .par_iter()
        .map(|tile| (*tile, convolve_tile(src, kernel, tile)))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let computed: Vec<(Rect, Vec<u8>)> = tiles
        .iter()
        .map(|tile| (*tile, convolve_tile(src, kernel, tile)))
        .collect();

    let mut dst = PixelBuffer::new(width, height)?;
    for (tile, data) in &computed {
        blit_tile(&mut dst, tile, data);
    }
    Ok(dst)
}

/// Gaussian blur with the given pixel radius.
///
/// `radius == 0` is the identity transform (returns a copy); any other
/// radius builds the kernel via [`Kernel::gaussian`] and convolves.
///
/// # Example
///
/// ```rust
/// use filmfx_core::PixelBuffer;
/// use filmfx_ops::convolve::gaussian_blur;
///
/// let src = PixelBuffer::filled(16, 16, [10, 20, 30, 255]).unwrap();
/// let same = gaussian_blur(&src, 0).unwrap();
/// assert_eq!(same, src);
/// ```
pub fn gaussian_blur(src: &PixelBuffer, radius: u32) -> OpsResult<PixelBuffer> {
    if radius == 0 {
        return Ok(src.clone());
    }
    let kernel = Kernel::gaussian(radius)?;
    convolve(src, &kernel)
}

/// Partitions a `width` x `height` output into square tiles of side
/// `tile_size`, clipped at the right and bottom edges.
fn tile_grid(width: u32, height: u32, tile_size: u32) -> Vec<Rect> {
    let mut tiles = Vec::new();
    let mut y = 0;
    while y < height {
        let th = tile_size.min(height - y);
        let mut x = 0;
        while x < width {
            let tw = tile_size.min(width - x);
            tiles.push(Rect::new(x, y, tw, th));
            x += tile_size;
        }
        y += tile_size;
    }
    tiles
}

/// Computes one output tile against the full source buffer.
fn convolve_tile(src: &PixelBuffer, kernel: &Kernel, tile: &Rect) -> Vec<u8> {
    let r = kernel.radius() as i64;
    let mut out = Vec::with_capacity(tile.area() as usize * 4);

    for ty in 0..tile.height {
        let y = (tile.y + ty) as i64;
        for tx in 0..tile.width {
            let x = (tile.x + tx) as i64;
            let mut sums = [0.0f32; 4];

            for dy in -r..=r {
                for dx in -r..=r {
                    let sample = src.pixel_clamped(x + dx, y + dy);
                    let w = kernel.weight(dx, dy);
                    for c in 0..4 {
                        sums[c] += sample[c] as f32 * w;
                    }
                }
            }

            for c in 0..4 {
                out.push(sums[c].round().clamp(0.0, 255.0) as u8);
            }
        }
    }
    out
}

/// Writes a computed tile into its destination region.
fn blit_tile(dst: &mut PixelBuffer, tile: &Rect, data: &[u8]) {
    let row_bytes = tile.width as usize * 4;
    for ty in 0..tile.height {
        let src_start = ty as usize * row_bytes;
        let dst_row = dst.row_mut(tile.y + ty);
        let dst_start = tile.x as usize * 4;
        dst_row[dst_start..dst_start + row_bytes]
            .copy_from_slice(&data[src_start..src_start + row_bytes]);
    }
}
