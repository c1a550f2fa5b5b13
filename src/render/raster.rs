//! Pixel buffers and floating-point accumulator grids
//!
//! The display raster is a flat row-major RGB byte buffer. Dithering works
//! on a separate floating-point accumulator grid so diffused error survives
//! intermediate arithmetic without repeated rounding; accumulator channels
//! may transiently leave [0, 255] and are clamped only when a pixel is
//! quantized or the grid is converted back to bytes.

use ndarray::Array3;
use num_traits::{Float, NumAssign};

use crate::io::error::{FrameError, Result};

/// Number of channels per pixel
pub const CHANNELS: usize = 3;

/// Flat row-major RGB8 pixel buffer with explicit dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
}

impl Raster {
    /// Wrap an interleaved RGB buffer, checking the dimension contract
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::RasterShape`] when the buffer length disagrees
    /// with `width * height * 3` or either dimension is zero. Mismatches
    /// indicate a caller defect and are never silently truncated.
    pub fn from_pixels(pixels: Vec<u8>, width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 || pixels.len() != width * height * CHANNELS {
            return Err(FrameError::RasterShape {
                width,
                height,
                buffer_len: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Interleaved RGB bytes, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the raster, yielding the raw byte buffer
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// RGB triple at a coordinate, if in bounds
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y * self.width + x) * CHANNELS;
        let r = self.pixels.get(offset).copied()?;
        let g = self.pixels.get(offset + 1).copied()?;
        let b = self.pixels.get(offset + 2).copied()?;
        Some([r, g, b])
    }
}

/// Floating-point per-channel accumulator grid for one dithering pass
///
/// Allocated per call and discarded with it; no pooling. Generic over the
/// float width so constrained targets can trade precision for memory.
#[derive(Debug, Clone)]
pub struct Accumulator<F> {
    samples: Array3<F>,
    width: usize,
    height: usize,
}

impl<F: Float + NumAssign> Accumulator<F> {
    /// Initialize the grid from a raster's byte samples
    pub fn from_raster(raster: &Raster) -> Self {
        let (width, height) = (raster.width(), raster.height());
        let mut samples = Array3::zeros((height, width, CHANNELS));
        for ((y, x, channel), slot) in samples.indexed_iter_mut() {
            let byte = raster
                .pixels()
                .get((y * width + x) * CHANNELS + channel)
                .copied()
                .unwrap_or(0);
            *slot = F::from(byte).unwrap_or_else(F::zero);
        }
        Self {
            samples,
            width,
            height,
        }
    }

    /// Current accumulator triple at a coordinate
    pub fn sample(&self, x: usize, y: usize) -> [F; 3] {
        let mut value = [F::zero(); 3];
        for (channel, slot) in value.iter_mut().enumerate() {
            *slot = self
                .samples
                .get((y, x, channel))
                .copied()
                .unwrap_or_else(F::zero);
        }
        value
    }

    /// Overwrite the triple at a coordinate with a resolved value
    pub fn store(&mut self, x: usize, y: usize, value: [F; 3]) {
        for (channel, &component) in value.iter().enumerate() {
            if let Some(slot) = self.samples.get_mut((y, x, channel)) {
                *slot = component;
            }
        }
    }

    /// Add a scaled error triple to a neighbor, skipping out-of-bounds targets
    ///
    /// Signed coordinates let diffusion kernels address the lower-left
    /// neighbor of column zero without underflow; such writes are dropped
    /// with no renormalization of the remaining kernel weights.
    pub fn diffuse(&mut self, x: i64, y: i64, error: [F; 3], factor: F) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        for (channel, &component) in error.iter().enumerate() {
            if let Some(slot) = self.samples.get_mut((y as usize, x as usize, channel)) {
                *slot += component * factor;
            }
        }
    }

    /// Convert back to a byte raster, clamping with round-to-nearest
    pub fn into_raster(self) -> Result<Raster> {
        let top = F::from(255).unwrap_or_else(F::one);
        let mut pixels = Vec::with_capacity(self.width * self.height * CHANNELS);
        for &sample in self.samples.iter() {
            let clamped = sample.max(F::zero()).min(top);
            pixels.push(clamped.round().to_u8().unwrap_or(0));
        }
        Raster::from_pixels(pixels, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_is_rejected() {
        let result = Raster::from_pixels(vec![0; 10], 2, 2);
        assert!(matches!(result, Err(FrameError::RasterShape { .. })));
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        assert!(Raster::from_pixels(Vec::new(), 0, 4).is_err());
        assert!(Raster::from_pixels(Vec::new(), 4, 0).is_err());
    }

    #[test]
    fn test_accumulator_round_trip_preserves_bytes() {
        let raster = Raster::from_pixels(vec![0, 128, 255, 7, 19, 200], 2, 1)
            .unwrap_or_else(|_| unreachable!());
        let accumulator: Accumulator<f64> = Accumulator::from_raster(&raster);
        let restored = accumulator
            .into_raster()
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(restored, raster);
    }

    #[test]
    fn test_diffuse_skips_out_of_bounds() {
        let raster =
            Raster::from_pixels(vec![10; 12], 2, 2).unwrap_or_else(|_| unreachable!());
        let mut accumulator: Accumulator<f64> = Accumulator::from_raster(&raster);

        accumulator.diffuse(-1, 0, [100.0; 3], 0.5);
        accumulator.diffuse(0, 2, [100.0; 3], 0.5);
        accumulator.diffuse(1, 1, [16.0, 32.0, 64.0], 0.25);

        assert_eq!(accumulator.sample(0, 0), [10.0; 3]);
        assert_eq!(accumulator.sample(1, 1), [14.0, 18.0, 26.0]);
    }
}
