//! Floyd-Steinberg error diffusion onto the display palette
//!
//! Pixels are resolved in row-major order. Each quantization error lands
//! only on not-yet-visited neighbors (right, lower-left, lower,
//! lower-right); writing into already-resolved pixels would silently
//! discard error, so the traversal order is load-bearing and must not be
//! parallelized within one raster.

use crate::io::error::Result;
use crate::render::palette;
use crate::render::raster::{Accumulator, Raster};

/// Floyd-Steinberg kernel weights over the shared denominator
const KERNEL_DENOMINATOR: f64 = 16.0;
const RIGHT_WEIGHT: f64 = 7.0;
const LOWER_LEFT_WEIGHT: f64 = 3.0;
const LOWER_WEIGHT: f64 = 5.0;
const LOWER_RIGHT_WEIGHT: f64 = 1.0;

/// Quantize a raster to the display palette with error diffusion
///
/// # Errors
///
/// Returns [`crate::FrameError::RasterShape`] when `pixels` does not hold
/// exactly `width * height` interleaved RGB triples.
pub fn dither(pixels: &[u8], width: usize, height: usize) -> Result<Raster> {
    let source = Raster::from_pixels(pixels.to_vec(), width, height)?;
    let mut accumulator: Accumulator<f64> = Accumulator::from_raster(&source);

    for y in 0..height {
        for x in 0..width {
            let sample = accumulator.sample(x, y);
            let quantized = palette::nearest(clamp_channels(sample));
            let resolved = [
                f64::from(quantized[0]),
                f64::from(quantized[1]),
                f64::from(quantized[2]),
            ];
            let error = [
                sample[0] - resolved[0],
                sample[1] - resolved[1],
                sample[2] - resolved[2],
            ];

            accumulator.store(x, y, resolved);

            let (xi, yi) = (x as i64, y as i64);
            accumulator.diffuse(xi + 1, yi, error, RIGHT_WEIGHT / KERNEL_DENOMINATOR);
            accumulator.diffuse(xi - 1, yi + 1, error, LOWER_LEFT_WEIGHT / KERNEL_DENOMINATOR);
            accumulator.diffuse(xi, yi + 1, error, LOWER_WEIGHT / KERNEL_DENOMINATOR);
            accumulator.diffuse(xi + 1, yi + 1, error, LOWER_RIGHT_WEIGHT / KERNEL_DENOMINATOR);
        }
    }

    accumulator.into_raster()
}

/// Quantize a raster to the display palette without diffusing error
///
/// The raw mode for callers that disabled dithering; every pixel maps
/// independently to its nearest palette entry.
///
/// # Errors
///
/// Returns [`crate::FrameError::RasterShape`] when `pixels` does not hold
/// exactly `width * height` interleaved RGB triples.
pub fn quantize_only(pixels: &[u8], width: usize, height: usize) -> Result<Raster> {
    let source = Raster::from_pixels(pixels.to_vec(), width, height)?;

    let mut output = Vec::with_capacity(source.pixels().len());
    for triple in source.pixels().chunks_exact(3) {
        let sample = [
            f64::from(triple.first().copied().unwrap_or(0)),
            f64::from(triple.get(1).copied().unwrap_or(0)),
            f64::from(triple.get(2).copied().unwrap_or(0)),
        ];
        output.extend_from_slice(&palette::nearest(sample));
    }

    Raster::from_pixels(output, width, height)
}

/// Clamp accumulator channels to the quantizer's [0, 255] input contract
///
/// Only the quantizer input is clamped; the accumulator itself keeps
/// out-of-range values so diffused error is not lost.
fn clamp_channels(sample: [f64; 3]) -> [f64; 3] {
    [
        sample[0].clamp(0.0, 255.0),
        sample[1].clamp(0.0, 255.0),
        sample[2].clamp(0.0, 255.0),
    ]
}
