//! Palette rendering for the six-color display
//!
//! This module contains the rendering pipeline's hard core:
//! - The fixed display palette and nearest-color quantization
//! - Raster buffers with floating-point error accumulators
//! - Floyd-Steinberg error diffusion and its non-diffusing sibling

/// Floyd-Steinberg error diffusion and plain quantization
pub mod dither;
/// Fixed display palette and nearest-color lookup
pub mod palette;
/// Pixel buffers and floating-point accumulator grids
pub mod raster;

pub use raster::Raster;
