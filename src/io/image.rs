//! PNG loading, display-fit resizing, and palette raster export
//!
//! Resize happens before any quantization so the dithering engine always
//! sees a raster at exactly the display resolution. Cover-fit cropping
//! keeps the display filled regardless of the source aspect ratio.

use image::imageops::FilterType;
use image::{ImageBuffer, Rgb};
use std::path::Path;

use crate::io::configuration::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::io::error::{FrameError, Result};
use crate::render::Raster;

/// Load a photo and fit it to the display resolution
///
/// Decodes the file, scales with Lanczos3 to cover 800x480 (center-cropping
/// the overflow), and strips any alpha channel.
///
/// # Errors
///
/// Returns an error if the file cannot be decoded or the resized buffer
/// fails the raster shape contract.
pub fn load_raster(path: &Path) -> Result<Raster> {
    let source = image::open(path).map_err(|e| FrameError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let fitted = source.resize_to_fill(
        DISPLAY_WIDTH as u32,
        DISPLAY_HEIGHT as u32,
        FilterType::Lanczos3,
    );

    Raster::from_pixels(fitted.to_rgb8().into_raw(), DISPLAY_WIDTH, DISPLAY_HEIGHT)
}

/// Export a rendered raster as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The raster cannot be reassembled into an image buffer
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_raster(raster: &Raster, output_path: &str) -> Result<()> {
    let buffer: Option<ImageBuffer<Rgb<u8>, Vec<u8>>> = ImageBuffer::from_raw(
        raster.width() as u32,
        raster.height() as u32,
        raster.pixels().to_vec(),
    );
    let img = buffer.ok_or_else(|| crate::io::error::io_error("Raster buffer reassembly failed"))?;

    if let Some(parent) = Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| FrameError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| FrameError::ImageExport {
        path: output_path.into(),
        source: e,
    })?;

    Ok(())
}

/// Read image dimensions without decoding the full file
///
/// # Errors
///
/// Returns an error if the file header cannot be read.
pub fn probe_dimensions(path: &Path) -> Result<(u32, u32)> {
    image::image_dimensions(path).map_err(|e| FrameError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}
