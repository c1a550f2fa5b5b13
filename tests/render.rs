//! Validates palette closure, fixed points, and raster contracts

use inkframe::FrameError;
use inkframe::render::dither::{dither, quantize_only};
use inkframe::render::palette::{PALETTE, is_palette_color, nearest, nearest_index};

fn gradient(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            pixels.push((x * 255 / width.max(1)) as u8);
            pixels.push((y * 255 / height.max(1)) as u8);
            pixels.push(((x + y) * 127 / (width + height)) as u8);
        }
    }
    pixels
}

fn assert_palette_only(pixels: &[u8]) {
    for triple in pixels.chunks_exact(3) {
        let color = [triple[0], triple[1], triple[2]];
        assert!(is_palette_color(color), "non-palette pixel {color:?}");
    }
}

#[test]
fn test_palette_entries_quantize_to_themselves() {
    for entry in PALETTE {
        let sample = [
            f64::from(entry[0]),
            f64::from(entry[1]),
            f64::from(entry[2]),
        ];
        assert_eq!(nearest(sample), entry);
    }
}

#[test]
fn test_nearest_is_deterministic_on_ties() {
    // Mid-gray is equidistant from every palette entry; black is canonical
    for _ in 0..10 {
        assert_eq!(nearest_index([127.5, 127.5, 127.5]), 0);
    }
}

#[test]
fn test_dither_output_is_closed_over_the_palette() {
    let pixels = gradient(64, 40);
    let result = dither(&pixels, 64, 40).unwrap();
    assert_palette_only(result.pixels());
}

#[test]
fn test_quantize_only_output_is_closed_over_the_palette() {
    let pixels = gradient(64, 40);
    let result = quantize_only(&pixels, 64, 40).unwrap();
    assert_palette_only(result.pixels());
}

#[test]
fn test_uniform_palette_raster_survives_dithering_unchanged() {
    for entry in PALETTE {
        let pixels: Vec<u8> = entry.iter().copied().cycle().take(20 * 12 * 3).collect();
        let result = dither(&pixels, 20, 12).unwrap();
        assert_eq!(result.pixels(), pixels.as_slice(), "palette {entry:?}");
    }
}

#[test]
fn test_diffusion_changes_midtone_output() {
    let pixels = vec![120u8; 32 * 16 * 3];
    let dithered = dither(&pixels, 32, 16).unwrap();
    let quantized = quantize_only(&pixels, 32, 16).unwrap();
    assert_ne!(dithered.pixels(), quantized.pixels());
}

#[test]
fn test_dimension_mismatch_is_a_contract_error() {
    let err = dither(&[0u8; 30], 4, 4).unwrap_err();
    assert!(matches!(err, FrameError::RasterShape { .. }));

    let err = quantize_only(&[0u8; 30], 4, 4).unwrap_err();
    assert!(matches!(err, FrameError::RasterShape { .. }));
}

#[test]
fn test_full_display_raster_renders() {
    let pixels = gradient(800, 480);
    let result = dither(&pixels, 800, 480).unwrap();
    assert_eq!(result.width(), 800);
    assert_eq!(result.height(), 480);
    assert_palette_only(result.pixels());
}
