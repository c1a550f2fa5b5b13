//! Validates PNG round trips and display fitting through a temp directory

use std::path::Path;

use inkframe::io::image::{export_raster, load_raster, probe_dimensions};
use inkframe::render::Raster;
use inkframe::render::palette::is_palette_color;

fn checkerboard(width: usize, height: usize) -> Raster {
    let mut pixels = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let bright = (x + y) % 2 == 0;
            pixels.extend_from_slice(if bright { &[220, 180, 90] } else { &[30, 60, 120] });
        }
    }
    Raster::from_pixels(pixels, width, height).unwrap()
}

#[test]
fn test_export_then_probe_round_trips_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.png");
    let raster = checkerboard(64, 48);

    export_raster(&raster, path.to_str().unwrap()).unwrap();
    assert_eq!(probe_dimensions(&path).unwrap(), (64, 48));
}

#[test]
fn test_load_fits_any_source_to_the_display() {
    let dir = tempfile::tempdir().unwrap();

    for (name, width, height) in [("portrait.png", 90, 160), ("landscape.png", 320, 100)] {
        let path = dir.path().join(name);
        export_raster(&checkerboard(width, height), path.to_str().unwrap()).unwrap();

        let fitted = load_raster(&path).unwrap();
        assert_eq!(fitted.width(), 800);
        assert_eq!(fitted.height(), 480);
    }
}

#[test]
fn test_missing_file_reports_load_error() {
    let err = load_raster(Path::new("/nonexistent/frame.png")).unwrap_err();
    assert!(err.to_string().contains("Failed to load image"));
}

#[test]
fn test_export_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("rendered").join("out.png");

    export_raster(&checkerboard(8, 8), nested.to_str().unwrap()).unwrap();
    assert!(nested.exists());
}

#[test]
fn test_rendered_export_stays_palette_only_after_reload() {
    use inkframe::render::dither::dither;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("display.png");

    let source = checkerboard(32, 20);
    let rendered = dither(source.pixels(), 32, 20).unwrap();
    export_raster(&rendered, path.to_str().unwrap()).unwrap();

    assert_eq!(probe_dimensions(&path).unwrap(), (32, 20));
    for triple in rendered.pixels().chunks_exact(3) {
        assert!(is_palette_color([triple[0], triple[1], triple[2]]));
    }
}
