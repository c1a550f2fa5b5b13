//! Command-line interface for rendering photos to the display palette
//!
//! Two modes share one pipeline: batch conversion renders every collected
//! photo, while `--pick` treats the collection as a rotation catalog, runs
//! one selection cycle, and renders only the chosen photo.

use crate::catalog::PhotoRecord;
use crate::io::configuration::{DEFAULT_HISTORY_SIZE, DEFAULT_SEED, OUTPUT_SUFFIX, RotationConfig};
use crate::io::error::Result;
use crate::io::image::{export_raster, load_raster, probe_dimensions};
use crate::io::progress::ProgressManager;
use crate::render::dither::{dither, quantize_only};
use crate::selection::SelectionEngine;
use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "inkframe")]
#[command(
    author,
    version,
    about = "Render photos for a six-color e-paper display"
)]
/// Command-line arguments for the rendering tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible selection
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Select one photo from the catalog instead of rendering everything
    #[arg(short, long)]
    pub pick: bool,

    /// Skip error diffusion and quantize each pixel independently
    #[arg(short, long)]
    pub raw: bool,

    /// Anti-repetition memory size for pick mode
    #[arg(long, default_value_t = DEFAULT_HISTORY_SIZE)]
    pub history_size: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates photo rendering with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, selection, or rendering fails
    pub fn process(&mut self) -> Result<()> {
        let collected = self.collect_files()?;

        if collected.is_empty() {
            return Ok(());
        }

        let files = if self.cli.pick {
            self.select_refresh_target(&collected)?
        } else {
            collected
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(crate::io::error::io_error(
                    "Target file must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(crate::io::error::io_error(
                "Target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        // Pick mode needs the full catalog; outputs are overwritten
        if self.cli.pick || !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    /// Run one rotation cycle over the collected files as the catalog
    // Allow print for user feedback for the selection result
    #[allow(clippy::print_stderr)]
    fn select_refresh_target(&self, files: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let catalog = build_catalog(files)?;

        let config = RotationConfig {
            history_size: self.cli.history_size,
            dithering: !self.cli.raw,
            ..RotationConfig::default()
        };
        let mut engine = SelectionEngine::new(config, self.cli.seed)?;

        let Some(chosen) = engine.pick(&catalog) else {
            return Ok(Vec::new());
        };

        if !self.cli.quiet {
            if engine.last_pick_was_anniversary() {
                eprintln!("Selected (on this day): {}", chosen.url);
            } else {
                eprintln!("Selected: {}", chosen.url);
            }
        }

        Ok(vec![PathBuf::from(chosen.url)])
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let output_path = Self::get_output_path(input_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let raster = load_raster(input_path)?;
        if let Some(ref mut pm) = self.progress_manager {
            pm.advance_stage(index);
        }

        let rendered = if self.cli.raw {
            quantize_only(raster.pixels(), raster.width(), raster.height())?
        } else {
            dither(raster.pixels(), raster.width(), raster.height())?
        };
        if let Some(ref mut pm) = self.progress_manager {
            pm.advance_stage(index);
        }

        export_raster(
            &rendered,
            output_path
                .to_str()
                .ok_or_else(|| crate::io::error::io_error("Invalid output path"))?,
        )?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// Describe collected files as catalog records
///
/// Dimensions come from a header probe; capture time falls back to the
/// filesystem modification time, or none when unavailable.
fn build_catalog(files: &[PathBuf]) -> Result<Vec<PhotoRecord>> {
    let mut catalog = Vec::with_capacity(files.len());
    for path in files {
        let (width, height) = probe_dimensions(path)?;
        let captured: Option<DateTime<Utc>> = std::fs::metadata(path)
            .and_then(|metadata| metadata.modified())
            .ok()
            .map(DateTime::<Utc>::from);

        let mut record = PhotoRecord::new(path.to_string_lossy(), width, height);
        if let Some(timestamp) = captured {
            record = record.with_capture_time(timestamp);
        }
        catalog.push(record);
    }
    Ok(catalog)
}
