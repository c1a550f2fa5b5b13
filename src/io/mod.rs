//! Input/output operations and error handling
//!
//! Everything here is the replaceable shell around the core: PNG loading
//! and export, the resize orchestration step, CLI argument handling,
//! progress display, and configuration validation.

/// Command-line interface and batch processing
pub mod cli;
/// Display constants and rotation configuration
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// PNG loading, display resizing, and export
pub mod image;
/// Batch progress display
pub mod progress;
