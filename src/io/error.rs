//! Error types for catalog, configuration, and rendering operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all frame engine operations
#[derive(Debug)]
pub enum FrameError {
    /// Failed to load a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Rotation configuration failed startup validation
    InvalidConfiguration {
        /// Name of the offending field
        field: &'static str,
        /// Explanation of the violated invariant
        reason: String,
    },

    /// Raster dimensions disagree with the pixel buffer length
    ///
    /// Indicates a caller defect in the surrounding layer, not a
    /// recoverable runtime condition.
    RasterShape {
        /// Declared width in pixels
        width: usize,
        /// Declared height in pixels
        height: usize,
        /// Actual buffer length in bytes
        buffer_len: usize,
    },

    /// A parameter outside the algorithm's contract
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid rotation configuration '{field}': {reason}")
            }
            Self::RasterShape {
                width,
                height,
                buffer_len,
            } => {
                write!(
                    f,
                    "Raster buffer length {buffer_len} does not match {width}x{height} RGB dimensions (expected {})",
                    width * height * 3
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for frame engine results
pub type Result<T> = std::result::Result<T, FrameError>;

impl From<image::ImageError> for FrameError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for FrameError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FrameError {
    FrameError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a configuration validation error
pub fn invalid_configuration(field: &'static str, reason: &impl ToString) -> FrameError {
    FrameError::InvalidConfiguration {
        field,
        reason: reason.to_string(),
    }
}

/// Create a generic I/O error for path handling failures
pub fn io_error(msg: &str) -> FrameError {
    FrameError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}
