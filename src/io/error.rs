//! Error types for raster loading, tiling and raw export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tiling operations
#[derive(Debug)]
pub enum TilingError {
    /// Failed to decode the source heightmap
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Configuration or argument validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Requested pixel rectangle is not fully inside the raster
    ///
    /// The planner only emits placements that fit, so this signals a broken
    /// internal invariant rather than bad input.
    OutOfBounds {
        /// Requested origin (x, y)
        origin: (usize, usize),
        /// Requested rectangle size (width, height)
        size: (usize, usize),
        /// Raster dimensions (width, height)
        raster: (usize, usize),
    },

    /// Tiles handed to the grid do not form a complete row-major arrangement
    InvalidGrid {
        /// Description of the inconsistency
        reason: String,
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

    /// Logger could not be installed
    Logging {
        /// Underlying logger error
        source: log::SetLoggerError,
    },
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::OutOfBounds {
                origin,
                size,
                raster,
            } => {
                write!(
                    f,
                    "Region {}x{} at ({}, {}) exceeds raster bounds {}x{}",
                    size.0, size.1, origin.0, origin.1, raster.0, raster.1
                )
            }
            Self::InvalidGrid { reason } => {
                write!(f, "Invalid tile grid: {reason}")
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
            Self::Logging { source } => {
                write!(f, "Failed to initialise logging: {source}")
            }
        }
    }
}

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Logging { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

impl From<log::SetLoggerError> for TilingError {
    fn from(err: log::SetLoggerError) -> Self {
        Self::Logging { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilingError {
    TilingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid grid error
pub fn invalid_grid(reason: &impl ToString) -> TilingError {
    TilingError::InvalidGrid {
        reason: reason.to_string(),
    }
}

/// Wrap an I/O error with the path and operation that produced it
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> TilingError {
    let path = path.into();
    move |source| TilingError::FileSystem {
        path,
        operation,
        source,
    }
}
