//! Error types for sampler construction, grid synthesis and file handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all dot grid operations
#[derive(Debug)]
pub enum DotterError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Source pixel data doesn't meet pipeline requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Configuration rejected before any sampling took place
    ///
    /// Raised for:
    /// - Empty or unsorted possible values
    /// - Out of bounds estimated index
    /// - Unknown enumerated options in a configuration file
    Config {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A value handed back to a sampler is not one of its possible values
    ValueNotFound {
        /// Debug rendering of the missing value
        value: String,
    },

    /// Internal bookkeeping reached a state that correct code never produces
    InternalInvariant {
        /// Name of the operation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Hex color string could not be decoded
    InvalidColor {
        /// The rejected color string
        value: String,
    },

    /// Failed to save a rendered preview to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Failed to read or write JSON documents
    Serialization {
        /// Path of the document, `<memory>` for in-memory buffers
        path: PathBuf,
        /// Underlying serde error
        source: serde_json::Error,
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
}

impl fmt::Display for DotterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::Config {
                parameter,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Invalid configuration '{parameter}' = '{value}': {reason}"
                )
            }
            Self::ValueNotFound { value } => {
                write!(f, "Value {value} is not among the sampler's possible values")
            }
            Self::InternalInvariant { operation, reason } => {
                write!(f, "Internal invariant violated in {operation}: {reason}")
            }
            Self::InvalidColor { value } => {
                write!(f, "Invalid hex color '{value}'")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(f, "JSON error for '{}': {source}", path.display())
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
        }
    }
}

impl std::error::Error for DotterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for dot grid results
pub type Result<T> = std::result::Result<T, DotterError>;

impl From<image::ImageError> for DotterError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for DotterError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for DotterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            path: PathBuf::from("<memory>"),
            source: err,
        }
    }
}

/// Create a configuration error
pub fn config_error(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> DotterError {
    DotterError::Config {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an internal invariant error
pub fn invariant_error(operation: &'static str, reason: &impl ToString) -> DotterError {
    DotterError::InternalInvariant {
        operation,
        reason: reason.to_string(),
    }
}

/// Create an error for a path the CLI cannot work with
pub fn path_error(path: impl Into<PathBuf>, reason: &str) -> DotterError {
    DotterError::FileSystem {
        path: path.into(),
        operation: "resolve path",
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, reason.to_string()),
    }
}
