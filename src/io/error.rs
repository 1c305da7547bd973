//! Error types for progression generation and output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation and rendering operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Requested placement strategy name is not registered
    UnknownStrategy {
        /// Name that failed to resolve
        name: String,
    },

    /// Predecessor panel has no background-valued pixel left to light
    ///
    /// Only reachable when a panel is asked to carry more foreground
    /// pixels than it has positions.
    EmptyPartition {
        /// Panel (I, J) being placed
        panel: [usize; 2],
    },

    /// Placement strategy returned a coordinate outside the panel
    CoordinateOutOfRange {
        /// Panel (I, J) being placed
        panel: [usize; 2],
        /// Offending coordinate (x, y)
        coordinate: [usize; 2],
        /// Panel side length
        size: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Numerical computation could not be carried out
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
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
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStrategy { name } => {
                write!(
                    f,
                    "Unknown placement strategy '{name}' (expected randomPositions, randomProgress or nearest)"
                )
            }
            Self::EmptyPartition { panel } => {
                write!(
                    f,
                    "No empty position left before panel ({}, {})",
                    panel[0], panel[1]
                )
            }
            Self::CoordinateOutOfRange {
                panel,
                coordinate,
                size,
            } => {
                write!(
                    f,
                    "Coordinate ({}, {}) is outside the {size}x{size} panel ({}, {})",
                    coordinate[0], coordinate[1], panel[0], panel[1]
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
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
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl From<std::io::Error> for AlgorithmError {
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
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a file system error for a known path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> AlgorithmError {
    AlgorithmError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
