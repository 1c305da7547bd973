//! Input/output operations, configuration and error handling

/// Command-line driver for batches of artworks
pub mod cli;
/// Defaults and limits
pub mod configuration;
/// Error types
pub mod error;
/// Raster rendering and PNG export
pub mod image;
/// Logging setup
pub mod logging;
/// PDF document writer
pub mod pdf;
/// Batch progress display
pub mod progress;
/// Vector canvas rendering
pub mod vector;
