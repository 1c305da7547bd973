//! Alternating pixel progressions in the manner of Boetti's
//! "Alternando da uno a cento e viceversa"
//!
//! A grid of N×N panels is generated, each panel an N×N array of binary
//! pixels whose background alternates by column. Panel (I, J) carries
//! `I*N+J` foreground pixels, placed by a pluggable strategy, and the grid
//! renders to a bordered grayscale raster or a vector canvas.

/// Progression generation and placement strategies
pub mod algorithm;
/// Input/output operations, rendering and error handling
pub mod io;
/// Mathematical utilities for placement decisions
pub mod math;
/// Pixel grid and coordinate types
pub mod spatial;

pub use algorithm::generator::{Artwork, GenerationConfig, generate};
pub use algorithm::placement::PlacementStrategy;
pub use io::error::{AlgorithmError, Result};
