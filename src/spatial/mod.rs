//! Spatial data structures for panel progressions
//!
//! This module contains the pixel grid together with the coordinate and
//! panel index types used to address it.

/// Pixel grid, panel indices and coordinates
pub mod grid;

pub use grid::{Coordinate, PanelIndex, Partition, PixelGrid};
