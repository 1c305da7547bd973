//! Vector canvas of filled unit squares
//!
//! The canvas uses a bottom-left origin, so rows are flipped relative to
//! the raster renderer.

use crate::io::error::Result;
use crate::io::image::{bordered_width, canvas_offset};
use crate::spatial::PixelGrid;

/// Fill colour of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Pixel value 0
    Black,
    /// Pixel value 1
    White,
    /// Background luminance
    Gray(u8),
}

impl Fill {
    /// Gray level in `0.0..=1.0`
    pub fn level(self) -> f64 {
        match self {
            Self::Black => 0.0,
            Self::White => 1.0,
            Self::Gray(luminance) => f64::from(luminance) / 255.0,
        }
    }
}

/// Axis-aligned filled rectangle in canvas units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilledRect {
    /// Left edge
    pub x: usize,
    /// Bottom edge
    pub y: usize,
    /// Horizontal extent
    pub width: usize,
    /// Vertical extent
    pub height: usize,
    /// Fill colour
    pub fill: Fill,
}

/// Square canvas of filled rectangles, painted in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorCanvas {
    side: usize,
    rects: Vec<FilledRect>,
}

impl VectorCanvas {
    /// Build a canvas with a background square and one unit square per pixel
    ///
    /// # Errors
    ///
    /// Returns an error if the bordered side length overflows
    pub fn from_grid(grid: &PixelGrid, border: usize, border_color: u8) -> Result<Self> {
        let size = grid.size();
        let side = bordered_width(size, border)?;

        let mut rects = Vec::with_capacity(grid.pixels().len() + 1);
        rects.push(FilledRect {
            x: 0,
            y: 0,
            width: side,
            height: side,
            fill: Fill::Gray(border_color),
        });

        for ((row, col, i, j), &value) in grid.pixels().indexed_iter() {
            let raster_row = canvas_offset(size, border, row, i);
            rects.push(FilledRect {
                x: canvas_offset(size, border, col, j),
                y: side - 1 - raster_row,
                width: 1,
                height: 1,
                fill: if value { Fill::White } else { Fill::Black },
            });
        }

        Ok(Self { side, rects })
    }

    /// Side length of the canvas
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Rectangles in painting order, background first
    pub const fn rects(&self) -> &[FilledRect] {
        self.rects.as_slice()
    }
}
