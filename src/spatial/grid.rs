//! Pixel grid storage for panel progressions
//!
//! A grid holds N×N panels, each an N×N array of binary pixels, stored as a
//! single 4-D array indexed `(I, J, i, j)`. Pixel value 0 is stored as
//! `false` and value 1 as `true`.

use ndarray::{Array4, ArrayView2, s};

/// Pixel position within a single panel
///
/// `x` selects the panel row and `y` the panel column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Row within the panel
    pub x: usize,
    /// Column within the panel
    pub y: usize,
}

impl Coordinate {
    /// Create a coordinate from row and column
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Check that both components fall inside a panel of the given size
    pub const fn within(&self, size: usize) -> bool {
        self.x < size && self.y < size
    }
}

/// Enumerate every coordinate of a panel, rows outer and columns inner
pub fn panel_coordinates(size: usize) -> impl Iterator<Item = Coordinate> {
    (0..size).flat_map(move |x| (0..size).map(move |y| Coordinate::new(x, y)))
}

/// Position of a panel within the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelIndex {
    /// Panel row
    pub row: usize,
    /// Panel column
    pub col: usize,
}

impl PanelIndex {
    /// Create a panel index
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position of this panel in raster order, equal to its foreground count
    pub const fn ordinal(&self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Background value, determined by column parity alone
    pub const fn background(&self) -> bool {
        self.col % 2 == 1
    }

    /// Foreground value, the negation of the background
    pub const fn foreground(&self) -> bool {
        !self.background()
    }

    /// Panel immediately before this one in raster order
    ///
    /// The first panel has no predecessor.
    pub const fn predecessor(&self, size: usize) -> Option<Self> {
        if self.col > 0 {
            Some(Self::new(self.row, self.col - 1))
        } else if self.row > 0 {
            Some(Self::new(self.row - 1, size - 1))
        } else {
            None
        }
    }

    /// Iterate all panels in raster order, columns fastest
    pub fn raster(size: usize) -> impl Iterator<Item = Self> {
        (0..size).flat_map(move |row| (0..size).map(move |col| Self::new(row, col)))
    }

    /// Index pair as an array for error reporting
    pub const fn as_array(&self) -> [usize; 2] {
        [self.row, self.col]
    }
}

/// Panel positions split by their value in a given panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Positions holding the panel's background value
    pub empty: Vec<Coordinate>,
    /// Positions holding the panel's foreground value
    pub full: Vec<Coordinate>,
}

/// Grid of N×N panels of N×N binary pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Array4<bool>,
    size: usize,
}

impl PixelGrid {
    /// Create a grid with every pixel set to 0
    pub fn new(size: usize) -> Self {
        Self {
            pixels: Array4::from_elem((size, size, size, size), false),
            size,
        }
    }

    /// Panels per side, also pixels per panel side
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Raw 4-D pixel storage
    pub const fn pixels(&self) -> &Array4<bool> {
        &self.pixels
    }

    /// Read a single pixel, `None` when out of range
    pub fn get(&self, panel: PanelIndex, coordinate: Coordinate) -> Option<bool> {
        self.pixels
            .get([panel.row, panel.col, coordinate.x, coordinate.y])
            .copied()
    }

    /// Write a single pixel, returning whether the position existed
    pub fn set(&mut self, panel: PanelIndex, coordinate: Coordinate, value: bool) -> bool {
        self.pixels
            .get_mut([panel.row, panel.col, coordinate.x, coordinate.y])
            .map(|pixel| *pixel = value)
            .is_some()
    }

    /// Set every pixel of a panel to one value
    pub fn fill_panel(&mut self, panel: PanelIndex, value: bool) {
        if panel.row < self.size && panel.col < self.size {
            self.pixels
                .slice_mut(s![panel.row, panel.col, .., ..])
                .fill(value);
        }
    }

    /// Borrow a panel as a 2-D view
    pub fn panel(&self, panel: PanelIndex) -> Option<ArrayView2<'_, bool>> {
        (panel.row < self.size && panel.col < self.size)
            .then(|| self.pixels.slice(s![panel.row, panel.col, .., ..]))
    }

    /// Split a panel's positions by its own background and foreground
    pub fn partition(&self, panel: PanelIndex) -> Partition {
        let background = panel.background();
        let mut partition = Partition::default();
        for coordinate in panel_coordinates(self.size) {
            match self.get(panel, coordinate) {
                Some(value) if value == background => partition.empty.push(coordinate),
                Some(_) => partition.full.push(coordinate),
                None => {}
            }
        }
        partition
    }

    /// Positions holding the panel's foreground value, in enumeration order
    pub fn foreground_positions(&self, panel: PanelIndex) -> Vec<Coordinate> {
        self.partition(panel).full
    }

    /// Number of pixels holding the panel's foreground value
    pub fn foreground_count(&self, panel: PanelIndex) -> usize {
        let foreground = panel.foreground();
        self.panel(panel)
            .map_or(0, |view| view.iter().filter(|&&v| v == foreground).count())
    }
}
