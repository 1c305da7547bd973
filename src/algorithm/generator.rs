//! Progression generator building the full pixel grid panel by panel

use crate::algorithm::placement::PlacementStrategy;
use crate::algorithm::selection::RandomSelector;
use crate::io::configuration::{
    DEFAULT_BORDER, DEFAULT_BORDER_COLOR, DEFAULT_GRID_SIZE, DEFAULT_TARGET_WIDTH, MAX_GRID_SIZE,
    MIN_GRID_SIZE,
};
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::io::image::{canvas_side, render_scaled, rescaled_width};
use crate::io::vector::VectorCanvas;
use crate::spatial::{Coordinate, PanelIndex, PixelGrid};
use image::GrayImage;

/// Parameters for a single artwork
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Panels per side, also pixels per panel side
    pub size: usize,
    /// Border width in pixels between and around panels
    pub border: usize,
    /// Approximate raster output width
    pub target_width: u32,
    /// Border luminance
    pub border_color: u8,
    /// Placement strategy applied to every panel
    pub strategy: PlacementStrategy,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            border: DEFAULT_BORDER,
            target_width: DEFAULT_TARGET_WIDTH,
            border_color: DEFAULT_BORDER_COLOR,
            strategy: PlacementStrategy::RandomProgress,
        }
    }
}

impl GenerationConfig {
    /// Check parameters before any work is done
    ///
    /// # Errors
    ///
    /// Returns an error if the grid size is outside the supported range, the
    /// bordered canvas does not fit an image dimension, or the target width
    /// is zero or cannot be reached by integer scaling
    pub fn validate(&self) -> Result<()> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.size) {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &format!("must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}"),
            ));
        }
        if self.target_width == 0 {
            return Err(invalid_parameter(
                "target_width",
                &self.target_width,
                &"must be positive",
            ));
        }
        let side = canvas_side(self.size, self.border)?;
        rescaled_width(side, self.target_width)?;
        Ok(())
    }
}

/// Builds a pixel grid by applying one placement strategy per panel
pub struct ProgressionGenerator {
    size: usize,
    strategy: PlacementStrategy,
}

impl ProgressionGenerator {
    /// Create a generator for the given grid size and strategy
    pub const fn new(size: usize, strategy: PlacementStrategy) -> Self {
        Self { size, strategy }
    }

    /// Generate the complete grid in raster order
    ///
    /// Each panel is filled with its background, then every coordinate the
    /// strategy returns is set to the panel's foreground.
    ///
    /// # Errors
    ///
    /// Returns an error if the strategy fails or returns a coordinate
    /// outside the panel
    pub fn generate(&self, rng: &mut RandomSelector) -> Result<PixelGrid> {
        let mut grid = PixelGrid::new(self.size);

        for panel in PanelIndex::raster(self.size) {
            grid.fill_panel(panel, panel.background());

            let points = self.strategy.place(panel, &grid, rng)?;
            tracing::debug!(
                row = panel.row,
                col = panel.col,
                foreground = points.len(),
                "placed panel"
            );
            paint_foreground(&mut grid, panel, &points)?;
        }

        tracing::debug!(
            size = self.size,
            strategy = %self.strategy,
            "generated pixel grid"
        );
        Ok(grid)
    }
}

/// Set every placed coordinate of `panel` to the panel's foreground value
///
/// # Errors
///
/// Returns `CoordinateOutOfRange` for the first coordinate outside the panel
pub fn paint_foreground(
    grid: &mut PixelGrid,
    panel: PanelIndex,
    points: &[Coordinate],
) -> Result<()> {
    let foreground = panel.foreground();
    for point in points {
        if !grid.set(panel, *point, foreground) {
            return Err(AlgorithmError::CoordinateOutOfRange {
                panel: panel.as_array(),
                coordinate: [point.x, point.y],
                size: grid.size(),
            });
        }
    }
    Ok(())
}

/// Finished pixel grid together with the settings needed to render it
#[derive(Debug, Clone)]
pub struct Artwork {
    grid: PixelGrid,
    config: GenerationConfig,
}

impl Artwork {
    /// Generate a new artwork from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or generation fails
    pub fn from_config(config: GenerationConfig, rng: &mut RandomSelector) -> Result<Self> {
        config.validate()?;
        let grid = ProgressionGenerator::new(config.size, config.strategy).generate(rng)?;
        Ok(Self { grid, config })
    }

    /// The generated pixel grid
    pub const fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// Settings the artwork was generated with
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Bordered grayscale raster, rescaled near the target width
    ///
    /// # Errors
    ///
    /// Returns an error if the image dimensions cannot be computed
    pub fn raster(&self) -> Result<GrayImage> {
        render_scaled(
            &self.grid,
            self.config.border,
            self.config.border_color,
            self.config.target_width,
        )
    }

    /// Vector canvas of unit squares with a bottom-left origin
    ///
    /// # Errors
    ///
    /// Returns an error if the bordered side length overflows
    pub fn canvas(&self) -> Result<VectorCanvas> {
        VectorCanvas::from_grid(&self.grid, self.config.border, self.config.border_color)
    }
}

/// Generate an artwork from loose parameters and a strategy name
///
/// A fresh random stream seeded with `seed` drives the placement.
///
/// # Errors
///
/// Returns `UnknownStrategy` if the name is not registered, or any
/// validation or generation error
pub fn generate(
    size: usize,
    border: usize,
    target_width: u32,
    border_color: u8,
    strategy_name: &str,
    seed: u64,
) -> Result<Artwork> {
    let config = GenerationConfig {
        size,
        border,
        target_width,
        border_color,
        strategy: strategy_name.parse()?,
    };
    let mut rng = RandomSelector::new(seed);
    Artwork::from_config(config, &mut rng)
}
