//! Generation constants and runtime configuration defaults

// Grid limits
/// Smallest grid size for which every panel has room for its count
pub const MIN_GRID_SIZE: usize = 2;
/// Largest accepted grid size
pub const MAX_GRID_SIZE: usize = 64;

// Default values for configurable parameters
/// Default number of panels (and pixels) per side
pub const DEFAULT_GRID_SIZE: usize = 6;
/// Default border width in pixels between and around panels
pub const DEFAULT_BORDER: usize = 1;
/// Default approximate output width of raster images
pub const DEFAULT_TARGET_WIDTH: u32 = 800;
/// Default border luminance (light gray)
pub const DEFAULT_BORDER_COLOR: u8 = 227;
/// Default placement strategy name
pub const DEFAULT_STRATEGY: &str = "randomProgress";
/// Default number of artworks produced per invocation
pub const DEFAULT_RUN_COUNT: usize = 5;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Luminance of a pixel holding value 1
pub const FOREGROUND_LUMINANCE: u8 = 255;
/// PDF page size in points (A0 portrait)
pub const PDF_PAGE_SIZE_PT: (f64, f64) = (2384.0, 3370.0);
/// Margin kept free around the canvas on each PDF page, in points
pub const PDF_PAGE_MARGIN_PT: f64 = 170.0;
/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
