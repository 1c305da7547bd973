//! Grayscale raster rendering with borders and integer rescaling

use crate::io::configuration::FOREGROUND_LUMINANCE;
use crate::io::error::{AlgorithmError, Result, file_system_error, invalid_parameter};
use crate::spatial::PixelGrid;
use image::imageops::{FilterType, resize};
use image::{GrayImage, Luma};
use std::path::Path;

/// Side length of the bordered canvas: `border + N * (N + border)`
///
/// # Errors
///
/// Returns an error if the side length overflows `usize`
pub fn bordered_width(size: usize, border: usize) -> Result<usize> {
    size.checked_add(border)
        .and_then(|panel| panel.checked_mul(size))
        .and_then(|panels| panels.checked_add(border))
        .ok_or_else(|| invalid_parameter("border", &border, &"canvas side overflows"))
}

/// Offset of pixel `pixel` of panel `panel` along one canvas axis
pub const fn canvas_offset(size: usize, border: usize, panel: usize, pixel: usize) -> usize {
    border + panel * (size + border) + pixel
}

/// Output width for an integer rescale of `actual` towards `target`
///
/// Shrinks by `round(actual / target)` when the canvas is at least as wide
/// as the target, otherwise grows by `round(target / actual)`.
///
/// # Errors
///
/// Returns an error if either width is zero or the grown width does not
/// fit in `u32`
pub fn rescaled_width(actual: u32, target: u32) -> Result<u32> {
    if actual == 0 {
        return Err(invalid_parameter("actual_width", &actual, &"must be positive"));
    }
    if target == 0 {
        return Err(invalid_parameter("target_width", &target, &"must be positive"));
    }

    if actual >= target {
        let scale = (f64::from(actual) / f64::from(target)).round() as u32;
        return Ok(actual / scale.max(1));
    }

    let scale = (f64::from(target) / f64::from(actual)).round() as u32;
    actual.checked_mul(scale.max(1)).ok_or_else(|| {
        invalid_parameter(
            "target_width",
            &target,
            &format!("scaling {actual} by {scale} overflows"),
        )
    })
}

/// Render the grid at one canvas pixel per grid pixel
///
/// # Errors
///
/// Returns an error if the canvas side does not fit in `u32`
pub fn render_raster(grid: &PixelGrid, border: usize, border_color: u8) -> Result<GrayImage> {
    let size = grid.size();
    let side = canvas_side(size, border)?;
    let mut img = GrayImage::from_pixel(side, side, Luma([border_color]));

    for ((row, col, i, j), &value) in grid.pixels().indexed_iter() {
        let y = canvas_offset(size, border, row, i) as u32;
        let x = canvas_offset(size, border, col, j) as u32;
        let luminance = if value { FOREGROUND_LUMINANCE } else { 0 };
        img.put_pixel(x, y, Luma([luminance]));
    }

    Ok(img)
}

/// Render the grid and rescale it to the nearest integer multiple of the target
///
/// # Errors
///
/// Returns an error if the canvas side does not fit in `u32` or the target
/// width is zero
pub fn render_scaled(
    grid: &PixelGrid,
    border: usize,
    border_color: u8,
    target_width: u32,
) -> Result<GrayImage> {
    let img = render_raster(grid, border, border_color)?;
    let width = rescaled_width(img.width(), target_width)?;
    if width == img.width() {
        return Ok(img);
    }
    Ok(resize(&img, width, width, FilterType::Nearest))
}

/// Save a raster image as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(img: &GrayImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    img.save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    tracing::info!(path = %output_path.display(), width = img.width(), "wrote raster image");
    Ok(())
}

/// Side length of the bordered canvas as an image dimension
///
/// # Errors
///
/// Returns an error if the side length does not fit in `u32`
pub fn canvas_side(size: usize, border: usize) -> Result<u32> {
    let side = bordered_width(size, border)?;
    u32::try_from(side).map_err(|e| invalid_parameter("border", &border, &e))
}
