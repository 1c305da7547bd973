//! Tests for raster rendering, rescaling and PNG export

#[cfg(test)]
mod tests {
    use alternando::algorithm::generator::ProgressionGenerator;
    use alternando::algorithm::placement::PlacementStrategy;
    use alternando::algorithm::selection::RandomSelector;
    use alternando::io::image::{
        bordered_width, canvas_offset, export_png, render_raster, render_scaled, rescaled_width,
    };
    use alternando::spatial::{PanelIndex, PixelGrid};
    use tempfile::TempDir;

    fn sample_grid(size: usize) -> PixelGrid {
        ProgressionGenerator::new(size, PlacementStrategy::RandomProgress)
            .generate(&mut RandomSelector::new(4))
            .unwrap()
    }

    #[test]
    fn test_bordered_width() {
        assert_eq!(bordered_width(6, 1).unwrap(), 43);
        assert_eq!(bordered_width(10, 1).unwrap(), 111);
        assert_eq!(bordered_width(3, 0).unwrap(), 9);
        assert_eq!(canvas_offset(6, 1, 2, 3), 1 + 2 * 7 + 3);
    }

    // Canvas narrower than target grows by round(T / W)
    #[test]
    fn test_rescale_up() {
        assert_eq!(rescaled_width(43, 800).unwrap(), 43 * 19);
        assert_eq!(rescaled_width(111, 800).unwrap(), 111 * 7);
        assert_eq!(rescaled_width(799, 800).unwrap(), 799);
    }

    // Canvas at least as wide as target shrinks by round(W / T)
    #[test]
    fn test_rescale_down() {
        assert_eq!(rescaled_width(800, 800).unwrap(), 800);
        assert_eq!(rescaled_width(1000, 400).unwrap(), 333);
        assert_eq!(rescaled_width(1100, 1000).unwrap(), 1100);
        assert_eq!(rescaled_width(2001, 1000).unwrap(), 1000);
    }

    #[test]
    fn test_rescale_is_positive() {
        for actual in [1, 5, 43, 400, 4000] {
            for target in [1, 3, 100, 800, 10_000] {
                assert!(rescaled_width(actual, target).unwrap() > 0);
            }
        }
        assert!(rescaled_width(0, 800).is_err());
        assert!(rescaled_width(43, 0).is_err());
    }

    // Growing towards a huge target must not wrap around to zero
    #[test]
    fn test_rescale_overflow_is_rejected() {
        assert!(rescaled_width(4, u32::MAX).is_err());
        // round(u32::MAX / 4) = 2^30 divides the canvas three times
        assert_eq!(rescaled_width(u32::MAX, 4).unwrap(), 3);
        assert_eq!(rescaled_width(2, u32::MAX / 2).unwrap(), 1 << 31);
    }

    #[test]
    fn test_bordered_width_overflow_is_rejected() {
        assert!(bordered_width(6, usize::MAX).is_err());
        assert!(bordered_width(usize::MAX, 0).is_err());
        assert!(render_raster(&PixelGrid::new(2), usize::MAX / 2, 227).is_err());
    }

    // Pixels land at their bordered offsets with 0/255 luminance
    #[test]
    fn test_render_raster_layout() {
        let size = 3;
        let border = 2;
        let grid = sample_grid(size);
        let img = render_raster(&grid, border, 200).unwrap();

        let side = bordered_width(size, border).unwrap() as u32;
        assert_eq!((img.width(), img.height()), (side, side));
        assert_eq!(img.get_pixel(0, 0).0, [200]);
        assert_eq!(img.get_pixel(side - 1, side - 1).0, [200]);

        for ((row, col, i, j), &value) in grid.pixels().indexed_iter() {
            let y = canvas_offset(size, border, row, i) as u32;
            let x = canvas_offset(size, border, col, j) as u32;
            let expected = if value { 255 } else { 0 };
            assert_eq!(img.get_pixel(x, y).0, [expected]);
        }

        // Odd columns start from a white background
        let white_panel = PanelIndex::new(0, 1);
        let x = canvas_offset(size, border, white_panel.col, 0) as u32;
        let y = canvas_offset(size, border, white_panel.row, 0) as u32;
        let whites = (0..3)
            .flat_map(|di| (0..3).map(move |dj| (di, dj)))
            .filter(|&(di, dj)| img.get_pixel(x + dj, y + di).0 == [255])
            .count();
        assert_eq!(whites, 8);
    }

    #[test]
    fn test_render_scaled_dimensions() {
        let grid = sample_grid(6);
        let img = render_scaled(&grid, 1, 227, 800).unwrap();
        assert_eq!((img.width(), img.height()), (817, 817));

        let same = render_scaled(&grid, 1, 227, 43).unwrap();
        assert_eq!(same.width(), 43);
    }

    #[test]
    fn test_export_png_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("nested").join("out.png");
        let img = render_raster(&sample_grid(2), 1, 227).unwrap();

        export_png(&img, &output_path).unwrap();
        assert!(output_path.exists(), "PNG file should be created");

        let reloaded = image::open(&output_path).unwrap().into_luma8();
        assert_eq!(reloaded, img);
    }

    #[test]
    fn test_export_png_unknown_extension_fails() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("out.unknownformat");
        let img = render_raster(&sample_grid(2), 1, 227).unwrap();

        assert!(export_png(&img, &output_path).is_err());
    }
}
