//! Tests for vector canvas construction

#[cfg(test)]
mod tests {
    use alternando::io::image::canvas_offset;
    use alternando::io::vector::{Fill, FilledRect, VectorCanvas};
    use alternando::spatial::{Coordinate, PanelIndex, PixelGrid};

    #[test]
    fn test_background_rect_comes_first() {
        let canvas = VectorCanvas::from_grid(&PixelGrid::new(2), 1, 227).unwrap();

        assert_eq!(canvas.side(), 7);
        assert_eq!(
            canvas.rects().first(),
            Some(&FilledRect {
                x: 0,
                y: 0,
                width: 7,
                height: 7,
                fill: Fill::Gray(227),
            })
        );
        assert_eq!(canvas.rects().len(), 17);
    }

    // Raster row r maps to y = side - 1 - r
    #[test]
    fn test_rows_are_flipped() {
        let size = 2;
        let border = 1;
        let mut grid = PixelGrid::new(size);
        grid.set(PanelIndex::new(1, 0), Coordinate::new(1, 1), true);

        let canvas = VectorCanvas::from_grid(&grid, border, 227).unwrap();
        let side = canvas.side();

        let white: Vec<&FilledRect> = canvas
            .rects()
            .iter()
            .filter(|r| r.fill == Fill::White)
            .collect();
        assert_eq!(white.len(), 1);

        let rect = white.first().copied().copied().unwrap();
        assert_eq!(rect.x, canvas_offset(size, border, 0, 1));
        assert_eq!(rect.y, side - 1 - canvas_offset(size, border, 1, 1));
        assert_eq!((rect.width, rect.height), (1, 1));

        // Top-left pixel sits just below the top border
        assert!(canvas.rects().iter().any(|r| r.x == 1 && r.y == side - 2));
    }

    #[test]
    fn test_every_rect_is_inside_canvas() {
        let canvas = VectorCanvas::from_grid(&PixelGrid::new(4), 3, 0).unwrap();
        let side = canvas.side();
        for rect in canvas.rects() {
            assert!(rect.x + rect.width <= side);
            assert!(rect.y + rect.height <= side);
        }
    }

    #[test]
    fn test_fill_levels() {
        assert!(Fill::Black.level().abs() < f64::EPSILON);
        assert!((Fill::White.level() - 1.0).abs() < f64::EPSILON);
        assert!((Fill::Gray(255).level() - 1.0).abs() < f64::EPSILON);
        assert!((Fill::Gray(51).level() - 0.2).abs() < 1e-12);
    }
}
