//! Tests for pixel grid storage, panel ordering and partitions

#[cfg(test)]
mod tests {
    use alternando::spatial::grid::panel_coordinates;
    use alternando::spatial::{Coordinate, PanelIndex, PixelGrid};

    // Background depends on column parity only
    #[test]
    fn test_background_alternates_by_column() {
        assert!(!PanelIndex::new(0, 0).background());
        assert!(PanelIndex::new(0, 1).background());
        assert!(!PanelIndex::new(3, 2).background());
        assert!(PanelIndex::new(3, 5).background());
        assert!(PanelIndex::new(2, 1).foreground() != PanelIndex::new(2, 1).background());
    }

    // Predecessor steps back one column, wrapping to the previous row
    #[test]
    fn test_predecessor_in_raster_order() {
        let size = 4;
        assert_eq!(PanelIndex::new(0, 0).predecessor(size), None);
        assert_eq!(
            PanelIndex::new(0, 1).predecessor(size),
            Some(PanelIndex::new(0, 0))
        );
        assert_eq!(
            PanelIndex::new(2, 0).predecessor(size),
            Some(PanelIndex::new(1, 3))
        );
        assert_eq!(
            PanelIndex::new(2, 3).predecessor(size),
            Some(PanelIndex::new(2, 2))
        );
    }

    // Raster iteration visits columns fastest and matches ordinals
    #[test]
    fn test_raster_order_and_ordinals() {
        let size = 3;
        let panels: Vec<PanelIndex> = PanelIndex::raster(size).collect();
        assert_eq!(panels.len(), 9);
        assert_eq!(panels.get(1), Some(&PanelIndex::new(0, 1)));
        assert_eq!(panels.get(3), Some(&PanelIndex::new(1, 0)));
        for (position, panel) in panels.iter().enumerate() {
            assert_eq!(panel.ordinal(size), position);
        }
    }

    // Coordinates enumerate rows outer, columns inner
    #[test]
    fn test_panel_coordinates_order() {
        let coordinates: Vec<Coordinate> = panel_coordinates(2).collect();
        assert_eq!(
            coordinates,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 0),
                Coordinate::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_get_and_set_respect_bounds() {
        let mut grid = PixelGrid::new(3);
        let panel = PanelIndex::new(1, 2);

        assert!(grid.set(panel, Coordinate::new(2, 0), true));
        assert_eq!(grid.get(panel, Coordinate::new(2, 0)), Some(true));
        assert_eq!(grid.get(panel, Coordinate::new(0, 0)), Some(false));

        assert!(!grid.set(panel, Coordinate::new(3, 0), true));
        assert_eq!(grid.get(panel, Coordinate::new(0, 3)), None);
        assert_eq!(grid.get(PanelIndex::new(3, 0), Coordinate::new(0, 0)), None);
    }

    // Filling one panel leaves its neighbours untouched
    #[test]
    fn test_fill_panel_is_local() {
        let mut grid = PixelGrid::new(2);
        grid.fill_panel(PanelIndex::new(0, 1), true);

        let filled = grid.panel(PanelIndex::new(0, 1));
        assert!(filled.is_some_and(|view| view.iter().all(|&v| v)));

        let other = grid.panel(PanelIndex::new(1, 1));
        assert!(other.is_some_and(|view| view.iter().all(|&v| !v)));
        assert!(grid.panel(PanelIndex::new(2, 0)).is_none());
    }

    // Partition uses the panel's own background, in enumeration order
    #[test]
    fn test_partition_on_odd_column() {
        let mut grid = PixelGrid::new(2);
        let panel = PanelIndex::new(0, 1);
        grid.fill_panel(panel, true);
        grid.set(panel, Coordinate::new(1, 0), false);

        let partition = grid.partition(panel);
        assert_eq!(
            partition.empty,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 1),
            ]
        );
        assert_eq!(partition.full, vec![Coordinate::new(1, 0)]);
        assert_eq!(grid.foreground_count(panel), 1);
        assert_eq!(grid.foreground_positions(panel), vec![Coordinate::new(1, 0)]);
    }

    #[test]
    fn test_coordinate_within() {
        assert!(Coordinate::new(0, 0).within(1));
        assert!(Coordinate::new(4, 4).within(5));
        assert!(!Coordinate::new(5, 0).within(5));
        assert!(!Coordinate::new(0, 5).within(5));
    }
}
