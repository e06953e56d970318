mod tests {
    use flamewick::field::HeatField;

    #[test]
    fn test_level_layout_with_partial_top_row() {
        let field = HeatField::<60>::new(8);
        assert_eq!(field.level_width(), 8);
        assert_eq!(field.level_count(), 8);
        for level in 0..7 {
            assert_eq!(field.width_of(level), 8);
        }
        // 60 = 7 * 8 + 4: the top row holds the remainder.
        assert_eq!(field.width_of(7), 4);
    }

    #[test]
    fn test_level_layout_exact_multiple() {
        let field = HeatField::<56>::new(7);
        assert_eq!(field.level_count(), 8);
        for level in 0..8 {
            assert_eq!(field.width_of(level), 7);
        }
    }

    #[test]
    fn test_index_of() {
        let field = HeatField::<60>::new(8);
        assert_eq!(field.index_of(0, 0), 0);
        assert_eq!(field.index_of(2, 0), 16);
        assert_eq!(field.index_of(2, 7), 23);
        assert_eq!(field.index_of(7, 3), 59);
    }

    #[test]
    fn test_lateral_wraps_within_the_row() {
        let field = HeatField::<60>::new(8);
        // Left of a row's first cell is the last cell of the same row.
        assert_eq!(field.lateral(2, 0, -1), field.index_of(2, 7));
        // Right of a row's last cell is the first cell of the same row.
        assert_eq!(field.lateral(2, 7, 1), field.index_of(2, 0));
        // Interior cells are plain neighbors.
        assert_eq!(field.lateral(2, 3, -1), field.index_of(2, 2));
        assert_eq!(field.lateral(2, 3, 1), field.index_of(2, 4));
    }

    #[test]
    fn test_lateral_never_crosses_levels() {
        let field = HeatField::<60>::new(8);
        // One past the end of level 1 wraps back to level 1's start,
        // not into level 2.
        assert_eq!(field.lateral(1, 7, 1), field.index_of(1, 0));
        assert_eq!(field.lateral(2, 0, -1), field.index_of(2, 7));
        assert_ne!(field.lateral(1, 7, 1), field.index_of(2, 0));
    }

    #[test]
    fn test_partial_top_row_wraps_within_its_own_width() {
        let field = HeatField::<60>::new(8);
        assert_eq!(field.lateral(7, 0, -1), field.index_of(7, 3));
        assert_eq!(field.lateral(7, 3, 1), field.index_of(7, 0));
    }

    #[test]
    fn test_seed_base_covers_the_bottom_two_levels() {
        let mut field = HeatField::<60>::new(8);
        field.seed_base(0x20);
        for (i, cell) in field.cells().iter().enumerate() {
            if i < 16 {
                assert_eq!(*cell, 0x20);
            } else {
                assert_eq!(*cell, 0);
            }
        }
    }

    #[test]
    fn test_floor_base_raises_only_cold_base_cells() {
        let mut field = HeatField::<60>::new(8);
        field.cells_mut()[0] = 0x05;
        field.cells_mut()[10] = 0x40;
        field.cells_mut()[30] = 0x02;
        field.floor_base(0x10);
        assert_eq!(field.cells()[0], 0x10);
        assert_eq!(field.cells()[10], 0x40);
        // Cells above the base levels are untouched.
        assert_eq!(field.cells()[30], 0x02);
    }

    #[test]
    fn test_fill_and_clear() {
        let mut field = HeatField::<60>::new(8);
        field.fill(0x80);
        assert!(field.cells().iter().all(|&cell| cell == 0x80));
        field.clear();
        assert!(field.cells().iter().all(|&cell| cell == 0));
    }
}
