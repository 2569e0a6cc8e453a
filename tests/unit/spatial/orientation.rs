//! Tests for grid, tile, and whole-image orientation transforms

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use tilestitch::spatial::orientation::{
        ImageOrientation, flip_horizontal, flip_tile_horizontal, flip_tile_vertical,
        flip_vertical, rotate_clockwise, rotate_tile_clockwise,
    };
    use tilestitch::spatial::tile::{Side, Tile, derive_edges};

    fn grid_from(rows: &[&str]) -> Array2<bool> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut grid = Array2::from_elem((height, width), false);
        for (r, row) in rows.iter().enumerate() {
            for (c, character) in row.chars().enumerate() {
                grid[(r, c)] = character == '#';
            }
        }
        grid
    }

    #[test]
    fn test_rotate_clockwise_mapping() {
        let grid = grid_from(&["##.", "...", "#.."]);

        // [[a b c] [d e f] [g h i]] rotates to [[g d a] [h e b] [i f c]]
        assert_eq!(rotate_clockwise(&grid), grid_from(&["#.#", "..#", "..."]));
    }

    #[test]
    fn test_flip_mappings() {
        let grid = grid_from(&["##.", "...", "#.."]);

        assert_eq!(flip_horizontal(&grid), grid_from(&[".##", "...", "..#"]));
        assert_eq!(flip_vertical(&grid), grid_from(&["#..", "...", "##."]));
    }

    #[test]
    fn test_four_rotations_restore_tile() {
        let original = Tile::from_grid(11, grid_from(&["##..", ".#.#", "...#", "#.##"]));
        let mut tile = original.clone();

        for turn in 1..=4 {
            rotate_tile_clockwise(&mut tile);
            if turn < 4 {
                assert_ne!(tile.grid, original.grid, "turn {turn} must change the grid");
            }
        }
        assert_eq!(tile.grid, original.grid);
        assert_eq!(tile.edges, original.edges);
    }

    #[test]
    fn test_double_flips_restore_tile() {
        let original = Tile::from_grid(12, grid_from(&["##..", ".#.#", "...#", "#.##"]));

        let mut tile = original.clone();
        flip_tile_horizontal(&mut tile);
        assert_ne!(tile.grid, original.grid);
        flip_tile_horizontal(&mut tile);
        assert_eq!(tile.grid, original.grid);
        assert_eq!(tile.edges, original.edges);

        let mut tile = original.clone();
        flip_tile_vertical(&mut tile);
        flip_tile_vertical(&mut tile);
        assert_eq!(tile.grid, original.grid);
        assert_eq!(tile.edges, original.edges);
    }

    // Transforms must keep the cached edge sequences equal to what a fresh
    // derivation from the reoriented grid would produce
    #[test]
    fn test_edges_stay_consistent_with_grid() {
        let mut tile = Tile::from_grid(13, grid_from(&["#.#.", "..##", "#...", ".##."]));

        rotate_tile_clockwise(&mut tile);
        assert_eq!(tile.edges, derive_edges(&tile.grid));
        flip_tile_horizontal(&mut tile);
        assert_eq!(tile.edges, derive_edges(&tile.grid));
        rotate_tile_clockwise(&mut tile);
        flip_tile_vertical(&mut tile);
        assert_eq!(tile.edges, derive_edges(&tile.grid));
    }

    #[test]
    fn test_rotation_cycles_edge_slots() {
        let mut tile = Tile::from_grid(14, grid_from(&["#..", "...", "..."]));
        let top_before = tile.edge(Side::Top).pixels.clone();

        rotate_tile_clockwise(&mut tile);
        assert_eq!(
            tile.edge(Side::Right).pixels,
            top_before,
            "the top edge must move to the right slot unchanged"
        );
    }

    #[test]
    fn test_image_orientations_are_distinct() {
        let grid = grid_from(&["##..", ".#.#", "...#", "#.##"]);

        let oriented: Vec<Array2<bool>> = ImageOrientation::ALL
            .iter()
            .map(|orientation| orientation.apply(&grid))
            .collect();
        for (i, a) in oriented.iter().enumerate() {
            for (j, b) in oriented.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "orientations {i} and {j} must differ");
                }
            }
        }
        assert_eq!(
            oriented.first(),
            Some(&grid),
            "the first orientation is the identity"
        );
    }
}
