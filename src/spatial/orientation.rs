//! Rotation and reflection transforms for grids, tiles, and whole images
//!
//! Grid transforms are pure functions producing a new array. Tile transforms
//! additionally keep the four edge slots consistent with the reoriented grid:
//! rotation cycles the slots, reflections swap the mirrored pair, and every
//! reflection reverses all four sequences because the clockwise reading
//! direction inverts. Neighbor links travel with their edges throughout.

use crate::spatial::tile::{Side, Tile};
use ndarray::Array2;

/// Rotate a pixel grid 90 degrees clockwise
pub fn rotate_clockwise(grid: &Array2<bool>) -> Array2<bool> {
    let (rows, cols) = grid.dim();
    Array2::from_shape_fn((cols, rows), |(r, c)| {
        grid.get((rows - 1 - c, r)).copied().unwrap_or(false)
    })
}

/// Mirror a pixel grid about its vertical axis
pub fn flip_horizontal(grid: &Array2<bool>) -> Array2<bool> {
    let (rows, cols) = grid.dim();
    Array2::from_shape_fn((rows, cols), |(r, c)| {
        grid.get((r, cols - 1 - c)).copied().unwrap_or(false)
    })
}

/// Mirror a pixel grid about its horizontal axis
pub fn flip_vertical(grid: &Array2<bool>) -> Array2<bool> {
    let (rows, cols) = grid.dim();
    Array2::from_shape_fn((rows, cols), |(r, c)| {
        grid.get((rows - 1 - r, c)).copied().unwrap_or(false)
    })
}

/// Rotate a tile 90 degrees clockwise, cycling its edge slots
///
/// The clockwise reading direction is rotation-invariant, so every sequence
/// carries over unchanged: the left edge becomes the new top, the top becomes
/// the new right, and so on.
pub fn rotate_tile_clockwise(tile: &mut Tile) {
    tile.grid = rotate_clockwise(&tile.grid);
    tile.edges.rotate_right(1);
}

/// Mirror a tile about its vertical axis, swapping the left and right slots
pub fn flip_tile_horizontal(tile: &mut Tile) {
    tile.grid = flip_horizontal(&tile.grid);
    tile.edges.swap(Side::Left.index(), Side::Right.index());
    for edge in &mut tile.edges {
        edge.pixels.reverse();
    }
}

/// Mirror a tile about its horizontal axis, swapping the top and bottom slots
pub fn flip_tile_vertical(tile: &mut Tile) {
    tile.grid = flip_vertical(&tile.grid);
    tile.edges.swap(Side::Top.index(), Side::Bottom.index());
    for edge in &mut tile.edges {
        edge.pixels.reverse();
    }
}

/// One of the eight symmetries of a square image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageOrientation {
    /// Clockwise quarter turns applied first (0 through 3)
    pub quarter_turns: u8,
    /// Whether a horizontal flip follows the rotation
    pub flipped: bool,
}

impl ImageOrientation {
    /// All eight orientations in scan order: the four unflipped quarter
    /// turns, then the four flipped ones
    pub const ALL: [Self; 8] = [
        Self { quarter_turns: 0, flipped: false },
        Self { quarter_turns: 1, flipped: false },
        Self { quarter_turns: 2, flipped: false },
        Self { quarter_turns: 3, flipped: false },
        Self { quarter_turns: 0, flipped: true },
        Self { quarter_turns: 1, flipped: true },
        Self { quarter_turns: 2, flipped: true },
        Self { quarter_turns: 3, flipped: true },
    ];

    /// Apply this orientation to a grid
    pub fn apply(self, grid: &Array2<bool>) -> Array2<bool> {
        let mut oriented = grid.clone();
        for _ in 0..self.quarter_turns {
            oriented = rotate_clockwise(&oriented);
        }
        if self.flipped {
            oriented = flip_horizontal(&oriented);
        }
        oriented
    }
}
