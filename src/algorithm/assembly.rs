//! Corner-anchored assembly of matched tiles into one combined image
//!
//! Assembly walks the match graph row by row: an arbitrary corner is rotated
//! into the top-left position, each row is extended by following right-edge
//! links, and each new row starts below the previous row's first tile. Every
//! placed tile is reoriented in place so its shared edge faces the already
//! placed neighbor, which takes at most three rotations and one flip.

use crate::algorithm::matching::{MatchKind, edges_match};
use crate::io::error::AssemblyError;
use crate::spatial::orientation::{
    flip_tile_horizontal, flip_tile_vertical, rotate_tile_clockwise,
};
use crate::spatial::tile::{Side, Tile, TileSet};
use ndarray::Array2;

/// The combined image along with the identifiers of the four corner tiles
#[derive(Debug, Clone)]
pub struct AssembledImage {
    /// Border-stripped tile interiors stitched into one grid
    pub pixels: Array2<bool>,
    /// Identifiers of the corner tiles, in arena order
    pub corner_ids: [u64; 4],
}

impl AssembledImage {
    /// Product of the four corner identifiers
    ///
    /// Identifiers are small, but their product overflows 32 bits, so it is
    /// computed in `u64`.
    pub fn corner_product(&self) -> u64 {
        self.corner_ids.iter().product()
    }
}

/// Assemble a matched tile set into a single image
///
/// Tiles are mutated in place and end up in their final placement
/// orientation. The lowest-index corner anchors the walk, so repeated runs
/// on the same input produce identical output.
///
/// # Errors
///
/// Returns an [`AssemblyError`] when the match graph is not a consistent
/// square arrangement: a non-square tile count, a corner count other than
/// four, a seam that fails to align, a tile reached twice, or a row that
/// ends on the wrong tile.
pub fn assemble(set: &mut TileSet) -> Result<AssembledImage, AssemblyError> {
    let tile_count = set.len();
    let columns = tile_count.isqrt();
    if tile_count == 0 || columns * columns != tile_count {
        return Err(AssemblyError::NonSquareCount { count: tile_count });
    }

    let corners = set.corner_indices();
    if corners.len() != 4 {
        return Err(AssemblyError::CornerCount {
            found: corners.len(),
        });
    }
    let mut corner_ids = [0_u64; 4];
    for (slot, index) in corners.iter().enumerate().take(4) {
        if let Some(id) = corner_ids.get_mut(slot) {
            *id = set.tiles.get(*index).map_or(0, |tile| tile.id);
        }
    }

    let origin = corners.first().copied().unwrap_or_default();
    orient_origin(set, origin)?;

    let interior = set.tile_size.saturating_sub(2);
    let image_side = columns * interior;
    let mut pixels = Array2::from_elem((image_side, image_side), false);
    let mut placed = vec![false; tile_count];

    let mut row_start = origin;
    for row in 0..columns {
        let mut current = row_start;
        for column in 0..columns {
            if placed.get(current).copied().unwrap_or(false) {
                return Err(AssemblyError::RepeatedTile {
                    tile: tile_id(set, current),
                });
            }
            if let Some(flag) = placed.get_mut(current) {
                *flag = true;
            }
            if let Some(tile) = set.tiles.get(current) {
                copy_interior(tile, &mut pixels, row, column, interior);
            }
            if column + 1 < columns {
                current = attach(set, current, Side::Right)?;
            }
        }
        // The row must end on the outer border.
        if set
            .tiles
            .get(current)
            .is_some_and(|tile| tile.edge(Side::Right).neighbor.is_some())
        {
            return Err(AssemblyError::TrailingNeighbor {
                tile: tile_id(set, current),
            });
        }
        if row + 1 < columns {
            row_start = next_row_start(set, row_start)?;
        }
    }

    // So must the final row.
    if set
        .tiles
        .get(row_start)
        .is_some_and(|tile| tile.edge(Side::Bottom).neighbor.is_some())
    {
        return Err(AssemblyError::TrailingNeighbor {
            tile: tile_id(set, row_start),
        });
    }

    Ok(AssembledImage { pixels, corner_ids })
}

fn tile_id(set: &TileSet, index: usize) -> u64 {
    set.tiles.get(index).map_or(0, |tile| tile.id)
}

// A corner's two unmatched edges are adjacent, so exactly one of the four
// rotations puts them at top and left.
fn orient_origin(set: &mut TileSet, origin: usize) -> Result<(), AssemblyError> {
    for _ in 0..4 {
        let aligned = set.tiles.get(origin).is_some_and(|tile| {
            tile.edge(Side::Top).neighbor.is_none() && tile.edge(Side::Left).neighbor.is_none()
        });
        if aligned {
            return Ok(());
        }
        if let Some(tile) = set.tiles.get_mut(origin) {
            rotate_tile_clockwise(tile);
        }
    }
    Err(AssemblyError::UnalignableCorner {
        tile: tile_id(set, origin),
    })
}

/// Follow the link at `side` of `current` and orient the linked tile
///
/// The linked tile is rotated until the shared edge occupies the slot facing
/// `current`, then flipped when the two raw sequences match without reversal,
/// which marks a mirror-image seam.
fn attach(set: &mut TileSet, current: usize, side: Side) -> Result<usize, AssemblyError> {
    let current_id = tile_id(set, current);
    let (next, own_sequence) = match set.tiles.get(current) {
        Some(tile) => {
            let edge = tile.edge(side);
            (edge.neighbor, edge.pixels.clone())
        }
        None => (None, bitvec::vec::BitVec::new()),
    };
    let Some(next) = next else {
        return Err(AssemblyError::OpenSeam { tile: current_id });
    };

    let target = side.opposite();
    let linked = set
        .tiles
        .get(next)
        .and_then(|tile| tile.side_linked_to(current));
    let Some(linked) = linked else {
        return Err(AssemblyError::MissingBackLink {
            tile: current_id,
            neighbor: tile_id(set, next),
        });
    };

    let turns = linked.turns_to(target);
    if let Some(tile) = set.tiles.get_mut(next) {
        for _ in 0..turns {
            rotate_tile_clockwise(tile);
        }
        match edges_match(&tile.edge(target).pixels, &own_sequence) {
            Some(MatchKind::Direct) => {
                if target == Side::Left {
                    flip_tile_vertical(tile);
                } else {
                    flip_tile_horizontal(tile);
                }
            }
            Some(MatchKind::Reversed) => {}
            None => {
                return Err(AssemblyError::SeamMismatch {
                    first: current_id,
                    second: tile.id,
                });
            }
        }
    }
    Ok(next)
}

// Step below the row's first tile; the new row start must sit on the left
// border, or the match graph is inconsistent.
fn next_row_start(set: &mut TileSet, row_start: usize) -> Result<usize, AssemblyError> {
    let next_start = attach(set, row_start, Side::Bottom)?;
    let on_border = set
        .tiles
        .get(next_start)
        .is_some_and(|tile| tile.edge(Side::Left).neighbor.is_none());
    if !on_border {
        return Err(AssemblyError::RowStartNotBorder {
            tile: tile_id(set, next_start),
        });
    }
    Ok(next_start)
}

// Copy the border-stripped interior into the image cell at (row, column).
fn copy_interior(
    tile: &Tile,
    pixels: &mut Array2<bool>,
    row: usize,
    column: usize,
    interior: usize,
) {
    let base_row = row * interior;
    let base_column = column * interior;
    for r in 0..interior {
        for c in 0..interior {
            let value = tile.grid.get((r + 1, c + 1)).copied().unwrap_or(false);
            if let Some(slot) = pixels.get_mut((base_row + r, base_column + c)) {
                *slot = value;
            }
        }
    }
}
