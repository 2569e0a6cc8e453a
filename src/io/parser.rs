//! Parsing labeled pixel blocks into the tile arena
//!
//! Input is a sequence of blocks separated by blank lines. Each block starts
//! with a `Tile <id>:` header and continues with an N×N grid of marker
//! characters. Every tile in one puzzle must share the same N.

use crate::io::configuration::{CLEAR_MARKER, MIN_TILE_SIZE, SET_MARKER};
use crate::io::error::FormatError;
use crate::spatial::tile::{Tile, TileSet};
use ndarray::Array2;

/// Parse puzzle text into a tile arena
///
/// # Errors
///
/// Returns a [`FormatError`] describing the first malformed block: a missing
/// or non-numeric header, a ragged or undersized grid, an unknown pixel
/// character, or a tile whose dimension differs from the first tile's.
pub fn parse_tile_set(input: &str) -> Result<TileSet, FormatError> {
    let mut tiles: Vec<Tile> = Vec::new();
    let mut tile_size = 0_usize;

    for block in input.split("\n\n").map(str::trim) {
        if block.is_empty() {
            continue;
        }
        let tile = parse_block(tiles.len(), block)?;
        if tiles.is_empty() {
            tile_size = tile.size();
        } else if tile.size() != tile_size {
            return Err(FormatError::TileSizeMismatch {
                tile: tile.id,
                expected: tile_size,
                found: tile.size(),
            });
        }
        tiles.push(tile);
    }

    if tiles.is_empty() {
        return Err(FormatError::EmptyInput);
    }
    Ok(TileSet::new(tiles, tile_size))
}

fn parse_block(block: usize, text: &str) -> Result<Tile, FormatError> {
    let mut lines = text.lines();
    let header = lines.next().unwrap_or_default();
    let id = parse_header(block, header)?;

    let rows: Vec<&str> = lines.collect();
    let size = rows.len();
    if size < MIN_TILE_SIZE {
        return Err(FormatError::TileTooSmall { tile: id, size });
    }

    let mut grid = Array2::from_elem((size, size), false);
    for (row_index, row) in rows.iter().enumerate() {
        let found = row.chars().count();
        if found != size {
            return Err(FormatError::RowLength {
                tile: id,
                row: row_index,
                expected: size,
                found,
            });
        }
        for (column, character) in row.chars().enumerate() {
            if character == SET_MARKER {
                if let Some(pixel) = grid.get_mut((row_index, column)) {
                    *pixel = true;
                }
            } else if character != CLEAR_MARKER {
                return Err(FormatError::UnknownPixel {
                    tile: id,
                    row: row_index,
                    column,
                    character,
                });
            }
        }
    }

    Ok(Tile::from_grid(id, grid))
}

// Headers read `Tile <positive integer>:`.
fn parse_header(block: usize, header: &str) -> Result<u64, FormatError> {
    let token = header
        .trim()
        .strip_prefix("Tile ")
        .and_then(|rest| rest.strip_suffix(':'));
    let Some(raw) = token else {
        return Err(FormatError::MissingHeader { block });
    };
    match raw.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(FormatError::InvalidIdentifier {
            block,
            token: raw.to_string(),
        }),
    }
}
