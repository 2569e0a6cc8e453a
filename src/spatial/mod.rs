//! Spatial data structures for tiles and their orientations
//!
//! This module contains the tile-level building blocks:
//! - The tile model with its four clockwise boundary edges
//! - The arena holding every tile of one puzzle
//! - Rotation and reflection transforms for grids, tiles, and whole images

/// Rotation and reflection transforms
pub mod orientation;
/// Tile model, edge derivation, and the tile arena
pub mod tile;

pub use tile::TileSet;
