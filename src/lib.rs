//! Edge-matching reconstruction of scrambled square pixel tiles
//!
//! Rebuilds a single coherent image from unordered, arbitrarily rotated and
//! reflected square tiles by comparing boundary pixel sequences, then searches
//! the assembled image across all eight orientations for a fixed sparse motif.

#![forbid(unsafe_code)]

/// Edge matching, tile assembly, motif scanning, and the end-to-end pipeline
pub mod algorithm;
/// Input parsing, result rendering, and error handling
pub mod io;
/// Tile data structures and orientation transforms
pub mod spatial;

pub use io::error::{Result, SolverError};
