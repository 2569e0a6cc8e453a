//! End-to-end reconstruction: parse, match, assemble, scan

use crate::algorithm::assembly::{self, AssembledImage};
use crate::algorithm::matching;
use crate::algorithm::scan::{self, Motif, ScanOutcome};
use crate::io::error::Result;
use crate::io::parser;
use crate::spatial::tile::TileSet;

/// Scalar results of one full reconstruction run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    /// Product of the four corner tile identifiers
    pub corner_product: u64,
    /// Motif occurrences in the winning orientation
    pub motif_count: usize,
    /// Set pixels that belong to no motif occurrence
    pub roughness: u32,
}

/// A fully reconstructed puzzle
#[derive(Debug, Clone)]
pub struct Reconstruction {
    /// Tile arena in final placement orientation
    pub tiles: TileSet,
    /// Combined image and corner identifiers
    pub image: AssembledImage,
    /// Motif scan of the combined image
    pub scan: ScanOutcome,
}

impl Reconstruction {
    /// Scalar answers for this reconstruction
    pub fn solution(&self) -> Solution {
        Solution {
            corner_product: self.image.corner_product(),
            motif_count: self.scan.motif_count,
            roughness: self.scan.roughness,
        }
    }
}

/// Run the full pipeline on puzzle text with the built-in motif
///
/// # Errors
///
/// Returns a [`crate::SolverError`] wrapping the first parse or assembly
/// failure.
pub fn reconstruct(input: &str) -> Result<Reconstruction> {
    let motif = Motif::canonical()?;
    reconstruct_with_motif(input, &motif)
}

/// Run the full pipeline with a caller-supplied motif
///
/// # Errors
///
/// Returns a [`crate::SolverError`] wrapping the first parse or assembly
/// failure. An image without the motif is not an error; see
/// [`ScanOutcome::orientation`].
pub fn reconstruct_with_motif(input: &str, motif: &Motif) -> Result<Reconstruction> {
    let mut tiles = parser::parse_tile_set(input)?;
    matching::link_edges(&mut tiles)?;
    let image = assembly::assemble(&mut tiles)?;
    let scan = scan::scan_image(&image.pixels, motif);
    Ok(Reconstruction { tiles, image, scan })
}

/// Convenience wrapper returning only the scalar answers
///
/// # Errors
///
/// Same failure modes as [`reconstruct`].
pub fn solve(input: &str) -> Result<Solution> {
    reconstruct(input).map(|reconstruction| reconstruction.solution())
}
