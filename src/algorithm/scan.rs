//! Motif search across the eight orientations of the combined image
//!
//! The motif is a sparse set of pixel offsets that must all be set for a
//! placement to count. A correctly assembled image contains the motif in
//! exactly one of its eight orientations, so the scan stops at the first
//! orientation that yields any occurrence.

use crate::io::configuration::{MOTIF_MASK, SET_MARKER};
use crate::io::error::FormatError;
use crate::spatial::orientation::ImageOrientation;
use ndarray::Array2;

/// Sparse pixel pattern searched for in the combined image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motif {
    offsets: Vec<(usize, usize)>,
    height: usize,
    width: usize,
}

impl Motif {
    /// Parse a motif from a mask string
    ///
    /// `#` marks a required set pixel; every other character is padding.
    /// The bounding box is the tightest rectangle containing all marks.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::EmptyMotif`] when the mask contains no marks.
    pub fn from_mask(mask: &str) -> Result<Self, FormatError> {
        let mut offsets = Vec::new();
        for (row, line) in mask.lines().enumerate() {
            for (column, character) in line.chars().enumerate() {
                if character == SET_MARKER {
                    offsets.push((row, column));
                }
            }
        }
        if offsets.is_empty() {
            return Err(FormatError::EmptyMotif);
        }
        let height = offsets.iter().map(|(row, _)| row + 1).max().unwrap_or(0);
        let width = offsets.iter().map(|(_, column)| column + 1).max().unwrap_or(0);
        Ok(Self {
            offsets,
            height,
            width,
        })
    }

    /// The built-in motif
    ///
    /// # Errors
    ///
    /// Propagates the mask parse error; the built-in mask is well-formed.
    pub fn canonical() -> Result<Self, FormatError> {
        Self::from_mask(MOTIF_MASK)
    }

    /// Required offsets relative to a placement's top-left corner
    pub fn offsets(&self) -> &[(usize, usize)] {
        &self.offsets
    }

    /// Bounding-box height
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Bounding-box width
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Pixels a single occurrence covers
    pub fn pixel_count(&self) -> usize {
        self.offsets.len()
    }
}

/// Classification of one combined-image pixel after scanning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPixel {
    /// Clear in the assembled image
    Clear,
    /// Set and claimed by no motif occurrence
    Rough,
    /// Set and claimed by a motif occurrence
    Motif,
}

/// Result of scanning the combined image for the motif
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Occurrences found in the winning orientation
    pub motif_count: usize,
    /// Set pixels claimed by no occurrence
    pub roughness: u32,
    /// Orientation in which occurrences were found, or `None` when the motif
    /// appears nowhere; a valid outcome, but one that usually signals an
    /// assembly defect upstream
    pub orientation: Option<ImageOrientation>,
    /// Pixel classification in the winning orientation's frame (the original
    /// frame when nothing was found)
    pub annotated: Array2<ScanPixel>,
}

/// Search all eight orientations for the motif and count rough pixels
///
/// Orientations are tried in [`ImageOrientation::ALL`] order, stopping at
/// the first with at least one occurrence. Within an orientation the scan
/// proceeds top to bottom, left to right, and claims pixels the moment a
/// placement matches, so a later overlapping placement can fail on a pixel
/// an earlier match already claimed.
pub fn scan_image(image: &Array2<bool>, motif: &Motif) -> ScanOutcome {
    for orientation in ImageOrientation::ALL {
        let oriented = orientation.apply(image);
        let mut working = oriented.clone();
        let motif_count = claim_occurrences(&mut working, motif);
        if motif_count > 0 {
            let roughness = count_set(&working);
            return ScanOutcome {
                motif_count,
                roughness,
                orientation: Some(orientation),
                annotated: annotate(&oriented, &working),
            };
        }
    }
    ScanOutcome {
        motif_count: 0,
        roughness: count_set(image),
        orientation: None,
        annotated: annotate(image, image),
    }
}

// Claim every occurrence, clearing its pixels as soon as it matches.
fn claim_occurrences(working: &mut Array2<bool>, motif: &Motif) -> usize {
    let (rows, cols) = working.dim();
    if rows < motif.height() || cols < motif.width() {
        return 0;
    }
    let mut found = 0;
    for row in 0..=(rows - motif.height()) {
        for column in 0..=(cols - motif.width()) {
            let hit = motif.offsets().iter().all(|&(dr, dc)| {
                working.get((row + dr, column + dc)).copied().unwrap_or(false)
            });
            if hit {
                found += 1;
                for &(dr, dc) in motif.offsets() {
                    if let Some(pixel) = working.get_mut((row + dr, column + dc)) {
                        *pixel = false;
                    }
                }
            }
        }
    }
    found
}

// A pixel set before the scan but clear afterwards was claimed by the motif.
fn annotate(oriented: &Array2<bool>, working: &Array2<bool>) -> Array2<ScanPixel> {
    Array2::from_shape_fn(oriented.dim(), |position| {
        let was_set = oriented.get(position).copied().unwrap_or(false);
        let still_set = working.get(position).copied().unwrap_or(false);
        match (was_set, still_set) {
            (true, true) => ScanPixel::Rough,
            (true, false) => ScanPixel::Motif,
            (false, _) => ScanPixel::Clear,
        }
    })
}

/// Count of set pixels in a boolean grid
pub fn count_set(grid: &Array2<bool>) -> u32 {
    grid.iter().filter(|&&pixel| pixel).count() as u32
}
