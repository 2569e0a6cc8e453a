//! Error types for parsing, assembly, and the CLI surface

use std::fmt;
use std::path::PathBuf;

/// Malformed puzzle input
///
/// Not recoverable; the first malformed block fails the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Input contained no tile blocks
    EmptyInput,

    /// Block does not start with a `Tile <id>:` header
    MissingHeader {
        /// Zero-based position of the block in the input
        block: usize,
    },

    /// Header identifier is not a positive integer
    InvalidIdentifier {
        /// Zero-based position of the block in the input
        block: usize,
        /// The token that failed to parse
        token: String,
    },

    /// Tile too small for its border to be stripped
    TileTooSmall {
        /// Identifier of the offending tile
        tile: u64,
        /// Observed dimension
        size: usize,
    },

    /// Row length differs from the tile's row count
    RowLength {
        /// Identifier of the offending tile
        tile: u64,
        /// Zero-based row within the tile
        row: usize,
        /// Expected number of characters
        expected: usize,
        /// Observed number of characters
        found: usize,
    },

    /// Character is neither the set nor the clear marker
    UnknownPixel {
        /// Identifier of the offending tile
        tile: u64,
        /// Zero-based row within the tile
        row: usize,
        /// Zero-based column within the row
        column: usize,
        /// The offending character
        character: char,
    },

    /// Tile dimension differs from the rest of the set
    TileSizeMismatch {
        /// Identifier of the offending tile
        tile: u64,
        /// Dimension established by the first tile
        expected: usize,
        /// Observed dimension
        found: usize,
    },

    /// Motif mask contains no set-pixel marks
    EmptyMotif,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input contains no tile blocks"),
            Self::MissingHeader { block } => {
                write!(f, "Block {block} does not start with a 'Tile <id>:' header")
            }
            Self::InvalidIdentifier { block, token } => {
                write!(f, "Block {block} has a non-numeric identifier '{token}'")
            }
            Self::TileTooSmall { tile, size } => {
                write!(
                    f,
                    "Tile {tile} is {size}x{size}; stripping its border leaves no interior"
                )
            }
            Self::RowLength {
                tile,
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Tile {tile} row {row} has {found} characters, expected {expected}"
                )
            }
            Self::UnknownPixel {
                tile,
                row,
                column,
                character,
            } => {
                write!(
                    f,
                    "Tile {tile} has unknown pixel '{character}' at row {row}, column {column}"
                )
            }
            Self::TileSizeMismatch {
                tile,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Tile {tile} is {found}x{found}, but the set uses {expected}x{expected}"
                )
            }
            Self::EmptyMotif => write!(f, "Motif mask contains no set-pixel marks"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Edge matching produced a topology that cannot be assembled
///
/// Indicates an ambiguous, inconsistent, or non-square tile set. Not
/// recoverable; surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    /// Tile count is not a perfect square
    NonSquareCount {
        /// Observed tile count
        count: usize,
    },

    /// The matched set does not have exactly four corner tiles
    CornerCount {
        /// Observed number of tiles with exactly two unmatched edges
        found: usize,
    },

    /// Three or more edges share one boundary sequence
    AmbiguousEdge {
        /// Identifiers of the tiles owning the colliding edges
        tiles: Vec<u64>,
    },

    /// No rotation puts the corner's unmatched edges at top and left
    UnalignableCorner {
        /// Identifier of the corner tile
        tile: u64,
    },

    /// A row or column ended before the expected border
    OpenSeam {
        /// Identifier of the tile whose expected neighbor is missing
        tile: u64,
    },

    /// A linked tile carries no edge linking back
    MissingBackLink {
        /// Identifier of the tile holding the forward link
        tile: u64,
        /// Identifier of the tile missing the reverse link
        neighbor: u64,
    },

    /// Two linked edges no longer match after reorientation
    SeamMismatch {
        /// Identifier of the already placed tile
        first: u64,
        /// Identifier of the tile being placed
        second: u64,
    },

    /// A new row's first tile is not on the left border
    RowStartNotBorder {
        /// Identifier of the offending tile
        tile: u64,
    },

    /// The walk reached a tile that was already placed
    RepeatedTile {
        /// Identifier of the offending tile
        tile: u64,
    },

    /// A border tile unexpectedly links onward
    TrailingNeighbor {
        /// Identifier of the offending tile
        tile: u64,
    },
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonSquareCount { count } => {
                write!(f, "Tile count {count} is not a perfect square")
            }
            Self::CornerCount { found } => {
                write!(f, "Matched set has {found} corner tiles, expected 4")
            }
            Self::AmbiguousEdge { tiles } => {
                write!(f, "Edge sequence shared by more than two tiles: {tiles:?}")
            }
            Self::UnalignableCorner { tile } => {
                write!(f, "Corner tile {tile} has non-adjacent unmatched edges")
            }
            Self::OpenSeam { tile } => {
                write!(f, "Tile {tile} is missing an expected neighbor")
            }
            Self::MissingBackLink { tile, neighbor } => {
                write!(f, "Tile {neighbor} carries no link back to tile {tile}")
            }
            Self::SeamMismatch { first, second } => {
                write!(f, "Edges of tiles {first} and {second} no longer match")
            }
            Self::RowStartNotBorder { tile } => {
                write!(f, "Row-start tile {tile} has a matched left edge")
            }
            Self::RepeatedTile { tile } => {
                write!(f, "Tile {tile} was reached twice during placement")
            }
            Self::TrailingNeighbor { tile } => {
                write!(f, "Border tile {tile} unexpectedly links onward")
            }
        }
    }
}

impl std::error::Error for AssemblyError {}

/// Main error type for all solver operations
#[derive(Debug)]
pub enum SolverError {
    /// Malformed puzzle input
    Format(FormatError),

    /// Inconsistent tile topology
    Assembly(AssemblyError),

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Target path is not a puzzle file or directory
    InvalidTarget {
        /// Description of what is wrong with the target
        reason: String,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(source) => write!(f, "Invalid puzzle input: {source}"),
            Self::Assembly(source) => write!(f, "Assembly failed: {source}"),
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidTarget { reason } => write!(f, "Invalid target: {reason}"),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Format(source) => Some(source),
            Self::Assembly(source) => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::InvalidTarget { .. } => None,
        }
    }
}

impl From<FormatError> for SolverError {
    fn from(err: FormatError) -> Self {
        Self::Format(err)
    }
}

impl From<AssemblyError> for SolverError {
    fn from(err: AssemblyError) -> Self {
        Self::Assembly(err)
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;
