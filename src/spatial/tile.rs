//! Tile model: pixel grids, clockwise boundary edges, and the tile arena
//!
//! Tiles live in a [`TileSet`] arena and are addressed by stable index.
//! Matched edges carry the arena index of the adjacent tile, so the match
//! graph is pure lookup data and survives in-place reorientation; the
//! neighbor's current side is recovered with [`Tile::side_linked_to`].

use bitvec::vec::BitVec;
use ndarray::Array2;

/// One side of a tile, in clockwise slot order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Topmost row of the tile
    Top,
    /// Rightmost column of the tile
    Right,
    /// Bottommost row of the tile
    Bottom,
    /// Leftmost column of the tile
    Left,
}

impl Side {
    /// All four sides in slot order
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Slot index into a tile's edge array
    pub const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 3,
        }
    }

    /// Side facing this one on an adjacent tile
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Clockwise tile rotations that move an edge from this slot to `target`
    ///
    /// One rotation carries an edge to the next clockwise slot: top to right,
    /// right to bottom, bottom to left, left to top.
    pub const fn turns_to(self, target: Self) -> usize {
        (target.index() + 4 - self.index()) % 4
    }
}

/// A single boundary edge of a tile
///
/// The pixel sequence is a cached view of the owning tile's boundary and is
/// kept consistent with the grid by the orientation transforms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Boundary pixels read clockwise around the owning tile
    pub pixels: BitVec,
    /// Arena index of the tile sharing this boundary, if any
    ///
    /// `None` means the edge lies on the outer border of the final image.
    pub neighbor: Option<usize>,
}

/// One square tile: identifier, pixel grid, and four boundary edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Identifier from the input block header
    pub id: u64,
    /// Square grid of set and clear pixels
    pub grid: Array2<bool>,
    /// Edge slots in [`Side`] order: top, right, bottom, left
    pub edges: [Edge; 4],
}

impl Tile {
    /// Build a tile from its pixel grid, deriving the four clockwise edges
    pub fn from_grid(id: u64, grid: Array2<bool>) -> Self {
        let edges = derive_edges(&grid);
        Self { id, grid, edges }
    }

    /// Edge occupying the given slot
    pub const fn edge(&self, side: Side) -> &Edge {
        match side {
            Side::Top => &self.edges[0],
            Side::Right => &self.edges[1],
            Side::Bottom => &self.edges[2],
            Side::Left => &self.edges[3],
        }
    }

    /// Mutable edge occupying the given slot
    pub const fn edge_mut(&mut self, side: Side) -> &mut Edge {
        match side {
            Side::Top => &mut self.edges[0],
            Side::Right => &mut self.edges[1],
            Side::Bottom => &mut self.edges[2],
            Side::Left => &mut self.edges[3],
        }
    }

    /// Number of edges with no matched neighbor
    pub fn unmatched_edges(&self) -> usize {
        self.edges.iter().filter(|edge| edge.neighbor.is_none()).count()
    }

    /// A corner tile touches the outer border on exactly two sides
    pub fn is_corner(&self) -> bool {
        self.unmatched_edges() == 2
    }

    /// Side whose edge currently links back to the given arena index
    pub fn side_linked_to(&self, neighbor: usize) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|side| self.edge(*side).neighbor == Some(neighbor))
    }

    /// Tile dimension N
    pub fn size(&self) -> usize {
        self.grid.nrows()
    }
}

/// Derive the four clockwise boundary sequences from a pixel grid
///
/// Top reads left to right, right top to bottom, bottom right to left, and
/// left bottom to top. Two consistently oriented adjacent tiles therefore see
/// their shared boundary in opposite directions, which is why the matcher
/// accepts reversed equality.
pub fn derive_edges(grid: &Array2<bool>) -> [Edge; 4] {
    let n = grid.nrows();
    let mut top = BitVec::with_capacity(n);
    let mut right = BitVec::with_capacity(n);
    let mut bottom = BitVec::with_capacity(n);
    let mut left = BitVec::with_capacity(n);

    for i in 0..n {
        top.push(pixel(grid, 0, i));
        right.push(pixel(grid, i, n - 1));
        bottom.push(pixel(grid, n - 1, n - 1 - i));
        left.push(pixel(grid, n - 1 - i, 0));
    }

    [top, right, bottom, left].map(|pixels| Edge {
        pixels,
        neighbor: None,
    })
}

fn pixel(grid: &Array2<bool>, row: usize, column: usize) -> bool {
    grid.get((row, column)).copied().unwrap_or(false)
}

/// Arena of tiles addressed by stable index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSet {
    /// Tiles in input order; arena indices are positions in this vector
    pub tiles: Vec<Tile>,
    /// Tile dimension N shared by every tile in the set
    pub tile_size: usize,
}

impl TileSet {
    /// Build an arena from parsed tiles
    pub const fn new(tiles: Vec<Tile>, tile_size: usize) -> Self {
        Self { tiles, tile_size }
    }

    /// Number of tiles in the arena
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the arena holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Arena indices of all corner tiles, in arena order
    pub fn corner_indices(&self) -> Vec<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_corner())
            .map(|(index, _)| index)
            .collect()
    }
}
