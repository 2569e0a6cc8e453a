//! Shared fixtures: a scrambled 2x2 tile set with unique boundary sequences
//!
//! Tiles 101 through 104 form a 2x2 arrangement (101 top-left, 102 top-right,
//! 103 bottom-left, 104 bottom-right in the unscrambled frame). The blocks
//! below are shuffled and reoriented, so matching and assembly have real work
//! to do.

/// Four scrambled 8x8 tiles forming one 2x2 puzzle
pub const QUAD: &str = r"
Tile 103:
##.#...#
..#..#..
#...#..#
#.#...#.
##..#...
...#..##
##...#.#
##..#..#

Tile 101:
##.....#
##...#.#
...#..##
##..#...
#.#...#.
....#...
..#..#..
##..#..#

Tile 104:
###..#.#
##.#...#
....#.#.
..#....#
#..#.#..
##....##
..#.#...
###.##.#

Tile 102:
###.#..#
..#.#...
##....##
...#.#.#
..#.....
....#.#.
##.#...#
###....#
";

/// Border-stripped master interior of [`QUAD`] in the unscrambled frame
///
/// Assembly reproduces this up to one of the eight global symmetries.
pub const QUAD_INTERIOR: &str = r"
#...#.#...#.
..#..#..#..#
#..#..#..#..
.#...#.#...#
...#.....#..
.#..#..#..#.
#...#.#...#.
..#..#..#..#
#..#..#..#..
.#...#.#...#
...#.....#..
.#..#..#..#.
";

/// Product of the four corner identifiers of [`QUAD`]
pub const QUAD_PRODUCT: u64 = 110_355_024;

/// Set-pixel count of [`QUAD_INTERIOR`]
pub const QUAD_SET_PIXELS: u32 = 44;
