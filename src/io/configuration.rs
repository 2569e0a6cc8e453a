//! Solver constants and CLI defaults

/// Marker character for a set pixel in puzzle input and motif masks
pub const SET_MARKER: char = '#';
/// Marker character for a clear pixel in puzzle input
pub const CLEAR_MARKER: char = '.';

/// Smallest tile dimension whose border strip leaves an interior
pub const MIN_TILE_SIZE: usize = 3;

/// Built-in motif searched for in the combined image
pub const MOTIF_MASK: &str = r"                  #
#    ##    ##    ###
 #  #  #  #  #  #   ";

// Output settings
/// Suffix added to rendered image filenames
pub const OUTPUT_SUFFIX: &str = "_assembled";
/// Side length in output pixels of one rendered image pixel
pub const RENDER_SCALE: u32 = 4;
/// RGBA fill for clear pixels
pub const CLEAR_COLOR: [u8; 4] = [16, 42, 74, 255];
/// RGBA fill for rough pixels (set, claimed by no motif occurrence)
pub const ROUGH_COLOR: [u8; 4] = [203, 219, 240, 255];
/// RGBA fill for motif pixels
pub const MOTIF_COLOR: [u8; 4] = [214, 69, 65, 255];
