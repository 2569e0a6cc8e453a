//! Edge matching: linking every pair of tiles that share a boundary
//!
//! Two edges match when their clockwise sequences are equal either directly
//! or after reversing one of them. A reversed match means the tiles are
//! already consistently oriented; a direct match means they are mirror images
//! along the seam and one must be flipped before placement.
//!
//! Rather than comparing every edge against every other, matching indexes
//! each edge under its canonical form, the lexicographically smaller of the
//! sequence and its reversal. Both readings of one physical boundary share a
//! canonical form, so every seam lands in a two-entry bucket and matching is
//! near-linear in the number of tiles.

use crate::io::error::AssemblyError;
use crate::spatial::tile::{Side, TileSet};
use bitvec::slice::BitSlice;
use bitvec::vec::BitVec;
use std::collections::HashMap;

/// How two edge sequences line up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Sequences are equal element-wise; the tiles are mirror images along
    /// the shared boundary and one must be flipped before placement
    Direct,
    /// Sequences are equal after reversing one; the tiles are consistently
    /// oriented
    Reversed,
}

/// Compare two edge sequences directly and reversed
///
/// A palindromic sequence satisfies both comparisons and reports
/// [`MatchKind::Reversed`], so the assembler leaves such seams unflipped.
pub fn edges_match(a: &BitSlice, b: &BitSlice) -> Option<MatchKind> {
    let mut reversed = b.to_bitvec();
    reversed.reverse();
    if a == reversed.as_bitslice() {
        return Some(MatchKind::Reversed);
    }
    if a == b {
        return Some(MatchKind::Direct);
    }
    None
}

/// Canonical form of an edge: the smaller of the sequence and its reversal
pub fn canonical_form(pixels: &BitSlice) -> BitVec {
    let forward = pixels.to_bitvec();
    let mut reversed = forward.clone();
    reversed.reverse();
    if reversed < forward { reversed } else { forward }
}

/// Link every pair of tiles that share a boundary
///
/// Edges left without a neighbor lie on the outer border. After linking, a
/// valid square arrangement has exactly four corner tiles (two unmatched
/// edges each); any other count makes assembly impossible.
///
/// # Errors
///
/// Returns [`AssemblyError::AmbiguousEdge`] when three or more edges share a
/// canonical form, and [`AssemblyError::CornerCount`] when the linked set
/// does not have exactly four corners.
pub fn link_edges(set: &mut TileSet) -> Result<(), AssemblyError> {
    let mut buckets: HashMap<BitVec, Vec<(usize, Side)>> = HashMap::new();
    for (index, tile) in set.tiles.iter().enumerate() {
        for side in Side::ALL {
            buckets
                .entry(canonical_form(&tile.edge(side).pixels))
                .or_default()
                .push((index, side));
        }
    }

    for owners in buckets.values() {
        match owners.as_slice() {
            [] | [_] => {}
            [(first_tile, first_side), (second_tile, second_side)] => {
                // A tile whose opposite edges mirror each other would pair
                // with itself; leave it unlinked rather than fabricate a seam.
                if first_tile == second_tile {
                    continue;
                }
                if let Some(tile) = set.tiles.get_mut(*first_tile) {
                    tile.edge_mut(*first_side).neighbor = Some(*second_tile);
                }
                if let Some(tile) = set.tiles.get_mut(*second_tile) {
                    tile.edge_mut(*second_side).neighbor = Some(*first_tile);
                }
            }
            many => {
                return Err(AssemblyError::AmbiguousEdge {
                    tiles: many
                        .iter()
                        .map(|(index, _)| set.tiles.get(*index).map_or(0, |tile| tile.id))
                        .collect(),
                });
            }
        }
    }

    let corners = set.corner_indices();
    if corners.len() != 4 {
        return Err(AssemblyError::CornerCount {
            found: corners.len(),
        });
    }
    Ok(())
}
