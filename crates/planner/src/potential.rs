//! Near-match heuristic

use orb_match_core::Grid;
use orb_match_types::Position;

/// Number of horizontally or vertically adjacent same-type orb pairs
///
/// Used to rank boards with equal combo counts: more pairs means more runs are one
/// move away. Empty cells never pair.
pub fn potential(grid: &Grid) -> u32 {
    let mut pairs = 0;
    for pos in grid.positions() {
        let Some(orb) = grid.orb(pos) else { continue };
        let right = Position::new(pos.row, pos.col + 1);
        let down = Position::new(pos.row + 1, pos.col);
        if grid.orb(right) == Some(orb) {
            pairs += 1;
        }
        if grid.orb(down) == Some(orb) {
            pairs += 1;
        }
    }
    pairs
}
