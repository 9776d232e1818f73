//! Match detection
//!
//! A match is a maximal run of three or more same-typed orbs in one row or column.
//! Rows are scanned left to right, then columns top to bottom; a run of length `k`
//! yields exactly one match of length `k`. Empty cells never start or extend a run.
//!
//! A cell may belong to one horizontal and one vertical match at once (an L or T
//! shape). The two lines stay separate matches because each line is its own combo.

use serde::Serialize;

use crate::grid::Grid;
use crate::types::{OrbType, Position, MIN_MATCH_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One run of same-typed orbs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Match {
    pub orb: OrbType,
    pub orientation: Orientation,
    /// Contiguous positions, left to right or top to bottom
    pub positions: Vec<Position>,
}

impl Match {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// All matches found in one detection pass
pub type MatchSet = Vec<Match>;

/// Walk every maximal run in both directions, calling `on_run` for runs of
/// length >= 3 with `(orb, orientation, start, len)`
fn scan_runs<F>(grid: &Grid, mut on_run: F)
where
    F: FnMut(OrbType, Orientation, Position, usize),
{
    let (rows, cols) = (grid.rows(), grid.cols());

    for r in 0..rows {
        let mut c = 0;
        while c < cols {
            let Some(orb) = grid.orb(Position::new(r, c)) else {
                c += 1;
                continue;
            };
            let mut end = c + 1;
            while end < cols && grid.orb(Position::new(r, end)) == Some(orb) {
                end += 1;
            }
            if end - c >= MIN_MATCH_LEN {
                on_run(orb, Orientation::Horizontal, Position::new(r, c), end - c);
            }
            c = end;
        }
    }

    for c in 0..cols {
        let mut r = 0;
        while r < rows {
            let Some(orb) = grid.orb(Position::new(r, c)) else {
                r += 1;
                continue;
            };
            let mut end = r + 1;
            while end < rows && grid.orb(Position::new(end, c)) == Some(orb) {
                end += 1;
            }
            if end - r >= MIN_MATCH_LEN {
                on_run(orb, Orientation::Vertical, Position::new(r, c), end - r);
            }
            r = end;
        }
    }
}

/// Find every match on the grid, horizontal matches first
pub fn detect(grid: &Grid) -> MatchSet {
    let mut matches = Vec::new();
    scan_runs(grid, |orb, orientation, start, len| {
        let positions = (0..len)
            .map(|i| match orientation {
                Orientation::Horizontal => Position::new(start.row, start.col + i),
                Orientation::Vertical => Position::new(start.row + i, start.col),
            })
            .collect();
        matches.push(Match {
            orb,
            orientation,
            positions,
        });
    });
    matches
}

/// Number of matches on the grid, equal to `detect(grid).len()` without allocating
#[inline]
pub fn count_combos(grid: &Grid) -> usize {
    let mut count = 0;
    scan_runs(grid, |_, _, _, _| count += 1);
    count
}

pub fn has_matches(grid: &Grid) -> bool {
    count_combos(grid) > 0
}
