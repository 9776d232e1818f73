//! Beam search over drag paths
//!
//! A drag carries one orb through a chain of orthogonal steps, swapping it with every
//! cell it enters. The search starts one state per cell and extends every retained
//! state by one step per depth, never stepping straight back onto the previous cell.
//! Only the `beam_width` highest-scoring states survive into the next depth, where
//! `score = combos * COMBO_WEIGHT + potential`.
//!
//! The answer is the single best state generated at any depth (most combos, then
//! highest score, earliest wins ties), so a route may stop well short of `max_depth`.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use orb_match_core::{count_combos, Grid, PlannerSettings};
use orb_match_types::{OrbSet, Position, COMBO_WEIGHT};

use crate::potential::potential;

/// A suggested drag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Cursor path; `path[0]` is the picked-up orb, each later cell is adjacent to the
    /// one before it
    pub path: Vec<Position>,
    /// Matches on the board once the drag ends (before any cascade)
    pub combos: u32,
    pub potential: u32,
    pub score: u32,
}

impl RoutePlan {
    pub fn start(&self) -> Option<Position> {
        self.path.first().copied()
    }

    /// Number of swaps the drag performs
    pub fn swaps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone)]
struct SearchState {
    board: Grid,
    cursor: Position,
    path: Vec<Position>,
    combos: u32,
    potential: u32,
}

impl SearchState {
    fn root(grid: &Grid, cursor: Position, potential: u32) -> Self {
        Self {
            board: grid.clone(),
            cursor,
            path: vec![cursor],
            combos: 0,
            potential,
        }
    }

    fn score(&self) -> u32 {
        self.combos * COMBO_WEIGHT + self.potential
    }

    /// Cell the cursor just came from
    fn previous(&self) -> Option<Position> {
        self.path.len().checked_sub(2).map(|i| self.path[i])
    }

    /// Child state after dragging the cursor onto `to`
    fn advance(&self, to: Position) -> Self {
        let mut board = self.board.clone();
        board.swap_cells(self.cursor, to);
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(to);
        Self {
            combos: count_combos(&board) as u32,
            potential: potential(&board),
            board,
            cursor: to,
            path,
        }
    }

    fn beats(&self, best: Option<&RoutePlan>) -> bool {
        match best {
            None => true,
            Some(b) => self.combos > b.combos || (self.combos == b.combos && self.score() > b.score),
        }
    }

    fn to_plan(&self) -> RoutePlan {
        RoutePlan {
            path: self.path.clone(),
            combos: self.combos,
            potential: self.potential,
            score: self.score(),
        }
    }
}

/// Keep the `beam_width` highest-scoring states; equal scores keep generation order
fn prune(states: &mut Vec<SearchState>, beam_width: usize) {
    if states.len() > beam_width {
        // Stable sort keeps generation order among equal scores.
        states.sort_by(|a, b| b.score().cmp(&a.score()));
        states.truncate(beam_width);
    }
}

/// Find the drag that yields the most matches
///
/// Returns `None` when no explored route produces a match. The live grid is only read;
/// every candidate works on its own copy.
pub fn plan(grid: &Grid, available: &OrbSet, settings: PlannerSettings) -> Option<RoutePlan> {
    if available.len() < 2 {
        debug!("planning with {} orb type(s); ranking falls back to potential", available.len());
    }
    let beam_width = settings.beam_width.max(1);

    let root_potential = potential(grid);
    let mut states: Vec<SearchState> = grid
        .positions()
        .map(|pos| SearchState::root(grid, pos, root_potential))
        .collect();
    let mut best: Option<RoutePlan> = None;

    for depth in 1..=settings.max_depth {
        prune(&mut states, beam_width);

        let mut next = Vec::with_capacity(states.len() * 3);
        for state in &states {
            let previous = state.previous();
            for neighbor in state.board.neighbors(state.cursor) {
                if Some(neighbor) == previous {
                    continue;
                }
                let child = state.advance(neighbor);
                if child.beats(best.as_ref()) {
                    best = Some(child.to_plan());
                }
                next.push(child);
            }
        }

        trace!(
            "depth {depth}: expanded {} states into {}, best combos {}",
            states.len(),
            next.len(),
            best.as_ref().map_or(0, |b| b.combos)
        );
        if next.is_empty() {
            break;
        }
        states = next;
    }

    match best {
        Some(route) if route.combos > 0 => {
            debug!(
                "route from {:?} with {} swaps: {} combos, potential {}",
                route.start(),
                route.swaps(),
                route.combos,
                route.potential
            );
            Some(route)
        }
        _ => {
            debug!("no route produces a match");
            None
        }
    }
}
