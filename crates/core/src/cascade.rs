//! Cascade resolution - clear, fall, refill until the board is stable
//!
//! Each pass:
//!
//! 1. Detect matches; stop when there are none and the board is full.
//! 2. Clear every matched cell (a cell shared by two matches is cleared once) and add
//!    the number of matches to the combo total.
//! 3. Apply gravity one row at a time until nothing moves.
//! 4. Refill every empty cell with a random orb from the available set.
//!
//! [`Cascade`] exposes every step as a [`CascadeEvent`] so an integration layer can
//! animate clearing and falling; [`resolve`] drives it to completion.

use log::{debug, warn};
use serde::Serialize;

use crate::error::{CoreError, Result};
use crate::grid::Grid;
use crate::matcher::{detect, MatchSet};
use crate::rng::OrbSource;
use crate::types::{OrbSet, Position, MAX_CASCADE_PASSES};

/// Final state of a resolved cascade
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CascadeResult {
    /// Total matches cleared over all passes
    pub combos: u32,
    /// Matches cleared in each pass, in order
    pub passes: Vec<u32>,
    /// Stable board: no empty cells, no matches
    pub grid: Grid,
}

/// One observable step of a cascade
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeEvent {
    /// Matched cells were emptied
    Cleared { matches: MatchSet },
    /// Every orb with an empty cell below it dropped one row
    Fell,
    /// Empty cells received new orbs
    Refilled { cells: usize },
}

/// Empty every cell covered by `matches`
///
/// Returns the number of cells cleared; shared cells count once.
pub fn clear_matches(grid: &mut Grid, matches: &MatchSet) -> usize {
    let mut cleared = 0;
    for pos in matches.iter().flat_map(|m| m.positions.iter()) {
        if grid.orb(*pos).is_some() {
            grid.set(*pos, None);
            cleared += 1;
        }
    }
    cleared
}

/// Single gravity tick: every orb sitting directly above an empty cell drops one row
///
/// Rows are processed bottom-up so an orb moves at most one row per tick.
/// Returns true if anything moved.
pub fn gravity_step(grid: &mut Grid) -> bool {
    let mut moved = false;
    for r in (0..grid.rows() - 1).rev() {
        for c in 0..grid.cols() {
            let above = Position::new(r, c);
            let below = Position::new(r + 1, c);
            if grid.orb(above).is_some() && grid.get(below) == Some(None) {
                grid.swap_cells(above, below);
                moved = true;
            }
        }
    }
    moved
}

/// Repeat [`gravity_step`] until stable
///
/// Returns the number of ticks that moved something. Afterwards every column has its
/// orbs compacted at the bottom in their original order.
pub fn apply_gravity(grid: &mut Grid) -> usize {
    let mut ticks = 0;
    while gravity_step(grid) {
        ticks += 1;
    }
    ticks
}

/// Fill every empty cell from `source`, returning how many were filled
///
/// Fails with `EmptyOrbSet` before touching the grid.
pub fn refill<S: OrbSource + ?Sized>(
    grid: &mut Grid,
    available: &OrbSet,
    source: &mut S,
) -> Result<usize> {
    if available.is_empty() {
        return Err(CoreError::EmptyOrbSet);
    }
    let mut filled = 0;
    // Column-major, top to bottom.
    for c in 0..grid.cols() {
        for r in 0..grid.rows() {
            let pos = Position::new(r, c);
            if grid.get(pos) == Some(None) {
                let orb = source.next_orb(available).ok_or(CoreError::EmptyOrbSet)?;
                grid.set(pos, Some(orb));
                filled += 1;
            }
        }
    }
    Ok(filled)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Detect,
    Fall,
    Refill,
    Done,
}

/// Step-wise cascade over an owned grid
///
/// Iterating yields one [`CascadeEvent`] per observable change; [`Cascade::grid`] shows
/// the board after the most recent event.
pub struct Cascade<'a, S: OrbSource + ?Sized> {
    grid: Grid,
    available: OrbSet,
    source: &'a mut S,
    phase: Phase,
    combos: u32,
    passes: Vec<u32>,
    limit: Option<u32>,
}

impl<'a, S: OrbSource + ?Sized> Cascade<'a, S> {
    /// Start a cascade on `grid`
    ///
    /// Fails fast with `EmptyOrbSet` before touching the grid. Passes are only capped
    /// (at `MAX_CASCADE_PASSES`) for a single orb type, where the board can never settle.
    pub fn new(grid: Grid, available: &OrbSet, source: &'a mut S) -> Result<Self> {
        if available.is_empty() {
            return Err(CoreError::EmptyOrbSet);
        }
        let limit = if available.len() < 2 {
            warn!("cascade with a single orb type cannot reach a stable board");
            Some(MAX_CASCADE_PASSES)
        } else {
            None
        };
        Ok(Self {
            grid,
            available: *available,
            source,
            phase: Phase::Detect,
            combos: 0,
            passes: Vec::new(),
            limit,
        })
    }

    /// Cap the number of passes, whatever the orb set
    pub fn with_pass_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn combos(&self) -> u32 {
        self.combos
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Advance by one event
    ///
    /// Returns `Ok(None)` once the board is stable and `CascadeLimit` if a pass cap is
    /// set and reached while the board still matches.
    pub fn step(&mut self) -> Result<Option<CascadeEvent>> {
        loop {
            match self.phase {
                Phase::Done => return Ok(None),
                Phase::Detect => {
                    let matches = detect(&self.grid);
                    if matches.is_empty() {
                        if !self.grid.is_full() {
                            // Holes without matches still settle and refill.
                            self.phase = Phase::Fall;
                            continue;
                        }
                        self.phase = Phase::Done;
                        debug!(
                            "cascade settled: {} combos over {} passes",
                            self.combos,
                            self.passes.len()
                        );
                        return Ok(None);
                    }
                    let passes = self.passes.len() as u32;
                    if self.limit.is_some_and(|limit| passes >= limit) {
                        return Err(CoreError::CascadeLimit { passes });
                    }
                    let cleared = clear_matches(&mut self.grid, &matches);
                    let found = matches.len() as u32;
                    self.combos += found;
                    self.passes.push(found);
                    debug!(
                        "cascade pass {}: {found} matches, {cleared} cells cleared",
                        self.passes.len()
                    );
                    self.phase = Phase::Fall;
                    return Ok(Some(CascadeEvent::Cleared { matches }));
                }
                Phase::Fall => {
                    if gravity_step(&mut self.grid) {
                        return Ok(Some(CascadeEvent::Fell));
                    }
                    self.phase = Phase::Refill;
                }
                Phase::Refill => {
                    let cells = refill(&mut self.grid, &self.available, &mut *self.source)?;
                    self.phase = Phase::Detect;
                    return Ok(Some(CascadeEvent::Refilled { cells }));
                }
            }
        }
    }

    /// Run to completion
    pub fn finish(mut self) -> Result<CascadeResult> {
        while self.step()?.is_some() {}
        Ok(CascadeResult {
            combos: self.combos,
            passes: self.passes,
            grid: self.grid,
        })
    }
}

impl<S: OrbSource + ?Sized> Iterator for Cascade<'_, S> {
    type Item = Result<CascadeEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.step() {
            Ok(Some(event)) => Some(Ok(event)),
            Ok(None) => None,
            Err(e) => {
                self.phase = Phase::Done;
                Some(Err(e))
            }
        }
    }
}

/// Resolve every match on `grid`, returning the combo total and the stable board
///
/// A board that is already stable comes back unchanged with zero combos.
pub fn resolve<S: OrbSource + ?Sized>(
    grid: Grid,
    available: &OrbSet,
    source: &mut S,
) -> Result<CascadeResult> {
    Cascade::new(grid, available, source)?.finish()
}
