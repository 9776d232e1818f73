//! Board initializer - random match-free starting boards
//!
//! Every cell is drawn independently; if the board contains any match it is discarded
//! and drawn again from scratch. An attempt is abandoned as soon as the cell just drawn
//! closes a run, which rejects exactly the boards a full fill would reject and leaves
//! the accepted boards uniformly distributed over the match-free ones.
//!
//! With two or more orb types this terminates almost surely, so [`initialize`] retries
//! until it succeeds. With a single type no 3x3-or-larger board is match-free; that case
//! is capped at `MAX_INIT_ATTEMPTS` and reported as `InitAttemptsExhausted`.

use log::{debug, warn};

use crate::error::{CoreError, Result};
use crate::grid::{check_dimensions, Grid};
use crate::rng::OrbSource;
use crate::types::{OrbSet, OrbType, Position, MAX_INIT_ATTEMPTS};

/// Fill every cell of `grid` from `source`, ignoring matches
///
/// Fails with `EmptyOrbSet` before touching the grid.
pub fn random_fill<S: OrbSource + ?Sized>(
    grid: &mut Grid,
    available: &OrbSet,
    source: &mut S,
) -> Result<()> {
    if available.is_empty() {
        return Err(CoreError::EmptyOrbSet);
    }
    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            let orb = source.next_orb(available).ok_or(CoreError::EmptyOrbSet)?;
            grid.set(Position::new(r, c), Some(orb));
        }
    }
    Ok(())
}

/// Produce a full `rows x cols` board with no matches
///
/// Retries without limit for two or more orb types; a single type gives up after
/// `MAX_INIT_ATTEMPTS`.
pub fn initialize<S: OrbSource + ?Sized>(
    rows: usize,
    cols: usize,
    available: &OrbSet,
    source: &mut S,
) -> Result<Grid> {
    let cap = (available.len() < 2).then_some(MAX_INIT_ATTEMPTS);
    generate(rows, cols, available, source, cap)
}

/// [`initialize`] with an explicit regeneration cap, whatever the orb set
pub fn initialize_with_attempts<S: OrbSource + ?Sized>(
    rows: usize,
    cols: usize,
    available: &OrbSet,
    source: &mut S,
    max_attempts: u32,
) -> Result<Grid> {
    generate(rows, cols, available, source, Some(max_attempts))
}

fn generate<S: OrbSource + ?Sized>(
    rows: usize,
    cols: usize,
    available: &OrbSet,
    source: &mut S,
    max_attempts: Option<u32>,
) -> Result<Grid> {
    check_dimensions(rows, cols)?;
    if available.is_empty() {
        return Err(CoreError::EmptyOrbSet);
    }
    if available.len() < 2 {
        warn!("initializing a {rows}x{cols} board with a single orb type; no match-free board exists");
    }

    let mut grid = Grid::new(rows, cols)?;
    let mut attempt: u64 = 0;
    loop {
        attempt += 1;
        if fill_without_runs(&mut grid, available, source)? {
            debug!("initialized {rows}x{cols} board after {attempt} attempt(s)");
            return Ok(grid);
        }
        if let Some(cap) = max_attempts {
            if attempt >= u64::from(cap) {
                return Err(CoreError::InitAttemptsExhausted { attempts: cap });
            }
        }
    }
}

/// One attempt: draw cells row-major, returning false at the first completed run
fn fill_without_runs<S: OrbSource + ?Sized>(
    grid: &mut Grid,
    available: &OrbSet,
    source: &mut S,
) -> Result<bool> {
    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            let orb = source.next_orb(available).ok_or(CoreError::EmptyOrbSet)?;
            grid.set(Position::new(r, c), Some(orb));
            if closes_run(grid, r, c, orb) {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

/// Whether `orb` at (r, c) ends a run with the two cells to its left or above it
///
/// Only cells already drawn in this attempt are looked at.
fn closes_run(grid: &Grid, r: usize, c: usize, orb: OrbType) -> bool {
    let same = |row: usize, col: usize| grid.orb(Position::new(row, col)) == Some(orb);
    (c >= 2 && same(r, c - 1) && same(r, c - 2)) || (r >= 2 && same(r - 1, c) && same(r - 2, c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{detect, has_matches};
    use crate::rng::SimpleRng;

    #[test]
    fn test_initialize_has_no_matches() {
        let mut rng = SimpleRng::new(42);
        for _ in 0..50 {
            let grid = initialize(5, 6, &OrbSet::standard(), &mut rng).unwrap();
            assert!(grid.is_full());
            assert!(detect(&grid).is_empty(), "\n{grid}");
        }
    }

    #[test]
    fn test_initialize_uses_available_types() {
        let mut rng = SimpleRng::new(5);
        let available = OrbSet::from_slice(&[OrbType::Light, OrbType::Dark, OrbType::Heal]);
        let grid = initialize(6, 7, &available, &mut rng).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (6, 7));
        assert!(grid.cells().iter().all(|c| c.is_some_and(|o| available.contains(o))));
    }

    #[test]
    fn test_initialize_two_types() {
        let mut rng = SimpleRng::new(8);
        let available = OrbSet::from_slice(&[OrbType::Fire, OrbType::Water]);
        let grid = initialize(3, 3, &available, &mut rng).unwrap();
        assert!(!has_matches(&grid));
    }

    #[test]
    fn test_two_types_on_large_board() {
        // Match-free two-type 6x7 boards are rare; the retry loop must not give up.
        let available = OrbSet::from_slice(&[OrbType::Fire, OrbType::Water]);
        for seed in 1..=5 {
            let mut rng = SimpleRng::new(seed);
            let grid = initialize(6, 7, &available, &mut rng).unwrap();
            assert!(grid.is_full());
            assert!(detect(&grid).is_empty(), "seed {seed}\n{grid}");
            assert!(grid.cells().iter().all(|c| c.is_some_and(|o| available.contains(o))));
        }
    }

    #[test]
    fn test_single_type_hits_default_cap() {
        let mut rng = SimpleRng::new(1);
        let only_fire = OrbSet::from_slice(&[OrbType::Fire]);
        assert_eq!(
            initialize(3, 3, &only_fire, &mut rng),
            Err(CoreError::InitAttemptsExhausted {
                attempts: MAX_INIT_ATTEMPTS
            })
        );
    }

    #[test]
    fn test_random_fill_rejects_empty_set() {
        let mut rng = SimpleRng::new(1);
        let mut grid = Grid::new(3, 3).unwrap();
        assert_eq!(
            random_fill(&mut grid, &OrbSet::empty(), &mut rng),
            Err(CoreError::EmptyOrbSet)
        );
        assert_eq!(grid.empty_count(), 9);
    }

    #[test]
    fn test_initialize_config_errors() {
        let mut rng = SimpleRng::new(1);
        assert_eq!(
            initialize(2, 6, &OrbSet::standard(), &mut rng),
            Err(CoreError::BoardTooSmall { rows: 2, cols: 6 })
        );
        assert_eq!(
            initialize(5, 6, &OrbSet::empty(), &mut rng),
            Err(CoreError::EmptyOrbSet)
        );
    }

    #[test]
    fn test_single_type_exhausts_attempts() {
        let mut rng = SimpleRng::new(1);
        let only_dark = OrbSet::from_slice(&[OrbType::Dark]);
        assert_eq!(
            initialize_with_attempts(3, 3, &only_dark, &mut rng, 20),
            Err(CoreError::InitAttemptsExhausted { attempts: 20 })
        );
    }
}
