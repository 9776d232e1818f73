//! Core engine - pure, deterministic, and testable
//!
//! This crate holds the board rules: match detection, cascade resolution and
//! match-free board generation. It has **no dependencies** on rendering, input,
//! storage or networking, which makes it:
//!
//! - **Deterministic**: The only randomness comes from a caller-supplied [`OrbSource`];
//!   the same seed produces the same boards and refills
//! - **Pure**: Operations take a [`Grid`] and return a new state; nothing is global
//! - **Portable**: Runs headless, in a terminal, or behind any UI
//!
//! # Module Structure
//!
//! - [`grid`]: the orb matrix, swaps and drag paths
//! - [`matcher`]: maximal run detection and combo counting
//! - [`cascade`]: clear, gravity and refill until stable
//! - [`init`]: match-free starting boards
//! - [`rng`]: seeded LCG and the [`OrbSource`] trait
//! - [`scoring`]: points per turn
//! - [`config`]: board, orb and planner settings
//! - [`error`]: the [`CoreError`] type
//!
//! # Example
//!
//! ```
//! use orb_match_core::{apply_path, detect, initialize, resolve, SimpleRng};
//! use orb_match_types::{OrbSet, Position};
//!
//! let orbs = OrbSet::standard();
//! let mut rng = SimpleRng::new(12345);
//!
//! // A fresh board never starts with a match
//! let grid = initialize(5, 6, &orbs, &mut rng).unwrap();
//! assert!(detect(&grid).is_empty());
//!
//! // Drag the top-left orb two cells to the right, then resolve
//! let path = [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)];
//! let moved = apply_path(&grid, &path).unwrap();
//! let result = resolve(moved, &orbs, &mut rng).unwrap();
//!
//! assert!(result.grid.is_full());
//! assert!(detect(&result.grid).is_empty());
//! ```

pub mod cascade;
pub mod config;
pub mod error;
pub mod grid;
pub mod init;
pub mod matcher;
pub mod rng;
pub mod scoring;

pub use orb_match_types as types;

// Re-export commonly used types for convenience
pub use cascade::{
    apply_gravity, clear_matches, gravity_step, refill, resolve, Cascade, CascadeEvent,
    CascadeResult,
};
pub use config::{GameConfig, PlannerSettings};
pub use error::CoreError;
pub use grid::{apply_path, swap, Grid};
pub use init::{initialize, initialize_with_attempts, random_fill};
pub use matcher::{count_combos, detect, has_matches, Match, MatchSet, Orientation};
pub use rng::{OrbSource, SimpleRng};
pub use scoring::{calculate_score, TurnSummary};
