//! Assist-route planner
//!
//! Answers "which drag, starting from which orb, produces the most matches?" with a
//! pruned beam search over adjacent-swap sequences. The planner never mutates the grid
//! it is given; every candidate state owns a private copy.
//!
//! # Example
//!
//! ```
//! use orb_match_core::{Grid, PlannerSettings};
//! use orb_match_planner::plan;
//! use orb_match_types::OrbSet;
//!
//! // Swapping the middle-left pair lines up three fire orbs in column 0.
//! let grid = Grid::parse("RBB/GRL/RDH").unwrap();
//! let route = plan(&grid, &OrbSet::all(), PlannerSettings::default()).unwrap();
//!
//! assert_eq!(route.combos, 1);
//! assert_eq!(route.path.len(), 2);
//! ```

pub mod beam;
pub mod potential;

pub use beam::{plan, RoutePlan};
pub use potential::potential;
