//! Orb Match (workspace facade crate).
//!
//! Re-exports the engine crates under `orb_match::{types,core,planner}` and adds the
//! [`session`] layer that drives one live board from pointer gestures.

pub use orb_match_core as core;
pub use orb_match_planner as planner;
pub use orb_match_types as types;

pub mod session;

pub use session::{DragUpdate, GameSession};
