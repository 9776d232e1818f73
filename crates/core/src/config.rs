//! Game configuration
//!
//! Plain serde-friendly settings owned by whoever drives a game. Nothing in the
//! engine reads global state; every operation takes the pieces of this struct it needs.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::grid::check_dimensions;
use crate::types::{
    OrbSet, DEFAULT_BEAM_WIDTH, DEFAULT_COLS, DEFAULT_MAX_DEPTH, DEFAULT_ROWS, MAX_MOVE_TIME_MS,
};

/// Beam-search limits for the assist route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerSettings {
    /// States kept per depth
    pub beam_width: usize,
    /// Maximum swaps in a route
    pub max_depth: usize,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            beam_width: DEFAULT_BEAM_WIDTH,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Orb types drawn for new cells
    pub orbs: OrbSet,
    /// Drag time limit; the drag ends on its own once exceeded
    pub max_move_time_ms: u32,
    pub planner: PlannerSettings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            orbs: OrbSet::standard(),
            max_move_time_ms: MAX_MOVE_TIME_MS,
            planner: PlannerSettings::default(),
        }
    }
}

impl GameConfig {
    /// Board-size preset: `size` columns and `size - 1` rows (6 gives the classic 5x6)
    ///
    /// # Examples
    ///
    /// ```
    /// use orb_match_core::GameConfig;
    ///
    /// let config = GameConfig::from_board_size(7);
    /// assert_eq!((config.rows, config.cols), (6, 7));
    /// ```
    pub fn from_board_size(size: usize) -> Self {
        Self {
            rows: size.saturating_sub(1),
            cols: size,
            ..Self::default()
        }
    }

    pub fn with_orbs(mut self, orbs: OrbSet) -> Self {
        self.orbs = orbs;
        self
    }

    /// Fail fast on settings no game can run with
    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.rows, self.cols)?;
        if self.orbs.is_empty() {
            return Err(CoreError::EmptyOrbSet);
        }
        Ok(())
    }
}
