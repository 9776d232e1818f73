//! Game session - the live board plus the state an integration layer keeps around it
//!
//! The engine crates are pure functions over a [`Grid`]. A session owns the one live
//! grid, the seeded RNG, the running score and the drag in progress, and turns pointer
//! gestures into engine calls:
//!
//! - [`GameSession::begin_drag`] picks up an orb
//! - [`GameSession::drag_to`] swaps it into each newly entered neighbor
//! - [`GameSession::tick`] advances the drag timer; the drag ends by itself at the limit
//! - [`GameSession::end_drag`] resolves the cascade and scores the turn
//!
//! The planner only ever sees a borrowed grid, so hints never disturb the live board.

use log::debug;

use orb_match_core::{
    apply_path, initialize, resolve, CoreError, GameConfig, Grid, SimpleRng, TurnSummary,
};
use orb_match_planner::{plan, RoutePlan};
use orb_match_types::{OrbSet, Position};

type Result<T> = std::result::Result<T, CoreError>;

/// Result of feeding one pointer position into a drag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragUpdate {
    /// The held orb moved into the entered cell
    Swapped,
    /// Nothing changed (no drag, same cell, out of bounds or not a neighbor)
    Ignored,
    /// The drag timer had already run out; the turn was resolved instead
    Expired(TurnSummary),
}

#[derive(Debug, Clone)]
struct Drag {
    cursor: Position,
    path: Vec<Position>,
    elapsed_ms: u32,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    rng: SimpleRng,
    grid: Grid,
    score: u32,
    /// Combos of the last turn that matched anything
    combo: u32,
    best_combo: u32,
    drag: Option<Drag>,
}

impl GameSession {
    /// Start a session on a fresh match-free board
    pub fn new(config: GameConfig, seed: u32) -> Result<Self> {
        config.validate()?;
        let mut rng = SimpleRng::new(seed);
        let grid = initialize(config.rows, config.cols, &config.orbs, &mut rng)?;
        Ok(Self::from_parts(config, rng, grid))
    }

    /// Start a session on a given board (for example one recognized from a screenshot)
    ///
    /// The config's dimensions are replaced by the board's. The board must be full.
    pub fn with_grid(mut config: GameConfig, seed: u32, grid: Grid) -> Result<Self> {
        config.rows = grid.rows();
        config.cols = grid.cols();
        config.validate()?;
        if !grid.is_full() {
            return Err(CoreError::InvalidBoard(format!(
                "{} empty cell(s)",
                grid.empty_count()
            )));
        }
        Ok(Self::from_parts(config, SimpleRng::new(seed), grid))
    }

    fn from_parts(config: GameConfig, rng: SimpleRng, grid: Grid) -> Self {
        Self {
            config,
            rng,
            grid,
            score: 0,
            combo: 0,
            best_combo: 0,
            drag: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn best_combo(&self) -> u32 {
        self.best_combo
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Cells visited by the current drag, empty when not dragging
    pub fn drag_path(&self) -> &[Position] {
        self.drag.as_ref().map_or(&[], |d| d.path.as_slice())
    }

    /// Milliseconds left before the current drag ends by itself
    pub fn drag_time_left_ms(&self) -> Option<u32> {
        self.drag
            .as_ref()
            .map(|d| self.config.max_move_time_ms.saturating_sub(d.elapsed_ms))
    }

    /// Pick up the orb at `pos`
    ///
    /// Returns false if `pos` is off the board. Picking up again restarts the drag.
    pub fn begin_drag(&mut self, pos: Position) -> bool {
        if !self.grid.contains(pos) {
            return false;
        }
        self.drag = Some(Drag {
            cursor: pos,
            path: vec![pos],
            elapsed_ms: 0,
        });
        true
    }

    /// Move the held orb into `pos`
    pub fn drag_to(&mut self, pos: Position) -> Result<DragUpdate> {
        let Some(drag) = self.drag.as_mut() else {
            return Ok(DragUpdate::Ignored);
        };
        if drag.elapsed_ms >= self.config.max_move_time_ms {
            let summary = self.end_drag()?.unwrap_or_default();
            return Ok(DragUpdate::Expired(summary));
        }
        if pos == drag.cursor || !self.grid.contains(pos) || !drag.cursor.is_adjacent(pos) {
            return Ok(DragUpdate::Ignored);
        }
        self.grid.swap_cells(drag.cursor, pos);
        drag.cursor = pos;
        drag.path.push(pos);
        Ok(DragUpdate::Swapped)
    }

    /// Advance the drag timer
    ///
    /// Returns the resolved turn if the time limit was reached.
    pub fn tick(&mut self, elapsed_ms: u32) -> Result<Option<TurnSummary>> {
        let Some(drag) = self.drag.as_mut() else {
            return Ok(None);
        };
        drag.elapsed_ms = drag.elapsed_ms.saturating_add(elapsed_ms);
        if drag.elapsed_ms >= self.config.max_move_time_ms {
            debug!("drag time limit reached after {} ms", drag.elapsed_ms);
            return self.end_drag();
        }
        Ok(None)
    }

    /// Drop the held orb and resolve the board
    ///
    /// Returns `None` if no drag was in progress.
    pub fn end_drag(&mut self) -> Result<Option<TurnSummary>> {
        let Some(drag) = self.drag.take() else {
            return Ok(None);
        };
        debug!("drag ended after {} swap(s)", drag.path.len() - 1);
        self.resolve_turn().map(Some)
    }

    /// Play a planned route as a single drag
    ///
    /// Any drag in progress is dropped without resolving. The route is checked before
    /// the board changes.
    pub fn apply_route(&mut self, route: &RoutePlan) -> Result<TurnSummary> {
        self.drag = None;
        self.grid = apply_path(&self.grid, &route.path)?;
        self.resolve_turn()
    }

    /// Best drag for the current board, computed on a private copy
    pub fn hint(&self) -> Option<RoutePlan> {
        plan(&self.grid, &self.config.orbs, self.config.planner)
    }

    fn resolve_turn(&mut self) -> Result<TurnSummary> {
        let result = resolve(self.grid.clone(), &self.config.orbs, &mut self.rng)?;
        let summary = TurnSummary::from_cascade(&result);
        self.grid = result.grid;
        if summary.combos > 0 {
            self.combo = summary.combos;
            self.best_combo = self.best_combo.max(summary.combos);
            self.score = self.score.saturating_add(summary.points);
        }
        debug!(
            "turn resolved: {} combos, {} points, score {}",
            summary.combos, summary.points, self.score
        );
        Ok(summary)
    }

    /// New board, score back to zero
    pub fn reset(&mut self) -> Result<()> {
        self.grid = initialize(
            self.config.rows,
            self.config.cols,
            &self.config.orbs,
            &mut self.rng,
        )?;
        self.score = 0;
        self.combo = 0;
        self.drag = None;
        Ok(())
    }

    /// Change the orb selection and start over
    ///
    /// On error the session is left as it was.
    pub fn set_orbs(&mut self, orbs: OrbSet) -> Result<()> {
        let config = self.config.clone().with_orbs(orbs);
        self.reconfigure(config)
    }

    /// Change the board dimensions and start over
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        let mut config = self.config.clone();
        config.rows = rows;
        config.cols = cols;
        self.reconfigure(config)
    }

    fn reconfigure(&mut self, config: GameConfig) -> Result<()> {
        config.validate()?;
        let grid = initialize(config.rows, config.cols, &config.orbs, &mut self.rng)?;
        self.config = config;
        self.grid = grid;
        self.score = 0;
        self.combo = 0;
        self.drag = None;
        Ok(())
    }
}
