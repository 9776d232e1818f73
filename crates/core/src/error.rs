//! Error type shared by the core operations.
//!
//! Configuration problems are caller bugs and are reported before any grid is touched.
//! `InitAttemptsExhausted` and `CascadeLimit` are the two fatal outcomes of a degenerate
//! orb set (fewer than two types), surfaced instead of looping forever.

use std::fmt;

use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    EmptyOrbSet,
    BoardTooSmall { rows: usize, cols: usize },
    OutOfBounds(Position),
    NotAdjacent(Position, Position),
    InitAttemptsExhausted { attempts: u32 },
    CascadeLimit { passes: u32 },
    InvalidBoard(String),
}

impl CoreError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::EmptyOrbSet | CoreError::BoardTooSmall { .. } => "invalid_config",
            CoreError::OutOfBounds(_) | CoreError::NotAdjacent(..) => "invalid_path",
            CoreError::InitAttemptsExhausted { .. } => "init_failed",
            CoreError::CascadeLimit { .. } => "cascade_limit",
            CoreError::InvalidBoard(_) => "invalid_board",
        }
    }

    /// Human-readable description
    pub fn message(&self) -> String {
        match self {
            CoreError::EmptyOrbSet => "no orb types are available".to_string(),
            CoreError::BoardTooSmall { rows, cols } => {
                format!("board {rows}x{cols} is smaller than the 3x3 minimum")
            }
            CoreError::OutOfBounds(pos) => format!("position {pos} is outside the board"),
            CoreError::NotAdjacent(a, b) => format!("positions {a} and {b} are not adjacent"),
            CoreError::InitAttemptsExhausted { attempts } => {
                format!("no match-free board after {attempts} attempts")
            }
            CoreError::CascadeLimit { passes } => {
                format!("cascade still matching after {passes} passes")
            }
            CoreError::InvalidBoard(reason) => format!("invalid board: {reason}"),
        }
    }

    pub fn is_config_error(&self) -> bool {
        self.code() == "invalid_config"
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

impl std::error::Error for CoreError {}

pub type Result<T> = std::result::Result<T, CoreError>;
