//! Scoring module - turn scoring from cascade combos
//!
//! A turn scores a flat amount per combo, no matter how many cells each match held
//! or in which cascade pass it happened.

use serde::Serialize;

use crate::cascade::CascadeResult;
use crate::types::POINTS_PER_COMBO;

/// Outcome of one resolved turn
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TurnSummary {
    pub combos: u32,
    pub points: u32,
    /// Matches per cascade pass
    pub passes: Vec<u32>,
}

impl TurnSummary {
    pub fn from_cascade(result: &CascadeResult) -> Self {
        Self {
            combos: result.combos,
            points: calculate_score(result.combos),
            passes: result.passes.clone(),
        }
    }
}

/// Points for a turn with `combos` combos
pub fn calculate_score(combos: u32) -> u32 {
    combos.saturating_mul(POINTS_PER_COMBO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn test_score_per_combo() {
        assert_eq!(calculate_score(0), 0);
        assert_eq!(calculate_score(1), 100);
        assert_eq!(calculate_score(7), 700);
        assert_eq!(calculate_score(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_summary_from_cascade() {
        let result = CascadeResult {
            combos: 3,
            passes: vec![2, 1],
            grid: Grid::parse("RBR/BRB/RBR").unwrap(),
        };
        let summary = TurnSummary::from_cascade(&result);
        assert_eq!(summary.points, 300);
        assert_eq!(summary.passes, vec![2, 1]);
    }
}
