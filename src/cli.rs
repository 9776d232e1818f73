//! Command-line options for the headless assistant
//!
//! # Examples
//!
//! Plan and play three turns on a seeded 6x7 board:
//!
//! ```text
//! $ orb-match --size 7 --seed 42 --turns 3
//! ```
//!
//! Ask for a route on a known board and print the report as JSON:
//!
//! ```text
//! $ orb-match --board RBGLDR/BGLRRB/GLDRBG/LDRBGL/DRBGLD --json
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use orb_match::core::{GameConfig, Grid};
use orb_match::types::OrbSet;

/// Plan and play orb-matching drags on a generated or given board.
#[derive(Debug, Parser)]
#[command(name = "orb-match", about, long_about = None, version)]
pub struct Args {
    /// JSON file with game settings; other options override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board-size preset: SIZE columns by SIZE-1 rows
    #[arg(short, long, conflicts_with_all = ["rows", "cols"])]
    pub size: Option<usize>,

    /// Number of rows
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of columns
    #[arg(long)]
    pub cols: Option<usize>,

    /// Comma-separated orb types (fire, water, wood, light, dark, heal)
    #[arg(short, long)]
    pub orbs: Option<String>,

    /// Add heal orbs to the selection
    #[arg(long, default_value_t = false)]
    pub heal: bool,

    /// RNG seed; defaults to the clock
    #[arg(long)]
    pub seed: Option<u32>,

    /// States kept per search depth
    #[arg(long)]
    pub beam_width: Option<usize>,

    /// Maximum swaps in a route
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Start from this board, rows separated by '/' (R B G L D H, '.' for empty)
    #[arg(short, long)]
    pub board: Option<String>,

    /// Number of turns to plan and play
    #[arg(short, long, default_value_t = 1)]
    pub turns: u32,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

impl Args {
    /// Settings from the config file (or defaults) with command-line overrides applied
    pub fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("cannot read {}", path.display()))?;
                serde_json::from_str::<GameConfig>(&text)
                    .with_context(|| format!("invalid config in {}", path.display()))?
            }
            None => GameConfig::default(),
        };

        if let Some(size) = self.size {
            let preset = GameConfig::from_board_size(size);
            config.rows = preset.rows;
            config.cols = preset.cols;
        }
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(list) = &self.orbs {
            config.orbs = OrbSet::parse_list(list)
                .with_context(|| format!("unknown orb type in '{list}'"))?;
        }
        if self.heal {
            config.orbs = config.orbs.with_heal(true);
        }
        if let Some(width) = self.beam_width {
            config.planner.beam_width = width;
        }
        if let Some(depth) = self.max_depth {
            config.planner.max_depth = depth;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn grid(&self) -> Result<Option<Grid>> {
        self.board
            .as_deref()
            .map(|text| Grid::parse(text).context("cannot parse --board"))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orb_match::types::OrbType;

    fn args(line: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("orb-match").chain(line.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_classic_board() {
        let config = args(&[]).game_config().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn size_preset_and_orbs() {
        let config = args(&["--size", "7", "--orbs", "fire,water", "--heal"])
            .game_config()
            .unwrap();
        assert_eq!((config.rows, config.cols), (6, 7));
        assert_eq!(
            config.orbs,
            OrbSet::from_slice(&[OrbType::Fire, OrbType::Water, OrbType::Heal])
        );
    }

    #[test]
    fn rejects_size_with_rows() {
        let line = ["orb-match", "--size", "6", "--rows", "4"];
        assert!(Args::try_parse_from(line).is_err());
    }

    #[test]
    fn rejects_tiny_board() {
        assert!(args(&["--rows", "2"]).game_config().is_err());
    }

    #[test]
    fn parses_board() {
        let grid = args(&["--board", "RBB/GRL/RDH"]).grid().unwrap().unwrap();
        assert_eq!(grid.to_string(), "RBB\nGRL\nRDH");
        assert!(args(&["--board", "RXB/GRL/RDH"]).grid().is_err());
    }
}
