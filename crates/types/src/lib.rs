//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are plain data with no behavior beyond parsing and formatting, making them
//! usable in any context (core logic, planner, CLI output, an embedding UI).
//!
//! # Board Dimensions
//!
//! The default board matches the classic drag-puzzle layout:
//!
//! - **Rows**: 5 (indexed 0-4, top to bottom)
//! - **Columns**: 6 (indexed 0-5, left to right)
//! - **Minimum**: 3 in each dimension (a match needs three cells in a line)
//!
//! # Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_MATCH_LEN` | 3 | Shortest run that counts as a match |
//! | `DEFAULT_BEAM_WIDTH` | 100 | Planner states kept per depth |
//! | `DEFAULT_MAX_DEPTH` | 35 | Planner swap budget |
//! | `COMBO_WEIGHT` | 1000 | Planner score weight of one combo |
//! | `POINTS_PER_COMBO` | 100 | Score awarded per combo in a turn |
//! | `MAX_MOVE_TIME_MS` | 5000 | Drag time limit |
//! | `MAX_INIT_ATTEMPTS` | 10000 | Board regeneration cap for a single orb type |
//! | `MAX_CASCADE_PASSES` | 10000 | Cascade pass cap for a single orb type |
//!
//! # Examples
//!
//! ```
//! use orb_match_types::{OrbSet, OrbType, Position};
//!
//! let orb = OrbType::from_str("Fire").unwrap();
//! assert_eq!(orb, OrbType::Fire);
//! assert_eq!(orb.symbol(), 'R');
//!
//! let set = OrbSet::standard();
//! assert_eq!(set.len(), 5);
//! assert!(!set.contains(OrbType::Heal));
//!
//! assert!(Position::new(1, 1).is_adjacent(Position::new(1, 2)));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default board height (5 rows)
pub const DEFAULT_ROWS: usize = 5;

/// Default board width (6 columns)
pub const DEFAULT_COLS: usize = 6;

/// Smallest allowed board dimension
pub const MIN_BOARD_DIM: usize = 3;

/// Shortest run of same-typed orbs that forms a match
pub const MIN_MATCH_LEN: usize = 3;

/// Planner beam width (states retained per depth)
pub const DEFAULT_BEAM_WIDTH: usize = 100;

/// Planner search depth (maximum number of swaps in a route)
pub const DEFAULT_MAX_DEPTH: usize = 35;

/// Planner score weight of a single combo; dominates any potential value
pub const COMBO_WEIGHT: u32 = 1000;

/// Points awarded per combo when a turn resolves
pub const POINTS_PER_COMBO: u32 = 100;

/// Drag time limit in milliseconds
pub const MAX_MOVE_TIME_MS: u32 = 5000;

/// Board regenerations tried before giving up on a single-type orb set
pub const MAX_INIT_ATTEMPTS: u32 = 10_000;

/// Clear/fall/refill passes a single-type cascade may run before it is declared degenerate
pub const MAX_CASCADE_PASSES: u32 = 10_000;

/// The six orb types
///
/// - **Fire**: red (`R`)
/// - **Water**: blue (`B`)
/// - **Wood**: green (`G`)
/// - **Light**: yellow (`L`)
/// - **Dark**: purple (`D`)
/// - **Heal**: pink (`H`), only generated when explicitly enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrbType {
    Fire,
    Water,
    Wood,
    Light,
    Dark,
    Heal,
}

impl OrbType {
    /// Every orb type in declaration order
    pub const ALL: [OrbType; 6] = [
        OrbType::Fire,
        OrbType::Water,
        OrbType::Wood,
        OrbType::Light,
        OrbType::Dark,
        OrbType::Heal,
    ];

    /// Parse orb type from its name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use orb_match_types::OrbType;
    ///
    /// assert_eq!(OrbType::from_str("water"), Some(OrbType::Water));
    /// assert_eq!(OrbType::from_str("HEAL"), Some(OrbType::Heal));
    /// assert_eq!(OrbType::from_str("poison"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fire" => Some(OrbType::Fire),
            "water" => Some(OrbType::Water),
            "wood" => Some(OrbType::Wood),
            "light" => Some(OrbType::Light),
            "dark" => Some(OrbType::Dark),
            "heal" => Some(OrbType::Heal),
            _ => None,
        }
    }

    /// Convert to lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            OrbType::Fire => "fire",
            OrbType::Water => "water",
            OrbType::Wood => "wood",
            OrbType::Light => "light",
            OrbType::Dark => "dark",
            OrbType::Heal => "heal",
        }
    }

    /// Single-character board notation
    ///
    /// # Examples
    ///
    /// ```
    /// use orb_match_types::OrbType;
    ///
    /// for orb in OrbType::ALL {
    ///     assert_eq!(OrbType::from_symbol(orb.symbol()), Some(orb));
    /// }
    /// ```
    pub fn symbol(&self) -> char {
        match self {
            OrbType::Fire => 'R',
            OrbType::Water => 'B',
            OrbType::Wood => 'G',
            OrbType::Light => 'L',
            OrbType::Dark => 'D',
            OrbType::Heal => 'H',
        }
    }

    /// Parse the single-character board notation (case-insensitive)
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(OrbType::Fire),
            'B' => Some(OrbType::Water),
            'G' => Some(OrbType::Wood),
            'L' => Some(OrbType::Light),
            'D' => Some(OrbType::Dark),
            'H' => Some(OrbType::Heal),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for OrbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cell on the board
///
/// - `None`: Empty cell (transient, only during cascade resolution)
/// - `Some(OrbType)`: Cell holding an orb
pub type Cell = Option<OrbType>;

/// Board notation for an empty cell
pub const EMPTY_SYMBOL: char = '.';

/// Board coordinate, `row` counts from the top and `col` from the left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between two positions
    pub fn distance(&self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True when the positions are orthogonal neighbors (distance 1)
    pub fn is_adjacent(&self, other: Position) -> bool {
        self.distance(other) == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Set of orb types available for random generation
///
/// Stored as a bitmask; iteration always follows [`OrbType::ALL`] order so that
/// draws from a seeded RNG are reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<OrbType>", into = "Vec<OrbType>")]
pub struct OrbSet {
    bits: u8,
}

impl OrbSet {
    /// The empty set
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Fire, water, wood, light and dark (heal disabled)
    pub fn standard() -> Self {
        Self::from_slice(&OrbType::ALL[..5])
    }

    /// All six orb types
    pub fn all() -> Self {
        Self::from_slice(&OrbType::ALL)
    }

    pub fn from_slice(orbs: &[OrbType]) -> Self {
        let mut set = Self::empty();
        for &orb in orbs {
            set.insert(orb);
        }
        set
    }

    /// Parse a comma-separated list of orb names
    ///
    /// # Examples
    ///
    /// ```
    /// use orb_match_types::{OrbSet, OrbType};
    ///
    /// let set = OrbSet::parse_list("fire, water,heal").unwrap();
    /// assert_eq!(set.to_vec(), vec![OrbType::Fire, OrbType::Water, OrbType::Heal]);
    /// assert!(OrbSet::parse_list("fire,mud").is_none());
    /// ```
    pub fn parse_list(s: &str) -> Option<Self> {
        let mut set = Self::empty();
        for name in s.split(',').filter(|n| !n.trim().is_empty()) {
            set.insert(OrbType::from_str(name)?);
        }
        Some(set)
    }

    pub fn insert(&mut self, orb: OrbType) {
        self.bits |= orb.bit();
    }

    pub fn remove(&mut self, orb: OrbType) {
        self.bits &= !orb.bit();
    }

    /// Builder-style toggle for heal orbs
    pub fn with_heal(mut self, enabled: bool) -> Self {
        if enabled {
            self.insert(OrbType::Heal);
        } else {
            self.remove(OrbType::Heal);
        }
        self
    }

    pub fn contains(&self, orb: OrbType) -> bool {
        self.bits & orb.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// The `n`-th member in [`OrbType::ALL`] order
    pub fn nth(&self, n: usize) -> Option<OrbType> {
        self.iter().nth(n)
    }

    pub fn iter(&self) -> impl Iterator<Item = OrbType> + '_ {
        OrbType::ALL.into_iter().filter(move |orb| self.contains(*orb))
    }

    pub fn to_vec(&self) -> Vec<OrbType> {
        self.iter().collect()
    }
}

impl From<Vec<OrbType>> for OrbSet {
    fn from(value: Vec<OrbType>) -> Self {
        Self::from_slice(&value)
    }
}

impl From<OrbSet> for Vec<OrbType> {
    fn from(value: OrbSet) -> Self {
        value.to_vec()
    }
}

impl fmt::Display for OrbSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|orb| orb.as_str()).collect();
        f.write_str(&names.join(","))
    }
}
