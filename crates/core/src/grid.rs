//! Grid module - the orb matrix
//!
//! The grid is a `rows x cols` matrix where each cell holds an orb or is empty.
//! Uses a flat vector in row-major order for cache locality; cloning a grid is a single
//! allocation, which the planner relies on for its private scratch copies.
//! Coordinates: `row` counts from the top (0) down, `col` from the left (0) right.
//! Gravity pulls toward the highest row index.

use std::fmt;

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::error::{CoreError, Result};
use crate::types::{Cell, OrbType, Position, EMPTY_SYMBOL, MIN_BOARD_DIM};

/// The orb matrix
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid
    ///
    /// Fails with `BoardTooSmall` when either dimension is below 3.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        })
    }

    /// Build a grid from rows of cells (top row first)
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        check_dimensions(height, width)?;
        if let Some(bad) = rows.iter().position(|row| row.len() != width) {
            return Err(CoreError::InvalidBoard(format!(
                "row {bad} has {} cells, expected {width}",
                rows[bad].len()
            )));
        }
        Ok(Self {
            rows: height,
            cols: width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Parse board notation
    ///
    /// Rows are separated by newlines or `/`; each cell is one symbol
    /// (`R` fire, `B` water, `G` wood, `L` light, `D` dark, `H` heal, `.` empty).
    /// Other whitespace is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use orb_match_core::Grid;
    ///
    /// let grid = Grid::parse("RRB/GLD/HBR").unwrap();
    /// assert_eq!(grid.rows(), 3);
    /// assert_eq!(grid.to_string(), "RRB\nGLD\nHBR");
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for line in text.split(['\n', '/']) {
            let line: String = line.chars().filter(|c| !c.is_whitespace()).collect();
            if line.is_empty() {
                continue;
            }
            let row = line
                .chars()
                .map(|c| match c {
                    EMPTY_SYMBOL => Ok(None),
                    _ => OrbType::from_symbol(c)
                        .map(Some)
                        .ok_or_else(|| CoreError::InvalidBoard(format!("unknown symbol '{c}'"))),
                })
                .collect::<Result<Vec<Cell>>>()?;
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        Some(pos.row * self.cols + pos.col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Get cell at `pos`
    /// Returns None if out of bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Orb at `pos`, None if empty or out of bounds
    #[inline]
    pub fn orb(&self, pos: Position) -> Option<OrbType> {
        self.get(pos).flatten()
    }

    /// Set cell at `pos`
    /// Returns false if out of bounds
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Exchange two cells in place
    /// Returns false (and leaves the grid untouched) if either is out of bounds
    pub fn swap_cells(&mut self, a: Position, b: Position) -> bool {
        match (self.index(a), self.index(b)) {
            (Some(ia), Some(ib)) => {
                self.cells.swap(ia, ib);
                true
            }
            _ => false,
        }
    }

    /// In-bounds orthogonal neighbors in up, down, left, right order
    pub fn neighbors(&self, pos: Position) -> ArrayVec<Position, 4> {
        let mut out = ArrayVec::new();
        if pos.row > 0 {
            out.push(Position::new(pos.row - 1, pos.col));
        }
        if pos.row + 1 < self.rows {
            out.push(Position::new(pos.row + 1, pos.col));
        }
        if pos.col > 0 {
            out.push(Position::new(pos.row, pos.col - 1));
        }
        if pos.col + 1 < self.cols {
            out.push(Position::new(pos.row, pos.col + 1));
        }
        out
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.cols;
        (0..self.rows * cols).map(move |i| Position::new(i / cols, i % cols))
    }

    /// One row of cells
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Convert to rows of cells (top row first)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                f.write_str("\n")?;
            }
            for cell in self.row(r) {
                let c = cell.map_or(EMPTY_SYMBOL, |orb| orb.symbol());
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

pub(crate) fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows < MIN_BOARD_DIM || cols < MIN_BOARD_DIM {
        return Err(CoreError::BoardTooSmall { rows, cols });
    }
    Ok(())
}

/// Pure swap: a copy of `grid` with the cells at `a` and `b` exchanged
///
/// Out-of-bounds positions leave the copy unchanged.
pub fn swap(grid: &Grid, a: Position, b: Position) -> Grid {
    let mut next = grid.clone();
    next.swap_cells(a, b);
    next
}

/// Apply a drag path: the orb at `path[0]` is carried through every later position,
/// swapping with each cell it enters
///
/// Every step must be in bounds and adjacent to the previous one.
pub fn apply_path(grid: &Grid, path: &[Position]) -> Result<Grid> {
    let mut next = grid.clone();
    if let Some(&first) = path.first() {
        if !next.contains(first) {
            return Err(CoreError::OutOfBounds(first));
        }
    }
    for step in path.windows(2) {
        let (from, to) = (step[0], step[1]);
        if !next.contains(to) {
            return Err(CoreError::OutOfBounds(to));
        }
        if !from.is_adjacent(to) {
            return Err(CoreError::NotAdjacent(from, to));
        }
        next.swap_cells(from, to);
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(5, 6).unwrap();
        assert_eq!(grid.index(Position::new(0, 0)), Some(0));
        assert_eq!(grid.index(Position::new(0, 5)), Some(5));
        assert_eq!(grid.index(Position::new(1, 0)), Some(6));
        assert_eq!(grid.index(Position::new(4, 5)), Some(29));
        assert_eq!(grid.index(Position::new(5, 0)), None);
        assert_eq!(grid.index(Position::new(0, 6)), None);
    }

    #[test]
    fn test_grid_rejects_small_dimensions() {
        assert_eq!(
            Grid::new(2, 6),
            Err(CoreError::BoardTooSmall { rows: 2, cols: 6 })
        );
        assert!(Grid::new(3, 0).is_err());
        assert!(Grid::new(3, 3).is_ok());
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = vec![vec![None; 3], vec![None; 3], vec![None; 2]];
        assert!(matches!(
            Grid::from_rows(rows),
            Err(CoreError::InvalidBoard(_))
        ));
    }

    #[test]
    fn test_parse_and_display() {
        let grid = Grid::parse(
            "
            R B G
            L . D
            H R B
            ",
        )
        .unwrap();
        assert_eq!(grid.orb(Position::new(0, 0)), Some(OrbType::Fire));
        assert_eq!(grid.get(Position::new(1, 1)), Some(None));
        assert_eq!(grid.orb(Position::new(2, 0)), Some(OrbType::Heal));
        assert_eq!(grid.to_string(), "RBG\nL.D\nHRB");
        assert_eq!(Grid::parse(&grid.to_string()).unwrap(), grid);
    }

    #[test]
    fn test_parse_unknown_symbol() {
        assert!(matches!(
            Grid::parse("RBX/RBG/RBG"),
            Err(CoreError::InvalidBoard(_))
        ));
    }

    #[test]
    fn test_neighbors_order_and_bounds() {
        let grid = Grid::new(3, 4).unwrap();
        let corner: Vec<_> = grid.neighbors(Position::new(0, 0)).into_iter().collect();
        assert_eq!(corner, vec![Position::new(1, 0), Position::new(0, 1)]);

        let middle = grid.neighbors(Position::new(1, 1));
        assert_eq!(
            middle.as_slice(),
            &[
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_swap_is_pure() {
        let grid = Grid::parse("RBG/LDH/RBG").unwrap();
        let swapped = swap(&grid, Position::new(0, 0), Position::new(0, 1));
        assert_eq!(swapped.to_string(), "BRG\nLDH\nRBG");
        assert_eq!(grid.to_string(), "RBG\nLDH\nRBG");
    }

    #[test]
    fn test_apply_path_carries_orb() {
        let grid = Grid::parse("RBG/LDH/RBG").unwrap();
        let path = [
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(1, 2),
        ];
        let moved = apply_path(&grid, &path).unwrap();
        assert_eq!(moved.to_string(), "BGH\nLDR\nRBG");
    }

    #[test]
    fn test_apply_path_rejects_jumps() {
        let grid = Grid::parse("RBG/LDH/RBG").unwrap();
        let jump = [Position::new(0, 0), Position::new(1, 1)];
        assert_eq!(
            apply_path(&grid, &jump),
            Err(CoreError::NotAdjacent(jump[0], jump[1]))
        );
        let off = [Position::new(2, 2), Position::new(3, 2)];
        assert_eq!(
            apply_path(&grid, &off),
            Err(CoreError::OutOfBounds(Position::new(3, 2)))
        );
    }

    #[test]
    fn test_empty_count() {
        let mut grid = Grid::parse("RBG/LDH/RBG").unwrap();
        assert!(grid.is_full());
        grid.set(Position::new(1, 1), None);
        assert_eq!(grid.empty_count(), 1);
        assert!(!grid.is_full());
        assert!(!grid.set(Position::new(3, 0), None));
    }
}
