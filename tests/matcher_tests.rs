//! Match detection tests

use orb_match::core::{count_combos, detect, has_matches, Grid, Orientation};
use orb_match::types::{OrbType, Position};

#[test]
fn test_single_row_run() {
    // Fire run on the first row; the other rows only pad the board to its minimum height
    let grid = Grid::parse("RRRBGL/BGLDRB/GLDRBG").unwrap();
    let matches = detect(&grid);

    assert_eq!(matches.len(), 1);
    let m = &matches[0];
    assert_eq!(m.orb, OrbType::Fire);
    assert_eq!(m.orientation, Orientation::Horizontal);
    assert_eq!(m.len(), 3);
    assert_eq!(
        m.positions,
        vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]
    );
}

#[test]
fn test_horizontal_and_disjoint_vertical() {
    let grid = Grid::parse("RRRGLD/BGLDBR/GLDRBG/LDGLBD").unwrap();
    let matches = detect(&grid);

    assert_eq!(matches.len(), 2);
    let horizontal = &matches[0];
    assert_eq!(horizontal.orb, OrbType::Fire);
    assert_eq!(horizontal.orientation, Orientation::Horizontal);

    let vertical = &matches[1];
    assert_eq!(vertical.orb, OrbType::Water);
    assert_eq!(vertical.orientation, Orientation::Vertical);
    assert_eq!(
        vertical.positions,
        vec![Position::new(1, 4), Position::new(2, 4), Position::new(3, 4)]
    );
    assert_eq!(count_combos(&grid), 2);
}

#[test]
fn test_runs_are_maximal() {
    let grid = Grid::parse("RRRRRB/BGLDGL/GLDBLD").unwrap();
    let matches = detect(&grid);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].len(), 5);
}

#[test]
fn test_two_runs_in_one_row() {
    let grid = Grid::parse("RRRBBB/BGLDGL/GLDRLD").unwrap();
    let matches = detect(&grid);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].orb, OrbType::Fire);
    assert_eq!(matches[1].orb, OrbType::Water);
}

#[test]
fn test_cross_counts_as_two() {
    // A plus shape: the center cell belongs to both runs
    let grid = Grid::parse("BRB/RRR/BRB").unwrap();
    let matches = detect(&grid);
    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|m| m.contains(Position::new(1, 1))));
}

#[test]
fn test_empty_cells_break_runs() {
    let grid = Grid::parse("RR.R/..../R.RR").unwrap();
    assert!(detect(&grid).is_empty());
    assert!(!has_matches(&grid));
}

#[test]
fn test_pairs_do_not_match() {
    let grid = Grid::parse("RRB/BGG/LLD").unwrap();
    assert!(detect(&grid).is_empty());
    assert_eq!(count_combos(&grid), 0);
}
