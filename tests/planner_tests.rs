//! Move planner tests

use orb_match::core::{apply_path, count_combos, initialize, Grid, PlannerSettings, SimpleRng};
use orb_match::planner::{plan, potential};
use orb_match::types::{OrbSet, COMBO_WEIGHT};

fn settings(beam_width: usize, max_depth: usize) -> PlannerSettings {
    PlannerSettings {
        beam_width,
        max_depth,
    }
}

#[test]
fn test_no_improving_drag_returns_none() {
    let grid = Grid::parse("RRB/BGG/LLD").unwrap();
    assert!(plan(&grid, &OrbSet::standard(), PlannerSettings::default()).is_none());
}

#[test]
fn test_one_swap_away_gives_two_cell_path() {
    let grid = Grid::parse("RBB/GRL/RDH").unwrap();
    let route = plan(&grid, &OrbSet::all(), PlannerSettings::default()).unwrap();
    assert_eq!(route.path.len(), 2);
    assert!(route.combos >= 1);
    assert_eq!(route.swaps(), 1);
}

#[test]
fn test_routes_on_generated_boards_replay() {
    let orbs = OrbSet::standard();
    for seed in 1..=8 {
        let mut rng = SimpleRng::new(seed);
        let grid = initialize(5, 6, &orbs, &mut rng).unwrap();
        let Some(route) = plan(&grid, &orbs, settings(40, 15)) else {
            continue;
        };

        assert!(route.swaps() <= 15);
        for step in route.path.windows(2) {
            assert!(step[0].is_adjacent(step[1]), "seed {seed}: {:?}", route.path);
        }
        let after = apply_path(&grid, &route.path).unwrap();
        assert_eq!(count_combos(&after) as u32, route.combos, "seed {seed}");
        assert_eq!(potential(&after), route.potential, "seed {seed}");
        assert_eq!(route.score, route.combos * COMBO_WEIGHT + route.potential);
    }
}

#[test]
fn test_zero_depth_finds_nothing() {
    let grid = Grid::parse("RBB/GRL/RDH").unwrap();
    assert!(plan(&grid, &OrbSet::all(), settings(100, 0)).is_none());
}

#[test]
fn test_orb_selection_does_not_change_route() {
    // The search only rearranges orbs already on the board.
    let grid = Grid::parse("RBGLDR/BGLRRB/GLDRBG/LDRBGL/DRBGLD").unwrap();
    let standard = plan(&grid, &OrbSet::standard(), settings(20, 6));
    let all = plan(&grid, &OrbSet::all(), settings(20, 6));
    assert!(standard.is_some());
    assert_eq!(standard, all);
}
