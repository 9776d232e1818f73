//! Headless orb-match assistant (default binary).
//!
//! Builds a board (seeded or given), asks the planner for the best drag, plays it and
//! reports the cascade. Repeats for `--turns` turns or until no drag can match.

mod cli;

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use serde::Serialize;

use orb_match::core::{Grid, TurnSummary};
use orb_match::planner::RoutePlan;
use orb_match::GameSession;

use cli::Args;

#[derive(Debug, Serialize)]
struct TurnReport {
    turn: u32,
    before: Vec<String>,
    route: RoutePlan,
    summary: TurnSummary,
    after: Vec<String>,
    score: u32,
}

#[derive(Debug, Serialize)]
struct Report {
    seed: u32,
    rows: usize,
    cols: usize,
    orbs: String,
    turns: Vec<TurnReport>,
    score: u32,
    best_combo: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.debug { "debug" } else { "warn" };
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(default_filter));

    let config = args.game_config()?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    debug!("seed {seed}, config {config:?}");

    let mut session = match args.grid()? {
        Some(grid) => GameSession::with_grid(config, seed, grid),
        None => GameSession::new(config, seed),
    }
    .context("cannot set up the board")?;

    let mut report = Report {
        seed,
        rows: session.grid().rows(),
        cols: session.grid().cols(),
        orbs: session.config().orbs.to_string(),
        turns: Vec::new(),
        score: 0,
        best_combo: 0,
    };

    for turn in 1..=args.turns {
        let before = board_lines(session.grid());
        let Some(route) = session.hint() else {
            info!("turn {turn}: no drag produces a match");
            break;
        };
        let summary = session
            .apply_route(&route)
            .with_context(|| format!("turn {turn}: cannot play route"))?;
        report.turns.push(TurnReport {
            turn,
            before,
            route,
            summary,
            after: board_lines(session.grid()),
            score: session.score(),
        });
    }
    report.score = session.score();
    report.best_combo = session.best_combo();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(1, |d| d.subsec_nanos() ^ d.as_secs() as u32)
}

fn board_lines(grid: &Grid) -> Vec<String> {
    grid.to_string().lines().map(str::to_owned).collect()
}

fn print_report(report: &Report) {
    println!(
        "{}x{} board, orbs {}, seed {}",
        report.rows, report.cols, report.orbs, report.seed
    );
    if report.turns.is_empty() {
        println!("no drag produces a match");
    }
    for turn in &report.turns {
        let path: Vec<String> = turn.route.path.iter().map(|p| p.to_string()).collect();
        println!();
        println!("turn {}:", turn.turn);
        for (before, after) in turn.before.iter().zip(&turn.after) {
            println!("  {before}   {after}");
        }
        println!("  drag   {}", path.join(" -> "));
        println!(
            "  combos {} (planned {}), passes {:?}, +{} points",
            turn.summary.combos, turn.route.combos, turn.summary.passes, turn.summary.points
        );
    }
    println!();
    println!("score {}, best combo {}", report.score, report.best_combo);
}
