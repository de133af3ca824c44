//! Sliding Puzzle Solver
//!
//! Solves the N-puzzle (the 8-puzzle by default) with uniform-cost search or A*
//! using the misplaced-tile or Manhattan-distance heuristic, and reports how
//! much of the state space each search had to touch.

mod prompt;

use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::warn;

use npuzzle::board::{format_board, is_solvable, State};
use npuzzle::config::{PuzzleConfig, DEFAULT_TILE_COUNT};
use npuzzle::solver::{Dedup, SearchLimits, SearchOutcome, Termination};
use npuzzle::strategy::Strategy;

/// Solves sliding tile puzzles with best-first search.
#[derive(Parser)]
#[command(name = "npuzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search strategy: uniform-cost, misplaced or manhattan. Prompts if omitted.
    #[arg(short, long)]
    strategy: Option<Strategy>,
    /// Starting tiles in row-major order, with x for the blank.
    #[arg(short, long, conflicts_with = "default")]
    tiles: Option<String>,
    /// Start from the built-in 8-puzzle.
    #[arg(short, long)]
    default: bool,
    /// Number of numbered tiles (8, 15, 24, ...).
    #[arg(long, default_value_t = DEFAULT_TILE_COUNT)]
    size: usize,
    /// Stop after this many expanded nodes.
    #[arg(long)]
    max_expansions: Option<usize>,
    /// Never queue nodes deeper than this.
    #[arg(long)]
    max_depth: Option<u32>,
    /// Which states count as duplicates when generating children.
    #[arg(long, value_enum, default_value_t = DedupArg::Explored)]
    dedup: DedupArg,
    /// Run every strategy and compare them.
    #[arg(short, long, conflicts_with = "strategy")]
    all: bool,
    /// Log each expanded node.
    #[arg(short, long)]
    verbose: bool,
    /// Log every enqueued child as well.
    #[arg(long)]
    trace: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum DedupArg {
    /// Skip children that were already goal-tested.
    Explored,
    /// Skip children that were ever generated.
    Generated,
}

impl From<DedupArg> for Dedup {
    fn from(arg: DedupArg) -> Self {
        match arg {
            DedupArg::Explored => Dedup::Explored,
            DedupArg::Generated => Dedup::Generated,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = PuzzleConfig::from_tile_count(cli.size).context("invalid --size")?;
    let limits = SearchLimits {
        max_expansions: cli.max_expansions,
        max_depth: cli.max_depth,
        dedup: cli.dedup.into(),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let initial = match (&cli.tiles, cli.default) {
        (Some(text), _) => State::parse(&config, text).context("invalid --tiles")?,
        (None, true) => prompt::default_puzzle(&config)?,
        (None, false) => prompt::choose_puzzle(&config, &mut input, &mut output)?,
    };

    println!("Initial State");
    print!("{}", format_board(&config, &initial));
    println!("Goal State");
    print!("{}", format_board(&config, config.goal()));
    println!();

    if !is_solvable(&config, &initial) {
        warn!("this arrangement cannot reach the goal; the search will run until exhausted");
    }

    let strategies: Vec<Strategy> = if cli.all {
        Strategy::ALL.to_vec()
    } else if let Some(strategy) = cli.strategy {
        vec![strategy]
    } else {
        println!("{}", "*".repeat(50));
        match prompt::choose_strategy(&mut input, &mut output)? {
            Some(strategy) => vec![strategy],
            None => {
                println!("Invalid choice.");
                return Ok(());
            }
        }
    };

    for strategy in strategies {
        let started = Instant::now();
        let outcome = npuzzle::solve_with(&config, initial.clone(), strategy, &limits);
        let elapsed = started.elapsed();

        print!("{}", format_report(&config, &outcome));
        println!(
            "The algorithm took {:.3} ms of time.\n",
            elapsed.as_secs_f64() * 1000.0
        );
        output.flush()?;
    }

    Ok(())
}

/// Renders the end-of-search report for one strategy.
fn format_report(config: &PuzzleConfig, outcome: &SearchOutcome) -> String {
    let mut report = format!("{}\n", outcome.strategy.description());

    match &outcome.termination {
        Termination::GoalFound { state, path_cost } => {
            report.push_str("Goal State\n");
            report.push_str(&format_board(config, state));
            report.push_str(&format!(
                "To solve this problem the search algorithm expanded a total of {} nodes.\n",
                outcome.nodes_expanded
            ));
            report.push_str(&format!(
                "The maximum number of nodes in the queue at any one time was {}.\n",
                outcome.peak_frontier
            ));
            report.push_str(&format!("The depth of the goal node was {path_cost}\n"));
        }
        other => {
            let reason = match other {
                Termination::FrontierExhausted => "the frontier was exhausted",
                Termination::DepthLimitReached => "the depth limit cut off every remaining path",
                _ => "the expansion limit was reached",
            };
            report.push_str(&format!("No solution found: {reason}.\n"));
            report.push_str(&format!(
                "The search expanded {} nodes; the queue peaked at {}.\n",
                outcome.nodes_expanded, outcome.peak_frontier
            ));
        }
    }

    report
}
