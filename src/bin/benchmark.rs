use anyhow::{bail, Context, Result};
use block_puzzle_solver::engine::Board;
use block_puzzle_solver::solver::{solve, SearchConfig, Strategy};
use block_puzzle_solver::utils::{board_from_str, scramble};
use clap::Parser;
use log::{info, warn};
use std::env;
use std::time::{Duration, Instant};

const SCRAMBLE_STEPS: usize = 12;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Start board as 16 characters, row-major (space = blank, '*' = agent)
    #[clap(short, long, default_value = "a   *    b c    ")]
    start: String,

    /// Goal board in the same format as the start board
    #[clap(short, long, default_value = "abc*            ")]
    goal: String,

    /// Number of searches per strategy and board
    #[clap(short, long, default_value_t = 1000)]
    runs: u32,

    /// Strategy to time
    #[clap(long, value_enum, default_value_t = Strategy::BestFirst)]
    strategy: Strategy,

    /// Time both strategies, ignoring --strategy
    #[clap(long)]
    compare: bool,

    /// Benchmark against this many seeded scrambles of the goal instead of the start board
    #[clap(long)]
    scrambled: Option<u64>,

    /// First seed used with --scrambled
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Skip boards already seen anywhere in the search
    #[clap(long)]
    global_visited: bool,
}

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    if args.runs == 0 {
        bail!("--runs must be at least 1");
    }

    let goal = board_from_str(&args.goal).context("invalid goal board")?;
    let starts: Vec<Board> = match args.scrambled {
        Some(count) => (0..count)
            .map(|i| scramble(&goal, SCRAMBLE_STEPS, args.seed + i))
            .collect(),
        None => vec![board_from_str(&args.start).context("invalid start board")?],
    };

    let strategies = if args.compare {
        vec![Strategy::BreadthFirst, Strategy::BestFirst]
    } else {
        vec![args.strategy]
    };

    info!(
        "Timing {} run(s) on {} board(s) per strategy",
        args.runs,
        starts.len()
    );

    for strategy in strategies {
        let config = SearchConfig {
            strategy,
            global_visited: args.global_visited,
            max_iterations: None,
        };
        let mut total = Duration::ZERO;
        let mut searches = 0u32;
        let mut failures = 0u32;
        let mut total_moves = 0usize;

        for start in &starts {
            for _ in 0..args.runs {
                let timer = Instant::now();
                let result = solve(start, &goal, &config);
                total += timer.elapsed();
                searches += 1;
                match result {
                    Ok(solution) => total_moves += solution.moves(),
                    Err(err) => {
                        failures += 1;
                        warn!("{:?} failed on {:?}: {}", strategy, start.to_compact_string(), err);
                    }
                }
            }
        }

        let solved = searches - failures;
        println!("Strategy: {:?}", strategy);
        println!("  Searches: {}, failed: {}", searches, failures);
        println!("  Time taken: {:.3}ms", total.as_secs_f64() * 1000.0);
        println!(
            "  Mean per search: {:.3}ms",
            total.as_secs_f64() * 1000.0 / f64::from(searches)
        );
        if solved > 0 {
            println!(
                "  Mean solution length: {:.2} moves",
                total_moves as f64 / f64::from(solved)
            );
        }
    }
    Ok(())
}
