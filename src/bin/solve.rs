use anyhow::{Context, Result};
use block_puzzle_solver::solver::{solve, SearchConfig, Strategy};
use block_puzzle_solver::utils::board_from_str;
use clap::Parser;
use log::info;
use std::env;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Start board as 16 characters, row-major (space = blank, '*' = agent)
    #[clap(short, long, default_value = "a   *    b c    ")]
    start: String,

    /// Goal board in the same format as the start board
    #[clap(short, long, default_value = "abc*            ")]
    goal: String,

    /// Search strategy
    #[clap(long, value_enum, default_value_t = Strategy::BestFirst)]
    strategy: Strategy,

    /// Skip boards already seen anywhere in the search, not only on the current branch
    #[clap(long)]
    global_visited: bool,

    /// Give up after this many node expansions
    #[clap(long)]
    max_iterations: Option<u64>,
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

    let start = board_from_str(&args.start).context("invalid start board")?;
    let goal = board_from_str(&args.goal).context("invalid goal board")?;
    let config = SearchConfig {
        strategy: args.strategy,
        global_visited: args.global_visited,
        max_iterations: args.max_iterations,
    };

    println!("Start board:\n{}\n", start);
    println!("Goal board:\n{}\n", goal);
    info!("Searching with {:?}", config);

    match solve(&start, &goal, &config) {
        Ok(solution) => {
            println!("Finish!\n");
            for (step, board) in solution.path().enumerate() {
                println!("Step {}:\n{}\n", step, board);
            }
            println!("Moves: {}", solution.moves());
            println!(
                "Expanded: {}, generated: {}, peak frontier: {}",
                solution.stats.iterations, solution.stats.generated, solution.stats.peak_frontier
            );
        }
        Err(err) => {
            println!("Failed: {}", err);
        }
    }
    Ok(())
}
