//! Example demonstrating seeded puzzle generation.
//!
//! # Usage
//!
//! Generate one random puzzle:
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Reproduce a specific puzzle:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64 hex chars>
//! ```
//!
//! Sample many puzzles in parallel and keep the one with the fewest givens:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --max-tries 10000
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use terminoku_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed to generate from (64 hex chars). Random when omitted.
    #[arg(long, value_name = "SEED", conflicts_with = "max_tries")]
    seed: Option<PuzzleSeed>,

    /// Sample this many random puzzles and print the one with the fewest
    /// givens.
    #[arg(long, value_name = "COUNT")]
    max_tries: Option<usize>,
}

fn main() {
    let args = Args::parse();
    let generator = PuzzleGenerator::new();

    let result = match (args.seed, args.max_tries) {
        (Some(seed), _) => generator.generate_with_seed(seed),
        (None, None) => generator.generate(),
        (None, Some(0)) => {
            eprintln!("--max-tries must be at least 1.");
            process::exit(2);
        }
        (None, Some(max_tries)) => (0..max_tries)
            .into_par_iter()
            .map(|_| generator.generate())
            .try_reduce_with(|a, b| {
                if b.problem.digit_count() < a.problem.digit_count() {
                    Ok(b)
                } else {
                    Ok(a)
                }
            })
            .expect("at least one sample"),
    };

    match result {
        Ok(puzzle) => print_puzzle(&puzzle),
        Err(err) => {
            eprintln!("generation failed: {err}");
            process::exit(1);
        }
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem ({} givens):", puzzle.problem.digit_count());
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
}
