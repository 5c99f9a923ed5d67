//! The Terminoku terminal front-end.
//!
//! Thin glue around the engine crates: it generates a puzzle (optionally
//! from a `--seed` flag), then hands the session to the interactive
//! draw/read/dispatch loop in [`app`].

mod app;
mod input;
mod ui;

use clap::Parser;
use terminoku_game::GameSession;
use terminoku_generator::{PuzzleGenerator, PuzzleSeed};

use crate::app::{App, AppError};

/// Command-line options.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Generate the starting puzzle from this seed (64 hex chars).
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,
}

fn main() -> Result<(), AppError> {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let generator = PuzzleGenerator::new();
    let puzzle = match args.seed {
        Some(seed) => generator.generate_with_seed(seed)?,
        None => generator.generate()?,
    };
    log::info!("starting session from seed {}", puzzle.seed);

    App::new(GameSession::new(puzzle), generator).run()
}
