//! Seeded Sudoku puzzle generation for Terminoku.
//!
//! [`PuzzleGenerator`] produces a [`GeneratedPuzzle`]: a fully solved grid,
//! a problem grid derived from it by hiding a sampled number of digits per
//! 3×3 block, and the [`PuzzleSeed`] that reproduces both.
//!
//! The solved grid is built by a randomized constructive search with a
//! localized repair strategy rather than exhaustive backtracking: cells are
//! filled row by row, a row that cannot be completed is cleared and retried,
//! and a row that fails twice in a row triggers a restart from the top. The
//! search is probabilistic and always converges quickly in practice for a
//! 9×9 board; a repair budget turns the (never observed) pathological case
//! into an explicit [`GenerateError`].
//!
//! All randomness flows through a PCG stream keyed by the seed, so the same
//! seed always yields the same puzzle:
//!
//! ```
//! use terminoku_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new();
//! let seed: PuzzleSeed = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
//!     .parse()
//!     .unwrap();
//! let first = generator.generate_with_seed(seed).unwrap();
//! let second = generator.generate_with_seed(seed).unwrap();
//! assert_eq!(first.problem, second.problem);
//! assert_eq!(first.solution, second.solution);
//! ```

mod fill;
mod generator;
mod hide;
mod seed;

pub use self::{
    generator::{GenerateError, GeneratedPuzzle, PuzzleGenerator},
    seed::{ParsePuzzleSeedError, PuzzleSeed},
};
