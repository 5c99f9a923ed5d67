//! The puzzle generator facade.

use terminoku_core::DigitGrid;

use crate::{PuzzleSeed, fill, hide};

/// A generated puzzle: the problem grid handed to the player, the solved
/// grid it was derived from, and the seed that reproduces both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle grid with hidden cells.
    pub problem: DigitGrid,
    /// The fully solved grid.
    pub solution: DigitGrid,
    /// The seed this puzzle was generated from.
    pub seed: PuzzleSeed,
}

/// Error produced when puzzle generation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// The randomized fill hit its repair budget without completing a grid.
    ///
    /// This is a fatal condition: the caller should report it rather than
    /// retry, since a healthy random source stays orders of magnitude below
    /// the budget.
    #[display("solution fill exhausted its repair budget after {dead_ends} dead ends")]
    RepairBudgetExhausted {
        /// Number of row dead ends encountered before giving up.
        dead_ends: u32,
    },
}

/// Generates Sudoku puzzles from seeds.
///
/// # Examples
///
/// ```
/// use terminoku_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::new();
/// let puzzle = generator.generate().unwrap();
/// assert_eq!(puzzle.solution.digit_count(), 81);
/// assert!(puzzle.problem.digit_count() < 81);
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    dead_end_budget: u32,
}

impl PuzzleGenerator {
    /// Default bound on row dead ends per generation.
    ///
    /// Typical fills repair a handful of rows; the budget only exists so a
    /// defective random source fails loudly instead of spinning.
    pub const DEFAULT_DEAD_END_BUDGET: u32 = 100_000;

    /// Creates a generator with the default repair budget.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dead_end_budget: Self::DEFAULT_DEAD_END_BUDGET,
        }
    }

    /// Overrides the repair budget.
    #[must_use]
    pub fn with_dead_end_budget(mut self, dead_end_budget: u32) -> Self {
        self.dead_end_budget = dead_end_budget;
        self
    }

    /// Generates a puzzle from a fresh entropy seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RepairBudgetExhausted`] if the solution fill
    /// does not converge within the repair budget.
    pub fn generate(&self) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(PuzzleSeed::from_entropy())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The same seed always produces the same puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RepairBudgetExhausted`] if the solution fill
    /// does not converge within the repair budget.
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> Result<GeneratedPuzzle, GenerateError> {
        let mut rng = seed.to_rng();
        let solution = fill::fill_solution(&mut rng, self.dead_end_budget)?;
        let mut problem = solution.clone();
        hide::hide_digits(&mut problem, &mut rng);
        Ok(GeneratedPuzzle {
            problem,
            solution,
            seed,
        })
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}
