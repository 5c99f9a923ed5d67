//! The interactive puzzle session.

use terminoku_core::{Digit, DigitGrid, Position, rules};
use terminoku_generator::{GenerateError, GeneratedPuzzle, PuzzleGenerator};

use crate::{CellAppearance, EditOutcome};

/// A cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// One in-memory puzzle session.
///
/// Owns three independent grids: the solution, the immutable problem grid
/// whose digits are the puzzle's givens, and the current grid the player
/// edits. The current grid starts as a copy of the problem grid; a cell is a
/// given exactly while its current value still equals a non-empty problem
/// value, which is what makes givens uneditable without any per-cell flags.
///
/// # Examples
///
/// ```
/// use terminoku_game::GameSession;
/// use terminoku_generator::PuzzleGenerator;
///
/// let puzzle = PuzzleGenerator::new().generate().unwrap();
/// let session = GameSession::new(puzzle);
///
/// // A fresh session shows exactly the givens
/// assert_eq!(session.progress(), session.initial_given_count());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    solution: DigitGrid,
    problem: DigitGrid,
    current: DigitGrid,
    cursor: Position,
    initial_given_count: usize,
}

impl GameSession {
    /// The cursor's starting cell, at the center of the board.
    pub const CENTER: Position = Position::new(4, 4);

    /// Number of cells that must be shown and conflict-free to complete the
    /// session.
    pub const COMPLETE_COUNT: usize = 81;

    /// Creates a session from a generated puzzle.
    ///
    /// The current grid starts as a copy of the problem grid and the cursor
    /// starts at the board center.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            seed: _,
        } = puzzle;
        let current = problem.clone();
        let initial_given_count = problem.digit_count();
        Self {
            solution,
            problem,
            current,
            cursor: Self::CENTER,
            initial_given_count,
        }
    }

    /// Returns the grid the player edits.
    #[must_use]
    pub fn current(&self) -> &DigitGrid {
        &self.current
    }

    /// Returns the problem grid defining the givens.
    #[must_use]
    pub fn problem(&self) -> &DigitGrid {
        &self.problem
    }

    /// Returns the solved grid, for hint views only.
    #[must_use]
    pub fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Returns the cursor position.
    #[must_use]
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the number of givens the current puzzle started with.
    #[must_use]
    pub fn initial_given_count(&self) -> usize {
        self.initial_given_count
    }

    /// Moves the cursor one cell, clamping at the board edges.
    pub fn move_cursor(&mut self, direction: Direction) {
        let (x, y) = (self.cursor.x(), self.cursor.y());
        let (x, y) = match direction {
            Direction::Up => (x, y.saturating_sub(1)),
            Direction::Down => (x, (y + 1).min(8)),
            Direction::Left => (x.saturating_sub(1), y),
            Direction::Right => ((x + 1).min(8), y),
        };
        self.cursor = Position::new(x, y);
    }

    /// Returns whether the cell at `pos` is a given.
    ///
    /// A cell is a given exactly while its current value equals a non-empty
    /// problem value. Defining this on the current grid's relation to the
    /// problem grid (rather than the problem grid alone) means an editable
    /// cell never turns into a given, even if the player happens to re-enter
    /// the solution digit there.
    #[must_use]
    pub fn is_given(&self, pos: Position) -> bool {
        self.problem[pos].is_some() && self.current[pos] == self.problem[pos]
    }

    /// Enters `digit` at the cursor cell.
    ///
    /// Overwrites any previously entered digit. A no-op on given cells.
    pub fn set_cell(&mut self, digit: Digit) -> EditOutcome {
        let pos = self.cursor;
        if self.is_given(pos) {
            return EditOutcome::RejectedGiven;
        }
        self.current.set(pos, Some(digit));
        EditOutcome::Applied
    }

    /// Empties the cursor cell. A no-op on given cells.
    pub fn clear_cell(&mut self) -> EditOutcome {
        let pos = self.cursor;
        if self.is_given(pos) {
            return EditOutcome::RejectedGiven;
        }
        self.current.set(pos, None);
        EditOutcome::Applied
    }

    /// Recomputes the progress count from scratch.
    ///
    /// Counts the shown (non-empty) cells of the current grid that are
    /// either givens or conflict-free. Recomputing on demand instead of
    /// maintaining the count incrementally keeps it immune to drift: one
    /// entered digit can change the correctness of several others.
    #[must_use]
    pub fn progress(&self) -> usize {
        Position::ALL
            .into_iter()
            .filter(|&pos| {
                self.current[pos].is_some()
                    && (self.is_given(pos) || rules::entry_is_correct(&self.current, pos))
            })
            .count()
    }

    /// Returns whether every cell is shown and conflict-free.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress() == Self::COMPLETE_COUNT
    }

    /// Returns the number of cells the player has to fill to complete this
    /// puzzle, which is the score reported on completion.
    #[must_use]
    pub fn score(&self) -> usize {
        Self::COMPLETE_COUNT - self.initial_given_count
    }

    /// Discards all player edits, restoring the current grid to the problem
    /// grid and the cursor to the board center.
    pub fn reset(&mut self) {
        self.current = self.problem.clone();
        self.cursor = Self::CENTER;
        self.initial_given_count = self.problem.digit_count();
    }

    /// Replaces the puzzle with a freshly generated one.
    ///
    /// All three grids are replaced together, then the session is reset as
    /// by [`reset`](Self::reset).
    ///
    /// # Errors
    ///
    /// Returns the generator's error unchanged; the session is left
    /// untouched in that case.
    pub fn regenerate(&mut self, generator: &PuzzleGenerator) -> Result<(), GenerateError> {
        let GeneratedPuzzle {
            problem,
            solution,
            seed: _,
        } = generator.generate()?;
        self.solution = solution;
        self.problem = problem;
        self.reset();
        Ok(())
    }

    /// Classifies the cell at `pos` for rendering.
    #[must_use]
    pub fn classify(&self, pos: Position) -> CellAppearance {
        let shown = self.current[pos].is_some();
        let given = self.is_given(pos);
        if pos == self.cursor {
            CellAppearance::Cursor
        } else if shown && !given && !rules::entry_is_correct(&self.current, pos) {
            CellAppearance::Incorrect
        } else if given {
            CellAppearance::Given
        } else if shown {
            CellAppearance::Correct
        } else {
            CellAppearance::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use terminoku_generator::PuzzleSeed;

    use super::*;

    const SOLUTION: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    /// Builds a puzzle with a known solution and hand-picked hidden cells.
    fn fixed_puzzle(hidden: &[Position]) -> GeneratedPuzzle {
        let solution: DigitGrid = SOLUTION.parse().unwrap();
        let mut problem = solution.clone();
        for &pos in hidden {
            problem.set(pos, None);
        }
        GeneratedPuzzle {
            problem,
            solution,
            seed: PuzzleSeed::from_bytes([0; 32]),
        }
    }

    fn generated_session() -> GameSession {
        let puzzle = PuzzleGenerator::new()
            .generate_with_seed(PuzzleSeed::from_bytes([0x2e; 32]))
            .unwrap();
        GameSession::new(puzzle)
    }

    #[test]
    fn new_session_copies_problem_and_centers_cursor() {
        let session = generated_session();

        assert_eq!(session.current(), session.problem());
        assert_eq!(session.cursor(), GameSession::CENTER);
        assert_eq!(
            session.initial_given_count(),
            session.problem().digit_count()
        );
    }

    #[test]
    fn fresh_progress_equals_given_count() {
        let session = generated_session();
        assert_eq!(session.progress(), session.problem().digit_count());
        assert!(!session.is_complete());
    }

    #[test]
    fn cursor_moves_and_clamps_at_edges() {
        let mut session = generated_session();

        session.move_cursor(Direction::Up);
        assert_eq!(session.cursor(), Position::new(4, 3));
        session.move_cursor(Direction::Right);
        assert_eq!(session.cursor(), Position::new(5, 3));

        for _ in 0..20 {
            session.move_cursor(Direction::Up);
            session.move_cursor(Direction::Left);
        }
        assert_eq!(session.cursor(), Position::new(0, 0));

        for _ in 0..20 {
            session.move_cursor(Direction::Down);
            session.move_cursor(Direction::Right);
        }
        assert_eq!(session.cursor(), Position::new(8, 8));
    }

    fn move_cursor_to(session: &mut GameSession, target: Position) {
        for _ in 0..8 {
            session.move_cursor(Direction::Up);
            session.move_cursor(Direction::Left);
        }
        for _ in 0..target.x() {
            session.move_cursor(Direction::Right);
        }
        for _ in 0..target.y() {
            session.move_cursor(Direction::Down);
        }
        assert_eq!(session.cursor(), target);
    }

    #[test]
    fn edits_to_given_cells_are_no_ops() {
        // Only (2, 0) is hidden; every other cell is a given.
        let hidden = Position::new(2, 0);
        let mut session = GameSession::new(fixed_puzzle(&[hidden]));

        let given = Position::new(0, 0);
        move_cursor_to(&mut session, given);
        assert!(session.is_given(given));

        assert_eq!(session.set_cell(Digit::D9), EditOutcome::RejectedGiven);
        assert_eq!(session.current()[given], Some(Digit::D5));
        assert_eq!(session.clear_cell(), EditOutcome::RejectedGiven);
        assert_eq!(session.current()[given], Some(Digit::D5));
    }

    #[test]
    fn entering_the_solution_digit_is_correct() {
        // Row 0 of the fixed solution is [5,3,4,6,7,8,9,1,2]; (2, 0) held a
        // 4 before hiding.
        let hidden = Position::new(2, 0);
        let mut session = GameSession::new(fixed_puzzle(&[hidden]));
        let base_progress = session.progress();
        assert_eq!(base_progress, 80);

        move_cursor_to(&mut session, hidden);
        assert!(!session.is_given(hidden));

        assert_eq!(session.set_cell(Digit::D4), EditOutcome::Applied);
        assert!(rules::entry_is_correct(session.current(), hidden));
        assert_eq!(session.progress(), 81);
        assert!(session.is_complete());
    }

    #[test]
    fn entering_a_conflicting_digit_is_incorrect() {
        let hidden = Position::new(2, 0);
        let mut session = GameSession::new(fixed_puzzle(&[hidden]));

        move_cursor_to(&mut session, hidden);
        // 5 already sits at (0, 0) in the same row
        assert_eq!(session.set_cell(Digit::D5), EditOutcome::Applied);
        assert!(!rules::entry_is_correct(session.current(), hidden));
        assert_eq!(session.progress(), 80);
        assert!(!session.is_complete());
    }

    #[test]
    fn hidden_cell_does_not_become_given_again() {
        let hidden = Position::new(2, 0);
        let mut session = GameSession::new(fixed_puzzle(&[hidden]));

        move_cursor_to(&mut session, hidden);
        session.set_cell(Digit::D4);

        // Even holding the solution digit, the cell stays editable
        assert!(!session.is_given(hidden));
        assert_eq!(session.clear_cell(), EditOutcome::Applied);
        assert_eq!(session.current()[hidden], None);
    }

    #[test]
    fn reset_restores_problem_grid_exactly() {
        let mut session = generated_session();

        // Scribble over every editable cell
        for pos in Position::ALL {
            move_cursor_to(&mut session, pos);
            session.set_cell(Digit::D1);
        }
        assert_ne!(session.current(), session.problem());

        session.reset();
        assert_eq!(session.current(), session.problem());
        assert_eq!(session.cursor(), GameSession::CENTER);
        assert_eq!(session.progress(), session.initial_given_count());
    }

    #[test]
    fn score_counts_cells_the_player_fills() {
        let hidden = [
            Position::new(2, 0),
            Position::new(5, 4),
            Position::new(8, 8),
        ];
        let session = GameSession::new(fixed_puzzle(&hidden));
        assert_eq!(session.initial_given_count(), 78);
        assert_eq!(session.score(), 3);
    }

    #[test]
    fn regenerate_replaces_all_grids_together() {
        let mut session = generated_session();
        let old_problem = session.problem().clone();
        let old_solution = session.solution().clone();

        session.regenerate(&PuzzleGenerator::new()).unwrap();

        assert_ne!(session.solution(), &old_solution);
        assert_ne!(session.problem(), &old_problem);
        assert_eq!(session.current(), session.problem());
        assert_eq!(session.cursor(), GameSession::CENTER);
        assert_eq!(
            session.initial_given_count(),
            session.problem().digit_count()
        );
    }

    #[test]
    fn classify_resolves_priority_order() {
        let hidden = [Position::new(2, 0), Position::new(3, 0)];
        let mut session = GameSession::new(fixed_puzzle(&hidden));

        // Cursor wins over everything, including givens
        move_cursor_to(&mut session, Position::new(0, 0));
        assert_eq!(session.classify(Position::new(0, 0)), CellAppearance::Cursor);

        // Off-cursor classifications
        assert_eq!(session.classify(Position::new(1, 0)), CellAppearance::Given);
        assert_eq!(session.classify(Position::new(2, 0)), CellAppearance::Empty);

        // A conflicting entry shows as incorrect, a clean one as correct
        move_cursor_to(&mut session, Position::new(2, 0));
        session.set_cell(Digit::D5);
        move_cursor_to(&mut session, Position::new(3, 0));
        session.set_cell(Digit::D6);
        move_cursor_to(&mut session, Position::new(8, 8));
        assert_eq!(
            session.classify(Position::new(2, 0)),
            CellAppearance::Incorrect
        );
        assert_eq!(
            session.classify(Position::new(3, 0)),
            CellAppearance::Correct
        );
    }

    #[test]
    fn filling_the_solution_completes_the_session() {
        let mut session = generated_session();
        let solution = session.solution().clone();

        for pos in Position::ALL {
            if session.current()[pos].is_none() {
                move_cursor_to(&mut session, pos);
                session.set_cell(solution[pos].unwrap());
            }
        }

        assert!(session.is_complete());
        assert_eq!(session.progress(), GameSession::COMPLETE_COUNT);
    }
}
