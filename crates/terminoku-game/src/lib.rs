//! Interactive game session state for Terminoku.
//!
//! [`GameSession`] owns the three grids of one puzzle instance (solution,
//! problem, and the grid the player edits), the cursor, and the progress
//! bookkeeping. A front-end drives it through cursor movement and cell
//! edits, and reads back per-cell [`CellAppearance`] classifications plus a
//! progress count for rendering.
//!
//! ```
//! use terminoku_game::{Direction, GameSession};
//! use terminoku_generator::PuzzleGenerator;
//!
//! let puzzle = PuzzleGenerator::new().generate().unwrap();
//! let mut session = GameSession::new(puzzle);
//!
//! session.move_cursor(Direction::Left);
//! assert!(!session.is_complete());
//! ```

mod cell;
mod session;

pub use self::{
    cell::{CellAppearance, EditOutcome},
    session::{Direction, GameSession},
};
