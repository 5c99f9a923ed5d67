//! A 9×9 board of optional digits.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{Digit, Position};

/// A 9×9 board where each cell is either empty or holds a [`Digit`].
///
/// The same type backs every grid the engine works with: the fully solved
/// grid, the puzzle ("problem") grid with hidden cells, and the grid the
/// player edits. Cells are addressed by [`Position`] through [`Index`] /
/// [`IndexMut`] or the [`get`](Self::get) / [`set`](Self::set) pair.
///
/// # String format
///
/// Grids parse from and display as 81 characters in row-major order, one per
/// cell. Digits `1`-`9` are filled cells; `.`, `_`, and `0` parse as empty
/// cells (display always uses `.`). Whitespace is ignored on parse, so grids
/// can be written one row per line in tests:
///
/// ```
/// use terminoku_core::DigitGrid;
///
/// let grid: DigitGrid = "
///     534 678 912
///     672 195 348
///     198 342 567
///     859 761 423
///     426 853 791
///     713 924 856
///     961 537 284
///     287 419 635
///     345 286 179
/// "
/// .parse()
/// .unwrap();
/// assert!(grid.is_full());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets the cell at `pos` to `digit` (`None` empties the cell).
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns the number of non-empty cells.
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Returns whether every cell holds a digit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for DigitGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.index()]
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}

/// Error parsing a [`DigitGrid`] from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseDigitGridError {
    /// The string has the wrong number of significant characters.
    #[display("grid string has {count} significant characters, expected 81")]
    WrongLength {
        /// Number of non-whitespace characters found.
        count: usize,
    },
    /// The string contains a character that is not a digit or empty marker.
    #[display("invalid character {character:?} in grid string")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
}

impl FromStr for DigitGrid {
    type Err = ParseDigitGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match c {
                '.' | '_' | '0' => None,
                _ => Some(
                    Digit::from_char(c)
                        .ok_or(ParseDigitGridError::InvalidCharacter { character: c })?,
                ),
            };
            if count < 81 {
                grid.cells[count] = cell;
            }
            count += 1;
        }
        if count == 81 {
            Ok(grid)
        } else {
            Err(ParseDigitGridError::WrongLength { count })
        }
    }
}
