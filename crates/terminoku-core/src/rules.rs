//! Pure constraint predicates over a [`DigitGrid`].
//!
//! Every predicate excludes the probed cell itself, so they answer "would
//! this digit conflict with the rest of its houses" both for tentative
//! placements on a partial grid (generation) and for digits already on the
//! board (gameplay validation).

use crate::{Digit, DigitGrid, House, Position};

fn house_holds_digit(grid: &DigitGrid, house: House, skip: Position, digit: Digit) -> bool {
    house
        .positions()
        .into_iter()
        .any(|pos| pos != skip && grid[pos] == Some(digit))
}

/// Returns whether `digit` appears in the row of `pos`, at any cell other
/// than `pos` itself.
#[must_use]
pub fn digit_in_row(grid: &DigitGrid, pos: Position, digit: Digit) -> bool {
    house_holds_digit(grid, House::Row { y: pos.y() }, pos, digit)
}

/// Returns whether `digit` appears in the column of `pos`, at any cell other
/// than `pos` itself.
#[must_use]
pub fn digit_in_column(grid: &DigitGrid, pos: Position, digit: Digit) -> bool {
    house_holds_digit(grid, House::Column { x: pos.x() }, pos, digit)
}

/// Returns whether `digit` appears in the 3×3 block containing `pos`, at any
/// cell other than `pos` itself.
#[must_use]
pub fn digit_in_block(grid: &DigitGrid, pos: Position, digit: Digit) -> bool {
    house_holds_digit(
        grid,
        House::Block {
            index: pos.block_index(),
        },
        pos,
        digit,
    )
}

/// Returns whether `digit` could be placed at `pos` without conflicting with
/// its row, column, or block.
#[must_use]
pub fn placement_fits(grid: &DigitGrid, pos: Position, digit: Digit) -> bool {
    !digit_in_row(grid, pos, digit)
        && !digit_in_column(grid, pos, digit)
        && !digit_in_block(grid, pos, digit)
}

/// Returns whether the digit at `pos` does not repeat anywhere in its row,
/// column, or block.
///
/// Returns `false` for an empty cell; callers interested in empty cells
/// check for a digit first.
#[must_use]
pub fn entry_is_correct(grid: &DigitGrid, pos: Position) -> bool {
    grid[pos].is_some_and(|digit| placement_fits(grid, pos, digit))
}

/// Returns whether the grid is completely filled with no rule violations,
/// i.e. every row, column, and block holds each digit exactly once.
#[must_use]
pub fn is_solved(grid: &DigitGrid) -> bool {
    Position::ALL
        .into_iter()
        .all(|pos| entry_is_correct(grid, pos))
}
