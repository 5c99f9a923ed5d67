//! Randomized constructive filling of a solved grid.

use rand::{Rng, RngExt as _};
use terminoku_core::{Digit, DigitGrid, Position, rules};

use crate::GenerateError;

/// Builds a fully solved grid by randomized fill with localized repair.
///
/// Cells are visited in row-major order. Each cell tries a random starting
/// digit and advances cyclically (9 wraps to 1) past conflicts; if all nine
/// digits conflict the row is a dead end: it is cleared and refilled from
/// its first column. A row that dead-ends twice in immediate succession
/// escalates: every row up to and including it is cleared and the fill
/// restarts from the top with fresh randomness.
///
/// The escalation threshold is exactly two consecutive dead ends of one
/// row; earlier rows are only discarded through that cascade.
///
/// Each dead end consumes one unit of `dead_end_budget`; exhausting the
/// budget reports [`GenerateError::RepairBudgetExhausted`] instead of
/// looping forever on a defective random source.
pub(crate) fn fill_solution<R>(
    rng: &mut R,
    dead_end_budget: u32,
) -> Result<DigitGrid, GenerateError>
where
    R: Rng,
{
    let mut grid = DigitGrid::new();
    let mut total_dead_ends = 0;
    let mut clears_since_restart = 0;
    let mut last_cleared_row = 0;

    let mut y = 0;
    while y < 9 {
        let mut x = 0;
        while x < 9 {
            let pos = Position::new(x, y);
            if let Some(digit) = random_fit(&grid, pos, rng) {
                grid.set(pos, Some(digit));
                x += 1;
                continue;
            }

            total_dead_ends += 1;
            if total_dead_ends > dead_end_budget {
                return Err(GenerateError::RepairBudgetExhausted {
                    dead_ends: total_dead_ends,
                });
            }

            clear_row(&mut grid, y);
            clears_since_restart += 1;
            if clears_since_restart > 1 && last_cleared_row == y {
                for row in 0..=y {
                    clear_row(&mut grid, row);
                }
                y = 0;
                clears_since_restart = 0;
            }
            last_cleared_row = y;
            x = 0;
        }
        y += 1;
    }

    Ok(grid)
}

/// Picks a digit that fits at `pos`, starting from a random candidate and
/// advancing cyclically, or `None` once all nine candidates conflict.
fn random_fit<R>(grid: &DigitGrid, pos: Position, rng: &mut R) -> Option<Digit>
where
    R: Rng,
{
    let start: u8 = rng.random_range(1..=9);
    let mut value = start;
    loop {
        let digit = Digit::from_value(value);
        if rules::placement_fits(grid, pos, digit) {
            return Some(digit);
        }
        value = if value < 9 { value + 1 } else { 1 };
        if value == start {
            return None;
        }
    }
}

fn clear_row(grid: &mut DigitGrid, y: u8) {
    for x in 0..9 {
        grid.set(Position::new(x, y), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PuzzleSeed;

    #[test]
    fn test_fill_produces_solved_grids() {
        for variant in 0..20 {
            let mut rng = PuzzleSeed::from_bytes([variant; 32]).to_rng();
            let grid = fill_solution(&mut rng, u32::MAX).unwrap();
            assert!(grid.is_full(), "seed byte {variant} left empty cells");
            assert!(
                rules::is_solved(&grid),
                "seed byte {variant} violated a constraint:\n{grid}"
            );
        }
    }

    #[test]
    fn test_fill_is_deterministic_for_a_seed() {
        let seed = PuzzleSeed::from_bytes([42; 32]);
        let first = fill_solution(&mut seed.to_rng(), u32::MAX).unwrap();
        let second = fill_solution(&mut seed.to_rng(), u32::MAX).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_budget_fails_once_repair_is_needed() {
        // Across a handful of seeds at least one fill needs a repair, and a
        // zero budget must turn that repair into an error, not a hang.
        let exhausted = (0..20).any(|variant| {
            let mut rng = PuzzleSeed::from_bytes([variant; 32]).to_rng();
            matches!(
                fill_solution(&mut rng, 0),
                Err(GenerateError::RepairBudgetExhausted { .. })
            )
        });
        assert!(exhausted);
    }

    #[test]
    fn test_random_fit_respects_conflicts() {
        let mut grid = DigitGrid::new();
        // Fill row 0 with 1-8, leaving only 9 for the last cell.
        for (x, digit) in (0..8).zip(Digit::ALL) {
            grid.set(Position::new(x, 0), Some(digit));
        }

        let mut rng = PuzzleSeed::from_bytes([7; 32]).to_rng();
        for _ in 0..50 {
            let digit = random_fit(&grid, Position::new(8, 0), &mut rng);
            assert_eq!(digit, Some(Digit::D9));
        }
    }

    #[test]
    fn test_random_fit_reports_dead_end() {
        let mut grid = DigitGrid::new();
        // A full row leaves no candidate for a cell of that row.
        for (x, digit) in (0..9).zip(Digit::ALL) {
            grid.set(Position::new(x, 0), Some(digit));
        }
        grid.set(Position::new(4, 0), None);
        // The reopened cell sees eight row conflicts, and its own old digit
        // now conflicts through the column.
        grid.set(Position::new(4, 1), Some(Digit::D5));

        let mut rng = PuzzleSeed::from_bytes([9; 32]).to_rng();
        assert_eq!(random_fit(&grid, Position::new(4, 0), &mut rng), None);
    }
}
