//! Digit hiding: deriving a problem grid from a solved grid.

use std::ops::RangeInclusive;

use rand::{Rng, RngExt as _};
use terminoku_core::{Digit, DigitGrid, House, Position};

/// How many cells are hidden in each 3×3 block: 5 to 7 of the 9, leaving 2
/// to 4 givens per block.
pub(crate) const HIDDEN_PER_BLOCK: RangeInclusive<u8> = 5..=7;

/// Clears a randomized number of cells per block, turning a solved grid into
/// a problem grid.
///
/// Blocks are visited in row-major order. Each block draws its own hide
/// count from [`HIDDEN_PER_BLOCK`], so the pattern is re-sampled
/// independently on every generation.
pub(crate) fn hide_digits<R>(grid: &mut DigitGrid, rng: &mut R)
where
    R: Rng,
{
    for block in House::BLOCKS {
        let target = rng.random_range(HIDDEN_PER_BLOCK);
        hide_in_block(grid, block, target, rng);
    }
}

/// Hides `target` cells of one block.
///
/// Each removal draws a random digit value, advances it cyclically (9 wraps
/// to 1), and scans the block row-major for the first cell still holding
/// that exact value; the scan keeps cycling values until it lands on one
/// that is still present. The cycling is unbounded by design: the block
/// starts with nine distinct digits and `target` never exceeds 7, so at
/// least two digits remain present and every round trip through the values
/// finds one.
fn hide_in_block<R>(grid: &mut DigitGrid, block: House, target: u8, rng: &mut R)
where
    R: Rng,
{
    let cells = block.positions();
    for _ in 0..target {
        let mut value: u8 = rng.random_range(1..=9);
        let found = loop {
            value = if value < 9 { value + 1 } else { 1 };
            let digit = Digit::from_value(value);
            if let Some(pos) = find_digit(grid, &cells, digit) {
                break pos;
            }
        };
        grid.set(found, None);
    }
}

fn find_digit(grid: &DigitGrid, cells: &[Position; 9], digit: Digit) -> Option<Position> {
    cells.iter().copied().find(|&pos| grid[pos] == Some(digit))
}

#[cfg(test)]
mod tests {
    use terminoku_core::rules;

    use super::*;
    use crate::{PuzzleSeed, fill};

    fn hidden_count(grid: &DigitGrid, block: House) -> usize {
        block
            .positions()
            .into_iter()
            .filter(|&pos| grid[pos].is_none())
            .count()
    }

    #[test]
    fn test_every_block_hides_five_to_seven_cells() {
        for variant in 0..20 {
            let mut rng = PuzzleSeed::from_bytes([variant; 32]).to_rng();
            let mut grid = fill::fill_solution(&mut rng, u32::MAX).unwrap();
            hide_digits(&mut grid, &mut rng);

            for block in House::BLOCKS {
                let hidden = hidden_count(&grid, block);
                assert!(
                    (5..=7).contains(&hidden),
                    "seed byte {variant}, {block:?}: {hidden} cells hidden"
                );
            }
        }
    }

    #[test]
    fn test_retained_digits_match_the_solution() {
        let mut rng = PuzzleSeed::from_bytes([3; 32]).to_rng();
        let solution = fill::fill_solution(&mut rng, u32::MAX).unwrap();
        let mut problem = solution.clone();
        hide_digits(&mut problem, &mut rng);

        for pos in Position::ALL {
            if let Some(digit) = problem[pos] {
                assert_eq!(Some(digit), solution[pos]);
            }
        }
    }

    #[test]
    fn test_hide_in_block_removes_exact_count() {
        let mut rng = PuzzleSeed::from_bytes([11; 32]).to_rng();
        let mut grid = fill::fill_solution(&mut rng, u32::MAX).unwrap();

        let block = House::Block { index: 4 };
        hide_in_block(&mut grid, block, 7, &mut rng);
        assert_eq!(hidden_count(&grid, block), 7);

        // Other blocks are untouched
        for other in House::BLOCKS {
            if other != block {
                assert_eq!(hidden_count(&grid, other), 0);
            }
        }
    }

    #[test]
    fn test_remaining_givens_stay_conflict_free() {
        let mut rng = PuzzleSeed::from_bytes([5; 32]).to_rng();
        let mut grid = fill::fill_solution(&mut rng, u32::MAX).unwrap();
        hide_digits(&mut grid, &mut rng);

        for pos in Position::ALL {
            if grid[pos].is_some() {
                assert!(rules::entry_is_correct(&grid, pos));
            }
        }
    }
}
