//! Core data structures and rules for the Terminoku game engine.
//!
//! This crate provides the board model shared by puzzle generation, the game
//! session, and the terminal front-end:
//!
//! - [`Digit`]: type-safe representation of the digits 1-9
//! - [`Position`]: a cell coordinate on the 9×9 board
//! - [`House`]: a constraint group (row, column, or 3×3 block)
//! - [`DigitGrid`]: a 9×9 board of optional digits
//! - [`rules`]: pure constraint predicates over a grid
//!
//! Empty cells are modeled as [`Option::None`] rather than a sentinel digit,
//! so a [`Digit`] is always a valid entry.
//!
//! # Examples
//!
//! ```
//! use terminoku_core::{Digit, DigitGrid, Position, rules};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(0, 0), Some(Digit::D5));
//!
//! // 5 may not be placed again in the same row
//! assert!(rules::digit_in_row(&grid, Position::new(8, 0), Digit::D5));
//! assert!(!rules::placement_fits(&grid, Position::new(8, 0), Digit::D5));
//! ```

pub mod digit;
pub mod grid;
pub mod house;
pub mod position;
pub mod rules;

pub use self::{
    digit::Digit,
    grid::{DigitGrid, ParseDigitGridError},
    house::House,
    position::Position,
};
