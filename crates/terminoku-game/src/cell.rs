//! Cell classification and edit results.

use derive_more::IsVariant;

/// How a cell should be presented by a renderer.
///
/// Exactly one variant applies to each cell, resolved in this priority
/// order: the cursor cell is always [`Cursor`](Self::Cursor); a shown,
/// editable digit that conflicts with its row, column, or block is
/// [`Incorrect`](Self::Incorrect); an untouched given is
/// [`Given`](Self::Given); any other shown digit is
/// [`Correct`](Self::Correct); everything else is [`Empty`](Self::Empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum CellAppearance {
    /// The cell under the cursor.
    Cursor,
    /// A given digit from the generated puzzle.
    Given,
    /// A player-entered digit with no conflicts.
    Correct,
    /// A player-entered digit that conflicts with a row, column, or block.
    Incorrect,
    /// An empty cell.
    Empty,
}

/// Result of a player edit at the cursor.
///
/// Edits to given cells are defined no-ops, not errors; this result makes
/// the no-op observable to callers that care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum EditOutcome {
    /// The edit was applied to the cell.
    Applied,
    /// The cell is a given; the grid was left untouched.
    RejectedGiven,
}
