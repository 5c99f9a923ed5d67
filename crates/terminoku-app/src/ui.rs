//! Terminal rendering.
//!
//! The field is drawn as 13 lines: 9 cell rows plus 4 separator rows, with a
//! vertical separator before every 3-cell group. Cell colors follow the
//! session's classification; the hint view reuses the same field renderer
//! over the solution grid.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use terminoku_core::{DigitGrid, Position};
use terminoku_game::{CellAppearance, GameSession};

const FIELD_SPAN: u16 = 13;

fn appearance_color(appearance: CellAppearance) -> Color {
    match appearance {
        CellAppearance::Cursor => Color::Cyan,
        CellAppearance::Given => Color::Yellow,
        CellAppearance::Incorrect => Color::Red,
        CellAppearance::Correct => Color::Green,
        CellAppearance::Empty => Color::DarkGrey,
    }
}

/// Draws the 9×9 field with separators, coloring each cell by `color_at`.
fn draw_grid<W, F>(out: &mut W, grid: &DigitGrid, color_at: F) -> io::Result<()>
where
    W: Write,
    F: Fn(Position) -> Color,
{
    let mut y: u8 = 0;
    for i in 0..FIELD_SPAN {
        let mut x: u8 = 0;
        for j in 0..FIELD_SPAN {
            queue!(out, Print(' '))?;
            if i % 4 == 0 {
                queue!(out, Print('-'))?;
            } else if j % 4 == 0 {
                queue!(out, Print('|'))?;
            } else {
                let pos = Position::new(x, y);
                queue!(out, SetForegroundColor(color_at(pos)))?;
                match grid[pos] {
                    Some(digit) => queue!(out, Print(digit))?,
                    None => queue!(out, Print('*'))?,
                }
                queue!(out, ResetColor)?;
            }
            if j % 4 != 0 {
                x += 1;
            }
        }
        if i % 4 != 0 && y < 8 {
            y += 1;
        }
        queue!(out, Print("\r\n"))?;
    }
    Ok(())
}

/// Draws the playing screen: field plus menu (or the menu reminder).
pub(crate) fn draw_screen(
    out: &mut impl Write,
    session: &GameSession,
    menu_shown: bool,
) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    draw_grid(out, session.current(), |pos| {
        appearance_color(session.classify(pos))
    })?;
    if menu_shown {
        draw_menu(out, session)?;
    } else {
        queue!(
            out,
            SetForegroundColor(Color::DarkGrey),
            Print("\r\nm - show menu\r\n"),
            ResetColor
        )?;
    }
    out.flush()
}

fn draw_menu(out: &mut impl Write, session: &GameSession) -> io::Result<()> {
    let progress = session.progress();
    queue!(
        out,
        Print("\r\nm - show menu; c - close menu; Esc/q - quit\r\n"),
        Print("n - new puzzle; r - reset all changes; h - show hint\r\n"),
        Print("w,a,s,d / arrows - move; 1-9 - enter a digit; 0 - clear\r\n"),
        Print("\r\nRemains to be filled: "),
        SetForegroundColor(Color::Yellow),
        Print(81 - progress),
        ResetColor,
        Print("\r\nFilled in: "),
        SetForegroundColor(Color::Yellow),
        Print(progress),
        ResetColor,
        Print("\r\n\r\nField info:\r\n"),
        SetForegroundColor(Color::Cyan),
        Print('9'),
        ResetColor,
        Print(" or "),
        SetForegroundColor(Color::Cyan),
        Print('*'),
        ResetColor,
        Print(" - cursor;\r\n"),
        SetForegroundColor(Color::DarkGrey),
        Print('*'),
        ResetColor,
        Print(" - empty cell;\r\n"),
        SetForegroundColor(Color::Yellow),
        Print('9'),
        ResetColor,
        Print(" - generated digit;\r\n"),
        SetForegroundColor(Color::Red),
        Print('9'),
        ResetColor,
        Print(" - incorrect digit;\r\n"),
        SetForegroundColor(Color::Green),
        Print('9'),
        ResetColor,
        Print(" - correct digit;\r\n"),
    )?;
    Ok(())
}

/// Draws the rules screen shown once at startup.
pub(crate) fn draw_rules(out: &mut impl Write) -> io::Result<()> {
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print("Rules of the game \"Sudoku\":\r\n"),
        Print("------------------------------\r\n"),
        Print("- Sudoku is played over a 9x9 grid, divided\r\n"),
        Print("  into 3x3 sub grids called \"blocks\";\r\n"),
        Print("- Sudoku begins with some of the grid cells\r\n"),
        Print("  already filled with numbers;\r\n"),
        Print("- The object is to fill the empty cells so that:\r\n"),
        Print("  1. a number appears only once in each row;\r\n"),
        Print("  2. a number appears only once in each column;\r\n"),
        Print("  3. a number appears only once in each block;\r\n"),
        Print("\r\nNote: you cannot change the "),
        SetForegroundColor(Color::Yellow),
        Print("generated"),
        ResetColor,
        Print(" digits.\r\n"),
        Print("------------------------------\r\n"),
        SetForegroundColor(Color::DarkGrey),
        Print("\r\nPress any key to start.\r\n"),
        ResetColor,
    )?;
    out.flush()
}

/// Draws the solution grid as a hint view.
///
/// Givens keep their yellow; every revealed digit is green.
pub(crate) fn draw_hint(out: &mut impl Write, session: &GameSession) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    draw_grid(out, session.solution(), |pos| {
        if session.problem()[pos].is_some() {
            Color::Yellow
        } else {
            Color::Green
        }
    })?;
    queue!(
        out,
        SetForegroundColor(Color::DarkGrey),
        Print("\r\nPress any key to hide the hint.\r\n"),
        ResetColor
    )?;
    out.flush()
}

/// Draws the end-of-game message with the number of cells the player filled.
pub(crate) fn draw_end_screen(out: &mut impl Write, score: usize) -> io::Result<()> {
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        SetForegroundColor(Color::Green),
        Print("Congratulations!"),
        ResetColor,
        Print(" You have completed "),
        SetForegroundColor(Color::Cyan),
        Print("Sudoku"),
        ResetColor,
        Print(" and filled "),
        SetForegroundColor(Color::Magenta),
        Print(score),
        ResetColor,
        Print(" empty cells!\r\n"),
    )?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use terminoku_generator::{PuzzleGenerator, PuzzleSeed};

    use super::*;

    fn rendered_screen() -> String {
        let puzzle = PuzzleGenerator::new()
            .generate_with_seed(PuzzleSeed::from_bytes([1; 32]))
            .unwrap();
        let session = GameSession::new(puzzle);

        let mut buffer = Vec::new();
        draw_screen(&mut buffer, &session, true).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn screen_has_thirteen_field_lines() {
        let text = rendered_screen();
        let field_lines = text
            .lines()
            .filter(|line| line.contains(" - ") || line.contains('|'))
            .count();
        assert!(field_lines >= 13, "field lines: {field_lines}\n{text}");
    }

    #[test]
    fn screen_shows_hidden_cells_as_asterisks() {
        let text = rendered_screen();
        // Menu legend contributes two asterisks; a fresh puzzle hides at
        // least 45 cells, so the field dominates.
        let asterisks = text.matches('*').count();
        assert!(asterisks >= 45, "asterisks: {asterisks}");
    }

    #[test]
    fn hint_reveals_all_eighty_one_digits() {
        let puzzle = PuzzleGenerator::new()
            .generate_with_seed(PuzzleSeed::from_bytes([2; 32]))
            .unwrap();
        let session = GameSession::new(puzzle);

        let mut buffer = Vec::new();
        draw_hint(&mut buffer, &session).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let digits = text.chars().filter(char::is_ascii_digit).count();
        assert!(digits >= 81, "digits: {digits}");
    }
}
