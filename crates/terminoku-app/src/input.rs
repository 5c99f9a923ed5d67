//! Keyboard input mapping.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use terminoku_core::Digit;
use terminoku_game::Direction;

/// A player action decoded from one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    /// Move the cursor one cell.
    Move(Direction),
    /// Enter a digit at the cursor.
    Set(Digit),
    /// Clear the digit at the cursor.
    Clear,
    /// Show the menu.
    ShowMenu,
    /// Hide the menu.
    HideMenu,
    /// Discard all edits.
    Reset,
    /// Show the solution until the next key press.
    Hint,
    /// Generate a new puzzle.
    NewPuzzle,
    /// Leave the game.
    Quit,
}

impl Command {
    /// Maps a key event to a command, or `None` for unbound keys.
    pub(crate) fn from_key(key: &KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Char(c) => Self::from_char(c),
            KeyCode::Up => Some(Self::Move(Direction::Up)),
            KeyCode::Down => Some(Self::Move(Direction::Down)),
            KeyCode::Left => Some(Self::Move(Direction::Left)),
            KeyCode::Right => Some(Self::Move(Direction::Right)),
            KeyCode::Backspace | KeyCode::Delete => Some(Self::Clear),
            KeyCode::Esc => Some(Self::Quit),
            _ => None,
        }
    }

    fn from_char(c: char) -> Option<Self> {
        if let Some(digit) = Digit::from_char(c) {
            return Some(Self::Set(digit));
        }
        match c.to_ascii_lowercase() {
            'w' => Some(Self::Move(Direction::Up)),
            's' => Some(Self::Move(Direction::Down)),
            'a' => Some(Self::Move(Direction::Left)),
            'd' => Some(Self::Move(Direction::Right)),
            '0' => Some(Self::Clear),
            'm' => Some(Self::ShowMenu),
            'c' => Some(Self::HideMenu),
            'r' => Some(Self::Reset),
            'h' => Some(Self::Hint),
            'n' => Some(Self::NewPuzzle),
            'q' => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Blocks until a key press that maps to a command.
pub(crate) fn read_command() -> io::Result<Command> {
    loop {
        if let Event::Key(key) = event::read()?
            && key.kind != KeyEventKind::Release
            && let Some(command) = Command::from_key(&key)
        {
            return Ok(command);
        }
    }
}

/// Blocks until any key press.
pub(crate) fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()?
            && key.kind != KeyEventKind::Release
        {
            return Ok(());
        }
    }
}
