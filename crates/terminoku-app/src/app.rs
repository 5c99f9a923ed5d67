//! The interactive application loop.

use std::io::{self, Write};

use crossterm::{cursor, execute, terminal};
use terminoku_game::GameSession;
use terminoku_generator::{GenerateError, PuzzleGenerator};

use crate::{
    input::{self, Command},
    ui,
};

/// Fatal application errors.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum AppError {
    /// Terminal I/O failed.
    #[display("terminal i/o failed: {_0}")]
    Io(io::Error),
    /// Puzzle generation failed.
    #[display("puzzle generation failed: {_0}")]
    Generate(GenerateError),
}

/// The running game: session state plus front-end concerns.
pub(crate) struct App {
    session: GameSession,
    generator: PuzzleGenerator,
    menu_shown: bool,
}

impl App {
    pub(crate) fn new(session: GameSession, generator: PuzzleGenerator) -> Self {
        Self {
            session,
            generator,
            menu_shown: true,
        }
    }

    /// Runs the game until completion or quit, restoring the terminal on the
    /// way out even when the loop fails.
    pub(crate) fn run(mut self) -> Result<(), AppError> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        let _ = execute!(out, cursor::Hide);

        let result = self.event_loop(&mut out);

        let _ = execute!(out, cursor::Show);
        let _ = terminal::disable_raw_mode();
        result
    }

    fn event_loop(&mut self, out: &mut impl Write) -> Result<(), AppError> {
        ui::draw_rules(out)?;
        input::wait_for_key()?;

        loop {
            ui::draw_screen(out, &self.session, self.menu_shown)?;
            if self.session.is_complete() {
                ui::draw_end_screen(out, self.session.score())?;
                input::wait_for_key()?;
                return Ok(());
            }

            let command = input::read_command()?;
            log::debug!("command: {command:?}");
            match command {
                Command::Move(direction) => self.session.move_cursor(direction),
                Command::Set(digit) => {
                    if self.session.set_cell(digit).is_rejected_given() {
                        log::debug!("ignored edit of given cell {:?}", self.session.cursor());
                    }
                }
                Command::Clear => {
                    self.session.clear_cell();
                }
                Command::ShowMenu => self.menu_shown = true,
                Command::HideMenu => self.menu_shown = false,
                Command::Reset => self.session.reset(),
                Command::Hint => {
                    ui::draw_hint(out, &self.session)?;
                    input::wait_for_key()?;
                }
                Command::NewPuzzle => self.session.regenerate(&self.generator)?,
                Command::Quit => return Ok(()),
            }
        }
    }
}
