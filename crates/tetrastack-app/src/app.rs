//! The interactive menu loop.

use std::io::{self, BufRead, Write};

use tetrastack_game::Session;

use crate::menu::MenuChoice;

/// The console front end: renders the session state, reads menu selections,
/// and dispatches them.
#[derive(Debug)]
pub(crate) struct App {
    session: Session,
}

impl App {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Runs the menu loop until the player quits or the input ends.
    ///
    /// All game errors are reported as one informational line and the loop
    /// continues; only I/O failures bubble up.
    pub(crate) fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        loop {
            self.render(out)?;
            write!(out, "Choice: ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // End of input counts as a quit request.
                writeln!(out)?;
                writeln!(out, "Shutting down the piece manager. Bye!")?;
                return Ok(());
            }

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Quit) => {
                    writeln!(out)?;
                    writeln!(out, "Shutting down the piece manager. Bye!")?;
                    return Ok(());
                }
                Some(choice) => self.dispatch(choice, out)?,
                None => {
                    writeln!(out)?;
                    writeln!(out, "Invalid option, try again.")?;
                }
            }
        }
    }

    fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "====================================")?;
        writeln!(out, "      TETRIS STACK PIECE MANAGER")?;
        writeln!(out, "====================================")?;
        writeln!(out)?;
        writeln!(out, "Current state:")?;
        writeln!(out, "  Piece queue    {}", self.session.queue())?;
        if self.session.reserve().is_empty() {
            writeln!(out, "  Reserve stack  (empty)")?;
        } else {
            writeln!(
                out,
                "  Reserve stack  (top -> base): {}",
                self.session.reserve()
            )?;
        }
        writeln!(out)?;
        writeln!(out, "Options:")?;
        writeln!(out, "  1 - play the piece at the front of the queue")?;
        writeln!(out, "  2 - send the front piece to the reserve stack")?;
        writeln!(out, "  3 - use a piece from the reserve stack")?;
        writeln!(out, "  4 - swap the front piece with the top of the reserve")?;
        writeln!(out, "  5 - swap the first three queue pieces with the three reserved")?;
        writeln!(out, "  0 - quit")?;
        Ok(())
    }

    fn dispatch<W: Write>(&mut self, choice: MenuChoice, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        match choice {
            MenuChoice::Play => match self.session.play() {
                Ok(outcome) => {
                    log::debug!("played {}", outcome.played);
                    writeln!(out, "Action: you played piece {}", outcome.played)?;
                    if let Some(piece) = outcome.replacement {
                        writeln!(out, "New piece generated and queued: {piece}")?;
                    }
                }
                Err(err) => writeln!(out, "Action failed: {err}.")?,
            },
            MenuChoice::Reserve => match self.session.reserve_front() {
                Ok(outcome) => {
                    log::debug!("reserved {}", outcome.reserved);
                    writeln!(
                        out,
                        "Action: front piece sent to the reserve: {}",
                        outcome.reserved
                    )?;
                    if let Some(piece) = outcome.replacement {
                        writeln!(out, "New piece generated and queued: {piece}")?;
                    }
                }
                Err(err) => writeln!(out, "Action failed: {err}.")?,
            },
            MenuChoice::UseReserved => match self.session.use_reserved() {
                Ok(piece) => {
                    log::debug!("used reserved {piece}");
                    writeln!(out, "Action: you used reserved piece {piece}")?;
                }
                Err(err) => writeln!(out, "Action failed: {err}.")?,
            },
            MenuChoice::SwapCurrent => match self.session.swap_current() {
                Ok(()) => writeln!(
                    out,
                    "Action: swapped the front of the queue with the top of the reserve."
                )?,
                Err(err) => writeln!(out, "Action failed: {err}.")?,
            },
            MenuChoice::SwapBlock => match self.session.swap_block() {
                Ok(()) => writeln!(
                    out,
                    "Action: swapped the first three queue pieces with the three reserved."
                )?,
                Err(err) => writeln!(out, "Action failed: {err}.")?,
            },
            MenuChoice::Quit => {}
        }
        Ok(())
    }
}
