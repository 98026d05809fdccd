//! Interactive game session: prompt, read a command, apply it, repeat.

use crate::config::DisplayConfig;
use crate::input::Command;
use crate::render;
use chess_core::Color;
use chess_game::{Game, MoveOutcome};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  <from> <to>   move a piece, e.g. 'a2 a4' or 'e2e4'
  moves <sq>    list where the piece on <sq> can go
  board         redraw the board
  history       list the moves played so far
  help          show this help
  quit          leave the game
The game ends when a king is captured.";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// A king was captured.
    Won(Color),
    /// The player typed `quit`.
    Quit,
    /// Input ran out before the game ended.
    EndOfInput,
}

/// A game played over a line-based reader and writer.
pub struct Session<R, W> {
    game: Game,
    input: R,
    output: W,
    display: DisplayConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, input: R, output: W, display: DisplayConfig) -> Self {
        Session {
            game,
            input,
            output,
            display,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs until a king is captured, the player quits, or input ends.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        self.show_board()?;
        loop {
            if let Some(winner) = self.game.winner() {
                return Ok(SessionEnd::Won(winner));
            }

            write!(self.output, "{}> ", self.game.turn())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(SessionEnd::EndOfInput);
            }
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Ok(command) => {
                    if let Some(end) = self.execute(command)? {
                        return Ok(end);
                    }
                }
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn execute(&mut self, command: Command) -> io::Result<Option<SessionEnd>> {
        match command {
            Command::Move(m) => match self.game.play(m) {
                Ok(outcome) => {
                    if let MoveOutcome::Continue {
                        captured: Some(piece),
                    } = outcome
                    {
                        writeln!(self.output, "Captured {}.", piece)?;
                    }
                    self.show_board()?;
                }
                Err(e) => writeln!(self.output, "Illegal move: {}.", e)?,
            },
            Command::Moves(sq) => {
                let targets = self.game.legal_destinations(sq);
                if targets.is_empty() {
                    writeln!(self.output, "No moves from {}.", sq)?;
                } else {
                    let names: Vec<String> = targets.iter().map(|t| t.to_string()).collect();
                    writeln!(self.output, "{}: {}", sq, names.join(" "))?;
                }
            }
            Command::Board => self.show_board()?,
            Command::History => {
                if self.game.history().is_empty() {
                    writeln!(self.output, "No moves yet.")?;
                }
                for (i, played) in self.game.history().iter().enumerate() {
                    write!(self.output, "{:>3}. {} {}", i + 1, played.piece, played.mov)?;
                    if let Some(captured) = played.captured {
                        write!(self.output, " takes {}", captured)?;
                    }
                    writeln!(self.output)?;
                }
            }
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Quit => return Ok(Some(SessionEnd::Quit)),
        }
        Ok(None)
    }

    fn show_board(&mut self) -> io::Result<()> {
        let text = render::render(&self.game.state(), &self.display);
        write!(self.output, "{}", text)
    }
}
