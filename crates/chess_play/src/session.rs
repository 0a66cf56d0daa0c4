//! Line-oriented interactive play.
//!
//! Reads commands from any `BufRead` and writes the board and messages to any
//! `Write`, so a session can be driven from stdin or from a test buffer.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use chess_rules::{Move, Square, parse_square};
use tracing::{debug, warn};

use crate::config::DisplayConfig;
use crate::controller::{Click, Controller};
use crate::record::GameRecord;
use crate::render::{game_over_message, render_board, status_line};

const HELP: &str = "\
Commands:
  e2          select the piece on e2, or move the selected piece to e2
  e2e4        play a move in coordinate notation
  moves       list the legal moves
  board       redraw the board
  new         start a new game
  save PATH   write the game record as JSON
  help        show this text
  quit        leave
";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Click(Square),
    Play(Move),
    Moves,
    Board,
    New,
    Save(String),
    Help,
    Quit,
}

impl Command {
    /// `None` for blank lines; `Err` carries a message for unrecognised input.
    pub fn parse(line: &str) -> Option<Result<Command, String>> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };
        let cmd = match word.to_ascii_lowercase().as_str() {
            "moves" => Ok(Command::Moves),
            "board" => Ok(Command::Board),
            "new" | "restart" => Ok(Command::New),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "save" if rest.is_empty() => Err("save needs a file path".to_string()),
            "save" => Ok(Command::Save(rest.to_string())),
            _ if !rest.is_empty() => Err(format!("unknown command: {line}")),
            _ => {
                if let Some(sq) = parse_square(word) {
                    Ok(Command::Click(sq))
                } else if let Ok(mv) = word.parse::<Move>() {
                    Ok(Command::Play(mv))
                } else {
                    Err(format!("unknown command: {word}"))
                }
            }
        };
        Some(cmd)
    }
}

pub struct Session<'a> {
    ctl: Controller,
    display: &'a DisplayConfig,
}

impl<'a> Session<'a> {
    pub fn new(display: &'a DisplayConfig) -> Self {
        Self {
            ctl: Controller::new(),
            display,
        }
    }

    pub fn with_controller(ctl: Controller, display: &'a DisplayConfig) -> Self {
        Self { ctl, display }
    }

    pub fn controller(&self) -> &Controller {
        &self.ctl
    }

    /// Run until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        self.show(out)?;
        for line in input.lines() {
            let line = line?;
            let cmd = match Command::parse(&line) {
                None => continue,
                Some(Err(msg)) => {
                    writeln!(out, "{msg} (type 'help' for commands)")?;
                    continue;
                }
                Some(Ok(cmd)) => cmd,
            };
            debug!(?cmd, "command");
            if !self.execute(cmd, out)? {
                break;
            }
        }
        Ok(())
    }

    /// Carry out one command; `false` means the session should end.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<bool> {
        match cmd {
            Command::Quit => return Ok(false),
            Command::Help => write!(out, "{HELP}")?,
            Command::Board => self.show(out)?,
            Command::New => {
                self.ctl.restart();
                writeln!(out, "New game.")?;
                self.show(out)?;
            }
            Command::Moves => {
                let moves = self.ctl.game().legal_moves();
                if moves.is_empty() {
                    writeln!(out, "No legal moves.")?;
                } else {
                    let list: Vec<String> = moves.iter().map(Move::to_string).collect();
                    writeln!(out, "{}", list.join(" "))?;
                }
            }
            Command::Save(path) => {
                let record = GameRecord::from_game(self.ctl.game());
                match record.save(Path::new(&path)) {
                    Ok(()) => writeln!(out, "Saved to {path}.")?,
                    Err(e) => {
                        warn!(error = %e, "save failed");
                        writeln!(out, "Could not save: {e:#}")?;
                    }
                }
            }
            Command::Click(sq) => self.click(sq, out)?,
            Command::Play(mv) => {
                if self.ctl.game().is_game_over() {
                    self.game_over_notice(out)?;
                } else {
                    match self.ctl.submit(mv) {
                        Ok(_) => self.show(out)?,
                        Err(e) => writeln!(out, "{e}")?,
                    }
                }
            }
        }
        Ok(true)
    }

    fn click<W: Write>(&mut self, sq: Square, out: &mut W) -> Result<()> {
        match self.ctl.click(sq.row(), sq.col()) {
            Click::Selected(_) | Click::Moved(_) => self.show(out)?,
            Click::Cleared => {
                writeln!(out, "Selection cleared.")?;
                self.show(out)?;
            }
            Click::Rejected(e) => writeln!(out, "{e}")?,
            Click::Ignored => writeln!(out, "Nothing to select on {sq}.")?,
            Click::GameOver => self.game_over_notice(out)?,
        }
        Ok(())
    }

    fn game_over_notice<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "The game is over. Type 'new' to play again.")?;
        Ok(())
    }

    fn show<W: Write>(&self, out: &mut W) -> Result<()> {
        let game = self.ctl.game();
        write!(out, "{}", render_board(&self.ctl, self.display))?;
        writeln!(out, "{}", status_line(game))?;
        if let Some(msg) = game_over_message(game) {
            writeln!(out, "{msg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
