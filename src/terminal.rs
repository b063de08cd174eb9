//! Line-oriented play loop over any reader/writer pair.
//!
//! The loop owns one `GameState`. Core errors are printed and the loop waits
//! for the next command; only I/O failures end it early.

use std::io::{self, BufRead, Write};

use log::{debug, warn};
use thiserror::Error;

use chess_board_core::chess_errors::ChessErrors;
use chess_board_core::engines::engine_random::RandomEngine;
use chess_board_core::engines::engine_trait::Engine;
use chess_board_core::game_state::chess_types::{Color, Square};
use chess_board_core::game_state::game_state::GameState;
use chess_board_core::game_state::undo_state::MoveRecord;
use chess_board_core::utils::algebraic::{algebraic_to_square, square_to_algebraic};
use chess_board_core::utils::render_game_state::{render_board, render_board_ascii};

use crate::config::Config;

const HELP: &str = "\
commands:
  e2 e4 | e2e4   move a piece
  moves e2       list candidate destinations
  undo           take back the last move (and the engine reply)
  board          redraw the board
  history        list moves so far
  reset          start a new game
  help           show this text
  quit           leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Square, Square),
    Moves(Square),
    Undo,
    Board,
    History,
    Reset,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error(transparent)]
    Square(#[from] ChessErrors),
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => Err(CommandError::Empty),
        ["quit"] | ["exit"] => Ok(Command::Quit),
        ["undo"] => Ok(Command::Undo),
        ["board"] => Ok(Command::Board),
        ["history"] => Ok(Command::History),
        ["reset"] => Ok(Command::Reset),
        ["help"] => Ok(Command::Help),
        ["moves", square] => Ok(Command::Moves(algebraic_to_square(square)?)),
        [from, to] => Ok(Command::Move(
            algebraic_to_square(from)?,
            algebraic_to_square(to)?,
        )),
        [both] if both.len() == 4 && both.is_ascii() => Ok(Command::Move(
            algebraic_to_square(&both[..2])?,
            algebraic_to_square(&both[2..])?,
        )),
        _ => Err(CommandError::Unknown(line.trim().to_owned())),
    }
}

pub struct Terminal {
    game: GameState,
    opponent: Option<(Color, Box<dyn Engine>)>,
    ascii: bool,
}

impl Terminal {
    pub fn new(config: &Config) -> Self {
        let opponent = config.ai.map(|side| {
            let engine = match config.seed {
                Some(seed) => RandomEngine::with_seed(seed),
                None => RandomEngine::new(),
            };
            (Color::from(side), Box::new(engine) as Box<dyn Engine>)
        });
        Self {
            game: GameState::new_game(),
            opponent,
            ascii: config.ascii,
        }
    }

    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{HELP}")?;
        self.draw(out)?;

        let mut line = String::new();
        loop {
            if self.engine_to_move() {
                if !self.play_engine_move(out)? {
                    return Ok(());
                }
                self.draw(out)?;
                continue;
            }

            write!(out, "{} to move> ", self.game.current_player())?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(());
            }

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(CommandError::Empty) => continue,
                Err(err) => {
                    writeln!(out, "{err}")?;
                    continue;
                }
            };
            debug!("command {command:?}");

            match command {
                Command::Quit => return Ok(()),
                Command::Help => writeln!(out, "{HELP}")?,
                Command::Board => self.draw(out)?,
                Command::History => self.print_history(out)?,
                Command::Reset => {
                    self.game.reset();
                    if let Some((_, engine)) = self.opponent.as_mut() {
                        engine.new_game();
                    }
                    self.draw(out)?;
                }
                Command::Moves(origin) => {
                    let targets: Vec<String> = self
                        .game
                        .candidate_destinations(origin)
                        .into_iter()
                        .map(name)
                        .collect();
                    if targets.is_empty() {
                        writeln!(out, "no moves from {}", name(origin))?;
                    } else {
                        writeln!(out, "{}: {}", name(origin), targets.join(" "))?;
                    }
                }
                Command::Undo => self.undo(out)?,
                Command::Move(origin, destination) => {
                    match self.game.apply_move(origin, destination) {
                        Ok(record) => {
                            writeln!(out, "{}", describe(&record))?;
                            self.draw(out)?;
                        }
                        Err(err) => writeln!(out, "illegal: {err}")?,
                    }
                }
            }
        }
    }

    fn engine_to_move(&self) -> bool {
        matches!(&self.opponent, Some((side, _)) if *side == self.game.current_player())
    }

    /// Returns `false` when the engine has nothing to play.
    fn play_engine_move<W: Write>(&mut self, out: &mut W) -> io::Result<bool> {
        let Some((_, engine)) = self.opponent.as_mut() else {
            return Ok(true);
        };

        let proposal = match engine.choose_move(&self.game) {
            Ok(output) => output.best_move,
            Err(err) => {
                warn!("engine failed: {err}");
                writeln!(out, "engine error: {err}")?;
                return Ok(false);
            }
        };
        let Some((origin, destination)) = proposal else {
            writeln!(out, "{} has no moves; game over", self.game.current_player())?;
            return Ok(false);
        };

        match self.game.apply_move(origin, destination) {
            Ok(record) => {
                writeln!(out, "engine: {}", describe(&record))?;
                Ok(true)
            }
            Err(err) => {
                warn!("engine proposed an illegal move: {err}");
                writeln!(out, "engine error: {err}")?;
                Ok(false)
            }
        }
    }

    fn undo<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let Some(record) = self.game.undo_move() else {
            writeln!(out, "nothing to undo")?;
            return Ok(());
        };
        writeln!(out, "undid {}", describe(&record))?;

        // Otherwise the engine would immediately replay its turn.
        if self.engine_to_move() {
            if let Some(record) = self.game.undo_move() {
                writeln!(out, "undid {}", describe(&record))?;
            }
        }
        self.draw(out)
    }

    fn print_history<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.game.history().is_empty() {
            return writeln!(out, "no moves yet");
        }
        for (n, record) in self.game.history().iter().enumerate() {
            writeln!(out, "{}. {}", n + 1, describe(record))?;
        }
        Ok(())
    }

    fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let board = if self.ascii {
            render_board_ascii(self.game.board())
        } else {
            render_board(self.game.board())
        };
        writeln!(out, "{board}")
    }
}

fn name(square: Square) -> String {
    square_to_algebraic(square).unwrap_or_else(|_| square.to_string())
}

fn describe(record: &MoveRecord) -> String {
    let mut text = format!(
        "{} {} -> {}",
        record.piece,
        name(record.origin),
        name(record.destination)
    );
    if let Some(captured) = record.captured_piece {
        text.push_str(&format!(" takes {captured}"));
    }
    text
}
