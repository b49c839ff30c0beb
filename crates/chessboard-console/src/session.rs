//! Console controller
//!
//! A `Session` owns the `Game` and the view. User input becomes a move only
//! through `on_user_move`; the board is redrawn after every attempt, accepted
//! or not.

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use chessboard_core::{Game, GameStatus, Move, MoveError, PieceKind};

use crate::command::{Command, HELP, parse_command};
use crate::opponent::RandomOpponent;
use crate::view::BoardView;

/// What happened to a submitted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied { mv: Move, status: GameStatus },
    Rejected(MoveError),
}

/// Whether the input loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    game: Game,
    view: Box<dyn BoardView>,
    opponent: Option<RandomOpponent>,
}

impl Session {
    pub fn new(game: Game, view: Box<dyn BoardView>) -> Session {
        Session {
            game,
            view,
            opponent: None,
        }
    }

    pub fn with_opponent(mut self, opponent: RandomOpponent) -> Session {
        self.opponent = Some(opponent);
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Draws the opening position and lets the computer move if it has white.
    ///
    /// The computer's seed is shown so a game can be replayed with `--seed`.
    pub fn start(&mut self) -> io::Result<()> {
        if let Some(opponent) = &self.opponent {
            let text = format!(
                "Computer plays {} (seed {}).",
                opponent.color(),
                opponent.seed()
            );
            self.view.message(&text)?;
        }
        self.view.render_board(self.game.state())?;
        self.play_opponent()
    }

    /// Builds a move from `(row, col)` pairs and submits it.
    ///
    /// The computer replies when it is its turn after an accepted move.
    pub fn on_user_move(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
        promotion: Option<PieceKind>,
    ) -> io::Result<MoveOutcome> {
        let outcome = match Move::from_coords(from, to, promotion) {
            Ok(mv) => self.submit(mv)?,
            Err(err) => {
                log::debug!("rejected {from:?} -> {to:?}: {err}");
                self.view.render_board(self.game.state())?;
                self.report_rejection(err)?;
                MoveOutcome::Rejected(err)
            }
        };
        if matches!(outcome, MoveOutcome::Applied { .. }) {
            self.play_opponent()?;
        }
        Ok(outcome)
    }

    fn submit(&mut self, mv: Move) -> io::Result<MoveOutcome> {
        let outcome = match self.game.apply_move(mv) {
            Ok(state) => MoveOutcome::Applied {
                mv: state.last_move().unwrap_or(mv),
                status: state.status(),
            },
            Err(err) => MoveOutcome::Rejected(err),
        };
        self.view.render_board(self.game.state())?;
        if let MoveOutcome::Rejected(err) = outcome {
            self.report_rejection(err)?;
        }
        Ok(outcome)
    }

    fn report_rejection(&mut self, err: MoveError) -> io::Result<()> {
        self.view
            .message(&format!("Illegal move ({}): {err}", err.kind()))
    }

    fn play_opponent(&mut self) -> io::Result<()> {
        let Some(opponent) = self.opponent.as_mut() else {
            return Ok(());
        };
        if self.game.state().is_terminal() {
            return Ok(());
        }
        let Some(mv) = opponent.choose(self.game.state()) else {
            return Ok(());
        };
        self.view.message(&format!("{} plays {mv}", opponent.color()))?;
        match self.submit(mv)? {
            MoveOutcome::Applied { .. } => Ok(()),
            // legal_moves only yields moves the validator accepts
            MoveOutcome::Rejected(err) => unreachable!("opponent move {mv} rejected: {err}"),
        }
    }

    /// Handles one input line.
    pub fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(crate::command::CommandError::Empty) => return Ok(Flow::Continue),
            Err(err) => {
                self.view.message(&format!("error: {err}"))?;
                return Ok(Flow::Continue);
            }
        };
        let state = self.game.state();
        match command {
            Command::Move {
                from,
                to,
                promotion,
            } => {
                self.on_user_move(from, to, promotion)?;
            }
            Command::Moves => {
                let moves: Vec<String> =
                    self.game.legal_moves().iter().map(Move::to_string).collect();
                let text = if moves.is_empty() {
                    "no legal moves".to_string()
                } else {
                    moves.join(" ")
                };
                self.view.message(&text)?;
            }
            Command::Board => self.view.render_board(state)?,
            Command::Fen => {
                let fen = state.to_fen();
                self.view.message(&fen)?;
            }
            Command::Json => {
                let json = serde_json::to_string(&state.to_json()).map_err(io::Error::other)?;
                self.view.message(&json)?;
            }
            Command::History => {
                let text = format_history(state.history());
                self.view.message(&text)?;
            }
            Command::Help => self.view.message(HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        self.start().context("failed to draw the board")?;
        for line in input.lines() {
            let line = line.context("failed to read input")?;
            if self
                .handle_line(&line)
                .context("failed to write output")?
                == Flow::Quit
            {
                break;
            }
        }
        log::info!(
            "session ended after {} moves, status {}",
            self.game.state().history().len(),
            self.game.state().status()
        );
        Ok(())
    }
}

fn format_history(history: &[Move]) -> String {
    if history.is_empty() {
        return "no moves yet".to_string();
    }
    history
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| match pair {
            [white, black] => format!("{}. {white} {black}", i + 1),
            [white] => format!("{}. {white}", i + 1),
            _ => String::new(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
