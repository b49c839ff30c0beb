//! Game controller
//!
//! `Game` owns the current `GameState` and is the only place a new state is
//! produced. A move is validated against the current state, the successor is
//! built in full, and only then does it replace the current state. A rejected
//! move leaves the game exactly as it was.

mod shared;

pub use shared::SharedGame;

use crate::board::FenError;
use crate::error::MoveError;
use crate::movegen::is_in_check;
use crate::state::{GameState, GameStatus};
use crate::types::{Color, Move, PieceKind};
use crate::validator::{self, MoveList};

/// A game in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// New game from the standard starting position.
    pub fn new() -> Game {
        Game {
            state: GameState::new(),
        }
    }

    /// Game starting from a FEN position.
    pub fn from_fen(fen: &str) -> Result<Game, FenError> {
        Ok(Game {
            state: GameState::from_fen(fen)?,
        })
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn legal_moves(&self) -> MoveList {
        validator::legal_moves(&self.state)
    }

    /// Validates `mv` and, if accepted, replaces the current state with its
    /// successor.
    ///
    /// # Errors
    /// `GameOver` once the game has ended, otherwise whatever the validator
    /// rejects the move with. The state is unchanged on error.
    pub fn apply_move(&mut self, mv: Move) -> Result<&GameState, MoveError> {
        if self.state.is_terminal() {
            log::debug!("rejected {mv}: game is over ({})", self.state.status());
            return Err(MoveError::GameOver {
                status: self.state.status(),
            });
        }
        let resolved = validator::validate(&self.state, mv)?;
        let next = successor(&self.state, resolved);
        log::info!(
            "{} played {resolved}, {} to move, status {}",
            self.state.turn(),
            next.turn(),
            next.status()
        );
        self.state = next;
        Ok(&self.state)
    }
}

/// State after a validated move.
fn successor(state: &GameState, mv: Move) -> GameState {
    let board = state.board().with_move(mv);
    for color in Color::ALL {
        let kings = board.count(color, PieceKind::King);
        assert_eq!(
            kings, 1,
            "board invariant violated: {kings} {color} kings after {mv} on {board:?}"
        );
    }
    let mut history = state.history().to_vec();
    history.push(mv);

    let before = state.board();
    let resets_clock = before.piece_at(mv.to).is_some()
        || before
            .piece_at(mv.from)
            .is_some_and(|p| p.kind() == PieceKind::Pawn);
    let mut next = GameState {
        board,
        turn: state.turn().opponent(),
        history,
        status: GameStatus::InProgress,
        initial: state.initial,
        halfmove_clock: if resets_clock {
            0
        } else {
            state.halfmove_clock + 1
        },
        fullmove_number: state.fullmove_number + u32::from(state.turn() == Color::Black),
    };
    next.status = compute_status(&next);
    next
}

/// Status of the side to move in `state`.
pub(crate) fn compute_status(state: &GameState) -> GameStatus {
    let in_check = is_in_check(state.board(), state.turn());
    match (in_check, validator::has_legal_move(state)) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::InProgress,
    }
}
