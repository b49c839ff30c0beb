//! Game state
//!
//! `GameState` is the full model of a game in progress: board, side to move,
//! applied moves and status. The rights the game started with are kept
//! alongside; the current castling and en-passant rights follow from them and
//! the history on demand. Only `game::Game` produces new states.

mod json_conversion;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, FenError, parse_side_to_move};
use crate::movegen::{CastlingRights, SpecialRights, is_in_check};
use crate::types::{Color, Move, PieceKind, Square};

/// Status of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Checkmate and stalemate end the game.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::InProgress => "in-progress",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a game.
///
/// Deserializing runs the same position checks as `from_fen` and recomputes
/// the status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedGameState")]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Color,
    pub(crate) history: Vec<Move>,
    pub(crate) status: GameStatus,
    /// Rights of the position before the first move in `history`.
    pub(crate) initial: SpecialRights,
    /// Moves since the last capture or pawn move.
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl GameState {
    /// Standard starting position, white to move.
    pub fn new() -> GameState {
        GameState {
            board: Board::starting(),
            turn: Color::White,
            history: Vec::new(),
            status: GameStatus::InProgress,
            initial: SpecialRights::STARTING,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// State from a FEN string.
    ///
    /// Trailing fields may be left out: a missing side to move means white,
    /// missing castling means every right the placement still allows, and the
    /// counters default to `0 1`. An en-passant square is accepted only
    /// behind a pawn of the side that just moved.
    pub fn from_fen(fen: &str) -> Result<GameState, FenError> {
        let mut fields = fen.split_whitespace();
        let placement = fields.next().ok_or(FenError::Empty)?;
        let board = Board::from_fen_placement(placement)?;
        let turn = fields.next().map_or(Ok(Color::White), parse_side_to_move)?;
        let castling = match fields.next() {
            Some(field) => CastlingRights::from_fen_field(field)
                .ok_or_else(|| FenError::Castling(field.to_string()))?,
            None => CastlingRights::ALL,
        };
        let en_passant = match fields.next() {
            Some(field) => parse_en_passant(&board, turn, field)?,
            None => None,
        };
        let halfmove_clock = fields.next().map_or(Ok(0), parse_counter)?;
        let fullmove_number = fields.next().map_or(Ok(1), parse_counter)?;

        GameState::checked(UncheckedGameState {
            board,
            turn,
            history: Vec::new(),
            initial: SpecialRights {
                en_passant,
                castling,
            },
            halfmove_clock,
            fullmove_number,
        })
    }

    /// Validates the position and fills in its status.
    fn checked(raw: UncheckedGameState) -> Result<GameState, FenError> {
        validate_setup(&raw.board, raw.turn)?;
        if raw.fullmove_number == 0 {
            return Err(FenError::MoveCounter("0".to_string()));
        }
        let mut state = GameState {
            board: raw.board,
            turn: raw.turn,
            history: raw.history,
            status: GameStatus::InProgress,
            initial: raw.initial,
            halfmove_clock: raw.halfmove_clock,
            fullmove_number: raw.fullmove_number,
        };
        state.status = crate::game::compute_status(&state);
        Ok(state)
    }

    /// FEN of this position.
    pub fn to_fen(&self) -> String {
        let rights = self.special_rights();
        let en_passant = rights
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());
        let side = match self.turn {
            Color::White => 'w',
            Color::Black => 'b',
        };
        format!(
            "{} {side} {} {en_passant} {} {}",
            self.board.to_fen_placement(),
            rights.castling.to_fen_field(),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Applied moves, oldest first. Promotions are recorded with their
    /// resolved piece kind.
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// The side that delivered checkmate, if any.
    pub fn winner(&self) -> Option<Color> {
        (self.status == GameStatus::Checkmate).then(|| self.turn.opponent())
    }

    /// Whether the side to move is in check.
    pub fn in_check(&self) -> bool {
        is_in_check(&self.board, self.turn)
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Castling and en-passant rights for the side to move.
    pub fn special_rights(&self) -> SpecialRights {
        SpecialRights::derive(self.initial, &self.board, &self.history)
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

/// Serialized form of `GameState`, before any checks. The status is not read.
#[derive(Deserialize)]
struct UncheckedGameState {
    board: Board,
    turn: Color,
    history: Vec<Move>,
    initial: SpecialRights,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl TryFrom<UncheckedGameState> for GameState {
    type Error = FenError;

    fn try_from(raw: UncheckedGameState) -> Result<GameState, FenError> {
        GameState::checked(raw)
    }
}

fn parse_counter(field: &str) -> Result<u32, FenError> {
    field
        .parse()
        .map_err(|_| FenError::MoveCounter(field.to_string()))
}

/// En-passant square from the fourth FEN field.
///
/// The pawn that double-stepped must stand just past the square, and both the
/// square and the one it was passed from must be empty.
fn parse_en_passant(board: &Board, turn: Color, field: &str) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let invalid = || FenError::EnPassant(field.to_string());
    let target: Square = field.parse().map_err(|_| invalid())?;
    let mover = turn.opponent();
    if i16::from(target.row()) != i16::from(mover.pawn_row()) + i16::from(mover.forward()) {
        return Err(invalid());
    }
    let pawn = target.offset(mover.forward(), 0).ok_or_else(invalid)?;
    let origin = target.offset(-mover.forward(), 0).ok_or_else(invalid)?;
    let consistent = board
        .piece_at(pawn)
        .is_some_and(|p| p.is(mover, PieceKind::Pawn))
        && board.piece_at(target).is_none()
        && board.piece_at(origin).is_none();
    if consistent { Ok(Some(target)) } else { Err(invalid()) }
}

/// Rejects FEN positions that cannot occur in play.
fn validate_setup(board: &Board, turn: Color) -> Result<(), FenError> {
    for color in Color::ALL {
        let count = board.count(color, PieceKind::King);
        if count != 1 {
            return Err(FenError::KingCount { color, count });
        }
    }
    if let Some((sq, _)) = board
        .iter()
        .find(|(sq, p)| p.kind() == PieceKind::Pawn && (sq.row() == 0 || sq.row() == 7))
    {
        return Err(FenError::PawnOnBackRank(sq));
    }
    if is_in_check(board, turn.opponent()) {
        return Err(FenError::OpponentInCheck(turn.opponent()));
    }
    Ok(())
}
