//! Piece movement rules
//!
//! - `attacks`: squares a piece could capture on, and attack/check queries
//! - `reach`: squares a piece may move to before self-check filtering
//! - `castling`: castling rights narrowed by the move history
//!
//! Nothing here looks at whose turn it is or filters self-check; that is the
//! validator's job.

pub mod attacks;
pub mod castling;
pub mod reach;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::{Move, PieceKind, Square};

pub use attacks::{attacks_from, is_attacked, is_in_check};
pub use castling::{CastleSide, CastlingRights};
pub use reach::reachable;

/// Position facts that are not visible on the board itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpecialRights {
    /// Square a pawn may capture onto en passant this move.
    pub en_passant: Option<Square>,
    pub castling: CastlingRights,
}

impl SpecialRights {
    /// Rights of the standard starting position.
    pub const STARTING: SpecialRights = SpecialRights {
        en_passant: None,
        castling: CastlingRights::ALL,
    };

    /// Rights for `board` reached through `history` from a position that had
    /// `initial` rights.
    ///
    /// Castling can only be lost along the way. The en-passant square of the
    /// initial position lasts until the first move.
    pub fn derive(initial: SpecialRights, board: &Board, history: &[Move]) -> SpecialRights {
        let en_passant = match history.last() {
            Some(&last) => en_passant_target(board, Some(last)),
            None => initial.en_passant,
        };
        SpecialRights {
            en_passant,
            castling: initial
                .castling
                .intersect(CastlingRights::derive(board, history)),
        }
    }
}

/// Square skipped by the last move if it was a pawn double step.
pub fn en_passant_target(board: &Board, last: Option<Move>) -> Option<Square> {
    let last = last?;
    let moved = board.piece_at(last.to)?;
    if moved.kind() != PieceKind::Pawn || last.from.col() != last.to.col() {
        return None;
    }
    let d_row = last.to.row() as i8 - last.from.row() as i8;
    if d_row.abs() != 2 {
        return None;
    }
    last.from.offset(d_row / 2, 0)
}
