//! Move rejection reasons
//!
//! Every rejection is recoverable: the game state is left untouched and the
//! reason is handed back to the caller. Broken internal invariants (a board
//! without a king, for instance) are not reported here; they panic.

use crate::state::GameStatus;
use crate::types::{Color, PieceKind, Square};

/// Why a move was not applied.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// A coordinate is outside 0..=7
    #[error("({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    /// The source square is empty or holds an opponent's piece
    #[error("no piece of the side to move on {square}")]
    NotYourPiece { square: Square },

    /// Source and destination are the same square
    #[error("{square} to {square} is not a move")]
    NullMove { square: Square },

    /// The piece cannot reach the destination from where it stands
    #[error("a {kind} cannot move from {from} to {to}")]
    IllegalPattern {
        kind: PieceKind,
        from: Square,
        to: Square,
    },

    /// The destination holds a piece of the mover's own color
    #[error("{to} is occupied by a friendly piece")]
    FriendlyFire { to: Square },

    /// Promotion piece given where none applies, or an impossible promotion kind
    #[error("invalid promotion to {kind} on {to}")]
    InvalidPromotion { kind: PieceKind, to: Square },

    /// The move would leave (or move through) the mover's king in check
    #[error("move leaves the {color} king in check")]
    SelfCheck { color: Color },

    /// The game already ended
    #[error("the game is over ({status})")]
    GameOver { status: GameStatus },
}

impl MoveError {
    /// Stable tag for the rejection, independent of its payload.
    pub const fn kind(&self) -> &'static str {
        match self {
            MoveError::OutOfBounds { .. } => "OutOfBounds",
            MoveError::NotYourPiece { .. } => "NotYourPiece",
            MoveError::NullMove { .. } => "NullMove",
            MoveError::IllegalPattern { .. } => "IllegalPattern",
            MoveError::FriendlyFire { .. } => "FriendlyFire",
            MoveError::InvalidPromotion { .. } => "InvalidPromotion",
            MoveError::SelfCheck { .. } => "SelfCheck",
            MoveError::GameOver { .. } => "GameOver",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_and_message() {
        let e2: Square = "e2".parse().unwrap();
        let err = MoveError::NullMove { square: e2 };
        assert_eq!(err.kind(), "NullMove");
        assert_eq!(err.to_string(), "e2 to e2 is not a move");

        let err = MoveError::OutOfBounds { row: 8, col: 0 };
        assert_eq!(err.kind(), "OutOfBounds");
        assert_eq!(err.to_string(), "(8, 0) is off the board");

        let err = MoveError::GameOver {
            status: GameStatus::Checkmate,
        };
        assert_eq!(err.to_string(), "the game is over (checkmate)");
    }
}
