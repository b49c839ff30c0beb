//! Move

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{PieceKind, Square, SquareParseError};
use crate::error::MoveError;

/// A candidate move as constructed by the caller.
///
/// `promotion` is only meaningful for a pawn reaching the far row; the
/// validator rejects it anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PieceKind>,
}

/// Failure to read a move like `"e2e4"` or `"e7e8q"`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("move must look like \"e2e4\" or \"e7e8q\", got {0:?}")]
    Format(String),
    #[error(transparent)]
    Square(#[from] SquareParseError),
    #[error("invalid promotion piece {0:?}")]
    Promotion(char),
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Move {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// Move from raw `(row, col)` pairs.
    ///
    /// Coordinates outside 0..=7 are rejected with `MoveError::OutOfBounds`
    /// before any square is built.
    pub fn from_coords(
        from: (i32, i32),
        to: (i32, i32),
        promotion: Option<PieceKind>,
    ) -> Result<Move, MoveError> {
        let from = square_from_coords(from)?;
        let to = square_from_coords(to)?;
        Ok(Move { from, to, promotion })
    }
}

fn square_from_coords((row, col): (i32, i32)) -> Result<Square, MoveError> {
    let in_range = |v: i32| (0..8).contains(&v);
    if in_range(row) && in_range(col) {
        Ok(Square::from_parts(row as u8, col as u8))
    } else {
        Err(MoveError::OutOfBounds { row, col })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(MoveParseError::Format(s.to_string()));
        }
        let from: Square = s[0..2].parse()?;
        let to: Square = s[2..4].parse()?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => Some(PieceKind::from_letter(c).ok_or(MoveParseError::Promotion(c))?),
        };
        Ok(Move { from, to, promotion })
    }
}
