//! Castling rights
//!
//! A game starts with the rights named in its FEN (all four for the
//! standard position). From there they only shrink: a king or rook counts as
//! unmoved while it stands on its home square and no move in the history
//! started or ended there.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::types::{Color, Move, PieceKind, Square};
use serde::{Deserialize, Serialize};

const KING_HOME_COL: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Towards the h-file
    King,
    /// Towards the a-file
    Queen,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::King, CastleSide::Queen];

    const fn rook_col(self) -> u8 {
        match self {
            CastleSide::King => 7,
            CastleSide::Queen => 0,
        }
    }

    const fn king_to_col(self) -> u8 {
        match self {
            CastleSide::King => 6,
            CastleSide::Queen => 2,
        }
    }

    /// Columns between king and rook that must be empty.
    const fn between_cols(self) -> &'static [u8] {
        match self {
            CastleSide::King => &[5, 6],
            CastleSide::Queen => &[1, 2, 3],
        }
    }

    /// Column the king crosses on its way.
    pub const fn crossed_col(self) -> u8 {
        match self {
            CastleSide::King => 5,
            CastleSide::Queen => 3,
        }
    }

    /// Side a two-column king move goes to, from its column delta.
    pub const fn from_delta(d_col: i8) -> Option<CastleSide> {
        match d_col {
            2 => Some(CastleSide::King),
            -2 => Some(CastleSide::Queen),
            _ => None,
        }
    }

    const fn bit(self, color: Color) -> u8 {
        let shift = color.index() * 2
            + match self {
                CastleSide::King => 0,
                CastleSide::Queen => 1,
            };
        1u8 << shift
    }
}

/// Which sides each color may still castle to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    pub fn derive(board: &Board, history: &[Move]) -> CastlingRights {
        let untouched = |sq: Square| !history.iter().any(|m| m.from == sq || m.to == sq);
        let mut rights = CastlingRights::NONE;
        for color in Color::ALL {
            let row = color.back_row();
            let king_home = Square::from_parts(row, KING_HOME_COL);
            let king_ok = board
                .piece_at(king_home)
                .is_some_and(|p| p.is(color, PieceKind::King))
                && untouched(king_home);
            if !king_ok {
                continue;
            }
            for side in CastleSide::ALL {
                let rook_home = Square::from_parts(row, side.rook_col());
                let rook_ok = board
                    .piece_at(rook_home)
                    .is_some_and(|p| p.is(color, PieceKind::Rook))
                    && untouched(rook_home);
                if rook_ok {
                    rights.0 |= side.bit(color);
                }
            }
        }
        rights
    }

    #[inline]
    pub const fn allows(self, color: Color, side: CastleSide) -> bool {
        self.0 & side.bit(color) != 0
    }

    #[inline]
    pub const fn with(self, color: Color, side: CastleSide) -> CastlingRights {
        CastlingRights(self.0 | side.bit(color))
    }

    /// Rights present in both.
    #[inline]
    pub const fn intersect(self, other: CastlingRights) -> CastlingRights {
        CastlingRights(self.0 & other.0)
    }

    /// Rights from the third FEN field: `-` or letters out of `KQkq`.
    ///
    /// Returns `None` on any other character or a repeated letter.
    pub fn from_fen_field(field: &str) -> Option<CastlingRights> {
        if field == "-" {
            return Some(CastlingRights::NONE);
        }
        if field.is_empty() {
            return None;
        }
        let mut rights = CastlingRights::NONE;
        for c in field.chars() {
            let (color, side) = FEN_LETTERS
                .iter()
                .find(|&&(_, _, letter)| letter == c)
                .map(|&(color, side, _)| (color, side))?;
            if rights.allows(color, side) {
                return None;
            }
            rights = rights.with(color, side);
        }
        Some(rights)
    }

    /// Third FEN field, in `KQkq` order or `-`.
    pub fn to_fen_field(self) -> String {
        let field: String = FEN_LETTERS
            .iter()
            .filter(|&&(color, side, _)| self.allows(color, side))
            .map(|&(_, _, letter)| letter)
            .collect();
        if field.is_empty() { "-".to_string() } else { field }
    }
}

const FEN_LETTERS: [(Color, CastleSide, char); 4] = [
    (Color::White, CastleSide::King, 'K'),
    (Color::White, CastleSide::Queen, 'Q'),
    (Color::Black, CastleSide::King, 'k'),
    (Color::Black, CastleSide::Queen, 'q'),
];

/// Castling destinations for `color`'s king on `from`.
///
/// Only rights and empty squares are checked here. Whether the king starts
/// in or crosses check is the validator's concern.
pub fn castle_targets(board: &Board, from: Square, color: Color, rights: CastlingRights) -> Bitboard {
    let row = color.back_row();
    if from != Square::from_parts(row, KING_HOME_COL) {
        return Bitboard::EMPTY;
    }
    let mut targets = Bitboard::EMPTY;
    for side in CastleSide::ALL {
        if !rights.allows(color, side) {
            continue;
        }
        let clear = side
            .between_cols()
            .iter()
            .all(|&col| board.piece_at(Square::from_parts(row, col)).is_none());
        if clear {
            targets.set(Square::from_parts(row, side.king_to_col()));
        }
    }
    targets
}
