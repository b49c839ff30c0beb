//! Board representation
//!
//! An 8x8 mailbox of optional pieces. A `Board` is plain data: moves are
//! applied by building a new board (`with_move`), which lets the validator
//! simulate a move without touching the position it is checking.

mod fen;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bitboard::Bitboard;
use crate::types::{Color, Move, Piece, PieceKind, Square};

pub use fen::{FenError, STARTING_FEN};
pub(crate) use fen::parse_side_to_move;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8x8 grid of optional pieces, indexed by `Square::index()`.
///
/// Serializes as its FEN piece placement.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    squares: [Option<Piece>; Square::NUM],
}

impl Board {
    /// Board with no pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::NUM],
        }
    }

    /// Standard starting position.
    pub fn starting() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (col, kind) in BACK_RANK.into_iter().enumerate() {
                board.put(
                    Square::from_parts(color.back_row(), col as u8),
                    Piece::new(color, kind),
                );
                board.put(
                    Square::from_parts(color.pawn_row(), col as u8),
                    Piece::new(color, PieceKind::Pawn),
                );
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Places a piece, replacing whatever stood there. Intended for setup.
    #[inline]
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    /// Empties a square. Intended for setup.
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.squares[sq.index()] = None;
    }

    /// Occupied squares with their pieces, a1 first.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Pieces of one color with their squares.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.iter().filter(move |(_, p)| p.color() == color)
    }

    /// Squares holding a piece of `color`.
    pub fn occupied(&self, color: Color) -> Bitboard {
        self.pieces(color).map(|(sq, _)| sq).collect()
    }

    /// Squares holding any piece.
    pub fn occupancy(&self) -> Bitboard {
        self.iter().map(|(sq, _)| sq).collect()
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().count()
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|p| p.is(color, kind))
            .count()
    }

    /// Square of `color`'s king (the first one found, a1 first).
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, p)| p.kind() == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Board with `mv` applied mechanically. No legality check is made.
    ///
    /// Special moves are recognized from the board alone:
    /// - a pawn moving diagonally onto an empty square next to an enemy pawn
    ///   removes that pawn (en passant)
    /// - a king moving two columns with its own rook in the near corner and a
    ///   clear landing path also moves the rook next to it (castling)
    /// - a pawn reaching the far row becomes `mv.promotion`, or a queen
    ///
    /// At most one piece leaves the board. An empty source square yields an
    /// unchanged board.
    pub fn with_move(&self, mv: Move) -> Board {
        let mut next = self.clone();
        let Some(piece) = next.squares[mv.from.index()].take() else {
            return next;
        };
        let color = piece.color();
        let d_col = mv.to.col() as i8 - mv.from.col() as i8;

        match piece.kind() {
            PieceKind::Pawn if d_col != 0 && self.piece_at(mv.to).is_none() => {
                let passed = Square::from_parts(mv.from.row(), mv.to.col());
                if self
                    .piece_at(passed)
                    .is_some_and(|p| p.is(color.opponent(), PieceKind::Pawn))
                {
                    next.clear(passed);
                }
            }
            PieceKind::King if d_col.abs() == 2 && mv.from.row() == mv.to.row() => {
                let (corner_col, crossed_col) = if d_col > 0 {
                    (7, mv.from.col() + 1)
                } else {
                    (0, mv.from.col() - 1)
                };
                let corner = Square::from_parts(mv.from.row(), corner_col);
                let crossed = Square::from_parts(mv.from.row(), crossed_col);
                let rook_home = self
                    .piece_at(corner)
                    .is_some_and(|p| p.is(color, PieceKind::Rook));
                if rook_home && self.piece_at(crossed).is_none() && self.piece_at(mv.to).is_none()
                {
                    next.clear(corner);
                    next.put(crossed, Piece::new(color, PieceKind::Rook));
                }
            }
            _ => {}
        }

        let placed = if piece.kind() == PieceKind::Pawn && mv.to.row() == color.promotion_row() {
            Piece::new(color, mv.promotion.unwrap_or(PieceKind::Queen))
        } else {
            piece
        };
        next.put(mv.to, placed);
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Board")
            .field(&self.to_fen_placement())
            .finish()
    }
}

impl TryFrom<String> for Board {
    type Error = FenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Board::from_fen_placement(&value)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_fen_placement()
    }
}
