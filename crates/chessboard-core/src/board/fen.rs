//! FEN piece placement

use crate::types::{Color, Piece, Square};

use super::Board;

/// FEN of the standard starting position
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// FEN parse / position validation error
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("FEN is empty")]
    Empty,
    #[error("piece placement must have 8 rows, got {0}")]
    RowCount(usize),
    #[error("row {row} of the placement covers {width} columns instead of 8")]
    RowWidth { row: usize, width: usize },
    #[error("unknown piece character {0:?}")]
    PieceChar(char),
    #[error("side to move must be 'w' or 'b', got {0:?}")]
    SideToMove(String),
    #[error("castling field must be '-' or letters from 'KQkq', got {0:?}")]
    Castling(String),
    #[error("en-passant field {0:?} does not follow a pawn double step")]
    EnPassant(String),
    #[error("bad move counter {0:?}")]
    MoveCounter(String),
    #[error("{color} must have exactly one king, found {count}")]
    KingCount { color: Color, count: usize },
    #[error("pawn on a back rank at {0}")]
    PawnOnBackRank(Square),
    #[error("{0} is in check but it is not their move")]
    OpponentInCheck(Color),
}

impl Board {
    /// Board from the first FEN field (`"rnbqkbnr/pppppppp/8/..."`).
    ///
    /// Only the syntax is checked; see `GameState::from_fen` for position
    /// validation.
    pub fn from_fen_placement(placement: &str) -> Result<Board, FenError> {
        if placement.is_empty() {
            return Err(FenError::Empty);
        }
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        // FEN lists rank 8 first
        for (i, text) in rows.iter().enumerate() {
            let row = 7 - i as u8;
            let mut col = 0usize;
            for c in text.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let piece = Piece::from_fen_char(c).ok_or(FenError::PieceChar(c))?;
                if col < 8 {
                    board.put(Square::from_parts(row, col as u8), piece);
                }
                col += 1;
            }
            if col != 8 {
                return Err(FenError::RowWidth {
                    row: i + 1,
                    width: col,
                });
            }
        }
        Ok(board)
    }

    /// First FEN field of this board.
    pub fn to_fen_placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in (0..8u8).rev() {
            let mut empty = 0;
            for col in 0..8u8 {
                match self.piece_at(Square::from_parts(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row > 0 {
                out.push('/');
            }
        }
        out
    }
}

/// Side to move from the second FEN field.
pub(crate) fn parse_side_to_move(field: &str) -> Result<Color, FenError> {
    match field {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        other => Err(FenError::SideToMove(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_placement_round_trip() {
        let placement = "r3k2r/pp1n1ppp/2p5/8/3P4/8/PPP2PPP/R3K2R";
        let board = Board::from_fen_placement(placement).unwrap();
        assert_eq!(board.to_fen_placement(), placement);
        assert_eq!(
            board.piece_at("d4".parse().unwrap()),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(
            board.piece_at("d7".parse().unwrap()),
            Some(Piece::new(Color::Black, PieceKind::Knight))
        );
    }

    #[test]
    fn test_starting_placement_matches_board() {
        let placement = STARTING_FEN.split_whitespace().next().unwrap();
        assert_eq!(Board::from_fen_placement(placement).unwrap(), Board::starting());
    }

    #[test]
    fn test_placement_errors() {
        assert_eq!(Board::from_fen_placement(""), Err(FenError::Empty));
        assert_eq!(
            Board::from_fen_placement("8/8/8/8/8/8/8"),
            Err(FenError::RowCount(7))
        );
        assert_eq!(
            Board::from_fen_placement("9/8/8/8/8/8/8/8"),
            Err(FenError::RowWidth { row: 1, width: 9 })
        );
        assert_eq!(
            Board::from_fen_placement("8/8/8/8/8/8/8/7"),
            Err(FenError::RowWidth { row: 8, width: 7 })
        );
        assert_eq!(
            Board::from_fen_placement("8/8/8/8/8/8/8/7x"),
            Err(FenError::PieceChar('x'))
        );
    }

    #[test]
    fn test_side_to_move() {
        assert_eq!(parse_side_to_move("w"), Ok(Color::White));
        assert_eq!(parse_side_to_move("b"), Ok(Color::Black));
        assert!(matches!(parse_side_to_move("x"), Err(FenError::SideToMove(_))));
    }
}
