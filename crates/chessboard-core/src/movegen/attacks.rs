//! Attacked squares
//!
//! A square is attacked by a piece when that piece could capture on it: pawns
//! hit their two forward diagonals, sliders stop at (and include) the first
//! occupied square. Pawn pushes and castling never attack. None of this
//! filters self-check, so it can be called from inside the validator without
//! recursion.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::types::{Color, Piece, PieceKind, Square};

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub(crate) const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Squares at fixed offsets from `from`, whatever stands on them.
pub(crate) fn leaper(from: Square, offsets: &[(i8, i8)]) -> Bitboard {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .collect()
}

/// Squares along each ray up to and including the first occupied one.
pub(crate) fn rays(board: &Board, from: Square, dirs: &[(i8, i8)]) -> Bitboard {
    let mut bb = Bitboard::EMPTY;
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(next) = cur.offset(dr, dc) {
            bb.set(next);
            if board.piece_at(next).is_some() {
                break;
            }
            cur = next;
        }
    }
    bb
}

/// Squares `piece` standing on `from` attacks.
pub fn attacks_from(board: &Board, from: Square, piece: Piece) -> Bitboard {
    match piece.kind() {
        PieceKind::Pawn => {
            let fwd = piece.color().forward();
            leaper(from, &[(fwd, -1), (fwd, 1)])
        }
        PieceKind::Knight => leaper(from, &KNIGHT_OFFSETS),
        PieceKind::Bishop => rays(board, from, &BISHOP_DIRS),
        PieceKind::Rook => rays(board, from, &ROOK_DIRS),
        PieceKind::Queen => rays(board, from, &BISHOP_DIRS) | rays(board, from, &ROOK_DIRS),
        PieceKind::King => leaper(from, &KING_OFFSETS),
    }
}

/// Whether any piece of `by` attacks `target`.
pub fn is_attacked(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces(by)
        .any(|(sq, piece)| attacks_from(board, sq, piece).contains(target))
}

/// Whether `color`'s king is attacked.
///
/// # Panics
/// If `color` has no king. Every position reachable in play has one, so a
/// missing king is a bug in the caller, not a rejectable move.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = board.king_square(color) else {
        panic!("board invariant violated: no {color} king on {board:?}");
    };
    is_attacked(board, king, color.opponent())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn board(placement: &str) -> Board {
        Board::from_fen_placement(placement).unwrap()
    }

    #[test]
    fn test_knight_attacks_corner_and_center() {
        let b = Board::empty();
        let knight = Piece::new(Color::White, PieceKind::Knight);
        assert_eq!(attacks_from(&b, sq("a1"), knight).count(), 2);
        assert_eq!(attacks_from(&b, sq("d4"), knight).count(), 8);
    }

    #[test]
    fn test_pawn_attacks_diagonals_only() {
        let b = Board::empty();
        let white = attacks_from(&b, sq("e4"), Piece::new(Color::White, PieceKind::Pawn));
        assert!(white.contains(sq("d5")));
        assert!(white.contains(sq("f5")));
        assert!(!white.contains(sq("e5")));

        let black = attacks_from(&b, sq("a5"), Piece::new(Color::Black, PieceKind::Pawn));
        assert_eq!(black.count(), 1);
        assert!(black.contains(sq("b4")));
    }

    #[test]
    fn test_slider_stops_at_first_piece() {
        let b = board("8/8/8/8/R2p4/8/8/8");
        let rook = attacks_from(&b, sq("a4"), Piece::new(Color::White, PieceKind::Rook));
        assert!(rook.contains(sq("b4")));
        assert!(rook.contains(sq("d4")));
        assert!(!rook.contains(sq("e4")));
        // a-file both ways: 7 squares, plus b4 c4 d4
        assert_eq!(rook.count(), 10);
    }

    #[test]
    fn test_is_in_check() {
        let b = board("4k3/8/8/8/8/8/8/4K2r");
        assert!(is_in_check(&b, Color::White));
        assert!(!is_in_check(&b, Color::Black));

        let blocked = board("4k3/8/8/8/8/8/8/4KN1r");
        assert!(!is_in_check(&blocked, Color::White));
    }

    #[test]
    fn test_start_position_no_checks() {
        let b = Board::starting();
        assert!(!is_in_check(&b, Color::White));
        assert!(!is_in_check(&b, Color::Black));
        assert!(is_attacked(&b, sq("f3"), Color::White));
        assert!(!is_attacked(&b, sq("e4"), Color::White));
    }

    #[test]
    #[should_panic(expected = "no white king")]
    fn test_missing_king_panics() {
        is_in_check(&Board::empty(), Color::White);
    }
}
