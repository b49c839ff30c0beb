//! Reachable squares
//!
//! The squares a piece may move to by its movement pattern, before the
//! validator filters friendly captures and self-check:
//! - pawns push forward onto empty squares (two from their start row through
//!   an empty square) and capture diagonally onto enemy pieces or the
//!   en-passant square
//! - knights and kings reach their fixed offsets, whatever stands there
//! - sliders stop at the first occupied square, which is included only if it
//!   holds an enemy piece
//! - kings on their home square add castling destinations

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::types::{Color, Piece, PieceKind, Square};

use super::SpecialRights;
use super::attacks::{BISHOP_DIRS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRS, leaper, rays};
use super::castling::castle_targets;

/// Squares `piece` on `from` may move to.
pub fn reachable(board: &Board, from: Square, piece: Piece, rights: &SpecialRights) -> Bitboard {
    let color = piece.color();
    let own = board.occupied(color);
    match piece.kind() {
        PieceKind::Pawn => pawn_reach(board, from, color, rights.en_passant),
        PieceKind::Knight => leaper(from, &KNIGHT_OFFSETS),
        PieceKind::Bishop => rays(board, from, &BISHOP_DIRS) & !own,
        PieceKind::Rook => rays(board, from, &ROOK_DIRS) & !own,
        PieceKind::Queen => (rays(board, from, &BISHOP_DIRS) | rays(board, from, &ROOK_DIRS)) & !own,
        PieceKind::King => {
            leaper(from, &KING_OFFSETS) | castle_targets(board, from, color, rights.castling)
        }
    }
}

fn pawn_reach(board: &Board, from: Square, color: Color, en_passant: Option<Square>) -> Bitboard {
    let fwd = color.forward();
    let mut bb = Bitboard::EMPTY;

    if let Some(one) = from.offset(fwd, 0).filter(|&sq| board.piece_at(sq).is_none()) {
        bb.set(one);
        if from.row() == color.pawn_row() {
            if let Some(two) = one.offset(fwd, 0).filter(|&sq| board.piece_at(sq).is_none()) {
                bb.set(two);
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(diag) = from.offset(fwd, d_col) else {
            continue;
        };
        let enemy = board
            .piece_at(diag)
            .is_some_and(|p| p.color() == color.opponent());
        if enemy || en_passant == Some(diag) {
            bb.set(diag);
        }
    }
    bb
}
