//! Move validation
//!
//! A candidate move is checked in a fixed order and the first failing check
//! decides the rejection:
//!
//! 1. the source square holds a piece of the side to move (`NotYourPiece`)
//! 2. source and destination differ (`NullMove`)
//! 3. the destination is reachable by the piece's pattern (`IllegalPattern`)
//! 4. the destination is not held by a friendly piece (`FriendlyFire`)
//! 5. a promotion piece is given only where a pawn promotes (`InvalidPromotion`)
//! 6. the mover's king is not left in check (`SelfCheck`)
//!
//! Validation never mutates the state. Self-check is decided on a copy of the
//! board built by `Board::with_move`.

use smallvec::SmallVec;

use crate::error::MoveError;
use crate::movegen::{CastleSide, is_attacked, is_in_check, reachable};
use crate::state::GameState;
use crate::types::{Move, Piece, PieceKind, Square};

/// Legal moves of a position. Most positions fit inline.
pub type MoveList = SmallVec<[Move; 64]>;

/// Checks `mv` against `state` and returns the move as it will be applied.
///
/// A pawn reaching the far row without a promotion piece is resolved to a
/// queen promotion.
pub fn validate(state: &GameState, mv: Move) -> Result<Move, MoveError> {
    let result = check(state, mv);
    match &result {
        Ok(resolved) => log::trace!("accepted {resolved} for {}", state.turn()),
        Err(err) => log::debug!("rejected {mv} for {}: {err}", state.turn()),
    }
    result
}

fn check(state: &GameState, mv: Move) -> Result<Move, MoveError> {
    let board = state.board();
    let color = state.turn();

    let piece = board
        .piece_at(mv.from)
        .filter(|p| p.color() == color)
        .ok_or(MoveError::NotYourPiece { square: mv.from })?;

    if mv.from == mv.to {
        return Err(MoveError::NullMove { square: mv.from });
    }

    let rights = state.special_rights();
    if !reachable(board, mv.from, piece, &rights).contains(mv.to) {
        return Err(MoveError::IllegalPattern {
            kind: piece.kind(),
            from: mv.from,
            to: mv.to,
        });
    }

    if board.piece_at(mv.to).is_some_and(|p| p.color() == color) {
        return Err(MoveError::FriendlyFire { to: mv.to });
    }

    let resolved = resolve_promotion(piece, mv)?;

    if is_castling(piece, resolved) {
        check_castling_path(state, resolved)?;
    }
    let next = board.with_move(resolved);
    if is_in_check(&next, color) {
        return Err(MoveError::SelfCheck { color });
    }

    Ok(resolved)
}

fn resolve_promotion(piece: Piece, mv: Move) -> Result<Move, MoveError> {
    let promotes =
        piece.kind() == PieceKind::Pawn && mv.to.row() == piece.color().promotion_row();
    match mv.promotion {
        None if promotes => Ok(Move::with_promotion(mv.from, mv.to, PieceKind::Queen)),
        None => Ok(mv),
        Some(kind) if promotes && kind.is_promotion_target() => Ok(mv),
        Some(kind) => Err(MoveError::InvalidPromotion { kind, to: mv.to }),
    }
}

fn is_castling(piece: Piece, mv: Move) -> bool {
    piece.kind() == PieceKind::King
        && mv.from.row() == mv.to.row()
        && (mv.to.col() as i8 - mv.from.col() as i8).abs() == 2
}

/// A king may not castle out of check or across an attacked square.
fn check_castling_path(state: &GameState, mv: Move) -> Result<(), MoveError> {
    let color = state.turn();
    let Some(side) = CastleSide::from_delta(mv.to.col() as i8 - mv.from.col() as i8) else {
        return Ok(());
    };
    let crossed = Square::from_parts(mv.from.row(), side.crossed_col());
    if state.in_check() || is_attacked(state.board(), crossed, color.opponent()) {
        return Err(MoveError::SelfCheck { color });
    }
    Ok(())
}

/// Candidate moves of the side to move before legality filtering: every
/// reachable non-friendly destination, with one entry per promotion piece.
fn candidates(state: &GameState) -> impl Iterator<Item = Move> + '_ {
    let board = state.board();
    let color = state.turn();
    let rights = state.special_rights();
    let own = board.occupied(color);
    board.pieces(color).flat_map(move |(from, piece)| {
        let targets = reachable(board, from, piece, &rights) & !own;
        targets.into_iter().flat_map(move |to| {
            let promotes =
                piece.kind() == PieceKind::Pawn && to.row() == color.promotion_row();
            let kinds: SmallVec<[Option<PieceKind>; 4]> = if promotes {
                PieceKind::PROMOTIONS.into_iter().map(Some).collect()
            } else {
                SmallVec::from_elem(None, 1)
            };
            kinds.into_iter().map(move |promotion| Move {
                from,
                to,
                promotion,
            })
        })
    })
}

/// Every legal move of the side to move, promotions expanded per piece kind.
pub fn legal_moves(state: &GameState) -> MoveList {
    candidates(state)
        .filter_map(|mv| check(state, mv).ok())
        .collect()
}

/// Whether the side to move has any legal move. Stops at the first one.
pub fn has_legal_move(state: &GameState) -> bool {
    candidates(state).any(|mv| check(state, mv).is_ok())
}
