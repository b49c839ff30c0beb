//! Board state and move legality engine for chess.
//!
//! - `board`: the 8x8 grid and mechanical move application (`Board::with_move`)
//! - `movegen`: reachable squares, attacks, castling and en-passant rights
//! - `validator`: accept/reject a candidate move, legal move enumeration
//! - `game`: the controller that owns `GameState` and applies moves
//!
//! Everything except `game::Game` is pure. A `GameState` only changes by being
//! replaced wholesale inside `Game::apply_move`.

pub mod bitboard;
pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod state;
pub mod types;
pub mod validator;

pub use bitboard::Bitboard;
pub use board::{Board, FenError, STARTING_FEN};
pub use error::MoveError;
pub use game::{Game, SharedGame};
pub use state::{GameState, GameStatus};
pub use types::{Color, Move, MoveParseError, Piece, PieceKind, Square, SquareParseError};
pub use validator::{MoveList, has_legal_move, legal_moves, validate};
