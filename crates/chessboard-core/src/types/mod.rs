//! Basic value types: colors, squares, pieces and moves.

mod color;
pub mod json;
mod moves;
mod piece;
mod square;

pub use color::Color;
pub use moves::{Move, MoveParseError};
pub use piece::{Piece, PieceKind};
pub use square::{Square, SquareParseError};
