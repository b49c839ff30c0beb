//! Square

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Board square, stored as `row * 8 + col`.
///
/// Row 0 is White's back rank (`a1`..`h1`), row 7 is Black's. Column 0 is the
/// a-file. A `Square` is always on the board; out-of-range coordinates are
/// rejected when one is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(transparent)]
pub struct Square(u8);

/// Failure to read a square in algebraic notation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SquareParseError {
    #[error("square must be a file and a rank like \"e4\", got {0:?}")]
    Length(String),
    #[error("invalid file {0:?}, expected a-h")]
    File(char),
    #[error("invalid rank {0:?}, expected 1-8")]
    Rank(char),
}

impl Square {
    /// Number of squares
    pub const NUM: usize = 64;

    /// Square from row and column, `None` when either is outside 0..8.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Square from coordinates already known to be on the board.
    #[inline]
    pub(crate) const fn from_parts(row: u8, col: u8) -> Square {
        debug_assert!(row < 8 && col < 8);
        Square(row * 8 + col)
    }

    /// Square from its index (0..64)
    #[inline]
    pub const fn from_index(index: usize) -> Option<Square> {
        if index < Self::NUM {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Square displaced by (`d_row`, `d_col`), `None` when it leaves the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if row < 0 || row > 7 || col < 0 || col > 7 {
            None
        } else {
            Some(Square::from_parts(row as u8, col as u8))
        }
    }

    /// All 64 squares, a1 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::NUM as u8).map(Square)
    }

    /// File letter (`'a'`-`'h'`)
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col()) as char
    }

    /// Rank digit (`'1'`-`'8'`)
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'1' + self.row()) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareParseError::Length(s.to_string()));
        };
        let col = match file.to_ascii_lowercase() {
            c @ 'a'..='h' => c as u8 - b'a',
            _ => return Err(SquareParseError::File(file)),
        };
        let row = match rank {
            c @ '1'..='8' => c as u8 - b'1',
            _ => return Err(SquareParseError::Rank(rank)),
        };
        Ok(Square::from_parts(row, col))
    }
}

impl TryFrom<String> for Square {
    type Error = SquareParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> Self {
        sq.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_new() {
        let sq = Square::new(1, 4).unwrap();
        assert_eq!(sq.row(), 1);
        assert_eq!(sq.col(), 4);
        assert_eq!(sq.index(), 12);
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::new(0, 8), None);
    }

    #[test]
    fn test_square_algebraic() {
        assert_eq!(Square::new(1, 4).unwrap().to_string(), "e2");
        assert_eq!(Square::new(7, 7).unwrap().to_string(), "h8");
        assert_eq!("a1".parse::<Square>(), Ok(Square::new(0, 0).unwrap()));
        assert_eq!("E4".parse::<Square>(), Ok(Square::new(3, 4).unwrap()));
        assert_eq!("i1".parse::<Square>(), Err(SquareParseError::File('i')));
        assert_eq!("a9".parse::<Square>(), Err(SquareParseError::Rank('9')));
        assert!(matches!("e10".parse::<Square>(), Err(SquareParseError::Length(_))));
    }

    #[test]
    fn test_square_offset() {
        let e2: Square = "e2".parse().unwrap();
        assert_eq!(e2.offset(2, 0), Some("e4".parse().unwrap()));
        assert_eq!(e2.offset(-1, -1), Some("d1".parse().unwrap()));
        assert_eq!(e2.offset(-2, 0), None);
        let h8: Square = "h8".parse().unwrap();
        assert_eq!(h8.offset(0, 1), None);
    }

    #[test]
    fn test_square_all() {
        let all: Vec<Square> = Square::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0].to_string(), "a1");
        assert_eq!(all[63].to_string(), "h8");
    }
}
