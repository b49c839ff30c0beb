//! Console command parser

use chessboard_core::{Move, MoveParseError, PieceKind, Square};

/// One line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A move as `(row, col)` pairs. Coordinates are not range-checked here
    /// so out-of-board input reaches the game as a rejection.
    Move {
        from: (i32, i32),
        to: (i32, i32),
        promotion: Option<PieceKind>,
    },
    Moves,
    Board,
    Fen,
    Json,
    History,
    Help,
    Quit,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command {0:?} (type \"help\")")]
    Unknown(String),
    #[error(transparent)]
    Move(#[from] MoveParseError),
    #[error("expected \"row,col\", got {0:?}")]
    Coordinate(String),
    #[error("invalid promotion piece {0:?}")]
    Promotion(String),
}

pub const HELP: &str = "\
commands:
  e2e4 | e2 e4      move a piece (append q/r/b/n to choose a promotion: e7e8n)
  1,4 3,4           move by row,col (0-based, row 0 is white's back rank)
  moves             list legal moves
  board             redraw the board
  fen               print the position as FEN
  json              print the game state as JSON
  history           list moves played so far
  help              show this text
  quit              leave";

/// Parses one input line.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&head) = parts.first() else {
        return Err(CommandError::Empty);
    };

    match head {
        "moves" => return Ok(Command::Moves),
        "board" => return Ok(Command::Board),
        "fen" => return Ok(Command::Fen),
        "json" => return Ok(Command::Json),
        "history" => return Ok(Command::History),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    if head.contains(',') {
        return parse_coordinate_move(&parts);
    }
    match parts.as_slice() {
        [mv] if looks_like_move(mv) => {
            let mv: Move = mv.parse()?;
            Ok(move_command(mv.from, mv.to, mv.promotion))
        }
        [from, to] | [from, to, _] if looks_like_square(from) => {
            let from: Square = from.parse().map_err(MoveParseError::from)?;
            let to_sq: Square = to.parse().map_err(MoveParseError::from)?;
            let promotion = parts.get(2).map(|p| parse_promotion(p)).transpose()?;
            Ok(move_command(from, to_sq, promotion))
        }
        _ => Err(CommandError::Unknown(head.to_string())),
    }
}

fn parse_coordinate_move(parts: &[&str]) -> Result<Command, CommandError> {
    let (from, to, promotion) = match parts {
        [from, to] => (from, to, None),
        [from, to, p] => (from, to, Some(parse_promotion(p)?)),
        _ => return Err(CommandError::Coordinate(parts.join(" "))),
    };
    Ok(Command::Move {
        from: parse_pair(from)?,
        to: parse_pair(to)?,
        promotion,
    })
}

fn parse_pair(text: &str) -> Result<(i32, i32), CommandError> {
    let err = || CommandError::Coordinate(text.to_string());
    let (row, col) = text.split_once(',').ok_or_else(err)?;
    let row = row.trim().parse().map_err(|_| err())?;
    let col = col.trim().parse().map_err(|_| err())?;
    Ok((row, col))
}

fn parse_promotion(text: &str) -> Result<PieceKind, CommandError> {
    let mut chars = text.chars();
    match (chars.next().and_then(PieceKind::from_letter), chars.next()) {
        (Some(kind), None) => Ok(kind),
        _ => Err(CommandError::Promotion(text.to_string())),
    }
}

fn move_command(from: Square, to: Square, promotion: Option<PieceKind>) -> Command {
    Command::Move {
        from: (from.row() as i32, from.col() as i32),
        to: (to.row() as i32, to.col() as i32),
        promotion,
    }
}

fn looks_like_square(text: &str) -> bool {
    let b = text.as_bytes();
    b.len() == 2 && b[0].is_ascii_alphabetic() && b[1].is_ascii_digit()
}

fn looks_like_move(text: &str) -> bool {
    (4..=5).contains(&text.len()) && text.get(..2).is_some_and(looks_like_square)
}
