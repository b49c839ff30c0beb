//! Board rendering
//!
//! ```text
//! ================
//! [7]  r  n  b  q  k  b  n  r
//! [6]  p  p  p  p  p  p  p  p
//! [5]  -  -  -  -  -  -  -  -
//! ...
//! [0]  R  N  B  Q  K  B  N  R
//!      a  b  c  d  e  f  g  h
//! It is white's turn.
//! ```

use std::fmt::Write as _;
use std::io::{self, Write};

use chessboard_core::{Color, GameState, GameStatus, Piece, PieceKind, Square};

use crate::config::GlyphStyle;

const SEPARATOR: &str = "================";

/// Output side of the console.
pub trait BoardView {
    /// Draws the position. Called after every move attempt.
    fn render_board(&mut self, state: &GameState) -> io::Result<()>;

    /// Prints one line of feedback.
    fn message(&mut self, text: &str) -> io::Result<()>;
}

/// Plain-text view over any writer.
pub struct TextView<W> {
    out: W,
    glyphs: GlyphStyle,
}

impl<W: Write> TextView<W> {
    pub fn new(out: W, glyphs: GlyphStyle) -> TextView<W> {
        TextView { out, glyphs }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> BoardView for TextView<W> {
    fn render_board(&mut self, state: &GameState) -> io::Result<()> {
        self.out.write_all(render_text(state, self.glyphs).as_bytes())?;
        self.out.flush()
    }

    fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }
}

/// Text rendering of `state`, highest row first, ending in a newline.
pub fn render_text(state: &GameState, glyphs: GlyphStyle) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "{SEPARATOR}");
    for row in (0..8u8).rev() {
        let _ = write!(s, "[{row}] ");
        for col in 0..8u8 {
            let cell = Square::new(row, col).and_then(|sq| state.board().piece_at(sq));
            s.push(' ');
            s.push(cell.map_or('-', |p| glyph(p, glyphs)));
            s.push(' ');
        }
        s.push('\n');
    }
    s.push_str("    ");
    for file in 'a'..='h' {
        let _ = write!(s, " {file} ");
    }
    s.push('\n');

    let _ = writeln!(s, "It is {}'s turn.", state.turn());
    match state.status() {
        GameStatus::InProgress => {}
        GameStatus::Check => {
            let _ = writeln!(s, "{} is in check.", state.turn());
        }
        GameStatus::Checkmate => {
            let winner = state.turn().opponent();
            let _ = writeln!(s, "Checkmate. {winner} wins.");
        }
        GameStatus::Stalemate => {
            let _ = writeln!(s, "Stalemate. The game is drawn.");
        }
    }
    s
}

fn glyph(piece: Piece, style: GlyphStyle) -> char {
    match style {
        GlyphStyle::Letters => piece.fen_char(),
        GlyphStyle::Unicode => match (piece.color(), piece.kind()) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        },
    }
}
