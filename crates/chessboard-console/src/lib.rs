//! Console front end for `chessboard-core`.
//!
//! The binary reads commands from stdin, hands moves to a [`Session`] and
//! prints the board through a [`BoardView`]. Everything except process setup
//! lives here so it can be driven from tests.

pub mod cli;
pub mod command;
pub mod config;
pub mod opponent;
pub mod session;
pub mod view;

pub use cli::Cli;
pub use command::{Command, CommandError, parse_command};
pub use config::{ConsoleConfig, GlyphStyle, OpponentSide};
pub use opponent::RandomOpponent;
pub use session::{Flow, MoveOutcome, Session};
pub use view::{BoardView, TextView, render_text};
