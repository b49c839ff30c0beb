use std::path::PathBuf;

use clap::Parser;

use crate::config::{GlyphStyle, OpponentSide};

/// Play chess on the console.
///
/// Flags override values from the `--config` file.
#[derive(Parser, Debug, Default)]
#[command(name = "chessboard", author, version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Start from this FEN position instead of the standard setup
    #[arg(long)]
    pub fen: Option<String>,

    /// Piece glyphs used when drawing the board
    #[arg(long, value_enum)]
    pub glyphs: Option<GlyphStyle>,

    /// Side played by the random computer opponent
    #[arg(long, value_enum)]
    pub opponent: Option<OpponentSide>,

    /// Seed for the computer opponent (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter, e.g. "debug" or "chessboard_core=trace"; takes precedence over RUST_LOG
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}
