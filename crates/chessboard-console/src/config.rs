//! Console configuration
//!
//! Values come from an optional TOML file, then command-line flags on top:
//!
//! ```toml
//! fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
//! glyphs = "unicode"
//! opponent = "black"
//! seed = 42
//! log_level = "info"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chessboard_core::Color;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GlyphStyle {
    /// `K`, `q`, ... (uppercase white, lowercase black)
    #[default]
    Letters,
    /// Chess symbols
    Unicode,
}

/// Which side, if any, the computer plays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OpponentSide {
    #[default]
    Off,
    White,
    Black,
}

impl OpponentSide {
    pub const fn color(self) -> Option<Color> {
        match self {
            OpponentSide::Off => None,
            OpponentSide::White => Some(Color::White),
            OpponentSide::Black => Some(Color::Black),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    pub fen: Option<String>,
    pub glyphs: GlyphStyle,
    pub opponent: OpponentSide,
    pub seed: Option<u64>,
    /// Default log filter when neither `--log-level` nor RUST_LOG is set.
    pub log_level: Option<String>,
}

impl ConsoleConfig {
    pub const DEFAULT_LOG_LEVEL: &'static str = "warn";

    pub fn load(path: &Path) -> Result<ConsoleConfig> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Config file named by `--config` (or defaults) with flags applied.
    pub fn from_cli(cli: &Cli) -> Result<ConsoleConfig> {
        let base = match &cli.config {
            Some(path) => ConsoleConfig::load(path)?,
            None => ConsoleConfig::default(),
        };
        Ok(base.merge_cli(cli))
    }

    pub fn merge_cli(mut self, cli: &Cli) -> ConsoleConfig {
        if let Some(fen) = &cli.fen {
            self.fen = Some(fen.clone());
        }
        if let Some(glyphs) = cli.glyphs {
            self.glyphs = glyphs;
        }
        if let Some(opponent) = cli.opponent {
            self.opponent = opponent;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = Some(level.clone());
        }
        self
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(Self::DEFAULT_LOG_LEVEL)
    }
}
