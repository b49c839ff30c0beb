// Console chess: reads moves from stdin, draws the board on stdout.

use std::io::{self, Write};

use anyhow::{Context, Result};
use chessboard_console::{Cli, ConsoleConfig, RandomOpponent, Session, TextView};
use chessboard_core::Game;
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    let config = match ConsoleConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(2);
        }
    };
    init_logging(cli.log_level.as_deref(), config.log_level());

    if let Err(e) = run(&config) {
        log::error!("fatal: {e:#}");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so they never interleave with the board.
///
/// `--log-level` wins over RUST_LOG, which wins over the config file.
fn init_logging(cli_filter: Option<&str>, default_filter: &str) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, default_filter),
    );
    if let Some(filter) = cli_filter {
        builder.parse_filters(filter);
    }
    builder
        .format(|buf, record| {
            writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
        })
        .write_style(env_logger::WriteStyle::Never)
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(config: &ConsoleConfig) -> Result<()> {
    let game = match &config.fen {
        Some(fen) => Game::from_fen(fen).with_context(|| format!("invalid FEN {fen:?}"))?,
        None => Game::new(),
    };
    log::info!("starting from {}", game.state().to_fen());

    let view = Box::new(TextView::new(io::stdout(), config.glyphs));
    let mut session = Session::new(game, view);
    if let Some(color) = config.opponent.color() {
        session = session.with_opponent(RandomOpponent::new(color, config.seed));
    }
    session.run(io::stdin().lock())
}
