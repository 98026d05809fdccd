//! Two-player king-capture chess on the command line.
//!
//! Players take turns entering moves such as `a2 a4`. The game ends when
//! one side captures the other's king.

mod config;
mod input;
mod render;
mod session;

use anyhow::Context;
use chess_game::Game;
use clap::Parser;
use config::ChessConfig;
use session::{Session, SessionEnd};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chess")]
#[command(about = "Two-player chess, won by capturing the enemy king")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value_os_t = ChessConfig::default_path())]
    config: PathBuf,

    /// Start from this position (FEN placement and side to move)
    #[arg(long)]
    fen: Option<String>,

    /// Draw pieces as letters instead of Unicode symbols
    #[arg(long)]
    ascii: bool,

    /// Log level for stderr output (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ChessConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if cli.fen.is_some() {
        config.start_fen = cli.fen;
    }
    if cli.ascii {
        config.display.unicode = false;
    }

    tracing_subscriber::fmt()
        .with_max_level(config.log_level()?)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    let game = match &config.start_fen {
        Some(fen) => Game::from_fen(fen)
            .with_context(|| format!("invalid start position '{}'", fen))?,
        None => Game::new(),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(game, stdin.lock(), stdout.lock(), config.display);
    let end = session.run()?;
    let plies = session.game().ply_count();
    match end {
        SessionEnd::Won(winner) => tracing::info!(%winner, plies, "game finished"),
        SessionEnd::Quit => tracing::info!(plies, "player quit"),
        SessionEnd::EndOfInput => tracing::info!(plies, "input closed"),
    }

    Ok(())
}
