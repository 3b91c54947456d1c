//! droll client binary.
//!
//! Plays one game in a line-oriented shell on stdin and stdout. Logs go to
//! stderr so the transcript stays clean.
//!
//! # Examples
//!
//! ```bash
//! # Replay a seeded game as a knight
//! DROLL_SEED=7 DROLL_HERO=knight cargo run -p droll-client
//!
//! # Read settings from a file, with debug logging
//! DROLL_CONFIG=session.toml RUST_LOG=debug cargo run -p droll-client
//! ```

mod config;
mod shell;

use anyhow::Result;
use droll_runtime::{Game, SeededRange};

use config::ClientConfig;
use shell::Shell;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env()?;
    let session = config.session;
    if let Some(path) = &config.source {
        tracing::info!("Session file: {}", path.display());
    }

    let rng = match session.seed {
        Some(seed) => SeededRange::new(seed),
        None => SeededRange::from_entropy(),
    };
    let game = Game::new(&session.hero, session.rules, rng)?;
    tracing::info!(hero = %session.hero, seed = ?session.seed, "starting game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let score = Shell::new(game).run(stdin.lock(), stdout.lock())?;

    tracing::info!(score, "shell closed");
    Ok(())
}
