//! Client configuration assembled from a session file and the environment.
use std::env;
use std::path::PathBuf;

use anyhow::Result;
use droll_content::{ConfigLoader, SessionConfig};

/// Settings needed to start the shell.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub session: SessionConfig,
    /// Session file the settings were read from, if any.
    pub source: Option<PathBuf>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DROLL_CONFIG` - Path to a TOML session file (default: none)
    /// - `DROLL_SEED` - Seed for the random source (default: from entropy)
    /// - `DROLL_HERO` - Starting hero class (default: `Default`)
    ///
    /// Variables override values from the session file.
    pub fn from_env() -> Result<Self> {
        let source = env::var_os("DROLL_CONFIG").map(PathBuf::from);
        let mut session = match &source {
            Some(path) => ConfigLoader::load(path)?,
            None => SessionConfig::default(),
        };

        if let Some(seed) = read_env::<u64>("DROLL_SEED") {
            session.seed = Some(seed);
        }
        if let Ok(hero) = env::var("DROLL_HERO") {
            session.hero = hero;
        }

        Ok(Self { session, source })
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
