//! Session configuration loader.

use std::path::Path;

use droll_core::GameConfig;
use serde::{Deserialize, Serialize};

use crate::heroes::{DEFAULT_HERO, registry};
use crate::loaders::{LoadResult, read_file};

/// Everything needed to start a game session.
///
/// ```toml
/// seed = 42
/// hero = "Knight"
///
/// [rules]
/// max_delves = 3
/// ```
///
/// Every field is optional; missing ones take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seed for the session's random source; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Name of the starting hero class.
    pub hero: String,
    pub rules: GameConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            hero: DEFAULT_HERO.to_string(),
            rules: GameConfig::default(),
        }
    }
}

/// Loader for session configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a session configuration from a TOML file.
    pub fn load(path: &Path) -> LoadResult<SessionConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// Parse and validate a session configuration from TOML text.
    pub fn parse(content: &str) -> LoadResult<SessionConfig> {
        let config: SessionConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &SessionConfig) -> LoadResult<()> {
        if registry().get(&config.hero).is_none() {
            let known: Vec<_> = registry().names().collect();
            anyhow::bail!(
                "Unknown hero class '{}' (expected one of: {})",
                config.hero,
                known.join(", ")
            );
        }
        let rules = &config.rules;
        if rules.max_delves == 0 {
            anyhow::bail!("rules.max_delves must be at least 1");
        }
        if rules.max_depth == 0 {
            anyhow::bail!("rules.max_depth must be at least 1");
        }
        if rules.party_dice == 0 {
            anyhow::bail!("rules.party_dice must be at least 1");
        }
        Ok(())
    }
}
