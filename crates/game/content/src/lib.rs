//! Static game content and loaders.
//!
//! This crate houses the hero classes and provides a loader for session
//! configuration files:
//! - Hero classes (rule-table overlays over the base rules)
//! - The process-wide class registry and promotion between classes
//! - Session configuration (data-driven via TOML)
//!
//! Content is consumed by the runtime and never appears in game state.

pub mod heroes;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use heroes::{HeroRegistry, advance, lookup, registry};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, SessionConfig};
