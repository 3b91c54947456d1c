//! Content loaders for reading game data from files.
//!
//! Session files are TOML; every loader reports failures through
//! [`anyhow`] with the offending path or field in the message.

pub mod config;

pub use config::{ConfigLoader, SessionConfig};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
