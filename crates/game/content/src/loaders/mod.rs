//! Content loaders for reading combat data from files.
//!
//! This module converts RON/TOML files into core types and oracle
//! implementations. Every loader also accepts an in-memory string so the
//! embedded copies in [`crate::builtin`] go through the same parser.

pub mod bestiary;
pub mod config;
pub mod factory;

pub use bestiary::{BestiaryCatalog, BestiaryLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
