//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use realm_core::CombatConfig;

use crate::bestiary::StaticBestiary;
use crate::loaders::{BestiaryLoader, ConfigLoader, LoadResult};

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── bestiary.ron
/// └── combat.toml
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const BESTIARY_FILE: &'static str = "bestiary.ron";
    pub const CONFIG_FILE: &'static str = "combat.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load combat configuration from `combat.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::info!(path = %path.display(), "no combat config, using defaults");
            return Ok(CombatConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the bestiary from `bestiary.ron`, requiring every archetype.
    pub fn load_bestiary(&self) -> LoadResult<StaticBestiary> {
        let path = self.data_dir.join(Self::BESTIARY_FILE);
        let bestiary = BestiaryLoader::load(&path)?;
        bestiary.ensure_complete()?;

        tracing::info!(
            path = %path.display(),
            enemies = bestiary.len(),
            "bestiary loaded"
        );
        Ok(bestiary)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
