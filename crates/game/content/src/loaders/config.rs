//! Combat configuration loader.

use std::path::Path;

use realm_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat configuration from TOML files.
///
/// Every field is optional; omitted values keep their defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        let tables = &config.tables;
        if tables.variance_min > tables.variance_max {
            anyhow::bail!(
                "variance_min ({}) exceeds variance_max ({})",
                tables.variance_min,
                tables.variance_max
            );
        }
        if !tables.crit_chance_cap.is_finite() || tables.crit_chance_cap < 0.0 {
            anyhow::bail!(
                "crit_chance_cap ({}) must be a finite value of at least 0",
                tables.crit_chance_cap
            );
        }

        Ok(config)
    }
}
