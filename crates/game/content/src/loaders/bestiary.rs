//! Bestiary loader.

use std::path::Path;

use realm_core::{Archetype, EnemyTemplate};
use serde::{Deserialize, Serialize};

use crate::bestiary::StaticBestiary;
use crate::loaders::{LoadResult, read_file};

/// Bestiary structure for RON files.
///
/// Entries are `(archetype_id, template)` pairs:
///
/// ```ron
/// (
///     enemies: [
///         ("leshy", (
///             name: "Leshy",
///             hp: 70,
///             attributes: (strength: 14, agility: 10, intelligence: 8),
///             armor: 3,
///             resistances: (water: 0.7),
///             loot: (gold: (min: 30, max: 60), experience: (min: 20, max: 35)),
///         )),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestiaryCatalog {
    pub enemies: Vec<(String, EnemyTemplate)>,
}

/// Loader for the bestiary from RON files.
pub struct BestiaryLoader;

impl BestiaryLoader {
    /// Load the bestiary from a RON file.
    ///
    /// The result is not required to cover every archetype; call
    /// [`StaticBestiary::ensure_complete`] for that.
    pub fn load(path: &Path) -> LoadResult<StaticBestiary> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid bestiary {}: {}", path.display(), e))
    }

    /// Parse a bestiary from RON text.
    pub fn parse(content: &str) -> LoadResult<StaticBestiary> {
        let catalog: BestiaryCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse bestiary RON: {}", e))?;

        let mut bestiary = StaticBestiary::new();
        for (id, template) in catalog.enemies {
            let archetype = Archetype::from_id(&id)?;
            if template.hp == 0 {
                anyhow::bail!("bestiary entry '{id}' has zero hp");
            }
            bestiary.add(archetype, template);
        }

        tracing::debug!(enemies = bestiary.len(), "bestiary parsed");
        Ok(bestiary)
    }
}
