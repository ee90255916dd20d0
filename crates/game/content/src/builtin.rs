//! Content embedded at compile time.

use realm_core::CombatConfig;

use crate::bestiary::StaticBestiary;
use crate::loaders::{BestiaryLoader, ConfigLoader, LoadResult};

pub const BESTIARY_RON: &str = include_str!("../data/bestiary.ron");
pub const COMBAT_TOML: &str = include_str!("../data/combat.toml");

/// The shipped bestiary, covering every archetype.
pub fn bestiary() -> LoadResult<StaticBestiary> {
    let bestiary = BestiaryLoader::parse(BESTIARY_RON)?;
    bestiary.ensure_complete()?;
    Ok(bestiary)
}

/// The shipped combat configuration.
pub fn config() -> LoadResult<CombatConfig> {
    ConfigLoader::parse(COMBAT_TOML)
}
