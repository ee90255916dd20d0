//! Enemy templates and the bestiary oracle.
//!
//! The bestiary is immutable configuration loaded once at startup. Each
//! [`EnemyTemplate`] supplies base stats, resistances and a loot table, and is
//! spawned into a fresh [`Combatant`] for every encounter.

use crate::behavior::Archetype;
use crate::combat::Resistances;
use crate::state::{Attributes, Combatant};

use super::error::OracleError;

/// Static enemy definition keyed by [`Archetype`] in the bestiary.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub name: String,
    pub hp: u32,
    pub attributes: Attributes,
    #[cfg_attr(feature = "serde", serde(default))]
    pub armor: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dodge: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub resistances: Resistances,
    pub loot: LootTable,
}

impl EnemyTemplate {
    /// Create a new combatant from this template at full health.
    pub fn spawn(&self, archetype: Archetype) -> Combatant {
        Combatant::builder(self.name.clone())
            .archetype(archetype)
            .hp(self.hp)
            .attributes(self.attributes)
            .armor(self.armor)
            .dodge(self.dodge)
            .resistances(self.resistances)
            .build()
    }
}

/// Rewards rolled when an enemy is defeated.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootTable {
    pub gold: ValueRange,
    pub experience: ValueRange,
    /// Independent drop rolls, in table order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<ItemDrop>,
}

/// Inclusive integer range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueRange {
    pub min: u32,
    pub max: u32,
}

impl ValueRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDrop {
    pub chance: f64,
    pub category: ItemCategory,
    pub rarity: Rarity,
}

impl ItemDrop {
    pub const fn new(chance: f64, category: ItemCategory, rarity: Rarity) -> Self {
        Self {
            chance,
            category,
            rarity,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ItemCategory {
    Potion,
    Weapon,
    Armor,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// Oracle providing enemy templates by archetype.
///
/// Runtime systems implement this over data loaded from configuration files.
pub trait BestiaryOracle: Send + Sync {
    /// Returns the template for `archetype`, if the bestiary defines one.
    fn template(&self, archetype: Archetype) -> Option<&EnemyTemplate>;

    /// Instantiates a fresh enemy combatant.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TemplateNotFound` if the bestiary lacks the archetype.
    fn spawn(&self, archetype: Archetype) -> Result<Combatant, OracleError> {
        self.template(archetype)
            .map(|template| template.spawn(archetype))
            .ok_or(OracleError::TemplateNotFound(archetype))
    }

    /// Instantiates an enemy from its archetype id string.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::UnknownArchetype` for an unknown id, or
    /// `OracleError::TemplateNotFound` if the bestiary lacks the archetype.
    fn spawn_by_id(&self, id: &str) -> Result<Combatant, OracleError> {
        self.spawn(Archetype::from_id(id)?)
    }

    /// Returns the loot table of a spawned enemy.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MissingArchetype` if `enemy` was not spawned from
    /// the bestiary, or `OracleError::TemplateNotFound` if the bestiary lacks it.
    fn loot_table(&self, enemy: &Combatant) -> Result<&LootTable, OracleError> {
        let archetype = enemy
            .archetype
            .ok_or_else(|| OracleError::MissingArchetype(enemy.name.clone()))?;
        self.template(archetype)
            .map(|template| &template.loot)
            .ok_or(OracleError::TemplateNotFound(archetype))
    }
}
