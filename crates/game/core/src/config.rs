//! Combat configuration constants and tunable balance tables.
//!
//! [`CombatConfig`] holds the per-engine settings (stamina cost, log size,
//! on-hit rules) and nests [`CombatTables`], the numeric constants consumed by
//! the damage resolver and the effect ledger. Every struct has a `Default`
//! carrying the shipped balance values, and with the `serde` feature every
//! field may be omitted from a TOML file to keep that default.

use crate::combat::{DamageType, Zone, ZoneProfile};
use crate::state::EffectKind;

/// Engine-level configuration for a combat encounter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Stamina the player spends on every attack, hit or miss.
    pub stamina_cost: u32,
    /// Number of log lines retained by the engine before the oldest is dropped.
    pub log_capacity: usize,
    /// Effects rolled against the enemy when the player lands a critical hit.
    pub player_crit_rules: Vec<OnHitRule>,
    /// Effects rolled against the player whenever an enemy hit lands,
    /// keyed by the damage type of that hit.
    pub enemy_element_rules: Vec<OnHitRule>,
    /// Numeric balance tables.
    pub tables: CombatTables,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    /// One slot per effect kind; the ledger never holds duplicates.
    pub const MAX_EFFECTS: usize = EffectKind::ALL.len();
    pub const MAX_MODIFIERS: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STAMINA_COST: u32 = 5;
    pub const DEFAULT_LOG_CAPACITY: usize = 64;

    pub fn new() -> Self {
        Self {
            stamina_cost: Self::DEFAULT_STAMINA_COST,
            log_capacity: Self::DEFAULT_LOG_CAPACITY,
            player_crit_rules: vec![
                OnHitRule::new(Some(DamageType::Fire), EffectKind::Burn, 3, 0.3),
                OnHitRule::new(Some(DamageType::Electric), EffectKind::Shock, 2, 0.2),
                OnHitRule::new(None, EffectKind::Bleed, 2, 0.1),
            ],
            enemy_element_rules: vec![
                OnHitRule::new(Some(DamageType::Fire), EffectKind::Burn, 2, 0.4),
                OnHitRule::new(Some(DamageType::Electric), EffectKind::Shock, 2, 0.3),
                OnHitRule::new(Some(DamageType::Water), EffectKind::Shock, 1, 0.2),
            ],
            tables: CombatTables::default(),
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A chance to apply an effect after a hit.
///
/// `element: None` matches every damage type.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OnHitRule {
    pub element: Option<DamageType>,
    pub kind: EffectKind,
    pub duration: u32,
    pub chance: f64,
}

impl OnHitRule {
    pub const fn new(
        element: Option<DamageType>,
        kind: EffectKind,
        duration: u32,
        chance: f64,
    ) -> Self {
        Self {
            element,
            kind,
            duration,
            chance,
        }
    }

    /// Returns true if this rule applies to hits of `damage_type`.
    pub fn matches(&self, damage_type: DamageType) -> bool {
        self.element.is_none_or(|element| element == damage_type)
    }
}

/// Numeric constants of the attack resolution chain.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatTables {
    pub zones: ZoneTable,
    /// Base damage = strength × this factor × zone damage multiplier.
    pub strength_damage_factor: f64,
    /// Dodge chance contributed by agility is `agility / divisor`.
    pub dodge_agility_divisor: f64,
    /// Accuracy scales with `agility / divisor`.
    pub accuracy_agility_divisor: f64,
    /// Accuracy multiplier while the attacker is blinded.
    pub blind_accuracy_penalty: f64,
    pub crit_multiplier: f64,
    /// Upper bound for the final critical chance. `1.0` lets stacked bonuses
    /// guarantee a critical hit.
    pub crit_chance_cap: f64,
    /// Damage multiplier when the attacked zone is the blocked zone.
    pub block_factor: f64,
    /// Floor applied after armor; a landed hit never deals less.
    pub minimum_damage: f64,
    pub variance_min: f64,
    pub variance_max: f64,
    pub ticks: TickTable,
}

impl Default for CombatTables {
    fn default() -> Self {
        Self {
            zones: ZoneTable::default(),
            strength_damage_factor: 2.0,
            dodge_agility_divisor: 20.0,
            accuracy_agility_divisor: 10.0,
            blind_accuracy_penalty: 0.5,
            crit_multiplier: 2.0,
            crit_chance_cap: 1.0,
            block_factor: 0.3,
            minimum_damage: 1.0,
            variance_min: 0.8,
            variance_max: 1.2,
            ticks: TickTable::default(),
        }
    }
}

/// Risk/reward profile of each body zone.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZoneTable {
    pub head: ZoneProfile,
    pub body: ZoneProfile,
    pub legs: ZoneProfile,
}

impl ZoneTable {
    pub const fn profile(&self, zone: Zone) -> ZoneProfile {
        match zone {
            Zone::Head => self.head,
            Zone::Body => self.body,
            Zone::Legs => self.legs,
        }
    }
}

impl Default for ZoneTable {
    fn default() -> Self {
        Self {
            head: ZoneProfile::new(1.5, 0.7, 0.3),
            body: ZoneProfile::new(1.0, 1.0, 0.1),
            legs: ZoneProfile::new(0.8, 1.2, 0.05),
        }
    }
}

/// Per-turn magnitudes of damage-over-time and drain effects.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TickTable {
    /// Fractions of the bearer's strength dealt (or healed) each turn.
    pub poison_strength_ratio: f64,
    pub burn_strength_ratio: f64,
    pub bleed_strength_ratio: f64,
    pub regen_strength_ratio: f64,
    pub shock_stamina_drain: u32,
    pub curse_strength_loss: u32,
    /// Curse never reduces strength below this value.
    pub min_strength: u32,
}

impl Default for TickTable {
    fn default() -> Self {
        Self {
            poison_strength_ratio: 0.5,
            burn_strength_ratio: 0.3,
            bleed_strength_ratio: 0.4,
            regen_strength_ratio: 0.3,
            shock_stamina_drain: 10,
            curse_strength_loss: 2,
            min_strength: 1,
        }
    }
}
