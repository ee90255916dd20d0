//! Damage types, resistances and the numeric damage pipeline.
//!
//! The functions here are the deterministic middle of attack resolution:
//! given the outcome of the critical roll and the variance factor they turn
//! attacker/defender stats into a final integer damage value.

use crate::config::CombatTables;
use crate::state::Combatant;

use super::zone::Zone;

// ============================================================================
// Damage Type
// ============================================================================

/// Damage type for resistances and on-hit effects.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DamageType {
    /// Ignores resistances.
    #[default]
    Physical,
    Fire,
    Water,
    Electric,
}

impl DamageType {
    pub const ALL: [DamageType; 4] = [
        DamageType::Physical,
        DamageType::Fire,
        DamageType::Water,
        DamageType::Electric,
    ];

    /// Elemental types are reduced by resistances; physical is not.
    pub const fn is_elemental(self) -> bool {
        !matches!(self, DamageType::Physical)
    }
}

// ============================================================================
// Resistances
// ============================================================================

/// Fraction of elemental damage absorbed, per element.
///
/// Values are clamped to `[0, 1]` on read; a missing element absorbs nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Resistances {
    pub fire: f64,
    pub water: f64,
    pub electric: f64,
}

impl Resistances {
    pub const NONE: Self = Self {
        fire: 0.0,
        water: 0.0,
        electric: 0.0,
    };

    pub const fn new(fire: f64, water: f64, electric: f64) -> Self {
        Self {
            fire,
            water,
            electric,
        }
    }

    /// Returns the absorbed fraction for `damage_type`. Physical is always 0.
    pub fn get(&self, damage_type: DamageType) -> f64 {
        let raw = match damage_type {
            DamageType::Physical => 0.0,
            DamageType::Fire => self.fire,
            DamageType::Water => self.water,
            DamageType::Electric => self.electric,
        };
        raw.clamp(0.0, 1.0)
    }
}

// ============================================================================
// Damage Calculation
// ============================================================================

/// Base damage before critical, block and armor.
///
/// # Formula
///
/// ```text
/// base = strength × strength_damage_factor × zone.damage
/// ```
pub fn base_damage(attacker: &Combatant, zone: Zone, tables: &CombatTables) -> f64 {
    let profile = tables.zones.profile(zone);
    f64::from(attacker.strength()) * tables.strength_damage_factor * profile.damage
}

/// Damage after critical, block, armor and resistance, before variance.
///
/// # Formula
///
/// ```text
/// damage = base
/// if critical:            damage *= crit_multiplier
/// if attack == block:     damage *= block_factor
/// damage = max(minimum, damage - armor)
/// if elemental:           damage *= 1 - resistance
/// ```
pub fn pre_variance_damage(
    attacker: &Combatant,
    defender: &Combatant,
    attack_zone: Zone,
    block_zone: Zone,
    damage_type: DamageType,
    is_critical: bool,
    tables: &CombatTables,
) -> f64 {
    let mut damage = base_damage(attacker, attack_zone, tables);

    if is_critical {
        damage *= tables.crit_multiplier;
    }

    if attack_zone == block_zone {
        damage *= tables.block_factor;
    }

    damage = mitigate_armor(damage, defender.armor, tables);

    if damage_type.is_elemental() {
        damage *= 1.0 - defender.resistances.get(damage_type);
    }

    damage
}

/// Subtract flat armor, never going below the landed-hit floor.
pub fn mitigate_armor(damage: f64, armor: u32, tables: &CombatTables) -> f64 {
    (damage - f64::from(armor)).max(tables.minimum_damage)
}

/// Maps a uniform draw in `[0, 1)` onto the variance interval.
pub fn variance_factor(roll: f64, tables: &CombatTables) -> f64 {
    tables.variance_min + roll * (tables.variance_max - tables.variance_min)
}

/// Apply the variance factor and floor to a non-negative integer.
pub fn finalize_damage(damage: f64, variance: f64) -> u32 {
    (damage * variance).floor().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Attributes, Combatant};

    fn fighter(strength: u32) -> Combatant {
        Combatant::builder("fighter")
            .attributes(Attributes::new(strength, 10, 10))
            .build()
    }

    #[test]
    fn head_shot_base_damage_uses_zone_multiplier() {
        let tables = CombatTables::default();
        let attacker = fighter(12);

        assert_eq!(base_damage(&attacker, Zone::Head, &tables), 36.0);
        assert_eq!(base_damage(&attacker, Zone::Body, &tables), 24.0);
        assert!((base_damage(&attacker, Zone::Legs, &tables) - 19.2).abs() < 1e-9);
    }

    #[test]
    fn armor_never_reduces_landed_hit_below_one() {
        let tables = CombatTables::default();
        assert_eq!(mitigate_armor(3.0, 50, &tables), 1.0);
        assert_eq!(mitigate_armor(36.0, 5, &tables), 31.0);
    }

    #[test]
    fn resistance_halves_elemental_damage() {
        let tables = CombatTables::default();
        // strength 10, body: 10 * 2 * 1.0 = 20, crit doubles to 40
        let attacker = fighter(10);
        let mut defender = fighter(10);
        defender.resistances = Resistances::new(0.5, 0.0, 0.0);

        let fire = pre_variance_damage(
            &attacker,
            &defender,
            Zone::Body,
            Zone::Head,
            DamageType::Fire,
            true,
            &tables,
        );
        assert_eq!(fire, 20.0);

        let physical = pre_variance_damage(
            &attacker,
            &defender,
            Zone::Body,
            Zone::Head,
            DamageType::Physical,
            true,
            &tables,
        );
        assert_eq!(physical, 40.0);
    }

    #[test]
    fn resistance_lookup_clamps_out_of_range_values() {
        let resistances = Resistances::new(1.5, -0.2, 0.4);
        assert_eq!(resistances.get(DamageType::Fire), 1.0);
        assert_eq!(resistances.get(DamageType::Water), 0.0);
        assert_eq!(resistances.get(DamageType::Electric), 0.4);
        assert_eq!(resistances.get(DamageType::Physical), 0.0);
    }

    #[test]
    fn variance_spans_eighty_to_one_twenty_percent() {
        let tables = CombatTables::default();
        assert!((variance_factor(0.0, &tables) - 0.8).abs() < 1e-9);
        assert!((variance_factor(0.5, &tables) - 1.0).abs() < 1e-9);
        assert!(variance_factor(0.999_999, &tables) < 1.2);
    }
}
