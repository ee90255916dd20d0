//! Dodge, accuracy and critical chance calculations.

use crate::config::CombatTables;
use crate::state::{Combatant, EffectKind};

use super::zone::Zone;

/// Probability that `defender` evades an incoming attack.
///
/// # Formula
///
/// ```text
/// dodge = agility / dodge_agility_divisor + dodge_stat
/// ```
///
/// The result is not clamped; a value of 1 or more dodges every attack.
pub fn dodge_chance(defender: &Combatant, tables: &CombatTables) -> f64 {
    f64::from(defender.agility()) / tables.dodge_agility_divisor + defender.dodge
}

/// Probability that `attacker` lands an attack on `zone`.
///
/// # Formula
///
/// ```text
/// accuracy = zone.accuracy × (agility / accuracy_agility_divisor) × blind_penalty
/// ```
///
/// `blind_penalty` is `blind_accuracy_penalty` while the attacker is blinded,
/// otherwise 1.
pub fn effective_accuracy(attacker: &Combatant, zone: Zone, tables: &CombatTables) -> f64 {
    let profile = tables.zones.profile(zone);
    let blind_penalty = if attacker.effects.has(EffectKind::Blind) {
        tables.blind_accuracy_penalty
    } else {
        1.0
    };

    let agility_factor = f64::from(attacker.agility()) / tables.accuracy_agility_divisor;
    profile.accuracy * agility_factor * blind_penalty
}

/// Probability of a critical hit on `zone`, capped at `crit_chance_cap`.
pub fn crit_chance(attacker: &Combatant, zone: Zone, tables: &CombatTables) -> f64 {
    let profile = tables.zones.profile(zone);
    // a negative or NaN cap must not panic, so no f64::clamp
    (profile.crit_chance + attacker.crit_bonus)
        .min(tables.crit_chance_cap)
        .max(0.0)
}

/// A draw strictly below the dodge chance evades.
pub fn check_dodge(defender: &Combatant, roll: f64, tables: &CombatTables) -> bool {
    roll < dodge_chance(defender, tables)
}

/// A draw strictly above the accuracy misses; equal still lands.
pub fn check_hit(attacker: &Combatant, zone: Zone, roll: f64, tables: &CombatTables) -> bool {
    roll <= effective_accuracy(attacker, zone, tables)
}

pub fn check_crit(attacker: &Combatant, zone: Zone, roll: f64, tables: &CombatTables) -> bool {
    roll < crit_chance(attacker, zone, tables)
}
