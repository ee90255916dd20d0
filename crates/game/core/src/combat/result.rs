//! Attack requests, outcomes and the resolution chain.

use std::fmt;

use crate::config::CombatTables;
use crate::env::RngOracle;
use crate::state::{Combatant, EffectKind};

use super::damage::{DamageType, finalize_damage, pre_variance_damage, variance_factor};
use super::hit::{check_crit, check_dodge, check_hit};
use super::zone::Zone;

/// The three choices a side makes for one attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackPlan {
    pub attack_zone: Zone,
    pub block_zone: Zone,
    pub damage_type: DamageType,
}

impl AttackPlan {
    pub const fn new(attack_zone: Zone, block_zone: Zone, damage_type: DamageType) -> Self {
        Self {
            attack_zone,
            block_zone,
            damage_type,
        }
    }

    /// Physical attack on `attack_zone` guarding `block_zone`.
    pub const fn physical(attack_zone: Zone, block_zone: Zone) -> Self {
        Self::new(attack_zone, block_zone, DamageType::Physical)
    }
}

/// One attack from `attacker` against `defender`, constructed fresh each turn.
#[derive(Clone, Copy, Debug)]
pub struct AttackRequest<'a> {
    pub attacker: &'a Combatant,
    pub defender: &'a Combatant,
    pub attack_zone: Zone,
    /// The zone the defender is guarding this exchange.
    pub block_zone: Zone,
    pub damage_type: DamageType,
}

impl<'a> AttackRequest<'a> {
    pub fn new(attacker: &'a Combatant, defender: &'a Combatant, plan: AttackPlan) -> Self {
        Self {
            attacker,
            defender,
            attack_zone: plan.attack_zone,
            block_zone: plan.block_zone,
            damage_type: plan.damage_type,
        }
    }

    pub fn resolve(
        &self,
        rng: &mut (impl RngOracle + ?Sized),
        tables: &CombatTables,
    ) -> AttackOutcome {
        resolve_attack(
            self.attacker,
            self.defender,
            self.attack_zone,
            self.block_zone,
            self.damage_type,
            rng,
            tables,
        )
    }
}

/// Category of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum OutcomeKind {
    /// The attacker was stunned and forfeited the turn.
    Stunned,
    /// The defender evaded.
    Dodged,
    /// The attack failed its accuracy roll.
    Missed,
    Hit,
}

/// Result of resolving one attack. Never mutated after construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    pub kind: OutcomeKind,
    /// Damage dealt; 0 unless `kind` is [`OutcomeKind::Hit`].
    pub damage: u32,
    pub critical: bool,
    pub damage_type: DamageType,
    pub message: String,
}

impl AttackOutcome {
    fn without_damage(kind: OutcomeKind, damage_type: DamageType, message: &str) -> Self {
        Self {
            kind,
            damage: 0,
            critical: false,
            damage_type,
            message: message.to_string(),
        }
    }

    fn hit(damage: u32, critical: bool, damage_type: DamageType) -> Self {
        let mut message = format!("Damage: {damage}");
        if critical {
            message.push_str(" (CRIT!)");
        }
        if damage_type.is_elemental() {
            message.push_str(&format!(" ({damage_type})"));
        }

        Self {
            kind: OutcomeKind::Hit,
            damage,
            critical,
            damage_type,
            message,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.kind == OutcomeKind::Hit
    }
}

impl fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Resolve a complete attack.
///
/// The chain runs in strict order and stops at the first terminal branch:
///
/// 1. stunned attacker forfeits the turn
/// 2. dodge roll against the defender
/// 3. accuracy roll for the zone (blind halves accuracy)
/// 4. base damage from strength and zone
/// 5. critical roll doubles damage
/// 6. block multiplies damage by the block factor
/// 7. armor subtraction with a floor of 1
/// 8. elemental resistance
/// 9. ±20% variance
/// 10. floor to an integer
///
/// Draws are consumed in the order dodge, accuracy, critical, variance, so a
/// scripted RNG can drive each branch exactly. The combatants are not
/// modified.
pub fn resolve_attack(
    attacker: &Combatant,
    defender: &Combatant,
    attack_zone: Zone,
    block_zone: Zone,
    damage_type: DamageType,
    rng: &mut (impl RngOracle + ?Sized),
    tables: &CombatTables,
) -> AttackOutcome {
    if attacker.effects.has(EffectKind::Stun) {
        return AttackOutcome::without_damage(
            OutcomeKind::Stunned,
            damage_type,
            "Stunned! Turn skipped.",
        );
    }

    if check_dodge(defender, rng.roll(), tables) {
        return AttackOutcome::without_damage(OutcomeKind::Dodged, damage_type, "Dodged!");
    }

    if !check_hit(attacker, attack_zone, rng.roll(), tables) {
        return AttackOutcome::without_damage(OutcomeKind::Missed, damage_type, "Missed!");
    }

    let critical = check_crit(attacker, attack_zone, rng.roll(), tables);

    let damage = pre_variance_damage(
        attacker,
        defender,
        attack_zone,
        block_zone,
        damage_type,
        critical,
        tables,
    );
    let variance = variance_factor(rng.roll(), tables);

    AttackOutcome::hit(finalize_damage(damage, variance), critical, damage_type)
}
