//! Per-archetype behavior policies.
//!
//! Each policy is plain data: weighted zone preferences, an optional elemental
//! bias and an optional signature effect the archetype inflicts on hit. The
//! table in [`Archetype::policy`] is an exhaustive match, so adding an
//! archetype without a policy fails to compile.

use crate::combat::{AttackPlan, DamageType, Zone};
use crate::config::OnHitRule;
use crate::env::RngOracle;
use crate::state::EffectKind;

use super::Archetype;

/// How an archetype picks a zone to attack or block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZonePolicy {
    /// Each zone with equal probability.
    Uniform,
    /// `zone` with probability `chance`, otherwise a uniform pick.
    Favor { zone: Zone, chance: f64 },
    /// `first` with `first_chance`, else `second` with `second_chance`,
    /// else `fallback`.
    Cascade {
        first: Zone,
        first_chance: f64,
        second: Zone,
        second_chance: f64,
        fallback: Zone,
    },
}

impl ZonePolicy {
    pub fn pick(&self, rng: &mut (impl RngOracle + ?Sized)) -> Zone {
        match *self {
            ZonePolicy::Uniform => uniform_zone(rng),
            ZonePolicy::Favor { zone, chance } => {
                if rng.chance(chance) {
                    zone
                } else {
                    uniform_zone(rng)
                }
            }
            ZonePolicy::Cascade {
                first,
                first_chance,
                second,
                second_chance,
                fallback,
            } => {
                if rng.chance(first_chance) {
                    first
                } else if rng.chance(second_chance) {
                    second
                } else {
                    fallback
                }
            }
        }
    }
}

/// Chance of overriding the uniformly drawn damage type with a specialty.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementBias {
    pub element: DamageType,
    pub chance: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BehaviorPolicy {
    pub attack: ZonePolicy,
    pub block: ZonePolicy,
    pub element_bias: Option<ElementBias>,
    /// Effect this archetype may inflict whenever its hit lands.
    pub signature: Option<OnHitRule>,
}

impl BehaviorPolicy {
    /// No preferences: uniform zones and damage type, no signature effect.
    pub const UNIFORM: Self = Self {
        attack: ZonePolicy::Uniform,
        block: ZonePolicy::Uniform,
        element_bias: None,
        signature: None,
    };

    /// Draws a full plan: attack zone, block zone, damage type, then the
    /// elemental bias.
    pub fn choose(&self, rng: &mut (impl RngOracle + ?Sized)) -> AttackPlan {
        let attack_zone = self.attack.pick(rng);
        let block_zone = self.block.pick(rng);
        let damage_type = self.pick_damage_type(rng);

        AttackPlan::new(attack_zone, block_zone, damage_type)
    }

    pub fn pick_damage_type(&self, rng: &mut (impl RngOracle + ?Sized)) -> DamageType {
        let drawn = DamageType::ALL[rng.index(DamageType::ALL.len())];
        match self.element_bias {
            Some(bias) if rng.chance(bias.chance) => bias.element,
            _ => drawn,
        }
    }
}

fn uniform_zone(rng: &mut (impl RngOracle + ?Sized)) -> Zone {
    Zone::ALL[rng.index(Zone::ALL.len())]
}

const fn favor(zone: Zone, chance: f64) -> ZonePolicy {
    ZonePolicy::Favor { zone, chance }
}

const fn cascade(
    first: Zone,
    first_chance: f64,
    second: Zone,
    second_chance: f64,
    fallback: Zone,
) -> ZonePolicy {
    ZonePolicy::Cascade {
        first,
        first_chance,
        second,
        second_chance,
        fallback,
    }
}

const fn bias(element: DamageType, chance: f64) -> Option<ElementBias> {
    Some(ElementBias { element, chance })
}

const fn signature(kind: EffectKind, duration: u32, chance: f64) -> Option<OnHitRule> {
    Some(OnHitRule::new(None, kind, duration, chance))
}

impl Archetype {
    /// Hand-tuned behavior for this archetype.
    pub const fn policy(self) -> BehaviorPolicy {
        use Zone::*;

        match self {
            Archetype::Koshchei => BehaviorPolicy::UNIFORM,
            Archetype::BabaYaga => BehaviorPolicy {
                attack: favor(Head, 0.6),
                block: favor(Body, 0.7),
                element_bias: bias(DamageType::Fire, 0.4),
                signature: signature(EffectKind::Curse, 2, 0.3),
            },
            Archetype::Leshy => BehaviorPolicy {
                attack: favor(Legs, 0.5),
                block: ZonePolicy::Uniform,
                element_bias: None,
                signature: signature(EffectKind::Poison, 3, 0.2),
            },
            Archetype::ForestSpirit => BehaviorPolicy {
                attack: cascade(Head, 0.4, Body, 0.4, Legs),
                block: favor(Body, 0.6),
                element_bias: None,
                signature: signature(EffectKind::Blind, 2, 0.25),
            },
            Archetype::Vodyanoy => BehaviorPolicy {
                attack: favor(Body, 0.7),
                block: favor(Body, 0.8),
                element_bias: bias(DamageType::Water, 0.5),
                signature: signature(EffectKind::Shock, 2, 0.3),
            },
            Archetype::Rusalka => BehaviorPolicy {
                attack: cascade(Head, 0.3, Body, 0.3, Legs),
                block: cascade(Head, 0.4, Body, 0.4, Legs),
                element_bias: bias(DamageType::Water, 0.6),
                signature: signature(EffectKind::Provoke, 1, 0.4),
            },
            Archetype::Kikimora => BehaviorPolicy {
                attack: favor(Head, 0.5),
                block: favor(Head, 0.6),
                element_bias: bias(DamageType::Electric, 0.3),
                signature: signature(EffectKind::Stun, 1, 0.35),
            },
            Archetype::Domovoy => BehaviorPolicy {
                attack: ZonePolicy::Uniform,
                block: favor(Body, 0.8),
                element_bias: None,
                signature: signature(EffectKind::Shield, 2, 0.2),
            },
            Archetype::Zmey => BehaviorPolicy {
                attack: cascade(Head, 0.6, Body, 0.6, Legs),
                block: favor(Body, 0.7),
                element_bias: bias(DamageType::Fire, 0.7),
                signature: signature(EffectKind::Burn, 3, 0.5),
            },
            Archetype::KoshcheiImmortal => BehaviorPolicy {
                attack: cascade(Head, 0.5, Body, 0.5, Legs),
                block: favor(Body, 0.6),
                element_bias: None,
                signature: signature(EffectKind::Curse, 3, 0.4),
            },
        }
    }
}
