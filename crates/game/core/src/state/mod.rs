//! Mutable combat state.
//!
//! This module owns the per-combatant records (resources, attributes,
//! resistances) together with the effect ledger and temporary modifiers that
//! the turn controller mutates every turn.
mod combatant;
mod effects;
mod modifiers;

pub use combatant::{Attributes, Combatant, CombatantBuilder, ResourceMeter};
pub use effects::{Effect, EffectKind, EffectLedger, tick};
pub use modifiers::{ModifiedStat, StatModifier, StatModifiers};
