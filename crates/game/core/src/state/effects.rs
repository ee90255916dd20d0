//! Effect ledger: duration-bounded status effects on a combatant.
//!
//! Each combatant carries at most one effect per [`EffectKind`]. Reapplying a
//! kind keeps the longer of the two remaining durations; magnitudes never
//! stack. Effects are ticked once at the start of each turn, in insertion
//! order, and removed exactly when their remaining duration reaches zero.

use arrayvec::ArrayVec;

use crate::config::{CombatConfig, TickTable};

use super::combatant::Combatant;

/// Types of status effects.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum EffectKind {
    // ========================================================================
    // Crowd Control (restricts actions)
    // ========================================================================
    /// Forfeits the bearer's attack.
    Stun,
    /// Halves the bearer's accuracy.
    Blind,
    /// Taunted into attacking; no engine-level action.
    Provoke,

    // ========================================================================
    // Damage / drain over time
    // ========================================================================
    Poison,
    Burn,
    /// Drains stamina each turn.
    Shock,
    Bleed,
    /// Permanently lowers strength each turn.
    Curse,

    // ========================================================================
    // Buffs
    // ========================================================================
    /// HP recovery over time.
    Regen,
    Shield,
}

impl EffectKind {
    pub const ALL: [EffectKind; 10] = [
        EffectKind::Stun,
        EffectKind::Blind,
        EffectKind::Provoke,
        EffectKind::Poison,
        EffectKind::Burn,
        EffectKind::Shock,
        EffectKind::Bleed,
        EffectKind::Curse,
        EffectKind::Regen,
        EffectKind::Shield,
    ];
}

/// A single active effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    pub kind: EffectKind,
    /// Turns left, including the current one.
    pub remaining: u32,
    /// Fixed per-turn amount for damage/heal effects. When `None` the amount
    /// is derived from the bearer's strength.
    #[cfg_attr(feature = "serde", serde(default))]
    pub magnitude: Option<u32>,
}

impl Effect {
    pub const fn new(kind: EffectKind, remaining: u32) -> Self {
        Self {
            kind,
            remaining,
            magnitude: None,
        }
    }

    pub const fn with_magnitude(mut self, magnitude: u32) -> Self {
        self.magnitude = Some(magnitude);
        self
    }
}

/// Active effects on a combatant, in insertion order.
///
/// Serialized as a plain list. Deserializing goes through
/// [`EffectLedger::apply`], so duplicate kinds merge and zero-duration
/// entries are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Effect>", into = "Vec<Effect>"))]
pub struct EffectLedger {
    effects: ArrayVec<Effect, { CombatConfig::MAX_EFFECTS }>,
}

impl EffectLedger {
    /// Creates an empty ledger.
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Checks if an effect of `kind` is active.
    pub fn has(&self, kind: EffectKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    /// Remaining duration of `kind`, or `None` if it is not active.
    pub fn remaining(&self, kind: EffectKind) -> Option<u32> {
        self.get(kind).map(|e| e.remaining)
    }

    pub fn get(&self, kind: EffectKind) -> Option<&Effect> {
        self.effects.iter().find(|e| e.kind == kind)
    }

    /// Merges incoming effects into the ledger.
    ///
    /// A kind already present keeps `max(existing, incoming)` remaining turns
    /// and its original magnitude; a new kind is appended. Zero-duration
    /// effects are ignored.
    pub fn apply(&mut self, incoming: impl IntoIterator<Item = Effect>) {
        for effect in incoming {
            if effect.remaining == 0 {
                continue;
            }

            if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == effect.kind) {
                existing.remaining = existing.remaining.max(effect.remaining);
                continue;
            }

            // One slot per kind, so this cannot overflow.
            self.effects.push(effect);
        }
    }

    /// Removes an effect immediately.
    pub fn remove(&mut self, kind: EffectKind) {
        self.effects.retain(|e| e.kind != kind);
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

impl FromIterator<Effect> for EffectLedger {
    fn from_iter<I: IntoIterator<Item = Effect>>(iter: I) -> Self {
        let mut ledger = Self::empty();
        ledger.apply(iter);
        ledger
    }
}

impl From<Vec<Effect>> for EffectLedger {
    fn from(effects: Vec<Effect>) -> Self {
        effects.into_iter().collect()
    }
}

impl From<EffectLedger> for Vec<Effect> {
    fn from(ledger: EffectLedger) -> Self {
        ledger.effects.into_iter().collect()
    }
}

/// Advances every effect on `combatant` by one turn.
///
/// For each effect in insertion order: decrement the remaining duration,
/// perform its per-turn action, then drop it if no turns remain. Temporary
/// stat modifiers are ticked afterwards. Returns one message per action
/// taken, suitable for the combat log.
pub fn tick(combatant: &mut Combatant, table: &TickTable) -> Vec<String> {
    let mut messages = Vec::new();
    let mut effects = std::mem::take(&mut combatant.effects.effects);

    for effect in effects.iter_mut() {
        effect.remaining = effect.remaining.saturating_sub(1);
        if let Some(message) = act(combatant, effect, table) {
            messages.push(message);
        }
    }

    effects.retain(|e| e.remaining > 0);
    combatant.effects.effects = effects;

    for expired in combatant.modifiers.tick() {
        messages.push(format!("{} bonus wears off", expired.stat));
    }

    messages
}

fn act(combatant: &mut Combatant, effect: &Effect, table: &TickTable) -> Option<String> {
    let strength = f64::from(combatant.strength());
    let scaled = |ratio: f64| effect.magnitude.unwrap_or((strength * ratio).floor() as u32);

    match effect.kind {
        EffectKind::Poison => {
            let amount = scaled(table.poison_strength_ratio);
            combatant.hp.drain(amount);
            Some(format!("Poison deals {amount} damage"))
        }
        EffectKind::Burn => {
            let amount = scaled(table.burn_strength_ratio);
            combatant.hp.drain(amount);
            Some(format!("Burn deals {amount} damage"))
        }
        EffectKind::Bleed => {
            let amount = scaled(table.bleed_strength_ratio);
            combatant.hp.drain(amount);
            Some(format!("Bleeding deals {amount} damage"))
        }
        EffectKind::Shock => {
            combatant.stamina.drain(table.shock_stamina_drain);
            Some("Shock drains stamina".to_string())
        }
        EffectKind::Regen => {
            let amount = scaled(table.regen_strength_ratio);
            combatant.hp.restore(amount);
            Some(format!("Regeneration restores {amount} health"))
        }
        EffectKind::Curse => {
            // Base strength only; active modifiers are left untouched.
            let attributes = &mut combatant.attributes;
            attributes.strength = attributes
                .strength
                .saturating_sub(table.curse_strength_loss)
                .max(table.min_strength);
            Some("Curse saps strength".to_string())
        }
        EffectKind::Stun | EffectKind::Blind | EffectKind::Provoke | EffectKind::Shield => None,
    }
}
