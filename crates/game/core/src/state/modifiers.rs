//! Temporary, time-boxed attribute modifiers (potions, skill buffs).

use arrayvec::ArrayVec;

use crate::config::CombatConfig;

/// Attribute a temporary modifier adjusts.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ModifiedStat {
    Strength,
    Agility,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatModifier {
    pub stat: ModifiedStat,
    /// Signed adjustment applied on top of the base attribute.
    pub amount: i32,
    /// Turns left, including the current one.
    pub remaining: u32,
}

impl StatModifier {
    pub const fn new(stat: ModifiedStat, amount: i32, remaining: u32) -> Self {
        Self {
            stat,
            amount,
            remaining,
        }
    }
}

/// Bounded list of active modifiers. Unlike effects, modifiers of the same
/// stat stack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<StatModifier>", into = "Vec<StatModifier>")
)]
pub struct StatModifiers {
    modifiers: ArrayVec<StatModifier, { CombatConfig::MAX_MODIFIERS }>,
}

impl StatModifiers {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Adds a modifier. Returns false if the list is full or the modifier
    /// has no duration.
    pub fn push(&mut self, modifier: StatModifier) -> bool {
        if modifier.remaining == 0 {
            return false;
        }
        self.modifiers.try_push(modifier).is_ok()
    }

    /// Net adjustment for `stat` across all active modifiers.
    pub fn total(&self, stat: ModifiedStat) -> i32 {
        self.modifiers
            .iter()
            .filter(|m| m.stat == stat)
            .map(|m| m.amount)
            .sum()
    }

    /// Decrements every modifier and returns the ones that expired.
    pub fn tick(&mut self) -> Vec<StatModifier> {
        let mut expired = Vec::new();
        for modifier in self.modifiers.iter_mut() {
            modifier.remaining = modifier.remaining.saturating_sub(1);
            if modifier.remaining == 0 {
                expired.push(*modifier);
            }
        }
        self.modifiers.retain(|m| m.remaining > 0);
        expired
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatModifier> {
        self.modifiers.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }
}

/// Goes through [`StatModifiers::push`]: expired entries and overflow are
/// dropped.
impl From<Vec<StatModifier>> for StatModifiers {
    fn from(list: Vec<StatModifier>) -> Self {
        let mut modifiers = Self::empty();
        for modifier in list {
            modifiers.push(modifier);
        }
        modifiers
    }
}

impl From<StatModifiers> for Vec<StatModifier> {
    fn from(modifiers: StatModifiers) -> Self {
        modifiers.modifiers.into_iter().collect()
    }
}
