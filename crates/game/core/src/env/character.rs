//! Persisted character data and its conversion into a combatant.
//!
//! A [`CharacterSnapshot`] is the player's long-lived record (level, currency,
//! attribute points). Combat works on a [`Combatant`] built from it, and the
//! combatant's end state is folded back with [`CharacterSnapshot::absorb`].

use crate::combat::Resistances;
use crate::state::{Attributes, Combatant, EffectLedger, ResourceMeter, StatModifiers};

use super::error::OracleError;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CharacterSnapshot {
    pub name: String,
    pub level: u32,
    /// Experience toward the next level; reset on level-up.
    pub experience: u32,
    pub skill_points: u32,
    pub talent_points: u32,
    pub gold: u32,
    pub attributes: Attributes,
    pub hp: ResourceMeter,
    pub stamina: ResourceMeter,
    pub mana: ResourceMeter,
    pub armor: u32,
    pub dodge: f64,
    pub crit_bonus: f64,
    pub resistances: Resistances,
    pub effects: EffectLedger,
    pub modifiers: StatModifiers,
}

impl CharacterSnapshot {
    pub const STARTING_GOLD: u32 = 100;

    /// A level 1 character with default attributes and full resources.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: 1,
            experience: 0,
            skill_points: 0,
            talent_points: 0,
            gold: Self::STARTING_GOLD,
            attributes: Attributes::default(),
            hp: ResourceMeter::full(Combatant::DEFAULT_HP),
            stamina: ResourceMeter::full(Combatant::DEFAULT_STAMINA),
            mana: ResourceMeter::full(Combatant::DEFAULT_MANA),
            armor: 0,
            dodge: 0.0,
            crit_bonus: 0.0,
            resistances: Resistances::NONE,
            effects: EffectLedger::empty(),
            modifiers: StatModifiers::empty(),
        }
    }

    /// Builds the player combatant for an encounter.
    ///
    /// Current resources above their maximum are clamped.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::InvalidSnapshot` when the maximum health is zero
    /// or the character is already defeated.
    pub fn to_combatant(&self) -> Result<Combatant, OracleError> {
        if self.hp.maximum == 0 {
            return Err(OracleError::InvalidSnapshot("maximum hp must be positive"));
        }
        if self.hp.current == 0 {
            return Err(OracleError::InvalidSnapshot("character has no hp left"));
        }

        let clamp = |meter: ResourceMeter| ResourceMeter::new(meter.current, meter.maximum);
        Ok(Combatant::builder(self.name.clone())
            .hp_meter(clamp(self.hp))
            .stamina(clamp(self.stamina))
            .mana(clamp(self.mana))
            .attributes(self.attributes)
            .armor(self.armor)
            .dodge(self.dodge)
            .crit_bonus(self.crit_bonus)
            .resistances(self.resistances)
            .effects(self.effects.clone())
            .modifiers(self.modifiers.clone())
            .build())
    }

    /// Copies the mutable combat state of `combatant` back into the snapshot.
    ///
    /// Attributes are included: curse damage to strength persists.
    pub fn absorb(&mut self, combatant: &Combatant) {
        self.hp = combatant.hp;
        self.stamina = combatant.stamina;
        self.mana = combatant.mana;
        self.attributes = combatant.attributes;
        self.effects = combatant.effects.clone();
        self.modifiers = combatant.modifiers.clone();
    }
}

impl Default for CharacterSnapshot {
    fn default() -> Self {
        Self::new("Hero")
    }
}
