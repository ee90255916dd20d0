//! Combatant records: one side of a single combat encounter.

use crate::behavior::Archetype;
use crate::combat::Resistances;

use super::effects::EffectLedger;
use super::modifiers::{ModifiedStat, StatModifiers};

/// Integer resource meter (health, stamina, mana) clamped to `[0, maximum]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    /// Creates a meter, clamping `current` to `maximum`.
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    pub const fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Subtracts up to `amount`, stopping at 0. Returns the amount removed.
    pub fn drain(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.current);
        self.current -= removed;
        removed
    }

    /// Adds up to `amount`, stopping at the maximum. Returns the amount added.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let added = amount.min(self.maximum - self.current.min(self.maximum));
        self.current = (self.current + added).min(self.maximum);
        added
    }

    pub fn refill(&mut self) {
        self.current = self.maximum;
    }

    pub const fn is_depleted(&self) -> bool {
        self.current == 0
    }
}

/// Primary attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub strength: u32,
    pub agility: u32,
    pub intelligence: u32,
}

impl Attributes {
    pub const fn new(strength: u32, agility: u32, intelligence: u32) -> Self {
        Self {
            strength,
            agility,
            intelligence,
        }
    }
}

impl Default for Attributes {
    /// Starting character: all 10.
    fn default() -> Self {
        Self::new(10, 10, 10)
    }
}

/// A mutable record for the player or an enemy during combat.
///
/// Every field is always present; collections default to empty.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub name: String,
    /// Enemy template the combatant was spawned from. `None` for the player.
    pub archetype: Option<Archetype>,
    pub hp: ResourceMeter,
    pub stamina: ResourceMeter,
    pub mana: ResourceMeter,
    /// Base attributes, before temporary modifiers.
    pub attributes: Attributes,
    /// Flat damage reduction.
    pub armor: u32,
    /// Additional dodge probability on top of agility.
    pub dodge: f64,
    /// Additional critical probability on top of the zone's chance.
    pub crit_bonus: f64,
    pub resistances: Resistances,
    pub effects: EffectLedger,
    pub modifiers: StatModifiers,
}

impl Combatant {
    pub const DEFAULT_HP: u32 = 100;
    pub const DEFAULT_STAMINA: u32 = 100;
    pub const DEFAULT_MANA: u32 = 20;

    pub fn builder(name: impl Into<String>) -> CombatantBuilder {
        CombatantBuilder::new(name)
    }

    /// Effective strength including temporary modifiers.
    pub fn strength(&self) -> u32 {
        self.effective(self.attributes.strength, ModifiedStat::Strength)
    }

    /// Effective agility including temporary modifiers.
    pub fn agility(&self) -> u32 {
        self.effective(self.attributes.agility, ModifiedStat::Agility)
    }

    fn effective(&self, base: u32, stat: ModifiedStat) -> u32 {
        base.saturating_add_signed(self.modifiers.total(stat))
    }

    pub fn is_defeated(&self) -> bool {
        self.hp.is_depleted()
    }

    pub fn is_player(&self) -> bool {
        self.archetype.is_none()
    }
}

/// Builder for constructing combatants.
pub struct CombatantBuilder {
    name: String,
    archetype: Option<Archetype>,
    hp: Option<ResourceMeter>,
    stamina: Option<ResourceMeter>,
    mana: Option<ResourceMeter>,
    attributes: Option<Attributes>,
    armor: u32,
    dodge: f64,
    crit_bonus: f64,
    resistances: Resistances,
    effects: EffectLedger,
    modifiers: StatModifiers,
}

impl CombatantBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            archetype: None,
            hp: None,
            stamina: None,
            mana: None,
            attributes: None,
            armor: 0,
            dodge: 0.0,
            crit_bonus: 0.0,
            resistances: Resistances::NONE,
            effects: EffectLedger::empty(),
            modifiers: StatModifiers::empty(),
        }
    }

    pub fn archetype(mut self, archetype: Archetype) -> Self {
        self.archetype = Some(archetype);
        self
    }

    /// Full health pool of `maximum`.
    pub fn hp(mut self, maximum: u32) -> Self {
        self.hp = Some(ResourceMeter::full(maximum));
        self
    }

    pub fn hp_meter(mut self, meter: ResourceMeter) -> Self {
        self.hp = Some(meter);
        self
    }

    pub fn stamina(mut self, meter: ResourceMeter) -> Self {
        self.stamina = Some(meter);
        self
    }

    pub fn mana(mut self, meter: ResourceMeter) -> Self {
        self.mana = Some(meter);
        self
    }

    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn armor(mut self, armor: u32) -> Self {
        self.armor = armor;
        self
    }

    pub fn dodge(mut self, dodge: f64) -> Self {
        self.dodge = dodge;
        self
    }

    pub fn crit_bonus(mut self, crit_bonus: f64) -> Self {
        self.crit_bonus = crit_bonus;
        self
    }

    pub fn resistances(mut self, resistances: Resistances) -> Self {
        self.resistances = resistances;
        self
    }

    pub fn effects(mut self, effects: EffectLedger) -> Self {
        self.effects = effects;
        self
    }

    pub fn modifiers(mut self, modifiers: StatModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn build(self) -> Combatant {
        Combatant {
            name: self.name,
            archetype: self.archetype,
            hp: self.hp.unwrap_or(ResourceMeter::full(Combatant::DEFAULT_HP)),
            stamina: self
                .stamina
                .unwrap_or(ResourceMeter::full(Combatant::DEFAULT_STAMINA)),
            mana: self.mana.unwrap_or(ResourceMeter::full(Combatant::DEFAULT_MANA)),
            attributes: self.attributes.unwrap_or_default(),
            armor: self.armor,
            dodge: self.dodge,
            crit_bonus: self.crit_bonus,
            resistances: self.resistances,
            effects: self.effects,
            modifiers: self.modifiers,
        }
    }
}
