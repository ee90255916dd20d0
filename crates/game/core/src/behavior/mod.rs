//! Enemy behavior selection.
//!
//! The only per-archetype "AI" is table-driven: an enemy's archetype maps to a
//! [`BehaviorPolicy`] of weighted zone preferences and an elemental bias. The
//! selector has no memory and no planning; it feeds the same resolver the
//! player uses.

mod policy;

pub use policy::{BehaviorPolicy, ElementBias, ZonePolicy};

use crate::combat::AttackPlan;
use crate::env::{OracleError, RngOracle};

/// Enemy archetype.
///
/// Ids are the snake_case variant names (`"baba_yaga"`, `"zmey"`, ...) and are
/// the keys of the bestiary.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Archetype {
    /// Deathless sorcerer; fights without preferences.
    Koshchei,
    /// Witch; aims high, guards the body, favors fire and curses.
    BabaYaga,
    /// Forest spirit; goes for the legs and poisons.
    Leshy,
    /// Quick nature spirit; blinds.
    ForestSpirit,
    /// Water spirit; body blows with water damage.
    Vodyanoy,
    /// Drowned maiden; evasive, water damage, provokes.
    Rusalka,
    /// House spirit; cunning, electric, stuns.
    Kikimora,
    /// Hearth keeper; defensive, shields itself.
    Domovoy,
    /// Three-headed dragon; fire breath and burns.
    Zmey,
    /// Koshchei at full power; curses.
    KoshcheiImmortal,
}

impl Archetype {
    pub const ALL: [Archetype; 10] = [
        Archetype::Koshchei,
        Archetype::BabaYaga,
        Archetype::Leshy,
        Archetype::ForestSpirit,
        Archetype::Vodyanoy,
        Archetype::Rusalka,
        Archetype::Kikimora,
        Archetype::Domovoy,
        Archetype::Zmey,
        Archetype::KoshcheiImmortal,
    ];

    /// Parses an archetype id.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::UnknownArchetype` for ids outside the closed set.
    pub fn from_id(id: &str) -> Result<Self, OracleError> {
        id.parse()
            .map_err(|_| OracleError::UnknownArchetype(id.to_string()))
    }
}

/// Choose an enemy's attack zone, block zone and damage type.
///
/// Draw order: attack zone, block zone, damage type, then the elemental bias.
pub fn choose(archetype: Archetype, rng: &mut (impl RngOracle + ?Sized)) -> AttackPlan {
    archetype.policy().choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{DamageType, Zone};
    use crate::env::SequenceRng;

    #[test]
    fn ids_round_trip_through_strings() {
        for archetype in Archetype::ALL {
            assert_eq!(Archetype::from_id(archetype.as_ref()), Ok(archetype));
        }
        assert_eq!(Archetype::from_id("BABA_YAGA"), Ok(Archetype::BabaYaga));
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert_eq!(
            Archetype::from_id("goblin"),
            Err(OracleError::UnknownArchetype("goblin".to_string()))
        );
    }

    #[test]
    fn witch_prefers_head_and_body_with_fire() {
        // attack favor hit, block favor hit, uniform type draw, bias hit
        let mut rng = SequenceRng::new([0.1, 0.1, 0.0, 0.1]);
        let plan = choose(Archetype::BabaYaga, &mut rng);

        assert_eq!(
            plan,
            AttackPlan::new(Zone::Head, Zone::Body, DamageType::Fire)
        );
    }

    #[test]
    fn uniform_archetype_spreads_choices() {
        // attack index 0, block index 2, damage type index 3
        let mut rng = SequenceRng::new([0.0, 0.9, 0.9]);
        let plan = choose(Archetype::Koshchei, &mut rng);

        assert_eq!(
            plan,
            AttackPlan::new(Zone::Head, Zone::Legs, DamageType::Electric)
        );
        assert_eq!(rng.consumed(), 3);
    }
}
