//! Targetable body zones.

/// One of the three body regions used for both attack targeting and blocking.
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
pub enum Zone {
    /// Hard to land, hits hard and crits often.
    Head,
    Body,
    /// Easy to land, light damage.
    Legs,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::Head, Zone::Body, Zone::Legs];
}

/// Damage, accuracy and critical multipliers for a zone.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneProfile {
    pub damage: f64,
    pub accuracy: f64,
    pub crit_chance: f64,
}

impl ZoneProfile {
    pub const fn new(damage: f64, accuracy: f64, crit_chance: f64) -> Self {
        Self {
            damage,
            accuracy,
            crit_chance,
        }
    }
}
