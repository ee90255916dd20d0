//! Experience, currency and level-ups.

use crate::env::CharacterSnapshot;

use super::loot::Loot;

/// Applies combat rewards to a character.
pub struct Progression;

impl Progression {
    /// Experience needed per level: reaching level `n + 1` costs `n * 100`.
    pub const EXPERIENCE_PER_LEVEL: u32 = 100;
    pub const ATTRIBUTE_GAIN: u32 = 1;
    pub const HP_GAIN: u32 = 10;
    pub const STAMINA_GAIN: u32 = 5;
    pub const MANA_GAIN: u32 = 5;

    /// Experience required to advance from `level`.
    pub const fn threshold(level: u32) -> u32 {
        level.saturating_mul(Self::EXPERIENCE_PER_LEVEL)
    }

    /// Credits `loot` and applies every level-up it unlocks.
    ///
    /// Returns the number of levels gained. Items are left to the caller's
    /// inventory.
    pub fn grant(snapshot: &mut CharacterSnapshot, loot: &Loot) -> u32 {
        snapshot.gold = snapshot.gold.saturating_add(loot.gold);
        snapshot.experience = snapshot.experience.saturating_add(loot.experience);

        let mut gained = 0;
        while snapshot.level > 0 && snapshot.experience >= Self::threshold(snapshot.level) {
            snapshot.experience -= Self::threshold(snapshot.level);
            Self::level_up(snapshot);
            gained += 1;
        }

        if gained > 0 {
            tracing::info!(
                name = %snapshot.name,
                level = snapshot.level,
                gained,
                "character leveled up"
            );
        }
        gained
    }

    fn level_up(snapshot: &mut CharacterSnapshot) {
        snapshot.level += 1;

        let attributes = &mut snapshot.attributes;
        attributes.strength += Self::ATTRIBUTE_GAIN;
        attributes.agility += Self::ATTRIBUTE_GAIN;
        attributes.intelligence += Self::ATTRIBUTE_GAIN;

        snapshot.hp.maximum += Self::HP_GAIN;
        snapshot.stamina.maximum += Self::STAMINA_GAIN;
        snapshot.mana.maximum += Self::MANA_GAIN;
        snapshot.hp.refill();
        snapshot.stamina.refill();
        snapshot.mana.refill();

        snapshot.skill_points += 1;
        snapshot.talent_points += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loot(gold: u32, experience: u32) -> Loot {
        Loot {
            gold,
            experience,
            items: Vec::new(),
        }
    }

    #[test]
    fn below_threshold_only_accumulates() {
        let mut snapshot = CharacterSnapshot::default();

        assert_eq!(Progression::grant(&mut snapshot, &loot(75, 99)), 0);
        assert_eq!(snapshot.level, 1);
        assert_eq!(snapshot.experience, 99);
        assert_eq!(snapshot.gold, 175);
    }

    #[test]
    fn level_up_raises_stats_and_refills() {
        let mut snapshot = CharacterSnapshot::default();
        snapshot.hp.drain(60);

        assert_eq!(Progression::grant(&mut snapshot, &loot(0, 130)), 1);
        assert_eq!(snapshot.level, 2);
        assert_eq!(snapshot.experience, 30);
        assert_eq!(snapshot.attributes.strength, 11);
        assert_eq!(snapshot.hp.current, 110);
        assert_eq!(snapshot.hp.maximum, 110);
        assert_eq!(snapshot.stamina.maximum, 105);
        assert_eq!(snapshot.mana.maximum, 25);
        assert_eq!(snapshot.skill_points, 1);
        assert_eq!(snapshot.talent_points, 1);
    }

    #[test]
    fn large_rewards_chain_level_ups() {
        let mut snapshot = CharacterSnapshot::default();

        // 100 for level 1, 200 for level 2, 50 left over
        assert_eq!(Progression::grant(&mut snapshot, &loot(0, 350)), 2);
        assert_eq!(snapshot.level, 3);
        assert_eq!(snapshot.experience, 50);
        assert_eq!(snapshot.skill_points, 2);
    }
}
