use crate::env::{ItemCategory, LootTable, Rarity, RngOracle};

/// An item granted by a loot roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemReward {
    pub category: ItemCategory,
    pub rarity: Rarity,
}

/// Rewards rolled from a defeated enemy's loot table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loot {
    pub gold: u32,
    pub experience: u32,
    pub items: Vec<ItemReward>,
}

/// Roll a loot table.
///
/// Draw order: gold, experience, then one independent roll per item drop in
/// table order. Both ranges are inclusive.
pub fn generate_loot(table: &LootTable, rng: &mut (impl RngOracle + ?Sized)) -> Loot {
    let gold = rng.range(table.gold.min, table.gold.max);
    let experience = rng.range(table.experience.min, table.experience.max);

    let items = table
        .items
        .iter()
        .filter(|drop| rng.chance(drop.chance))
        .map(|drop| ItemReward {
            category: drop.category,
            rarity: drop.rarity,
        })
        .collect();

    Loot {
        gold,
        experience,
        items,
    }
}
