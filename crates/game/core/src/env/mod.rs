//! Read-only world data and injected capabilities.
//!
//! The bestiary oracle exposes enemy templates and loot tables, the RNG oracle
//! supplies every random draw, and character snapshots bridge persisted player
//! data into combat. Concrete oracle implementations live in `realm-content`.
mod bestiary;
mod character;
mod error;
mod rng;

pub use bestiary::{
    BestiaryOracle, EnemyTemplate, ItemCategory, ItemDrop, LootTable, Rarity, ValueRange,
};
pub use character::CharacterSnapshot;
pub use error::OracleError;
pub use rng::{PcgRng, RngOracle, SequenceRng};
