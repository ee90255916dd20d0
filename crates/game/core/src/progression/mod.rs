//! Post-combat rewards: loot rolls and character progression.
mod level;
mod loot;

pub use level::Progression;
pub use loot::{ItemReward, Loot, generate_loot};
