//! Turn controller.
//!
//! The [`CombatEngine`] runs one player turn or one enemy turn at a time over
//! two caller-owned combatants. A turn ticks both sides' effects, resolves the
//! attack through the shared resolver, applies damage, stamina cost and any
//! on-hit effects, and appends one line to the bounded combat log.
//! [`CombatSession`] bundles an engine with its two combatants.

mod log;
mod session;
mod turns;

pub use log::CombatLog;
pub use session::{CombatSession, Exchange};
pub use turns::{Side, TurnReport};

use crate::config::CombatConfig;
use crate::env::{LootTable, PcgRng, RngOracle};
use crate::progression::{Loot, generate_loot};
use crate::state::Combatant;

/// State of a combat after a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum CombatResult {
    Ongoing,
    Victory,
    Defeat,
}

impl CombatResult {
    pub fn is_over(self) -> bool {
        self != Self::Ongoing
    }
}

/// Returns true once either side is out of hp.
pub fn is_combat_over(player: &Combatant, enemy: &Combatant) -> bool {
    player.is_defeated() || enemy.is_defeated()
}

/// Classifies the combat. When both sides reach zero hp in the same turn the
/// player loses.
pub fn combat_result(player: &Combatant, enemy: &Combatant) -> CombatResult {
    if player.is_defeated() {
        CombatResult::Defeat
    } else if enemy.is_defeated() {
        CombatResult::Victory
    } else {
        CombatResult::Ongoing
    }
}

/// Turn controller owning the configuration, the RNG and the combat log.
pub struct CombatEngine<R = PcgRng> {
    config: CombatConfig,
    rng: R,
    log: CombatLog,
    turn: u32,
}

impl<R: RngOracle> CombatEngine<R> {
    pub fn new(config: CombatConfig, rng: R) -> Self {
        let log = CombatLog::new(config.log_capacity);
        Self {
            config,
            rng,
            log,
            turn: 0,
        }
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn log(&self) -> &CombatLog {
        &self.log
    }

    /// Number of turns played so far, both sides counted.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn is_combat_over(&self, player: &Combatant, enemy: &Combatant) -> bool {
        is_combat_over(player, enemy)
    }

    pub fn combat_result(&self, player: &Combatant, enemy: &Combatant) -> CombatResult {
        combat_result(player, enemy)
    }

    /// Rolls `table` with the engine's RNG.
    pub fn generate_loot(&mut self, table: &LootTable) -> Loot {
        generate_loot(table, &mut self.rng)
    }
}

impl CombatEngine<PcgRng> {
    /// Engine with a PCG generator seeded by `seed`.
    pub fn seeded(config: CombatConfig, seed: u64) -> Self {
        Self::new(config, PcgRng::new(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_hp(name: &str, current: u32) -> Combatant {
        let mut combatant = Combatant::builder(name).hp(50).build();
        combatant.hp.current = current;
        combatant
    }

    #[test]
    fn result_follows_hp() {
        let player = with_hp("hero", 10);
        let enemy = with_hp("leshy", 10);
        assert_eq!(combat_result(&player, &enemy), CombatResult::Ongoing);
        assert!(!is_combat_over(&player, &enemy));

        let enemy = with_hp("leshy", 0);
        assert_eq!(combat_result(&player, &enemy), CombatResult::Victory);
        assert!(is_combat_over(&player, &enemy));
    }

    #[test]
    fn mutual_knockout_is_a_defeat() {
        let player = with_hp("hero", 0);
        let enemy = with_hp("leshy", 0);

        assert_eq!(combat_result(&player, &enemy), CombatResult::Defeat);
    }

    #[test]
    fn result_serializes_as_snake_case() {
        assert_eq!(CombatResult::Victory.to_string(), "victory");
        assert!(CombatResult::Defeat.is_over());
        assert!(!CombatResult::Ongoing.is_over());
    }
}
