//! A combat encounter owning both combatants.

use crate::combat::AttackPlan;
use crate::config::CombatConfig;
use crate::env::{BestiaryOracle, OracleError, RngOracle};
use crate::progression::Loot;
use crate::state::Combatant;

use super::{CombatEngine, CombatLog, CombatResult, TurnReport, combat_result};

/// One full exchange: the player's turn and, if the fight is still on, the
/// enemy's reply.
#[derive(Clone, Debug, PartialEq)]
pub struct Exchange {
    pub player: TurnReport,
    pub enemy: Option<TurnReport>,
    pub result: CombatResult,
}

/// Engine plus the two combatants of a single encounter.
pub struct CombatSession<R: RngOracle> {
    engine: CombatEngine<R>,
    player: Combatant,
    enemy: Combatant,
}

impl<R: RngOracle> CombatSession<R> {
    pub fn new(config: CombatConfig, rng: R, player: Combatant, enemy: Combatant) -> Self {
        tracing::info!(player = %player.name, enemy = %enemy.name, "combat started");
        Self {
            engine: CombatEngine::new(config, rng),
            player,
            enemy,
        }
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    pub fn engine(&self) -> &CombatEngine<R> {
        &self.engine
    }

    pub fn log(&self) -> &CombatLog {
        self.engine.log()
    }

    pub fn result(&self) -> CombatResult {
        combat_result(&self.player, &self.enemy)
    }

    pub fn is_over(&self) -> bool {
        self.result().is_over()
    }

    /// Plays the player's turn with `plan`, then the enemy's turn unless the
    /// combat ended.
    ///
    /// Calling this after the combat is over still plays the player's turn;
    /// callers check [`CombatSession::is_over`] first.
    pub fn exchange(&mut self, plan: AttackPlan) -> Exchange {
        let player = self
            .engine
            .player_turn(&mut self.player, &mut self.enemy, plan);

        let enemy = if self.is_over() {
            None
        } else {
            Some(self.engine.enemy_turn(&mut self.enemy, &mut self.player))
        };

        let result = self.result();
        if result.is_over() {
            tracing::info!(
                %result,
                turns = self.engine.turn(),
                player_hp = self.player.hp.current,
                enemy_hp = self.enemy.hp.current,
                "combat finished"
            );
        }

        Exchange {
            player,
            enemy,
            result,
        }
    }

    /// Rolls the enemy's loot after a victory. Returns `None` for any other
    /// result.
    ///
    /// # Errors
    ///
    /// Fails when the enemy's loot table cannot be found in `bestiary`.
    pub fn claim_loot(
        &mut self,
        bestiary: &(impl BestiaryOracle + ?Sized),
    ) -> Result<Option<Loot>, OracleError> {
        if self.result() != CombatResult::Victory {
            return Ok(None);
        }

        let table = bestiary.loot_table(&self.enemy)?;
        let loot = self.engine.generate_loot(table);
        tracing::info!(
            gold = loot.gold,
            experience = loot.experience,
            items = loot.items.len(),
            "loot rolled"
        );
        Ok(Some(loot))
    }

    /// Ends the session, returning the final player and enemy.
    pub fn into_combatants(self) -> (Combatant, Combatant) {
        (self.player, self.enemy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::Archetype;
    use crate::combat::Zone;
    use crate::env::{EnemyTemplate, LootTable, SequenceRng, ValueRange};
    use crate::state::Attributes;

    struct OneEnemy(EnemyTemplate);

    impl BestiaryOracle for OneEnemy {
        fn template(&self, archetype: Archetype) -> Option<&EnemyTemplate> {
            (archetype == Archetype::Leshy).then_some(&self.0)
        }
    }

    fn bestiary() -> OneEnemy {
        OneEnemy(EnemyTemplate {
            name: "Leshy".into(),
            hp: 10,
            attributes: Attributes::new(14, 0, 8),
            armor: 0,
            dodge: 0.0,
            resistances: Default::default(),
            loot: LootTable {
                gold: ValueRange::new(30, 60),
                experience: ValueRange::new(20, 35),
                items: Vec::new(),
            },
        })
    }

    #[test]
    fn killing_blow_skips_the_enemy_turn_and_yields_loot() {
        let bestiary = bestiary();
        let enemy = bestiary.spawn(Archetype::Leshy).unwrap();
        let player = Combatant::builder("Hero").build();
        // dodge, accuracy, crit miss, variance, gold, experience
        let rng = SequenceRng::new([0.99, 0.1, 0.99, 0.6, 0.0, 0.0]);
        let mut session = CombatSession::new(CombatConfig::default(), rng, player, enemy);

        let exchange = session.exchange(AttackPlan::physical(Zone::Body, Zone::Head));

        assert_eq!(exchange.result, CombatResult::Victory);
        assert!(exchange.enemy.is_none());
        assert_eq!(session.enemy().hp.current, 0);
        assert_eq!(session.log().len(), 1);

        let loot = session.claim_loot(&bestiary).unwrap().unwrap();
        assert_eq!((loot.gold, loot.experience), (30, 20));
    }

    #[test]
    fn ongoing_combat_plays_both_turns_and_has_no_loot() {
        let bestiary = bestiary();
        let mut enemy = bestiary.spawn(Archetype::Leshy).unwrap();
        enemy.hp = crate::state::ResourceMeter::full(500);
        let player = Combatant::builder("Hero").build();
        let mut session =
            CombatSession::new(CombatConfig::default(), SequenceRng::constant(0.99), player, enemy);

        let exchange = session.exchange(AttackPlan::physical(Zone::Legs, Zone::Legs));

        assert_eq!(exchange.result, CombatResult::Ongoing);
        assert!(exchange.enemy.is_some());
        assert_eq!(session.log().len(), 2);
        assert_eq!(session.claim_loot(&bestiary), Ok(None));
    }
}
