//! Fight simulation.

use std::path::Path;

use anyhow::Context;
use realm_content::{ContentFactory, StaticBestiary, builtin};
use realm_core::{
    Archetype, AttackPlan, BestiaryOracle, CharacterSnapshot, CombatConfig, CombatResult,
    CombatSession, Loot, PcgRng, Progression, RngOracle, Zone,
};
use serde::Serialize;

use crate::config::ArenaConfig;

/// Mixed into the seed so the player's choices and the engine's draws come
/// from different streams.
const PLAYER_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Outcome of one arena run.
#[derive(Clone, Debug, Serialize)]
pub struct Summary {
    pub seed: u64,
    pub enemy: Archetype,
    pub result: CombatResult,
    /// Turns played by both sides.
    pub turns: u32,
    pub player_hp: u32,
    pub enemy_hp: u32,
    pub loot: Option<Loot>,
    pub levels_gained: u32,
    /// The character after combat and rewards.
    pub character: CharacterSnapshot,
}

/// Loads content and the character, then plays the fight to completion.
pub fn run(config: &ArenaConfig) -> anyhow::Result<Summary> {
    let (combat, bestiary) = load_content(config.data_dir.as_deref())?;
    let snapshot = load_character(config.player.as_deref())?;
    let seed = config.seed.unwrap_or_else(rand::random::<u64>);

    simulate(combat, &bestiary, snapshot, &config.enemy, seed, config.max_turns)
}

/// Plays one fight with a player who picks zones uniformly and attacks
/// physically.
pub fn simulate(
    combat: CombatConfig,
    bestiary: &StaticBestiary,
    mut snapshot: CharacterSnapshot,
    enemy_id: &str,
    seed: u64,
    max_turns: u32,
) -> anyhow::Result<Summary> {
    let archetype = Archetype::from_id(enemy_id)?;
    let enemy = bestiary.spawn(archetype)?;
    let player = snapshot
        .to_combatant()
        .context("Failed to build the player from the character snapshot")?;

    tracing::info!(seed, enemy = %archetype, "arena fight");

    let mut session = CombatSession::new(combat, PcgRng::new(seed), player, enemy);
    let mut chooser = PcgRng::new(seed ^ PLAYER_STREAM);

    let mut exchanges = 0;
    while !session.is_over() && exchanges < max_turns {
        let exchange = session.exchange(random_plan(&mut chooser));
        exchanges += 1;

        tracing::info!("{}", exchange.player.line);
        if let Some(reply) = &exchange.enemy {
            tracing::info!("{}", reply.line);
        }
    }

    let result = session.result();
    if !result.is_over() {
        tracing::warn!(max_turns, "turn limit reached");
    }

    let loot = session.claim_loot(bestiary)?;
    let turns = session.engine().turn();
    let (player, enemy) = session.into_combatants();

    snapshot.absorb(&player);
    let levels_gained = loot
        .as_ref()
        .map_or(0, |loot| Progression::grant(&mut snapshot, loot));

    Ok(Summary {
        seed,
        enemy: archetype,
        result,
        turns,
        player_hp: player.hp.current,
        enemy_hp: enemy.hp.current,
        loot,
        levels_gained,
        character: snapshot,
    })
}

fn random_plan(rng: &mut impl RngOracle) -> AttackPlan {
    let attack_zone = Zone::ALL[rng.index(Zone::ALL.len())];
    let block_zone = Zone::ALL[rng.index(Zone::ALL.len())];
    AttackPlan::physical(attack_zone, block_zone)
}

fn load_content(data_dir: Option<&Path>) -> anyhow::Result<(CombatConfig, StaticBestiary)> {
    match data_dir {
        Some(dir) => {
            let factory = ContentFactory::new(dir);
            Ok((factory.load_config()?, factory.load_bestiary()?))
        }
        None => {
            tracing::debug!("using embedded content");
            Ok((builtin::config()?, builtin::bestiary()?))
        }
    }
}

fn load_character(path: Option<&Path>) -> anyhow::Result<CharacterSnapshot> {
    let Some(path) = path else {
        return Ok(CharacterSnapshot::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read character {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse character {}", path.display()))
}

#[cfg(test)]
mod tests {
    use realm_core::EffectKind;

    use super::*;

    fn bestiary() -> StaticBestiary {
        builtin::bestiary().unwrap()
    }

    #[test]
    fn same_seed_same_fight() {
        let first = simulate(
            CombatConfig::default(),
            &bestiary(),
            CharacterSnapshot::default(),
            "leshy",
            7,
            200,
        )
        .unwrap();
        let second = simulate(
            CombatConfig::default(),
            &bestiary(),
            CharacterSnapshot::default(),
            "leshy",
            7,
            200,
        )
        .unwrap();

        assert_eq!(first.result, second.result);
        assert_eq!(first.turns, second.turns);
        assert_eq!(first.player_hp, second.player_hp);
        assert_eq!(first.loot, second.loot);
    }

    #[test]
    fn fight_ends_or_hits_the_limit() {
        let summary = simulate(
            CombatConfig::default(),
            &bestiary(),
            CharacterSnapshot::default(),
            "kikimora",
            11,
            200,
        )
        .unwrap();

        match summary.result {
            CombatResult::Victory => {
                assert_eq!(summary.enemy_hp, 0);
                assert!(summary.loot.is_some());
            }
            CombatResult::Defeat => {
                assert_eq!(summary.player_hp, 0);
                assert!(summary.loot.is_none());
            }
            CombatResult::Ongoing => assert!(summary.turns >= 200),
        }
        assert_eq!(summary.character.hp.current, summary.player_hp);
    }

    #[test]
    fn unknown_enemy_is_an_error() {
        let err = simulate(
            CombatConfig::default(),
            &bestiary(),
            CharacterSnapshot::default(),
            "goblin",
            1,
            10,
        )
        .unwrap_err();

        assert!(err.to_string().contains("unknown archetype 'goblin'"));
    }

    #[test]
    fn character_is_read_from_json() {
        let mut snapshot = CharacterSnapshot::new("Vasilisa");
        snapshot.level = 3;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hero.json");
        std::fs::write(&path, serde_json::to_string(&snapshot).unwrap()).unwrap();

        let loaded = load_character(Some(path.as_path())).unwrap();
        assert_eq!(loaded, snapshot);

        let missing = dir.path().join("missing.json");
        assert!(load_character(Some(missing.as_path())).is_err());
    }

    #[test]
    fn loaded_character_effects_merge_by_kind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hero.json");
        std::fs::write(
            &path,
            r#"{
                "name": "Ivan",
                "effects": [
                    {"kind": "poison", "remaining": 3},
                    {"kind": "poison", "remaining": 2},
                    {"kind": "burn", "remaining": 0}
                ]
            }"#,
        )
        .unwrap();

        let player = load_character(Some(path.as_path()))
            .unwrap()
            .to_combatant()
            .unwrap();

        assert_eq!(player.effects.len(), 1);
        assert_eq!(player.effects.remaining(EffectKind::Poison), Some(3));
        assert!(!player.effects.has(EffectKind::Burn));
    }
}
