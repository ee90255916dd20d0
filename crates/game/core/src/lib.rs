//! Deterministic combat rules for the realm browser RPG.
//!
//! `realm-core` resolves turn-based duels between the player and folklore
//! enemies: hit, dodge, block, critical, armor, resistance and variance for a
//! single attack, a per-combatant ledger of timed status effects, a turn
//! controller for player and enemy turns, and a table-driven enemy behavior
//! selector. The crate performs no I/O; every random draw comes from an
//! injected [`RngOracle`], and static content is read through
//! [`BestiaryOracle`].
pub mod behavior;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod progression;
pub mod state;

pub use behavior::{Archetype, BehaviorPolicy, ElementBias, ZonePolicy, choose};
pub use combat::{
    AttackOutcome, AttackPlan, AttackRequest, DamageType, OutcomeKind, Resistances, Zone,
    ZoneProfile, resolve_attack,
};
pub use config::{CombatConfig, CombatTables, OnHitRule, TickTable, ZoneTable};
pub use engine::{
    CombatEngine, CombatLog, CombatResult, CombatSession, Exchange, Side, TurnReport,
    combat_result, is_combat_over,
};
pub use env::{
    BestiaryOracle, CharacterSnapshot, EnemyTemplate, ItemCategory, ItemDrop, LootTable,
    OracleError, PcgRng, Rarity, RngOracle, SequenceRng, ValueRange,
};
pub use error::{ErrorSeverity, GameError};
pub use progression::{ItemReward, Loot, Progression, generate_loot};
pub use state::{
    Attributes, Combatant, CombatantBuilder, Effect, EffectKind, EffectLedger, ModifiedStat,
    ResourceMeter, StatModifier, StatModifiers,
};
