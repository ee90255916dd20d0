//! Combat resolution system.
//!
//! This module provides pure functions for resolving a single attack. Both
//! the player and enemies go through [`AttackRequest::resolve`]; nothing here
//! mutates a combatant.
//!
//! # Core Functions
//!
//! - `AttackRequest::resolve` / `resolve_attack`: Complete attack resolution
//! - `dodge_chance` / `effective_accuracy` / `crit_chance`: probability terms
//! - `pre_variance_damage`: Damage chain before the variance roll

pub mod damage;
pub mod hit;
pub mod result;
pub mod zone;

pub use damage::{
    DamageType, Resistances, base_damage, finalize_damage, mitigate_armor,
    pre_variance_damage, variance_factor,
};
pub use hit::{check_crit, check_dodge, check_hit, crit_chance, dodge_chance, effective_accuracy};
pub use result::{AttackOutcome, AttackPlan, AttackRequest, OutcomeKind, resolve_attack};
pub use zone::{Zone, ZoneProfile};
