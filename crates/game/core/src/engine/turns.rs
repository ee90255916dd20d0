//! Player and enemy turns.

use crate::behavior::{Archetype, BehaviorPolicy};
use crate::combat::{AttackOutcome, AttackPlan, AttackRequest, DamageType};
use crate::config::OnHitRule;
use crate::env::RngOracle;
use crate::state::{Combatant, Effect, EffectKind, tick};

use super::CombatEngine;

/// Which side acted in a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

/// Everything that happened in one turn.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnReport {
    pub side: Side,
    /// 1-based turn number across both sides.
    pub turn: u32,
    pub plan: AttackPlan,
    pub outcome: AttackOutcome,
    /// Effects applied to the defender after the hit.
    pub inflicted: Vec<EffectKind>,
    /// Tick messages of the acting side.
    pub attacker_ticks: Vec<String>,
    /// Tick messages of the defending side.
    pub defender_ticks: Vec<String>,
    /// The line appended to the combat log.
    pub line: String,
}

impl<R: RngOracle> CombatEngine<R> {
    /// Plays the player's turn.
    ///
    /// Both sides tick first. The attack then resolves, stamina is spent
    /// whatever the outcome, and a critical hit rolls the player's crit rules
    /// against the enemy.
    pub fn player_turn(
        &mut self,
        player: &mut Combatant,
        enemy: &mut Combatant,
        plan: AttackPlan,
    ) -> TurnReport {
        self.turn += 1;
        let attacker_ticks = tick(player, &self.config.tables.ticks);
        let defender_ticks = tick(enemy, &self.config.tables.ticks);

        let outcome = self.resolve(player, enemy, plan);

        let mut inflicted = Vec::new();
        if dealt_damage(&outcome) {
            enemy.hp.drain(outcome.damage);
            if outcome.critical {
                inflicted = roll_rules(
                    &self.config.player_crit_rules,
                    plan.damage_type,
                    &mut self.rng,
                );
            }
        }
        apply_inflicted(enemy, &inflicted);
        player.stamina.drain(self.config.stamina_cost);

        let mut line = format!(
            "You attack {}, guard {}. {}",
            plan.attack_zone, plan.block_zone, outcome.message
        );
        append_ticks(&mut line, "Effects", &attacker_ticks);
        append_ticks(&mut line, "Enemy", &defender_ticks);

        self.record(TurnReport {
            side: Side::Player,
            turn: self.turn,
            plan,
            outcome,
            inflicted: inflicted.iter().map(|effect| effect.kind).collect(),
            attacker_ticks,
            defender_ticks,
            line,
        })
    }

    /// Plays the enemy's turn.
    ///
    /// Both sides tick first, then the enemy's archetype picks zones and a
    /// damage type. A landed hit rolls the archetype's signature effect and
    /// then the elemental rules against the player. Enemies without an
    /// archetype fight with uniform choices.
    pub fn enemy_turn(&mut self, enemy: &mut Combatant, player: &mut Combatant) -> TurnReport {
        self.turn += 1;
        let attacker_ticks = tick(enemy, &self.config.tables.ticks);
        let defender_ticks = tick(player, &self.config.tables.ticks);

        let policy = enemy
            .archetype
            .map_or(BehaviorPolicy::UNIFORM, Archetype::policy);
        let plan = policy.choose(&mut self.rng);
        let outcome = self.resolve(enemy, player, plan);

        let mut inflicted = Vec::new();
        if dealt_damage(&outcome) {
            player.hp.drain(outcome.damage);
            if let Some(signature) = policy.signature {
                inflicted = roll_rules(&[signature], plan.damage_type, &mut self.rng);
            }
            inflicted.extend(roll_rules(
                &self.config.enemy_element_rules,
                plan.damage_type,
                &mut self.rng,
            ));
        }
        apply_inflicted(player, &inflicted);

        let mut line = format!(
            "{} attacks {}, guards {}. {}",
            enemy.name, plan.attack_zone, plan.block_zone, outcome.message
        );
        append_ticks(&mut line, "Effects", &attacker_ticks);
        append_ticks(&mut line, "You", &defender_ticks);

        self.record(TurnReport {
            side: Side::Enemy,
            turn: self.turn,
            plan,
            outcome,
            inflicted: inflicted.iter().map(|effect| effect.kind).collect(),
            attacker_ticks,
            defender_ticks,
            line,
        })
    }

    fn resolve(
        &mut self,
        attacker: &Combatant,
        defender: &Combatant,
        plan: AttackPlan,
    ) -> AttackOutcome {
        AttackRequest::new(attacker, defender, plan).resolve(&mut self.rng, &self.config.tables)
    }

    fn record(&mut self, report: TurnReport) -> TurnReport {
        tracing::debug!(
            turn = report.turn,
            side = %report.side,
            outcome = %report.outcome.kind,
            damage = report.outcome.damage,
            critical = report.outcome.critical,
            inflicted = ?report.inflicted,
            "turn resolved"
        );
        self.log.push(report.line.clone());
        report
    }
}

/// Only a hit that still deals damage after variance can proc effects.
fn dealt_damage(outcome: &AttackOutcome) -> bool {
    outcome.is_hit() && outcome.damage > 0
}

/// Rolls each rule matching `damage_type`, in order. Rules for other damage
/// types consume no draw.
fn roll_rules(
    rules: &[OnHitRule],
    damage_type: DamageType,
    rng: &mut (impl RngOracle + ?Sized),
) -> Vec<Effect> {
    rules
        .iter()
        .filter(|rule| rule.matches(damage_type))
        .filter(|rule| rng.chance(rule.chance))
        .map(|rule| Effect::new(rule.kind, rule.duration))
        .collect()
}

fn apply_inflicted(defender: &mut Combatant, inflicted: &[Effect]) {
    if !inflicted.is_empty() {
        defender.effects.apply(inflicted.iter().copied());
    }
}

fn append_ticks(line: &mut String, label: &str, messages: &[String]) {
    if !messages.is_empty() {
        line.push_str(&format!(" | {label}: {}", messages.join(", ")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{OutcomeKind, Zone};
    use crate::config::CombatConfig;
    use crate::env::SequenceRng;
    use crate::state::Attributes;

    fn engine(draws: impl IntoIterator<Item = f64>) -> CombatEngine<SequenceRng> {
        CombatEngine::new(CombatConfig::default(), SequenceRng::new(draws))
    }

    fn hero() -> Combatant {
        Combatant::builder("Hero")
            .attributes(Attributes::new(12, 10, 10))
            .build()
    }

    fn target(archetype: Archetype) -> Combatant {
        Combatant::builder("Target")
            .archetype(archetype)
            .hp(80)
            .attributes(Attributes::new(12, 0, 10))
            .armor(5)
            .build()
    }

    #[test]
    fn player_hit_damages_enemy_and_spends_stamina() {
        // dodge, accuracy, no crit, variance 1.04
        let mut engine = engine([0.99, 0.1, 0.99, 0.6]);
        let mut player = hero();
        let mut enemy = target(Archetype::Koshchei);

        let report = engine.player_turn(
            &mut player,
            &mut enemy,
            AttackPlan::physical(Zone::Head, Zone::Body),
        );

        assert_eq!(report.outcome.kind, OutcomeKind::Hit);
        assert_eq!(report.outcome.damage, 32);
        assert_eq!(enemy.hp.current, 48);
        assert_eq!(player.stamina.current, 95);
        assert_eq!(report.line, "You attack head, guard body. Damage: 32");
        assert_eq!(engine.log().last(), Some(report.line.as_str()));
        assert_eq!(engine.turn(), 1);
    }

    #[test]
    fn stamina_is_spent_on_a_miss() {
        // dodge fails, accuracy roll 0.99 > 0.7
        let mut engine = engine([0.99, 0.99]);
        let mut player = hero();
        let mut enemy = target(Archetype::Koshchei);

        let report = engine.player_turn(
            &mut player,
            &mut enemy,
            AttackPlan::physical(Zone::Head, Zone::Head),
        );

        assert_eq!(report.outcome.kind, OutcomeKind::Missed);
        assert_eq!(enemy.hp.current, 80);
        assert_eq!(player.stamina.current, 95);
    }

    #[test]
    fn fire_crit_rolls_burn_then_bleed() {
        // dodge, accuracy, crit, variance, burn roll hit, bleed roll hit
        let mut engine = engine([0.99, 0.1, 0.0, 0.6, 0.1, 0.05]);
        let mut player = hero();
        let mut enemy = target(Archetype::Koshchei);

        let report = engine.player_turn(
            &mut player,
            &mut enemy,
            AttackPlan::new(Zone::Head, Zone::Body, DamageType::Fire),
        );

        assert!(report.outcome.critical);
        assert_eq!(report.inflicted, vec![EffectKind::Burn, EffectKind::Bleed]);
        assert_eq!(enemy.effects.remaining(EffectKind::Burn), Some(3));
        assert_eq!(enemy.effects.remaining(EffectKind::Bleed), Some(2));
    }

    #[test]
    fn tick_messages_are_appended_to_the_line() {
        let mut engine = engine([0.0]);
        let mut player = hero();
        let mut enemy = target(Archetype::Koshchei);
        player.effects.apply([Effect::new(EffectKind::Poison, 2)]);

        // agility 0 defender: dodge roll 0.0 < 0.0 is false, then a hit
        let report = engine.player_turn(
            &mut player,
            &mut enemy,
            AttackPlan::physical(Zone::Body, Zone::Legs),
        );

        assert_eq!(report.attacker_ticks, vec!["Poison deals 6 damage".to_string()]);
        assert!(report.line.ends_with(" | Effects: Poison deals 6 damage"));
        assert_eq!(player.hp.current, 94);
    }

    #[test]
    fn enemy_landed_hit_rolls_signature_and_element() {
        // Zmey: attack cascade head, block body, type draw, fire bias,
        // dodge, accuracy, no crit, variance, signature burn, element burn
        let draws = [0.1, 0.1, 0.0, 0.1, 0.99, 0.1, 0.99, 0.6, 0.1, 0.1];
        let mut engine = engine(draws);
        let mut zmey = Combatant::builder("Zmey")
            .archetype(Archetype::Zmey)
            .hp(120)
            .attributes(Attributes::new(20, 12, 14))
            .build();
        let mut player = hero();

        let report = engine.enemy_turn(&mut zmey, &mut player);

        assert_eq!(report.plan, AttackPlan::new(Zone::Head, Zone::Body, DamageType::Fire));
        assert!(report.outcome.is_hit());
        assert_eq!(report.inflicted, vec![EffectKind::Burn, EffectKind::Burn]);
        assert_eq!(player.effects.remaining(EffectKind::Burn), Some(3));
        assert_eq!(player.effects.len(), 1);
        assert!(report.line.starts_with("Zmey attacks head, guards body. Damage: "));
        assert_eq!(player.stamina.current, 100);
    }

    #[test]
    fn enemy_miss_inflicts_nothing() {
        // Koshchei uniform: attack, block, type; dodge fails, accuracy misses
        let mut engine = engine([0.0, 0.0, 0.0, 0.99, 0.99]);
        let mut enemy = target(Archetype::Koshchei);
        let mut player = hero();

        let report = engine.enemy_turn(&mut enemy, &mut player);

        assert_eq!(report.outcome.kind, OutcomeKind::Missed);
        assert!(report.inflicted.is_empty());
        assert_eq!(player.hp.current, 100);
    }
}
