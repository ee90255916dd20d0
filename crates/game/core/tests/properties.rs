use std::collections::HashMap;

use proptest::prelude::*;
use realm_core::combat::{dodge_chance, effective_accuracy, mitigate_armor, pre_variance_damage};
use realm_core::state::tick;
use realm_core::{
    AttackPlan, AttackRequest, Attributes, CombatTables, Combatant, DamageType, Effect, EffectKind,
    EffectLedger, ItemCategory, ItemDrop, LootTable, OutcomeKind, PcgRng, Rarity, Resistances,
    SequenceRng, ValueRange, Zone, generate_loot, resolve_attack,
};

fn zone() -> impl Strategy<Value = Zone> {
    prop::sample::select(Zone::ALL.to_vec())
}

fn damage_type() -> impl Strategy<Value = DamageType> {
    prop::sample::select(DamageType::ALL.to_vec())
}

fn effect() -> impl Strategy<Value = Effect> {
    (prop::sample::select(EffectKind::ALL.to_vec()), 0_u32..6)
        .prop_map(|(kind, remaining)| Effect::new(kind, remaining))
}

fn fighter(strength: u32, agility: u32) -> Combatant {
    Combatant::builder("Fighter")
        .attributes(Attributes::new(strength, agility, 10))
        .build()
}

proptest! {
    #[test]
    fn hp_stays_in_bounds_through_ticks_and_hits(
        strength in 1_u32..60,
        max_hp in 1_u32..200,
        effects in prop::collection::vec(effect(), 0..12),
        regen_turns in 1_u32..6,
        damage_type in damage_type(),
        seed in any::<u64>(),
        turns in 1_usize..15,
    ) {
        let tables = CombatTables::default();
        let mut rng = PcgRng::new(seed);
        let attacker = fighter(strength, 10);
        let mut defender = Combatant::builder("Target")
            .hp(max_hp)
            .attributes(Attributes::new(strength, 5, 10))
            .build();
        defender.hp.current = max_hp / 2;
        defender.effects.apply([Effect::new(EffectKind::Regen, regen_turns)]);
        defender.effects.apply(effects);

        for turn in 0..turns {
            tick(&mut defender, &tables.ticks);
            prop_assert!(defender.hp.current <= defender.hp.maximum);

            let zone = Zone::ALL[turn % 3];
            let outcome = resolve_attack(
                &attacker,
                &defender,
                zone,
                Zone::Body,
                damage_type,
                &mut rng,
                &tables,
            );
            defender.hp.drain(outcome.damage);
            prop_assert!(defender.hp.current <= defender.hp.maximum);
        }
    }

    #[test]
    fn stunned_attacker_never_rolls_or_deals_damage(
        strength in 1_u32..100,
        agility in 0_u32..100,
        crit_bonus in 0.0_f64..2.0,
        defender_agility in 0_u32..100,
        armor in 0_u32..50,
        resistance in 0.0_f64..1.0,
        stun_turns in 1_u32..5,
        attack_zone in zone(),
        block_zone in zone(),
        damage_type in damage_type(),
        roll in 0.0_f64..1.0,
    ) {
        let mut attacker = fighter(strength, agility);
        attacker.crit_bonus = crit_bonus;
        attacker.effects.apply([Effect::new(EffectKind::Stun, stun_turns)]);
        let defender = Combatant::builder("Target")
            .attributes(Attributes::new(10, defender_agility, 10))
            .armor(armor)
            .resistances(Resistances::new(resistance, resistance, resistance))
            .build();

        let plan = AttackPlan::new(attack_zone, block_zone, damage_type);
        let mut rng = SequenceRng::constant(roll);
        let outcome = AttackRequest::new(&attacker, &defender, plan)
            .resolve(&mut rng, &CombatTables::default());

        prop_assert_eq!(outcome.kind, OutcomeKind::Stunned);
        prop_assert_eq!(outcome.damage, 0);
        prop_assert!(!outcome.critical);
        prop_assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn dodge_grows_with_agility_and_dodge(
        low in 0_u32..100,
        step in 1_u32..50,
        bonus in 0.0_f64..0.5,
    ) {
        let tables = CombatTables::default();
        let slow = fighter(10, low);
        let quick = fighter(10, low + step);
        prop_assert!(dodge_chance(&slow, &tables) < dodge_chance(&quick, &tables));

        let mut evasive = slow.clone();
        evasive.dodge = bonus + 0.01;
        prop_assert!(dodge_chance(&slow, &tables) < dodge_chance(&evasive, &tables));
    }

    #[test]
    fn accuracy_grows_with_agility(low in 0_u32..100, step in 1_u32..50, zone in zone()) {
        let tables = CombatTables::default();
        let clumsy = fighter(10, low);
        let deft = fighter(10, low + step);

        prop_assert!(
            effective_accuracy(&clumsy, zone, &tables) < effective_accuracy(&deft, zone, &tables)
        );
    }

    #[test]
    fn block_scales_damage_by_the_block_factor(
        strength in 5_u32..80,
        zone in zone(),
        critical in any::<bool>(),
        damage_type in damage_type(),
    ) {
        let tables = CombatTables::default();
        let attacker = fighter(strength, 10);
        let defender = fighter(10, 10);
        let other = Zone::ALL.into_iter().find(|z| *z != zone).unwrap_or(Zone::Body);

        let open = pre_variance_damage(
            &attacker, &defender, zone, other, damage_type, critical, &tables,
        );
        let blocked = pre_variance_damage(
            &attacker, &defender, zone, zone, damage_type, critical, &tables,
        );

        prop_assert!((blocked - open * tables.block_factor).abs() < 1e-9);
    }

    #[test]
    fn armor_never_reduces_a_hit_below_one(damage in 0.0_f64..500.0, armor in 0_u32..1000) {
        let tables = CombatTables::default();
        prop_assert!(mitigate_armor(damage, armor, &tables) >= 1.0);
    }

    #[test]
    fn ledger_keeps_one_entry_with_the_longest_duration(
        effects in prop::collection::vec(effect(), 0..30),
    ) {
        let mut ledger = EffectLedger::empty();
        let mut longest: HashMap<EffectKind, u32> = HashMap::new();
        for effect in &effects {
            ledger.apply([*effect]);
            if effect.remaining > 0 {
                let entry = longest.entry(effect.kind).or_default();
                *entry = (*entry).max(effect.remaining);
            }
        }

        prop_assert_eq!(ledger.len(), longest.len());
        for (kind, remaining) in longest {
            prop_assert_eq!(ledger.remaining(kind), Some(remaining));
        }
    }

    #[test]
    fn duration_counts_down_and_expires_at_zero(duration in 1_u32..8) {
        let tables = CombatTables::default();
        let mut combatant = fighter(10, 10);
        combatant.effects.apply([Effect::new(EffectKind::Shield, duration)]);

        for left in (1..duration).rev() {
            tick(&mut combatant, &tables.ticks);
            prop_assert_eq!(combatant.effects.remaining(EffectKind::Shield), Some(left));
        }

        tick(&mut combatant, &tables.ticks);
        prop_assert!(!combatant.effects.has(EffectKind::Shield));
    }

    #[test]
    fn loot_stays_within_the_table(
        gold_min in 0_u32..500,
        gold_span in 0_u32..500,
        seed in any::<u64>(),
    ) {
        let table = LootTable {
            gold: ValueRange::new(gold_min, gold_min + gold_span),
            experience: ValueRange::new(10, 20),
            items: vec![ItemDrop::new(0.5, ItemCategory::Weapon, Rarity::Epic)],
        };

        let loot = generate_loot(&table, &mut PcgRng::new(seed));

        prop_assert!((gold_min..=gold_min + gold_span).contains(&loot.gold));
        prop_assert!((10..=20).contains(&loot.experience));
        prop_assert!(loot.items.len() <= 1);
    }
}
