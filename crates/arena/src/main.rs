//! Realm arena binary.
//!
//! Runs a headless duel between a character and one bestiary archetype and
//! prints the result, the loot and the character's progression.
//!
//! # Examples
//!
//! ```bash
//! # Reproducible fight against the witch
//! cargo run -p realm-arena -- --enemy baba_yaga --seed 42
//!
//! # Turn-by-turn log and JSON summary
//! RUST_LOG=realm_core=debug cargo run -p realm-arena -- --json
//! ```

mod arena;
mod config;

use anyhow::Result;
use clap::Parser;

use crate::config::{ArenaConfig, Cli};

fn main() -> Result<()> {
    // Load .env file if it exists (for ARENA_* variables)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ArenaConfig::from_env().with_cli(Cli::parse());
    let summary = arena::run(&config)?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{} vs {}: {} after {} turns (seed {})",
        summary.character.name, summary.enemy, summary.result, summary.turns, summary.seed
    );
    println!("hp: you {}, enemy {}", summary.player_hp, summary.enemy_hp);
    if let Some(loot) = &summary.loot {
        println!("loot: {} gold, {} experience", loot.gold, loot.experience);
        for item in &loot.items {
            println!("  - {} {}", item.rarity, item.category);
        }
    }
    if summary.levels_gained > 0 {
        println!(
            "level up! now level {} (+{})",
            summary.character.level, summary.levels_gained
        );
    }

    Ok(())
}
