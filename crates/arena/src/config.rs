//! Arena configuration from the environment and the command line.
use std::env;
use std::path::PathBuf;

use clap::Parser;

/// Headless combat runner for the realm engine.
#[derive(Clone, Debug, Default, Parser)]
#[command(name = "arena")]
#[command(about = "Simulate a duel against a bestiary archetype", long_about = None)]
#[command(version)]
pub struct Cli {
    /// RNG seed; the same seed replays the same fight
    #[arg(long)]
    pub seed: Option<u64>,

    /// Archetype id of the opponent (e.g. `leshy`, `baba_yaga`)
    #[arg(long)]
    pub enemy: Option<String>,

    /// Directory containing `bestiary.ron` and `combat.toml`
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// JSON character snapshot to fight with
    #[arg(long)]
    pub player: Option<PathBuf>,

    /// Stop after this many exchanges
    #[arg(long)]
    pub max_turns: Option<u32>,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Settings of one arena run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    pub seed: Option<u64>,
    pub enemy: String,
    /// `None` uses the embedded content.
    pub data_dir: Option<PathBuf>,
    /// `None` uses a fresh level 1 character.
    pub player: Option<PathBuf>,
    pub max_turns: u32,
    pub json: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            seed: None,
            enemy: "koshchei".to_string(),
            data_dir: None,
            player: None,
            max_turns: 200,
            json: false,
        }
    }
}

impl ArenaConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_SEED` - RNG seed (default: random)
    /// - `ARENA_ENEMY` - Opponent archetype id (default: koshchei)
    /// - `ARENA_DATA_DIR` - Content directory (default: embedded content)
    /// - `ARENA_PLAYER` - Character snapshot JSON file (default: new character)
    /// - `ARENA_MAX_TURNS` - Exchange limit (default: 200)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("ARENA_SEED") {
            config.seed = Some(seed);
        }
        if let Ok(enemy) = env::var("ARENA_ENEMY") {
            config.enemy = enemy;
        }
        if let Ok(dir) = env::var("ARENA_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(dir));
        }
        if let Ok(player) = env::var("ARENA_PLAYER") {
            config.player = Some(PathBuf::from(player));
        }
        if let Some(max_turns) = read_env::<u32>("ARENA_MAX_TURNS") {
            config.max_turns = max_turns.max(1);
        }

        config
    }

    /// Command-line arguments take precedence over the environment.
    pub fn with_cli(mut self, cli: Cli) -> Self {
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if let Some(enemy) = cli.enemy {
            self.enemy = enemy;
        }
        if cli.data_dir.is_some() {
            self.data_dir = cli.data_dir;
        }
        if cli.player.is_some() {
            self.player = cli.player;
        }
        if let Some(max_turns) = cli.max_turns {
            self.max_turns = max_turns.max(1);
        }
        self.json |= cli.json;
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_only_what_it_sets() {
        let base = ArenaConfig {
            seed: Some(1),
            enemy: "leshy".into(),
            ..ArenaConfig::default()
        };
        let cli = Cli::parse_from(["arena", "--enemy", "zmey", "--max-turns", "0"]);

        let config = base.with_cli(cli);

        assert_eq!(config.seed, Some(1));
        assert_eq!(config.enemy, "zmey");
        assert_eq!(config.max_turns, 1);
        assert!(!config.json);
    }

    #[test]
    fn parses_every_flag() {
        let cli = Cli::parse_from([
            "arena",
            "--seed",
            "42",
            "--data-dir",
            "content",
            "--player",
            "hero.json",
            "--json",
        ]);

        let config = ArenaConfig::default().with_cli(cli);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.data_dir, Some(PathBuf::from("content")));
        assert_eq!(config.player, Some(PathBuf::from("hero.json")));
        assert!(config.json);
    }
}
