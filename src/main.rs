//! Command-line front end for the battle engine.
//!
//! Run with: `creature-battle battle --player 1 --opponent 4 --seed 42`

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use creature_battle::battle::rng::SeededRng;
use creature_battle::interface::{display_outcome, simulate_catalog_battle, BattleResponse};
use creature_battle::{catalog, BattleConfig};
use std::path::PathBuf;

/// Turn-based creature battles
#[derive(Parser)]
#[command(name = "creature-battle")]
#[command(about = "Simulate battles between catalog creatures", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the creatures in the catalog
    List,

    /// Simulate a battle between two catalog creatures
    Battle(BattleArgs),
}

#[derive(Parser, Debug)]
struct BattleArgs {
    /// Catalog id of the player's creature
    #[arg(long)]
    player: u32,

    /// Catalog id of the opponent's creature
    #[arg(long)]
    opponent: u32,

    /// Round limit; zero or negative uses the default
    #[arg(long, allow_negative_numbers = true)]
    rounds: Option<i64>,

    /// Seed for a reproducible battle
    #[arg(long)]
    seed: Option<u64>,

    /// RON config file, e.g. `(max_rounds: Some(8))`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the JSON response instead of the battle log
    #[arg(long)]
    json: bool,
}

impl BattleArgs {
    fn execute(self) -> Result<()> {
        let mut config = match &self.config {
            Some(path) => BattleConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => BattleConfig::default(),
        };
        if self.rounds.is_some() {
            config.max_rounds = self.rounds;
        }

        let mut rng = match self.seed {
            Some(seed) => SeededRng::seeded(seed),
            None => SeededRng::from_os_rng(),
        };

        let outcome = simulate_catalog_battle(self.player, self.opponent, &config, &mut rng)
            .context("battle failed")?;

        if self.json {
            let response = BattleResponse::from(outcome);
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            print!("{}", display_outcome(&outcome));
        }
        Ok(())
    }
}

fn list() -> Result<()> {
    for entry in catalog::all().context("loading catalog")? {
        println!("{:#}", entry);
    }
    Ok(())
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays parseable with --json
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List => list(),
        Command::Battle(args) => args.execute(),
    }
}
