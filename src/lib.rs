//! Creature Battle Engine
//!
//! A deterministic, turn-based battle simulator for two creatures. Each call to
//! [`simulate`] owns its combatants and its random source, so battles can run
//! concurrently and replay exactly from a seed.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod catalog;
pub mod combatant;
pub mod config;
pub mod errors;
pub mod interface;
pub mod save_store;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{Effectiveness, ElementType};

// --- From this crate's modules (`src/`) ---

// Core battle engine functions and state.
pub use battle::engine::{run_battle, simulate};
pub use battle::outcome::{BattleOutcome, Winner};
pub use battle::rng::{BattleRng, FixedRng, SeededRng};
pub use battle::state::{BattleEvent, BattlePhase, BattleState, Side};

// Combatants and their configuration.
pub use combatant::{Combatant, Move};
pub use config::{BattleConfig, DEFAULT_MAX_ROUNDS};

// Persistence.
pub use save_store::{InMemorySaveStore, Position, SaveGame, SaveStore};

// Crate-specific error and result types.
pub use errors::{
    BattleEngineError, BattleResult, CatalogError, CatalogResult, CombatantError, ConfigError,
    RequestError, StoreError, StoreResult,
};
