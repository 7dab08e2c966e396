//! Request handling functions for a transport layer.
//!
//! These functions take and return JSON so any server (HTTP, MCP, a CLI) can
//! expose the engine without knowing its types. Validation of caller-supplied
//! combatants happens here, before the engine runs.

use crate::battle::engine::simulate;
use crate::battle::outcome::{BattleOutcome, Winner};
use crate::battle::rng::BattleRng;
use crate::catalog;
use crate::combatant::Combatant;
use crate::config::BattleConfig;
use crate::errors::{BattleEngineError, BattleResult, RequestError, StoreError};
use crate::save_store::{SaveGame, SaveStore};
use serde::{Deserialize, Serialize};

/// Body of a battle simulation request.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleRequest {
    #[serde(default)]
    pub player_pokemon: Option<Combatant>,
    #[serde(default)]
    pub opponent_pokemon: Option<Combatant>,
    /// Round cap; zero, negative or absent means the default.
    #[serde(default)]
    pub rounds: Option<i64>,
}

impl BattleRequest {
    /// Both combatants must be present with a non-zero id.
    pub fn validated(self) -> Result<(Combatant, Combatant, BattleConfig), RequestError> {
        match (self.player_pokemon, self.opponent_pokemon) {
            (Some(player), Some(opponent)) if player.id != 0 && opponent.id != 0 => Ok((
                player,
                opponent,
                BattleConfig {
                    max_rounds: self.rounds,
                },
            )),
            _ => Err(RequestError::MissingCombatant),
        }
    }
}

/// Wire form of a battle outcome.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleResponse {
    pub winner: Winner,
    pub rounds: u32,
    pub battle_log: Vec<String>,
    pub player_hp: u16,
    pub opponent_hp: u16,
    pub player_moves: Vec<String>,
    pub opponent_moves: Vec<String>,
}

impl From<BattleOutcome> for BattleResponse {
    fn from(outcome: BattleOutcome) -> Self {
        Self {
            winner: outcome.winner,
            rounds: outcome.rounds,
            battle_log: outcome.battle_log(),
            player_hp: outcome.player_hp,
            opponent_hp: outcome.opponent_hp,
            player_moves: outcome.player_moves,
            opponent_moves: outcome.opponent_moves,
        }
    }
}

/// Wire form of a save acknowledgement.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    pub success: bool,
    pub save_id: String,
    pub timestamp: i64,
    pub message: String,
}

/// Wire form of any error.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn from_error(err: &BattleEngineError) -> Self {
        let code = err.status_code();
        let error = match code {
            400 => "Bad Request",
            404 => "Not Found",
            _ => "Internal Server Error",
        };
        Self {
            error: error.to_string(),
            code,
            message: err.to_string(),
        }
    }

    pub fn to_json(&self) -> String {
        // A struct of strings and integers always serializes
        serde_json::to_string(self).unwrap_or_else(|_| format!("{{\"code\":{}}}", self.code))
    }
}

fn to_json<T: Serialize>(value: &T) -> BattleResult<String> {
    serde_json::to_string(value).map_err(|e| RequestError::Encoding(e.to_string()).into())
}

fn from_json<'a, T: Deserialize<'a>>(body: &'a str) -> BattleResult<T> {
    serde_json::from_str(body).map_err(|e| RequestError::MalformedBody(e.to_string()).into())
}

/// Run a validated battle request.
pub fn simulate_request<R: BattleRng + ?Sized>(
    request: BattleRequest,
    rng: &mut R,
) -> BattleResult<BattleResponse> {
    let (player, opponent, config) = request.validated()?;
    let outcome = simulate(player, opponent, &config, rng)?;
    Ok(BattleResponse::from(outcome))
}

/// Parse a JSON battle request, run it, and return the JSON response.
pub fn simulate_json<R: BattleRng + ?Sized>(body: &str, rng: &mut R) -> BattleResult<String> {
    let request: BattleRequest = from_json(body)?;
    to_json(&simulate_request(request, rng)?)
}

/// Battle between two catalog entries.
pub fn simulate_catalog_battle<R: BattleRng + ?Sized>(
    player_id: u32,
    opponent_id: u32,
    config: &BattleConfig,
    rng: &mut R,
) -> BattleResult<BattleOutcome> {
    let player = catalog::instantiate(player_id)?;
    let opponent = catalog::instantiate(opponent_id)?;
    simulate(player, opponent, config, rng)
}

pub fn catalog_json() -> BattleResult<String> {
    to_json(&catalog::all()?)
}

pub fn catalog_entry_json(id: u32) -> BattleResult<String> {
    to_json(catalog::get(id)?)
}

/// Parse a JSON save request and store it.
pub fn save_game_json(store: &dyn SaveStore, body: &str) -> BattleResult<String> {
    let save: SaveGame = from_json(body)?;
    let stored = store.put(save)?;
    to_json(&SaveResponse {
        success: true,
        save_id: stored.player_id,
        timestamp: stored.timestamp,
        message: "Game saved successfully".to_string(),
    })
}

pub fn load_game_json(store: &dyn SaveStore, player_id: &str) -> BattleResult<String> {
    let save = store
        .get(player_id)?
        .ok_or_else(|| StoreError::SaveNotFound(player_id.to_string()))?;
    to_json(&save)
}

/// Multi-line text summary of an outcome for terminal display.
pub fn display_outcome(outcome: &BattleOutcome) -> String {
    let mut output = String::new();
    for line in outcome.battle_log() {
        output.push_str(&line);
        output.push('\n');
    }
    output.push_str(&format!(
        "\nWinner: {} after {} round(s). Player HP: {}, Opponent HP: {}\n",
        outcome.winner, outcome.rounds, outcome.player_hp, outcome.opponent_hp
    ));
    output
}
