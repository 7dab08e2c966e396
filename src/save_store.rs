use crate::combatant::Combatant;
use crate::errors::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Player position on the overworld map.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// A player's saved progress.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveGame {
    pub player_id: String,
    #[serde(rename = "pokemons")]
    pub combatants: Vec<Combatant>,
    pub position: Position,
    /// Unix seconds. Zero means "stamp on save".
    #[serde(default)]
    pub timestamp: i64,
}

/// Persistence for per-player save snapshots.
///
/// Implementations must allow at most one writer per player id at a time.
pub trait SaveStore: Send + Sync {
    fn get(&self, player_id: &str) -> StoreResult<Option<SaveGame>>;

    /// Store a save, returning it as stored (with its timestamp filled in).
    fn put(&self, save: SaveGame) -> StoreResult<SaveGame>;
}

/// Process-local store keeping `postcard`-encoded snapshots behind a mutex.
#[derive(Debug, Default)]
pub struct InMemorySaveStore {
    snapshots: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemorySaveStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> StoreResult<usize> {
        let snapshots = self.snapshots.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(snapshots.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl SaveStore for InMemorySaveStore {
    fn get(&self, player_id: &str) -> StoreResult<Option<SaveGame>> {
        let snapshots = self.snapshots.lock().map_err(|_| StoreError::LockPoisoned)?;
        match snapshots.get(player_id) {
            Some(bytes) => {
                let save = postcard::from_bytes(bytes)
                    .map_err(|e| StoreError::Encoding(e.to_string()))?;
                Ok(Some(save))
            }
            None => Ok(None),
        }
    }

    fn put(&self, mut save: SaveGame) -> StoreResult<SaveGame> {
        if save.player_id.is_empty() {
            return Err(StoreError::MissingPlayerId);
        }
        if save.timestamp == 0 {
            save.timestamp = unix_now();
        }

        let bytes = postcard::to_allocvec(&save).map_err(|e| StoreError::Encoding(e.to_string()))?;
        let mut snapshots = self.snapshots.lock().map_err(|_| StoreError::LockPoisoned)?;
        snapshots.insert(save.player_id.clone(), bytes);

        tracing::info!(player_id = %save.player_id, timestamp = save.timestamp, "game saved");
        Ok(save)
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or(0)
}
