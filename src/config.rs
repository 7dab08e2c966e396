use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Round cap used when none, or a non-positive one, is supplied.
pub const DEFAULT_MAX_ROUNDS: u32 = 5;

/// Battle configuration.
///
/// Loaded from a RON document such as `(max_rounds: Some(8))`, or built in code.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BattleConfig {
    /// Requested round cap. Zero, negative or absent means `DEFAULT_MAX_ROUNDS`.
    pub max_rounds: Option<i64>,
}

impl BattleConfig {
    pub fn with_max_rounds(max_rounds: i64) -> Self {
        Self {
            max_rounds: Some(max_rounds),
        }
    }

    /// The round cap the battle will actually use.
    pub fn effective_max_rounds(&self) -> u32 {
        match self.max_rounds {
            Some(rounds) if rounds > 0 => u32::try_from(rounds).unwrap_or(u32::MAX),
            requested => {
                tracing::debug!(
                    ?requested,
                    default = DEFAULT_MAX_ROUNDS,
                    "round limit missing or non-positive, using default"
                );
                DEFAULT_MAX_ROUNDS
            }
        }
    }

    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        ron::from_str(source).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_ron_str(&content)
    }
}
