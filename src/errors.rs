use std::fmt;

/// Main error type for the creature battle engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEngineError {
    /// A combatant cannot take part in a battle
    Combatant(CombatantError),
    /// Error related to catalog lookup or catalog data
    Catalog(CatalogError),
    /// Error related to the save-game store
    Store(StoreError),
    /// Error related to an incoming request payload
    Request(RequestError),
    /// Error related to loading battle configuration
    Config(ConfigError),
}

/// Errors that make a combatant unusable in battle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatantError {
    /// The combatant has no moves, so no move can be selected
    EmptyMoveList { combatant: String },
    /// The combatant has no elemental types
    EmptyTypeList { combatant: String },
    /// Level must be a positive integer
    InvalidLevel { combatant: String },
    /// A move's accuracy is outside 0-100
    AccuracyOutOfRange {
        combatant: String,
        move_name: String,
        accuracy: u8,
    },
}

/// Errors related to catalog operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No catalog entry carries this id
    EntryNotFound(u32),
    /// No catalog entry carries this name
    NameNotFound(String),
    /// Catalog data is malformed or incomplete
    MalformedData(String),
}

/// Errors related to the save-game store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Saves must be keyed by a non-empty player id
    MissingPlayerId,
    /// No snapshot exists for this player
    SaveNotFound(String),
    /// A snapshot could not be encoded or decoded
    Encoding(String),
    /// The store lock was poisoned by a panicking writer
    LockPoisoned,
}

/// Errors related to request payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The body is not valid JSON for the expected shape
    MalformedBody(String),
    /// One or both combatants are absent or carry a zero id
    MissingCombatant,
    /// The response could not be serialized
    Encoding(String),
}

/// Errors related to battle configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration file could not be read
    Io(String),
    /// The configuration document is not valid RON
    Malformed(String),
}

impl BattleEngineError {
    /// HTTP-style status code a transport would answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            BattleEngineError::Combatant(_)
            | BattleEngineError::Request(RequestError::MalformedBody(_))
            | BattleEngineError::Request(RequestError::MissingCombatant)
            | BattleEngineError::Store(StoreError::MissingPlayerId) => 400,
            BattleEngineError::Catalog(CatalogError::EntryNotFound(_))
            | BattleEngineError::Catalog(CatalogError::NameNotFound(_)) => 404,
            BattleEngineError::Store(StoreError::SaveNotFound(_)) => 404,
            _ => 500,
        }
    }
}

impl fmt::Display for BattleEngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEngineError::Combatant(err) => write!(f, "Invalid combatant: {}", err),
            BattleEngineError::Catalog(err) => write!(f, "Catalog error: {}", err),
            BattleEngineError::Store(err) => write!(f, "Save store error: {}", err),
            BattleEngineError::Request(err) => write!(f, "Request error: {}", err),
            BattleEngineError::Config(err) => write!(f, "Configuration error: {}", err),
        }
    }
}

impl fmt::Display for CombatantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatantError::EmptyMoveList { combatant } => {
                write!(f, "{} has no moves", combatant)
            }
            CombatantError::EmptyTypeList { combatant } => {
                write!(f, "{} has no types", combatant)
            }
            CombatantError::InvalidLevel { combatant } => {
                write!(f, "{} must have a positive level", combatant)
            }
            CombatantError::AccuracyOutOfRange {
                combatant,
                move_name,
                accuracy,
            } => write!(
                f,
                "{}'s {} has accuracy {} (expected 0-100)",
                combatant, move_name, accuracy
            ),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::EntryNotFound(id) => write!(f, "Pokemon with ID {} not found", id),
            CatalogError::NameNotFound(name) => write!(f, "Pokemon named {} not found", name),
            CatalogError::MalformedData(details) => write!(f, "Malformed catalog data: {}", details),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::MissingPlayerId => write!(f, "Player ID is required"),
            StoreError::SaveNotFound(player_id) => {
                write!(f, "No saved game found for player {}", player_id)
            }
            StoreError::Encoding(details) => write!(f, "Snapshot encoding failed: {}", details),
            StoreError::LockPoisoned => write!(f, "Save store lock poisoned"),
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::MalformedBody(details) => write!(f, "Invalid request body: {}", details),
            RequestError::MissingCombatant => {
                write!(f, "Both player and opponent Pokemon are required")
            }
            RequestError::Encoding(details) => write!(f, "Response encoding failed: {}", details),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(details) => write!(f, "Could not read config: {}", details),
            ConfigError::Malformed(details) => write!(f, "Malformed config: {}", details),
        }
    }
}

impl std::error::Error for BattleEngineError {}
impl std::error::Error for CombatantError {}
impl std::error::Error for CatalogError {}
impl std::error::Error for StoreError {}
impl std::error::Error for RequestError {}
impl std::error::Error for ConfigError {}

impl From<CombatantError> for BattleEngineError {
    fn from(err: CombatantError) -> Self {
        BattleEngineError::Combatant(err)
    }
}

impl From<CatalogError> for BattleEngineError {
    fn from(err: CatalogError) -> Self {
        BattleEngineError::Catalog(err)
    }
}

impl From<StoreError> for BattleEngineError {
    fn from(err: StoreError) -> Self {
        BattleEngineError::Store(err)
    }
}

impl From<RequestError> for BattleEngineError {
    fn from(err: RequestError) -> Self {
        BattleEngineError::Request(err)
    }
}

impl From<ConfigError> for BattleEngineError {
    fn from(err: ConfigError) -> Self {
        BattleEngineError::Config(err)
    }
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;

/// Type alias for Results using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Type alias for Results using StoreError
pub type StoreResult<T> = Result<T, StoreError>;
