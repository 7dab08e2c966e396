use crate::effectiveness::Effectiveness;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::EnumString;

/// Elemental type carried by combatants and moves.
///
/// Serialized as a lowercase string (`"fire"`, `"water"`). Names outside the
/// known set are kept verbatim in `Other` and always match up neutrally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ElementType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    #[strum(default)]
    Other(String),
}

impl ElementType {
    /// Every named type, in declaration order.
    pub const KNOWN: [ElementType; 15] = [
        ElementType::Normal,
        ElementType::Fighting,
        ElementType::Flying,
        ElementType::Poison,
        ElementType::Ground,
        ElementType::Rock,
        ElementType::Bug,
        ElementType::Ghost,
        ElementType::Fire,
        ElementType::Water,
        ElementType::Grass,
        ElementType::Electric,
        ElementType::Psychic,
        ElementType::Ice,
        ElementType::Dragon,
    ];

    pub fn name(&self) -> &str {
        match self {
            ElementType::Normal => "normal",
            ElementType::Fighting => "fighting",
            ElementType::Flying => "flying",
            ElementType::Poison => "poison",
            ElementType::Ground => "ground",
            ElementType::Rock => "rock",
            ElementType::Bug => "bug",
            ElementType::Ghost => "ghost",
            ElementType::Fire => "fire",
            ElementType::Water => "water",
            ElementType::Grass => "grass",
            ElementType::Electric => "electric",
            ElementType::Psychic => "psychic",
            ElementType::Ice => "ice",
            ElementType::Dragon => "dragon",
            ElementType::Other(name) => name,
        }
    }

    /// Parse a type name, falling back to `Other` for unknown names.
    pub fn from_name(name: &str) -> ElementType {
        ElementType::from_str(name).unwrap_or_else(|_| ElementType::Other(name.to_string()))
    }

    /// Effectiveness of a single attacking type against a single defending type.
    ///
    /// Only the water/fire/grass cycle is modelled; every other pairing is neutral.
    pub fn matchup(attacking: &ElementType, defending: &ElementType) -> Effectiveness {
        use ElementType::*;

        match (attacking, defending) {
            (Water, Fire) | (Fire, Grass) | (Grass, Water) => Effectiveness::SuperEffective,
            (Water, Grass) | (Fire, Water) | (Grass, Fire) => Effectiveness::NotVeryEffective,
            _ => Effectiveness::Neutral,
        }
    }

    /// Effectiveness of an attacking type against a defender's type list.
    ///
    /// Types are scanned in order and the first non-neutral matchup wins.
    /// Multipliers from several defending types are never combined.
    pub fn against(attacking: &ElementType, defending: &[ElementType]) -> Effectiveness {
        defending
            .iter()
            .map(|defending_type| Self::matchup(attacking, defending_type))
            .find(|effectiveness| *effectiveness != Effectiveness::Neutral)
            .unwrap_or(Effectiveness::Neutral)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Plain strings on the wire so RON, JSON and postcard all carry the same form.
impl Serialize for ElementType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ElementType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(ElementType::from_name(&name))
    }
}
