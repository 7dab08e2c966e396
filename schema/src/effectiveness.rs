use serde::{Deserialize, Serialize};
use std::fmt;

/// Damage scaling derived from comparing a move's type to the defender's types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effectiveness {
    SuperEffective,
    Neutral,
    NotVeryEffective,
}

impl Effectiveness {
    pub fn multiplier(&self) -> f64 {
        match self {
            Effectiveness::SuperEffective => 2.0,
            Effectiveness::Neutral => 1.0,
            Effectiveness::NotVeryEffective => 0.5,
        }
    }

    /// Scale a damage value, truncating toward zero.
    pub fn apply(&self, damage: u32) -> u32 {
        match self {
            Effectiveness::SuperEffective => damage * 2,
            Effectiveness::Neutral => damage,
            Effectiveness::NotVeryEffective => damage / 2,
        }
    }

    /// Battle-log phrase for this effectiveness, `None` when neutral.
    pub fn phrase(&self) -> Option<&'static str> {
        match self {
            Effectiveness::SuperEffective => Some("It's super effective!"),
            Effectiveness::Neutral => None,
            Effectiveness::NotVeryEffective => Some("It's not very effective..."),
        }
    }
}

impl fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            Effectiveness::SuperEffective => "super effective",
            Effectiveness::Neutral => "neutral",
            Effectiveness::NotVeryEffective => "not very effective",
        };
        write!(f, "{}", display_name)
    }
}
