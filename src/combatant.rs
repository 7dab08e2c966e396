use crate::errors::CombatantError;
use schema::ElementType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An action a combatant can perform in battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub name: String,
    #[serde(rename = "type")]
    pub element: ElementType,
    /// Zero marks a non-damaging move.
    pub power: u16,
    /// Percent chance to hit, 0-100.
    pub accuracy: u8,
}

impl Move {
    pub fn new(name: &str, element: ElementType, power: u16, accuracy: u8) -> Self {
        Self {
            name: name.to_string(),
            element,
            power,
            accuracy,
        }
    }

    pub fn is_damaging(&self) -> bool {
        self.power > 0
    }
}

/// A creature's battle-relevant stats and moves.
///
/// Catalog entries and request payloads are both `Combatant`s. A battle always
/// works on its own copy, so the original definition is never touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combatant {
    pub id: u32,
    pub name: String,
    pub types: Vec<ElementType>,
    pub level: u8,
    hp: u16,
    pub max_hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
    pub moves: Vec<Move>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Combatant {
    /// Creates a combatant at full health.
    pub fn new(
        id: u32,
        name: &str,
        types: Vec<ElementType>,
        level: u8,
        max_hp: u16,
        stats: [u16; 3], // ATK, DEF, SPD
        moves: Vec<Move>,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            types,
            level,
            hp: max_hp,
            max_hp,
            attack: stats[0],
            defense: stats[1],
            speed: stats[2],
            moves,
            image_url: None,
        }
    }

    pub fn current_hp(&self) -> u16 {
        self.hp
    }

    /// Sets current HP, clamped to `max_hp`.
    pub fn set_hp(&mut self, hp: u16) {
        self.hp = hp.min(self.max_hp);
    }

    pub fn set_hp_to_max(&mut self) {
        self.hp = self.max_hp;
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    /// Deducts damage, stopping at zero. Returns true if this fainted the combatant.
    pub fn take_damage(&mut self, damage: u16) -> bool {
        let was_standing = !self.is_fainted();
        self.hp = self.hp.saturating_sub(damage);
        was_standing && self.is_fainted()
    }

    /// Defense as used by the damage formula, never below 1.
    pub fn effective_defense(&self) -> u16 {
        self.defense.max(1)
    }

    /// Checks that this combatant can take part in a battle.
    pub fn validate(&self) -> Result<(), CombatantError> {
        if self.moves.is_empty() {
            return Err(CombatantError::EmptyMoveList {
                combatant: self.name.clone(),
            });
        }
        if self.types.is_empty() {
            return Err(CombatantError::EmptyTypeList {
                combatant: self.name.clone(),
            });
        }
        if self.level == 0 {
            return Err(CombatantError::InvalidLevel {
                combatant: self.name.clone(),
            });
        }
        if let Some(bad_move) = self.moves.iter().find(|move_| move_.accuracy > 100) {
            return Err(CombatantError::AccuracyOutOfRange {
                combatant: self.name.clone(),
                move_name: bad_move.name.clone(),
                accuracy: bad_move.accuracy,
            });
        }
        Ok(())
    }

    /// Validates this combatant and normalizes degenerate stats for battle.
    ///
    /// A zero defense is raised to 1 and HP above the maximum is clamped.
    /// Both are logged rather than rejected.
    pub fn prepared_for_battle(mut self) -> Result<Combatant, CombatantError> {
        self.validate()?;

        if self.defense == 0 {
            tracing::warn!(combatant = %self.name, "defense of 0 normalized to 1");
            self.defense = 1;
        }
        if self.hp > self.max_hp {
            tracing::warn!(
                combatant = %self.name,
                hp = self.hp,
                max_hp = self.max_hp,
                "current HP above maximum, clamping"
            );
            self.hp = self.max_hp;
        }

        Ok(self)
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let types: Vec<String> = self.types.iter().map(|t| t.to_string()).collect();
        write!(
            f,
            "#{:03} {} (Lv.{}) [{}] HP: {}/{}",
            self.id,
            self.name,
            self.level,
            types.join("/"),
            self.hp,
            self.max_hp
        )?;

        // Alternate form lists stats and moves as well
        if f.alternate() {
            writeln!(f)?;
            writeln!(
                f,
                "  ATK: {}  DEF: {}  SPD: {}",
                self.attack, self.defense, self.speed
            )?;
            for move_ in &self.moves {
                writeln!(
                    f,
                    "  - {} ({}, power {}, accuracy {})",
                    move_.name, move_.element, move_.power, move_.accuracy
                )?;
            }
        }
        Ok(())
    }
}
