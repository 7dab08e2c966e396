use crate::battle::rng::BattleRng;
use crate::catalog;
use crate::combatant::{Combatant, Move};
use crate::errors::BattleResult;
use schema::ElementType;
use std::collections::VecDeque;

/// A builder for creating test combatants with common defaults.
///
/// Defaults to a level 5 combatant with 40 HP, 50 in every stat and a single
/// 40-power Tackle.
///
/// # Example
/// ```ignore
/// let pikachu = CombatantBuilder::new(25, "Pikachu", vec![ElementType::Electric])
///     .with_moves(vec![Move::new("Thunder Shock", ElementType::Electric, 40, 100)])
///     .with_hp(12)
///     .build();
/// ```
pub struct CombatantBuilder {
    id: u32,
    name: String,
    types: Vec<ElementType>,
    level: u8,
    max_hp: u16,
    stats: [u16; 3],
    moves: Option<Vec<Move>>,
    current_hp: Option<u16>,
}

impl CombatantBuilder {
    pub fn new(id: u32, name: &str, types: Vec<ElementType>) -> Self {
        Self {
            id,
            name: name.to_string(),
            types,
            level: 5,
            max_hp: 40,
            stats: [50, 50, 50],
            moves: None,
            current_hp: None,
        }
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_max_hp(mut self, max_hp: u16) -> Self {
        self.max_hp = max_hp;
        self
    }

    /// Sets attack, defense and speed.
    pub fn with_stats(mut self, attack: u16, defense: u16, speed: u16) -> Self {
        self.stats = [attack, defense, speed];
        self
    }

    pub fn with_moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = Some(moves);
        self
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn build(self) -> Combatant {
        let moves = self
            .moves
            .unwrap_or_else(|| vec![Move::new("Tackle", ElementType::Normal, 40, 100)]);
        let mut combatant = Combatant::new(
            self.id,
            &self.name,
            self.types,
            self.level,
            self.max_hp,
            self.stats,
            moves,
        );
        if let Some(hp) = self.current_hp {
            combatant.set_hp(hp);
        }
        combatant
    }
}

/// A random source that replays scripted values in order.
///
/// Panics when a list runs dry, naming the draw that was not scripted, so a
/// test fails loudly if the engine draws more than expected.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    move_indices: VecDeque<usize>,
    accuracy_rolls: VecDeque<u8>,
    damage_rolls: VecDeque<u8>,
}

impl ScriptedRng {
    pub fn new(move_indices: Vec<usize>, accuracy_rolls: Vec<u8>, damage_rolls: Vec<u8>) -> Self {
        Self {
            move_indices: move_indices.into(),
            accuracy_rolls: accuracy_rolls.into(),
            damage_rolls: damage_rolls.into(),
        }
    }

    /// True once every scripted value has been drawn.
    pub fn is_exhausted(&self) -> bool {
        self.move_indices.is_empty() && self.accuracy_rolls.is_empty() && self.damage_rolls.is_empty()
    }
}

impl BattleRng for ScriptedRng {
    fn move_index(&mut self, move_count: usize) -> usize {
        match self.move_indices.pop_front() {
            Some(index) => {
                assert!(
                    index < move_count,
                    "scripted move index {} out of range for {} moves",
                    index,
                    move_count
                );
                index
            }
            None => panic!("ScriptedRng exhausted: no move index scripted"),
        }
    }

    fn accuracy_roll(&mut self) -> u8 {
        self.accuracy_rolls
            .pop_front()
            .unwrap_or_else(|| panic!("ScriptedRng exhausted: no accuracy roll scripted"))
    }

    fn damage_roll(&mut self) -> u8 {
        self.damage_rolls
            .pop_front()
            .unwrap_or_else(|| panic!("ScriptedRng exhausted: no damage roll scripted"))
    }
}

/// A fresh full-health copy of a catalog entry.
pub fn catalog_combatant(id: u32) -> Combatant {
    match catalog::instantiate(id) {
        Ok(combatant) => combatant,
        Err(err) => panic!("Failed to load catalog entry {}: {}", id, err),
    }
}

/// Helper function to assert that a Result is Ok and return the value.
pub fn assert_ok<T>(result: BattleResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
