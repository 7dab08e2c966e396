use crate::combatant::Combatant;
use schema::Effectiveness;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two sides of a battle. The player is always the first-named side.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }

    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    NotStarted,
    InProgress,
    Concluded,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    BattleStarted {
        player: String,
        player_level: u8,
        opponent: String,
        opponent_level: u8,
    },
    RoundStarted {
        round: u32,
    },

    // Attacks
    MoveMissed {
        side: Side,
        attacker: String,
        move_name: String,
    },
    /// A non-damaging move that landed.
    MoveUsed {
        side: Side,
        attacker: String,
        move_name: String,
    },
    MoveHit {
        side: Side,
        attacker: String,
        move_name: String,
        defender: String,
        effectiveness: Effectiveness,
        damage: u16,
        remaining_hp: u16,
        max_hp: u16,
    },

    CombatantFainted {
        side: Side,
        name: String,
    },

    // Battle end
    BattleWon {
        side: Side,
        name: String,
    },
    BattleDrawn,
}

impl BattleEvent {
    /// Human-readable battle log line for this event.
    pub fn format(&self) -> String {
        match self {
            BattleEvent::BattleStarted {
                player,
                player_level,
                opponent,
                opponent_level,
            } => format!(
                "Battle started: {} (Lv.{}) vs {} (Lv.{})",
                player, player_level, opponent, opponent_level
            ),
            BattleEvent::RoundStarted { round } => format!("Round {}:", round),
            BattleEvent::MoveMissed {
                attacker,
                move_name,
                ..
            } => format!("{}'s {} missed!", attacker, move_name),
            BattleEvent::MoveUsed {
                attacker,
                move_name,
                ..
            } => format!("{} used {}!", attacker, move_name),
            BattleEvent::MoveHit {
                attacker,
                move_name,
                defender,
                effectiveness,
                damage,
                remaining_hp,
                max_hp,
                ..
            } => {
                // Neutral hits get a single space before the damage, not two
                let phrase = match effectiveness.phrase() {
                    Some(phrase) => format!("{} ", phrase),
                    None => String::new(),
                };
                format!(
                    "{} used {}! {}{} damage! {} HP: {}/{}",
                    attacker, move_name, phrase, damage, defender, remaining_hp, max_hp
                )
            }
            BattleEvent::CombatantFainted { name, .. } => format!("{} fainted!", name),
            BattleEvent::BattleWon { name, .. } => format!("{} wins the battle!", name),
            BattleEvent::BattleDrawn => "The battle ended in a draw!".to_string(),
        }
    }

    /// The side that performed this event, for attack events only.
    pub fn attacking_side(&self) -> Option<Side> {
        match self {
            BattleEvent::MoveMissed { side, .. }
            | BattleEvent::MoveUsed { side, .. }
            | BattleEvent::MoveHit { side, .. } => Some(*side),
            _ => None,
        }
    }
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

/// Append-only, chronologically ordered collection of battle events.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        tracing::debug!(event = %event, "battle event");
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<BattleEvent> {
        self.events
    }

    /// Rendered log lines, in order.
    pub fn render(&self) -> Vec<String> {
        self.events.iter().map(BattleEvent::format).collect()
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl fmt::Display for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in &self.events {
            writeln!(f, "{}", event)?;
        }
        Ok(())
    }
}

/// Working state of a single battle invocation.
///
/// Owns private copies of both combatants; nothing here is shared between battles.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BattleState {
    pub combatants: [Combatant; 2],
    pub turn_order: [Side; 2],
    pub round: u32,
    pub max_rounds: u32,
    pub phase: BattlePhase,
    pub bus: EventBus,
    /// Descriptions of the attacks each side performed, indexed by `Side::index`.
    pub attack_log: [Vec<String>; 2],
}

impl BattleState {
    pub fn new(player: Combatant, opponent: Combatant, max_rounds: u32) -> Self {
        Self {
            combatants: [player, opponent],
            turn_order: [Side::Player, Side::Opponent],
            round: 0,
            max_rounds,
            phase: BattlePhase::NotStarted,
            bus: EventBus::new(),
            attack_log: [Vec::new(), Vec::new()],
        }
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    /// Attacker borrowed immutably and defender mutably, for one attack.
    pub fn attacker_and_defender(&mut self, attacker: Side) -> (&Combatant, &mut Combatant) {
        let [player, opponent] = &mut self.combatants;
        match attacker {
            Side::Player => (&*player, opponent),
            Side::Opponent => (&*opponent, player),
        }
    }

    pub fn any_fainted(&self) -> bool {
        self.combatants.iter().any(Combatant::is_fainted)
    }

    /// True while another round may start.
    pub fn can_continue(&self) -> bool {
        self.round < self.max_rounds && !self.any_fainted()
    }

    pub fn record_attack(&mut self, side: Side, event: BattleEvent) {
        self.attack_log[side.index()].push(event.format());
        self.bus.push(event);
    }
}
