use crate::battle::state::{BattleEvent, BattlePhase, BattleState, Side};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player,
    Opponent,
    Draw,
}

impl From<Side> for Winner {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => Winner::Player,
            Side::Opponent => Winner::Opponent,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Player => write!(f, "player"),
            Winner::Opponent => write!(f, "opponent"),
            Winner::Draw => write!(f, "draw"),
        }
    }
}

/// Final classification and full record of a completed battle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BattleOutcome {
    pub winner: Winner,
    /// Rounds actually executed, including one cut short by a faint.
    pub rounds: u32,
    pub player_hp: u16,
    pub opponent_hp: u16,
    pub events: Vec<BattleEvent>,
    /// Descriptions of every attack the player's combatant performed, hits and misses.
    pub player_moves: Vec<String>,
    pub opponent_moves: Vec<String>,
}

impl BattleOutcome {
    /// Rendered battle log, one line per event.
    pub fn battle_log(&self) -> Vec<String> {
        self.events.iter().map(BattleEvent::format).collect()
    }

    pub fn is_draw(&self) -> bool {
        self.winner == Winner::Draw
    }
}

/// Classify the winner from final health values.
///
/// The player is checked first, so a player at zero health always loses.
pub fn determine_winner(player_hp: u16, opponent_hp: u16) -> Winner {
    if player_hp == 0 {
        Winner::Opponent
    } else if opponent_hp == 0 {
        Winner::Player
    } else {
        Winner::Draw
    }
}

/// Close out a concluded battle: announce the result and build the outcome.
pub fn aggregate_outcome(mut state: BattleState) -> BattleOutcome {
    debug_assert_eq!(state.phase, BattlePhase::Concluded);

    let player_hp = state.combatant(Side::Player).current_hp();
    let opponent_hp = state.combatant(Side::Opponent).current_hp();
    let winner = determine_winner(player_hp, opponent_hp);

    let conclusion = match winner {
        Winner::Player => BattleEvent::BattleWon {
            side: Side::Player,
            name: state.combatant(Side::Player).name.clone(),
        },
        Winner::Opponent => BattleEvent::BattleWon {
            side: Side::Opponent,
            name: state.combatant(Side::Opponent).name.clone(),
        },
        Winner::Draw => BattleEvent::BattleDrawn,
    };
    state.bus.push(conclusion);

    tracing::info!(
        %winner,
        rounds = state.round,
        player_hp,
        opponent_hp,
        "battle concluded"
    );

    let [player_moves, opponent_moves] = state.attack_log;
    BattleOutcome {
        winner,
        rounds: state.round,
        player_hp,
        opponent_hp,
        events: state.bus.into_events(),
        player_moves,
        opponent_moves,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::tests::common::CombatantBuilder;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::ElementType;

    #[rstest]
    #[case(0, 10, Winner::Opponent)]
    #[case(10, 0, Winner::Player)]
    #[case(10, 10, Winner::Draw)]
    #[case(0, 0, Winner::Opponent)] // player checked first
    fn test_determine_winner(#[case] player_hp: u16, #[case] opponent_hp: u16, #[case] expected: Winner) {
        assert_eq!(determine_winner(player_hp, opponent_hp), expected);
    }

    #[test]
    fn test_aggregate_announces_winner() {
        let player = CombatantBuilder::new(1, "Bulbasaur", vec![ElementType::Grass]).build();
        let opponent = CombatantBuilder::new(4, "Charmander", vec![ElementType::Fire])
            .with_hp(0)
            .build();
        let mut state = BattleState::new(player, opponent, 5);
        state.round = 2;
        state.phase = BattlePhase::Concluded;
        state.attack_log[0].push("Bulbasaur used Tackle!".to_string());

        let outcome = aggregate_outcome(state);

        assert_eq!(outcome.winner, Winner::Player);
        assert_eq!(outcome.rounds, 2);
        assert_eq!(outcome.opponent_hp, 0);
        assert_eq!(outcome.player_moves, vec!["Bulbasaur used Tackle!".to_string()]);
        assert!(outcome.opponent_moves.is_empty());
        assert_eq!(outcome.battle_log(), vec!["Bulbasaur wins the battle!".to_string()]);
    }

    #[test]
    fn test_aggregate_announces_draw() {
        let player = CombatantBuilder::new(1, "Bulbasaur", vec![ElementType::Grass]).build();
        let opponent = CombatantBuilder::new(4, "Charmander", vec![ElementType::Fire]).build();
        let mut state = BattleState::new(player, opponent, 5);
        state.round = 5;
        state.phase = BattlePhase::Concluded;

        let outcome = aggregate_outcome(state);

        assert!(outcome.is_draw());
        assert_eq!(outcome.events, vec![BattleEvent::BattleDrawn]);
    }

    #[test]
    fn test_winner_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Winner::Draw).unwrap(), "\"draw\"");
        assert_eq!(Winner::from(Side::Opponent), Winner::Opponent);
    }
}
