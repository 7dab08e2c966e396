use crate::battle::calculators::resolve_attack;
use crate::battle::outcome::{aggregate_outcome, BattleOutcome};
use crate::battle::rng::BattleRng;
use crate::battle::state::{BattleEvent, BattlePhase, BattleState, Side};
use crate::battle::stats::determine_turn_order;
use crate::combatant::Combatant;
use crate::config::BattleConfig;
use crate::errors::BattleResult;

/// Main entry point for battle resolution.
///
/// Validates both combatants, runs rounds until one faints or the round cap is
/// reached, and returns the complete outcome. Input errors are reported before
/// any round runs; a battle never returns partial state.
pub fn simulate<R: BattleRng + ?Sized>(
    player: Combatant,
    opponent: Combatant,
    config: &BattleConfig,
    rng: &mut R,
) -> BattleResult<BattleOutcome> {
    let player = player.prepared_for_battle()?;
    let opponent = opponent.prepared_for_battle()?;

    let mut state = BattleState::new(player, opponent, config.effective_max_rounds());
    run_battle(&mut state, rng)?;

    Ok(aggregate_outcome(state))
}

/// Drive a prepared battle from `NotStarted` to `Concluded`.
pub fn run_battle<R: BattleRng + ?Sized>(state: &mut BattleState, rng: &mut R) -> BattleResult<()> {
    start_battle(state);

    while state.can_continue() {
        execute_round(state, rng)?;
    }

    state.phase = BattlePhase::Concluded;
    Ok(())
}

fn start_battle(state: &mut BattleState) {
    let player = state.combatant(Side::Player);
    let opponent = state.combatant(Side::Opponent);

    // Stats never change mid-battle, so the order is decided once.
    let turn_order = determine_turn_order(player, opponent);
    let start_event = BattleEvent::BattleStarted {
        player: player.name.clone(),
        player_level: player.level,
        opponent: opponent.name.clone(),
        opponent_level: opponent.level,
    };

    tracing::debug!(
        first = %turn_order[0],
        max_rounds = state.max_rounds,
        "battle starting"
    );

    state.turn_order = turn_order;
    state.phase = BattlePhase::InProgress;
    state.bus.push(start_event);
}

/// Run one round. Ends early, skipping the second attack, if the first attack faints its target.
fn execute_round<R: BattleRng + ?Sized>(state: &mut BattleState, rng: &mut R) -> BattleResult<()> {
    state.round += 1;
    state.bus.push(BattleEvent::RoundStarted { round: state.round });

    for attacker in state.turn_order {
        if execute_attack(state, attacker, rng)? {
            break;
        }
    }
    Ok(())
}

/// Returns true if the defender fainted.
fn execute_attack<R: BattleRng + ?Sized>(
    state: &mut BattleState,
    attacker: Side,
    rng: &mut R,
) -> BattleResult<bool> {
    let defender_side = attacker.other();
    let (attacking, defending) = state.attacker_and_defender(attacker);
    let outcome = resolve_attack(attacker, attacking, defending, rng)?;

    state.record_attack(attacker, outcome.event);

    let defender = state.combatant(defender_side);
    if defender.is_fainted() {
        let faint_event = BattleEvent::CombatantFainted {
            side: defender_side,
            name: defender.name.clone(),
        };
        state.bus.push(faint_event);
        return Ok(true);
    }
    Ok(false)
}
