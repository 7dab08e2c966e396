use crate::battle::rng::BattleRng;
use crate::battle::state::Side;
use crate::combatant::{Combatant, Move};

/// Decide which side acts first for the whole battle.
///
/// Higher speed goes first; equal speed favours the player.
pub fn determine_turn_order(player: &Combatant, opponent: &Combatant) -> [Side; 2] {
    if player.speed >= opponent.speed {
        [Side::Player, Side::Opponent]
    } else {
        [Side::Opponent, Side::Player]
    }
}

/// Roll accuracy for a move. Returns true if the move hits.
///
/// The attack misses when the roll is greater than or equal to the move's
/// accuracy, so accuracy 100 always hits and accuracy 0 never does.
pub fn move_hits<R: BattleRng + ?Sized>(move_: &Move, rng: &mut R) -> bool {
    let roll = rng.accuracy_roll();
    roll < move_.accuracy
}

/// Base damage before the random factor and type effectiveness.
///
/// `((2 * level / 5 + 2) * power * attack / defense) / 50 + 2`, truncating at
/// every division and evaluated left to right. Defense below 1 is treated as 1.
pub fn base_damage(level: u8, power: u16, attack: u16, defense: u16) -> u64 {
    let level = level as u64;
    let power = power as u64;
    let attack = attack as u64;
    let defense = (defense as u64).max(1);

    ((2 * level / 5 + 2) * power * attack / defense) / 50 + 2
}
