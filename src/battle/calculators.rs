use crate::battle::rng::{BattleRng, DAMAGE_ROLL_MAX, DAMAGE_ROLL_MIN};
use crate::battle::state::{BattleEvent, Side};
use crate::battle::stats::{base_damage, move_hits};
use crate::combatant::{Combatant, Move};
use crate::errors::CombatantError;
use schema::{Effectiveness, ElementType};

/// Result of one attack attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackOutcome {
    pub event: BattleEvent,
    /// Damage dealt, `None` for misses and non-damaging moves.
    pub damage: Option<u16>,
    pub defender_hp: u16,
}

impl AttackOutcome {
    pub fn description(&self) -> String {
        self.event.format()
    }

    pub fn is_miss(&self) -> bool {
        matches!(self.event, BattleEvent::MoveMissed { .. })
    }
}

/// Damage a landed, damaging move deals before it is applied.
///
/// Random factor, then type effectiveness, then the 1-damage floor.
pub fn calculate_damage(
    attacker: &Combatant,
    defender: &Combatant,
    move_: &Move,
    damage_roll: u8,
) -> (u16, Effectiveness) {
    let base = base_damage(
        attacker.level,
        move_.power,
        attacker.attack,
        defender.effective_defense(),
    );
    let roll = damage_roll.clamp(DAMAGE_ROLL_MIN, DAMAGE_ROLL_MAX) as u64;
    let rolled = base * roll / 100;

    let effectiveness = ElementType::against(&move_.element, &defender.types);
    let rolled = u32::try_from(rolled).unwrap_or(u32::MAX / 2);
    let damage = effectiveness.apply(rolled).max(1);

    (u16::try_from(damage).unwrap_or(u16::MAX), effectiveness)
}

/// Resolve one attack from `attacker` against `defender`.
///
/// Picks a move, rolls accuracy, and for a damaging hit rolls the damage
/// factor and deducts HP from `defender`. The attacker is never modified.
pub fn resolve_attack<R: BattleRng + ?Sized>(
    side: Side,
    attacker: &Combatant,
    defender: &mut Combatant,
    rng: &mut R,
) -> Result<AttackOutcome, CombatantError> {
    if attacker.moves.is_empty() {
        return Err(CombatantError::EmptyMoveList {
            combatant: attacker.name.clone(),
        });
    }

    let move_index = rng.move_index(attacker.moves.len()).min(attacker.moves.len() - 1);
    let move_ = &attacker.moves[move_index];

    // Accuracy applies to every move, damaging or not
    if !move_hits(move_, rng) {
        return Ok(AttackOutcome {
            event: BattleEvent::MoveMissed {
                side,
                attacker: attacker.name.clone(),
                move_name: move_.name.clone(),
            },
            damage: None,
            defender_hp: defender.current_hp(),
        });
    }

    if !move_.is_damaging() {
        return Ok(AttackOutcome {
            event: BattleEvent::MoveUsed {
                side,
                attacker: attacker.name.clone(),
                move_name: move_.name.clone(),
            },
            damage: None,
            defender_hp: defender.current_hp(),
        });
    }

    let (damage, effectiveness) = calculate_damage(attacker, defender, move_, rng.damage_roll());
    defender.take_damage(damage);

    tracing::debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        move_name = %move_.name,
        damage,
        %effectiveness,
        remaining_hp = defender.current_hp(),
        "attack landed"
    );

    Ok(AttackOutcome {
        event: BattleEvent::MoveHit {
            side,
            attacker: attacker.name.clone(),
            move_name: move_.name.clone(),
            defender: defender.name.clone(),
            effectiveness,
            damage,
            remaining_hp: defender.current_hp(),
            max_hp: defender.max_hp,
        },
        damage: Some(damage),
        defender_hp: defender.current_hp(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::rng::FixedRng;
    use crate::battle::tests::common::{CombatantBuilder, ScriptedRng};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn charmander() -> Combatant {
        CombatantBuilder::new(4, "Charmander", vec![ElementType::Fire])
            .with_level(5)
            .with_max_hp(39)
            .with_stats(52, 43, 65)
            .with_moves(vec![Move::new("Scratch", ElementType::Normal, 40, 100)])
            .build()
    }

    fn squirtle_with(move_: Move) -> Combatant {
        CombatantBuilder::new(7, "Squirtle", vec![ElementType::Water])
            .with_level(5)
            .with_max_hp(44)
            .with_stats(48, 65, 43)
            .with_moves(vec![move_])
            .build()
    }

    #[test]
    fn test_hit_deducts_health() {
        let attacker = squirtle_with(Move::new("Tackle", ElementType::Normal, 40, 100));
        let mut defender = charmander();
        let mut rng = FixedRng::new(0, 92);

        let outcome = resolve_attack(Side::Player, &attacker, &mut defender, &mut rng)
            .expect("attacker has moves");

        assert_eq!(outcome.damage, Some(4));
        assert_eq!(outcome.defender_hp, 35);
        assert_eq!(defender.current_hp(), 35);
        assert_eq!(
            outcome.description(),
            "Squirtle used Tackle! 4 damage! Charmander HP: 35/39"
        );
    }

    #[test]
    fn test_super_effective_beats_neutral() {
        let mut rng = FixedRng::new(0, 92);

        let water = squirtle_with(Move::new("Water Gun", ElementType::Water, 40, 100));
        let mut target = charmander();
        let super_effective = resolve_attack(Side::Player, &water, &mut target, &mut rng)
            .expect("attacker has moves");

        let normal = squirtle_with(Move::new("Tackle", ElementType::Normal, 40, 100));
        let mut target = charmander();
        let neutral = resolve_attack(Side::Player, &normal, &mut target, &mut rng)
            .expect("attacker has moves");

        assert_eq!(super_effective.damage, Some(8));
        assert_eq!(neutral.damage, Some(4));
        assert!(super_effective.description().contains("It's super effective!"));
    }

    #[test]
    fn test_not_very_effective_halves() {
        let ember = CombatantBuilder::new(4, "Charmander", vec![ElementType::Fire])
            .with_level(5)
            .with_stats(52, 43, 65)
            .with_moves(vec![Move::new("Ember", ElementType::Fire, 40, 100)])
            .build();
        let mut defender = squirtle_with(Move::new("Tackle", ElementType::Normal, 40, 100));
        let mut rng = FixedRng::new(0, 100);

        // (4 * 40 * 52) / 65 = 128; / 50 = 2; + 2 = 4; * 100 / 100 = 4; halved = 2
        let outcome = resolve_attack(Side::Opponent, &ember, &mut defender, &mut rng)
            .expect("attacker has moves");
        assert_eq!(outcome.damage, Some(2));
        assert!(outcome.description().contains("It's not very effective..."));
    }

    #[test]
    fn test_minimum_damage_is_one() {
        // Weak attacker into a wall, resisted: the result truncates to 0 and is raised to 1
        let weak = CombatantBuilder::new(99, "Weakling", vec![ElementType::Grass])
            .with_level(1)
            .with_stats(1, 1, 1)
            .with_moves(vec![Move::new("Vine Whip", ElementType::Grass, 1, 100)])
            .build();
        let mut wall = CombatantBuilder::new(98, "Wall", vec![ElementType::Fire])
            .with_stats(1, 999, 1)
            .build();
        let mut rng = FixedRng::new(0, 85);

        let outcome = resolve_attack(Side::Player, &weak, &mut wall, &mut rng)
            .expect("attacker has moves");
        assert_eq!(outcome.damage, Some(1));
    }

    #[test]
    fn test_miss_leaves_health_unchanged() {
        let attacker = squirtle_with(Move::new("Hydro Pump", ElementType::Water, 110, 80));
        let mut defender = charmander();
        let mut rng = FixedRng::new(0, 100).with_accuracy_roll(80);

        let outcome = resolve_attack(Side::Player, &attacker, &mut defender, &mut rng)
            .expect("attacker has moves");

        assert!(outcome.is_miss());
        assert_eq!(outcome.damage, None);
        assert_eq!(defender.current_hp(), defender.max_hp);
        assert_eq!(outcome.description(), "Squirtle's Hydro Pump missed!");
    }

    #[rstest]
    #[case(0, false)] // hits: generic "used" line
    #[case(80, true)] // misses: accuracy check applies to status moves too
    fn test_non_damaging_move(#[case] accuracy_roll: u8, #[case] expect_miss: bool) {
        let attacker = squirtle_with(Move::new("Tail Whip", ElementType::Normal, 0, 75));
        let mut defender = charmander();
        let mut rng = FixedRng::new(0, 100).with_accuracy_roll(accuracy_roll);

        let outcome = resolve_attack(Side::Player, &attacker, &mut defender, &mut rng)
            .expect("attacker has moves");

        assert_eq!(outcome.is_miss(), expect_miss);
        assert_eq!(outcome.damage, None);
        assert_eq!(defender.current_hp(), 39);
        if !expect_miss {
            assert_eq!(outcome.description(), "Squirtle used Tail Whip!");
        }
    }

    #[test]
    fn test_damage_roll_is_only_drawn_for_damaging_hits() {
        // A status move consumes a move index and an accuracy roll, nothing else.
        let attacker = squirtle_with(Move::new("Tail Whip", ElementType::Normal, 0, 100));
        let mut defender = charmander();
        let mut rng = ScriptedRng::new(vec![0], vec![10], vec![]);

        resolve_attack(Side::Player, &attacker, &mut defender, &mut rng)
            .expect("attacker has moves");
        assert!(rng.is_exhausted());
    }

    #[test]
    fn test_move_selection_uses_rng_index() {
        let attacker = CombatantBuilder::new(7, "Squirtle", vec![ElementType::Water])
            .with_moves(vec![
                Move::new("Tackle", ElementType::Normal, 40, 100),
                Move::new("Tail Whip", ElementType::Normal, 0, 100),
                Move::new("Water Gun", ElementType::Water, 40, 100),
            ])
            .build();
        let mut defender = charmander();
        let mut rng = ScriptedRng::new(vec![1], vec![0], vec![]);

        let outcome = resolve_attack(Side::Player, &attacker, &mut defender, &mut rng)
            .expect("attacker has moves");
        assert_eq!(outcome.description(), "Squirtle used Tail Whip!");
    }

    #[test]
    fn test_health_never_goes_negative() {
        let attacker = squirtle_with(Move::new("Water Gun", ElementType::Water, 40, 100));
        let mut defender = charmander();
        defender.set_hp(3);
        let mut rng = FixedRng::new(0, 100);

        let outcome = resolve_attack(Side::Player, &attacker, &mut defender, &mut rng)
            .expect("attacker has moves");
        assert_eq!(outcome.defender_hp, 0);
        assert!(defender.is_fainted());
        assert!(outcome.description().ends_with("Charmander HP: 0/39"));
    }

    #[test]
    fn test_empty_move_list_is_an_error() {
        let attacker = CombatantBuilder::new(7, "Squirtle", vec![ElementType::Water])
            .with_moves(vec![])
            .build();
        let mut defender = charmander();
        let mut rng = FixedRng::new(0, 100);

        let result = resolve_attack(Side::Player, &attacker, &mut defender, &mut rng);
        assert!(matches!(result, Err(CombatantError::EmptyMoveList { .. })));
        assert_eq!(defender.current_hp(), 39);
    }
}
