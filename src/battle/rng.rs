use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lowest damage roll, as a percentage of base damage.
pub const DAMAGE_ROLL_MIN: u8 = 85;
/// Highest damage roll, as a percentage of base damage.
pub const DAMAGE_ROLL_MAX: u8 = 100;

/// Source of every random draw a battle makes.
///
/// Each `simulate` call receives its own source, so concurrent battles never
/// share a stream and replays only need the same source.
pub trait BattleRng {
    /// Index of the move to use, in `0..move_count`.
    fn move_index(&mut self, move_count: usize) -> usize;

    /// Accuracy roll in `0..100`. The attack misses when the roll is at least
    /// the move's accuracy.
    fn accuracy_roll(&mut self) -> u8;

    /// Damage roll in `DAMAGE_ROLL_MIN..=DAMAGE_ROLL_MAX`.
    fn damage_roll(&mut self) -> u8;
}

impl<R: BattleRng + ?Sized> BattleRng for &mut R {
    fn move_index(&mut self, move_count: usize) -> usize {
        (**self).move_index(move_count)
    }

    fn accuracy_roll(&mut self) -> u8 {
        (**self).accuracy_roll()
    }

    fn damage_roll(&mut self) -> u8 {
        (**self).damage_roll()
    }
}

/// Production source backed by a seedable `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededRng {
    inner: StdRng,
}

impl SeededRng {
    /// Reproducible stream: the same seed always yields the same battle.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Independent stream seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }
}

impl BattleRng for SeededRng {
    fn move_index(&mut self, move_count: usize) -> usize {
        // One draw per attack, even with a single move
        let index = self.inner.random_range(0..move_count.max(1));
        tracing::trace!(index, move_count, "rng: move selection");
        index
    }

    fn accuracy_roll(&mut self) -> u8 {
        let roll = self.inner.random_range(0..100u8);
        tracing::trace!(roll, "rng: accuracy");
        roll
    }

    fn damage_roll(&mut self) -> u8 {
        let roll = self.inner.random_range(DAMAGE_ROLL_MIN..=DAMAGE_ROLL_MAX);
        tracing::trace!(roll, "rng: damage factor");
        roll
    }
}

/// Source that returns the same draws every time.
///
/// Useful for replaying a battle by hand: with an accuracy roll of 0 every
/// move with non-zero accuracy hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRng {
    pub move_index: usize,
    pub accuracy_roll: u8,
    pub damage_roll: u8,
}

impl FixedRng {
    /// Always picks `move_index`, always hits, always rolls `damage_roll`.
    pub fn new(move_index: usize, damage_roll: u8) -> Self {
        Self {
            move_index,
            accuracy_roll: 0,
            damage_roll,
        }
    }

    pub fn with_accuracy_roll(mut self, accuracy_roll: u8) -> Self {
        self.accuracy_roll = accuracy_roll;
        self
    }
}

impl BattleRng for FixedRng {
    fn move_index(&mut self, move_count: usize) -> usize {
        self.move_index.min(move_count.saturating_sub(1))
    }

    fn accuracy_roll(&mut self) -> u8 {
        self.accuracy_roll
    }

    fn damage_roll(&mut self) -> u8 {
        self.damage_roll
    }
}
