//! Randomness sources for battles and mission assignment.
//!
//! Everything random in a session goes through [`Dice`], so a game can be
//! replayed from its seed or driven by a fixed script in tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of faces on a battle die.
pub const D6: u8 = 6;

/// A source of fair die rolls.
pub trait Dice {
    /// Roll a die with `sides` faces, returning a value in `1..=sides`.
    fn roll(&mut self, sides: u8) -> u8;

    /// Roll a six-sided battle die.
    fn roll_d6(&mut self) -> u8 {
        self.roll(D6)
    }
}

/// Seeded dice backed by ChaCha8.
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create dice from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create dice seeded from the wall clock.
    #[must_use]
    pub fn from_time() -> Self {
        Self::new(time_seed())
    }

    /// The seed these dice were created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl Dice for GameRng {
    fn roll(&mut self, sides: u8) -> u8 {
        self.inner.gen_range(1..=sides.max(1))
    }
}

/// Seed derived from the current time, falling back to a constant.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}

/// Dice that replay a fixed sequence of faces, cycling when exhausted.
///
/// Faces larger than the die are clamped to `sides`, zero is read as 1.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    next: usize,
}

impl ScriptedDice {
    /// Create dice that return `faces` in order.
    #[must_use]
    pub fn new(faces: impl Into<Vec<u8>>) -> Self {
        Self {
            faces: faces.into(),
            next: 0,
        }
    }

    /// Number of rolls made so far.
    #[must_use]
    pub const fn rolls_made(&self) -> usize {
        self.next
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, sides: u8) -> u8 {
        let face = if self.faces.is_empty() {
            1
        } else {
            self.faces[self.next % self.faces.len()]
        };
        self.next += 1;
        face.clamp(1, sides.max(1))
    }
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn roll(&mut self, sides: u8) -> u8 {
        (**self).roll(sides)
    }
}
