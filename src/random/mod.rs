//! Seeded random values.
//!
//! [`Randomizer`] wraps any `rand::Rng`. Use [`Randomizer::seeded`] for
//! reproducible output (same seed, same sequence) and
//! [`Randomizer::from_entropy`] for interactive use.
//!
//! All ranges are half-open: `min` inclusive, `max` exclusive.

use crate::model::error::RandomError;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub mod tables;

/// Lowest identifier number (inclusive).
pub const ID_NUMBER_MIN: i32 = 40_000_000;

/// Highest identifier number (exclusive).
pub const ID_NUMBER_MAX: i32 = 49_999_999;

/// Random value generator over an injected RNG.
#[derive(Debug, Clone)]
pub struct Randomizer<R: Rng> {
    rng: R,
}

impl Randomizer<ChaCha8Rng> {
    /// Deterministic generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> Randomizer<R> {
    /// Wrap an existing RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Integer in `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::EmptyRange` if `min >= max`.
    pub fn next_int(&mut self, min: i32, max: i32) -> Result<i32, RandomError> {
        check_range(min.into(), max.into())?;
        Ok(self.rng.gen_range(min..max))
    }

    /// Any 32-bit integer.
    pub fn any_int(&mut self) -> i32 {
        self.rng.gen()
    }

    /// 64-bit integer in `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::EmptyRange` if `min >= max`.
    pub fn next_long(&mut self, min: i64, max: i64) -> Result<i64, RandomError> {
        check_range(min, max)?;
        Ok(self.rng.gen_range(min..max))
    }

    /// Two-decimal value: an integer in `[min, max)` divided by 100.
    ///
    /// `next_double(100, 1000)` yields values from `1.00` to `9.99`.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::EmptyRange` if `min >= max`.
    pub fn next_double(&mut self, min: i32, max: i32) -> Result<f64, RandomError> {
        let hundredths = self.next_int(min, max)?;
        Ok(f64::from(hundredths) / 100.0)
    }

    /// Fair coin.
    pub fn next_boolean(&mut self) -> bool {
        self.rng.gen()
    }

    /// Uniform pick from `items`, `None` if empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// Eight-digit number followed by an uppercase letter, e.g. `41234567K`.
    pub fn identifier(&mut self) -> String {
        let number = self.rng.gen_range(ID_NUMBER_MIN..ID_NUMBER_MAX);
        let letter = char::from(b'A' + self.rng.gen_range(0..26u8));
        format!("{number}{letter}")
    }

    /// Given name and family name separated by a space.
    pub fn full_name(&mut self) -> String {
        let first = self.pick(tables::FIRST_NAMES);
        let last = self.pick(tables::LAST_NAMES);
        format!("{first} {last}")
    }

    /// Adjective, noun and complement, e.g. `Eterno Reino del Alba`.
    pub fn title(&mut self) -> String {
        let adjective = self.pick(tables::TITLE_ADJECTIVES);
        let noun = self.pick(tables::TITLE_NOUNS);
        let complement = self.pick(tables::TITLE_COMPLEMENTS);
        format!("{adjective} {noun} {complement}")
    }

    // Tables are non-empty constants
    fn pick(&mut self, table: &'static [&'static str]) -> &'static str {
        self.choose(table).copied().unwrap_or_default()
    }
}

fn check_range(min: i64, max: i64) -> Result<(), RandomError> {
    if min >= max {
        return Err(RandomError::EmptyRange { min, max });
    }
    Ok(())
}
