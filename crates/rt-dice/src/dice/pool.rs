//! Rolling several identical dice at once.

use rand::Rng;

use super::{Die, RollResult};
use crate::error::{DiceError, DiceResult};
use crate::expression::MAX_DICE;

/// A number of identical dice rolled together, such as the `3d8` of `3d8+2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DicePool {
    /// How many dice.
    pub count: u32,
    /// Which die.
    pub die: Die,
}

impl DicePool {
    /// A pool of `count` dice, up to [`MAX_DICE`].
    pub fn new(count: u32, die: Die) -> DiceResult<Self> {
        if count > MAX_DICE {
            return Err(DiceError::TooManyDice(count));
        }
        Ok(Self { count, die })
    }

    /// Roll every die once.
    pub fn roll<G: Rng + ?Sized>(&self, rng: &mut G) -> RollResult {
        let sides = self.die.sides();
        RollResult {
            die: self.die,
            values: (0..self.count).map(|_| rng.random_range(1..=sides)).collect(),
        }
    }
}
