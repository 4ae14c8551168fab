//! The dice-rolling service consumed by the table engine.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::dice::{DicePool, Die, RollResult};
use crate::error::DiceResult;
use crate::expression::{DiceExpression, ExpressionRoll};

/// Something that can roll dice.
///
/// Implementors only need [`DiceRoller::roll`]; expression rolling is built
/// on top of it.
pub trait DiceRoller {
    /// Roll `count` dice with `sides` sides each.
    fn roll(&mut self, count: u32, sides: u32) -> DiceResult<RollResult>;

    /// Parse and roll a dice expression such as `2d6+1`.
    fn roll_expression(&mut self, expression: &str) -> DiceResult<ExpressionRoll> {
        let parsed = DiceExpression::parse(expression)?;
        let roll = self.roll(parsed.count, parsed.die.sides())?;
        ExpressionRoll::new(parsed, roll)
    }
}

/// A [`DiceRoller`] backed by a standard RNG.
#[derive(Debug, Clone)]
pub struct RngRoller {
    rng: StdRng,
}

impl RngRoller {
    /// A roller with a fixed seed, for reproducible rolls.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A roller seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RngRoller {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl DiceRoller for RngRoller {
    fn roll(&mut self, count: u32, sides: u32) -> DiceResult<RollResult> {
        let pool = DicePool::new(count, Die::try_from(sides)?)?;
        Ok(pool.roll(&mut self.rng))
    }
}
