//! Dice evaluation for Rolltables.
//!
//! Parses dice notation such as `2d6+1`, rolls pools of identical dice and
//! reports both the individual values and their sum. Everything that needs
//! randomness goes through the [`DiceRoller`] trait so callers can swap in a
//! seeded roller for reproducible results.

pub mod dice;
pub mod error;
pub mod expression;
pub mod roller;

pub use dice::{DicePool, Die, RollResult};
pub use error::{DiceError, DiceResult};
pub use expression::{DiceExpression, ExpressionRoll};
pub use roller::{DiceRoller, RngRoller};
