//! The values a roll produced.

use serde::{Deserialize, Serialize};

use super::Die;

/// Values produced by rolling one or more identical dice, in roll order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// The die that was rolled.
    pub die: Die,
    /// One value per die, each in `1..=die.sides()`.
    pub values: Vec<u32>,
}

impl RollResult {
    /// Sum of the values.
    pub fn total(&self) -> i64 {
        self.values.iter().copied().map(i64::from).sum()
    }
}
