//! Dice and the values they produce.

pub mod pool;
pub mod roll;

pub use pool::DicePool;
pub use roll::RollResult;

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};

/// A die with faces numbered `1..=sides`.
///
/// Any positive number of sides is allowed. Table authors use the one-sided
/// die (`{{1d1}}`) to write fixed values in placeholder syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Die(NonZeroU32);

impl Die {
    /// d4.
    pub const D4: Self = Self::standard(4);
    /// d6.
    pub const D6: Self = Self::standard(6);
    /// d8.
    pub const D8: Self = Self::standard(8);
    /// d10.
    pub const D10: Self = Self::standard(10);
    /// d12.
    pub const D12: Self = Self::standard(12);
    /// d20.
    pub const D20: Self = Self::standard(20);
    /// Percentile die.
    pub const D100: Self = Self::standard(100);

    const fn standard(sides: u32) -> Self {
        match NonZeroU32::new(sides) {
            Some(sides) => Self(sides),
            None => panic!("a die needs at least one side"),
        }
    }

    /// A die with `sides` faces, or `None` for zero.
    pub fn new(sides: u32) -> Option<Self> {
        NonZeroU32::new(sides).map(Self)
    }

    /// Number of faces.
    pub fn sides(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for Die {
    type Error = DiceError;

    fn try_from(sides: u32) -> DiceResult<Self> {
        Self::new(sides).ok_or_else(|| DiceError::InvalidSides(sides.to_string()))
    }
}

impl From<Die> for u32 {
    fn from(die: Die) -> Self {
        die.sides()
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_dice() {
        assert_eq!(Die::D4.sides(), 4);
        assert_eq!(Die::D100.sides(), 100);
        assert_eq!(Die::new(12), Some(Die::D12));
    }

    #[test]
    fn zero_sides_is_not_a_die() {
        assert_eq!(Die::new(0), None);
        assert!(matches!(Die::try_from(0), Err(DiceError::InvalidSides(_))));
        assert_eq!(Die::try_from(1).unwrap().sides(), 1);
    }

    #[test]
    fn notation() {
        assert_eq!(Die::D20.to_string(), "d20");
        assert_eq!(Die::new(3).unwrap().to_string(), "d3");
    }

    #[test]
    fn serializes_as_side_count() {
        assert_eq!(serde_json::to_string(&Die::D8).unwrap(), "8");
        assert_eq!(serde_json::from_str::<Die>("6").unwrap(), Die::D6);
        assert!(serde_json::from_str::<Die>("0").is_err());
    }
}
