//! Dice notation: `[count]d<sides>[+|-modifier]`.
//!
//! The count defaults to one. Whitespace around the whole expression is
//! ignored; whitespace inside it is not.

use serde::{Deserialize, Serialize};

use crate::dice::{Die, RollResult};
use crate::error::{DiceError, DiceResult};

/// Upper bound on the number of dice in one expression.
pub const MAX_DICE: u32 = 1000;

/// A parsed dice expression such as `2d6+1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceExpression {
    /// How many dice to roll.
    pub count: u32,
    /// The die to roll.
    pub die: Die,
    /// Flat amount added to the sum (may be negative).
    pub modifier: i64,
}

impl DiceExpression {
    /// Parse dice notation.
    pub fn parse(input: &str) -> DiceResult<Self> {
        let s = input.trim();
        if s.is_empty() {
            return Err(DiceError::Empty);
        }

        let (count_str, rest) = s
            .split_once(['d', 'D'])
            .ok_or_else(|| DiceError::MissingDie(s.to_string()))?;

        let count = if count_str.is_empty() {
            1
        } else {
            parse_digits::<u32>(count_str)
                .filter(|n| *n > 0)
                .ok_or_else(|| DiceError::InvalidCount(count_str.to_string()))?
        };
        if count > MAX_DICE {
            return Err(DiceError::TooManyDice(count));
        }

        let split = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (sides_str, tail) = rest.split_at(split);
        let die = parse_digits::<u32>(sides_str)
            .and_then(Die::new)
            .ok_or_else(|| DiceError::InvalidSides(sides_str.to_string()))?;

        let modifier = parse_modifier(tail)?;

        Ok(Self {
            count,
            die,
            modifier,
        })
    }

    /// Apply this expression to an already-rolled pool.
    ///
    /// Fails when the modifier takes the sum outside the `i64` range.
    pub fn total(&self, roll: &RollResult) -> DiceResult<i64> {
        roll.total()
            .checked_add(self.modifier)
            .ok_or_else(|| DiceError::Overflow(self.to_string()))
    }
}

impl std::fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.count, self.die)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}

impl std::str::FromStr for DiceExpression {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parse a run of ASCII digits; signs and other characters are rejected.
fn parse_digits<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_modifier(tail: &str) -> DiceResult<i64> {
    if tail.is_empty() {
        return Ok(0);
    }
    let invalid = || DiceError::InvalidModifier(tail.to_string());
    let mut chars = tail.chars();
    let negative = match chars.next() {
        Some('+') => false,
        Some('-') => true,
        _ => return Err(invalid()),
    };
    let value = parse_digits::<i64>(chars.as_str()).ok_or_else(invalid)?;
    Ok(if negative { -value } else { value })
}

/// The outcome of rolling a [`DiceExpression`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionRoll {
    /// The expression that was rolled.
    pub expression: DiceExpression,
    /// The individual dice.
    pub roll: RollResult,
    /// Sum of the dice plus the modifier.
    pub total: i64,
}

impl ExpressionRoll {
    /// Combine an expression with the dice rolled for it.
    pub fn new(expression: DiceExpression, roll: RollResult) -> DiceResult<Self> {
        let total = expression.total(&roll)?;
        Ok(Self {
            expression,
            roll,
            total,
        })
    }

    /// The individual die values.
    pub fn values(&self) -> &[u32] {
        &self.roll.values
    }
}

impl std::fmt::Display for ExpressionRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.values().iter().map(u32::to_string).collect();
        write!(
            f,
            "{}: [{}] = {}",
            self.expression,
            values.join(", "),
            self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_expression() {
        let e = DiceExpression::parse("2d6+1").unwrap();
        assert_eq!(e.count, 2);
        assert_eq!(e.die, Die::D6);
        assert_eq!(e.modifier, 1);
    }

    #[test]
    fn parse_defaults_count_to_one() {
        let e = DiceExpression::parse("d20-2").unwrap();
        assert_eq!(e.count, 1);
        assert_eq!(e.die, Die::D20);
        assert_eq!(e.modifier, -2);
    }

    #[test]
    fn parse_trims_and_accepts_upper_case() {
        let e = DiceExpression::parse("  3D8 ").unwrap();
        assert_eq!(e.count, 3);
        assert_eq!(e.die, Die::D8);
        assert_eq!(e.modifier, 0);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(DiceExpression::parse("   "), Err(DiceError::Empty));
        assert!(matches!(
            DiceExpression::parse("12"),
            Err(DiceError::MissingDie(_))
        ));
        assert!(matches!(
            DiceExpression::parse("0d6"),
            Err(DiceError::InvalidCount(_))
        ));
        assert!(matches!(
            DiceExpression::parse("xd6"),
            Err(DiceError::InvalidCount(_))
        ));
        assert!(matches!(
            DiceExpression::parse("2d"),
            Err(DiceError::InvalidSides(_))
        ));
        assert!(matches!(
            DiceExpression::parse("1d0"),
            Err(DiceError::InvalidSides(_))
        ));
        assert!(matches!(
            DiceExpression::parse("2d6+"),
            Err(DiceError::InvalidModifier(_))
        ));
        assert!(matches!(
            DiceExpression::parse("2d6*3"),
            Err(DiceError::InvalidModifier(_))
        ));
        assert!(matches!(
            DiceExpression::parse("2d6 + 1"),
            Err(DiceError::InvalidModifier(_))
        ));
        assert_eq!(
            DiceExpression::parse("1001d6"),
            Err(DiceError::TooManyDice(1001))
        );
    }

    #[test]
    fn display_round_trips_notation() {
        assert_eq!(DiceExpression::parse("d6").unwrap().to_string(), "1d6");
        assert_eq!(DiceExpression::parse("2d8+3").unwrap().to_string(), "2d8+3");
        assert_eq!(DiceExpression::parse("1d4-1").unwrap().to_string(), "1d4-1");
    }

    #[test]
    fn expression_roll_total_includes_modifier() {
        let expression: DiceExpression = "2d6-3".parse().unwrap();
        let roll = RollResult {
            die: Die::D6,
            values: vec![1, 1],
        };
        let rolled = ExpressionRoll::new(expression, roll).unwrap();
        assert_eq!(rolled.total, -1);
        assert_eq!(rolled.values(), vec![1, 1]);
        assert_eq!(rolled.to_string(), "2d6-3: [1, 1] = -1");
    }

    #[test]
    fn total_reports_overflow() {
        let expression: DiceExpression = "1d6+9223372036854775807".parse().unwrap();
        let roll = RollResult {
            die: Die::D6,
            values: vec![1],
        };
        assert_eq!(
            expression.total(&roll),
            Err(DiceError::Overflow("1d6+9223372036854775807".to_string()))
        );
        assert!(ExpressionRoll::new(expression, roll).is_err());

        let low: DiceExpression = "1d6-9223372036854775807".parse().unwrap();
        let roll = RollResult {
            die: Die::D6,
            values: vec![1],
        };
        assert_eq!(low.total(&roll), Ok(1 - i64::MAX));
    }
}
