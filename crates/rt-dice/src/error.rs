//! Error types for dice evaluation.

/// Errors that can occur while parsing or rolling dice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// The expression was empty or only whitespace.
    #[error("empty dice expression")]
    Empty,

    /// The expression has no `d` separating count and sides.
    #[error("not a dice expression, expected something like 2d6+1: {0}")]
    MissingDie(String),

    /// The dice count is not a positive integer.
    #[error("invalid dice count: {0}")]
    InvalidCount(String),

    /// The number of sides is not a positive integer.
    #[error("invalid number of sides: {0}")]
    InvalidSides(String),

    /// The modifier after the sides is malformed.
    #[error("invalid modifier: {0}")]
    InvalidModifier(String),

    /// More dice were requested than a single roll allows.
    #[error("too many dice: {0} (at most {max})", max = crate::expression::MAX_DICE)]
    TooManyDice(u32),

    /// The modifier pushes the total past the range of an `i64`.
    #[error("dice total out of range: {0}")]
    Overflow(String),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
