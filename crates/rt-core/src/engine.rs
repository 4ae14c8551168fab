//! Inline roll placeholders such as `{{2d6+1}}` are found and re-rolled here.

use regex::Regex;
use rt_dice::{DiceResult, DiceRoller, ExpressionRoll, RngRoller};
use tracing::warn;

use crate::config::EngineConfig;

/// Most placeholders substituted in a single string; later ones are left as written.
pub const MAX_PLACEHOLDERS: usize = 99;

const PLACEHOLDER_PATTERN: &str = r"\{\{\s*([0-9]*)d([0-9]+)(\+|-)?([0-9]+)?\s*\}\}";

/// Evaluates dice for tables: roll expressions, and placeholders in row text.
///
/// The engine owns the dice roller, so every method that rolls takes
/// `&mut self`. Tables themselves never hold any randomness.
#[derive(Debug, Clone)]
pub struct RollEngine<R = RngRoller> {
    placeholder: Regex,
    roller: R,
}

impl RollEngine<RngRoller> {
    /// Create an engine with an RNG-backed roller.
    pub fn new(config: &EngineConfig) -> Self {
        let roller = match config.seed {
            Some(seed) => RngRoller::seeded(seed),
            None => RngRoller::from_os_rng(),
        };
        Self::with_roller(roller)
    }
}

impl Default for RollEngine<RngRoller> {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl<R> RollEngine<R> {
    /// Create an engine around any dice roller.
    pub fn with_roller(roller: R) -> Self {
        Self {
            placeholder: Regex::new(PLACEHOLDER_PATTERN).expect("hardcoded placeholder pattern"),
            roller,
        }
    }

    /// Whether `text` contains at least one well-formed roll placeholder.
    pub fn is_rollable_string(&self, text: &str) -> bool {
        self.placeholder.is_match(text)
    }
}

impl<R: DiceRoller> RollEngine<R> {
    /// Roll a dice expression such as `2d6+1`.
    pub fn roll_expression(&mut self, expression: &str) -> DiceResult<ExpressionRoll> {
        self.roller.roll_expression(expression)
    }

    /// Roll a single die with `sides` sides.
    pub fn roll_die(&mut self, sides: u32) -> DiceResult<i64> {
        Ok(self.roller.roll(1, sides)?.total())
    }

    /// Replace every placeholder in `text` with a fresh roll.
    ///
    /// Substitution is all or nothing: if any placeholder fails to roll, the
    /// original text is returned unchanged. At most [`MAX_PLACEHOLDERS`]
    /// placeholders are rolled.
    pub fn roll_string(&mut self, text: &str) -> String {
        let found: Vec<&str> = self
            .placeholder
            .find_iter(text)
            .take(MAX_PLACEHOLDERS)
            .map(|m| m.as_str())
            .collect();
        if found.is_empty() {
            return text.to_string();
        }

        let mut rolled = text.to_string();
        for placeholder in found {
            let inner = placeholder
                .trim_start_matches("{{")
                .trim_end_matches("}}")
                .trim();
            match self.roller.roll_expression(inner) {
                Ok(result) => {
                    rolled = rolled.replacen(placeholder, &result.total.to_string(), 1);
                }
                Err(err) => {
                    warn!(placeholder, %err, "leaving text unrolled");
                    return text.to_string();
                }
            }
        }
        rolled
    }
}
