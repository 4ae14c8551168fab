//! Table expressions: `?npc`, `2?npc`, `uni:3?npc`, `4#npc`.
//!
//! ```text
//! expression := ["uni:"] [digits] ("?" | "#") name
//! name       := [A-Za-z0-9_.-]+
//! ```
//!
//! `?` asks for random rows (count defaults to 1), `#` asks for the row
//! matching a specific roll. The `uni:` prefix makes random rows distinct.

use crate::error::{TableError, TableResult};

const UNIQUE_PREFIX: &str = "uni:";

/// What a table expression asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// `n?table`: `count` random rows, distinct if `unique`.
    Random {
        /// Number of rows wanted.
        count: u32,
        /// Reject rows that were already drawn.
        unique: bool,
    },
    /// `n#table`: the row matching roll `row`.
    Exact {
        /// The roll value to look up.
        row: i64,
    },
}

/// A parsed table expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    /// Name of the table the expression targets.
    pub table: String,
    /// The rows requested.
    pub request: Request,
}

impl TableQuery {
    /// Parse a table expression.
    pub fn parse(input: &str) -> TableResult<Self> {
        let invalid = || TableError::InvalidExpression(input.to_string());

        let (unique, rest) = match input.strip_prefix(UNIQUE_PREFIX) {
            Some(rest) => (true, rest),
            None => (false, input),
        };

        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(invalid)?;
        let (digits, rest) = rest.split_at(digits_end);

        let mut chars = rest.chars();
        let operator = chars.next().ok_or_else(invalid)?;
        let table = chars.as_str();
        if table.is_empty() || !table.chars().all(is_name_char) {
            return Err(invalid());
        }

        let request = match operator {
            '?' => {
                let count = if digits.is_empty() {
                    1
                } else {
                    digits.parse::<u32>().map_err(|_| invalid())?.max(1)
                };
                Request::Random { count, unique }
            }
            '#' => {
                // an out-of-range row number counts as no row number
                let row = digits.parse::<i64>().unwrap_or(0);
                if row == 0 {
                    return Err(TableError::MissingRowNumber(input.to_string()));
                }
                Request::Exact { row }
            }
            _ => return Err(invalid()),
        };

        Ok(Self {
            table: table.to_string(),
            request,
        })
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

impl std::str::FromStr for TableQuery {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for TableQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.request {
            Request::Random { count, unique } => {
                let prefix = if unique { UNIQUE_PREFIX } else { "" };
                write!(f, "{prefix}{count}?{}", self.table)
            }
            Request::Exact { row } => write!(f, "{row}#{}", self.table),
        }
    }
}
