use std::collections::HashSet;

use rt_dice::DiceRoller;
use tracing::debug;

use crate::engine::RollEngine;
use crate::error::{TableError, TableResult};
use crate::query::{Request, TableQuery};
use crate::table::Table;

/// Draws allowed per table row when collecting distinct rows.
///
/// Bounds the retry loop when the roll expression cannot reach every row.
pub const UNIQUE_ATTEMPTS_PER_ROW: usize = 64;

impl Table {
    /// Evaluate a table expression such as `2?npc` against this table.
    ///
    /// Returns the header followed by the requested rows in the order they
    /// were drawn.
    pub fn expression<R: DiceRoller>(
        &self,
        expression: &str,
        engine: &mut RollEngine<R>,
    ) -> TableResult<Vec<Vec<String>>> {
        let query = TableQuery::parse(expression)?;
        self.query(&query, engine)
    }

    /// Evaluate an already parsed table expression.
    pub fn query<R: DiceRoller>(
        &self,
        query: &TableQuery,
        engine: &mut RollEngine<R>,
    ) -> TableResult<Vec<Vec<String>>> {
        if query.table != self.meta.name {
            return Err(TableError::TableMismatch {
                table: self.meta.name.clone(),
                requested: query.table.clone(),
            });
        }
        if !self.meta.rollable_table {
            return Err(TableError::NotRollable(self.meta.name.clone()));
        }

        debug!(table = %self.meta.name, %query, "evaluating table expression");

        let mut data = vec![self.meta.headers.clone()];
        match query.request {
            Request::Exact { row } => data.push(self.get_row(row, engine)?),
            Request::Random {
                count,
                unique: false,
            } => {
                for _ in 0..count {
                    let (row, _) = self.random_row(engine)?;
                    data.push(row);
                }
            }
            Request::Random {
                count,
                unique: true,
            } => data.extend(self.distinct_rows(count, engine)?),
        }
        Ok(data)
    }

    /// Draw up to `count` random rows, none of them twice.
    ///
    /// Distinctness is by row, not by roll value: two rolls landing in the
    /// same range row count as a repeat. Stops early once every row has been
    /// drawn.
    fn distinct_rows<R: DiceRoller>(
        &self,
        count: u32,
        engine: &mut RollEngine<R>,
    ) -> TableResult<Vec<Vec<String>>> {
        let wanted = usize::try_from(count).unwrap_or(usize::MAX);
        let max_attempts = self.rows.len().saturating_mul(UNIQUE_ATTEMPTS_PER_ROW);

        let mut seen = HashSet::new();
        let mut rows = Vec::new();
        let mut attempts = 0;
        while rows.len() < wanted && seen.len() < self.rows.len() {
            if attempts == max_attempts {
                debug!(
                    table = %self.meta.name,
                    found = rows.len(),
                    "gave up looking for more distinct rows"
                );
                break;
            }
            attempts += 1;

            let (index, _) = self.sample(engine)?;
            if seen.insert(index) {
                rows.push(self.render(index, engine));
            }
        }
        Ok(rows)
    }
}
