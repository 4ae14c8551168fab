use tracing::debug;

use crate::engine::RollEngine;
use crate::error::{TableError, TableResult};
use crate::table::{Meta, Row, Table, parse_range};

impl Table {
    /// Build a table from records. The first record is the header.
    ///
    /// A non-empty `roll_expression` makes the table rollable: the first
    /// column of every data row must then be a die value (`3`) or an
    /// inclusive range (`3-4`). Without a roll expression rows are keyed by
    /// their 1-based position.
    ///
    /// Loading is atomic. Any invalid row fails the whole load.
    pub fn load<I, Rec, S, R>(
        records: I,
        name: &str,
        roll_expression: &str,
        engine: &RollEngine<R>,
    ) -> TableResult<Self>
    where
        I: IntoIterator<Item = Rec>,
        Rec: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut records = records
            .into_iter()
            .map(|record| record.into_iter().map(Into::into).collect::<Vec<String>>());

        let headers = records.next().ok_or(TableError::MissingHeader)?;
        let rollable = !roll_expression.is_empty();

        let rows = records
            .enumerate()
            .map(|(i, results)| build_row(i + 1, results, &headers, rollable, engine))
            .collect::<TableResult<Vec<Row>>>()?;

        debug!(name, rows = rows.len(), rollable, "loaded table");

        Ok(Self {
            meta: Meta {
                name: name.to_string(),
                column_count: headers.len(),
                headers,
                rollable_table: rollable,
                roll_expression: roll_expression.to_string(),
                ..Meta::default()
            },
            rows,
        })
    }
}

fn build_row<R>(
    position: usize,
    results: Vec<String>,
    headers: &[String],
    rollable: bool,
    engine: &RollEngine<R>,
) -> TableResult<Row> {
    if results.len() != headers.len() {
        return Err(TableError::ColumnCount {
            row: position,
            expected: headers.len(),
            found: results.len(),
        });
    }

    let (die_roll, roll_range) = if rollable {
        let first = results.first().map(String::as_str).unwrap_or_default();
        match parse_range(first) {
            Some((start, _)) => (start, first.to_string()),
            None => {
                let roll = first.parse().map_err(|_| TableError::InvalidDieRoll {
                    row: position,
                    value: first.to_string(),
                })?;
                (roll, String::new())
            }
        }
    } else {
        let ordinal = i64::try_from(position).unwrap_or(i64::MAX);
        (ordinal, String::new())
    };

    let has_roll_expression = results.iter().any(|value| engine.is_rollable_string(value));

    Ok(Row {
        die_roll,
        roll_range,
        has_roll_expression,
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    fn engine() -> RollEngine {
        RollEngine::new(&EngineConfig::default().with_seed(1))
    }

    fn row(die_roll: i64, roll_range: &str, has_roll_expression: bool, results: &[&str]) -> Row {
        Row {
            die_roll,
            roll_range: roll_range.to_string(),
            has_roll_expression,
            results: results.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn load_rollable_table() {
        let records = vec![
            vec!["D6", "Result", "Description"],
            vec!["1", "Fight {{1d1}} rats", "The party runs across some dirty rats."],
            vec!["2", "No encounter", "Nothing to see here."],
            vec!["3", "{{1d1+1}} bats attack", "Angry bats swarm."],
        ];
        let table = Table::load(records, "test", "d6", &engine()).unwrap();

        let meta = Meta {
            name: "test".to_string(),
            headers: vec!["D6".into(), "Result".into(), "Description".into()],
            column_count: 3,
            rollable_table: true,
            roll_expression: "d6".to_string(),
            ..Meta::default()
        };
        assert_eq!(table.meta, meta);
        assert_eq!(
            table.rows,
            vec![
                row(1, "", true, &["1", "Fight {{1d1}} rats", "The party runs across some dirty rats."]),
                row(2, "", false, &["2", "No encounter", "Nothing to see here."]),
                row(3, "", true, &["3", "{{1d1+1}} bats attack", "Angry bats swarm."]),
            ]
        );
    }

    #[test]
    fn load_ranged_table() {
        let records = vec![
            vec!["D6", "Result"],
            vec!["1-2", "You rolled a 1 or 2"],
            vec!["3-4", "You rolled a 3 or 4"],
            vec!["5-6", "You rolled a 5 or 6"],
        ];
        let table = Table::load(records, "ranged", "d6", &engine()).unwrap();
        assert_eq!(table.meta.column_count, 2);
        assert_eq!(
            table.rows,
            vec![
                row(1, "1-2", false, &["1-2", "You rolled a 1 or 2"]),
                row(3, "3-4", false, &["3-4", "You rolled a 3 or 4"]),
                row(5, "5-6", false, &["5-6", "You rolled a 5 or 6"]),
            ]
        );
    }

    #[test]
    fn load_non_rollable_uses_ordinals() {
        let records = vec![
            vec!["Name", "Trait"],
            vec!["Bram", "grumpy"],
            vec!["Ilse", "curious"],
        ];
        let table = Table::load(records, "npcs", "", &engine()).unwrap();
        assert!(!table.meta.rollable_table);
        assert!(table.meta.roll_expression.is_empty());
        assert_eq!(table.rows[0].die_roll, 1);
        assert_eq!(table.rows[1].die_roll, 2);
        assert!(table.rows.iter().all(|r| r.roll_range.is_empty()));
    }

    #[test]
    fn load_rejects_non_integer_first_column() {
        let records = vec![
            vec!["D3", "Result", "Description"],
            vec!["A", "Fight {{1d1}} rats", "Dirty rats."],
            vec!["2:8", "No encounter", "Nothing to see here."],
            vec!["3", "A wolf", "Careful."],
        ];
        let err = Table::load(records, "bad", "d6", &engine()).unwrap_err();
        assert!(matches!(err, TableError::InvalidDieRoll { row: 1, .. }));
        assert!(
            err.to_string()
                .starts_with("first column must be an integer since it represents a die roll")
        );
    }

    #[test]
    fn load_rejects_malformed_range() {
        let records = vec![vec!["D6", "Result"], vec!["1-2-3", "nope"]];
        assert!(matches!(
            Table::load(records, "bad", "d6", &engine()),
            Err(TableError::InvalidDieRoll { .. })
        ));
    }

    #[test]
    fn load_rejects_column_count_mismatch() {
        let records = vec![vec!["D6", "Result"], vec!["1", "ok"], vec!["2"]];
        assert!(matches!(
            Table::load(records, "short", "d6", &engine()),
            Err(TableError::ColumnCount {
                row: 2,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn load_requires_a_header() {
        let records: Vec<Vec<String>> = Vec::new();
        assert!(matches!(
            Table::load(records, "empty", "d6", &engine()),
            Err(TableError::MissingHeader)
        ));
    }

    #[test]
    fn every_row_matches_column_count() {
        let records = vec![
            vec!["D4", "A", "B", "C"],
            vec!["1", "a", "b", "c"],
            vec!["2-4", "a", "{{d4}}", "c"],
        ];
        let table = Table::load(records, "wide", "d4", &engine()).unwrap();
        assert_eq!(table.meta.column_count, table.meta.headers.len());
        assert!(
            table
                .rows
                .iter()
                .all(|r| r.results.len() == table.meta.column_count)
        );
    }
}
