use serde::{Deserialize, Serialize};

use rt_dice::DiceRoller;

use crate::engine::RollEngine;
use crate::error::{TableError, TableResult};

/// Metadata describing a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Unique name, used as both display and storage key.
    pub name: String,
    /// Human-readable title.
    #[serde(default)]
    pub title: String,
    /// Descriptive text shown alongside the table.
    #[serde(default)]
    pub flavor_text: String,
    /// Campaign the table belongs to.
    #[serde(default)]
    pub campaign: String,
    /// Column names, taken from the first record.
    pub headers: Vec<String>,
    /// Number of columns; every row has exactly this many results.
    pub column_count: usize,
    /// True when the table was loaded with a roll expression.
    pub rollable_table: bool,
    /// Dice expression used to pick a random row, e.g. `d6`.
    pub roll_expression: String,
}

impl Meta {
    /// One-line listing: `name,roll_expression,rollable`.
    pub fn summary(&self) -> String {
        format!(
            "{},{},{}",
            self.name, self.roll_expression, self.rollable_table
        )
    }
}

/// One entry of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Lookup key: the die value, the start of the range, or the 1-based
    /// position for tables without a roll expression.
    pub die_roll: i64,
    /// `"<start>-<end>"` for rows covering a range of rolls, else empty.
    pub roll_range: String,
    /// True if any result contains a roll placeholder.
    pub has_roll_expression: bool,
    /// All fields of the row, including the first column.
    pub results: Vec<String>,
}

impl Row {
    /// The inclusive `(start, end)` bounds if this is a range row.
    pub fn range(&self) -> Option<(i64, i64)> {
        if self.roll_range.is_empty() {
            return None;
        }
        parse_range(&self.roll_range)
    }

    /// Whether `roll` falls inside this row's range.
    pub fn range_contains(&self, roll: i64) -> bool {
        self.range()
            .is_some_and(|(start, end)| start <= roll && roll <= end)
    }
}

/// Parse `"<int>-<int>"` with exactly one dash.
pub(crate) fn parse_range(value: &str) -> Option<(i64, i64)> {
    let (start, end) = value.split_once('-')?;
    if end.contains('-') {
        return None;
    }
    Some((start.parse().ok()?, end.parse().ok()?))
}

/// A named roll table: metadata plus ordered rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Table metadata.
    pub meta: Meta,
    /// Rows in load order.
    pub rows: Vec<Row>,
}

impl Table {
    /// The table's name.
    pub fn name(&self) -> &str {
        &self.meta.name
    }

    /// The header row.
    pub fn header(&self) -> &[String] {
        &self.meta.headers
    }

    /// Header followed by every row's raw results, without rolling placeholders.
    pub fn records(&self) -> Vec<Vec<String>> {
        std::iter::once(self.meta.headers.clone())
            .chain(self.rows.iter().map(|row| row.results.clone()))
            .collect()
    }

    /// Stable identifier derived from the name only (hex BLAKE3 digest).
    ///
    /// Two tables with the same name always share a hash, whatever their rows.
    pub fn hash(&self) -> String {
        blake3::hash(self.meta.name.as_bytes()).to_hex().to_string()
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.meta.title = title.into();
        self
    }

    /// Set the flavor text.
    pub fn with_flavor_text(mut self, flavor_text: impl Into<String>) -> Self {
        self.meta.flavor_text = flavor_text.into();
        self
    }

    /// Set the campaign.
    pub fn with_campaign(mut self, campaign: impl Into<String>) -> Self {
        self.meta.campaign = campaign.into();
        self
    }

    // -----------------------------------------------------------------------
    // Row resolution
    // -----------------------------------------------------------------------

    /// Position of the row matching `roll`: exact key first, then ranges.
    fn position(&self, roll: i64) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.die_roll == roll)
            .or_else(|| self.rows.iter().position(|row| row.range_contains(roll)))
    }

    /// The row matching `roll`, without rolling any placeholders.
    pub fn find_row(&self, roll: i64) -> Option<&Row> {
        self.position(roll).map(|i| &self.rows[i])
    }

    /// The results of the row matching `roll`, with placeholders rolled.
    ///
    /// Placeholders are re-rolled on every call, so two calls with the same
    /// roll can return different text.
    pub fn get_row<R: DiceRoller>(
        &self,
        roll: i64,
        engine: &mut RollEngine<R>,
    ) -> TableResult<Vec<String>> {
        let index = self.position(roll).ok_or(TableError::RollNotValid(roll))?;
        Ok(self.render(index, engine))
    }

    /// A random row and the roll that selected it.
    ///
    /// Rollable tables roll their own expression; other tables pick each row
    /// with equal odds.
    pub fn random_row<R: DiceRoller>(
        &self,
        engine: &mut RollEngine<R>,
    ) -> TableResult<(Vec<String>, i64)> {
        let (index, roll) = self.sample(engine)?;
        Ok((self.render(index, engine), roll))
    }

    /// Roll for a row: returns its position and the roll used.
    pub(crate) fn sample<R: DiceRoller>(
        &self,
        engine: &mut RollEngine<R>,
    ) -> TableResult<(usize, i64)> {
        let roll = if self.meta.rollable_table {
            engine.roll_expression(&self.meta.roll_expression)?.total
        } else {
            let sides = u32::try_from(self.rows.len())
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| TableError::EmptyTable(self.meta.name.clone()))?;
            engine.roll_die(sides)?
        };
        let index = self.position(roll).ok_or(TableError::RollNotValid(roll))?;
        Ok((index, roll))
    }

    /// The results of the row at `index`, with placeholders rolled if it has any.
    pub(crate) fn render<R: DiceRoller>(
        &self,
        index: usize,
        engine: &mut RollEngine<R>,
    ) -> Vec<String> {
        let row = &self.rows[index];
        if !row.has_roll_expression {
            return row.results.clone();
        }
        row.results
            .iter()
            .map(|value| engine.roll_string(value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use proptest::prelude::*;

    fn engine() -> RollEngine {
        RollEngine::new(&EngineConfig::default().with_seed(42))
    }

    fn encounters() -> Vec<Vec<&'static str>> {
        vec![
            vec!["D6", "Result", "Description"],
            vec!["1", "Fight {{1d1}} rats", "The party runs across some dirty rats."],
            vec!["2", "No encounter", "Nothing to see here."],
            vec![
                "3",
                "A wolf can be heard nearby",
                "If the party is careful they may avoid the wolf.",
            ],
            vec!["4", "{{1d1+1}} bats attack", "Angry bats swarm and attack the party."],
            vec!["5", "I can see you, can you see me?", "A whisper can be heard in the trees."],
            vec!["6", "A pile of bones covers {{1d1}}GP", "You found some loot."],
        ]
    }

    fn ranged() -> Vec<Vec<&'static str>> {
        vec![
            vec!["D6", "Result"],
            vec!["1-2", "You rolled a 1 or 2"],
            vec!["3-4", "You rolled a 3 or 4, bonus {{1d1+1}}"],
            vec!["5-6", "You rolled a 5 or 6"],
        ]
    }

    #[test]
    fn header_and_records() {
        let engine = engine();
        let table = Table::load(encounters(), "test", "d6", &engine).unwrap();
        assert_eq!(table.header(), ["D6", "Result", "Description"]);
        assert_eq!(table.records(), encounters());
        assert_eq!(table.name(), "test");
    }

    #[test]
    fn hash_depends_only_on_name() {
        let engine = engine();
        let a = Table::load(encounters(), "test", "d6", &engine).unwrap();
        let b = Table::load(ranged(), "test", "", &engine).unwrap();
        let c = Table::load(encounters(), "other", "d6", &engine).unwrap();
        assert_eq!(a.hash(), b.hash());
        assert_ne!(a.hash(), c.hash());
        assert_eq!(a.hash().len(), 64);
    }

    #[test]
    fn summary_line() {
        let engine = engine();
        let table = Table::load(encounters(), "test", "d6", &engine).unwrap();
        assert_eq!(table.meta.summary(), "test,d6,true");
        let plain = Table::load(encounters(), "plain", "", &engine).unwrap();
        assert_eq!(plain.meta.summary(), "plain,,false");
    }

    #[test]
    fn descriptive_metadata_builders() {
        let engine = engine();
        let table = Table::load(encounters(), "test", "d6", &engine)
            .unwrap()
            .with_title("Forest Encounters")
            .with_flavor_text("Roll when the party camps.")
            .with_campaign("Greenwood");
        assert_eq!(table.meta.title, "Forest Encounters");
        assert_eq!(table.meta.flavor_text, "Roll when the party camps.");
        assert_eq!(table.meta.campaign, "Greenwood");
    }

    #[test]
    fn get_row_exact() {
        let mut engine = engine();
        let table = Table::load(encounters(), "test", "d6", &engine).unwrap();
        assert_eq!(
            table.get_row(3, &mut engine).unwrap(),
            table.rows[2].results
        );
        assert_eq!(
            table.get_row(4, &mut engine).unwrap(),
            ["4", "2 bats attack", "Angry bats swarm and attack the party."]
        );
    }

    #[test]
    fn get_row_out_of_domain() {
        let mut engine = engine();
        let table = Table::load(encounters(), "test", "d6", &engine).unwrap();
        assert!(matches!(
            table.get_row(7, &mut engine),
            Err(TableError::RollNotValid(7))
        ));
        assert!(matches!(
            table.get_row(0, &mut engine),
            Err(TableError::RollNotValid(0))
        ));
    }

    #[test]
    fn get_row_by_range() {
        let mut engine = engine();
        let table = Table::load(ranged(), "ranged", "d6", &engine).unwrap();
        for (roll, index) in [(1, 0), (2, 0), (5, 2), (6, 2)] {
            assert_eq!(
                table.get_row(roll, &mut engine).unwrap(),
                table.rows[index].results
            );
        }
        let expected = ["3-4", "You rolled a 3 or 4, bonus 2"];
        assert_eq!(table.get_row(3, &mut engine).unwrap(), expected);
        assert_eq!(table.get_row(4, &mut engine).unwrap(), expected);
    }

    #[test]
    fn exact_match_wins_over_range() {
        let mut engine = engine();
        let records = vec![
            vec!["D6", "Result"],
            vec!["1-4", "low"],
            vec!["3", "exactly three"],
            vec!["5-6", "high"],
        ];
        let table = Table::load(records, "overlap", "d6", &engine).unwrap();
        assert_eq!(table.get_row(3, &mut engine).unwrap()[1], "exactly three");
        assert_eq!(table.get_row(4, &mut engine).unwrap()[1], "low");
        assert_eq!(table.find_row(1).unwrap().roll_range, "1-4");
    }

    #[test]
    fn placeholder_rows_reroll_but_keep_other_fields() {
        let mut engine = engine();
        let records = vec![vec!["D1", "Result", "Note"], vec!["1", "{{1d100}} gold", "loot"]];
        let table = Table::load(records, "loot", "d1", &engine).unwrap();
        let mut amounts = std::collections::HashSet::new();
        for _ in 0..50 {
            let row = table.get_row(1, &mut engine).unwrap();
            assert_eq!(row[0], "1");
            assert_eq!(row[2], "loot");
            assert!(row[1].ends_with(" gold"));
            assert!(!row[1].contains("{{"));
            amounts.insert(row[1].clone());
        }
        assert!(amounts.len() > 1);
        assert_eq!(table.rows[0].results[1], "{{1d100}} gold");
    }

    #[test]
    fn random_row_returns_the_rolled_row() {
        let mut engine = engine();
        let table = Table::load(ranged(), "ranged", "d6", &engine).unwrap();
        for _ in 0..100 {
            let (row, roll) = table.random_row(&mut engine).unwrap();
            assert!((1..=6).contains(&roll));
            let expected = table.get_row(roll, &mut engine).unwrap();
            assert_eq!(row, expected);
        }
    }

    #[test]
    fn random_row_on_non_rollable_table_is_uniform() {
        let mut engine = engine();
        let table = Table::load(encounters(), "plain", "", &engine).unwrap();
        let mut counts = [0usize; 6];
        for _ in 0..6000 {
            let (row, roll) = table.random_row(&mut engine).unwrap();
            assert_eq!(row[0], roll.to_string());
            counts[(roll - 1) as usize] += 1;
        }
        for count in counts {
            assert!((800..=1200).contains(&count), "skewed counts: {counts:?}");
        }
    }

    #[test]
    fn random_row_surfaces_out_of_domain_rolls() {
        let mut engine = engine();
        let table = Table::load(ranged(), "ranged", "1d1+10", &engine).unwrap();
        assert!(matches!(
            table.random_row(&mut engine),
            Err(TableError::RollNotValid(11))
        ));
    }

    #[test]
    fn random_row_surfaces_bad_roll_expression() {
        let mut engine = engine();
        let table = Table::load(ranged(), "ranged", "banana", &engine).unwrap();
        assert!(matches!(
            table.random_row(&mut engine),
            Err(TableError::Dice(_))
        ));
    }

    #[test]
    fn overflowing_dice_are_errors_not_panics() {
        let mut engine = engine();
        let records = vec![vec!["D1", "Result"], vec!["1", "{{1d6+9223372036854775807}} gold"]];
        let table = Table::load(records, "hoard", "d1", &engine).unwrap();
        assert_eq!(
            table.get_row(1, &mut engine).unwrap(),
            ["1", "{{1d6+9223372036854775807}} gold"]
        );

        let table = Table::load(ranged(), "ranged", "1d6+9223372036854775807", &engine).unwrap();
        assert!(matches!(
            table.random_row(&mut engine),
            Err(TableError::Dice(rt_dice::DiceError::Overflow(_)))
        ));
    }

    #[test]
    fn random_row_on_empty_table() {
        let mut engine = engine();
        let table = Table::load(vec![vec!["Result"]], "empty", "", &engine).unwrap();
        assert!(matches!(
            table.random_row(&mut engine),
            Err(TableError::EmptyTable(_))
        ));
    }

    #[test]
    fn parse_range_requires_one_dash() {
        assert_eq!(parse_range("3-4"), Some((3, 4)));
        assert_eq!(parse_range("10-20"), Some((10, 20)));
        assert_eq!(parse_range("1-2-3"), None);
        assert_eq!(parse_range("-3"), None);
        assert_eq!(parse_range("3-"), None);
        assert_eq!(parse_range("a-b"), None);
        assert_eq!(parse_range("34"), None);
    }

    #[test]
    fn serde_roundtrip() {
        let engine = engine();
        let table = Table::load(ranged(), "ranged", "d6", &engine)
            .unwrap()
            .with_title("Ranged");
        let json = serde_json::to_string(&table).unwrap();
        assert!(json.contains("\"roll_range\":\"1-2\""));
        let back: Table = serde_json::from_str(&json).unwrap();
        assert_eq!(table, back);
    }

    #[test]
    fn deserialize_without_descriptive_metadata() {
        let json = r#"{"meta":{"name":"t","headers":["A"],"column_count":1,"rollable_table":false,"roll_expression":""},"rows":[]}"#;
        let table: Table = serde_json::from_str(json).unwrap();
        assert_eq!(table.meta.name, "t");
        assert!(table.meta.title.is_empty());
    }

    proptest! {
        #[test]
        fn any_roll_inside_a_range_finds_that_row(start in 0i64..100, len in 0i64..20, offset in 0i64..20) {
            let end = start + len;
            let roll = start + offset.min(len);
            let row = Row {
                die_roll: start,
                roll_range: format!("{start}-{end}"),
                has_roll_expression: false,
                results: vec![format!("{start}-{end}")],
            };
            let table = Table { meta: Meta::default(), rows: vec![row] };
            prop_assert!(table.find_row(roll).is_some());
            prop_assert!(table.find_row(end + 1).is_none());
        }
    }
}
