use rt_dice::DiceError;

/// Alias for `Result<T, TableError>`.
pub type TableResult<T> = Result<T, TableError>;

/// Errors that can occur when loading or evaluating a table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The input had no records at all, so there is no header.
    #[error("no header row, a table needs at least one record")]
    MissingHeader,

    /// A data row has a different number of fields than the header.
    #[error("row {row} has {found} fields but the header has {expected}")]
    ColumnCount {
        /// 1-based position of the row among data rows.
        row: usize,
        /// Number of header columns.
        expected: usize,
        /// Number of fields in the offending row.
        found: usize,
    },

    /// The first column of a rollable table is neither an integer nor a range.
    #[error(
        "first column must be an integer since it represents a die roll (row {row}: \"{value}\")"
    )]
    InvalidDieRoll {
        /// 1-based position of the row among data rows.
        row: usize,
        /// The offending first-column value.
        value: String,
    },

    /// No row matches the roll, neither exactly nor by range.
    #[error("roll value is not valid for this table: {0}")]
    RollNotValid(i64),

    /// A roll was requested from a table without a roll expression.
    #[error("not a rollable table: {0}")]
    NotRollable(String),

    /// The expression names a different table than the one evaluated.
    #[error("table does not match expression: table is \"{table}\", expression names \"{requested}\"")]
    TableMismatch {
        /// The name of the table being evaluated.
        table: String,
        /// The table name found in the expression.
        requested: String,
    },

    /// The string is not a table expression.
    #[error(
        "not a valid table expression, must be ?table or n?table or n#table (e.g. ?npc, 2?npc, 3#npc): {0}"
    )]
    InvalidExpression(String),

    /// A `#` request without a row number.
    #[error(
        "not a valid table expression, a request to show a specific row must include a row number: {0}"
    )]
    MissingRowNumber(String),

    /// A random row was requested from a table with no rows.
    #[error("table has no rows: {0}")]
    EmptyTable(String),

    /// The table's roll expression could not be rolled.
    #[error("roll expression failed: {0}")]
    Dice(#[from] DiceError),
}
