//! CSV and JSON file helpers.

use std::fs;
use std::path::Path;

use rt_core::Table;

use crate::error::{StoreError, StoreResult};

/// Read every record of a CSV file. The header is returned as the first record.
///
/// Records may have different lengths; [`Table::load`] reports mismatches
/// with the row that caused them.
pub fn read_csv(path: &Path) -> StoreResult<Vec<Vec<String>>> {
    let file = fs::File::open(path).map_err(StoreError::io(path))?;
    read_csv_from(file)
}

/// Read every record of CSV data from a reader.
pub fn read_csv_from<R: std::io::Read>(reader: R) -> StoreResult<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = Vec::new();
    for record in reader.records() {
        records.push(record?.iter().map(String::from).collect());
    }
    Ok(records)
}

/// Write records to a CSV file, replacing it if it exists.
pub fn write_csv(path: &Path, records: &[Vec<String>]) -> StoreResult<()> {
    let file = fs::File::create(path).map_err(StoreError::io(path))?;
    write_csv_to(file, records)
}

/// Write records as CSV to a writer.
pub fn write_csv_to<W: std::io::Write>(writer: W, records: &[Vec<String>]) -> StoreResult<()> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);
    for record in records {
        writer.write_record(record)?;
    }
    writer.flush().map_err(|e| StoreError::Csv(e.into()))?;
    Ok(())
}

/// Read a whole table from a JSON file.
pub fn read_table_json(path: &Path) -> StoreResult<Table> {
    let contents = fs::read(path).map_err(StoreError::io(path))?;
    Ok(serde_json::from_slice(&contents)?)
}

/// Write a whole table to a JSON file, replacing it if it exists.
pub fn write_table_json(path: &Path, table: &Table) -> StoreResult<()> {
    let json = serde_json::to_vec_pretty(table)?;
    fs::write(path, json).map_err(StoreError::io(path))
}
