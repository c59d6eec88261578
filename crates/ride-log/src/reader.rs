//! Semicolon-separated Log Reader

use crate::columns::TIME_MS;
use crate::error::LogError;
use crate::table::{Column, SampleTable};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Field delimiter used by the controller's log export
pub const DELIMITER: u8 = b';';

/// Load a log file from disk
pub fn load_csv(path: &Path) -> Result<SampleTable, LogError> {
    let file = File::open(path)?;
    let table = read_csv(file)?;
    info!(
        "Loaded {} samples with {} columns from {}",
        table.len(),
        table.columns().len(),
        path.display()
    );
    Ok(table)
}

/// Parse a log from any reader.
///
/// The first column is the time index (device milliseconds); every other
/// column must be numeric. Empty fields become NaN.
pub fn read_csv<R: Read>(source: R) -> Result<SampleTable, LogError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let mut names = headers.iter();
    let index_name = match names.next() {
        Some("") => TIME_MS.to_string(),
        Some(name) => name.to_string(),
        None => return Err(LogError::MissingTimeColumn),
    };
    let names: Vec<String> = names.map(str::to_string).collect();
    debug!("Log header: index {:?}, columns {:?}", index_name, names);

    let mut time = Vec::new();
    let mut values: Vec<Vec<f64>> = vec![Vec::new(); names.len()];

    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let mut fields = record.iter();
        let raw_time = fields.next().unwrap_or("");
        time.push(parse_field(raw_time, &index_name, line)?);

        for (column, (name, field)) in names.iter().zip(fields).enumerate() {
            values[column].push(parse_field(field, name, line)?);
        }
    }

    let mut table = SampleTable::new(index_name, time)?;
    for (name, column) in names.into_iter().zip(values) {
        if table.has_column(&name) {
            warn!("Duplicate column {} in log header, keeping the last one", name);
        }
        table.insert_column(Column::new(name, column))?;
    }

    Ok(table)
}

fn parse_field(field: &str, column: &str, line: u64) -> Result<f64, LogError> {
    if field.is_empty() {
        return Ok(f64::NAN);
    }
    field.parse::<f64>().map_err(|_| LogError::InvalidNumber {
        line,
        column: column.to_string(),
        value: field.to_string(),
    })
}
