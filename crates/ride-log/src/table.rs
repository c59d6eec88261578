//! Sample Table Implementation

use crate::error::LogError;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A named numeric column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    values: Vec<f64>,
}

impl Column {
    /// Create a column from a name and values
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Column name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column values
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Ordered time series of controller samples.
///
/// Rows are keyed by a non-decreasing time index. Every column has exactly
/// one value per row; missing readings are stored as NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleTable {
    index_name: String,
    time: Vec<f64>,
    columns: Vec<Column>,
}

impl SampleTable {
    /// Create a table with the given time index and no columns
    pub fn new(index_name: impl Into<String>, time: Vec<f64>) -> Result<Self, LogError> {
        check_monotonic(&time)?;
        Ok(Self {
            index_name: index_name.into(),
            time,
            columns: Vec::new(),
        })
    }

    /// Return the table with `name` set to `values`, replacing any existing
    /// column of the same name
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<Self, LogError> {
        self.insert_column(Column::new(name, values))?;
        Ok(self)
    }

    pub(crate) fn insert_column(&mut self, column: Column) -> Result<(), LogError> {
        if column.values.len() != self.time.len() {
            return Err(LogError::LengthMismatch {
                column: column.name,
                expected: self.time.len(),
                actual: column.values.len(),
            });
        }

        match self.columns.iter_mut().find(|c| c.name == column.name) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
        Ok(())
    }

    /// Return a copy of the table with a new time index
    pub fn with_time(
        &self,
        index_name: impl Into<String>,
        time: Vec<f64>,
    ) -> Result<Self, LogError> {
        if time.len() != self.time.len() {
            return Err(LogError::LengthMismatch {
                column: index_name.into(),
                expected: self.time.len(),
                actual: time.len(),
            });
        }
        check_monotonic(&time)?;
        Ok(Self {
            index_name: index_name.into(),
            time,
            columns: self.columns.clone(),
        })
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Name of the time index
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// Time index values
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// All columns in insertion order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Check whether a column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Result<&[f64], LogError> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
            .ok_or_else(|| LogError::MissingColumn(name.to_string()))
    }

    /// Copy of the rows in `rows`
    pub fn slice_rows(&self, rows: Range<usize>) -> Self {
        let end = rows.end.min(self.len());
        let start = rows.start.min(end);
        Self {
            index_name: self.index_name.clone(),
            time: self.time[start..end].to_vec(),
            columns: self
                .columns
                .iter()
                .map(|c| Column::new(c.name.clone(), c.values[start..end].to_vec()))
                .collect(),
        }
    }

    /// Copy of the rows whose time key lies in `[start, end]`
    pub fn slice_by_time(&self, start: f64, end: f64) -> Self {
        let first = self.time.partition_point(|&t| t < start);
        let last = self.time.partition_point(|&t| t <= end);
        self.slice_rows(first..last.max(first))
    }
}

fn check_monotonic(time: &[f64]) -> Result<(), LogError> {
    for (row, pair) in time.windows(2).enumerate() {
        // NaN keys fail this comparison too
        if !(pair[1] >= pair[0]) {
            return Err(LogError::NonMonotonicTime {
                row: row + 1,
                previous: pair[0],
                current: pair[1],
            });
        }
    }
    Ok(())
}
