//! Semicolon-separated Log Writer

use crate::error::LogError;
use crate::reader::DELIMITER;
use crate::table::SampleTable;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write a table to disk in the same layout the reader accepts
pub fn save_csv(table: &SampleTable, path: &Path) -> Result<(), LogError> {
    let file = File::create(path)?;
    write_csv(table, file)?;
    info!("Wrote {} samples to {}", table.len(), path.display());
    Ok(())
}

/// Write a table to any writer. NaN values are written as empty fields.
pub fn write_csv<W: Write>(table: &SampleTable, sink: W) -> Result<(), LogError> {
    let mut writer = WriterBuilder::new().delimiter(DELIMITER).from_writer(sink);

    let mut header = vec![table.index_name()];
    header.extend(table.column_names());
    writer.write_record(&header)?;

    let mut row = Vec::with_capacity(header.len());
    for (i, time) in table.time().iter().enumerate() {
        row.clear();
        row.push(format_value(*time));
        for column in table.columns() {
            row.push(format_value(column.values()[i]));
        }
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

fn format_value(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_header_and_rows() {
        let table = SampleTable::new("time_sec", vec![0.0, 0.5])
            .unwrap()
            .with_column("speed", vec![1.25, f64::NAN])
            .unwrap();

        let mut out = Vec::new();
        write_csv(&table, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "time_sec;speed\n0;1.25\n0.5;\n");
    }
}
