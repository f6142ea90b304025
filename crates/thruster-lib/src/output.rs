//! Tabular writers for sweep results.
//!
//! CSV tables always start with the family's header row, so an empty sweep
//! still produces a file with the expected columns.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use serde::Serialize;
use tracing::info;

use crate::device::ThrusterFamily;
use crate::error::Result;
use crate::record::PerformanceTable;

/// Default file name of a family's CSV table, e.g. `ion_sweep.csv`.
pub fn default_file_name(family: ThrusterFamily) -> String {
    format!("{}_sweep.csv", family.slug())
}

/// Write a table as CSV.
pub fn write_csv<W: Write>(table: &PerformanceTable, writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv_writer.write_record(table.columns())?;
    match table {
        PerformanceTable::Ion(rows) => serialize_rows(&mut csv_writer, rows)?,
        PerformanceTable::Hall(rows) => serialize_rows(&mut csv_writer, rows)?,
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write a table as a pretty-printed JSON array of records.
pub fn write_json<W: Write>(table: &PerformanceTable, writer: W) -> Result<()> {
    match table {
        PerformanceTable::Ion(rows) => serde_json::to_writer_pretty(writer, rows)?,
        PerformanceTable::Hall(rows) => serde_json::to_writer_pretty(writer, rows)?,
    }
    Ok(())
}

/// Write a table as CSV to `path`, creating parent directories as needed.
pub fn write_csv_file(table: &PerformanceTable, path: &Path) -> Result<PathBuf> {
    let file = create_file(path)?;
    write_csv(table, file)?;
    info!(family = %table.family(), rows = table.len(), path = %path.display(), "wrote table");
    Ok(path.to_path_buf())
}

/// Write a table as JSON to `path`, creating parent directories as needed.
pub fn write_json_file(table: &PerformanceTable, path: &Path) -> Result<PathBuf> {
    let file = create_file(path)?;
    write_json(table, file)?;
    info!(family = %table.family(), rows = table.len(), path = %path.display(), "wrote table");
    Ok(path.to_path_buf())
}

fn serialize_rows<W: Write, T: Serialize>(writer: &mut csv::Writer<W>, rows: &[T]) -> Result<()> {
    for row in rows {
        writer.serialize(row)?;
    }
    Ok(())
}

fn create_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(fs::File::create(path)?)
}
