//! CSV sink
//!
//! Writes the header of the row type followed by one record per row. Dates
//! are written verbatim, humidity as an integer and the other fields through
//! [`format_real`](super::format_real).

use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use super::{TableRow, TabularSink};
use crate::error::{ExtractError, Result};
use crate::models::WeatherReading;

/// CSV table writer over any `Write` target
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    target: String,
}

impl CsvSink<File> {
    /// Create (or truncate) a CSV file
    pub fn create(path: &Path) -> Result<Self> {
        let target = path.display().to_string();
        let writer = csv::Writer::from_path(path)
            .map_err(|e| ExtractError::sink_unavailable(&target, e))?;

        Ok(Self { writer, target })
    }
}

impl<W: Write> CsvSink<W> {
    /// Wrap an arbitrary writer; `target` names it in error messages
    pub fn from_writer(writer: W, target: impl Into<String>) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
            target: target.into(),
        }
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> Result<W> {
        let target = self.target;
        self.writer
            .into_inner()
            .map_err(|e| ExtractError::sink_unavailable(target, e.error()))
    }

    /// Write the header of `R` and then every row, returning the row count
    pub fn write_rows<R: TableRow>(&mut self, rows: &[R]) -> Result<usize> {
        self.writer
            .write_record(R::columns())
            .map_err(|e| ExtractError::sink_unavailable(&self.target, e))?;

        for row in rows {
            self.writer
                .write_record(row.to_record())
                .map_err(|e| ExtractError::sink_unavailable(&self.target, e))?;
        }

        self.writer
            .flush()
            .map_err(|e| ExtractError::sink_unavailable(&self.target, e))?;

        debug!("Wrote {} CSV rows to {}", rows.len(), self.target);
        Ok(rows.len())
    }
}

impl<W: Write> TabularSink for CsvSink<W> {
    fn write_table(&mut self, readings: &[WeatherReading]) -> Result<usize> {
        self.write_rows(readings)
    }
}
