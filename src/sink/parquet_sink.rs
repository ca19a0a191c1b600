//! Parquet sink
//!
//! Builds a polars DataFrame with one typed column per field and writes it
//! in a single pass. An empty batch still writes the schema, and a write
//! that fails part way removes the file instead of leaving a truncated one.

use polars::prelude::{DataFrame, NamedFrom, ParquetWriter as PolarsParquetWriter, Series};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::TabularSink;
use crate::config::CompressionAlgorithm;
use crate::constants::COLUMNS;
use crate::error::{ExtractError, Result};
use crate::models::WeatherReading;

/// Parquet table writer for a single output file
#[derive(Debug)]
pub struct ParquetSink {
    output_path: PathBuf,
    compression: CompressionAlgorithm,
}

impl ParquetSink {
    /// Create a sink that will write to `output_path`
    pub fn new(output_path: impl Into<PathBuf>, compression: CompressionAlgorithm) -> Self {
        Self {
            output_path: output_path.into(),
            compression,
        }
    }

    fn sink_error(&self, reason: impl ToString) -> ExtractError {
        ExtractError::sink_unavailable(self.output_path.display().to_string(), reason)
    }
}

/// Convert readings into a DataFrame with the output column names
pub fn readings_to_frame(readings: &[WeatherReading]) -> polars::prelude::PolarsResult<DataFrame> {
    let dates: Vec<&str> = readings.iter().map(|r| r.date.as_str()).collect();
    let max_temps: Vec<f64> = readings.iter().map(|r| r.max_temperature).collect();
    let min_temps: Vec<f64> = readings.iter().map(|r| r.min_temperature).collect();
    let humidity: Vec<i64> = readings.iter().map(|r| r.humidity).collect();
    let precipitation: Vec<f64> = readings.iter().map(|r| r.precipitation).collect();

    DataFrame::new(vec![
        Series::new(COLUMNS[0].into(), dates).into(),
        Series::new(COLUMNS[1].into(), max_temps).into(),
        Series::new(COLUMNS[2].into(), min_temps).into(),
        Series::new(COLUMNS[3].into(), humidity).into(),
        Series::new(COLUMNS[4].into(), precipitation).into(),
    ])
}

impl TabularSink for ParquetSink {
    fn write_table(&mut self, readings: &[WeatherReading]) -> Result<usize> {
        let mut df = readings_to_frame(readings).map_err(|e| self.sink_error(e))?;

        let compression = self.compression.to_polars_compression();

        write_or_discard(&self.output_path, |file| {
            PolarsParquetWriter::new(file)
                .with_compression(compression)
                .finish(&mut df)
                .map_err(|e| format!("Failed to write parquet: {}", e))
        })?;

        debug!(
            "Wrote {} parquet rows to {}",
            df.height(),
            self.output_path.display()
        );

        Ok(readings.len())
    }
}

/// Create `path` and hand it to `write`; on failure the file is removed
fn write_or_discard<T, F>(path: &Path, write: F) -> Result<T>
where
    F: FnOnce(File) -> std::result::Result<T, String>,
{
    let target = path.display().to_string();
    let file = File::create(path).map_err(|e| ExtractError::sink_unavailable(&target, e))?;

    write(file).map_err(|reason| {
        if let Err(e) = std::fs::remove_file(path) {
            warn!("Could not remove partial output {}: {}", target, e);
        }
        ExtractError::sink_unavailable(target, reason)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{DataType, ParquetReader, SerReader};
    use std::io::Write;
    use tempfile::TempDir;

    fn sample_readings() -> Vec<WeatherReading> {
        vec![
            WeatherReading {
                date: "2024-07-01".to_string(),
                max_temperature: 32.5,
                min_temperature: 24.1,
                humidity: 68,
                precipitation: 0.0,
            },
            WeatherReading {
                date: "2024-07-02".to_string(),
                max_temperature: 29.0,
                min_temperature: 21.3,
                humidity: 80,
                precipitation: 12.4,
            },
        ]
    }

    fn read_back(path: &Path) -> DataFrame {
        let file = std::fs::File::open(path).unwrap();
        ParquetReader::new(file).finish().unwrap()
    }

    #[test]
    fn test_frame_columns_and_types() {
        let df = readings_to_frame(&sample_readings()).unwrap();

        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, COLUMNS.to_vec());
        assert_eq!(df.height(), 2);
        assert_eq!(
            df.dtypes(),
            vec![
                DataType::String,
                DataType::Float64,
                DataType::Float64,
                DataType::Int64,
                DataType::Float64,
            ]
        );
    }

    #[test]
    fn test_write_and_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("readings.parquet");

        let mut sink = ParquetSink::new(&path, CompressionAlgorithm::Snappy);
        assert_eq!(sink.write_table(&sample_readings()).unwrap(), 2);

        let df = read_back(&path);
        assert_eq!(df.height(), 2);

        let humidity = df
            .column("Humidity")
            .unwrap()
            .as_materialized_series()
            .i64()
            .unwrap()
            .get(1);
        assert_eq!(humidity, Some(80));

        let date = df
            .column("Date")
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap()
            .get(0)
            .map(|s| s.to_string());
        assert_eq!(date.as_deref(), Some("2024-07-01"));
    }

    #[test]
    fn test_empty_batch_writes_schema() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.parquet");

        let mut sink = ParquetSink::new(&path, CompressionAlgorithm::Uncompressed);
        assert_eq!(sink.write_table(&[]).unwrap(), 0);

        let df = read_back(&path);
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 5);
    }

    #[test]
    fn test_unwritable_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no-such-dir").join("out.parquet");

        let mut sink = ParquetSink::new(&path, CompressionAlgorithm::Zstd);
        assert!(matches!(
            sink.write_table(&sample_readings()),
            Err(ExtractError::SinkUnavailable { .. })
        ));
    }

    #[test]
    fn test_failed_write_removes_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("partial.parquet");

        let result: Result<()> = write_or_discard(&path, |mut file| {
            file.write_all(b"PAR1").unwrap();
            Err("disk full".to_string())
        });

        match result {
            Err(ExtractError::SinkUnavailable { reason, .. }) => assert_eq!(reason, "disk full"),
            other => panic!("Expected SinkUnavailable, got {:?}", other),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_successful_write_keeps_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kept.parquet");

        let written = write_or_discard(&path, |mut file| {
            file.write_all(b"PAR1").map_err(|e| e.to_string())?;
            Ok(4)
        })
        .unwrap();

        assert_eq!(written, 4);
        assert_eq!(std::fs::read(&path).unwrap(), b"PAR1");
    }
}
