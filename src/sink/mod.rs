//! Tabular sinks for extracted readings
//!
//! A sink receives the whole batch of readings and persists it as one header
//! plus one row per reading, in the order given. The extractor does not know
//! which backend it is feeding.
//!
//! - [`csv_sink`] - delimited text to any writer
//! - [`parquet_sink`] - typed columns in a Parquet file via polars

pub mod csv_sink;
pub mod parquet_sink;

pub use csv_sink::CsvSink;
pub use parquet_sink::ParquetSink;

use crate::constants::{COLUMNS, DAILY_COLUMNS};
use crate::error::Result;
use crate::models::{DailyObservation, WeatherReading};

/// A record laid out as one row of a delimited table
pub trait TableRow {
    /// Header names, in column order
    fn columns() -> &'static [&'static str];

    /// Field values in column order
    fn to_record(&self) -> Vec<String>;
}

impl TableRow for WeatherReading {
    fn columns() -> &'static [&'static str] {
        &COLUMNS
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            format_real(self.max_temperature),
            format_real(self.min_temperature),
            self.humidity.to_string(),
            format_real(self.precipitation),
        ]
    }
}

impl TableRow for DailyObservation {
    fn columns() -> &'static [&'static str] {
        &DAILY_COLUMNS
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            format_real(self.temperature),
            self.humidity.to_string(),
            format_real(self.precipitation),
        ]
    }
}

/// Consumer of a header + rows table of readings
pub trait TabularSink {
    /// Write all readings, returning the number of data rows written
    ///
    /// An empty slice still produces the header.
    fn write_table(&mut self, readings: &[WeatherReading]) -> Result<usize>;
}

/// Render a real number in shortest round-trip form with at least one
/// fractional digit, so `0` is written as `0.0`
pub fn format_real(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_real() {
        assert_eq!(format_real(0.0), "0.0");
        assert_eq!(format_real(32.5), "32.5");
        assert_eq!(format_real(24.1), "24.1");
        assert_eq!(format_real(5.0), "5.0");
        assert_eq!(format_real(0.125), "0.125");
    }

    #[test]
    fn test_daily_observation_record() {
        let day = DailyObservation {
            date: "2024-01-01".to_string(),
            temperature: 5.0,
            humidity: 80,
            precipitation: 1.25,
        };

        assert_eq!(
            DailyObservation::columns(),
            ["Date", "Temperature", "Humidity", "Precipitation"]
        );
        assert_eq!(day.to_record(), vec!["2024-01-01", "5.0", "80", "1.25"]);
    }
}
