//! Weather Extractor Library
//!
//! Turns free-text weather reports into typed readings and writes them as
//! tables.
//!
//! This library provides tools for:
//! - Repairing the double-encoding artifact found in exported reports
//! - Matching report lines and recovering date, temperatures, humidity and
//!   precipitation with their numeric types
//! - Skipping and reporting lines that do not conform without aborting
//! - Writing the readings to CSV or Parquet
//! - Parsing XML daily observation files into the same CSV tables

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod extractor;
pub mod models;
pub mod processor;
pub mod sink;
pub mod source;

// Re-export commonly used types
pub use config::ExtractorConfig;
pub use error::{ExtractError, Result};
pub use extractor::{WeatherExtractor, normalize};
pub use models::{
    DailyObservation, ExtractionResult, ExtractionStats, LineOutcome, WeatherReading,
};
pub use processor::ReportProcessor;
pub use sink::{TableRow, TabularSink};
