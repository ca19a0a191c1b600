//! Core data structures for weather report extraction.
//!
//! Defines the reading entity, the per-line outcome, extraction statistics
//! and the run summary returned by the processor.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{InputFormat, OutputFormat};

/// One parsed weather observation for a single date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Calendar date as it appeared in the source, `YYYY-MM-DD`
    pub date: String,
    /// Maximum temperature in degrees Celsius
    pub max_temperature: f64,
    /// Minimum temperature in degrees Celsius
    pub min_temperature: f64,
    /// Relative humidity in percent (range not enforced)
    pub humidity: i64,
    /// Precipitation in millimetres
    pub precipitation: f64,
}

/// One `<day>` element of an XML daily weather file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyObservation {
    /// Date text exactly as it appears in the file
    pub date: String,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: i64,
    /// Precipitation in millimetres
    pub precipitation: f64,
}

/// Result of testing one line against the reading grammar
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Matched(WeatherReading),
    /// Carries the text that was actually tested
    Unmatched(String),
}

impl LineOutcome {
    pub fn is_matched(&self) -> bool {
        matches!(self, LineOutcome::Matched(_))
    }

    pub fn into_reading(self) -> Option<WeatherReading> {
        match self {
            LineOutcome::Matched(reading) => Some(reading),
            LineOutcome::Unmatched(_) => None,
        }
    }
}

/// A line skipped during extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnmatchedLine {
    /// 1-based position in the input
    pub line_number: usize,
    pub text: String,
}

/// Extraction statistics for one batch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Number of lines examined
    pub total_lines: usize,

    /// Number of lines that produced a reading
    pub readings_extracted: usize,

    /// Number of lines skipped because they did not match
    pub lines_skipped: usize,

    /// Sample of skipped lines, capped by configuration
    pub unmatched_lines: Vec<UnmatchedLine>,
}

impl ExtractionStats {
    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.readings_extracted as f64 / self.total_lines as f64) * 100.0
        }
    }

    /// True when every line produced a reading
    pub fn is_complete(&self) -> bool {
        self.lines_skipped == 0
    }
}

/// Readings extracted from a batch of lines, in input order
#[derive(Debug, Clone, Default)]
pub struct ExtractionResult {
    pub readings: Vec<WeatherReading>,
    pub stats: ExtractionStats,
}

/// Summary of one source-to-sink run
#[derive(Debug)]
pub struct ProcessingStats {
    pub input_path: PathBuf,
    pub input_format: InputFormat,
    pub output_path: PathBuf,
    pub output_format: OutputFormat,
    pub extraction: ExtractionStats,
    pub rows_written: usize,
    pub processing_time_ms: u128,
}
