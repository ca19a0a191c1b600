//! Record extraction from free-text weather reports
//!
//! Each line is normalized, tested against the reading pattern and turned
//! into a [`WeatherReading`] when every field is present. Lines that do not
//! match are skipped and reported; they never stop a batch.
//!
//! ## Components
//!
//! - [`normalizer`] - removal of the known encoding artifact
//! - [`WeatherExtractor`] - owns the compiled pattern, classifies lines and
//!   runs batches
//!
//! ## Usage
//!
//! ```rust
//! use weather_extractor::extractor::WeatherExtractor;
//!
//! let extractor = WeatherExtractor::new()?;
//! let result = extractor.extract_all([
//!     "Date: 2024-07-01, Max Temp: 32.5°C, Min Temp: 24.1°C, Humidity: 68%, Precipitation: 0.0mm",
//!     "Random log noise, no weather here",
//! ]);
//!
//! assert_eq!(result.readings.len(), 1);
//! assert_eq!(result.stats.lines_skipped, 1);
//! # Ok::<(), weather_extractor::ExtractError>(())
//! ```

pub mod normalizer;

#[cfg(test)]
pub mod tests;

pub use normalizer::normalize;

use regex::{Captures, Regex};
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, warn};

use crate::constants::{DEFAULT_MAX_UNMATCHED_SAMPLES, READING_PATTERN};
use crate::error::{ExtractError, Result};
use crate::models::{ExtractionResult, LineOutcome, UnmatchedLine, WeatherReading};

/// Line-oriented weather reading extractor
///
/// The pattern is compiled once at construction and reused for every line.
#[derive(Debug, Clone)]
pub struct WeatherExtractor {
    pattern: Regex,
    max_unmatched_samples: usize,
}

impl WeatherExtractor {
    /// Create an extractor for the standard report format
    pub fn new() -> Result<Self> {
        Self::with_pattern(READING_PATTERN)
    }

    /// Create an extractor from a custom pattern
    ///
    /// The pattern must expose five capture groups in the order date, max
    /// temperature, min temperature, humidity, precipitation.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)?;

        // Group 0 is the whole match
        if pattern.captures_len() != 6 {
            return Err(ExtractError::configuration(format!(
                "Reading pattern must have 5 capture groups, found {}",
                pattern.captures_len() - 1
            )));
        }

        Ok(Self {
            pattern,
            max_unmatched_samples: DEFAULT_MAX_UNMATCHED_SAMPLES,
        })
    }

    /// Limit how many skipped lines are kept in batch statistics
    pub fn with_max_unmatched_samples(mut self, max: usize) -> Self {
        self.max_unmatched_samples = max;
        self
    }

    /// Extract a reading from an already normalized line
    pub fn extract(&self, line: &str) -> Option<WeatherReading> {
        let captures = self.pattern.captures(line)?;
        build_reading(&captures)
    }

    /// Normalize a line and classify it as matched or unmatched
    pub fn classify(&self, line: &str) -> LineOutcome {
        let cleaned = normalize(line);
        let cleaned = cleaned.trim_end_matches(['\r', '\n']);

        match self.extract(cleaned) {
            Some(reading) => LineOutcome::Matched(reading),
            None => LineOutcome::Unmatched(cleaned.to_string()),
        }
    }

    /// Run extraction over a sequence of lines
    ///
    /// Output keeps the relative order of the matching lines.
    pub fn extract_all<I, S>(&self, lines: I) -> ExtractionResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = ExtractionResult::default();

        for line in lines {
            self.accept(line.as_ref(), &mut result);
        }

        debug!(
            "Extracted {} readings from {} lines",
            result.stats.readings_extracted, result.stats.total_lines
        );

        result
    }

    /// Run extraction over a buffered reader
    ///
    /// Read and decoding failures abort the batch with `SourceUnavailable`
    /// attributed to `origin`.
    pub fn extract_from_reader<R: BufRead>(
        &self,
        reader: R,
        origin: &Path,
    ) -> Result<ExtractionResult> {
        let mut result = ExtractionResult::default();

        for line in reader.lines() {
            let line = line.map_err(|e| ExtractError::source_unavailable(origin, e))?;
            self.accept(&line, &mut result);
        }

        debug!(
            "Extracted {} readings from {} lines of {}",
            result.stats.readings_extracted,
            result.stats.total_lines,
            origin.display()
        );

        Ok(result)
    }

    fn accept(&self, line: &str, result: &mut ExtractionResult) {
        let stats = &mut result.stats;
        stats.total_lines += 1;

        match self.classify(line) {
            LineOutcome::Matched(reading) => {
                result.readings.push(reading);
                stats.readings_extracted += 1;
            }
            LineOutcome::Unmatched(text) => {
                warn!("No match found for line {}: {}", stats.total_lines, text);
                stats.lines_skipped += 1;
                if stats.unmatched_lines.len() < self.max_unmatched_samples {
                    stats.unmatched_lines.push(UnmatchedLine {
                        line_number: stats.total_lines,
                        text,
                    });
                }
            }
        }
    }
}

/// Build a reading from a full match, rejecting any field that fails to convert
fn build_reading(captures: &Captures<'_>) -> Option<WeatherReading> {
    let field = |index: usize| captures.get(index).map(|m| m.as_str());

    Some(WeatherReading {
        date: field(1)?.to_string(),
        max_temperature: field(2)?.parse().ok()?,
        min_temperature: field(3)?.parse().ok()?,
        humidity: field(4)?.parse().ok()?,
        precipitation: field(5)?.parse().ok()?,
    })
}
