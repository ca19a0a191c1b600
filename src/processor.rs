//! Source-to-sink processing for one weather report.
//!
//! Reads the whole report, extracts readings, then hands the batch to the
//! sink selected by configuration. Input is fully consumed before any output
//! file is created, so a source failure never leaves a partial table behind.
//! XML daily files take the same path with their own parser and are written
//! as CSV.

use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::{ExtractorConfig, InputFormat, OutputFormat};
use crate::error::{ExtractError, Result};
use crate::extractor::WeatherExtractor;
use crate::models::{ExtractionStats, ProcessingStats};
use crate::sink::{CsvSink, ParquetSink, TabularSink};
use crate::source::{open_report, read_daily_observations};

/// Runs extraction for a single input file
#[derive(Debug)]
pub struct ReportProcessor {
    input_path: PathBuf,
    input_format: InputFormat,
    output_path: PathBuf,
    config: ExtractorConfig,
    extractor: WeatherExtractor,
}

impl ReportProcessor {
    /// Create a processor; the output defaults to a file next to the input
    pub fn new(input_path: PathBuf, output_path: Option<PathBuf>) -> Result<Self> {
        if !input_path.is_file() {
            return Err(ExtractError::source_unavailable(
                input_path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "report file not found"),
            ));
        }

        let input_format = InputFormat::from_path(&input_path);
        let output_path = output_path
            .unwrap_or_else(|| input_path.with_file_name(input_format.default_output_file()));
        let config = ExtractorConfig::default();
        let extractor =
            WeatherExtractor::new()?.with_max_unmatched_samples(config.max_unmatched_samples);

        Ok(Self {
            input_path,
            input_format,
            output_path,
            config,
            extractor,
        })
    }

    /// Configure the processor
    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.extractor = self
            .extractor
            .with_max_unmatched_samples(config.max_unmatched_samples);
        self.config = config;
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn input_format(&self) -> InputFormat {
        self.input_format
    }

    /// Main processing entry point
    pub fn process(&self) -> Result<ProcessingStats> {
        let start_time = Instant::now();
        let output_format = self.config.resolve_format(&self.output_path);

        let (extraction, rows_written) = match self.input_format {
            InputFormat::Report => self.process_report(output_format)?,
            InputFormat::DailyXml => self.process_daily_xml(output_format)?,
        };

        info!(
            "Wrote {} rows to {} ({}), skipped {} lines",
            rows_written,
            self.output_path.display(),
            output_format,
            extraction.lines_skipped
        );

        Ok(ProcessingStats {
            input_path: self.input_path.clone(),
            input_format: self.input_format,
            output_path: self.output_path.clone(),
            output_format,
            extraction,
            rows_written,
            processing_time_ms: start_time.elapsed().as_millis(),
        })
    }

    fn process_report(&self, output_format: OutputFormat) -> Result<(ExtractionStats, usize)> {
        info!("Extracting weather readings from {}", self.input_path.display());

        let reader = open_report(&self.input_path)?;
        let result = self
            .extractor
            .extract_from_reader(reader, &self.input_path)?;

        if result.readings.is_empty() {
            warn!(
                "No readings found in {} ({} lines examined)",
                self.input_path.display(),
                result.stats.total_lines
            );
        }

        self.prepare_output_dir()?;

        let rows_written = match output_format {
            OutputFormat::Csv => {
                CsvSink::create(&self.output_path)?.write_table(&result.readings)?
            }
            OutputFormat::Parquet => {
                ParquetSink::new(&self.output_path, self.config.compression)
                    .write_table(&result.readings)?
            }
        };

        Ok((result.stats, rows_written))
    }

    fn process_daily_xml(&self, output_format: OutputFormat) -> Result<(ExtractionStats, usize)> {
        if output_format != OutputFormat::Csv {
            return Err(ExtractError::configuration(format!(
                "XML daily files are written as csv, not {}",
                output_format
            )));
        }

        info!("Parsing daily observations from {}", self.input_path.display());
        let days = read_daily_observations(&self.input_path)?;

        self.prepare_output_dir()?;
        let rows_written = CsvSink::create(&self.output_path)?.write_rows(&days)?;

        let extraction = ExtractionStats {
            total_lines: days.len(),
            readings_extracted: days.len(),
            ..ExtractionStats::default()
        };

        Ok((extraction, rows_written))
    }

    fn prepare_output_dir(&self) -> Result<()> {
        let Some(parent) = self.output_path.parent() else {
            return Ok(());
        };

        if parent.as_os_str().is_empty() || parent.exists() || !self.config.create_output_dirs {
            return Ok(());
        }

        debug!("Creating output directory {}", parent.display());
        std::fs::create_dir_all(parent)
            .map_err(|e| ExtractError::sink_unavailable(parent.display().to_string(), e))
    }
}
