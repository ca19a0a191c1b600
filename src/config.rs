//! Configuration for extraction runs.
//!
//! Covers output format selection, Parquet compression and how much
//! diagnostic detail is retained in run statistics.

use crate::constants::{
    DEFAULT_DAILY_OUTPUT_FILE, DEFAULT_MAX_UNMATCHED_SAMPLES, DEFAULT_OUTPUT_FILE,
};
use crate::error::{ExtractError, Result};
use polars::prelude::ParquetCompression;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Kinds of input file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputFormat {
    /// Free-text report, one reading per line
    Report,
    /// XML document of `<day>` elements
    DailyXml,
}

impl InputFormat {
    /// Detect the input kind from a file extension; anything but `.xml` is a report
    pub fn from_path(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("xml") => InputFormat::DailyXml,
            _ => InputFormat::Report,
        }
    }

    /// File name used for output when none is given
    pub fn default_output_file(&self) -> &'static str {
        match self {
            InputFormat::Report => DEFAULT_OUTPUT_FILE,
            InputFormat::DailyXml => DEFAULT_DAILY_OUTPUT_FILE,
        }
    }
}

/// Tabular output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Csv,
    Parquet,
}

impl OutputFormat {
    /// Detect the output format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_string_lossy().to_lowercase();

        match extension.as_str() {
            "csv" => Some(OutputFormat::Csv),
            "parquet" | "pq" => Some(OutputFormat::Parquet),
            _ => None,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "parquet" | "pq" => Ok(OutputFormat::Parquet),
            other => Err(ExtractError::configuration(format!(
                "Unknown output format '{}' (expected csv or parquet)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Parquet => write!(f, "parquet"),
        }
    }
}

/// Supported compression algorithms for parquet files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompressionAlgorithm {
    /// Snappy compression - good balance of speed and compression
    Snappy,
    /// ZSTD compression - better compression ratio, slower
    Zstd,
    /// LZ4 compression - fastest, lower compression ratio
    Lz4,
    /// No compression
    Uncompressed,
}

impl CompressionAlgorithm {
    /// Convert to polars ParquetCompression type
    pub fn to_polars_compression(&self) -> ParquetCompression {
        match self {
            CompressionAlgorithm::Snappy => ParquetCompression::Snappy,
            CompressionAlgorithm::Zstd => ParquetCompression::Zstd(None),
            CompressionAlgorithm::Lz4 => ParquetCompression::Lz4Raw,
            CompressionAlgorithm::Uncompressed => ParquetCompression::Uncompressed,
        }
    }
}

impl FromStr for CompressionAlgorithm {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "snappy" => Ok(CompressionAlgorithm::Snappy),
            "zstd" => Ok(CompressionAlgorithm::Zstd),
            "lz4" => Ok(CompressionAlgorithm::Lz4),
            "none" | "uncompressed" => Ok(CompressionAlgorithm::Uncompressed),
            other => Err(ExtractError::configuration(format!(
                "Unknown compression '{}' (expected snappy, zstd, lz4 or none)",
                other
            ))),
        }
    }
}

/// Settings for a single extraction run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Explicit output format; inferred from the output path when `None`
    pub output_format: Option<OutputFormat>,

    /// Compression used by the Parquet sink
    pub compression: CompressionAlgorithm,

    /// Maximum number of unmatched lines retained in statistics
    pub max_unmatched_samples: usize,

    /// Create missing parent directories of the output file
    pub create_output_dirs: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            output_format: None,
            compression: CompressionAlgorithm::Snappy,
            max_unmatched_samples: DEFAULT_MAX_UNMATCHED_SAMPLES,
            create_output_dirs: true,
        }
    }
}

impl ExtractorConfig {
    /// Force a specific output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    /// Set the Parquet compression algorithm
    pub fn with_compression(mut self, compression: CompressionAlgorithm) -> Self {
        self.compression = compression;
        self
    }

    /// Set how many unmatched lines are kept in statistics
    pub fn with_max_unmatched_samples(mut self, max: usize) -> Self {
        self.max_unmatched_samples = max;
        self
    }

    /// Fail instead of creating missing output directories
    pub fn without_output_dirs(mut self) -> Self {
        self.create_output_dirs = false;
        self
    }

    /// Resolve the output format for a path, defaulting to CSV
    pub fn resolve_format(&self, output_path: &Path) -> OutputFormat {
        self.output_format
            .or_else(|| OutputFormat::from_path(output_path))
            .unwrap_or(OutputFormat::Csv)
    }
}
