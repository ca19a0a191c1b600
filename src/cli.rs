//! Command-line interface components.

use crate::config::{CompressionAlgorithm, ExtractorConfig, InputFormat, OutputFormat};
use crate::models::ProcessingStats;
use clap::Parser;
use colored::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "weather_extractor")]
#[command(about = "Extract weather readings from free-text reports into CSV or Parquet")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the text report (one reading per line) or an XML daily file
    #[arg(value_name = "REPORT")]
    pub input_path: PathBuf,

    /// Output file (defaults to extracted_weather_data.csv, or parsed_weather_data.csv
    /// for XML input, next to the input)
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,

    /// Output format (csv, parquet); inferred from the output extension if omitted
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Parquet compression algorithm (snappy, zstd, lz4, none)
    #[arg(long, default_value = "snappy")]
    pub compression: CompressionAlgorithm,

    /// Maximum number of skipped lines listed in the summary
    #[arg(long, default_value_t = 10)]
    pub show_skipped: usize,

    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Build the run configuration from the arguments
    pub fn to_config(&self) -> ExtractorConfig {
        let config = ExtractorConfig::default()
            .with_compression(self.compression)
            .with_max_unmatched_samples(self.show_skipped);

        match self.format {
            Some(format) => config.with_output_format(format),
            None => config,
        }
    }

    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("weather_extractor={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Print the end-of-run summary
pub fn print_summary(stats: &ProcessingStats) {
    let extraction = &stats.extraction;
    let unit = match stats.input_format {
        InputFormat::Report => "lines",
        InputFormat::DailyXml => "days",
    };

    println!();
    println!("{}", "Extraction complete".bright_green().bold());
    println!(
        "  {} {}",
        "Input:".bright_white(),
        stats.input_path.display()
    );
    println!(
        "  {} {} ({})",
        "Output:".bright_white(),
        stats.output_path.display(),
        stats.output_format
    );
    println!(
        "  {} {} of {} {} ({:.1}%)",
        "Readings:".bright_white(),
        stats.rows_written.to_string().bright_cyan(),
        extraction.total_lines,
        unit,
        extraction.success_rate()
    );

    if extraction.lines_skipped > 0 {
        println!(
            "  {} {}",
            "Skipped:".bright_white(),
            extraction.lines_skipped.to_string().bright_yellow()
        );
        for line in &extraction.unmatched_lines {
            println!(
                "    {} {}",
                format!("line {}:", line.line_number).bright_black(),
                line.text
            );
        }
        let hidden = extraction.lines_skipped - extraction.unmatched_lines.len();
        if hidden > 0 {
            println!("    {}", format!("... and {} more", hidden).bright_black());
        }
    }

    println!(
        "  {} {} ms",
        "Time:".bright_white(),
        stats.processing_time_ms
    );
}
