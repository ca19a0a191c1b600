use anyhow::Context;
use clap::Parser;
use std::process;
use weather_extractor::ReportProcessor;
use weather_extractor::cli::{self, Args};

fn main() {
    let args = Args::parse();
    cli::setup_logging(&args);

    match run(&args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let processor = ReportProcessor::new(args.input_path.clone(), args.output_path.clone())
        .context("Failed to open weather report")?
        .with_config(args.to_config());

    let stats = processor.process().with_context(|| {
        format!(
            "Failed to extract readings from {}",
            args.input_path.display()
        )
    })?;

    if !args.quiet {
        cli::print_summary(&stats);
    }

    Ok(())
}
