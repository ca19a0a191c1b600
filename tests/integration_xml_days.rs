//! End-to-end tests: XML daily file in, CSV table out

use std::fs;
use tempfile::TempDir;
use weather_extractor::config::{ExtractorConfig, InputFormat, OutputFormat};
use weather_extractor::{ExtractError, ReportProcessor};

const WEATHER_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<weather>
    <day>
        <date>2024-01-01</date>
        <temperature>5.5</temperature>
        <humidity>80</humidity>
        <precipitation>1.2</precipitation>
    </day>
    <day>
        <date>2024-01-02</date>
        <temperature>-3</temperature>
        <humidity>65</humidity>
        <precipitation>0.0</precipitation>
    </day>
    <day>
        <date>2024-01-03</date>
        <temperature>0.25</temperature>
        <humidity>91</humidity>
        <precipitation>7</precipitation>
    </day>
</weather>"#;

fn write_xml(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("weather_data.xml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_xml_to_default_csv() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_xml(&temp_dir, WEATHER_XML);

    let processor = ReportProcessor::new(input, None).unwrap();
    assert_eq!(processor.input_format(), InputFormat::DailyXml);

    let stats = processor.process().unwrap();
    let expected = temp_dir.path().join("parsed_weather_data.csv");
    assert_eq!(stats.output_path, expected);
    assert_eq!(stats.input_format, InputFormat::DailyXml);
    assert_eq!(stats.output_format, OutputFormat::Csv);
    assert_eq!(stats.rows_written, 3);
    assert!(stats.extraction.is_complete());

    let content = fs::read_to_string(&expected).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Date,Temperature,Humidity,Precipitation",
            "2024-01-01,5.5,80,1.2",
            "2024-01-02,-3.0,65,0.0",
            "2024-01-03,0.25,91,7.0",
        ]
    );
}

#[test]
fn test_malformed_day_leaves_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let xml = WEATHER_XML.replace("<humidity>65</humidity>", "");
    let input = write_xml(&temp_dir, &xml);
    let output = temp_dir.path().join("days.csv");

    let processor = ReportProcessor::new(input, Some(output.clone())).unwrap();
    let error = processor.process().unwrap_err();

    match &error {
        ExtractError::MalformedSource { reason, .. } => {
            assert_eq!(reason, "day 2: missing <humidity>");
        }
        other => panic!("Expected MalformedSource, got {:?}", other),
    }
    assert!(error.is_source_error());
    assert!(!output.exists());
}

#[test]
fn test_xml_to_parquet_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_xml(&temp_dir, WEATHER_XML);
    let output = temp_dir.path().join("days.parquet");

    let processor = ReportProcessor::new(input, Some(output.clone()))
        .unwrap()
        .with_config(ExtractorConfig::default().with_output_format(OutputFormat::Parquet));

    assert!(matches!(
        processor.process(),
        Err(ExtractError::Configuration { .. })
    ));
    assert!(!output.exists());
}
