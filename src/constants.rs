//! Fixed strings shared across the extractor, sinks and CLI.

/// Pattern for one weather reading inside a line of free text.
///
/// Capture groups: date, max temperature, min temperature, humidity,
/// precipitation. Numeric groups only admit strings that parse as Rust
/// floats, and digits are ASCII so non-Latin digits never reach `parse`.
pub const READING_PATTERN: &str = concat!(
    r"Date: ([0-9]{4}-[0-9]{2}-[0-9]{2}), ",
    r"Max Temp: ([0-9]+\.?[0-9]*|\.[0-9]+)°C, ",
    r"Min Temp: ([0-9]+\.?[0-9]*|\.[0-9]+)°C, ",
    r"Humidity: ([0-9]+)%?, ",
    r"Precipitation: ([0-9]+\.?[0-9]*|\.[0-9]+)mm",
);

/// Stray character left by decoding UTF-8 `\u{a0}`/`°` as Latin-1.
pub const ENCODING_ARTIFACT: char = '\u{00C2}';

/// Output column names, in order.
pub const COLUMNS: [&str; 5] = [
    "Date",
    "Max Temperature",
    "Min Temperature",
    "Humidity",
    "Precipitation",
];

/// Column names for daily observations read from XML, in order.
pub const DAILY_COLUMNS: [&str; 4] = ["Date", "Temperature", "Humidity", "Precipitation"];

/// Output file used when the caller does not name one
pub const DEFAULT_OUTPUT_FILE: &str = "extracted_weather_data.csv";

/// Output file used for XML input when the caller does not name one
pub const DEFAULT_DAILY_OUTPUT_FILE: &str = "parsed_weather_data.csv";

/// Default number of unmatched lines kept in run statistics
pub const DEFAULT_MAX_UNMATCHED_SAMPLES: usize = 100;
