//! Test utilities for the record extractor
//!
//! Sample report lines shared by the matching and batch test modules.


use super::WeatherExtractor;

/// A clean line in the standard report format
pub const CLEAN_LINE: &str =
    "Date: 2024-07-01, Max Temp: 32.5°C, Min Temp: 24.1°C, Humidity: 68%, Precipitation: 0.0mm";

/// The same reading with the degree signs double-encoded
pub const MOJIBAKE_LINE: &str =
    "Date: 2024-07-01, Max Temp: 32.5Â°C, Min Temp: 24.1Â°C, Humidity: 68%, Precipitation: 0.0mm";

/// Line with no reading in it
pub const NOISE_LINE: &str = "Random log noise, no weather here";

/// Build a report line from its field strings
pub fn report_line(date: &str, max: &str, min: &str, humidity: &str, precip: &str) -> String {
    format!(
        "Date: {}, Max Temp: {}°C, Min Temp: {}°C, Humidity: {}%, Precipitation: {}mm",
        date, max, min, humidity, precip
    )
}

pub fn extractor() -> WeatherExtractor {
    WeatherExtractor::new().unwrap()
}
