//! Daily observations from XML weather files
//!
//! The root element holds `<day>` elements, each with `date`,
//! `temperature`, `humidity` and `precipitation` children. Other elements
//! are ignored. Unlike report lines, a day with a missing child or a value
//! that does not parse fails the whole file.

use roxmltree::{Document, Node};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::error::{ExtractError, Result};
use crate::models::DailyObservation;

/// Read and parse an XML daily weather file
pub fn read_daily_observations(path: &Path) -> Result<Vec<DailyObservation>> {
    let xml = fs::read_to_string(path).map_err(|e| ExtractError::source_unavailable(path, e))?;
    let days = parse_daily_observations(&xml, path)?;

    debug!("Read {} days from {}", days.len(), path.display());
    Ok(days)
}

/// Parse XML text; `origin` names the document in errors
pub fn parse_daily_observations(xml: &str, origin: &Path) -> Result<Vec<DailyObservation>> {
    let document = Document::parse(xml).map_err(|e| ExtractError::malformed_source(origin, e))?;

    document
        .root_element()
        .children()
        .filter(|node| node.has_tag_name("day"))
        .enumerate()
        .map(|(index, day)| {
            read_day(day).map_err(|reason| {
                ExtractError::malformed_source(origin, format!("day {}: {}", index + 1, reason))
            })
        })
        .collect()
}

fn read_day(day: Node<'_, '_>) -> std::result::Result<DailyObservation, String> {
    Ok(DailyObservation {
        date: child_text(day, "date")?.to_string(),
        temperature: parse_child(day, "temperature")?,
        humidity: parse_child(day, "humidity")?,
        precipitation: parse_child(day, "precipitation")?,
    })
}

/// Trimmed text of the first child element called `name`
fn child_text<'a>(day: Node<'a, '_>, name: &str) -> std::result::Result<&'a str, String> {
    let child = day
        .children()
        .find(|node| node.has_tag_name(name))
        .ok_or_else(|| format!("missing <{}>", name))?;

    child
        .text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| format!("empty <{}>", name))
}

fn parse_child<T: FromStr>(day: Node<'_, '_>, name: &str) -> std::result::Result<T, String> {
    let text = child_text(day, name)?;
    text.parse()
        .map_err(|_| format!("<{}> is not a number: {:?}", name, text))
}
