//! Input sources: line-oriented text reports and XML daily files.

pub mod xml_days;

pub use xml_days::{parse_daily_observations, read_daily_observations};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use crate::error::{ExtractError, Result};

/// Open a report file for line-by-line reading
pub fn open_report(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| ExtractError::source_unavailable(path, e))?;
    debug!("Opened report {}", path.display());
    Ok(BufReader::new(file))
}
