//! JSON output.
//!
//! Records are written as a pretty-printed array with a four-space indent.
//! Arabic titles and coverage values are kept as UTF-8 text rather than
//! `\u` escapes, so the file is readable as-is.

use super::output_path;
use crate::models::TopicRecord;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

/// Serialize records to pretty JSON bytes.
pub fn to_pretty_json(records: &[TopicRecord]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut ser)?;
    Ok(buf)
}

/// Write `trending_{date}.json` into `output_dir`.
///
/// # Arguments
///
/// * `records` - Annotated topics to serialize
/// * `output_dir` - Existing directory for the file
/// * `date` - Report day, used in the file name
///
/// # Returns
///
/// The path written, or `None` when `records` is empty and nothing was
/// written.
///
/// # Errors
///
/// Returns an error if serialization or the file write fails.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir.display(), %date))]
pub async fn write_records(
    records: &[TopicRecord],
    output_dir: &Path,
    date: NaiveDate,
) -> Result<Option<PathBuf>, Box<dyn Error>> {
    if records.is_empty() {
        info!("No data to save to JSON");
        return Ok(None);
    }

    let path = output_path(output_dir, date, "json");
    let json = to_pretty_json(records)?;

    info!(path = %path.display(), "Writing JSON");
    fs::write(&path, json).await?;
    info!(path = %path.display(), count = records.len(), "Wrote JSON file");

    Ok(Some(path))
}
