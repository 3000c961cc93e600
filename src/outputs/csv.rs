//! CSV output.
//!
//! The file starts with a UTF-8 byte-order mark. Without it, Excel and most
//! spreadsheet tools open the file in a legacy code page and the Arabic
//! titles come out garbled.

use super::output_path;
use crate::models::TopicRecord;
use chrono::NaiveDate;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Serialize records to CSV bytes: BOM, header row, one line per record.
pub fn to_csv_bytes(records: &[TopicRecord]) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut buf = UTF8_BOM.to_vec();
    {
        let mut writer = ::csv::Writer::from_writer(&mut buf);
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
    }
    Ok(buf)
}

/// Write `trending_{date}.csv` into `output_dir`.
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
        info!("No data to export to CSV");
        return Ok(None);
    }

    let path = output_path(output_dir, date, "csv");
    let bytes = to_csv_bytes(records)?;

    info!(path = %path.display(), "Exporting CSV");
    fs::write(&path, bytes).await?;
    info!(path = %path.display(), count = records.len(), "Wrote CSV file");

    Ok(Some(path))
}
