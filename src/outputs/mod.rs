//! Output writers for the annotated topic list.
//!
//! - [`json`]: pretty-printed JSON array of records
//! - [`csv`]: spreadsheet-friendly CSV with a header row
//!
//! Both write into the output directory and name files after the report day:
//!
//! ```text
//! output_dir/
//! ├── trending_2024-01-15.json
//! └── trending_2024-01-15.csv
//! ```
//!
//! An empty record list writes nothing.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

pub mod csv;
pub mod json;

/// `{dir}/trending_{date}.{extension}`
pub fn output_path(dir: &Path, date: NaiveDate, extension: &str) -> PathBuf {
    dir.join(format!("trending_{}.{}", date.format("%Y-%m-%d"), extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(
            output_path(Path::new("/tmp/out"), date, "json"),
            PathBuf::from("/tmp/out/trending_2024-01-05.json")
        );
    }
}
