//! JSON share report writer.
//!
//! Writes ShareReport structs to JSON files with proper formatting.

use super::schema::ShareReport;
use super::{ensure_parent_dir, validate_path};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &ShareReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing share report to: {}", output_path.display());

    validate_path(output_path)?;
    ensure_parent_dir(output_path)?;

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;

    info!(
        "Share report written successfully ({} bytes)",
        std::fs::metadata(output_path).map(|m| m.len()).unwrap_or(0)
    );

    Ok(())
}

/// Read a report from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<ShareReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading share report from: {}", input_path.display());

    let file = File::open(input_path)?;
    let report: ShareReport = serde_json::from_reader(file)?;

    debug!(
        "Report loaded: version {}, root {}",
        report.version, report.root
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::CategoryShare;
    use tempfile::NamedTempFile;

    fn create_test_report() -> ShareReport {
        ShareReport {
            version: "1.0.0".to_string(),
            root: "All".to_string(),
            total: 1000.0,
            categories: vec![CategoryShare {
                name: "Food".to_string(),
                total: 1000.0,
                percentage: 100.0,
                items: 2,
            }],
            generated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_write_and_read_report() {
        let report = create_test_report();
        let temp_file = NamedTempFile::new().unwrap();

        write_report(&report, temp_file.path()).unwrap();
        let loaded = read_report(temp_file.path()).unwrap();

        assert_eq!(loaded, report);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/totals.json");

        write_report(&create_test_report(), &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_write_report_surfaces_flush_failure() {
        // Writes to /dev/full succeed into the buffer and fail on flush
        let result = write_report(&create_test_report(), "/dev/full");
        assert!(matches!(result, Err(OutputError::WriteFailed(_))));
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = read_report(temp_dir.path().join("missing.json"));
        assert!(matches!(result, Err(OutputError::WriteFailed(_))));
    }
}
