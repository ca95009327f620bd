//! HTML chart page writer.

use super::{ensure_parent_dir, validate_path};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write an HTML page to a file
///
/// **Public** - main entry point for page output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_html(html: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing treemap page to: {}", output_path.display());

    validate_path(output_path)?;
    if output_path.extension().is_some_and(|ext| ext != "html" && ext != "htm") {
        debug!("Warning: File does not have .html extension: {}", output_path.display());
    }
    ensure_parent_dir(output_path)?;

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(html.as_bytes())?;
    writer.flush()?;

    info!(
        "Treemap page written successfully ({} bytes, {:.2} KB)",
        html.len(),
        html.len() as f64 / 1024.0
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    const PAGE: &str = "<!DOCTYPE html>\n<html><body></body></html>\n";

    #[test]
    fn test_write_html() {
        let temp_file = NamedTempFile::new().unwrap();

        write_html(PAGE, temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(content, PAGE);
    }

    #[test]
    fn test_write_html_directory_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = write_html(PAGE, temp_dir.path());
        assert!(matches!(result, Err(OutputError::InvalidPath(_))));
    }
}
