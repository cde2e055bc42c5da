//! File system helpers for the application: checking the matrix path before
//! loading and writing the exported DOT text.

use std::fs::OpenOptions;
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;

use super::error::AppError;
use super::verbose_eprintln;

/// Checks that `matrix_path` exists and is a regular file.
///
/// # Errors
/// Returns `AppError::InvalidPath` when it is missing or not a file.
pub fn validate_matrix_file(matrix_path: &Path, quiet_mode: bool) -> Result<(), AppError> {
    if !matrix_path.exists() {
        let error_msg = format!("File not found: {}", matrix_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    if !matrix_path.is_file() {
        let error_msg = format!("Path is not a file: {}", matrix_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    Ok(())
}

/// Writes `content` to `file_path`, creating or truncating it.
pub fn write_content_to_file(file_path: &Path, content: &str) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_matrix_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        assert!(matches!(
            validate_matrix_file(&missing, true),
            Err(AppError::InvalidPath(_))
        ));
        assert!(matches!(
            validate_matrix_file(dir.path(), true),
            Err(AppError::InvalidPath(_))
        ));
    }

    #[test]
    fn write_truncates_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.dot");
        write_content_to_file(&path, "a much longer first version").unwrap();
        write_content_to_file(&path, "short").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
        validate_matrix_file(&path, true).unwrap();
    }
}
