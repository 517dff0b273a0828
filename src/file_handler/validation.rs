//! File validation utilities for ensuring paths can be paged.

use crate::error::{Result, VmError};
use std::path::Path;

/// Validate that a file path is accessible and suitable for viewing
///
/// # Validations Performed
/// - Path exists
/// - Path is not a directory
///
/// Empty files, pipes and character devices are all viewable.
pub async fn validate_file_path(path: &Path) -> Result<()> {
    let metadata = tokio::fs::metadata(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => VmError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => VmError::file_error(format!("Failed to read metadata: {}", path.display()), e),
    })?;

    if metadata.is_dir() {
        return Err(VmError::IsADirectory {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[tokio::test]
    async fn test_validate_valid_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(b"line 1\nline 2\n").unwrap();
        assert!(validate_file_path(file.path()).await.is_ok());
    }

    #[tokio::test]
    async fn test_validate_empty_file_is_accepted() {
        let file = NamedTempFile::new().expect("Failed to create temp file");
        assert!(validate_file_path(file.path()).await.is_ok());
    }

    #[tokio::test]
    async fn test_validate_nonexistent_file() {
        let result = validate_file_path(Path::new("/this/file/does/not/exist.log")).await;
        assert!(matches!(result, Err(VmError::FileNotFound { .. })));
    }

    #[tokio::test]
    async fn test_validate_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let result = validate_file_path(temp_dir.path()).await;
        assert!(matches!(result, Err(VmError::IsADirectory { .. })));
    }
}
