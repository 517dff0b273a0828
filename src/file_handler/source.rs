//! Document sources: where the viewed bytes come from.
//!
//! Both sources read their input fully into memory and decompress it when a known
//! compression format is detected.

use crate::error::{Result, VmError};
use crate::file_handler::compression::{decode_content, detect_compression};
use crate::file_handler::validation::validate_file_path;
use crate::file_handler::Document;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncRead, AsyncReadExt};

/// Display name used for documents read from standard input
pub const STDIN_NAME: &str = "STDIN";

/// Core trait for loading a document.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Read the whole input into an immutable [`Document`]
    async fn load(&self) -> Result<Document>;

    /// Name shown on the status line
    fn display_name(&self) -> String;
}

/// A document read from a path on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    async fn load(&self) -> Result<Document> {
        validate_file_path(&self.path).await?;

        let raw = tokio::fs::read(&self.path).await.map_err(|e| {
            VmError::file_error(format!("Failed to read file: {}", self.path.display()), e)
        })?;

        let compression = detect_compression(&raw, Some(&self.path));
        log::debug!(
            "loaded {} ({} bytes, compression: {})",
            self.path.display(),
            raw.len(),
            compression.name()
        );

        Ok(Document::new(decode_content(raw, Some(&self.path)).await?))
    }

    fn display_name(&self) -> String {
        self.path.display().to_string()
    }
}

/// A document read from the process's standard input
#[derive(Debug, Clone, Default)]
pub struct StdinSource;

impl StdinSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentSource for StdinSource {
    async fn load(&self) -> Result<Document> {
        let raw = read_all(tokio::io::stdin())
            .await
            .map_err(|e| VmError::file_error("Failed to read standard input", e))?;

        let compression = detect_compression(&raw, None);
        log::debug!(
            "loaded stdin ({} bytes, compression: {})",
            raw.len(),
            compression.name()
        );

        Ok(Document::new(decode_content(raw, None).await?))
    }

    fn display_name(&self) -> String {
        STDIN_NAME.to_string()
    }
}

/// Drain a reader into a buffer; `Vec` growth keeps the copying amortized linear.
async fn read_all<R: AsyncRead + Unpin>(mut reader: R) -> std::io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer).await?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_file_source_loads_plain_text() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"one\ntwo\nthree\n").unwrap();

        let source = FileSource::new(file.path());
        let doc = source.load().await.unwrap();

        assert_eq!(doc.as_bytes(), b"one\ntwo\nthree\n");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(source.display_name(), file.path().display().to_string());
    }

    #[tokio::test]
    async fn test_file_source_decompresses_gzip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt.gz");

        let mut encoder = GzEncoder::new(Vec::new(), Compression::fast());
        encoder.write_all(b"compressed\ncontent\n").unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let doc = FileSource::new(&path).load().await.unwrap();
        assert_eq!(doc.as_bytes(), b"compressed\ncontent\n");
    }

    #[tokio::test]
    async fn test_file_source_text_starting_with_bzip2_magic() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"BZh is how the meeting notes start\nagenda\n")
            .unwrap();

        let doc = FileSource::new(file.path()).load().await.unwrap();
        assert_eq!(doc.as_bytes(), b"BZh is how the meeting notes start\nagenda\n");
        assert_eq!(doc.line_count(), 2);
    }

    #[tokio::test]
    async fn test_file_source_plain_text_with_gz_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.gz");
        std::fs::write(&path, b"just text\n").unwrap();

        let doc = FileSource::new(&path).load().await.unwrap();
        assert_eq!(doc.as_bytes(), b"just text\n");
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let result = FileSource::new("/no/such/file").load().await;
        assert!(matches!(result, Err(VmError::FileNotFound { .. })));
    }

    #[tokio::test]
    async fn test_read_all_from_reader() {
        let data = read_all(&b"piped\ninput"[..]).await.unwrap();
        assert_eq!(data, b"piped\ninput");
    }

    #[test]
    fn test_stdin_display_name() {
        assert_eq!(StdinSource::new().display_name(), "STDIN");
    }
}
