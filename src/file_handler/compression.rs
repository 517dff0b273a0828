//! Compression format detection and transparent decompression of input documents.
//!
//! Compressed inputs are decoded fully into memory before viewing; the document is
//! always resident, so there is no size-based strategy switch.

use crate::error::{Result, VmError};
use async_compression::tokio::bufread::{BzDecoder, GzipDecoder, XzDecoder, ZstdDecoder};
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncRead, AsyncReadExt};

/// Supported compression formats for transparent file access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionType {
    /// No compression - plain text file
    None,
    /// Gzip compression (.gz files)
    Gzip,
    /// Bzip2 compression (.bz2 files)
    Bzip2,
    /// XZ compression (.xz files)
    Xz,
    /// Zstandard compression (.zst, .zstd files)
    Zstd,
}

impl CompressionType {
    /// Get human-readable name for the compression type
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Gzip => "gzip",
            Self::Bzip2 => "bzip2",
            Self::Xz => "xz",
            Self::Zstd => "zstd",
        }
    }

    /// Check if this type represents a compressed format
    pub fn is_compressed(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Detect compression type from the leading bytes of the input, falling back to
/// the file extension when the magic number is not recognized.
///
/// # Magic Numbers Used
/// - Gzip: `1f 8b` (RFC 1952)
/// - Bzip2: `42 5a 68` ("BZh" with block size)
/// - XZ: `fd 37 7a 58 5a 00` (XZ format specification)
/// - Zstd: `28 b5 2f fd` (Zstandard frame format)
pub fn detect_compression(head: &[u8], path: Option<&Path>) -> CompressionType {
    detect_by_magic(head)
        .or_else(|| path.and_then(detect_by_extension))
        .unwrap_or(CompressionType::None)
}

/// Detect compression format from magic bytes
fn detect_by_magic(magic: &[u8]) -> Option<CompressionType> {
    if magic.starts_with(&[0x1f, 0x8b]) {
        Some(CompressionType::Gzip)
    } else if magic.starts_with(&[0x42, 0x5a, 0x68]) {
        Some(CompressionType::Bzip2)
    } else if magic.starts_with(&[0x28, 0xb5, 0x2f, 0xfd]) {
        Some(CompressionType::Zstd)
    } else if magic.starts_with(&[0xfd, 0x37, 0x7a, 0x58, 0x5a, 0x00]) {
        Some(CompressionType::Xz)
    } else {
        None
    }
}

/// Detect compression format from file extension
fn detect_by_extension(path: &Path) -> Option<CompressionType> {
    let ext = path.extension()?.to_str()?;
    match ext.to_lowercase().as_str() {
        "gz" => Some(CompressionType::Gzip),
        "bz2" => Some(CompressionType::Bzip2),
        "xz" => Some(CompressionType::Xz),
        "zst" | "zstd" => Some(CompressionType::Zstd),
        _ => None,
    }
}

/// Decode `raw` according to `compression`.
pub async fn decompress(raw: &[u8], compression: CompressionType) -> Result<Vec<u8>> {
    if !compression.is_compressed() {
        return Ok(raw.to_vec());
    }

    let mut decoder = decoder_for(raw, compression);

    let mut data = Vec::new();
    decoder.read_to_end(&mut data).await.map_err(|e| {
        VmError::compression(format!("failed to decode {} input: {}", compression.name(), e))
    })?;

    log::debug!(
        "decompressed {} input to {} bytes",
        compression.name(),
        data.len()
    );
    Ok(data)
}

/// Turn loaded bytes into document content, decompressing when a format is detected.
///
/// Only the long xz and zstd magic numbers are trusted. A format guessed from the
/// extension or from the short gzip/bzip2 magic may just be text that happens to
/// look that way, so a failed decode keeps the raw bytes.
pub async fn decode_content(raw: Vec<u8>, path: Option<&Path>) -> Result<Vec<u8>> {
    let compression = detect_compression(&raw, path);
    if !compression.is_compressed() {
        return Ok(raw);
    }

    match decompress(&raw, compression).await {
        Ok(data) => Ok(data),
        Err(err) if !has_strong_magic(&raw, compression) => {
            log::debug!("showing input as plain text: {}", err);
            Ok(raw)
        }
        Err(err) => Err(err),
    }
}

fn has_strong_magic(head: &[u8], compression: CompressionType) -> bool {
    matches!(compression, CompressionType::Xz | CompressionType::Zstd)
        && detect_by_magic(head) == Some(compression)
}

fn decoder_for<'a, R>(
    reader: R,
    compression: CompressionType,
) -> Box<dyn AsyncRead + Unpin + Send + 'a>
where
    R: AsyncBufRead + Unpin + Send + 'a,
{
    match compression {
        CompressionType::Gzip => Box::new(GzipDecoder::new(reader)),
        CompressionType::Bzip2 => Box::new(BzDecoder::new(reader)),
        CompressionType::Xz => Box::new(XzDecoder::new(reader)),
        CompressionType::Zstd => Box::new(ZstdDecoder::new(reader)),
        CompressionType::None => Box::new(reader),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_detect_gzip_magic() {
        let magic = [0x1f, 0x8b, 0x08, 0x00];
        assert_eq!(detect_by_magic(&magic), Some(CompressionType::Gzip));
    }

    #[test]
    fn test_detect_bzip2_magic() {
        let magic = [0x42, 0x5a, 0x68, 0x39];
        assert_eq!(detect_by_magic(&magic), Some(CompressionType::Bzip2));
    }

    #[test]
    fn test_detect_xz_magic() {
        let magic = [0xfd, 0x37, 0x7a, 0x58, 0x5a, 0x00];
        assert_eq!(detect_by_magic(&magic), Some(CompressionType::Xz));
    }

    #[test]
    fn test_detect_zstd_magic() {
        let magic = [0x28, 0xb5, 0x2f, 0xfd];
        assert_eq!(detect_by_magic(&magic), Some(CompressionType::Zstd));
    }

    #[test]
    fn test_detect_no_compression() {
        assert_eq!(detect_by_magic(&[0x00, 0x00, 0x00, 0x00]), None);
        assert_eq!(detect_by_magic(b"h"), None);
        assert_eq!(detect_by_magic(b""), None);
    }

    #[test]
    fn test_extension_fallback() {
        assert_eq!(
            detect_compression(b"plain", Some(Path::new("file.GZ"))),
            CompressionType::Gzip
        );
        assert_eq!(
            detect_compression(b"plain", Some(Path::new("file.zstd"))),
            CompressionType::Zstd
        );
        assert_eq!(
            detect_compression(b"plain", Some(Path::new("file.txt"))),
            CompressionType::None
        );
        assert_eq!(detect_compression(b"plain", None), CompressionType::None);
    }

    #[test]
    fn test_compression_type_methods() {
        assert!(!CompressionType::None.is_compressed());
        assert!(CompressionType::Gzip.is_compressed());
        assert_eq!(CompressionType::Bzip2.name(), "bzip2");
        assert_eq!(CompressionType::Zstd.name(), "zstd");
    }

    #[tokio::test]
    async fn test_decompress_gzip() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"hello\nworld\n").unwrap();
        let compressed = encoder.finish().unwrap();

        assert_eq!(
            detect_compression(&compressed, None),
            CompressionType::Gzip
        );
        let data = decompress(&compressed, CompressionType::Gzip).await.unwrap();
        assert_eq!(data, b"hello\nworld\n");
    }

    #[tokio::test]
    async fn test_decompress_corrupt_input_fails() {
        let result = decompress(&[0x1f, 0x8b, 0xff, 0xff], CompressionType::Gzip).await;
        assert!(matches!(result, Err(VmError::CompressionError { .. })));
    }

    #[tokio::test]
    async fn test_uncompressed_passthrough() {
        let data = decompress(b"as is", CompressionType::None)
            .await
            .unwrap();
        assert_eq!(data, b"as is");
    }

    #[tokio::test]
    async fn test_text_with_bzip2_prefix_stays_plain() {
        let text = b"BZh is how the meeting notes start\nsecond line\n".to_vec();
        assert_eq!(detect_compression(&text, None), CompressionType::Bzip2);

        let data = decode_content(text.clone(), None).await.unwrap();
        assert_eq!(data, text);
    }

    #[tokio::test]
    async fn test_text_named_like_gzip_stays_plain() {
        let data = decode_content(b"just text\n".to_vec(), Some(Path::new("notes.gz")))
            .await
            .unwrap();
        assert_eq!(data, b"just text\n");
    }

    #[tokio::test]
    async fn test_corrupt_xz_is_still_an_error() {
        let raw = vec![0xfd, 0x37, 0x7a, 0x58, 0x5a, 0x00, 0xde, 0xad];
        let result = decode_content(raw, None).await;
        assert!(matches!(result, Err(VmError::CompressionError { .. })));
    }

    #[tokio::test]
    async fn test_decode_content_decompresses_gzip() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"packed\n").unwrap();
        let data = decode_content(encoder.finish().unwrap(), Some(Path::new("x.log")))
            .await
            .unwrap();
        assert_eq!(data, b"packed\n");
    }
}
