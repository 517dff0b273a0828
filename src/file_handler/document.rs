//! The loaded text being viewed.

use crate::file_handler::line_index::LineIndex;

/// Immutable document bytes plus derived line metrics.
///
/// Created once by a [`DocumentSource`](crate::file_handler::DocumentSource) and
/// then only ever borrowed.
#[derive(Debug, Clone)]
pub struct Document {
    content: Vec<u8>,
    index: LineIndex,
}

impl Document {
    /// Take ownership of `content` and index its lines
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        let content = content.into();
        let index = LineIndex::build(&content);
        Self { content, index }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Number of `\n` bytes in the document
    pub fn line_count(&self) -> usize {
        self.index.line_count()
    }

    /// Line number (0-based) containing byte `offset`
    pub fn line_of(&self, offset: usize) -> usize {
        self.index.line_of(offset)
    }

    /// Byte offset where `line` starts, or the document length past the end
    pub fn line_start(&self, line: usize) -> usize {
        self.index.line_start(line).unwrap_or(self.content.len())
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_metrics() {
        let doc = Document::from("a\nbb\nccc\n");
        assert_eq!(doc.len(), 9);
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line_of(3), 1);
        assert_eq!(doc.line_start(2), 5);
        assert_eq!(doc.line_start(10), 9);
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new(Vec::<u8>::new());
        assert!(doc.is_empty());
        assert_eq!(doc.line_count(), 0);
        assert_eq!(doc.line_start(0), 0);
    }
}
