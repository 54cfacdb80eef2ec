//! Uploaded document representation.

use serde::{Deserialize, Serialize};

/// A named blob of text content supplied by a file source.
///
/// Transient: created when a file read completes and discarded after
/// analysis. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub file_name: String,
    pub content: String,
}

impl Document {
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Document {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// SHA-256 checksum of the content, used to detect re-uploads of the
    /// same file.
    pub fn checksum(&self) -> String {
        crate::db::checksum::calculate_checksum(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::Document;

    #[test]
    fn test_checksum_stable() {
        let a = Document::new("piano.txt", "Unità 1: Biologia");
        let b = Document::new("altro-nome.txt", "Unità 1: Biologia");
        // Checksum depends on content only, not on the file name.
        assert_eq!(a.checksum(), b.checksum());
    }

    #[test]
    fn test_checksum_distinguishes_content() {
        let a = Document::new("x.txt", "uno");
        let b = Document::new("x.txt", "due");
        assert_ne!(a.checksum(), b.checksum());
    }
}
