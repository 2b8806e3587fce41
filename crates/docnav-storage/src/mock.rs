//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use crate::storage::{Document, Storage, StorageError, StorageErrorKind};

/// In-memory storage returning a fixed document list.
///
/// # Example
///
/// ```ignore
/// use docnav_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_document("commands/feature", "Feature")
///     .with_document("commands/review", "Review");
///
/// let docs = storage.scan().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    documents: Vec<Document>,
    failure: Option<StorageErrorKind>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document with the given slug and title.
    #[must_use]
    pub fn with_document(mut self, slug: impl Into<String>, title: impl Into<String>) -> Self {
        self.documents.push(Document {
            slug: slug.into(),
            title: title.into(),
            description: None,
            source: None,
        });
        self
    }

    /// Add a fully specified document.
    #[must_use]
    pub fn with(mut self, document: Document) -> Self {
        self.documents.push(document);
        self
    }

    /// Make every scan fail with the given kind.
    #[must_use]
    pub fn failing(mut self, kind: StorageErrorKind) -> Self {
        self.failure = Some(kind);
        self
    }
}

impl Storage for MockStorage {
    fn scan(&self) -> Result<Vec<Document>, StorageError> {
        if let Some(kind) = self.failure {
            return Err(StorageError::new(kind).with_backend("Mock"));
        }
        Ok(self.documents.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_returns_documents_in_order() {
        let storage = MockStorage::new()
            .with_document("b", "B")
            .with_document("a", "A");

        let docs = storage.scan().unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].slug, "b");
        assert_eq!(docs[1].slug, "a");
    }

    #[test]
    fn test_failing_scan() {
        let storage = MockStorage::new().failing(StorageErrorKind::NotFound);

        let err = storage.scan().unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::NotFound);
        assert_eq!(err.to_string(), "[Mock] Not found");
    }
}
