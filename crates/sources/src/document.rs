//! Profile source backed by a remote document store.
//!
//! The store itself is an external collaborator: this module only defines
//! the client trait and the source that reads through it. The concrete
//! client value is constructed by the composition root and passed in
//! explicitly — there is no module-level singleton to reach for.

use crate::error::{FetchError, StoreError};
use crate::ProfileSource;
use async_trait::async_trait;
use directory::{parser, LawyerProfile};
use serde_json::Value;
use std::cmp::Ordering;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Collection the production deployment keeps its profiles in.
pub const PROFILE_COLLECTION: &str = "lawyer_profiles";

/// One document as a store hands it back: an id plus a field payload.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub fields: Value,
}

/// Client interface to a managed document database.
///
/// Implementations cover whatever backend a deployment uses; the source
/// only needs a single collection read.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// List every document in a collection.
    async fn list_documents(&self, collection: &str) -> Result<Vec<Document>, StoreError>;
}

/// Profile source that reads the profile collection through a
/// [`DocumentStore`] client.
///
/// One fetch per catalogue mount; a failure is returned as-is for the
/// consumer to surface. Decoded profiles come back ordered by rating
/// descending (ties by id), the base order the catalogue was built
/// against.
pub struct DocumentSource {
    store: Arc<dyn DocumentStore>,
    collection: String,
}

impl DocumentSource {
    /// Source over the standard profile collection.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_collection(store, PROFILE_COLLECTION)
    }

    /// Source over a non-standard collection (staging dumps, fixtures).
    pub fn with_collection(store: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }
}

#[async_trait]
impl ProfileSource for DocumentSource {
    fn name(&self) -> &str {
        "DocumentSource"
    }

    async fn fetch_profiles(&self) -> Result<Vec<LawyerProfile>, FetchError> {
        let documents = self.store.list_documents(&self.collection).await?;

        let mut profiles = Vec::with_capacity(documents.len());
        for document in &documents {
            profiles.push(parser::profile_from_document(&document.id, &document.fields)?);
        }

        profiles.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });

        info!(
            "Fetched {} profiles from collection '{}'",
            profiles.len(),
            self.collection
        );
        Ok(profiles)
    }
}

/// Document store backed by a JSON file holding an array of documents,
/// each carrying its own `"id"` field.
///
/// This is the store the CLI uses for local collection dumps, and what the
/// integration tests run against.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentStore for FileStore {
    async fn list_documents(&self, _collection: &str) -> Result<Vec<Document>, StoreError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let payload: Value = serde_json::from_slice(&bytes)?;

        let entries = payload
            .as_array()
            .ok_or_else(|| StoreError::Payload("expected a JSON array of documents".to_string()))?;

        let mut documents = Vec::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            let id = entry
                .get("id")
                .and_then(Value::as_str)
                .filter(|id| !id.is_empty())
                .ok_or_else(|| {
                    StoreError::Payload(format!("document at position {position} has no id"))
                })?;
            documents.push(Document {
                id: id.to_string(),
                fields: entry.clone(),
            });
        }

        Ok(documents)
    }
}

/// In-memory document store for tests and demos.
pub struct MemoryStore {
    documents: Vec<Document>,
}

impl MemoryStore {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list_documents(&self, _collection: &str) -> Result<Vec<Document>, StoreError> {
        Ok(self.documents.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    struct UnreachableStore;

    #[async_trait]
    impl DocumentStore for UnreachableStore {
        async fn list_documents(&self, _collection: &str) -> Result<Vec<Document>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    fn document(id: &str, fields: Value) -> Document {
        Document {
            id: id.to_string(),
            fields,
        }
    }

    #[tokio::test]
    async fn test_document_source_orders_by_rating_descending() {
        let store = Arc::new(MemoryStore::new(vec![
            document("a", json!({ "name": "Low", "rating": 4.1 })),
            document("b", json!({ "name": "High", "rating": 4.9 })),
            document("c", json!({ "name": "Mid", "rating": 4.5 })),
        ]));

        let profiles = DocumentSource::new(store).fetch_profiles().await.unwrap();

        let names: Vec<&str> = profiles.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid", "Low"]);
    }

    #[tokio::test]
    async fn test_document_source_defaults_missing_fields() {
        let store = Arc::new(MemoryStore::new(vec![document(
            "sparse",
            json!({ "name": "Sparse" }),
        )]));

        let profiles = DocumentSource::new(store).fetch_profiles().await.unwrap();

        assert_eq!(profiles[0].rating, 0.0);
        assert_eq!(profiles[0].pricing.audio, 0);
        assert!(!profiles[0].is_online);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let source = DocumentSource::new(Arc::new(UnreachableStore));

        let result = source.fetch_profiles().await;

        assert!(matches!(
            result,
            Err(FetchError::Store(StoreError::Unavailable(_)))
        ));
    }

    #[tokio::test]
    async fn test_broken_document_propagates() {
        let store = Arc::new(MemoryStore::new(vec![document(
            "bad",
            json!({ "name": "X", "rating": "excellent" }),
        )]));

        let result = DocumentSource::new(store).fetch_profiles().await;

        assert!(matches!(result, Err(FetchError::Document(_))));
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{ "id": "f1", "name": "From File", "rating": 4.2, "isOnline": true }}]"#
        )
        .unwrap();

        let store = Arc::new(FileStore::new(file.path()));
        let profiles = DocumentSource::new(store).fetch_profiles().await.unwrap();

        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].id, "f1");
        assert_eq!(profiles[0].name, "From File");
        assert!(profiles[0].is_online);
    }

    #[tokio::test]
    async fn test_file_store_rejects_non_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "id": "oops" }}"#).unwrap();

        let store = FileStore::new(file.path());
        let result = store.list_documents(PROFILE_COLLECTION).await;

        assert!(matches!(result, Err(StoreError::Payload(_))));
    }

    #[tokio::test]
    async fn test_file_store_missing_file_is_io_error() {
        let store = FileStore::new("/nonexistent/profiles.json");

        let result = store.list_documents(PROFILE_COLLECTION).await;

        assert!(matches!(result, Err(StoreError::Io(_))));
    }
}
