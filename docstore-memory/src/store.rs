//! In-memory storage implementation for the document store.
//!
//! Documents live in a `Vec` in insertion order. Lookups and searches scan
//! the whole collection; there is no index.

use log::{debug, trace, warn};

use docstore_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    config::{IdStrategy, StoreConfig, UnknownIdPolicy},
    document::Document,
    error::{DocumentStoreError, DocumentStoreResult},
    query::SearchRequest,
};

use crate::{id::IdGenerator, matcher::DocumentMatcher};

/// In-memory document storage backend.
///
/// The store exclusively owns its documents and its id counter. Hosts that
/// share it between threads wrap it in their own lock.
///
/// # Example
///
/// ```ignore
/// use docstore_memory::InMemoryStore;
/// use docstore::backend::StoreBackend;
/// use docstore::document::Document;
///
/// let mut store = InMemoryStore::new();
///
/// let saved = store.save(Document::builder().title("Alpha").build())?;
/// assert_eq!(saved.id(), Some("1"));
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Default, Debug)]
pub struct InMemoryStore {
    /// Held documents in insertion order. Every entry has a non-empty id.
    documents: Vec<Document>,
    ids: IdGenerator,
    config: StoreConfig,
}

impl InMemoryStore {
    /// Creates a new empty store with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates a new empty store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            documents: Vec::new(),
            ids: IdGenerator::new(config.id_strategy),
            config,
        }
    }

    /// Creates a builder for constructing an `InMemoryStore` with custom options.
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Iterates over the held documents in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.documents
            .iter()
            .position(|doc| doc.id() == Some(id))
    }

    fn insert_new(&mut self, mut document: Document) -> Document {
        let documents = &self.documents;
        let id = self.ids.next_id(|candidate| {
            documents
                .iter()
                .any(|doc| doc.id() == Some(candidate))
        });

        debug!("Assigned id {id} to new document");

        document.id = Some(id);
        self.documents.push(document.clone());
        document
    }

    fn replace(&mut self, index: usize, mut document: Document) -> Document {
        let stored = &mut self.documents[index];

        if self.config.preserve_created {
            if let Some(created) = stored.created {
                document.created = Some(created);
            }
        }

        debug!("Replaced document {}", document.id().unwrap_or_default());

        *stored = document.clone();
        document
    }
}

impl StoreBackend for InMemoryStore {
    fn save(&mut self, document: Document) -> DocumentStoreResult<Document> {
        let id = match document.id() {
            Some(id) => id.to_owned(),
            None => return Ok(self.insert_new(document)),
        };

        if let Some(index) = self.position(&id) {
            return Ok(self.replace(index, document));
        }

        match self.config.unknown_id {
            UnknownIdPolicy::Insert => {
                debug!("Inserting document under caller-supplied id {id}");

                self.documents.push(document.clone());
                Ok(document)
            }
            UnknownIdPolicy::Reject => {
                debug!("Rejected save of unknown id {id}");

                Err(DocumentStoreError::DocumentNotFound(id))
            }
            UnknownIdPolicy::Ignore => {
                warn!("Ignored save of unknown id {id}; document was not stored");

                Ok(document)
            }
        }
    }

    fn find_by_id(&self, id: &str) -> Option<Document> {
        self.position(id)
            .map(|index| self.documents[index].clone())
    }

    fn search(&self, request: &SearchRequest) -> Vec<Document> {
        let matches = DocumentMatcher::filter_documents(&self.documents, request);

        trace!(
            "Search matched {} of {} documents",
            matches.len(),
            self.documents.len()
        );

        matches
    }

    fn len(&self) -> usize {
        self.documents.len()
    }
}

/// Builder for constructing [`InMemoryStore`] instances.
///
/// # Example
///
/// ```ignore
/// use docstore_memory::InMemoryStore;
/// use docstore::backend::StoreBackendBuilder;
/// use docstore::config::UnknownIdPolicy;
///
/// let store = InMemoryStore::builder()
///     .unknown_id_policy(UnknownIdPolicy::Reject)
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStoreBuilder {
    config: StoreConfig,
}

impl InMemoryStoreBuilder {
    /// Replaces every option with the values from `config`.
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    pub fn unknown_id_policy(mut self, policy: UnknownIdPolicy) -> Self {
        self.config.unknown_id = policy;
        self
    }

    pub fn id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.config.id_strategy = strategy;
        self
    }

    /// Keep the stored `created` value when a record is replaced.
    pub fn preserve_created(mut self, preserve: bool) -> Self {
        self.config.preserve_created = preserve;
        self
    }
}

impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    /// Builds and returns a new [`InMemoryStore`] instance.
    ///
    /// This always succeeds and returns a freshly initialized store.
    fn build(self) -> DocumentStoreResult<Self::Backend> {
        debug!("Building in-memory store with {:?}", self.config);

        Ok(InMemoryStore::with_config(self.config))
    }
}
