//! Main document store interface.
//!
//! [`DocumentStore`] is the entry point an embedding application holds on to.
//! It owns one backend and exposes the three store operations: upsert,
//! lookup by id, and filtered search.
//!
//! # Example
//!
//! ```ignore
//! use docstore::{prelude::*, memory::InMemoryStore};
//!
//! let mut store = DocumentStore::new(InMemoryStore::new());
//! let saved = store.save(Document::builder().title("Alpha").build())?;
//!
//! let found = store.find_by_id(saved.id().unwrap());
//! let matches = store.search(&SearchRequest::builder().title_prefix("Al").build());
//! ```

use crate::{
    backend::StoreBackend,
    document::Document,
    error::DocumentStoreResult,
    query::SearchRequest,
};

/// A document store bound to a specific backend implementation.
#[derive(Debug)]
pub struct DocumentStore<B: StoreBackend> {
    backend: B,
}

/// A document store whose backend is chosen at runtime.
pub type DynDocumentStore = DocumentStore<Box<dyn StoreBackend>>;

impl<B: StoreBackend> DocumentStore<B> {
    /// Creates a new document store with the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Upserts a document and returns it as stored.
    ///
    /// # Errors
    ///
    /// Only fails when the backend refuses an unknown id.
    pub fn save(&mut self, document: Document) -> DocumentStoreResult<Document> {
        self.backend.save(document)
    }

    /// Looks up a document by id. Absence is not an error.
    pub fn find_by_id(&self, id: &str) -> Option<Document> {
        self.backend.find_by_id(id)
    }

    /// Returns the documents matching `request`, in insertion order.
    pub fn search(&self, request: &SearchRequest) -> Vec<Document> {
        self.backend.search(request)
    }

    pub fn len(&self) -> usize {
        self.backend.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }

    /// Returns a reference to the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consumes the store and returns its backend.
    pub fn into_inner(self) -> B {
        self.backend
    }
}

impl<B: StoreBackend + 'static> DocumentStore<B> {
    /// Erases the backend type.
    pub fn into_dyn(self) -> DynDocumentStore {
        DocumentStore::new(Box::new(self.backend) as Box<dyn StoreBackend>)
    }
}

impl<B: StoreBackend + Default> Default for DocumentStore<B> {
    fn default() -> Self {
        Self::new(B::default())
    }
}
