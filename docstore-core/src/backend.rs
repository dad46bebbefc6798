//! Storage backend abstraction for the document store.
//!
//! This module defines the traits that separate the store facade from the
//! collection that actually holds documents.
//!
//! # Traits
//!
//! - [`StoreBackend`]: The core trait for storage backends
//! - [`StoreBackendBuilder`]: Factory trait for creating backend instances
//!
//! # Concurrency
//!
//! Backends are synchronous and single-owner. Saving takes `&mut self`, so
//! the borrow checker serializes mutation within a thread; hosts that share
//! a store between threads wrap it in their own lock.
//!
//! # Examples
//!
//! ```ignore
//! use docstore::backend::StoreBackend;
//! use docstore::document::Document;
//!
//! let mut backend = MyBackendImpl::new();
//! let saved = backend.save(Document::builder().title("Alpha").build())?;
//! assert!(backend.find_by_id(saved.id().unwrap()).is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt::Debug;

use crate::{
    document::Document,
    error::DocumentStoreResult,
    query::SearchRequest,
};

/// Abstract interface for document storage backends.
pub trait StoreBackend: Debug {
    /// Upserts a document.
    ///
    /// A document without an id (or with an empty one) receives a freshly
    /// generated id and is appended as a new record. A document whose id is
    /// already held replaces that record entirely. What happens to a
    /// non-empty id the backend does not hold is backend policy.
    ///
    /// # Returns
    ///
    /// The document as stored, including any assigned id.
    fn save(&mut self, document: Document) -> DocumentStoreResult<Document>;

    /// Returns the first held document whose id equals `id`.
    fn find_by_id(&self, id: &str) -> Option<Document>;

    /// Returns every held document that satisfies `request`, in insertion order.
    fn search(&self, request: &SearchRequest) -> Vec<Document>;

    /// Returns the number of held documents.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<B> StoreBackend for &mut B
where
    B: StoreBackend + ?Sized,
{
    fn save(&mut self, document: Document) -> DocumentStoreResult<Document> {
        (**self).save(document)
    }

    fn find_by_id(&self, id: &str) -> Option<Document> {
        (**self).find_by_id(id)
    }

    fn search(&self, request: &SearchRequest) -> Vec<Document> {
        (**self).search(request)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<B> StoreBackend for Box<B>
where
    B: StoreBackend + ?Sized,
{
    fn save(&mut self, document: Document) -> DocumentStoreResult<Document> {
        (**self).save(document)
    }

    fn find_by_id(&self, id: &str) -> Option<Document> {
        (**self).find_by_id(id)
    }

    fn search(&self, request: &SearchRequest) -> Vec<Document> {
        (**self).search(request)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// Factory trait for constructing backend instances.
pub trait StoreBackendBuilder {
    type Backend: StoreBackend;

    /// Builds the backend.
    fn build(self) -> DocumentStoreResult<Self::Backend>;
}
