//! Convenient re-exports of commonly used types from docstore.
//!
//! ```ignore
//! use docstore::prelude::*;
//! ```

pub use docstore_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    config::{IdStrategy, StoreConfig, UnknownIdPolicy},
    document::{Author, Document, DocumentBuilder},
    error::{DocumentStoreError, DocumentStoreResult},
    query::{CriteriaVisitor, Criterion, SearchRequest, SearchRequestBuilder},
    store::{DocumentStore, DynDocumentStore},
};
