//! Main docstore crate providing a small embeddable document store.
//!
//! This crate is the primary entry point for users of docstore. It re-exports
//! the core types from `docstore-core` and the in-memory backend from
//! `docstore-memory`.
//!
//! # Features
//!
//! - **Upsert** - Save new documents with generated ids, replace existing ones by id
//! - **Point lookup** - Find a document by id, absence reported as `None`
//! - **Filtered search** - AND across criteria groups, OR within a group
//!
//! # Quick Start
//!
//! ```ignore
//! use docstore::{prelude::*, memory::InMemoryStore};
//!
//! fn main() -> DocumentStoreResult<()> {
//!     let mut store = DocumentStore::new(InMemoryStore::builder().build()?);
//!
//!     let saved = store.save(
//!         Document::builder()
//!             .title("Alpha")
//!             .content("first draft")
//!             .author(Author::new("a-1", "Ada"))
//!             .created(chrono::Utc::now())
//!             .build(),
//!     )?;
//!
//!     let found = store.find_by_id(saved.id().unwrap());
//!     println!("Found: {:?}", found);
//!
//!     let results = store.search(
//!         &SearchRequest::builder()
//!             .title_prefix("Al")
//!             .author_id("a-1")
//!             .build(),
//!     );
//!     println!("Matched: {:?}", results);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Dynamic Dispatch
//!
//! A typed `DocumentStore` converts into a [`DynDocumentStore`](store::DynDocumentStore)
//! with `into_dyn`, which lets the host pick a backend at runtime.
//!
//! ```ignore
//! use docstore::{prelude::*, memory::InMemoryStore};
//!
//! let mut store = DocumentStore::new(InMemoryStore::new()).into_dyn();
//! store.save(Document::builder().title("Beta").build())?;
//! ```
//!
//! # Configuration
//!
//! The in-memory backend takes a [`StoreConfig`](config::StoreConfig) at
//! construction. It is serde-deserializable so hosts can load it from their
//! own configuration files.
//!
//! ```ignore
//! use docstore::{prelude::*, memory::InMemoryStore};
//!
//! let config: StoreConfig = serde_json::from_str(r#"{ "unknown_id": "reject", "id_strategy": "uuid" }"#)?;
//! let store = InMemoryStore::builder().config(config).build()?;
//! ```

pub mod prelude;

pub use docstore_core::{backend, config, document, error, query, store};

// Re-export chrono so callers can build timestamps without a separate dependency
pub use chrono;

/// In-memory storage backend implementations.
pub mod memory {
    pub use docstore_memory::{DocumentMatcher, IdGenerator, InMemoryStore, InMemoryStoreBuilder};
}
