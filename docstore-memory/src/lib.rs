//! In-memory document storage backend for docstore.
//!
//! This crate provides a single-owner, in-memory implementation of the
//! `StoreBackend` trait. It is meant to be embedded in a larger application
//! and holds nothing beyond the process lifetime of the store value.
//!
//! # Features
//!
//! - **Upsert with id assignment** - Counter or UUID ids, unique within a store
//! - **Configurable unknown-id handling** - Insert, reject, or ignore
//! - **Multi-criteria search** - Title prefixes, content substrings, author ids and a date range
//!
//! # Quick Start
//!
//! ```ignore
//! use docstore::{prelude::*, memory::InMemoryStore};
//!
//! let mut store = DocumentStore::new(InMemoryStore::builder().build()?);
//!
//! store.save(Document::builder().title("Alpha").build())?;
//! store.save(Document::builder().title("Beta").build())?;
//!
//! let request = SearchRequest::builder().title_prefix("Al").build();
//! assert_eq!(store.search(&request).len(), 1);
//! ```

#[allow(unused_extern_crates)]
extern crate self as docstore_memory;

pub mod id;
pub mod matcher;
pub mod store;

pub use id::IdGenerator;
pub use matcher::DocumentMatcher;
pub use store::{InMemoryStore, InMemoryStoreBuilder};
