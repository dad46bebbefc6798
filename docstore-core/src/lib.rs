//! Core types for a small embeddable document store.
//!
//! This crate is the core of the docstore project and provides:
//!
//! - **Data model** ([`document`]) - The stored [`Document`](document::Document) and its [`Author`](document::Author)
//! - **Search requests** ([`query`]) - Multi-criteria search descriptors and the criteria visitor
//! - **Configuration** ([`config`]) - Id generation and unknown-id policies fixed at construction
//! - **Store backend abstraction** ([`backend`]) - Traits for implementing storage backends
//! - **Document store** ([`store`]) - The facade embedding applications hold on to
//! - **Error handling** ([`error`]) - Error and result types
//!
//! # Example
//!
//! ```ignore
//! use docstore::document::{Author, Document};
//!
//! let document = Document::builder()
//!     .title("Alpha")
//!     .author(Author::new("a-1", "Ada"))
//!     .build();
//! ```

#[allow(unused_extern_crates)]
extern crate self as docstore_core;

pub mod backend;
pub mod config;
pub mod document;
pub mod error;
pub mod query;
pub mod store;
