//! Construction-time configuration for store backends.
//!
//! Every option has a default, so an empty config (or `StoreConfig::default()`)
//! yields a store that inserts unknown ids, generates counter ids, and
//! replaces records as given.
//!
//! # Example
//!
//! ```ignore
//! use docstore::config::{StoreConfig, UnknownIdPolicy};
//!
//! let config: StoreConfig = serde_json::from_str(r#"{ "unknown_id": "reject" }"#)?;
//! assert_eq!(config.unknown_id, UnknownIdPolicy::Reject);
//! ```

use serde::{Deserialize, Serialize};

/// What `save` does with a non-empty id that the store does not hold.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnknownIdPolicy {
    /// Append the document as a new record under the caller's id.
    #[default]
    Insert,
    /// Fail with [`DocumentStoreError::DocumentNotFound`](crate::error::DocumentStoreError::DocumentNotFound)
    /// and leave the store unchanged.
    Reject,
    /// Return the document without storing it.
    Ignore,
}

/// How the store generates ids for documents saved without one.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Decimal string of a per-store counter starting at 1.
    #[default]
    Counter,
    /// Random v4 UUID in hyphenated form.
    Uuid,
}

/// Options fixed when a store is constructed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct StoreConfig {
    pub unknown_id: UnknownIdPolicy,
    pub id_strategy: IdStrategy,
    /// Keep the stored `created` value when an existing record is replaced.
    pub preserve_created: bool,
}
