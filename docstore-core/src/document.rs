//! Core types for document representation and serialization.
//!
//! This module provides the stored entity ([`Document`]), the embedded
//! [`Author`] reference, a fluent [`DocumentBuilder`], and JSON conversion
//! helpers for hosts that expose the store over a wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, from_value, to_value};

use crate::error::DocumentStoreResult;

/// The author of a document: an externally assigned id plus a display name.
///
/// Authors have no lifecycle of their own; they are embedded by value in
/// the document that references them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Author {
    /// Externally assigned identifier. Uniqueness is a convention of the caller.
    pub id: String,
    /// Display name, may be empty.
    #[serde(default)]
    pub name: String,
}

impl Author {
    /// Creates a new author.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The stored entity.
///
/// Every field other than `id` is populated by the caller. The store assigns
/// `id` on the first save when it is absent or empty; from then on the id
/// never changes. `created` is owned by the caller and is carried through
/// saves as-is unless the store is configured to preserve it.
///
/// # Example
///
/// ```ignore
/// use docstore::document::{Author, Document};
///
/// let document = Document::builder()
///     .title("Quarterly report")
///     .content("Revenue grew")
///     .author(Author::new("a-1", "Ada"))
///     .created(chrono::Utc::now())
///     .build();
///
/// assert!(!document.has_id());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique key within a store. Unset (or empty) only before the first save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    /// Creation timestamp. Never overwritten by the store.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

impl Document {
    /// Creates a new builder with every field unset.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }

    /// Returns the document id if it has been assigned.
    ///
    /// An empty string counts as unassigned.
    pub fn id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .filter(|id| !id.is_empty())
    }

    /// Returns `true` when the document carries a non-empty id.
    pub fn has_id(&self) -> bool {
        self.id().is_some()
    }

    /// Returns the id of the referenced author, if any.
    pub fn author_id(&self) -> Option<&str> {
        self.author
            .as_ref()
            .map(|author| author.id.as_str())
    }

    /// Converts this document to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> DocumentStoreResult<Value> {
        Ok(to_value(self)?)
    }

    /// Creates a document from a JSON value.
    ///
    /// Missing fields are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not describe a document.
    pub fn from_json(value: Value) -> DocumentStoreResult<Self> {
        Ok(from_value(value)?)
    }
}

/// Builder for constructing [`Document`] instances with a fluent API.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Creates a new builder with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.document.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.document.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.document.content = Some(content.into());
        self
    }

    pub fn author(mut self, author: Author) -> Self {
        self.document.author = Some(author);
        self
    }

    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.document.created = Some(created);
        self
    }

    /// Builds and returns the final [`Document`].
    pub fn build(self) -> Document {
        self.document
    }
}
