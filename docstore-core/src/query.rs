//! Search request construction and the criteria visitor used to evaluate it.
//!
//! A [`SearchRequest`] combines up to five independent criteria groups. The
//! groups are joined with logical AND; the values inside a list group are
//! joined with logical OR. An empty group places no constraint on the result.
//!
//! # Query Building
//!
//! ```ignore
//! use docstore::query::SearchRequest;
//!
//! let request = SearchRequest::builder()
//!     .title_prefix("Al")
//!     .title_prefix("Ga")
//!     .author_id("a-1")
//!     .created_from(from)
//!     .build();
//! ```
//!
//! # Evaluation
//!
//! [`SearchRequest::criteria`] yields only the active groups as [`Criterion`]
//! values. Backends evaluate a document by implementing [`CriteriaVisitor`]
//! and requiring every visited criterion to hold.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// An immutable query descriptor. Every field is optional.
///
/// A request with no criteria at all matches every document.
///
/// The serialized form uses the camelCase field names `titlePrefixes`,
/// `containsContents`, `authorIds`, `createdFrom` and `createdTo`. A missing
/// or `null` list deserializes as an empty (unconstrained) group.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Title must start with at least one of these prefixes.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title_prefixes: Vec<String>,
    /// Content must contain at least one of these substrings.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub contains_contents: Vec<String>,
    /// Author id must equal one of these ids.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author_ids: Vec<String>,
    /// Inclusive lower bound on `created`.
    #[serde(default)]
    pub created_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `created`.
    #[serde(default)]
    pub created_to: Option<DateTime<Utc>>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl SearchRequest {
    /// Creates an unconstrained request that matches every document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new request builder for fluent construction.
    pub fn builder() -> SearchRequestBuilder {
        SearchRequestBuilder::new()
    }

    /// Returns `true` when no criteria group is active.
    pub fn is_unconstrained(&self) -> bool {
        self.criteria().next().is_none()
    }

    /// Returns the active criteria groups in evaluation order.
    ///
    /// Empty list groups and unset bounds are skipped, so they are
    /// vacuously satisfied by every document.
    pub fn criteria(&self) -> impl Iterator<Item = Criterion<'_>> {
        let title = (!self.title_prefixes.is_empty())
            .then(|| Criterion::TitlePrefix(&self.title_prefixes));
        let content = (!self.contains_contents.is_empty())
            .then(|| Criterion::ContentContains(&self.contains_contents));
        let author = (!self.author_ids.is_empty())
            .then(|| Criterion::AuthorIn(&self.author_ids));
        let from = self.created_from.map(Criterion::CreatedFrom);
        let to = self.created_to.map(Criterion::CreatedTo);

        [title, content, author, from, to]
            .into_iter()
            .flatten()
    }
}

/// One active criteria group of a [`SearchRequest`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Criterion<'a> {
    /// Title starts with any of the prefixes (case-sensitive).
    TitlePrefix(&'a [String]),
    /// Content contains any of the substrings (case-sensitive).
    ContentContains(&'a [String]),
    /// Author id equals any of the ids.
    AuthorIn(&'a [String]),
    /// `created >= bound`.
    CreatedFrom(DateTime<Utc>),
    /// `created <= bound`.
    CreatedTo(DateTime<Utc>),
}

/// Builder for [`SearchRequest`].
///
/// List setters append, so a group can be populated one value at a time or
/// from an iterator.
#[derive(Debug, Clone, Default)]
pub struct SearchRequestBuilder {
    request: SearchRequest,
}

impl SearchRequestBuilder {
    /// Creates a new builder with no criteria.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.request.title_prefixes.push(prefix.into());
        self
    }

    pub fn title_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request
            .title_prefixes
            .extend(prefixes.into_iter().map(Into::into));
        self
    }

    pub fn contains_content(mut self, content: impl Into<String>) -> Self {
        self.request.contains_contents.push(content.into());
        self
    }

    pub fn contains_contents<I, S>(mut self, contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request
            .contains_contents
            .extend(contents.into_iter().map(Into::into));
        self
    }

    pub fn author_id(mut self, author_id: impl Into<String>) -> Self {
        self.request.author_ids.push(author_id.into());
        self
    }

    pub fn author_ids<I, S>(mut self, author_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request
            .author_ids
            .extend(author_ids.into_iter().map(Into::into));
        self
    }

    /// Sets the inclusive lower bound on `created`.
    pub fn created_from(mut self, from: DateTime<Utc>) -> Self {
        self.request.created_from = Some(from);
        self
    }

    /// Sets the inclusive upper bound on `created`.
    pub fn created_to(mut self, to: DateTime<Utc>) -> Self {
        self.request.created_to = Some(to);
        self
    }

    /// Builds and returns the final request.
    pub fn build(self) -> SearchRequest {
        self.request
    }
}

/// Visitor over the criteria of a [`SearchRequest`].
///
/// Implementors decide what a single criterion means for their subject;
/// [`visit_criterion`](CriteriaVisitor::visit_criterion) dispatches to the
/// matching method.
pub trait CriteriaVisitor {
    type Output;

    fn visit_title_prefix(&mut self, prefixes: &[String]) -> Self::Output;
    fn visit_content_contains(&mut self, contents: &[String]) -> Self::Output;
    fn visit_author_in(&mut self, author_ids: &[String]) -> Self::Output;
    fn visit_created_from(&mut self, from: DateTime<Utc>) -> Self::Output;
    fn visit_created_to(&mut self, to: DateTime<Utc>) -> Self::Output;

    fn visit_criterion(&mut self, criterion: &Criterion<'_>) -> Self::Output {
        match *criterion {
            Criterion::TitlePrefix(prefixes) => self.visit_title_prefix(prefixes),
            Criterion::ContentContains(contents) => self.visit_content_contains(contents),
            Criterion::AuthorIn(author_ids) => self.visit_author_in(author_ids),
            Criterion::CreatedFrom(from) => self.visit_created_from(from),
            Criterion::CreatedTo(to) => self.visit_created_to(to),
        }
    }
}
