//! Search request evaluation for in-memory document filtering.
//!
//! [`DocumentMatcher`] decides whether a single document satisfies a
//! [`SearchRequest`]. It is a pure function of the pair: the active criteria
//! must all hold (AND), and within a list criterion any one value suffices
//! (OR). Evaluation stops at the first failing criterion.

use chrono::{DateTime, Utc};

use docstore_core::{
    document::Document,
    query::{CriteriaVisitor, SearchRequest},
};

/// Evaluates search criteria against one document.
///
/// Missing fields never satisfy a criterion that inspects them: a document
/// without a title fails any title prefix group, one without `created`
/// fails any date bound.
#[derive(Debug, Clone, Copy)]
pub struct DocumentMatcher<'a> {
    document: &'a Document,
}

impl<'a> DocumentMatcher<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Returns `true` when the document satisfies every active criterion.
    pub fn matches(&mut self, request: &SearchRequest) -> bool {
        request
            .criteria()
            .all(|criterion| self.visit_criterion(&criterion))
    }

    /// Clones out the documents matching `request`, preserving iteration order.
    pub fn filter_documents(
        documents: impl IntoIterator<Item = &'a Document>,
        request: &SearchRequest,
    ) -> Vec<Document> {
        documents
            .into_iter()
            .filter(|doc| DocumentMatcher::new(doc).matches(request))
            .cloned()
            .collect::<Vec<_>>()
    }
}

impl CriteriaVisitor for DocumentMatcher<'_> {
    type Output = bool;

    fn visit_title_prefix(&mut self, prefixes: &[String]) -> bool {
        match self.document.title.as_deref() {
            Some(title) => prefixes
                .iter()
                .any(|prefix| title.starts_with(prefix.as_str())),
            None => false,
        }
    }

    fn visit_content_contains(&mut self, contents: &[String]) -> bool {
        match self.document.content.as_deref() {
            Some(content) => contents
                .iter()
                .any(|needle| content.contains(needle.as_str())),
            None => false,
        }
    }

    fn visit_author_in(&mut self, author_ids: &[String]) -> bool {
        match self.document.author_id() {
            Some(author_id) => author_ids
                .iter()
                .any(|id| id == author_id),
            None => false,
        }
    }

    fn visit_created_from(&mut self, from: DateTime<Utc>) -> bool {
        self.document
            .created
            .is_some_and(|created| created >= from)
    }

    fn visit_created_to(&mut self, to: DateTime<Utc>) -> bool {
        self.document
            .created
            .is_some_and(|created| created <= to)
    }
}
