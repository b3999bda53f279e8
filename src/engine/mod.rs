//! The search engine: ingestion, ranked retrieval, and matching.
//!
//! A [`SearchEngine`] owns the document store and the mirror posting maps.
//! Ingestion is single-writer; once it quiesces, any number of threads may
//! query concurrently. Ranked retrieval accumulates tf·idf relevance over the
//! query plus-words, filters postings through a caller predicate, erases
//! every document vetoed by a minus-word, and returns the best results sorted
//! by relevance (ties broken by rating).

mod parallel;

use crate::config;
use crate::document::{Document, DocumentId, DocumentStatus};
use crate::error::{Result, SearchError};
use crate::index::{DocumentStore, TermIndex};
use crate::query::Query;
use crate::tokenizer::{is_valid_word, split_words, StopWordSet};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;
use std::sync::LazyLock;

/// An in-memory full-text search engine with TF-IDF ranking.
#[derive(Debug, Default)]
pub struct SearchEngine {
    stop_words: StopWordSet,
    index: TermIndex,
    store: DocumentStore,
}

impl SearchEngine {
    /// Creates an engine with the given stop words.
    pub fn new(stop_words: StopWordSet) -> Self {
        Self {
            stop_words,
            index: TermIndex::new(),
            store: DocumentStore::new(),
        }
    }

    /// Adds a document.
    ///
    /// The content is split on spaces; stop words are discarded and the
    /// remaining words indexed with `tf = occurrences / total`. The stored
    /// rating is the truncated integer mean of `ratings` (0 when empty).
    /// A document with only stop words is still added, with metadata only.
    ///
    /// Fails with [`SearchError::NegativeId`], [`SearchError::DuplicateId`],
    /// or [`SearchError::InvalidWord`]; on failure nothing is inserted.
    pub fn add_document(
        &mut self,
        document_id: DocumentId,
        content: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        if document_id < 0 {
            return Err(SearchError::NegativeId(document_id));
        }
        if self.store.contains(document_id) {
            return Err(SearchError::DuplicateId(document_id));
        }

        let words: Vec<&str> = split_words(content)
            .filter(|word| !self.stop_words.contains(word))
            .collect();
        if let Some(word) = words.iter().find(|word| !is_valid_word(word)) {
            return Err(SearchError::InvalidWord((*word).to_string()));
        }

        self.index.index_document(document_id, &words);
        self.store.insert(
            document_id,
            content.to_string(),
            status,
            average_rating(ratings),
        );
        Ok(())
    }

    /// Removes a document, erasing every posting that references it.
    /// A no-op when the id is not live.
    pub fn remove_document(&mut self, document_id: DocumentId) {
        if self.store.remove(document_id) {
            self.index.remove_document(document_id);
        }
    }

    /// Returns up to 5 `Actual` documents ranked for `raw_query`.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_with_status(raw_query, DocumentStatus::Actual)
    }

    /// Returns up to 5 documents with the given status ranked for `raw_query`.
    pub fn find_top_documents_with_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_with(raw_query, move |_, document_status, _| {
            document_status == status
        })
    }

    /// Returns up to 5 documents ranked for `raw_query`, keeping only
    /// postings for which `predicate(id, status, rating)` holds.
    ///
    /// The predicate must not call back into the engine.
    pub fn find_top_documents_with<F>(&self, raw_query: &str, predicate: F) -> Result<Vec<Document>>
    where
        F: Fn(DocumentId, DocumentStatus, i32) -> bool,
    {
        let query = Query::parse(raw_query, &self.stop_words)?;
        let mut matched = self.find_all_documents(&query, predicate);
        matched.sort_by(compare_ranked);
        matched.truncate(config::MAX_RESULT_COUNT);
        Ok(matched)
    }

    /// Intersects the query with one document.
    ///
    /// Returns the query plus-words present in the document (deduplicated,
    /// ascending) and the document's status. If any minus-word occurs in the
    /// document, the word list is empty. Fails with
    /// [`SearchError::UnknownId`] for an absent id and
    /// [`SearchError::InvalidCharacter`] when the raw query contains a
    /// control character.
    pub fn match_document<'q>(
        &self,
        raw_query: &'q str,
        document_id: DocumentId,
    ) -> Result<(Vec<&'q str>, DocumentStatus)> {
        let record = self
            .store
            .get(document_id)
            .ok_or(SearchError::UnknownId(document_id))?;
        if !is_valid_word(raw_query) {
            return Err(SearchError::InvalidCharacter(raw_query.to_string()));
        }

        let query = Query::parse(raw_query, &self.stop_words)?;
        for &word in &query.minus_words {
            if self.document_has_word(document_id, word) {
                return Ok((Vec::new(), record.status));
            }
        }

        let frequencies = self.word_frequencies(document_id);
        let matched = query
            .plus_words
            .iter()
            .copied()
            .filter(|word| frequencies.contains_key(*word))
            .collect();
        Ok((matched, record.status))
    }

    /// Returns the term-frequency map of a document, or a shared empty map
    /// when the id is not live. Never fails.
    pub fn word_frequencies(&self, document_id: DocumentId) -> &HashMap<Arc<str>, f64> {
        static EMPTY: LazyLock<HashMap<Arc<str>, f64>> = LazyLock::new(HashMap::new);
        self.index.word_frequencies(document_id).unwrap_or(&EMPTY)
    }

    /// Number of live documents.
    pub fn document_count(&self) -> usize {
        self.store.len()
    }

    /// Number of configured stop words.
    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    /// Number of live document ids.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if no document is live.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Iterates live document ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.store.ids()
    }

    fn find_all_documents<F>(&self, query: &Query<'_>, predicate: F) -> Vec<Document>
    where
        F: Fn(DocumentId, DocumentStatus, i32) -> bool,
    {
        let mut relevance: BTreeMap<DocumentId, f64> = BTreeMap::new();
        for &word in &query.plus_words {
            let Some(postings) = self.index.term_postings(word) else {
                continue;
            };
            let idf = self.inverse_document_frequency(postings.len());
            for (&document_id, &tf) in postings {
                if let Some(record) = self.store.get(document_id) {
                    if predicate(document_id, record.status, record.rating) {
                        *relevance.entry(document_id).or_insert(0.0) += tf * idf;
                    }
                }
            }
        }

        self.erase_vetoed(&mut relevance, &query.minus_words);
        relevance
            .into_iter()
            .map(|(id, relevance)| self.ranked_document(id, relevance))
            .collect()
    }

    /// Erases every accumulated document vetoed by a minus-word.
    ///
    /// An indexed minus-word erases its whole posting list. A minus-word
    /// with no postings can still veto if it is a stop word: stop words
    /// never reach the index, so the stored content is scanned instead.
    fn erase_vetoed(&self, relevance: &mut BTreeMap<DocumentId, f64>, minus_words: &BTreeSet<&str>) {
        for &word in minus_words {
            if let Some(postings) = self.index.term_postings(word) {
                for document_id in postings.keys() {
                    relevance.remove(document_id);
                }
            } else if self.stop_words.contains(word) {
                relevance.retain(|&document_id, _| !self.content_contains(document_id, word));
            }
        }
    }

    fn ranked_document(&self, id: DocumentId, relevance: f64) -> Document {
        Document {
            id,
            relevance,
            rating: self.store.get(id).map_or(0, |record| record.rating),
        }
    }

    /// `ln(N / df)` over the live document count.
    fn inverse_document_frequency(&self, document_frequency: usize) -> f64 {
        (self.document_count() as f64 / document_frequency as f64).ln()
    }

    /// Whether the document contains `word`, in its indexed terms or — for
    /// stop words, which are never indexed — in its stored content.
    fn document_has_word(&self, document_id: DocumentId, word: &str) -> bool {
        if self
            .index
            .word_frequencies(document_id)
            .is_some_and(|frequencies| frequencies.contains_key(word))
        {
            return true;
        }
        self.stop_words.contains(word) && self.content_contains(document_id, word)
    }

    fn content_contains(&self, document_id: DocumentId, word: &str) -> bool {
        self.store
            .get(document_id)
            .is_some_and(|record| split_words(&record.content).any(|token| token == word))
    }
}

/// Ranking order: relevance descending, ties (within
/// [`RELEVANCE_EPSILON`](config::RELEVANCE_EPSILON)) broken by rating
/// descending.
fn compare_ranked(a: &Document, b: &Document) -> Ordering {
    if (a.relevance - b.relevance).abs() < config::RELEVANCE_EPSILON {
        b.rating.cmp(&a.rating)
    } else {
        OrderedFloat(b.relevance).cmp(&OrderedFloat(a.relevance))
    }
}

fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&rating| i64::from(rating)).sum();
    (sum / ratings.len() as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_rating() {
        assert_eq!(average_rating(&[]), 0);
        assert_eq!(average_rating(&[1, 2, 3]), 2);
        assert_eq!(average_rating(&[1, 2]), 1);
        assert_eq!(average_rating(&[-1, -2]), -1);
    }

    #[test]
    fn test_compare_ranked_breaks_ties_by_rating() {
        let better = Document {
            id: 1,
            relevance: 0.5,
            rating: 4,
        };
        let worse = Document {
            id: 2,
            relevance: 0.5 + 1e-9,
            rating: 2,
        };
        assert_eq!(compare_ranked(&better, &worse), Ordering::Less);
    }

    #[test]
    fn test_compare_ranked_prefers_relevance() {
        let better = Document {
            id: 1,
            relevance: 0.9,
            rating: 0,
        };
        let worse = Document {
            id: 2,
            relevance: 0.1,
            rating: 100,
        };
        assert_eq!(compare_ranked(&better, &worse), Ordering::Less);
    }
}
