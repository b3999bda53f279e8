//! Parallel query evaluation over the rayon work-stealing pool.
//!
//! Plus-words fan out across the pool; each worker computes the word's idf
//! once and walks its posting list, accumulating into the sharded concurrent
//! map. After the fan-out joins, the shards merge into one ordered map,
//! minus-word erasure is applied, and the results are materialised and
//! sorted under the same contract as the sequential path. Relevances agree
//! with the sequential evaluator within
//! [`RELEVANCE_EPSILON`](crate::config::RELEVANCE_EPSILON) — floating
//! addition is not associative, so bit-identical sums are not guaranteed.

use super::{compare_ranked, SearchEngine};
use crate::config;
use crate::document::{Document, DocumentId, DocumentStatus};
use crate::error::{Result, SearchError};
use crate::query::Query;
use crate::sharded_map::ShardedMap;
use crate::tokenizer::is_valid_word;
use rayon::prelude::*;

impl SearchEngine {
    /// Parallel variant of
    /// [`find_top_documents`](SearchEngine::find_top_documents).
    pub fn find_top_documents_parallel(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_parallel_with_status(raw_query, DocumentStatus::Actual)
    }

    /// Parallel variant of
    /// [`find_top_documents_with_status`](SearchEngine::find_top_documents_with_status).
    pub fn find_top_documents_parallel_with_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_parallel_with(raw_query, move |_, document_status, _| {
            document_status == status
        })
    }

    /// Parallel variant of
    /// [`find_top_documents_with`](SearchEngine::find_top_documents_with).
    ///
    /// The predicate runs concurrently from pool workers and must not call
    /// back into the engine.
    pub fn find_top_documents_parallel_with<F>(
        &self,
        raw_query: &str,
        predicate: F,
    ) -> Result<Vec<Document>>
    where
        F: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        let query = Query::parse(raw_query, &self.stop_words)?;
        let mut matched = self.find_all_documents_parallel(&query, predicate);
        matched.par_sort_by(compare_ranked);
        matched.truncate(config::MAX_RESULT_COUNT);
        Ok(matched)
    }

    /// Parallel variant of [`match_document`](SearchEngine::match_document).
    pub fn match_document_parallel<'q>(
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
        if query
            .minus_words
            .par_iter()
            .any(|&word| self.document_has_word(document_id, word))
        {
            return Ok((Vec::new(), record.status));
        }

        let frequencies = self.word_frequencies(document_id);
        let matched = query
            .plus_words
            .par_iter()
            .copied()
            .filter(|word| frequencies.contains_key(*word))
            .collect();
        Ok((matched, record.status))
    }

    /// Parallel variant of
    /// [`remove_document`](SearchEngine::remove_document): the posting lists
    /// are swept across the pool instead of walked through the forward map.
    pub fn remove_document_parallel(&mut self, document_id: DocumentId) {
        if self.store.remove(document_id) {
            self.index.remove_document_parallel(document_id);
        }
    }

    fn find_all_documents_parallel<F>(&self, query: &Query<'_>, predicate: F) -> Vec<Document>
    where
        F: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        let accumulator: ShardedMap<f64> = ShardedMap::new(config::ACCUMULATOR_SHARDS);
        query.plus_words.par_iter().for_each(|&word| {
            let Some(postings) = self.index.term_postings(word) else {
                return;
            };
            let idf = self.inverse_document_frequency(postings.len());
            postings.par_iter().for_each(|(&document_id, &tf)| {
                if let Some(record) = self.store.get(document_id) {
                    if predicate(document_id, record.status, record.rating) {
                        *accumulator.entry(document_id) += tf * idf;
                    }
                }
            });
        });

        let mut relevance = accumulator.merge();
        self.erase_vetoed(&mut relevance, &query.minus_words);
        relevance
            .into_par_iter()
            .map(|(id, relevance)| self.ranked_document(id, relevance))
            .collect()
    }
}
