//! Rolling window of recent search requests.
//!
//! A [`RequestQueue`] forwards queries to the engine and remembers, for the
//! last 1,440 requests, whether each came back empty. Both the push and the
//! no-result count are constant-time. A query that fails records nothing.

use crate::config;
use crate::document::{Document, DocumentId, DocumentStatus};
use crate::engine::SearchEngine;
use crate::error::Result;
use std::collections::VecDeque;

/// Tracks how many of the most recent requests produced no results.
#[derive(Debug)]
pub struct RequestQueue<'a> {
    engine: &'a SearchEngine,
    requests: VecDeque<bool>,
    no_result_count: usize,
}

impl<'a> RequestQueue<'a> {
    /// Creates a queue over `engine` with an empty window.
    pub fn new(engine: &'a SearchEngine) -> Self {
        Self {
            engine,
            requests: VecDeque::with_capacity(config::REQUEST_WINDOW_SIZE),
            no_result_count: 0,
        }
    }

    /// Runs a default (status `Actual`) search and records the outcome.
    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        self.add_find_request_with_status(raw_query, DocumentStatus::Actual)
    }

    /// Runs a status-filtered search and records the outcome.
    pub fn add_find_request_with_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.add_find_request_with(raw_query, move |_, document_status, _| {
            document_status == status
        })
    }

    /// Runs a predicate-filtered search and records the outcome.
    pub fn add_find_request_with<F>(&mut self, raw_query: &str, predicate: F) -> Result<Vec<Document>>
    where
        F: Fn(DocumentId, DocumentStatus, i32) -> bool,
    {
        let results = self.engine.find_top_documents_with(raw_query, predicate)?;
        self.record(results.is_empty());
        Ok(results)
    }

    /// Number of no-result requests within the window.
    pub fn no_result_requests(&self) -> usize {
        self.no_result_count
    }

    fn record(&mut self, no_results: bool) {
        self.requests.push_back(no_results);
        if no_results {
            self.no_result_count += 1;
        }
        if self.requests.len() > config::REQUEST_WINDOW_SIZE
            && self.requests.pop_front() == Some(true)
        {
            self.no_result_count -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::StopWordSet;

    fn engine() -> SearchEngine {
        let mut engine = SearchEngine::new(StopWordSet::from_text("in and with").unwrap());
        engine
            .add_document(1, "curly cat", DocumentStatus::Actual, &[1])
            .unwrap();
        engine
    }

    #[test]
    fn test_counts_empty_results() {
        let engine = engine();
        let mut queue = RequestQueue::new(&engine);
        queue.add_find_request("empty request").unwrap();
        queue.add_find_request("curly cat").unwrap();
        queue.add_find_request("sparrow").unwrap();
        assert_eq!(queue.no_result_requests(), 2);
    }

    #[test]
    fn test_window_rolls_over() {
        let engine = engine();
        let mut queue = RequestQueue::new(&engine);
        for _ in 0..config::REQUEST_WINDOW_SIZE {
            queue.add_find_request("empty request").unwrap();
        }
        assert_eq!(queue.no_result_requests(), config::REQUEST_WINDOW_SIZE);

        // The next request evicts one empty-result slot from the front.
        queue.add_find_request("curly cat").unwrap();
        assert_eq!(queue.no_result_requests(), config::REQUEST_WINDOW_SIZE - 1);
    }

    #[test]
    fn test_failed_request_records_nothing() {
        let engine = engine();
        let mut queue = RequestQueue::new(&engine);
        assert!(queue.add_find_request("cat -").is_err());
        assert_eq!(queue.no_result_requests(), 0);
    }
}
