//! Mirror posting maps for term-frequency lookups.
//!
//! Two maps hold the same postings from both directions: term → (doc → tf)
//! for scoring and doc → (term → tf) for removal and the word-frequency
//! accessor. Both are load-bearing and kept mutually consistent.
//!
//! Terms are interned as `Arc<str>`: the first document introducing a term
//! allocates it once and every posting in either map shares that allocation,
//! so removing a document never invalidates the terms of the others.

use crate::document::DocumentId;
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

/// The inverted index and its forward mirror.
#[derive(Debug, Default)]
pub struct TermIndex {
    /// term → (document id → term frequency)
    inverted: HashMap<Arc<str>, HashMap<DocumentId, f64>>,
    /// document id → (term → term frequency)
    forward: HashMap<DocumentId, HashMap<Arc<str>, f64>>,
}

impl TermIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes a document's words.
    ///
    /// A word occurring `c` times among `words.len()` total gets
    /// `tf = c / words.len()` in both maps. A document with no words still
    /// gets an (empty) forward entry so that it participates in removal and
    /// frequency lookups.
    pub fn index_document(&mut self, document_id: DocumentId, words: &[&str]) {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for &word in words {
            *counts.entry(word).or_insert(0) += 1;
        }

        let total = words.len() as f64;
        let mut frequencies = HashMap::with_capacity(counts.len());
        for (word, count) in counts {
            let term = self.intern(word);
            let tf = count as f64 / total;
            self.inverted
                .entry(Arc::clone(&term))
                .or_default()
                .insert(document_id, tf);
            frequencies.insert(term, tf);
        }
        self.forward.insert(document_id, frequencies);
    }

    /// Erases every posting referencing `document_id`.
    ///
    /// Terms whose last posting goes away are dropped entirely, so every
    /// term present in the index keeps a non-zero document frequency.
    pub fn remove_document(&mut self, document_id: DocumentId) {
        let Some(frequencies) = self.forward.remove(&document_id) else {
            return;
        };
        for term in frequencies.keys() {
            if let Some(postings) = self.inverted.get_mut(term.as_ref()) {
                postings.remove(&document_id);
                if postings.is_empty() {
                    self.inverted.remove(term.as_ref());
                }
            }
        }
    }

    /// Parallel variant of [`remove_document`](Self::remove_document):
    /// sweeps all posting lists across the thread pool, then drops the terms
    /// that became empty.
    pub fn remove_document_parallel(&mut self, document_id: DocumentId) {
        if self.forward.remove(&document_id).is_none() {
            return;
        }
        self.inverted.par_iter_mut().for_each(|(_, postings)| {
            postings.remove(&document_id);
        });
        self.inverted.retain(|_, postings| !postings.is_empty());
    }

    /// Returns the posting list of `word`, if any document contains it.
    pub fn term_postings(&self, word: &str) -> Option<&HashMap<DocumentId, f64>> {
        self.inverted.get(word)
    }

    /// Returns the forward posting of `document_id`, if the id is indexed.
    pub fn word_frequencies(&self, document_id: DocumentId) -> Option<&HashMap<Arc<str>, f64>> {
        self.forward.get(&document_id)
    }

    /// Number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.inverted.len()
    }

    fn intern(&self, word: &str) -> Arc<str> {
        match self.inverted.get_key_value(word) {
            Some((term, _)) => Arc::clone(term),
            None => Arc::from(word),
        }
    }
}
