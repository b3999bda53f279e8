//! Duplicate-document sweep.
//!
//! Two documents are duplicates when their word *sets* coincide — term
//! frequencies and word order are ignored. The sweep walks live ids in
//! ascending order, so the lowest id of each duplicate group survives.

use crate::document::DocumentId;
use crate::engine::SearchEngine;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

/// Removes every document whose word set equals that of a lower live id.
/// Returns the removed ids in ascending order.
pub fn remove_duplicates(engine: &mut SearchEngine) -> Vec<DocumentId> {
    // Snapshot the ids first: removal below must not invalidate iteration.
    let ids: Vec<DocumentId> = engine.ids().collect();
    let mut seen: HashSet<BTreeSet<Arc<str>>> = HashSet::new();
    let mut duplicates = Vec::new();

    for document_id in ids {
        let words: BTreeSet<Arc<str>> = engine
            .word_frequencies(document_id)
            .keys()
            .cloned()
            .collect();
        if !seen.insert(words) {
            tracing::info!(document_id, "removing duplicate document");
            duplicates.push(document_id);
        }
    }

    for &document_id in &duplicates {
        engine.remove_document(document_id);
    }
    duplicates
}
