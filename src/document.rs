//! Core document types for topdocs.
//!
//! A [`Document`] is the unit returned by ranked retrieval: the document id,
//! its accumulated relevance for the query, and its stored average rating.
//! [`DocumentStatus`] is the moderation state recorded at ingestion and used
//! by the default search predicate.

use serde::{Deserialize, Serialize};

/// Identifier of an indexed document.
///
/// Ids are non-negative; the signed type exists so that a negative id can be
/// rejected at the API boundary instead of wrapping silently.
pub type DocumentId = i32;

/// Moderation state of a document, fixed at ingestion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentStatus {
    /// Live content, matched by the default search predicate.
    #[default]
    Actual,
    /// Content that is indexed but no longer relevant.
    Irrelevant,
    /// Content hidden by moderation.
    Banned,
    /// Content scheduled for deletion.
    Removed,
}

/// A ranked search result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Id of the matched document.
    pub id: DocumentId,
    /// Sum of tf·idf contributions over the query plus-words.
    pub relevance: f64,
    /// Truncated integer mean of the ratings supplied at ingestion.
    pub rating: i32,
}
