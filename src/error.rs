//! Error types for ingestion, query parsing, and matching.
//!
//! Every failure is signalled synchronously at the call that caused it and
//! leaves the engine untouched; ingestion validates its input before any
//! posting is written.

use crate::document::DocumentId;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors produced by [`SearchEngine`](crate::SearchEngine) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A stop word contains a control character.
    #[error("stop word \"{0}\" contains special characters")]
    InvalidStopWord(String),
    /// A document id passed to `add_document` is negative.
    #[error("document id {0} is negative")]
    NegativeId(DocumentId),
    /// A document id passed to `add_document` is already present.
    #[error("document id {0} is already present")]
    DuplicateId(DocumentId),
    /// A document word contains a control character.
    #[error("document word \"{0}\" contains special characters")]
    InvalidWord(String),
    /// A query token is empty.
    #[error("query contains an empty word")]
    EmptyQueryWord,
    /// A query word contains a control character.
    #[error("query word \"{0}\" contains special characters")]
    InvalidCharacter(String),
    /// A query token starts with two minus characters.
    #[error("query word \"{0}\" starts with a double minus")]
    DoubleMinus(String),
    /// A query token is a lone minus with no word after it.
    #[error("no word after minus character")]
    TrailingMinus,
    /// A match request named a document id that is not present.
    #[error("document id {0} is not present")]
    UnknownId(DocumentId),
}
