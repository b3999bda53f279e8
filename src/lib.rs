//! # topdocs
//!
//! An in-memory full-text search engine over short documents with TF-IDF
//! ranked retrieval, minus-word vetoes, and parallel query execution.
//!
//! ## Features
//!
//! - **Inverted index** with a forward mirror (term → doc → tf and
//!   doc → term → tf), terms interned and shared across both maps
//! - **Ranked retrieval** scoring `tf · ln(N/df)` over query plus-words,
//!   filtered by a caller predicate, top-5 by (relevance, rating)
//! - **Minus-words** (`-word`) that veto any document containing them
//! - **Match API** intersecting a query with a single document
//! - **Parallel evaluation** over a rayon pool with a sharded concurrent
//!   accumulator bounding lock contention
//! - **Lifecycle** with all-or-nothing adds and invariant-preserving removal
//!
//! ## Architecture
//!
//! ```text
//! SearchEngine → { DocumentStore (content, rating, status, live ids),
//!                  TermIndex (term→doc→tf ⇄ doc→term→tf) }
//! find_top:  parse → score (tf·idf, predicate) → minus veto → sort → top 5
//! parallel:  plus-word fan-out (rayon) → ShardedMap (500 shards) → merge
//!            → minus veto → par_sort → top 5
//! Boundary:  duplicate sweep, rolling request window, paginator, batch queries
//! ```
//!
//! Ingestion is single-writer; once it quiesces, queries may run from any
//! number of threads.

/// Tuning constants: result cap, relevance tolerance, shard count.
pub mod config;
/// Duplicate-document sweep over live ids.
pub mod dedup;
/// Core document types: ids, statuses, and ranked results.
pub mod document;
/// The search engine: ingestion, ranked retrieval, and matching.
pub mod engine;
/// Error types and the crate-wide `Result` alias.
pub mod error;
/// Index data structures: document store and mirror posting maps.
pub mod index;
/// Fixed-size pagination over result slices.
pub mod paginate;
/// Batch query processing over the rayon pool.
pub mod process;
/// Query parsing: plus/minus word bags with validation.
pub mod query;
/// Rolling window of recent no-result requests.
pub mod requests;
/// Sharded concurrent accumulator used by parallel evaluation.
pub mod sharded_map;
/// Whitespace tokenizer, word validation, and the stop-word set.
pub mod tokenizer;

pub use document::{Document, DocumentId, DocumentStatus};
pub use engine::SearchEngine;
pub use error::{Result, SearchError};
pub use query::Query;
pub use sharded_map::ShardedMap;
pub use tokenizer::StopWordSet;
