//! Index data structures: document store and mirror posting maps.

/// Term postings: the inverted and forward maps, kept mutually consistent.
pub mod postings;
/// Document contents, metadata, and the live-id set.
pub mod store;

pub use postings::TermIndex;
pub use store::{DocumentRecord, DocumentStore};
