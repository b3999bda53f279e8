//! Batch query processing.
//!
//! Evaluates many raw queries against one engine across the rayon pool. The
//! engine must be quiescent (no concurrent ingestion); result order matches
//! the input order, and the first failing query aborts the batch.

use crate::document::Document;
use crate::engine::SearchEngine;
use crate::error::Result;
use rayon::prelude::*;

/// Runs `find_top_documents` for every query in parallel, preserving input
/// order.
pub fn process_queries<Q>(engine: &SearchEngine, queries: &[Q]) -> Result<Vec<Vec<Document>>>
where
    Q: AsRef<str> + Sync,
{
    queries
        .par_iter()
        .map(|query| engine.find_top_documents(query.as_ref()))
        .collect()
}

/// Like [`process_queries`], flattening the per-query result lists in order.
pub fn process_queries_joined<Q>(engine: &SearchEngine, queries: &[Q]) -> Result<Vec<Document>>
where
    Q: AsRef<str> + Sync,
{
    Ok(process_queries(engine, queries)?.into_iter().flatten().collect())
}
