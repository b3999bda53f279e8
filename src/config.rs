//! Global configuration constants for topdocs.
//!
//! All tuning parameters are defined here as compile-time constants.

/// Maximum number of documents returned by a top-documents query.
pub const MAX_RESULT_COUNT: usize = 5;

/// Tolerance used when comparing relevance values.
///
/// Two relevances closer than this are considered equal and the tie is
/// broken by rating. Parallel accumulation reorders floating additions,
/// so equality across evaluation strategies only holds within this bound.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// Number of shards in the concurrent relevance accumulator.
///
/// Documents are assigned to shards by `id mod ACCUMULATOR_SHARDS`; a larger
/// value bounds contention during the parallel plus-word fan-out.
pub const ACCUMULATOR_SHARDS: usize = 500;

/// Capacity of the rolling request window (one slot per minute of a day).
pub const REQUEST_WINDOW_SIZE: usize = 1440;
