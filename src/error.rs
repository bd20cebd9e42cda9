//! Errors returned by histogram construction, analysis and export.

use thiserror::Error;

/// Error type for all fallible operations of this crate.
#[derive(Debug, Error)]
pub enum HistError {
    /// A requested percentile fraction was outside `[0, 1]` (or NaN). This is a caller bug: the call
    /// produces no result and should not be retried without fixing the input.
    #[error("invalid percentile {0}, must be in [0, 1]")]
    InvalidFraction(f64),

    /// A histogram must have at least one bucket.
    #[error("histogram has no buckets")]
    NoBuckets,

    /// `boundaries` must have exactly one more element than `counts`.
    #[error("got {boundaries} boundaries for {counts} counts")]
    LengthMismatch { boundaries: usize, counts: usize },

    /// `boundaries[index]` is NaN or smaller than `boundaries[index - 1]`.
    #[error("boundaries must be non-decreasing, violated at index {index}")]
    NonMonotonic { index: usize },

    #[error("malformed CSV at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Failure reported by the underlying sink or source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
