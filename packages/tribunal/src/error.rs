//! Typed errors for proposal evaluation.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to keep the failure
//! surface strongly typed: store failures are distinguishable from
//! orchestration failures, and only the fatal paths propagate.

use thiserror::Error;

/// Errors raised by a precedent store adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure reaching the store
    #[error("precedent store unavailable: {0}")]
    Unavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Store answered with a non-success status
    #[error("precedent store error {status}: {body}")]
    Status { status: u16, body: String },

    /// Store answered with a body the adapter could not decode
    #[error("malformed store response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors raised while evaluating a proposal.
///
/// A failed primary precedent query is fatal to its evaluator and therefore
/// to the whole evaluation; the advisory trend query is absorbed by the
/// evaluator and never appears here.
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// A department's primary precedent query failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The orchestrator's deadline elapsed before all departments reported
    #[error("evaluation deadline of {timeout_ms}ms exceeded")]
    DeadlineExceeded { timeout_ms: u64 },

    /// Evaluation was cancelled
    #[error("evaluation cancelled")]
    Cancelled,

    /// A department task panicked or was aborted
    #[error("department task failed: {0}")]
    Task(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A department task finished without reporting a result
    #[error("department task ended without a result")]
    Incomplete,
}

/// Result type alias for evaluation operations.
pub type Result<T> = std::result::Result<T, EvaluationError>;

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
