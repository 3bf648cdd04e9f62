//! The precedent store seam.
//!
//! Evaluators receive a store by injection rather than reaching for a
//! process-global client, so they can run against an in-memory or mock
//! store without any environment setup.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::types::{PrecedentQuery, PrecedentRecord, RiskField};

/// Read-only access to the precedent index.
#[async_trait]
pub trait PrecedentStore: Send + Sync {
    /// Fetch up to `query.limit` precedents matching the query's filters,
    /// ordered per `query.order` (nearest first for proximity orders).
    ///
    /// An empty index or an unmatched filter yields `Ok(vec![])`, never an
    /// error; errors mean the store itself could not answer.
    async fn find_nearest(&self, query: &PrecedentQuery) -> StoreResult<Vec<PrecedentRecord>>;

    /// Average of `field` across all precedents in `sector`, 0 when no
    /// document carries the field.
    ///
    /// Advisory only: callers attach the value for explainability and must
    /// tolerate failure.
    async fn sector_trend(&self, sector: &str, field: RiskField) -> StoreResult<f64>;
}
