//! Testing utilities including a mock precedent store.
//!
//! Useful for exercising evaluators and the orchestrator without a real
//! index: canned matches, injected failures, artificial latency, and call
//! recording for assertions.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::error::{StoreError, StoreResult};
use crate::traits::store::PrecedentStore;
use crate::types::{PrecedentQuery, PrecedentRecord, RiskField};

/// A mock precedent store with deterministic, configurable responses.
///
/// Canned matches and injected behavior are keyed by the query's order
/// field, which uniquely identifies the department issuing it
/// (`population_impact` for Land-Use, `atmospheric_risk` for Atmospheric,
/// `water_usage` for Resource).
#[derive(Default)]
pub struct MockStore {
    matches: RwLock<HashMap<String, Vec<PrecedentRecord>>>,
    trends: RwLock<HashMap<&'static str, f64>>,
    nearest_failures: RwLock<HashSet<String>>,
    trend_failures: RwLock<HashSet<&'static str>>,
    delays: RwLock<HashMap<String, Duration>>,
    calls: Arc<RwLock<Vec<MockStoreCall>>>,
}

/// Record of a call made to the mock store.
#[derive(Debug, Clone, PartialEq)]
pub enum MockStoreCall {
    FindNearest { order_field: String, limit: usize },
    SectorTrend { sector: String, field: RiskField },
}

impl MockStore {
    /// Create a mock store answering every query with no matches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Can matched records for queries ordering by `order_field`.
    pub fn with_matches(
        self,
        order_field: impl Into<String>,
        records: Vec<PrecedentRecord>,
    ) -> Self {
        self.matches.write().unwrap().insert(order_field.into(), records);
        self
    }

    /// Can matches carrying the given risk values, with generated case ids.
    pub fn with_risk_values(
        self,
        order_field: impl Into<String>,
        field: RiskField,
        values: &[f64],
    ) -> Self {
        let records = values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let mut record = PrecedentRecord::new(format!("case_{:03}", i + 1));
                match field {
                    RiskField::LandUse => record.land_use_risk = Some(*v),
                    RiskField::Atmospheric => record.atmospheric_risk = Some(*v),
                    RiskField::Resource => record.resource_risk = Some(*v),
                }
                record
            })
            .collect();
        self.with_matches(order_field, records)
    }

    /// Can an advisory trend value for a risk field.
    pub fn with_trend(self, field: RiskField, value: f64) -> Self {
        self.trends.write().unwrap().insert(field.field_name(), value);
        self
    }

    /// Fail primary queries ordering by `order_field`.
    pub fn with_nearest_failure(self, order_field: impl Into<String>) -> Self {
        self.nearest_failures.write().unwrap().insert(order_field.into());
        self
    }

    /// Fail trend queries for a risk field.
    pub fn with_trend_failure(self, field: RiskField) -> Self {
        self.trend_failures.write().unwrap().insert(field.field_name());
        self
    }

    /// Delay primary queries ordering by `order_field`.
    pub fn with_delay(self, order_field: impl Into<String>, delay: Duration) -> Self {
        self.delays.write().unwrap().insert(order_field.into(), delay);
        self
    }

    /// All calls made so far.
    pub fn calls(&self) -> Vec<MockStoreCall> {
        self.calls.read().unwrap().clone()
    }

    fn unavailable() -> StoreError {
        StoreError::Unavailable("mock store configured to fail".into())
    }
}

#[async_trait]
impl PrecedentStore for MockStore {
    async fn find_nearest(&self, query: &PrecedentQuery) -> StoreResult<Vec<PrecedentRecord>> {
        let order_field = query.order.field().to_string();
        self.calls.write().unwrap().push(MockStoreCall::FindNearest {
            order_field: order_field.clone(),
            limit: query.limit,
        });

        let delay = self.delays.read().unwrap().get(&order_field).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.nearest_failures.read().unwrap().contains(&order_field) {
            return Err(Self::unavailable());
        }

        let mut records = self
            .matches
            .read()
            .unwrap()
            .get(&order_field)
            .cloned()
            .unwrap_or_default();
        records.truncate(query.limit);
        Ok(records)
    }

    async fn sector_trend(&self, sector: &str, field: RiskField) -> StoreResult<f64> {
        self.calls.write().unwrap().push(MockStoreCall::SectorTrend {
            sector: sector.to_string(),
            field,
        });

        if self.trend_failures.read().unwrap().contains(field.field_name()) {
            return Err(Self::unavailable());
        }

        Ok(self
            .trends
            .read()
            .unwrap()
            .get(field.field_name())
            .copied()
            .unwrap_or(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrecedentQuery;

    #[tokio::test]
    async fn canned_matches_are_keyed_by_order_field() {
        let store = MockStore::new().with_risk_values(
            "population_impact",
            RiskField::LandUse,
            &[0.1, 0.2],
        );

        let matched = store
            .find_nearest(&PrecedentQuery::nearest_to("population_impact", 50.0))
            .await
            .unwrap();
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].case_id, "case_001");

        let other = store
            .find_nearest(&PrecedentQuery::nearest_to("water_usage", 10.0))
            .await
            .unwrap();
        assert!(other.is_empty());
    }

    #[tokio::test]
    async fn records_calls_and_injects_failures() {
        let store = MockStore::new()
            .with_nearest_failure("water_usage")
            .with_trend_failure(RiskField::Resource);

        let err = store
            .find_nearest(&PrecedentQuery::nearest_to("water_usage", 1.0))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));

        let err = store.sector_trend("olympus", RiskField::Resource).await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));

        assert_eq!(
            store.calls(),
            vec![
                MockStoreCall::FindNearest {
                    order_field: "water_usage".into(),
                    limit: 5
                },
                MockStoreCall::SectorTrend {
                    sector: "olympus".into(),
                    field: RiskField::Resource
                },
            ]
        );
    }
}
