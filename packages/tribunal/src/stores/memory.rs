//! In-memory precedent store for testing and development.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::error::StoreResult;
use crate::traits::store::PrecedentStore;
use crate::types::{FieldFilter, PrecedentQuery, PrecedentRecord, QueryOrder, RiskField};

/// In-memory store implementing the same query semantics as the real index.
///
/// Useful for tests and development. Not suitable for production as data is
/// lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<PrecedentRecord>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with records.
    pub fn with_records(records: impl IntoIterator<Item = PrecedentRecord>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().collect()),
        }
    }

    /// Insert a record.
    pub fn insert(&self, record: PrecedentRecord) {
        self.records.write().unwrap().push(record);
    }

    /// Number of stored records.
    pub fn record_count(&self) -> usize {
        self.records.read().unwrap().len()
    }

    /// Clear all stored records.
    pub fn clear(&self) {
        self.records.write().unwrap().clear();
    }

    fn matches(record: &PrecedentRecord, filters: &[FieldFilter]) -> bool {
        filters.iter().all(|filter| match filter {
            FieldFilter::Sector(sector) => record.sector == *sector,
            FieldFilter::DevelopmentType(dev) => record.development_type == *dev,
            FieldFilter::TerraformingImpact(flag) => record.terraforming_impact == *flag,
        })
    }
}

#[async_trait]
impl PrecedentStore for MemoryStore {
    async fn find_nearest(&self, query: &PrecedentQuery) -> StoreResult<Vec<PrecedentRecord>> {
        let records = self.records.read().unwrap();
        let mut matched: Vec<PrecedentRecord> = records
            .iter()
            .filter(|r| Self::matches(r, &query.filters))
            .cloned()
            .collect();

        // Stable sort keeps insertion order for ties, like index order does.
        match &query.order {
            QueryOrder::NearestTo { field, target } => {
                matched.sort_by(|a, b| {
                    let da = (a.numeric_field(field) - target).abs();
                    let db = (b.numeric_field(field) - target).abs();
                    da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
                });
            }
            QueryOrder::Descending { field } => {
                matched.sort_by(|a, b| {
                    let va = a.numeric_field(field);
                    let vb = b.numeric_field(field);
                    vb.partial_cmp(&va).unwrap_or(std::cmp::Ordering::Equal)
                });
            }
        }

        matched.truncate(query.limit);
        Ok(matched)
    }

    async fn sector_trend(&self, sector: &str, field: RiskField) -> StoreResult<f64> {
        let records = self.records.read().unwrap();
        let values: Vec<f64> = records
            .iter()
            .filter(|r| r.sector == sector)
            .filter_map(|r| match field {
                RiskField::LandUse => r.land_use_risk,
                RiskField::Atmospheric => r.atmospheric_risk,
                RiskField::Resource => r.resource_risk,
            })
            .collect();

        if values.is_empty() {
            return Ok(0.0);
        }
        Ok(values.iter().sum::<f64>() / values.len() as f64)
    }
}
