//! Query types consumed by precedent store adapters.
//!
//! The core never reimplements ranking or indexing; it composes the store's
//! query primitives: equality filters, one ordering, a result limit.

use serde::{Deserialize, Serialize};

/// Number of precedents a department considers per evaluation.
pub const PRECEDENT_LIMIT: usize = 5;

/// An equality filter on a precedent document field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldFilter {
    Sector(String),
    DevelopmentType(String),
    TerraformingImpact(bool),
}

impl FieldFilter {
    /// The store document field this filter constrains.
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldFilter::Sector(_) => "sector",
            FieldFilter::DevelopmentType(_) => "development_type",
            FieldFilter::TerraformingImpact(_) => "terraforming_impact",
        }
    }
}

/// How matched precedents are ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryOrder {
    /// Ascending `|field - target|`, nearest first
    NearestTo { field: String, target: f64 },

    /// Descending on a named numeric field
    Descending { field: String },
}

impl QueryOrder {
    /// The document field the ordering reads.
    pub fn field(&self) -> &str {
        match self {
            QueryOrder::NearestTo { field, .. } => field,
            QueryOrder::Descending { field } => field,
        }
    }
}

/// A nearest-precedent query: filters, one ordering, and a limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecedentQuery {
    pub filters: Vec<FieldFilter>,
    pub order: QueryOrder,
    pub limit: usize,
}

impl PrecedentQuery {
    /// Query ordered by proximity of `field` to `target`.
    pub fn nearest_to(field: impl Into<String>, target: f64) -> Self {
        Self {
            filters: vec![],
            order: QueryOrder::NearestTo {
                field: field.into(),
                target,
            },
            limit: PRECEDENT_LIMIT,
        }
    }

    /// Query ordered by descending `field`.
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            filters: vec![],
            order: QueryOrder::Descending {
                field: field.into(),
            },
            limit: PRECEDENT_LIMIT,
        }
    }

    /// Add an equality filter.
    pub fn filter(mut self, filter: FieldFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Override the result limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_compose_filters_and_order() {
        let query = PrecedentQuery::nearest_to("population_impact", 50.0)
            .filter(FieldFilter::Sector("olympus".into()))
            .filter(FieldFilter::DevelopmentType("residential".into()));

        assert_eq!(query.limit, PRECEDENT_LIMIT);
        assert_eq!(query.filters.len(), 2);
        assert_eq!(query.order.field(), "population_impact");

        let query = PrecedentQuery::descending("atmospheric_risk").with_limit(3);
        assert_eq!(query.limit, 3);
        assert_eq!(query.order.field(), "atmospheric_risk");
    }
}
