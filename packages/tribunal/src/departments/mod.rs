//! The three review departments and their precedent strategies.
//!
//! One evaluator, three strategy descriptors: each department differs only
//! in how it filters and orders precedents and which risk field it reads.

pub mod evaluator;

pub use evaluator::Evaluator;

use crate::types::{FieldFilter, PrecedentQuery, Proposal, RiskField};

/// A review department's fixed identity and precedent strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    LandUse,
    Atmospheric,
    Resource,
}

impl Department {
    /// All departments, in the fixed result order of the external contract.
    pub const ALL: [Department; 3] = [
        Department::LandUse,
        Department::Atmospheric,
        Department::Resource,
    ];

    /// Position in the fixed result order.
    pub fn index(&self) -> usize {
        match self {
            Department::LandUse => 0,
            Department::Atmospheric => 1,
            Department::Resource => 2,
        }
    }

    /// Full department name, as rendered in results.
    pub fn title(&self) -> &'static str {
        match self {
            Department::LandUse => "Martian Land Use Authority",
            Department::Atmospheric => "Department of Atmospheric Stability",
            Department::Resource => "Bureau of Resource Allocation",
        }
    }

    /// The risk dimension this department scores.
    pub fn risk_field(&self) -> RiskField {
        match self {
            Department::LandUse => RiskField::LandUse,
            Department::Atmospheric => RiskField::Atmospheric,
            Department::Resource => RiskField::Resource,
        }
    }

    /// The department's nearest-precedent query for a proposal.
    ///
    /// Land-Use: same sector and development type, nearest population
    /// impact. Atmospheric: same sector (terraforming cases only when the
    /// proposal terraforms), worst atmospheric risk first. Resource: whole
    /// index, nearest water usage.
    pub fn precedent_query(&self, proposal: &Proposal) -> PrecedentQuery {
        match self {
            Department::LandUse => {
                PrecedentQuery::nearest_to("population_impact", proposal.population_impact)
                    .filter(FieldFilter::Sector(proposal.sector.clone()))
                    .filter(FieldFilter::DevelopmentType(proposal.development_type.clone()))
            }
            Department::Atmospheric => {
                let mut query = PrecedentQuery::descending("atmospheric_risk")
                    .filter(FieldFilter::Sector(proposal.sector.clone()));
                if proposal.terraforming_impact {
                    query = query.filter(FieldFilter::TerraformingImpact(true));
                }
                query
            }
            Department::Resource => {
                PrecedentQuery::nearest_to("water_usage", proposal.water_usage)
            }
        }
    }

    /// Fixed-template justification naming the risk domain and match count.
    pub fn justification(&self, matched_cases: usize) -> String {
        let domain = match self {
            Department::LandUse => "Land-use",
            Department::Atmospheric => "Atmospheric",
            Department::Resource => "Resource",
        };
        format!("{domain} risk from {matched_cases} precedent(s).")
    }
}
