//! Inbound proposal type.

use serde::{Deserialize, Serialize};

/// A development proposal under review.
///
/// Arrives pre-validated from the HTTP collaborator: `sector` and
/// `development_type` are non-empty, numeric fields default to 0 when the
/// request omitted them. Immutable once constructed.
///
/// Sector and development type are open vocabularies owned by the precedent
/// store, so they stay strings rather than closed enums.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    /// Colony sector the development targets (e.g. "olympus")
    pub sector: String,

    /// Kind of development (e.g. "residential", "mining")
    pub development_type: String,

    /// Expected population affected by the development
    #[serde(default)]
    pub population_impact: f64,

    /// Projected water draw, in store units (>= 0)
    #[serde(default)]
    pub water_usage: f64,

    /// Projected energy draw, in store units (>= 0)
    #[serde(default)]
    pub energy_consumption: f64,

    /// Whether the development alters atmospheric composition
    #[serde(default)]
    pub terraforming_impact: bool,
}

impl Proposal {
    /// Create a proposal with all numeric fields zeroed.
    pub fn new(sector: impl Into<String>, development_type: impl Into<String>) -> Self {
        Self {
            sector: sector.into(),
            development_type: development_type.into(),
            population_impact: 0.0,
            water_usage: 0.0,
            energy_consumption: 0.0,
            terraforming_impact: false,
        }
    }

    /// Set the population impact.
    pub fn with_population_impact(mut self, impact: f64) -> Self {
        self.population_impact = impact;
        self
    }

    /// Set the water usage.
    pub fn with_water_usage(mut self, usage: f64) -> Self {
        self.water_usage = usage;
        self
    }

    /// Set the energy consumption.
    pub fn with_energy_consumption(mut self, consumption: f64) -> Self {
        self.energy_consumption = consumption;
        self
    }

    /// Mark the proposal as having terraforming impact.
    pub fn with_terraforming_impact(mut self) -> Self {
        self.terraforming_impact = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let proposal: Proposal = serde_json::from_str(
            r#"{"sector":"olympus","developmentType":"residential","populationImpact":50}"#,
        )
        .unwrap();

        assert_eq!(proposal.sector, "olympus");
        assert_eq!(proposal.development_type, "residential");
        assert_eq!(proposal.population_impact, 50.0);
        assert_eq!(proposal.water_usage, 0.0);
        assert!(!proposal.terraforming_impact);
    }
}
