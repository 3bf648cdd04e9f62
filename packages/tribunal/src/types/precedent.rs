//! Precedent records and the risk fields extracted from them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The per-department risk dimension stored on precedent records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskField {
    LandUse,
    Atmospheric,
    Resource,
}

impl RiskField {
    /// The store document field holding this risk value.
    pub fn field_name(&self) -> &'static str {
        match self {
            RiskField::LandUse => "land_use_risk",
            RiskField::Atmospheric => "atmospheric_risk",
            RiskField::Resource => "resource_risk",
        }
    }
}

/// A historical governance case, as stored in the precedent index.
///
/// Owned by the external store and read-only here. Risk fields tolerate the
/// corpus's loose typing: numbers, numeric strings, and null all decode, and
/// anything else reads back as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrecedentRecord {
    /// Unique case identifier within the store
    #[serde(default)]
    pub case_id: String,

    #[serde(default)]
    pub sector: String,

    #[serde(default)]
    pub development_type: String,

    #[serde(default)]
    pub population_impact: f64,

    #[serde(default)]
    pub water_usage: f64,

    #[serde(default)]
    pub energy_consumption: f64,

    #[serde(default)]
    pub terraforming_impact: bool,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub land_use_risk: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub atmospheric_risk: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub resource_risk: Option<f64>,

    /// Verdict the case originally received, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_verdict: Option<String>,

    /// One-line description of the case
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl PrecedentRecord {
    /// Create a record with the given case id; everything else zeroed.
    pub fn new(case_id: impl Into<String>) -> Self {
        Self {
            case_id: case_id.into(),
            ..Default::default()
        }
    }

    /// Read one risk dimension, coercing a missing value to 0.
    pub fn risk_value(&self, field: RiskField) -> f64 {
        let value = match field {
            RiskField::LandUse => self.land_use_risk,
            RiskField::Atmospheric => self.atmospheric_risk,
            RiskField::Resource => self.resource_risk,
        };
        value.unwrap_or(0.0)
    }

    /// Read a numeric document field by store name, 0 when unknown.
    ///
    /// Supports the fields queries may order by.
    pub fn numeric_field(&self, name: &str) -> f64 {
        match name {
            "population_impact" => self.population_impact,
            "water_usage" => self.water_usage,
            "energy_consumption" => self.energy_consumption,
            "land_use_risk" => self.risk_value(RiskField::LandUse),
            "atmospheric_risk" => self.risk_value(RiskField::Atmospheric),
            "resource_risk" => self.risk_value(RiskField::Resource),
            _ => 0.0,
        }
    }
}

/// Decode a risk value from a number, a numeric string, or null.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_value_defaults_missing_to_zero() {
        let record = PrecedentRecord::new("case_001");
        assert_eq!(record.risk_value(RiskField::LandUse), 0.0);

        let record = PrecedentRecord {
            atmospheric_risk: Some(0.4),
            ..PrecedentRecord::new("case_002")
        };
        assert_eq!(record.risk_value(RiskField::Atmospheric), 0.4);
        assert_eq!(record.risk_value(RiskField::Resource), 0.0);
    }

    #[test]
    fn lenient_deserialization_coerces_loose_values() {
        let record: PrecedentRecord = serde_json::from_str(
            r#"{
                "case_id": "case_003",
                "land_use_risk": "0.25",
                "atmospheric_risk": null,
                "resource_risk": {"unexpected": true}
            }"#,
        )
        .unwrap();

        assert_eq!(record.land_use_risk, Some(0.25));
        assert_eq!(record.atmospheric_risk, None);
        assert_eq!(record.resource_risk, None);
        assert_eq!(record.risk_value(RiskField::Resource), 0.0);
    }

    #[test]
    fn numeric_field_reads_orderable_fields() {
        let record = PrecedentRecord {
            population_impact: 120.0,
            water_usage: 9.5,
            atmospheric_risk: Some(0.7),
            ..PrecedentRecord::new("case_004")
        };

        assert_eq!(record.numeric_field("population_impact"), 120.0);
        assert_eq!(record.numeric_field("water_usage"), 9.5);
        assert_eq!(record.numeric_field("atmospheric_risk"), 0.7);
        assert_eq!(record.numeric_field("no_such_field"), 0.0);
    }
}
