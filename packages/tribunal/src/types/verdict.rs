//! Verdicts, department results, and the scoring functions behind them.

use serde::{Deserialize, Serialize};

/// A categorical judgment, per department or final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Approve,
    Conditional,
    Reject,
}

/// Map a risk score onto a verdict.
///
/// Boundaries are inclusive toward CONDITIONAL: exactly 0.65 or 0.35 stays
/// CONDITIONAL.
pub fn classify(risk_score: f64) -> Verdict {
    if risk_score > 0.65 {
        Verdict::Reject
    } else if risk_score < 0.35 {
        Verdict::Approve
    } else {
        Verdict::Conditional
    }
}

/// Confidence proxy: maximal at the 0.5 midpoint, decaying linearly toward
/// the extremes. Deliberately simple, not a statistical interval.
pub fn confidence(risk_score: f64) -> f64 {
    round2(1.0 - (risk_score - 0.5).abs().min(1.0))
}

/// Round to 3 decimal places (risk score precision).
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Round to 2 decimal places (confidence precision).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One department's assessment of a proposal.
///
/// Immutable once returned; `trace` preserves the store's result ordering
/// for explainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentResult {
    /// Full department name
    pub department: String,

    pub verdict: Verdict,

    /// Confidence in [0,1], 2 decimal places
    pub confidence: f64,

    /// Mean precedent risk in [0,1], 3 decimal places
    pub risk_score: f64,

    /// Number of precedents the score was derived from
    pub matched_cases: usize,

    pub justification: String,

    /// Case ids of the matched precedents, in store order
    pub trace: Vec<String>,

    /// Advisory sector-wide average of this department's risk field
    pub agg_trend: f64,
}

/// The full review outcome: three department results plus the arbitrated
/// final decision. `final_decision` is a pure function of the three
/// verdicts; nothing is updated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArbitrationVerdict {
    /// Fixed order: Land-Use, Atmospheric, Resource
    pub departments: [DepartmentResult; 3],

    pub final_decision: Verdict,
}
