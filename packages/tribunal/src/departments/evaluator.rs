//! The parametrized department evaluator.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::departments::Department;
use crate::error::Result;
use crate::traits::store::PrecedentStore;
use crate::types::{classify, confidence, verdict::round3, DepartmentResult, Proposal};

/// Evaluates proposals for one department against an injected store.
pub struct Evaluator<S: ?Sized> {
    department: Department,
    store: Arc<S>,
}

impl<S: PrecedentStore + ?Sized> Evaluator<S> {
    /// Create an evaluator for a department.
    pub fn new(department: Department, store: Arc<S>) -> Self {
        Self { department, store }
    }

    /// The department this evaluator represents.
    pub fn department(&self) -> Department {
        self.department
    }

    /// Score a proposal against precedent.
    ///
    /// The primary nearest-precedent query and the advisory sector-trend
    /// query run concurrently. A failed primary query is fatal; a failed
    /// trend query is logged and defaults to 0 without affecting the
    /// verdict.
    pub async fn evaluate(&self, proposal: &Proposal) -> Result<DepartmentResult> {
        let query = self.department.precedent_query(proposal);
        let field = self.department.risk_field();

        let (matches, trend) = tokio::join!(
            self.store.find_nearest(&query),
            self.store.sector_trend(&proposal.sector, field),
        );

        let matches = matches?;
        let agg_trend = match trend {
            Ok(value) => value,
            Err(error) => {
                warn!(
                    department = self.department.title(),
                    error = %error,
                    "sector trend unavailable, defaulting to 0"
                );
                0.0
            }
        };

        let risks: Vec<f64> = matches.iter().map(|r| r.risk_value(field)).collect();
        let risk_score = round3(mean(&risks));
        let verdict = classify(risk_score);
        let matched_cases = matches.len();

        debug!(
            department = self.department.title(),
            risk_score,
            matched_cases,
            verdict = ?verdict,
            "department evaluation complete"
        );

        Ok(DepartmentResult {
            department: self.department.title().to_string(),
            verdict,
            confidence: confidence(risk_score),
            risk_score,
            matched_cases,
            justification: self.department.justification(matched_cases),
            trace: matches.into_iter().map(|r| r.case_id).collect(),
            agg_trend,
        })
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
