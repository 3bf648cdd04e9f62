//! Concurrent evaluation of a proposal by all three departments.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::arbitration::arbitrate_results;
use crate::departments::{Department, Evaluator};
use crate::error::{EvaluationError, Result};
use crate::traits::store::PrecedentStore;
use crate::types::{ArbitrationVerdict, DepartmentResult, Proposal};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs the three department evaluators concurrently and arbitrates.
pub struct Orchestrator<S: ?Sized> {
    store: Arc<S>,
    timeout: Duration,
}

impl<S: PrecedentStore + ?Sized + 'static> Orchestrator<S> {
    /// Create an orchestrator over a precedent store.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the evaluation deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Evaluate a proposal in all three departments and arbitrate.
    ///
    /// The evaluators run as independent tasks; results are assembled in
    /// the fixed Land-Use, Atmospheric, Resource order regardless of
    /// completion order. If any evaluator fails or the deadline elapses,
    /// the remaining tasks are aborted and the whole evaluation fails —
    /// a partial verdict is never returned.
    pub async fn run(&self, proposal: &Proposal) -> Result<ArbitrationVerdict> {
        let mut tasks: JoinSet<(Department, Result<DepartmentResult>)> = JoinSet::new();
        for department in Department::ALL {
            let evaluator = Evaluator::new(department, Arc::clone(&self.store));
            let proposal = proposal.clone();
            tasks.spawn(async move {
                let result = evaluator.evaluate(&proposal).await;
                (department, result)
            });
        }

        let collected = tokio::time::timeout(self.timeout, collect(&mut tasks)).await;
        let departments = match collected {
            Ok(Ok(departments)) => departments,
            Ok(Err(error)) => {
                tasks.abort_all();
                return Err(error);
            }
            Err(_) => {
                tasks.abort_all();
                return Err(EvaluationError::DeadlineExceeded {
                    timeout_ms: self.timeout.as_millis() as u64,
                });
            }
        };

        let final_decision = arbitrate_results(&departments);
        debug!(final_decision = ?final_decision, "arbitration complete");

        Ok(ArbitrationVerdict {
            departments,
            final_decision,
        })
    }

    /// Evaluate with external cancellation.
    pub async fn run_with_cancel(
        &self,
        proposal: &Proposal,
        cancel: CancellationToken,
    ) -> Result<ArbitrationVerdict> {
        tokio::select! {
            result = self.run(proposal) => result,
            _ = cancel.cancelled() => Err(EvaluationError::Cancelled),
        }
    }
}

/// Drain the task set into the fixed department order, failing fast.
async fn collect(
    tasks: &mut JoinSet<(Department, Result<DepartmentResult>)>,
) -> Result<[DepartmentResult; 3]> {
    let mut slots: [Option<DepartmentResult>; 3] = [None, None, None];
    while let Some(joined) = tasks.join_next().await {
        let (department, result) = joined.map_err(|e| EvaluationError::Task(Box::new(e)))?;
        slots[department.index()] = Some(result?);
    }

    match slots {
        [Some(land_use), Some(atmospheric), Some(resource)] => {
            Ok([land_use, atmospheric, resource])
        }
        _ => Err(EvaluationError::Incomplete),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockStore;
    use crate::types::{RiskField, Verdict};

    fn proposal() -> Proposal {
        Proposal::new("olympus", "residential")
            .with_population_impact(50.0)
            .with_water_usage(10.0)
            .with_energy_consumption(20.0)
    }

    #[tokio::test]
    async fn results_keep_fixed_order_despite_completion_order() {
        // land-use answers slowest, resource fastest
        let store = Arc::new(
            MockStore::new()
                .with_risk_values("population_impact", RiskField::LandUse, &[0.1])
                .with_risk_values("atmospheric_risk", RiskField::Atmospheric, &[0.5])
                .with_risk_values("water_usage", RiskField::Resource, &[0.9])
                .with_delay("population_impact", Duration::from_millis(50))
                .with_delay("atmospheric_risk", Duration::from_millis(20)),
        );

        let verdict = Orchestrator::new(store).run(&proposal()).await.unwrap();

        let names: Vec<&str> = verdict
            .departments
            .iter()
            .map(|d| d.department.as_str())
            .collect();
        assert_eq!(
            names,
            [
                "Martian Land Use Authority",
                "Department of Atmospheric Stability",
                "Bureau of Resource Allocation",
            ]
        );
        assert_eq!(verdict.departments[0].verdict, Verdict::Approve);
        assert_eq!(verdict.departments[1].verdict, Verdict::Conditional);
        assert_eq!(verdict.departments[2].verdict, Verdict::Reject);
        assert_eq!(verdict.final_decision, Verdict::Conditional);
    }

    #[tokio::test]
    async fn one_failed_evaluator_fails_the_whole_run() {
        let store = Arc::new(
            MockStore::new()
                .with_risk_values("population_impact", RiskField::LandUse, &[0.1])
                .with_risk_values("atmospheric_risk", RiskField::Atmospheric, &[0.1])
                .with_nearest_failure("water_usage"),
        );

        let error = Orchestrator::new(store).run(&proposal()).await.unwrap_err();
        assert!(matches!(error, EvaluationError::Store(_)));
    }

    #[tokio::test]
    async fn deadline_aborts_inflight_evaluators() {
        let store = Arc::new(
            MockStore::new().with_delay("water_usage", Duration::from_secs(5)),
        );

        let error = Orchestrator::new(store)
            .with_timeout(Duration::from_millis(20))
            .run(&proposal())
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            EvaluationError::DeadlineExceeded { timeout_ms: 20 }
        ));
    }

    #[tokio::test]
    async fn cancellation_token_stops_the_run() {
        let store = Arc::new(
            MockStore::new().with_delay("water_usage", Duration::from_secs(5)),
        );
        let cancel = CancellationToken::new();
        let orchestrator = Orchestrator::new(store);

        let cancelled = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            cancelled.cancel();
        });

        let error = orchestrator
            .run_with_cancel(&proposal(), cancel)
            .await
            .unwrap_err();
        assert!(matches!(error, EvaluationError::Cancelled));
    }
}
