//! Precedent-Driven Review of Martian Development Proposals
//!
//! Evaluates a development proposal against historical precedent and
//! produces a multi-department risk verdict plus a single arbitrated final
//! decision. Three departments — Land-Use, Atmospheric, Resource — each
//! query the precedent store with their own similarity strategy, reduce the
//! matches to a bounded risk score, and a deterministic majority-with-veto
//! rule combines their verdicts.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tribunal::{ElasticConfig, ElasticStore, Orchestrator, Proposal};
//!
//! let store = Arc::new(ElasticStore::new(ElasticConfig::from_env())?);
//! let orchestrator = Orchestrator::new(store);
//!
//! let proposal = Proposal::new("olympus", "residential")
//!     .with_population_impact(50.0)
//!     .with_water_usage(10.0);
//!
//! let verdict = orchestrator.run(&proposal).await?;
//! println!("{:?}", verdict.final_decision);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - The precedent store seam
//! - [`types`] - Proposals, precedents, queries, verdicts
//! - [`departments`] - Department strategies and the parametrized evaluator
//! - [`arbitration`] - The deterministic combination rule
//! - [`orchestrator`] - Concurrent evaluation of all three departments
//! - [`stores`] - Store implementations (Elasticsearch, in-memory)
//! - [`testing`] - Mock store for tests

pub mod arbitration;
pub mod departments;
pub mod error;
pub mod orchestrator;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use arbitration::{arbitrate, arbitrate_results};
pub use departments::{Department, Evaluator};
pub use error::{EvaluationError, StoreError};
pub use orchestrator::Orchestrator;
pub use stores::{ElasticConfig, ElasticStore, MemoryStore, DEFAULT_INDEX};
pub use traits::PrecedentStore;
pub use types::{
    classify, confidence, ArbitrationVerdict, DepartmentResult, FieldFilter, PrecedentQuery,
    PrecedentRecord, Proposal, QueryOrder, RiskField, Verdict, PRECEDENT_LIMIT,
};
