//! Domain data types: proposals, precedents, queries, verdicts.

pub mod precedent;
pub mod proposal;
pub mod query;
pub mod verdict;

pub use precedent::{PrecedentRecord, RiskField};
pub use proposal::Proposal;
pub use query::{FieldFilter, PrecedentQuery, QueryOrder, PRECEDENT_LIMIT};
pub use verdict::{classify, confidence, ArbitrationVerdict, DepartmentResult, Verdict};
