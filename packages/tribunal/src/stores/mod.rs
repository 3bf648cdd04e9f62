//! Precedent store implementations.

pub mod elastic;
pub mod memory;

pub use elastic::{ElasticConfig, ElasticStore, DEFAULT_INDEX};
pub use memory::MemoryStore;
