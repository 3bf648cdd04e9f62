//! Trait seams to external collaborators.

pub mod store;

pub use store::PrecedentStore;
