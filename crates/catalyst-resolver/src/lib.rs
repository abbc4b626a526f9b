//! Dependency resolution engine: version ordering, constraint expressions,
//! the repository contract, the fixpoint resolver, and the resolution graph.

pub mod cache;
pub mod conflict;
pub mod constraint;
pub mod graph;
pub mod repository;
pub mod resolver;
pub mod version;
