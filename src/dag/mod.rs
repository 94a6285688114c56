// src/dag/mod.rs

//! Dependency graph and execution-order resolution.
//!
//! - [`graph`] holds the directed "depends on" graph of task names.
//! - [`resolver`] walks that graph and flattens it into execution sequences.

pub mod graph;
pub mod resolver;

pub use graph::DependencyGraph;
pub use resolver::{DependencyMap, SequenceResolver, dfs_successors, linearize};
