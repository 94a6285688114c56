// src/dag/resolver.rs

//! Turning the dependency graph into flat execution sequences.
//!
//! Resolution happens in two passes:
//!
//! 1. [`dfs_successors`] walks the graph depth-first from the root and records
//!    the spanning tree it discovers as a [`DependencyMap`].
//! 2. [`linearize`] flattens that tree: every task is emitted after the
//!    subtrees of its children, children in declaration order.
//!
//! Because the walk marks nodes visited globally, each reachable task appears
//! exactly once in the tree, so a single resolution never repeats a name and
//! terminates even when the declarations contain cycles (the edge closing the
//! cycle is simply not part of the tree).

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::dag::graph::DependencyGraph;
use crate::errors::{BuildGraphError, Result};
use crate::types::TaskName;

/// Tree edges of one depth-first walk: parent -> children in discovery order.
///
/// Only tasks with at least one tree child appear as keys.
pub type DependencyMap = HashMap<TaskName, Vec<TaskName>>;

/// Resolves execution sequences against a shared, read-only graph.
#[derive(Debug, Clone, Copy)]
pub struct SequenceResolver<'g> {
    graph: &'g DependencyGraph,
}

impl<'g> SequenceResolver<'g> {
    pub fn new(graph: &'g DependencyGraph) -> Self {
        Self { graph }
    }

    /// Execution sequence for a single task, dependencies first, `root` last.
    ///
    /// An unknown `root` yields an empty sequence.
    pub fn resolve(&self, root: &str) -> Result<Vec<TaskName>> {
        if !self.graph.contains(root) {
            debug!(task = root, "task not in dependency graph; nothing to resolve");
            return Ok(Vec::new());
        }

        let successors = dfs_successors(self.graph, root);
        let sequence = linearize(root, &successors)?;

        debug!(task = root, len = sequence.len(), ?sequence, "resolved execution sequence");
        Ok(sequence)
    }

    /// Concatenation of [`Self::resolve`] for each root, in order.
    ///
    /// No de-duplication happens across roots: a task shared by two roots is
    /// listed once per root.
    pub fn resolve_all<S: AsRef<str>>(&self, roots: &[S]) -> Result<Vec<TaskName>> {
        let mut sequence = Vec::new();
        for root in roots {
            sequence.extend(self.resolve(root.as_ref())?);
        }
        Ok(sequence)
    }
}

/// Depth-first walk from `root` over outgoing edges.
///
/// Returns an empty map when `root` is unknown or has no dependencies.
pub fn dfs_successors(graph: &DependencyGraph, root: &str) -> DependencyMap {
    let mut successors = DependencyMap::new();
    let Some(start) = graph.node_id(root) else {
        return successors;
    };

    let mut visited = HashSet::from([start]);
    let mut stack = vec![(start, graph.successors(start))];

    while let Some((parent, children)) = stack.last_mut() {
        let parent = *parent;
        match children.next() {
            Some(child) => {
                if visited.insert(child) {
                    successors
                        .entry(graph.name_of(parent).to_string())
                        .or_default()
                        .push(graph.name_of(child).to_string());
                    stack.push((child, graph.successors(child)));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    successors
}

/// Flatten a [`DependencyMap`] rooted at `root`.
///
/// For each child of a task, in order: a child that is not a key is emitted
/// directly, a child that is a key has its own flattening emitted. The task
/// itself comes last. A `root` that is not a key yields `[root]`.
///
/// Maps produced by [`dfs_successors`] are trees. A hand-built map in which a
/// task is reachable from itself is rejected with
/// [`BuildGraphError::DependencyCycle`].
pub fn linearize(root: &str, successors: &DependencyMap) -> Result<Vec<TaskName>> {
    let mut sequence = Vec::new();
    let mut on_path: HashSet<&str> = HashSet::from([root]);
    let mut stack = vec![(root, children_of(successors, root))];

    while let Some((name, pending)) = stack.last_mut() {
        let name = *name;
        match pending.next() {
            Some(child) if successors.contains_key(child) => {
                if !on_path.insert(child.as_str()) {
                    return Err(BuildGraphError::DependencyCycle(format!(
                        "task '{child}' depends on itself through '{name}'"
                    )));
                }
                stack.push((child.as_str(), children_of(successors, child)));
            }
            Some(child) => sequence.push(child.clone()),
            None => {
                on_path.remove(name);
                sequence.push(name.to_string());
                stack.pop();
            }
        }
    }

    Ok(sequence)
}

fn children_of<'m>(successors: &'m DependencyMap, name: &str) -> std::slice::Iter<'m, TaskName> {
    successors.get(name).map(Vec::as_slice).unwrap_or(&[]).iter()
}
