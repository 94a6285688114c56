// src/dag/graph.rs

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::config::model::TaskSet;
use crate::types::TaskName;

/// Dense node handle; index into `DependencyGraph::names`.
pub(crate) type NodeId = usize;

/// Directed graph of task names. An edge `A -> B` means "A depends on B".
///
/// Task names are interned so the underlying [`DiGraphMap`] can use `Copy`
/// node weights. Outgoing edges keep the order in which they were added,
/// which is the declaration order of each task's dependency list.
///
/// Cycles and self-references are stored as given; see [`Self::find_cycle`].
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    graph: DiGraphMap<NodeId, ()>,
    names: Vec<TaskName>,
    ids: HashMap<TaskName, NodeId>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fresh graph from a task set.
    pub fn from_tasks(tasks: &TaskSet) -> Self {
        let mut graph = Self::new();
        graph.extend_from_tasks(tasks);
        graph
    }

    /// Add every task of `tasks` to this graph.
    ///
    /// Additive: existing nodes and edges are kept. Build a new graph with
    /// [`Self::from_tasks`] when a clean graph is needed.
    pub fn extend_from_tasks(&mut self, tasks: &TaskSet) {
        for task in tasks {
            self.add_task(&task.name, &task.dependencies);
        }
        debug!(
            nodes = self.node_count(),
            edges = self.edge_count(),
            "dependency graph populated"
        );
    }

    /// Add one task and an edge to each of its dependencies.
    ///
    /// A task without dependencies becomes an isolated node. Dependencies that
    /// were never declared as tasks become leaf nodes.
    pub fn add_task(&mut self, name: &str, dependencies: &[TaskName]) {
        let from = self.intern(name);
        if dependencies.is_empty() {
            self.graph.add_node(from);
            return;
        }
        for dep in dependencies {
            let to = self.intern(dep);
            self.graph.add_edge(from, to, ());
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.node_id(name).is_some()
    }

    /// Whether `task` directly depends on `dependency`.
    pub fn has_edge(&self, task: &str, dependency: &str) -> bool {
        match (self.node_id(task), self.node_id(dependency)) {
            (Some(a), Some(b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    /// All task names, in the order they first appeared.
    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.graph.nodes().map(|id| self.name_of(id))
    }

    /// Direct dependencies of `name`, in declaration order.
    pub fn dependencies_of(&self, name: &str) -> Vec<&str> {
        match self.node_id(name) {
            Some(id) => self.successors(id).map(|dep| self.name_of(dep)).collect(),
            None => Vec::new(),
        }
    }

    /// Tasks that list `name` as a dependency.
    pub fn dependents_of(&self, name: &str) -> Vec<&str> {
        match self.node_id(name) {
            Some(id) => self
                .graph
                .neighbors_directed(id, Direction::Incoming)
                .map(|task| self.name_of(task))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Name of some task that lies on a dependency cycle, if any.
    ///
    /// Self-references count as cycles.
    pub fn find_cycle(&self) -> Option<&str> {
        if let Some(id) = self.graph.nodes().find(|&id| self.graph.contains_edge(id, id)) {
            return Some(self.name_of(id));
        }
        toposort(&self.graph, None)
            .err()
            .map(|cycle| self.name_of(cycle.node_id()))
    }

    pub(crate) fn node_id(&self, name: &str) -> Option<NodeId> {
        self.ids.get(name).copied()
    }

    pub(crate) fn name_of(&self, id: NodeId) -> &str {
        &self.names[id]
    }

    pub(crate) fn successors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.neighbors(id)
    }

    fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }
}
