// src/session.rs

//! Explicit context shared by all CLI operations.

use std::path::Path;

use tracing::{debug, warn};

use crate::config::loader::load_from_dir;
use crate::config::model::{Build, BuildSet, Catalog, Task, TaskSet};
use crate::dag::{DependencyGraph, SequenceResolver};
use crate::errors::{BuildGraphError, Result};
use crate::fs::FileSystem;
use crate::types::TaskName;

/// Loaded task and build definitions plus the dependency graph built from them.
///
/// The graph is built once, from the full task set, when the session is
/// created; resolutions only read it.
#[derive(Debug, Clone)]
pub struct Session {
    tasks: TaskSet,
    builds: BuildSet,
    graph: DependencyGraph,
}

/// A build together with its resolved execution sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo<'s> {
    pub name: &'s str,
    pub sequence: Vec<TaskName>,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        let graph = DependencyGraph::from_tasks(&catalog.tasks);
        if let Some(task) = graph.find_cycle() {
            warn!(task, "task declarations contain a dependency cycle");
        }

        Self {
            tasks: catalog.tasks,
            builds: catalog.builds,
            graph,
        }
    }

    /// Load `tasks.yaml` / `builds.yaml` from `dir` and build the graph.
    pub fn load(fs: &dyn FileSystem, dir: impl AsRef<Path>) -> Result<Self> {
        let catalog = load_from_dir(fs, dir)?;
        Ok(Self::new(catalog))
    }

    pub fn tasks(&self) -> &TaskSet {
        &self.tasks
    }

    pub fn builds(&self) -> &BuildSet {
        &self.builds
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    pub fn task(&self, name: &str) -> Option<&Task> {
        self.tasks.get(name)
    }

    pub fn build(&self, name: &str) -> Option<&Build> {
        self.builds.get(name)
    }

    /// Execution sequence for one task; empty if the task is unknown.
    pub fn resolve_task(&self, name: &str) -> Result<Vec<TaskName>> {
        SequenceResolver::new(&self.graph).resolve(name)
    }

    /// Concatenated execution sequence of every task listed by `build`.
    pub fn resolve_build(&self, build: &Build) -> Result<Vec<TaskName>> {
        debug!(build = %build.name, tasks = ?build.tasks, "resolving build");
        SequenceResolver::new(&self.graph).resolve_all(&build.tasks)
    }

    /// Look up a build by name and resolve it. `Ok(None)` if it does not exist.
    pub fn build_info(&self, name: &str) -> Result<Option<BuildInfo<'_>>> {
        let Some(build) = self.builds.get(name) else {
            return Ok(None);
        };
        let sequence = self.resolve_build(build)?;
        Ok(Some(BuildInfo {
            name: &build.name,
            sequence,
        }))
    }

    /// Fail if any task is part of a dependency cycle.
    pub fn check_acyclic(&self) -> Result<()> {
        match self.graph.find_cycle() {
            Some(task) => Err(BuildGraphError::DependencyCycle(format!(
                "cycle detected in task graph involving task '{task}'"
            ))),
            None => Ok(()),
        }
    }
}
