#![allow(dead_code)]

use buildgraph::config::{Build, Catalog, Task, TaskSet};
use buildgraph::dag::DependencyGraph;
use buildgraph::session::Session;

/// Builder for `Catalog` to simplify test setup.
///
/// ```ignore
/// let session = CatalogBuilder::new()
///     .task("B", &["X", "A"])
///     .task("A", &[])
///     .build_def("release", &["B"])
///     .session();
/// ```
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::default(),
        }
    }

    pub fn task(mut self, name: &str, deps: &[&str]) -> Self {
        self.catalog.tasks.insert(Task::new(name, to_names(deps)));
        self
    }

    pub fn build_def(mut self, name: &str, tasks: &[&str]) -> Self {
        self.catalog.builds.insert(Build::new(name, to_names(tasks)));
        self
    }

    pub fn tasks(&self) -> &TaskSet {
        &self.catalog.tasks
    }

    pub fn graph(&self) -> DependencyGraph {
        DependencyGraph::from_tasks(&self.catalog.tasks)
    }

    pub fn build(self) -> Catalog {
        self.catalog
    }

    pub fn session(self) -> Session {
        Session::new(self.catalog)
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Task set from `(name, deps)` pairs, in the given order.
pub fn task_set(entries: &[(&str, &[&str])]) -> TaskSet {
    entries
        .iter()
        .map(|(name, deps)| Task::new(*name, to_names(deps)))
        .collect()
}

/// Owned names from string slices.
pub fn to_names(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// The `centaurs` task set used across tests: two levels of dependencies
/// below `map_gray_centaurs`, none of the leaves declared as tasks.
pub fn centaur_tasks() -> CatalogBuilder {
    CatalogBuilder::new()
        .task(
            "map_gray_centaurs",
            &["read_purple_centaurs", "train_silver_centaurs"],
        )
        .task(
            "train_silver_centaurs",
            &["design_black_centaurs", "upgrade_blue_centaurs"],
        )
}
