// src/config/model.rs

use std::collections::HashMap;

use serde::Deserialize;
use tracing::warn;

use crate::types::TaskName;

/// Anything stored in a [`Registry`] is looked up by name.
pub trait Named {
    fn name(&self) -> &str;
}

/// A named unit of work with its ordered dependency list.
///
/// ```yaml
/// tasks:
///   - name: build_blue_leprechauns
///     dependencies:
///       - bring_purple_leprechauns
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: TaskName,
    pub dependencies: Vec<TaskName>,
}

impl Task {
    pub fn new(name: impl Into<TaskName>, dependencies: Vec<TaskName>) -> Self {
        Self {
            name: name.into(),
            dependencies,
        }
    }
}

impl Named for Task {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A named collection of top-level tasks.
///
/// ```yaml
/// builds:
///   - name: approach_important
///     tasks:
///       - map_gray_centaurs
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Build {
    pub name: String,
    pub tasks: Vec<TaskName>,
}

impl Build {
    pub fn new(name: impl Into<String>, tasks: Vec<TaskName>) -> Self {
        Self {
            name: name.into(),
            tasks,
        }
    }
}

impl Named for Build {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Declaration-ordered collection with lookup by name.
///
/// Re-declaring a name keeps the first position but replaces the entry,
/// so the last definition in a file wins.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

pub type TaskSet = Registry<Task>;
pub type BuildSet = Registry<Build>;

impl<T: Named> Registry<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert an entry, returning the one it replaced (if any).
    pub fn insert(&mut self, entry: T) -> Option<T> {
        match self.index.get(entry.name()) {
            Some(&pos) => {
                warn!(name = entry.name(), "duplicate declaration; last definition wins");
                Some(std::mem::replace(&mut self.entries[pos], entry))
            }
            None => {
                self.index.insert(entry.name().to_string(), self.entries.len());
                self.entries.push(entry);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.index.get(name).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Named> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Named> FromIterator<T> for Registry<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut registry = Self::new();
        for entry in iter {
            registry.insert(entry);
        }
        registry
    }
}

impl<'a, T> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Everything loaded from the two source files.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub tasks: TaskSet,
    pub builds: BuildSet,
}

/// One `tasks:` entry as written on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTask {
    pub name: TaskName,

    /// `dependencies:` may be omitted or left empty (`~`).
    #[serde(default)]
    pub dependencies: Option<Vec<TaskName>>,
}

impl From<RawTask> for Task {
    fn from(raw: RawTask) -> Self {
        Task::new(raw.name, raw.dependencies.unwrap_or_default())
    }
}

/// One `builds:` entry as written on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBuild {
    pub name: String,

    #[serde(default)]
    pub tasks: Option<Vec<TaskName>>,
}

impl From<RawBuild> for Build {
    fn from(raw: RawBuild) -> Self {
        Build::new(raw.name, raw.tasks.unwrap_or_default())
    }
}
