// src/config/loader.rs

use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::{debug, info, warn};

use crate::config::model::Catalog;
use crate::config::validate::{builds_from_document, tasks_from_document};
use crate::errors::{BuildGraphError, Result};
use crate::fs::FileSystem;

/// File name of the task definitions inside the working directory.
pub const DEFAULT_TASKS_FILE: &str = "tasks.yaml";

/// File name of the build definitions inside the working directory.
pub const DEFAULT_BUILDS_FILE: &str = "builds.yaml";

/// Read and parse one YAML source.
///
/// A missing file is a hard error ([`BuildGraphError::SourceNotFound`]).
/// A file that exists but is not valid YAML is *not* an error: it yields
/// `Ok(None)` and the structural checks in [`crate::config::validate`]
/// decide what that means.
pub fn read_document(fs: &dyn FileSystem, path: &Path) -> Result<Option<Value>> {
    if !fs.exists(path) {
        return Err(BuildGraphError::SourceNotFound(path.to_path_buf()));
    }

    let contents = fs.read_to_string(path)?;

    match serde_yaml::from_str::<Value>(&contents) {
        Ok(doc) => {
            debug!(path = %path.display(), "parsed YAML document");
            Ok(Some(doc))
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "unparsable YAML; treating document as empty");
            Ok(None)
        }
    }
}

/// Load both sources and turn them into a typed [`Catalog`].
///
/// Both files are read before either is validated, so a missing builds file
/// is reported even when the tasks file is malformed.
pub fn load_catalog(
    fs: &dyn FileSystem,
    tasks_path: impl AsRef<Path>,
    builds_path: impl AsRef<Path>,
) -> Result<Catalog> {
    let tasks_doc = read_document(fs, tasks_path.as_ref())?;
    let builds_doc = read_document(fs, builds_path.as_ref())?;

    let tasks = tasks_from_document(tasks_doc)?;
    let builds = builds_from_document(builds_doc)?;

    info!(
        tasks = tasks.len(),
        builds = builds.len(),
        "loaded task and build definitions"
    );

    Ok(Catalog { tasks, builds })
}

/// Load `tasks.yaml` and `builds.yaml` from `dir`.
pub fn load_from_dir(fs: &dyn FileSystem, dir: impl AsRef<Path>) -> Result<Catalog> {
    let (tasks_path, builds_path) = default_paths(dir);
    load_catalog(fs, tasks_path, builds_path)
}

/// Paths of the two default-named sources inside `dir`.
pub fn default_paths(dir: impl AsRef<Path>) -> (PathBuf, PathBuf) {
    let dir = dir.as_ref();
    (dir.join(DEFAULT_TASKS_FILE), dir.join(DEFAULT_BUILDS_FILE))
}
