// src/config/validate.rs

use serde::de::DeserializeOwned;
use serde_yaml::Value;

use crate::config::model::{Build, BuildSet, Named, RawBuild, RawTask, Registry, Task, TaskSet};
use crate::errors::{BuildGraphError, Result};

/// Turn a parsed tasks document into a [`TaskSet`].
///
/// The document must be a mapping with a top-level `tasks` key. An
/// unparsable document (`None`) fails the same way as one without the key.
pub fn tasks_from_document(doc: Option<Value>) -> Result<TaskSet> {
    let section = top_level_section(doc, "tasks").ok_or(BuildGraphError::TasksFormat)?;
    registry_from_section::<RawTask, Task>(section, "tasks")
}

/// Turn a parsed builds document into a [`BuildSet`].
pub fn builds_from_document(doc: Option<Value>) -> Result<BuildSet> {
    let section = top_level_section(doc, "builds").ok_or(BuildGraphError::BuildsFormat)?;
    registry_from_section::<RawBuild, Build>(section, "builds")
}

/// Extract the value under `key` from a top-level mapping.
fn top_level_section(doc: Option<Value>, key: &str) -> Option<Value> {
    match doc? {
        Value::Mapping(mut map) => map.remove(key),
        _ => None,
    }
}

fn registry_from_section<R, T>(section: Value, name: &'static str) -> Result<Registry<T>>
where
    R: DeserializeOwned + Into<T>,
    T: Named,
{
    // `tasks:` with nothing after it parses as null.
    if section.is_null() {
        return Ok(Registry::new());
    }

    let raw: Vec<R> =
        serde_yaml::from_value(section).map_err(|e| BuildGraphError::InvalidEntry {
            section: name,
            message: e.to_string(),
        })?;

    Ok(raw.into_iter().map(Into::<T>::into).collect())
}
