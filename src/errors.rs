// src/errors.rs

//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildGraphError {
    /// A required source file (`tasks.yaml` / `builds.yaml`) does not exist.
    #[error("File {} not found.", .0.display())]
    SourceNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The tasks document has no top-level `tasks` collection.
    #[error("Incorrect tasks format.")]
    TasksFormat,

    /// The builds document has no top-level `builds` collection.
    #[error("Incorrect builds format.")]
    BuildsFormat,

    #[error("invalid entry in `{section}`: {message}")]
    InvalidEntry {
        section: &'static str,
        message: String,
    },

    #[error("Cycle detected in dependency graph: {0}")]
    DependencyCycle(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BuildGraphError {
    /// Whether this error belongs to the I/O family (missing or unreadable source).
    pub fn is_io(&self) -> bool {
        matches!(self, Self::SourceNotFound(_) | Self::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, BuildGraphError>;
