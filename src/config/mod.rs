// src/config/mod.rs

//! Loading task and build definitions.
//!
//! Responsibilities:
//! - Define the typed data model and its on-disk shape (`model.rs`).
//! - Read the YAML sources through a [`crate::fs::FileSystem`] (`loader.rs`).
//! - Check the top-level structure and build typed registries (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_catalog, load_from_dir, read_document};
pub use model::{Build, BuildSet, Catalog, Named, Registry, Task, TaskSet};
pub use validate::{builds_from_document, tasks_from_document};
