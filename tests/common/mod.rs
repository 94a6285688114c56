#![allow(dead_code)]

use std::path::PathBuf;

pub use buildgraph_test_utils::init_tracing;

/// Absolute path of a file under `tests/fixtures/`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}
