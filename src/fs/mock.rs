// src/fs/mock.rs

use super::FileSystem;
use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Clone)]
pub enum MockEntry {
    File(Vec<u8>),
    Dir,
}

/// In-memory filesystem for loader tests.
///
/// Parent directories of added files exist implicitly. `./a/b` and `a/b`
/// name the same entry.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: Arc<RwLock<HashMap<PathBuf, MockEntry>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        let mut files = HashMap::new();
        // Ensure root exists
        files.insert(PathBuf::new(), MockEntry::Dir);

        Self {
            files: Arc::new(RwLock::new(files)),
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = normalize(path.as_ref());
        let mut files = self.files.write().unwrap_or_else(PoisonError::into_inner);

        for ancestor in path.ancestors().skip(1) {
            files
                .entry(ancestor.to_path_buf())
                .or_insert(MockEntry::Dir);
        }
        files.insert(path, MockEntry::File(content.into()));
    }

    pub fn remove(&self, path: impl AsRef<Path>) {
        let mut files = self.files.write().unwrap_or_else(PoisonError::into_inner);
        files.remove(&normalize(path.as_ref()));
    }

    fn entry(&self, path: &Path) -> Option<MockEntry> {
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
        files.get(&normalize(path)).cloned()
    }
}

fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        match self.entry(path) {
            Some(MockEntry::File(content)) => String::from_utf8(content)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            Some(MockEntry::Dir) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("is a directory: {}", path.display()),
            )),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {}", path.display()),
            )),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.entry(path).is_some()
    }
}
