use std::str::FromStr;

/// Name of a task, as written in `tasks.yaml`.
pub type TaskName = String;

/// Which kind of catalog entry an info query refers to.
///
/// This is the first value of `--get <KIND> <NAME>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Task,
    Build,
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "task" => Ok(EntryKind::Task),
            "build" => Ok(EntryKind::Build),
            other => Err(format!(
                "invalid entry kind: {other} (expected \"task\" or \"build\")"
            )),
        }
    }
}
