// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};

use crate::types::EntryKind;

/// Command-line arguments for `buildgraph`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "buildgraph",
    version,
    about = "Inspect task and build definitions and resolve their execution order.",
    long_about = None
)]
pub struct CliArgs {
    /// Print the list of available tasks or builds.
    #[arg(long, value_enum, value_name = "KIND")]
    pub list: Option<ListKind>,

    /// Print information about one task or build.
    ///
    /// Usage: `--get task <NAME>` or `--get build <NAME>`. For a build this
    /// prints its fully resolved task sequence.
    #[arg(long, num_args = 2, value_names = ["KIND", "NAME"])]
    pub get: Option<Vec<String>>,

    /// Directory containing `tasks.yaml` and `builds.yaml`.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Refuse to answer if the task graph contains a dependency cycle.
    #[arg(long)]
    pub strict: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `BUILDGRAPH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Argument of `--list`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    Tasks,
    Builds,
}

/// A parsed `--get <KIND> <NAME>` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub kind: EntryKind,
    pub name: String,
}

impl CliArgs {
    /// Interpret the raw `--get` values.
    pub fn query(&self) -> Result<Option<Query>> {
        let Some(values) = &self.get else {
            return Ok(None);
        };
        match values.as_slice() {
            [kind, name] => {
                let kind = kind.parse::<EntryKind>().map_err(|e| anyhow!(e))?;
                Ok(Some(Query {
                    kind,
                    name: name.clone(),
                }))
            }
            other => Err(anyhow!(
                "--get expects exactly two values (KIND NAME), got {}",
                other.len()
            )),
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
