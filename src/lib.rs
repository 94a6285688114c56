// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod report;
pub mod session;
pub mod types;

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::cli::{CliArgs, ListKind, Query};
use crate::fs::RealFileSystem;
use crate::session::Session;
use crate::types::EntryKind;

/// High-level entry point used by `main.rs`.
///
/// Loads the two sources from `--dir`, builds the session and answers the
/// requested `--list` / `--get` operations on stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let query = args.query()?;
    let session = Session::load(&RealFileSystem, &args.dir)?;

    if args.strict {
        session.check_acyclic()?;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&mut out, &session, args.list, query.as_ref())?;
    out.flush()?;

    Ok(())
}

/// Answer one invocation against an already loaded session.
///
/// Listing output comes before the info block when both are requested.
pub fn execute(
    out: &mut impl Write,
    session: &Session,
    list: Option<ListKind>,
    query: Option<&Query>,
) -> errors::Result<()> {
    match list {
        Some(ListKind::Tasks) => report::write_task_list(out, session)?,
        Some(ListKind::Builds) => report::write_build_list(out, session)?,
        None => {}
    }

    match query {
        Some(Query {
            kind: EntryKind::Task,
            name,
        }) => report::write_task_info(out, session, name)?,
        Some(Query {
            kind: EntryKind::Build,
            name,
        }) => report::write_build_info(out, session, name)?,
        None => {}
    }

    if list.is_none() && query.is_none() {
        debug!("no --list or --get requested; nothing to print");
    }

    Ok(())
}
