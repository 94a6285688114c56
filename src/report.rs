// src/report.rs

//! Human-readable output for the CLI operations.
//!
//! Everything is written to a caller-supplied [`Write`] so the binary can
//! target stdout and tests can capture into a buffer.

use std::io::Write;

use crate::errors::Result;
use crate::session::Session;

pub fn write_task_list(out: &mut impl Write, session: &Session) -> Result<()> {
    writeln!(out, "List of available tasks:")?;
    for name in session.tasks().names() {
        writeln!(out, "* {name}")?;
    }
    Ok(())
}

pub fn write_build_list(out: &mut impl Write, session: &Session) -> Result<()> {
    writeln!(out, "List of available builds:")?;
    for name in session.builds().names() {
        writeln!(out, "* {name}")?;
    }
    Ok(())
}

/// Name and declared dependencies of one task.
pub fn write_task_info(out: &mut impl Write, session: &Session, name: &str) -> Result<()> {
    let Some(task) = session.task(name) else {
        writeln!(out, "Task {name} not found.")?;
        return Ok(());
    };

    let dependencies = if task.dependencies.is_empty() {
        "[]".to_string()
    } else {
        task.dependencies.join(", ")
    };

    writeln!(out, "Task info:")?;
    writeln!(out, "* name: {}", task.name)?;
    writeln!(out, "* dependencies: {dependencies}")?;
    Ok(())
}

/// Name and fully resolved task sequence of one build.
pub fn write_build_info(out: &mut impl Write, session: &Session, name: &str) -> Result<()> {
    let Some(info) = session.build_info(name)? else {
        writeln!(out, "Build {name} not found.")?;
        return Ok(());
    };

    writeln!(out, "Build info:")?;
    writeln!(out, "* name: {}", info.name)?;
    writeln!(out, "* tasks: {}", info.sequence.join(", "))?;
    Ok(())
}
