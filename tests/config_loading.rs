mod common;
use crate::common::{fixture, init_tracing};

use std::error::Error;
use std::fs;

use buildgraph::config::loader::{DEFAULT_BUILDS_FILE, DEFAULT_TASKS_FILE, default_paths};
use buildgraph::config::{Task, load_catalog, load_from_dir, read_document, tasks_from_document};
use buildgraph::errors::BuildGraphError;
use buildgraph::fs::RealFileSystem;
use buildgraph::fs::mock::MockFileSystem;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn missing_source_is_an_io_error() {
    init_tracing();

    let err = read_document(&RealFileSystem, std::path::Path::new("file")).unwrap_err();

    assert!(err.is_io());
    assert_eq!(err.to_string(), "File file not found.");
}

#[test]
fn unparsable_yaml_yields_no_document() -> TestResult {
    init_tracing();

    let doc = read_document(&RealFileSystem, &fixture("incorrect.yaml"))?;
    assert!(doc.is_none());
    Ok(())
}

#[test]
fn valid_yaml_yields_a_document() -> TestResult {
    let doc = read_document(&RealFileSystem, &fixture("tasks1.yaml"))?;
    let tasks = tasks_from_document(doc)?;

    assert_eq!(tasks.len(), 1);
    assert_eq!(
        tasks.get("bring_black_leprechauns"),
        Some(&Task::new("bring_black_leprechauns", vec![]))
    );
    Ok(())
}

#[test]
fn unparsable_tasks_document_is_a_format_error() {
    init_tracing();

    let result = load_catalog(
        &RealFileSystem,
        fixture("incorrect.yaml"),
        fixture("builds2.yaml"),
    );

    assert!(matches!(result, Err(BuildGraphError::TasksFormat)));
}

#[test]
fn missing_tasks_key_is_reported_before_builds() {
    let result = load_catalog(
        &RealFileSystem,
        fixture("not_tasks.yaml"),
        fixture("not_builds.yaml"),
    );

    match result {
        Err(err @ BuildGraphError::TasksFormat) => {
            assert_eq!(err.to_string(), "Incorrect tasks format.");
        }
        other => panic!("expected TasksFormat, got {other:?}"),
    }
}

#[test]
fn missing_builds_key_is_a_format_error() {
    let result = load_catalog(
        &RealFileSystem,
        fixture("tasks1.yaml"),
        fixture("not_builds.yaml"),
    );

    match result {
        Err(err @ BuildGraphError::BuildsFormat) => {
            assert_eq!(err.to_string(), "Incorrect builds format.");
        }
        other => panic!("expected BuildsFormat, got {other:?}"),
    }
}

#[test]
fn missing_builds_file_wins_over_malformed_tasks() {
    let result = load_catalog(
        &RealFileSystem,
        fixture("not_tasks.yaml"),
        fixture("no_such_builds.yaml"),
    );

    assert!(matches!(result, Err(BuildGraphError::SourceNotFound(_))));
}

#[test]
fn loads_tasks_and_builds() -> TestResult {
    init_tracing();

    let catalog = load_catalog(
        &RealFileSystem,
        fixture("tasks1.yaml"),
        fixture("builds2.yaml"),
    )?;

    assert_eq!(
        catalog.tasks.names().collect::<Vec<_>>(),
        vec!["bring_black_leprechauns"]
    );
    let build = catalog.builds.get("approach_important").ok_or("missing build")?;
    assert_eq!(build.tasks, vec!["map_gray_centaurs"]);
    Ok(())
}

#[test]
fn declaration_order_is_preserved() -> TestResult {
    let catalog = load_catalog(
        &RealFileSystem,
        fixture("tasks2.yaml"),
        fixture("builds1.yaml"),
    )?;

    assert_eq!(
        catalog.builds.names().collect::<Vec<_>>(),
        vec!["approach_important", "forge_golems", "empty_build", "ghost_build"]
    );
    assert_eq!(catalog.tasks.names().next(), Some("bring_purple_leprechauns"));
    assert_eq!(catalog.tasks.names().last(), Some("write_white_golems"));
    Ok(())
}

#[test]
fn loads_default_named_files_from_a_directory() -> TestResult {
    init_tracing();

    let dir = TempDir::new()?;
    fs::write(
        dir.path().join(DEFAULT_TASKS_FILE),
        "tasks:\n  - name: compile\n    dependencies:\n      - fetch\n",
    )?;
    fs::write(
        dir.path().join(DEFAULT_BUILDS_FILE),
        "builds:\n  - name: release\n    tasks: [compile]\n",
    )?;

    let catalog = load_from_dir(&RealFileSystem, dir.path())?;

    assert_eq!(catalog.tasks.get("compile").map(|t| t.dependencies.clone()), Some(vec!["fetch".to_string()]));
    assert!(catalog.builds.contains("release"));
    Ok(())
}

#[test]
fn missing_default_file_in_directory() -> TestResult {
    let dir = TempDir::new()?;
    fs::write(dir.path().join(DEFAULT_TASKS_FILE), "tasks: []\n")?;

    match load_from_dir(&RealFileSystem, dir.path()) {
        Err(BuildGraphError::SourceNotFound(path)) => {
            assert!(path.ends_with(DEFAULT_BUILDS_FILE));
        }
        other => panic!("expected SourceNotFound, got {other:?}"),
    }
    Ok(())
}

#[test]
fn null_sections_and_dependencies_are_empty() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file(
        "project/tasks.yaml",
        "tasks:\n  - name: a\n    dependencies:\n  - name: b\n",
    );
    fs.add_file("project/builds.yaml", "builds:\n");

    let catalog = load_from_dir(&fs, "project")?;

    assert_eq!(catalog.tasks.len(), 2);
    assert!(catalog.tasks.get("a").is_some_and(|t| t.dependencies.is_empty()));
    assert!(catalog.tasks.get("b").is_some_and(|t| t.dependencies.is_empty()));
    assert!(catalog.builds.is_empty());
    Ok(())
}

#[test]
fn entry_without_name_is_invalid() {
    let fs = MockFileSystem::new();
    fs.add_file("tasks.yaml", "tasks:\n  - dependencies: [a]\n");
    fs.add_file("builds.yaml", "builds: []\n");

    let (tasks, builds) = default_paths(".");
    match load_catalog(&fs, tasks, builds) {
        Err(BuildGraphError::InvalidEntry { section, .. }) => assert_eq!(section, "tasks"),
        other => panic!("expected InvalidEntry, got {other:?}"),
    }
}

#[test]
fn non_mapping_document_is_a_format_error() {
    let fs = MockFileSystem::new();
    fs.add_file("tasks.yaml", "tasks: []\n");
    fs.add_file("builds.yaml", "- just\n- a list\n");

    let result = load_from_dir(&fs, ".");

    assert!(matches!(result, Err(BuildGraphError::BuildsFormat)));
}

#[test]
fn redeclared_task_keeps_position_and_last_definition() -> TestResult {
    init_tracing();

    let fs = MockFileSystem::new();
    fs.add_file(
        "tasks.yaml",
        "tasks:\n  - name: a\n    dependencies: [x]\n  - name: b\n  - name: a\n    dependencies: [y]\n",
    );
    fs.add_file("builds.yaml", "builds: []\n");

    let catalog = load_from_dir(&fs, ".")?;

    assert_eq!(catalog.tasks.names().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(
        catalog.tasks.get("a").map(|t| t.dependencies.clone()),
        Some(vec!["y".to_string()])
    );
    Ok(())
}

#[test]
fn removed_mock_file_is_not_found() {
    let fs = MockFileSystem::new();
    fs.add_file("tasks.yaml", "tasks: []\n");
    fs.add_file("builds.yaml", "builds: []\n");
    fs.remove("builds.yaml");

    assert!(matches!(
        load_from_dir(&fs, "."),
        Err(BuildGraphError::SourceNotFound(_))
    ));
}
